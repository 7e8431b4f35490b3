//! Bodygraph tables and derivation rules.
//!
//! This crate provides:
//! - The 64-gate wheel and gate names ([`gate`])
//! - Longitude → gate/line mapping ([`mapper`])
//! - The nine centers and 34 channels ([`center`], [`channel`])
//! - Type, authority and profile derivation ([`derive`])
//!
//! Everything here is pure: no ephemeris, no time scales.

pub mod center;
pub mod channel;
pub mod derive;
pub mod error;
pub mod gate;
pub mod mapper;

pub use center::{ALL_CENTERS, Center, MOTOR_CENTERS, center_of_gate};
pub use channel::{CHANNELS, Channel, GateSet, active_channels};
pub use derive::{
    AUTHORITY_PRIORITY, Authority, CenterSet, HdType, Profile, defined_centers,
    determine_authority, determine_type, has_motor_to_throat, undefined_centers,
};
pub use error::BaseError;
pub use gate::{
    GATE_SEQUENCE, GATE_SPAN_DEG, HD_START_DEG, LINE_SPAN_DEG, gate_name, gate_ordinal,
    is_valid_gate,
};
pub use mapper::{GateLine, degree_to_gate_line, gate_line_from_longitude, gate_start_deg};
