//! Chart derivation: defined centers, type, authority and profile.
//!
//! Centers are defined only through active channels. A gate on its own
//! never defines anything.

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

use crate::center::{ALL_CENTERS, Center, MOTOR_CENTERS};
use crate::channel::{CHANNELS, GateSet};

/// Set of centers, iterated in name order.
pub type CenterSet = BTreeSet<Center>;

/// Centers joined by at least one active channel.
pub fn defined_centers(gates: &GateSet) -> CenterSet {
    let mut defined = CenterSet::new();
    for channel in CHANNELS.iter().filter(|c| c.is_active(gates)) {
        defined.insert(channel.centers.0);
        defined.insert(channel.centers.1);
    }
    defined
}

/// Complement of `defined` among the nine centers.
pub fn undefined_centers(defined: &CenterSet) -> CenterSet {
    ALL_CENTERS
        .iter()
        .copied()
        .filter(|c| !defined.contains(c))
        .collect()
}

/// The five types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HdType {
    Reflector,
    Generator,
    #[serde(rename = "Manifesting Generator")]
    ManifestingGenerator,
    Manifestor,
    Projector,
}

impl HdType {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reflector => "Reflector",
            Self::Generator => "Generator",
            Self::ManifestingGenerator => "Manifesting Generator",
            Self::Manifestor => "Manifestor",
            Self::Projector => "Projector",
        }
    }
}

impl std::fmt::Display for HdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An active channel runs directly from a motor center to the Throat.
pub fn has_motor_to_throat(gates: &GateSet) -> bool {
    CHANNELS.iter().any(|c| {
        c.is_active(gates) && MOTOR_CENTERS.iter().any(|&m| c.connects(m, Center::Throat))
    })
}

/// Type from the defined centers and the active gates.
///
/// No defined center is a Reflector. Otherwise a defined Sacral makes a
/// Generator, or a Manifesting Generator when a motor reaches the Throat;
/// without the Sacral a motor-to-Throat channel makes a Manifestor and
/// anything else is a Projector.
pub fn determine_type(defined: &CenterSet, gates: &GateSet) -> HdType {
    if defined.is_empty() {
        return HdType::Reflector;
    }
    let sacral = defined.contains(&Center::Sacral);
    let motor_to_throat = defined.contains(&Center::Throat) && has_motor_to_throat(gates);
    match (sacral, motor_to_throat) {
        (true, true) => HdType::ManifestingGenerator,
        (true, false) => HdType::Generator,
        (false, true) => HdType::Manifestor,
        (false, false) => HdType::Projector,
    }
}

/// Inner authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    Ego,
    #[serde(rename = "Self-Projected")]
    SelfProjected,
    #[serde(rename = "Mental/Outer")]
    Mental,
}

impl Authority {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Emotional => "Emotional",
            Self::Sacral => "Sacral",
            Self::Splenic => "Splenic",
            Self::Ego => "Ego",
            Self::SelfProjected => "Self-Projected",
            Self::Mental => "Mental/Outer",
        }
    }
}

impl std::fmt::Display for Authority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Authority lookup, highest priority first.
pub const AUTHORITY_PRIORITY: [(Center, Authority); 5] = [
    (Center::SolarPlexus, Authority::Emotional),
    (Center::Sacral, Authority::Sacral),
    (Center::Spleen, Authority::Splenic),
    (Center::Heart, Authority::Ego),
    (Center::SelfCenter, Authority::SelfProjected),
];

/// First entry of [`AUTHORITY_PRIORITY`] whose center is defined, else
/// [`Authority::Mental`].
pub fn determine_authority(defined: &CenterSet) -> Authority {
    AUTHORITY_PRIORITY
        .iter()
        .find(|(center, _)| defined.contains(center))
        .map_or(Authority::Mental, |&(_, authority)| authority)
}

/// Personality Sun line over design Sun line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Profile {
    pub personality_line: u8,
    pub design_line: u8,
}

impl Profile {
    pub const fn new(personality_line: u8, design_line: u8) -> Self {
        Self {
            personality_line,
            design_line,
        }
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.personality_line, self.design_line)
    }
}

impl Serialize for Profile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
