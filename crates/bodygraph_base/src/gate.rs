//! The 64 gates and their order around the ecliptic.
//!
//! The wheel starts at 358.25° (28°15' Pisces) and each gate spans
//! 360/64 = 5.625°, split into six lines of 0.9375°.

/// Tropical longitude where the first gate of [`GATE_SEQUENCE`] begins.
pub const HD_START_DEG: f64 = 358.25;

/// Width of one gate in degrees.
pub const GATE_SPAN_DEG: f64 = 360.0 / 64.0;

/// Width of one line in degrees.
pub const LINE_SPAN_DEG: f64 = GATE_SPAN_DEG / 6.0;

/// Gate numbers in ecliptic order starting at [`HD_START_DEG`].
#[rustfmt::skip]
pub const GATE_SEQUENCE: [u8; 64] = [
    25, 17, 21, 51, 42,  3,
    27, 24,  2, 23,  8, 20,
    16, 35, 45, 12, 15, 52,
    39, 53, 62, 56, 31, 33,
     7,  4, 29, 59, 40, 64,
    47,  6, 46, 18, 48, 57,
    32, 50, 28, 44,  1, 43,
    14, 34,  9,  5, 26, 11,
    10, 58, 38, 54, 61, 60,
    41, 19, 13, 49, 30, 55,
    37, 63, 22, 36,
];

/// Gate names, indexed by `gate - 1`.
const GATE_NAMES: [&str; 64] = [
    "The Creative",
    "The Receptive",
    "Ordering",
    "Formulization",
    "Fixed Rhythms",
    "Friction",
    "The Role of the Self",
    "Holding Together",
    "Focus",
    "Behavior of the Self",
    "Ideas",
    "Caution",
    "The Listener",
    "Power Skills",
    "Extremes",
    "Skills",
    "Opinion",
    "Correction",
    "Wanting",
    "Now",
    "The Hunter/Huntress",
    "Openness",
    "Assimilation",
    "Rationalization",
    "Spirit of the Self",
    "The Egoist",
    "Caring",
    "The Game Player",
    "Saying Yes",
    "Feelings",
    "Influence",
    "Continuity",
    "Privacy",
    "Power",
    "Change",
    "Crisis",
    "Friendship",
    "Opposition",
    "Provocation",
    "Aloneness",
    "Contraction",
    "Growth",
    "Insight",
    "Coming to Meet",
    "Gathering Together",
    "Pushing Upward",
    "Realization",
    "Depth",
    "Principles",
    "Values",
    "Shock",
    "Stillness",
    "Development",
    "Ambition",
    "Spirit",
    "Stimulation",
    "Intuitive Clarity",
    "Vitality",
    "Sexuality",
    "Limitation",
    "Mystery",
    "Detail",
    "Doubt",
    "Confusion",
];

/// True for gate numbers 1..=64.
pub const fn is_valid_gate(gate: u8) -> bool {
    gate >= 1 && gate <= 64
}

/// Name of a gate, or `None` outside 1..=64.
pub fn gate_name(gate: u8) -> Option<&'static str> {
    if is_valid_gate(gate) {
        Some(GATE_NAMES[(gate - 1) as usize])
    } else {
        None
    }
}

/// 0-based position of `gate` in [`GATE_SEQUENCE`].
pub fn gate_ordinal(gate: u8) -> Option<usize> {
    GATE_SEQUENCE.iter().position(|&g| g == gate)
}
