//! The nine centers and their gates.

use serde::{Deserialize, Serialize};

/// One of the nine energy centers.
///
/// Variants are declared in alphabetical order of their display names, so
/// the derived `Ord` (and any `BTreeSet<Center>`) sorts by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Center {
    Ajna,
    Head,
    Heart,
    Root,
    Sacral,
    #[serde(rename = "Self")]
    SelfCenter,
    #[serde(rename = "Solar Plexus")]
    SolarPlexus,
    Spleen,
    Throat,
}

/// All nine centers in name order.
pub const ALL_CENTERS: [Center; 9] = [
    Center::Ajna,
    Center::Head,
    Center::Heart,
    Center::Root,
    Center::Sacral,
    Center::SelfCenter,
    Center::SolarPlexus,
    Center::Spleen,
    Center::Throat,
];

/// Centers that carry motor energy.
pub const MOTOR_CENTERS: [Center; 4] = [
    Center::Sacral,
    Center::Heart,
    Center::SolarPlexus,
    Center::Root,
];

impl Center {
    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ajna => "Ajna",
            Self::Head => "Head",
            Self::Heart => "Heart",
            Self::Root => "Root",
            Self::Sacral => "Sacral",
            Self::SelfCenter => "Self",
            Self::SolarPlexus => "Solar Plexus",
            Self::Spleen => "Spleen",
            Self::Throat => "Throat",
        }
    }

    /// Gates that belong to this center, ascending.
    ///
    /// Gate 28 is a Spleen gate (it opens the Spleen end of channel 28-38),
    /// so the nine lists partition 1..=64.
    pub const fn gates(self) -> &'static [u8] {
        match self {
            Self::Head => &[61, 63, 64],
            Self::Ajna => &[4, 11, 17, 24, 43, 47],
            Self::Throat => &[8, 12, 16, 20, 23, 31, 33, 35, 45, 56, 62],
            Self::SelfCenter => &[1, 2, 7, 10, 13, 15, 25, 46],
            Self::Sacral => &[3, 5, 9, 14, 27, 29, 34, 42, 59],
            Self::Root => &[19, 38, 39, 41, 52, 53, 54, 58, 60],
            Self::Spleen => &[18, 28, 32, 44, 48, 50, 57],
            Self::SolarPlexus => &[6, 22, 30, 36, 37, 49, 55],
            Self::Heart => &[21, 26, 40, 51],
        }
    }

    /// True for Sacral, Heart, Solar Plexus and Root.
    pub const fn is_motor(self) -> bool {
        matches!(
            self,
            Self::Sacral | Self::Heart | Self::SolarPlexus | Self::Root
        )
    }
}

impl std::fmt::Display for Center {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The center that owns `gate`, or `None` outside 1..=64.
pub fn center_of_gate(gate: u8) -> Option<Center> {
    ALL_CENTERS
        .iter()
        .copied()
        .find(|c| c.gates().contains(&gate))
}
