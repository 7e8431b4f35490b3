//! The 34 channels joining pairs of gates (and so pairs of centers).

use std::collections::BTreeSet;

use serde::Serialize;

use crate::center::Center;
use crate::center::Center::{
    Ajna, Head, Heart, Root, Sacral, SelfCenter, SolarPlexus, Spleen, Throat,
};

/// Set of active gate numbers.
pub type GateSet = BTreeSet<u8>;

/// A channel: two gates whose joint activation defines both their centers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Channel {
    /// Gate pair, lower gate first.
    pub gates: (u8, u8),
    /// Centers at either end, in the same order as `gates`.
    pub centers: (Center, Center),
}

const fn ch(a: u8, b: u8, ca: Center, cb: Center) -> Channel {
    Channel {
        gates: (a, b),
        centers: (ca, cb),
    }
}

/// All channels, ordered by gate pair.
pub const CHANNELS: [Channel; 34] = [
    ch(1, 8, SelfCenter, Throat),
    ch(2, 14, SelfCenter, Sacral),
    ch(3, 60, Sacral, Root),
    ch(4, 63, Ajna, Head),
    ch(5, 15, Sacral, SelfCenter),
    ch(6, 59, SolarPlexus, Sacral),
    ch(7, 31, SelfCenter, Throat),
    ch(9, 52, Sacral, Root),
    ch(10, 20, SelfCenter, Throat),
    ch(11, 56, Ajna, Throat),
    ch(12, 22, Throat, SolarPlexus),
    ch(13, 33, SelfCenter, Throat),
    ch(16, 48, Throat, Spleen),
    ch(17, 62, Ajna, Throat),
    ch(18, 58, Spleen, Root),
    ch(19, 49, Root, SolarPlexus),
    ch(20, 34, Throat, Sacral),
    ch(20, 57, Throat, Spleen),
    ch(21, 45, Heart, Throat),
    ch(23, 43, Throat, Ajna),
    ch(24, 61, Ajna, Head),
    ch(25, 51, SelfCenter, Heart),
    ch(26, 44, Heart, Spleen),
    ch(27, 50, Sacral, Spleen),
    ch(28, 38, Spleen, Root),
    ch(29, 46, Sacral, SelfCenter),
    ch(30, 41, SolarPlexus, Root),
    ch(32, 54, Spleen, Root),
    ch(34, 57, Sacral, Spleen),
    ch(35, 36, Throat, SolarPlexus),
    ch(37, 40, SolarPlexus, Heart),
    ch(39, 55, Root, SolarPlexus),
    ch(42, 53, Sacral, Root),
    ch(47, 64, Ajna, Head),
];

impl Channel {
    /// Both gates present in `gates`.
    pub fn is_active(&self, gates: &GateSet) -> bool {
        gates.contains(&self.gates.0) && gates.contains(&self.gates.1)
    }

    /// True if this channel joins `a` and `b`, in either direction.
    pub fn connects(&self, a: Center, b: Center) -> bool {
        self.centers == (a, b) || self.centers == (b, a)
    }

    /// Hyphenated gate pair, e.g. `"20-34"`.
    pub fn label(&self) -> String {
        format!("{}-{}", self.gates.0, self.gates.1)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} ({} to {})",
            self.gates.0, self.gates.1, self.centers.0, self.centers.1
        )
    }
}

/// Channels whose two gates are both in `gates`, in table order.
pub fn active_channels(gates: &GateSet) -> Vec<Channel> {
    CHANNELS.iter().filter(|c| c.is_active(gates)).copied().collect()
}
