//! Collision layers used to filter ray queries.

use serde::{Deserialize, Serialize};

/// Layer bitset attached to every brush and every ray query.
///
/// A ray only considers brushes whose layers intersect the query mask, so a
/// controller can walk through triggers while still stopping on solids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct CollisionMask(pub u32);

impl CollisionMask {
    /// Matches nothing.
    pub const NONE: Self = Self(0);

    /// Solid level geometry - floors, walls, ramps.
    pub const SOLID: Self = Self(1 << 0);

    /// Platforms and other level props that block movement.
    pub const PLATFORM: Self = Self(1 << 1);

    /// Invisible geometry that only blocks players.
    pub const PLAYER_CLIP: Self = Self(1 << 2);

    /// Trigger volume - never blocks movement.
    pub const TRIGGER: Self = Self(1 << 3);

    /// Matches every layer.
    pub const ALL: Self = Self(u32::MAX);

    /// Standard mask for player movement rays.
    pub const MASK_PLAYER_SOLID: Self =
        Self(Self::SOLID.0 | Self::PLATFORM.0 | Self::PLAYER_CLIP.0);

    /// Check if this mask contains every layer in `other`.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any layer is shared.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Combine two masks.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl std::ops::BitOr for CollisionMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for CollisionMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
