//! Independently togglable shading features.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Bit-set of trace features.
///
/// Set once on the engine before rendering; read-only while tracing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraceFlags(u8);

impl TraceFlags {
    pub const AMBIENT: TraceFlags = TraceFlags(1 << 0);
    pub const DIFFUSE_AND_SPECULAR: TraceFlags = TraceFlags(1 << 1);
    pub const SHADOW: TraceFlags = TraceFlags(1 << 2);
    pub const REFLECTION: TraceFlags = TraceFlags(1 << 3);
    pub const REFRACTION: TraceFlags = TraceFlags(1 << 4);

    pub const ALL: TraceFlags = TraceFlags(0b1_1111);

    const NAMES: [(TraceFlags, &'static str); 5] = [
        (Self::AMBIENT, "AMBIENT"),
        (Self::DIFFUSE_AND_SPECULAR, "DIFFUSE_AND_SPECULAR"),
        (Self::SHADOW, "SHADOW"),
        (Self::REFLECTION, "REFLECTION"),
        (Self::REFRACTION, "REFRACTION"),
    ];

    /// No features at all.
    pub const fn empty() -> Self {
        TraceFlags(0)
    }

    /// True if every feature in `other` is enabled.
    #[inline]
    pub const fn contains(self, other: TraceFlags) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: TraceFlags) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: TraceFlags) {
        self.0 &= !other.0;
    }

    /// Copy of `self` with `other` removed.
    pub fn without(mut self, other: TraceFlags) -> Self {
        self.remove(other);
        self
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for TraceFlags {
    /// Ambient only: no lighting, non-recursive.
    fn default() -> Self {
        TraceFlags::AMBIENT
    }
}

impl BitOr for TraceFlags {
    type Output = TraceFlags;

    fn bitor(self, rhs: TraceFlags) -> TraceFlags {
        TraceFlags(self.0 | rhs.0)
    }
}

impl BitOrAssign for TraceFlags {
    fn bitor_assign(&mut self, rhs: TraceFlags) {
        self.insert(rhs);
    }
}

impl fmt::Debug for TraceFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("TraceFlags(empty)");
        }
        let names: Vec<&str> = Self::NAMES
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "TraceFlags({})", names.join(" | "))
    }
}
