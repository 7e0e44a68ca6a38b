use core::fmt;
use core::num::NonZeroU32;

/// Compact, stable identifier for a declared port.
///
/// - `u32` keeps port handles small enough to copy freely
/// - `NonZero` enables `Option<Id>` to be pointer-optimized
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(NonZeroU32);

impl Id {
    /// Create an Id from a 0-based slot index by storing index+1.
    pub fn from_index(index: usize) -> Self {
        let raw = u32::try_from(index).expect("port index fits in u32") + 1;
        // index+1 must be nonzero
        Self(NonZeroU32::new(raw).expect("index+1 is nonzero"))
    }

    /// Recover the 0-based slot index.
    pub fn index(self) -> usize {
        self.0.get() as usize - 1
    }
}

impl fmt::Debug for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.index())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index())
    }
}

/// Domain-specific ID aliases for clarity (no runtime cost).
pub type InputId = Id;
pub type OutputId = Id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_round_trip_index() {
        for i in [0_usize, 1, 2, 42, 10_000] {
            let id = Id::from_index(i);
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn option_id_is_small() {
        // The NonZero niche: Option<Id> costs no extra space.
        assert_eq!(
            core::mem::size_of::<Id>(),
            core::mem::size_of::<Option<Id>>()
        );
    }
}
