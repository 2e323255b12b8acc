use crate::spatial::coordinates::{dot_count, is_on_grid};
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size membership set over the dots of one grid
///
/// Uses the zero-based row-major index of each dot. Indices that do not name
/// a dot are never members, so callers can feed raw host input straight in.
#[derive(Clone, PartialEq, Eq)]
pub struct DotBitset {
    bits: BitVec,
    grid_size: usize,
}

impl DotBitset {
    /// Create an empty set for a `grid_size` × `grid_size` grid
    pub fn new(grid_size: usize) -> Self {
        Self {
            bits: bitvec![0; dot_count(grid_size)],
            grid_size,
        }
    }

    /// Build a set from a pattern, ignoring off-grid indices
    pub fn from_pattern(pattern: &[i64], grid_size: usize) -> Self {
        let mut bitset = Self::new(grid_size);
        for &index in pattern {
            bitset.insert(index);
        }
        bitset
    }

    /// Insert a dot, returning `true` if it was newly added
    ///
    /// Off-grid indices are rejected and leave the set unchanged.
    pub fn insert(&mut self, index: i64) -> bool {
        if !is_on_grid(index, self.grid_size) {
            return false;
        }
        let position = index as usize;
        let was_present = self.bits.get(position).as_deref() == Some(&true);
        self.bits.set(position, true);
        !was_present
    }

    /// Test dot membership
    pub fn contains(&self, index: i64) -> bool {
        is_on_grid(index, self.grid_size)
            && self.bits.get(index as usize).as_deref() == Some(&true)
    }

    /// Remove every dot from the set
    pub fn clear(&mut self) {
        self.bits.fill(false);
    }

    /// Number of dots in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Check if no dots are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Grid size this set was created for
    pub const fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Member indices in ascending order
    pub fn to_vec(&self) -> Vec<i64> {
        self.bits.iter_ones().map(|i| i as i64).collect()
    }
}

impl fmt::Debug for DotBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DotBitset")
            .field("dots", &self.to_vec())
            .field("grid_size", &self.grid_size)
            .finish()
    }
}
