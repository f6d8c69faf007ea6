use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fully opaque black. Freshly constructed slots hold this value, and
/// `add` treats it as the "empty slot" sentinel.
pub const DEFAULT_SLOT: u32 = 0xFF00_0000;

/// Smallest accepted table capacity.
pub const MIN_CAPACITY: usize = 2;
/// Largest accepted table capacity.
pub const MAX_CAPACITY: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("capacity must be a power of two between 2 and 1024")]
    InvalidCapacity,
    #[error("index out of bounds")]
    IndexOutOfBounds,
}

/// A fixed-capacity lookup table of 32-bit ARGB colors.
///
/// Capacity is validated once at construction and never changes. Every
/// slot always holds a real value; there is no "unset" state beyond the
/// default-black sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteTable {
    slots: Vec<u32>,
}

impl PaletteTable {
    /// Builds a table of `capacity` slots, all set to default black.
    /// Capacity must be a power of two in `MIN_CAPACITY..=MAX_CAPACITY`.
    pub fn new(capacity: usize) -> Result<Self, PaletteError> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) || !capacity.is_power_of_two() {
            return Err(PaletteError::InvalidCapacity);
        }
        Ok(Self {
            slots: vec![DEFAULT_SLOT; capacity],
        })
    }

    /// Number of slots in the table (always the constructed capacity).
    pub fn number_of_colors(&self) -> usize {
        self.slots.len()
    }

    /// Reads the color stored at `index`.
    pub fn color_at(&self, index: usize) -> Result<u32, PaletteError> {
        self.slots
            .get(index)
            .copied()
            .ok_or(PaletteError::IndexOutOfBounds)
    }

    /// Overwrites the slot at `index`. Any 32-bit value is accepted;
    /// channel contents are not validated.
    pub fn set_color_at(&mut self, index: usize, value: u32) -> Result<(), PaletteError> {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(PaletteError::IndexOutOfBounds),
        }
    }

    /// Stores `value` in the first slot still holding the default
    /// sentinel. If every slot is already occupied the table is left
    /// unchanged and no error is raised; callers that care can compare
    /// `slots()` before and after.
    pub fn add(&mut self, value: u32) {
        if let Some(slot) = self.slots.iter_mut().find(|slot| **slot == DEFAULT_SLOT) {
            *slot = value;
        }
    }

    /// Read-only view of the whole table, in index order.
    pub fn slots(&self) -> &[u32] {
        &self.slots
    }
}
