pub mod argb;
pub mod table;

pub use table::{DEFAULT_SLOT, MAX_CAPACITY, MIN_CAPACITY, PaletteError, PaletteTable};

pub fn version() -> &'static str {
    "0.1.0"
}
