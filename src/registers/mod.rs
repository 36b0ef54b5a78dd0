//! UM6 register map: firmware addresses, datasheet scale factors and the
//! named bindings that tie them to accessors.

pub mod address;
pub mod layout;
pub mod map;
pub mod scale;

pub use layout::{Layout, LayoutEntries};
pub use map::{RegisterMap, TouchedFields};
