//! Register backing store plus the wire byte-order primitives it is read through.

pub mod endianness;
pub mod endianword;
pub mod error;
pub mod register_file;

pub use endianness::{Endianness, from_wire, reorder, to_wire};
pub use endianword::WireWord;
pub use error::{RegisterError, RegisterResult};
pub use register_file::{REGISTER_BYTES, RegisterFile};
