//! Typed shadow of the CH Robotics UM6 register file.
//!
//! The device exposes its state as an array of 32-bit registers sent
//! big-endian over the wire. [`RegisterMap`] owns a copy of that array and
//! hands out named views that decode 16-bit sample pairs, 32-bit floats and
//! configuration words, optionally scaled to physical units. Transport and
//! framing live elsewhere; this crate only translates bytes.

pub mod accessor;
pub mod device;
pub mod registers;

pub use accessor::{Accessor, FieldDescriptor, FieldView, FieldViewMut};
pub use device::{Endianness, RegisterError, RegisterFile, RegisterResult, WireWord};
pub use registers::{Layout, RegisterMap};
