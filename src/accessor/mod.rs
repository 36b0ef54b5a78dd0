//! Typed and scaled accessors over register fields.

pub mod field;
pub mod view;

pub use field::{Accessor, FieldDescriptor};
pub use view::{FieldValues, FieldView, FieldViewMut};
