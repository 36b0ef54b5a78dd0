use std::{error::Error, fmt};

pub type RegisterResult<T> = Result<T, RegisterError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterError {
    /// Byte range `offset..offset + len` does not fit in the register store.
    OutOfRange {
        offset: usize,
        len: usize,
        capacity: usize,
    },
    /// Element index past the accessor's declared length.
    FieldOutOfRange {
        index: u8,
        field: u16,
        length: u16,
    },
    UnknownField {
        name: String,
    },
}

impl fmt::Display for RegisterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterError::OutOfRange {
                offset,
                len,
                capacity,
            } => write!(
                f,
                "byte range 0x{offset:04X}+{len} exceeds register store of {capacity} bytes"
            ),
            RegisterError::FieldOutOfRange {
                index,
                field,
                length,
            } => write!(
                f,
                "field {field} out of range for accessor at register 0x{index:02X} ({length} fields)"
            ),
            RegisterError::UnknownField { name } => write!(f, "no accessor named '{name}'"),
        }
    }
}

impl Error for RegisterError {}
