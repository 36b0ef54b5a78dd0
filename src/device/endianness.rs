//! Byte-order primitives shared by every accessor. Registers always travel
//! big-endian; the host may use either canonical order.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Endianness {
    Little,
    Big,
}

impl Endianness {
    /// Order used by the firmware when it transmits a register.
    pub const WIRE: Self = Endianness::Big;

    /// Order of the machine this crate is compiled for.
    pub const HOST: Self = Self::native();

    pub const fn native() -> Self {
        if cfg!(target_endian = "little") {
            Endianness::Little
        } else {
            Endianness::Big
        }
    }
}

/// Reorders an `N` byte word from `source` order into `target` order.
///
/// Between the two canonical orders the conversion is a plain reversal, so
/// applying it twice yields the input again.
#[inline(always)]
pub fn reorder<const N: usize>(mut bytes: [u8; N], source: Endianness, target: Endianness) -> [u8; N] {
    if source != target {
        bytes.reverse();
    }
    bytes
}

/// Host-order bytes to wire order.
#[inline(always)]
pub fn to_wire<const N: usize>(host: [u8; N]) -> [u8; N] {
    reorder(host, Endianness::HOST, Endianness::WIRE)
}

/// Wire-order bytes to host order.
#[inline(always)]
pub fn from_wire<const N: usize>(wire: [u8; N]) -> [u8; N] {
    reorder(wire, Endianness::WIRE, Endianness::HOST)
}
