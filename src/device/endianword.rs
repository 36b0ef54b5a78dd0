use std::fmt::Debug;

use super::endianness::{from_wire, to_wire};

/// Element types that can occupy a register field.
///
/// `WIDTH` is both the element size and the accessor's sub-register width, so
/// 16-bit types pack two to a register and 32-bit types fill one.
pub trait WireWord: Copy + Default + PartialEq + Debug + Send + Sync + 'static {
    const WIDTH: usize;

    /// Decodes the first `WIDTH` bytes of `wire` (big-endian).
    fn read_wire(wire: &[u8]) -> Self;

    /// Encodes `self` big-endian into the first `WIDTH` bytes of `out`.
    fn write_wire(self, out: &mut [u8]);

    fn to_f64(self) -> f64;

    /// Narrowing conversion used by scaled writes. Float-to-integer casts
    /// truncate toward zero and saturate at the type bounds; NaN becomes zero.
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_word {
    ($t:ty) => {
        impl WireWord for $t {
            const WIDTH: usize = size_of::<$t>();

            #[inline(always)]
            fn read_wire(wire: &[u8]) -> Self {
                let mut buf = [0u8; size_of::<$t>()];
                buf.copy_from_slice(&wire[..size_of::<$t>()]);
                <$t>::from_ne_bytes(from_wire(buf))
            }

            #[inline(always)]
            fn write_wire(self, out: &mut [u8]) {
                out[..size_of::<$t>()].copy_from_slice(&to_wire(self.to_ne_bytes()));
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline(always)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

impl_word!(i16);
impl_word!(i32);
impl_word!(u32);
impl_word!(f32);
