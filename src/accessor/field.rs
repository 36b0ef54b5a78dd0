//! Register field descriptors and the typed accessor built on them.
//!
//! An accessor is a plain `Copy` value: it names a window of the register
//! store but holds no reference to it. Every operation takes the
//! [`RegisterFile`] it should act on, so nothing can outlive or dangle from
//! the storage owner.

use std::marker::PhantomData;
use std::ops::Range;

use log::warn;

use crate::device::{REGISTER_BYTES, RegisterError, RegisterFile, RegisterResult, WireWord};

/// Untyped layout of a field: first register, element width in bytes (2 or
/// 4) and element count. The elements may run across several consecutive
/// registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
    index: u8,
    width: u8,
    length: u16,
}

impl FieldDescriptor {
    pub const fn new(index: u8, width: u8, length: u16) -> Self {
        Self {
            index,
            width,
            length,
        }
    }

    #[inline(always)]
    pub const fn index(&self) -> u8 {
        self.index
    }

    #[inline(always)]
    pub const fn width(&self) -> u8 {
        self.width
    }

    #[inline(always)]
    pub const fn length(&self) -> u16 {
        self.length
    }

    /// Byte offset of element `field` inside the store. Not checked against
    /// `length`.
    #[inline(always)]
    pub const fn offset(&self, field: u16) -> usize {
        self.index as usize * REGISTER_BYTES + field as usize * self.width as usize
    }

    /// Number of whole registers the elements occupy.
    pub const fn register_count(&self) -> usize {
        (self.length as usize * self.width as usize).div_ceil(REGISTER_BYTES)
    }

    pub const fn register_span(&self) -> Range<usize> {
        let start = self.index as usize;
        start..start + self.register_count()
    }

    /// Bytes covered by `register_span`, including any padding half-register.
    pub const fn byte_range(&self) -> Range<usize> {
        let start = self.index as usize * REGISTER_BYTES;
        start..start + self.register_count() * REGISTER_BYTES
    }

    pub fn overlaps(&self, other: &FieldDescriptor) -> bool {
        let a = self.register_span();
        let b = other.register_span();
        a.start < b.end && b.start < a.end
    }

    pub fn check_field(&self, field: u16) -> RegisterResult<()> {
        if field < self.length {
            Ok(())
        } else {
            Err(RegisterError::FieldOutOfRange {
                index: self.index,
                field,
                length: self.length,
            })
        }
    }
}

/// Typed, optionally scaled view of a register field holding `T` elements.
///
/// The scale is "physical units per raw count"; unscaled accessors carry 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Accessor<T: WireWord> {
    descriptor: FieldDescriptor,
    scale: f64,
    _word: PhantomData<T>,
}

impl<T: WireWord> Accessor<T> {
    pub const fn new(index: u8, length: u16) -> Self {
        Self::scaled(index, length, 1.0)
    }

    pub const fn scaled(index: u8, length: u16, scale: f64) -> Self {
        Self {
            descriptor: FieldDescriptor::new(index, T::WIDTH as u8, length),
            scale,
            _word: PhantomData,
        }
    }

    #[inline(always)]
    pub const fn descriptor(&self) -> FieldDescriptor {
        self.descriptor
    }

    #[inline(always)]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    #[inline(always)]
    pub const fn index(&self) -> u8 {
        self.descriptor.index
    }

    #[inline(always)]
    pub const fn length(&self) -> u16 {
        self.descriptor.length
    }

    #[inline(always)]
    pub const fn register_count(&self) -> usize {
        self.descriptor.register_count()
    }

    /// Reads element `field`. An index past `length` reads the neighbouring
    /// registers, as the firmware layout would; an index past the end of the
    /// store panics. Use [`Accessor::try_get`] for a checked read.
    pub fn get(&self, file: &RegisterFile, field: u16) -> T {
        self.flag_overrun(field);
        T::read_wire(file.peek(self.descriptor.offset(field), T::WIDTH))
    }

    /// Writes element `field`, touching only its `WIDTH` bytes. Same index
    /// rules as [`Accessor::get`].
    pub fn set(&self, file: &mut RegisterFile, field: u16, value: T) {
        self.flag_overrun(field);
        value.write_wire(file.peek_mut(self.descriptor.offset(field), T::WIDTH));
    }

    pub fn try_get(&self, file: &RegisterFile, field: u16) -> RegisterResult<T> {
        let offset = self.checked_offset(file, field)?;
        Ok(T::read_wire(file.peek(offset, T::WIDTH)))
    }

    pub fn try_set(&self, file: &mut RegisterFile, field: u16, value: T) -> RegisterResult<()> {
        let offset = self.checked_offset(file, field)?;
        value.write_wire(file.peek_mut(offset, T::WIDTH));
        Ok(())
    }

    /// Raw value times the scale.
    pub fn get_scaled(&self, file: &RegisterFile, field: u16) -> f64 {
        self.get(file, field).to_f64() * self.scale
    }

    /// Divides by the scale and narrows to `T`. The narrowing truncates, so
    /// fractional counts are dropped rather than rounded.
    pub fn set_scaled(&self, file: &mut RegisterFile, field: u16, value: f64) {
        self.set(file, field, T::from_f64(value / self.scale));
    }

    pub fn try_get_scaled(&self, file: &RegisterFile, field: u16) -> RegisterResult<f64> {
        Ok(self.try_get(file, field)?.to_f64() * self.scale)
    }

    pub fn try_set_scaled(&self, file: &mut RegisterFile, field: u16, value: f64) -> RegisterResult<()> {
        self.try_set(file, field, T::from_f64(value / self.scale))
    }

    fn checked_offset(&self, file: &RegisterFile, field: u16) -> RegisterResult<usize> {
        self.descriptor.check_field(field)?;
        let offset = self.descriptor.offset(field);
        file.check(offset, T::WIDTH)?;
        Ok(offset)
    }

    #[inline(always)]
    fn flag_overrun(&self, field: u16) {
        if field >= self.descriptor.length {
            warn!(
                "unchecked access to field {field} of register 0x{:02X} ({} fields) spills into adjacent registers",
                self.descriptor.index, self.descriptor.length
            );
        }
    }
}
