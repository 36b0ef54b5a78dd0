use std::ops::Range;

use log::{trace, warn};

use crate::registers::address::NUM_REGISTERS;

use super::error::{RegisterError, RegisterResult};

/// Size of one register slot in bytes.
pub const REGISTER_BYTES: usize = 4;

/// Zero-initialized shadow of the device register array, stored in wire order.
///
/// The capacity is fixed when the file is created and never changes.
pub struct RegisterFile {
    bytes: Vec<u8>,
    registers: usize,
}

impl RegisterFile {
    /// Store sized for the stock firmware map (config and data registers).
    pub fn new() -> Self {
        Self::with_registers(NUM_REGISTERS)
    }

    pub fn with_registers(registers: usize) -> Self {
        Self {
            bytes: vec![0_u8; registers * REGISTER_BYTES],
            registers,
        }
    }

    #[inline(always)]
    pub fn registers(&self) -> usize {
        self.registers
    }

    /// Capacity in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline(always)]
    pub fn span(&self) -> Range<usize> {
        0..self.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copies a block of wire-order bytes received from the transport into the
    /// store, starting at register `register_index`. The blob may cover several
    /// registers and need not end on a register boundary.
    pub fn write_raw(&mut self, register_index: u8, data: &[u8]) -> RegisterResult<()> {
        let offset = usize::from(register_index) * REGISTER_BYTES;
        if let Err(err) = self.check(offset, data.len()) {
            warn!("rejected {} byte block at register 0x{register_index:02X}: {err}", data.len());
            return Err(err);
        }
        trace!("ingest {} bytes at register 0x{register_index:02X}", data.len());
        self.bytes[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    /// Wire-order bytes of `count` consecutive registers starting at `register_index`.
    pub fn read_raw(&self, register_index: u8, count: usize) -> RegisterResult<&[u8]> {
        let offset = usize::from(register_index) * REGISTER_BYTES;
        let len = count
            .checked_mul(REGISTER_BYTES)
            .ok_or(RegisterError::OutOfRange {
                offset,
                len: usize::MAX,
                capacity: self.bytes.len(),
            })?;
        self.check(offset, len)?;
        Ok(&self.bytes[offset..offset + len])
    }

    /// Zeroes every register.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Verifies `offset..offset + len` lies inside the store.
    pub fn check(&self, offset: usize, len: usize) -> RegisterResult<()> {
        match offset.checked_add(len) {
            Some(end) if end <= self.bytes.len() => Ok(()),
            _ => Err(RegisterError::OutOfRange {
                offset,
                len,
                capacity: self.bytes.len(),
            }),
        }
    }

    /// Unchecked view used by the accessor fast path. Panics when the range
    /// leaves the store.
    #[inline(always)]
    pub(crate) fn peek(&self, offset: usize, len: usize) -> &[u8] {
        &self.bytes[offset..offset + len]
    }

    #[inline(always)]
    pub(crate) fn peek_mut(&mut self, offset: usize, len: usize) -> &mut [u8] {
        &mut self.bytes[offset..offset + len]
    }
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}
