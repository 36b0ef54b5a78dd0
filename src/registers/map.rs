//! Owner of the register shadow and its named bindings.

use ahash::AHashMap;
use log::{debug, warn};
use smallvec::SmallVec;

use crate::accessor::{Accessor, FieldDescriptor, FieldView, FieldViewMut};
use crate::device::{REGISTER_BYTES, RegisterError, RegisterFile, RegisterResult, WireWord};

use super::layout::Layout;

/// Names of the bindings a register block touched.
pub type TouchedFields = SmallVec<[&'static str; 4]>;

/// Register shadow for one device session.
///
/// The map exclusively owns the [`RegisterFile`]. Named view methods
/// (`gyro()`, `accel_bias_mut()`, ...) borrow it for the lifetime of the view,
/// so reads share the map and writes hold it exclusively. The map has no
/// interior locking; wrap it in a `Mutex` to share it between a transport
/// thread and readers.
pub struct RegisterMap {
    file: RegisterFile,
    layout: Layout,
    by_register: AHashMap<usize, SmallVec<[&'static str; 2]>>,
    by_name: AHashMap<&'static str, FieldDescriptor>,
}

impl RegisterMap {
    pub fn new() -> Self {
        Self::with_layout(Layout::UM6)
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self::with_file(RegisterFile::new(), layout)
    }

    pub fn with_file(file: RegisterFile, layout: Layout) -> Self {
        let mut by_register: AHashMap<usize, SmallVec<[&'static str; 2]>> = AHashMap::new();
        let mut by_name = AHashMap::new();
        for (name, descriptor) in layout.entries() {
            if descriptor.register_span().end > file.registers() {
                warn!(
                    "binding '{name}' at register 0x{:02X} runs past the {} register store",
                    descriptor.index(),
                    file.registers()
                );
            }
            for register in descriptor.register_span() {
                by_register.entry(register).or_default().push(name);
            }
            by_name.insert(name, descriptor);
        }
        if let Some((a, b)) = layout.overlap() {
            warn!("bindings '{a}' and '{b}' share registers");
        }
        debug!(
            "register map ready: {} registers, {} bindings",
            file.registers(),
            by_name.len()
        );
        Self {
            file,
            layout,
            by_register,
            by_name,
        }
    }

    #[inline(always)]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline(always)]
    pub fn registers(&self) -> &RegisterFile {
        &self.file
    }

    /// View of an arbitrary accessor over this map's store.
    pub fn field<T: WireWord>(&self, accessor: Accessor<T>) -> FieldView<'_, T> {
        FieldView::new(&self.file, accessor)
    }

    pub fn field_mut<T: WireWord>(&mut self, accessor: Accessor<T>) -> FieldViewMut<'_, T> {
        FieldViewMut::new(&mut self.file, accessor)
    }

    /// Bulk ingestion of wire bytes received from the transport.
    pub fn write_raw(&mut self, register_index: u8, data: &[u8]) -> RegisterResult<()> {
        self.file.write_raw(register_index, data)
    }

    /// [`RegisterMap::write_raw`] followed by [`RegisterMap::fields_in_block`]
    /// for the registers the blob covered.
    pub fn ingest(&mut self, register_index: u8, data: &[u8]) -> RegisterResult<TouchedFields> {
        self.file.write_raw(register_index, data)?;
        Ok(self.fields_in_block(register_index, data.len().div_ceil(REGISTER_BYTES)))
    }

    pub fn read_raw(&self, register_index: u8, count: usize) -> RegisterResult<&[u8]> {
        self.file.read_raw(register_index, count)
    }

    /// Every register backing `accessor`, in wire order, ready to be framed
    /// for an outbound write.
    pub fn wire_bytes<T: WireWord>(&self, accessor: Accessor<T>) -> RegisterResult<&[u8]> {
        self.file.read_raw(accessor.index(), accessor.register_count())
    }

    /// Bindings with at least one register in
    /// `register_index..register_index + register_count`, each named once.
    /// The block is clipped to the end of the store.
    pub fn fields_in_block(&self, register_index: u8, register_count: usize) -> TouchedFields {
        let start = usize::from(register_index);
        let end = start
            .saturating_add(register_count)
            .min(self.file.registers());
        let mut touched = TouchedFields::new();
        for register in start..end {
            let Some(names) = self.by_register.get(&register) else {
                continue;
            };
            for name in names {
                if !touched.contains(name) {
                    touched.push(*name);
                }
            }
        }
        touched
    }

    pub fn descriptor(&self, name: &str) -> RegisterResult<FieldDescriptor> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| RegisterError::UnknownField { name: name.into() })
    }

    /// Zeroes the store, e.g. when a new session starts against the same map.
    pub fn clear(&mut self) {
        debug!("clearing register shadow");
        self.file.clear();
    }
}

impl Default for RegisterMap {
    fn default() -> Self {
        Self::new()
    }
}
