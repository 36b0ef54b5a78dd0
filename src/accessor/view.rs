//! Borrowed views pairing an accessor with the store it reads, as returned by
//! `map.gyro()` and friends.

use smallvec::SmallVec;

use crate::device::{RegisterFile, RegisterResult, WireWord};

use super::field::Accessor;

/// Enough inline slots for the largest stock field (the 16-entry covariance).
pub type FieldValues<T> = SmallVec<[T; 16]>;

#[derive(Clone, Copy)]
pub struct FieldView<'a, T: WireWord> {
    file: &'a RegisterFile,
    accessor: Accessor<T>,
}

impl<'a, T: WireWord> FieldView<'a, T> {
    pub fn new(file: &'a RegisterFile, accessor: Accessor<T>) -> Self {
        Self { file, accessor }
    }

    #[inline(always)]
    pub fn accessor(&self) -> Accessor<T> {
        self.accessor
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        usize::from(self.accessor.length())
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.accessor.length() == 0
    }

    #[inline(always)]
    pub fn get(&self, field: u16) -> T {
        self.accessor.get(self.file, field)
    }

    #[inline(always)]
    pub fn try_get(&self, field: u16) -> RegisterResult<T> {
        self.accessor.try_get(self.file, field)
    }

    #[inline(always)]
    pub fn get_scaled(&self, field: u16) -> f64 {
        self.accessor.get_scaled(self.file, field)
    }

    #[inline(always)]
    pub fn try_get_scaled(&self, field: u16) -> RegisterResult<f64> {
        self.accessor.try_get_scaled(self.file, field)
    }

    /// Every declared field, raw.
    pub fn values(&self) -> RegisterResult<FieldValues<T>> {
        (0..self.accessor.length()).map(|field| self.try_get(field)).collect()
    }

    /// Every declared field in physical units.
    pub fn scaled_values(&self) -> RegisterResult<FieldValues<f64>> {
        (0..self.accessor.length())
            .map(|field| self.try_get_scaled(field))
            .collect()
    }
}

pub struct FieldViewMut<'a, T: WireWord> {
    file: &'a mut RegisterFile,
    accessor: Accessor<T>,
}

impl<'a, T: WireWord> FieldViewMut<'a, T> {
    pub fn new(file: &'a mut RegisterFile, accessor: Accessor<T>) -> Self {
        Self { file, accessor }
    }

    /// Read-only view over the same field.
    pub fn as_view(&self) -> FieldView<'_, T> {
        FieldView::new(&*self.file, self.accessor)
    }

    #[inline(always)]
    pub fn accessor(&self) -> Accessor<T> {
        self.accessor
    }

    #[inline(always)]
    pub fn get(&self, field: u16) -> T {
        self.accessor.get(&*self.file, field)
    }

    #[inline(always)]
    pub fn get_scaled(&self, field: u16) -> f64 {
        self.accessor.get_scaled(&*self.file, field)
    }

    #[inline(always)]
    pub fn set(&mut self, field: u16, value: T) {
        self.accessor.set(self.file, field, value)
    }

    #[inline(always)]
    pub fn try_set(&mut self, field: u16, value: T) -> RegisterResult<()> {
        self.accessor.try_set(self.file, field, value)
    }

    #[inline(always)]
    pub fn set_scaled(&mut self, field: u16, value: f64) {
        self.accessor.set_scaled(self.file, field, value)
    }

    #[inline(always)]
    pub fn try_set_scaled(&mut self, field: u16, value: f64) -> RegisterResult<()> {
        self.accessor.try_set_scaled(self.file, field, value)
    }

    /// Writes `values` to consecutive fields starting at 0. Fails before
    /// writing anything if there are more values than declared fields.
    pub fn set_all(&mut self, values: &[T]) -> RegisterResult<()> {
        if let Some(last) = values.len().checked_sub(1) {
            let last = u16::try_from(last).unwrap_or(u16::MAX);
            self.accessor.descriptor().check_field(last)?;
        }
        for (field, value) in (0u16..).zip(values.iter().copied()) {
            self.try_set(field, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::RegisterError;

    #[test]
    fn views_read_what_mutable_views_wrote() {
        let mut file = RegisterFile::with_registers(8);
        let acc = Accessor::<f32>::new(2, 3);
        {
            let mut view = FieldViewMut::new(&mut file, acc);
            view.set_all(&[1.0, -2.5, 0.125]).expect("three fields declared");
            assert_eq!(view.as_view().get(1), -2.5);
        }
        let view = FieldView::new(&file, acc);
        assert_eq!(view.len(), 3);
        assert_eq!(view.values().expect("in range").as_slice(), &[1.0f32, -2.5, 0.125]);
    }

    #[test]
    fn set_all_refuses_more_values_than_fields() {
        let mut file = RegisterFile::with_registers(8);
        let acc = Accessor::<i16>::new(0, 2);
        let mut view = FieldViewMut::new(&mut file, acc);
        let err = view.set_all(&[1, 2, 3]).expect_err("only two fields");
        assert_eq!(
            err,
            RegisterError::FieldOutOfRange {
                index: 0,
                field: 2,
                length: 2
            }
        );
        assert_eq!(view.get(0), 0, "nothing should be written on failure");
    }

    #[test]
    fn scaled_values_apply_the_factor() {
        let mut file = RegisterFile::with_registers(2);
        let acc = Accessor::<i16>::scaled(0, 2, 0.25);
        let mut view = FieldViewMut::new(&mut file, acc);
        view.set(0, 4);
        view.set(1, -8);
        let scaled = view.as_view().scaled_values().expect("in range");
        assert_eq!(scaled.as_slice(), &[1.0f64, -2.0]);
    }
}
