#![allow(dead_code)]

use std::hash::BuildHasher;
use std::ops::Range;

use um6reg::{Accessor, RegisterMap, WireWord};

/// Stable hash of the store outside `skip`, used to prove a write stayed
/// inside its own registers.
pub fn checksum_outside(map: &RegisterMap, skip: Range<usize>) -> (u64, u64) {
    let state = ahash::RandomState::with_seeds(0x55, 0x56, 0x57, 0x58);
    let bytes = map.registers().as_bytes();
    (
        state.hash_one(&bytes[..skip.start]),
        state.hash_one(&bytes[skip.end..]),
    )
}

/// Writes `value` to every declared field of `accessor` and asserts nothing
/// outside the accessor's register span moved.
pub fn assert_writes_stay_in_span<T: WireWord>(map: &mut RegisterMap, accessor: Accessor<T>, value: T) {
    let span = accessor.descriptor().byte_range();
    let before = checksum_outside(map, span.clone());
    let mut view = map.field_mut(accessor);
    for field in 0..accessor.length() {
        view.set(field, value);
    }
    assert_eq!(
        checksum_outside(map, span),
        before,
        "write at register 0x{:02X} leaked outside its span",
        accessor.index()
    );
}

/// Asserts every declared field of `accessor` reads as zero, raw and scaled.
pub fn assert_zeroed<T: WireWord>(map: &RegisterMap, accessor: Accessor<T>) {
    let view = map.field(accessor);
    for field in 0..accessor.length() {
        assert_eq!(view.get(field), T::default(), "register 0x{:02X}", accessor.index());
        assert_eq!(view.get_scaled(field), 0.0, "register 0x{:02X}", accessor.index());
    }
}

/// Writes `sample(field)` to every declared field of `accessor`, then reads
/// each one back.
pub fn assert_round_trips<T: WireWord>(map: &mut RegisterMap, accessor: Accessor<T>, sample: impl Fn(u16) -> T) {
    let mut view = map.field_mut(accessor);
    for field in 0..accessor.length() {
        view.set(field, sample(field));
    }
    for field in 0..accessor.length() {
        assert_eq!(
            view.get(field),
            sample(field),
            "register 0x{:02X} field {field}",
            accessor.index()
        );
    }
}
