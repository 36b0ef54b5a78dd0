mod common;

use um6reg::registers::{address, scale};
use um6reg::{RegisterError, RegisterMap};

#[test]
fn raw_gyro_pair_decodes_big_endian() {
    let mut map = RegisterMap::new();
    map.write_raw(address::GYRO_RAW_XY, &[0x01, 0x00, 0x00, 0x00])
        .expect("in range");
    assert_eq!(map.gyro_raw().get(0), 256);
    assert_eq!(map.gyro_raw().get(1), 0);

    map.write_raw(address::GYRO_RAW_XY, &[0x00, 0x01, 0x00, 0x00])
        .expect("in range");
    assert_eq!(map.gyro_raw().get(0), 1, "the low-order byte is transmitted second");
}

#[test]
fn block_decode_matches_manual_decode() {
    // One GET_DATA style burst: processed gyro, accel and mag, six registers.
    let block: [u8; 24] = [
        0x12, 0x34, 0xFE, 0xDC, // gyro x y
        0x00, 0x10, 0x00, 0x00, // gyro z, pad
        0x80, 0x00, 0x7F, 0xFF, // accel x y
        0xFF, 0xFF, 0x00, 0x00, // accel z, pad
        0x00, 0x01, 0x00, 0x02, // mag x y
        0x00, 0x03, 0x00, 0x00, // mag z, pad
    ];
    let mut map = RegisterMap::new();
    let touched = map.ingest(address::GYRO_PROC_XY, &block).expect("in range");
    assert_eq!(touched.as_slice(), &["gyro", "accel", "mag"]);

    let gyro = map.gyro();
    assert_eq!(gyro.values().expect("in range").as_slice(), &[0x1234, i16::from_be_bytes([0xFE, 0xDC]), 0x10]);
    assert_eq!(gyro.get_scaled(0), f64::from(0x1234i16) * scale::GYRO);

    let accel = map.accel();
    assert_eq!(accel.values().expect("in range").as_slice(), &[i16::MIN, i16::MAX, -1]);
    assert_eq!(accel.get_scaled(2), -scale::ACCEL);

    let mag = map.mag().scaled_values().expect("in range");
    assert_eq!(
        mag.as_slice(),
        &[scale::MAG, 2.0 * scale::MAG, 3.0 * scale::MAG]
    );
}

#[test]
fn float_registers_decode_ieee_bits() {
    let mut map = RegisterMap::new();
    let mut block = Vec::new();
    for value in [0.5f32, -1.0, 1.0e-3] {
        block.extend_from_slice(&value.to_be_bytes());
    }
    map.write_raw(address::MAG_REF_X, &block).expect("in range");
    assert_eq!(
        map.mag_ref().values().expect("in range").as_slice(),
        &[0.5f32, -1.0, 1.0e-3]
    );

    map.write_raw(address::ERROR_COV_00 + 5, &[0x3F, 0x80, 0x00, 0x00])
        .expect("in range");
    assert_eq!(map.covariance().get(5), 1.0, "diagonal entry (1,1)");
}

#[test]
fn outbound_bytes_mirror_inbound_layout() {
    let mut map = RegisterMap::new();
    map.communication_mut().set(0, 0x4000_0014);
    assert_eq!(
        map.wire_bytes(map.layout().communication).expect("in range"),
        &[0x40u8, 0x00, 0x00, 0x14]
    );

    let mut echo = RegisterMap::new();
    let bytes = map.wire_bytes(map.layout().communication).expect("in range").to_vec();
    echo.write_raw(address::COMMUNICATION, &bytes).expect("in range");
    assert_eq!(echo.communication().get(0), 0x4000_0014);
}

#[test]
fn overrunning_block_is_rejected_whole() {
    let mut map = RegisterMap::new();
    let before = common::checksum_outside(&map, 0..0);
    let err = map
        .write_raw(address::TEMPERATURE, &[0xAA; 64])
        .expect_err("runs past the data block");
    assert!(matches!(err, RegisterError::OutOfRange { .. }));
    assert_eq!(common::checksum_outside(&map, 0..0), before, "store untouched");
    assert!(map.ingest(address::COMMAND_START_ADDRESS, &[0; 4]).is_err());
}
