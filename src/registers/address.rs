//! UM6 firmware register addresses.
//!
//! Configuration registers occupy `0x00..DATA_REG_START_ADDRESS`, data
//! registers follow. Command registers live above the data block, carry no
//! payload and are never shadowed.

// Configuration
pub const COMMUNICATION: u8 = 0x00;
pub const MISC_CONFIG: u8 = 0x01;
pub const MAG_REF_X: u8 = 0x02;
pub const MAG_REF_Y: u8 = 0x03;
pub const MAG_REF_Z: u8 = 0x04;
pub const ACCEL_REF_X: u8 = 0x05;
pub const ACCEL_REF_Y: u8 = 0x06;
pub const ACCEL_REF_Z: u8 = 0x07;
pub const EKF_MAG_VARIANCE: u8 = 0x08;
pub const EKF_ACCEL_VARIANCE: u8 = 0x09;
pub const EKF_PROCESS_VARIANCE: u8 = 0x0A;
pub const GYRO_BIAS_XY: u8 = 0x0B;
pub const GYRO_BIAS_Z: u8 = 0x0C;
pub const ACCEL_BIAS_XY: u8 = 0x0D;
pub const ACCEL_BIAS_Z: u8 = 0x0E;
pub const MAG_BIAS_XY: u8 = 0x0F;
pub const MAG_BIAS_Z: u8 = 0x10;

// Data
pub const DATA_REG_START_ADDRESS: u8 = 0x55;
pub const DATA_ARRAY_SIZE: usize = 48;

pub const STATUS: u8 = 0x55;
pub const GYRO_RAW_XY: u8 = 0x56;
pub const GYRO_RAW_Z: u8 = 0x57;
pub const ACCEL_RAW_XY: u8 = 0x58;
pub const ACCEL_RAW_Z: u8 = 0x59;
pub const MAG_RAW_XY: u8 = 0x5A;
pub const MAG_RAW_Z: u8 = 0x5B;
pub const GYRO_PROC_XY: u8 = 0x5C;
pub const GYRO_PROC_Z: u8 = 0x5D;
pub const ACCEL_PROC_XY: u8 = 0x5E;
pub const ACCEL_PROC_Z: u8 = 0x5F;
pub const MAG_PROC_XY: u8 = 0x60;
pub const MAG_PROC_Z: u8 = 0x61;
pub const EULER_PHI_THETA: u8 = 0x62;
pub const EULER_PSI: u8 = 0x63;
pub const QUAT_AB: u8 = 0x64;
pub const QUAT_CD: u8 = 0x65;
pub const ERROR_COV_00: u8 = 0x66;
pub const TEMPERATURE: u8 = 0x76;

/// Registers shadowed by a [`RegisterFile`](crate::device::RegisterFile).
pub const NUM_REGISTERS: usize = DATA_REG_START_ADDRESS as usize + DATA_ARRAY_SIZE;

// Commands
pub const COMMAND_START_ADDRESS: u8 = 0xAA;

pub const GET_FW_VERSION: u8 = 0xAA;
pub const FLASH_COMMIT: u8 = 0xAB;
pub const ZERO_GYROS: u8 = 0xAC;
pub const RESET_EKF: u8 = 0xAD;
pub const GET_DATA: u8 = 0xAE;
pub const SET_ACCEL_REF: u8 = 0xAF;
pub const SET_MAG_REF: u8 = 0xB0;
pub const RESET_TO_FACTORY: u8 = 0xB1;
pub const GPS_SET_HOME: u8 = 0xB3;

// Firmware replies
pub const BAD_CHECKSUM: u8 = 0xFD;
pub const UNKNOWN_ADDRESS: u8 = 0xFE;
pub const INVALID_BATCH_SIZE: u8 = 0xFF;

/// True for command and reply addresses, which have no shadow storage.
pub const fn is_command(address: u8) -> bool {
    address >= COMMAND_START_ADDRESS
}

/// True for addresses backed by a register slot.
pub const fn is_shadowed(address: u8) -> bool {
    (address as usize) < NUM_REGISTERS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_block_ends_before_commands() {
        assert_eq!(NUM_REGISTERS, 0x85);
        assert!(is_shadowed(TEMPERATURE));
        assert!(!is_shadowed(COMMAND_START_ADDRESS));
        assert!(is_command(ZERO_GYROS) && is_command(INVALID_BATCH_SIZE));
        assert!(!is_command(COMMUNICATION) && !is_command(TEMPERATURE));
        assert_eq!(
            TEMPERATURE - ERROR_COV_00,
            16,
            "covariance block is 16 registers wide"
        );
    }
}
