//! Named accessor bindings for a firmware address map.

use smallvec::{SmallVec, smallvec};

use crate::accessor::{Accessor, FieldDescriptor, FieldView, FieldViewMut};

use super::{address, map::RegisterMap, scale};

pub type LayoutEntries = SmallVec<[(&'static str, FieldDescriptor); 16]>;

/// Declares the `Layout` fields and the matching `RegisterMap` view methods
/// from one list, so a binding cannot exist in one place and not the other.
macro_rules! register_layout {
    ($( $(#[$meta:meta])* $name:ident / $name_mut:ident : $ty:ty ),+ $(,)?) => {
        /// Where each named quantity lives. The address map is a property of
        /// the firmware, so it is supplied as data rather than hard-wired into
        /// [`RegisterMap`].
        #[derive(Clone, Copy, Debug, PartialEq)]
        pub struct Layout {
            $( $(#[$meta])* pub $name: Accessor<$ty>, )+
        }

        impl Layout {
            /// Name and untyped descriptor of every binding, in declaration order.
            pub fn entries(&self) -> LayoutEntries {
                smallvec![ $( (stringify!($name), self.$name.descriptor()) ),+ ]
            }
        }

        impl RegisterMap {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> FieldView<'_, $ty> {
                    self.field(self.layout().$name)
                }

                pub fn $name_mut(&mut self) -> FieldViewMut<'_, $ty> {
                    let accessor = self.layout().$name;
                    self.field_mut(accessor)
                }
            )+
        }
    };
}

register_layout! {
    /// Raw gyro counts, X Y Z.
    gyro_raw / gyro_raw_mut: i16,
    accel_raw / accel_raw_mut: i16,
    mag_raw / mag_raw_mut: i16,
    /// Processed angular rate, rad/s.
    gyro / gyro_mut: i16,
    /// Processed acceleration, g.
    accel / accel_mut: i16,
    mag / mag_mut: i16,
    /// Roll, pitch, yaw in radians.
    euler / euler_mut: i16,
    /// Attitude quaternion a b c d.
    quat / quat_mut: i16,
    /// EKF error covariance, 4x4 row-major.
    covariance / covariance_mut: f32,
    temperature / temperature_mut: f32,
    /// Communication configuration word.
    communication / communication_mut: u32,
    mag_ref / mag_ref_mut: f32,
    accel_ref / accel_ref_mut: f32,
    gyro_bias / gyro_bias_mut: i16,
    accel_bias / accel_bias_mut: i16,
    mag_bias / mag_bias_mut: i16,
}

impl Layout {
    /// Stock UM6 firmware map.
    pub const UM6: Self = Self {
        gyro_raw: Accessor::new(address::GYRO_RAW_XY, 3),
        accel_raw: Accessor::new(address::ACCEL_RAW_XY, 3),
        mag_raw: Accessor::new(address::MAG_RAW_XY, 3),
        gyro: Accessor::scaled(address::GYRO_PROC_XY, 3, scale::GYRO),
        accel: Accessor::scaled(address::ACCEL_PROC_XY, 3, scale::ACCEL),
        mag: Accessor::scaled(address::MAG_PROC_XY, 3, scale::MAG),
        euler: Accessor::scaled(address::EULER_PHI_THETA, 3, scale::EULER),
        quat: Accessor::scaled(address::QUAT_AB, 4, scale::QUAT),
        covariance: Accessor::new(address::ERROR_COV_00, 16),
        temperature: Accessor::new(address::TEMPERATURE, 1),
        communication: Accessor::new(address::COMMUNICATION, 1),
        mag_ref: Accessor::new(address::MAG_REF_X, 3),
        accel_ref: Accessor::new(address::ACCEL_REF_X, 3),
        gyro_bias: Accessor::new(address::GYRO_BIAS_XY, 3),
        accel_bias: Accessor::new(address::ACCEL_BIAS_XY, 3),
        mag_bias: Accessor::new(address::MAG_BIAS_XY, 3),
    };

    /// First pair of bindings whose register spans collide, if any.
    pub fn overlap(&self) -> Option<(&'static str, &'static str)> {
        let entries = self.entries();
        for (i, (a_name, a)) in entries.iter().enumerate() {
            for (b_name, b) in &entries[i + 1..] {
                if a.overlaps(b) {
                    return Some((*a_name, *b_name));
                }
            }
        }
        None
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::UM6
    }
}
