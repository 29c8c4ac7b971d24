use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);
    };
}

/// Ids that the UI shows with a letter prefix, zero-padded to 4 digits
/// (`D0042`); wider ids print in full.
macro_rules! prefixed_display {
    ($name:ident, $prefix:literal) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($prefix, "{:04}"), self.0)
            }
        }
    };
}

id_newtype!(DonorId);
id_newtype!(StaffId);
id_newtype!(RoleId);
id_newtype!(TaskId);
id_newtype!(ScreeningId);
id_newtype!(DonationId);
id_newtype!(UnitId);
id_newtype!(OrgId);
id_newtype!(RequestId);

prefixed_display!(DonorId, "D");
prefixed_display!(StaffId, "S");
prefixed_display!(UnitId, "U");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_ids_are_zero_padded_to_four_digits() {
        assert_eq!(DonorId(42).to_string(), "D0042");
        assert_eq!(StaffId(1).to_string(), "S0001");
        assert_eq!(UnitId(17).to_string(), "U0017");
    }

    #[test]
    fn display_ids_wider_than_four_digits_print_in_full() {
        assert_eq!(UnitId(123456).to_string(), "U123456");
    }
}
