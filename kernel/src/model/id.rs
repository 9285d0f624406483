use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};

macro_rules! define_id {
    ($id_type: ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $id_type(i32);

        impl $id_type {
            pub fn new(id: i32) -> Self {
                Self(id)
            }

            pub fn raw(self) -> i32 {
                self.0
            }
        }

        impl FromStr for $id_type {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<i32>().map(Self)
            }
        }

        impl fmt::Display for $id_type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(EnrollmentId);
define_id!(TicketId);
define_id!(TicketTypeId);
define_id!(HotelId);
define_id!(RoomId);
