//! Strongly-typed identifiers for portal entities
//!
//! The backing REST API hands out sequential numeric ids. Newtype wrappers
//! around `u64` prevent accidental mixing of identifier types while keeping
//! the wire representation a plain JSON number.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw numeric id
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the raw numeric value
            pub const fn value(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.parse()?))
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> u64 {
                id.0
            }
        }
    };
}

define_id!(UserId);
define_id!(PolicyId);
define_id!(ClaimId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_plain_number() {
        assert_eq!(ClaimId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_parsing_round_trip() {
        let original = PolicyId::new(7);
        let parsed: PolicyId = original.to_string().parse().unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&UserId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: UserId = serde_json::from_str("3").unwrap();
        assert_eq!(back, UserId::new(3));
    }
}
