//! Strongly-typed identifier value objects.
//!
//! All identifiers are database-generated `SERIAL` keys, so they wrap `i32`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

macro_rules! serial_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wraps a raw database key.
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Returns the raw database key.
            pub const fn value(&self) -> i32 {
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
                Ok(Self(s.trim().parse()?))
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }
    };
}

serial_id!(
    /// Unique identifier for a logged accident.
    AccidentId
);

serial_id!(
    /// Unique identifier for an accident classification.
    AccidentTypeId
);

serial_id!(
    /// Unique identifier for a rule (violated article).
    RuleId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accident_id_displays_raw_value() {
        assert_eq!(AccidentId::new(42).to_string(), "42");
    }

    #[test]
    fn rule_id_parses_from_str() {
        let id: RuleId = " 7 ".parse().unwrap();
        assert_eq!(id, RuleId::new(7));
    }

    #[test]
    fn accident_type_id_rejects_non_numeric() {
        assert!("abc".parse::<AccidentTypeId>().is_err());
    }

    #[test]
    fn ids_serialize_transparently() {
        let json = serde_json::to_string(&AccidentId::new(3)).unwrap();
        assert_eq!(json, "3");

        let id: RuleId = serde_json::from_str("5").unwrap();
        assert_eq!(id.value(), 5);
    }

    #[test]
    fn ids_order_by_value() {
        assert!(RuleId::new(1) < RuleId::new(2));
    }
}
