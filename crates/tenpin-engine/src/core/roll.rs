use serde::{Deserialize, Serialize};

use crate::InvalidRollError;

/// Number of pins knocked down by a single delivery.
///
/// Always within `0..=10`. Serialized as a plain integer; deserializing an
/// out-of-range value fails instead of clamping.
///
/// # Example
///
/// ```
/// use tenpin_engine::Roll;
///
/// assert_eq!(Roll::new(7).unwrap().pins(), 7);
/// assert!(Roll::new(11).is_err());
/// assert!(Roll::STRIKE.is_strike());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{_0}")]
pub struct Roll(u8);

impl Roll {
    /// Pins standing at the start of a frame.
    pub const MAX_PINS: u8 = 10;

    /// No pins down.
    pub const GUTTER: Self = Self(0);

    /// All pins down.
    pub const STRIKE: Self = Self(Self::MAX_PINS);

    pub const fn new(pins: u8) -> Result<Self, InvalidRollError> {
        if pins > Self::MAX_PINS {
            return Err(InvalidRollError { pins });
        }
        Ok(Self(pins))
    }

    #[must_use]
    pub const fn pins(self) -> u8 {
        self.0
    }

    /// Returns `true` if this roll knocked down every pin.
    #[must_use]
    pub const fn is_strike(self) -> bool {
        self.0 == Self::MAX_PINS
    }
}

impl TryFrom<u8> for Roll {
    type Error = InvalidRollError;

    fn try_from(pins: u8) -> Result<Self, Self::Error> {
        Self::new(pins)
    }
}

impl From<Roll> for u8 {
    fn from(roll: Roll) -> Self {
        roll.0
    }
}

impl From<Roll> for u16 {
    fn from(roll: Roll) -> Self {
        u16::from(roll.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_pin_range() {
        for pins in 0..=10 {
            assert_eq!(Roll::new(pins).unwrap().pins(), pins);
        }
    }

    #[test]
    fn test_rejects_more_than_ten_pins() {
        assert_eq!(Roll::new(11), Err(InvalidRollError { pins: 11 }));
        assert_eq!(Roll::new(u8::MAX), Err(InvalidRollError { pins: u8::MAX }));
    }

    #[test]
    fn test_only_ten_is_strike() {
        assert!(Roll::STRIKE.is_strike());
        assert!(!Roll::new(9).unwrap().is_strike());
        assert!(!Roll::GUTTER.is_strike());
    }

    #[test]
    fn test_serializes_as_integer() {
        let roll = Roll::new(7).unwrap();
        assert_eq!(serde_json::to_string(&roll).unwrap(), "7");
        assert_eq!(serde_json::from_str::<Roll>("7").unwrap(), roll);
    }

    #[test]
    fn test_deserialize_out_of_range_fails() {
        let err = serde_json::from_str::<Roll>("12").unwrap_err();
        assert!(err.to_string().contains("invalid roll"));
    }
}
