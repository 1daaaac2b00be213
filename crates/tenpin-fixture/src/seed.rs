use std::{fmt, str::FromStr};

use rand::{
    Rng,
    distr::{Distribution, StandardUniform},
};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Seed for deterministic game generation.
///
/// A 128-bit (16-byte) seed. The same seed always yields the same sequence of
/// games, so a failing fixture can be reproduced from its seed alone.
///
/// Written as a 32-character hex string, both in serialized form and via
/// [`Display`](fmt::Display) / [`FromStr`].
///
/// # Example
///
/// ```
/// use rand::Rng as _;
/// use tenpin_fixture::GameSeed;
///
/// let seed: GameSeed = rand::rng().random();
/// let parsed: GameSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; 16]);

impl GameSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseSeedError {
    #[display("invalid hex: expected 32 characters, got {len}")]
    Length { len: usize },
    #[display("invalid hex: {text}")]
    Digits { text: String },
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseSeedError::Length { len: s.len() });
        }
        // from_str_radix accepts a leading '+', which is not a hex digit
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseSeedError::Digits { text: s.to_owned() });
        }
        let num = u128::from_str_radix(s, 16).map_err(|_| ParseSeedError::Digits {
            text: s.to_owned(),
        })?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `GameSeed` values with `rng.random()`.
impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}
