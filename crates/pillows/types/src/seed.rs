use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// A raw 256-bit word as delivered by the randomness oracle.
///
/// Stored big-endian, so `RandomWord::from_u64(1337)` has the same byte
/// layout as the integer `1337` widened to 256 bits. A word may be zero; only
/// a non-zero word can become a [`Seed`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RandomWord([u8; 32]);

impl RandomWord {
    pub const ZERO: RandomWord = RandomWord([0u8; 32]);

    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Widen a `u64` into the low-order bytes of a 256-bit word.
    pub fn from_u64(value: u64) -> Self {
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&value.to_be_bytes());
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// `0x`-prefixed, 64 hex digits.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse a hex word, with or without `0x`, up to 64 digits.
    pub fn from_hex(text: &str) -> Result<Self, TypeError> {
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if digits.is_empty() || digits.len() > 64 {
            return Err(TypeError::InvalidHex(text.to_string()));
        }
        let padded = format!("{digits:0>64}");
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(&padded, &mut bytes)
            .map_err(|e| TypeError::InvalidHex(format!("{text}: {e}")))?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Debug for RandomWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RandomWord({})", self.to_hex())
    }
}

impl std::fmt::Display for RandomWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<u64> for RandomWord {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl From<Seed> for RandomWord {
    fn from(seed: Seed) -> Self {
        seed.0
    }
}

impl Serialize for RandomWord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RandomWord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        RandomWord::from_hex(&text).map_err(serde::de::Error::custom)
    }
}

/// The collection-wide reveal seed.
///
/// Always non-zero: zero is how "not yet revealed" used to be encoded, so the
/// type refuses to hold it and absence is expressed with `Option<Seed>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RandomWord", into = "RandomWord")]
pub struct Seed(RandomWord);

impl Seed {
    pub fn new(word: RandomWord) -> Result<Self, TypeError> {
        if word.is_zero() {
            return Err(TypeError::ZeroSeed);
        }
        Ok(Self(word))
    }

    pub fn from_u64(value: u64) -> Result<Self, TypeError> {
        Self::new(RandomWord::from_u64(value))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        self.0.as_bytes()
    }

    pub fn word(&self) -> RandomWord {
        self.0
    }

    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl TryFrom<RandomWord> for Seed {
    type Error = TypeError;

    fn try_from(word: RandomWord) -> Result<Self, Self::Error> {
        Seed::new(word)
    }
}

impl std::fmt::Debug for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seed({})", self.to_hex())
    }
}

impl std::fmt::Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
