use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::coefficients::SeedCoefficients;
use crate::contract::{composite_key, SEED_BYTE_LEN, SEED_HEX_LEN};

pub const DIGEST_LEN: usize = 32;

/// The leading bytes of a SHA-256 digest, rendered as lowercase hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Seed([u8; SEED_BYTE_LEN]);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseSeedError {
    #[error("seed must be {expected} hex characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("invalid seed character {character:?} at index {index}; expected [0-9a-f]")]
    InvalidCharacter { index: usize, character: char },
}

impl Seed {
    pub fn from_digest(digest: &[u8; DIGEST_LEN]) -> Self {
        let mut bytes = [0u8; SEED_BYTE_LEN];
        bytes.copy_from_slice(&digest[..SEED_BYTE_LEN]);
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SEED_BYTE_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn coefficients(&self) -> SeedCoefficients {
        SeedCoefficients::from_seed(self)
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Seed {
    type Err = ParseSeedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        // `hex` accepts uppercase too; seeds are lowercase only.
        if let Some((index, character)) = value
            .char_indices()
            .find(|(_, c)| !matches!(c, '0'..='9' | 'a'..='f'))
        {
            return Err(ParseSeedError::InvalidCharacter { index, character });
        }

        if value.len() != SEED_HEX_LEN {
            return Err(ParseSeedError::InvalidLength {
                expected: SEED_HEX_LEN,
                actual: value.len(),
            });
        }

        let mut bytes = [0u8; SEED_BYTE_LEN];
        for (byte, pair) in bytes.iter_mut().zip(value.as_bytes().chunks_exact(2)) {
            *byte = (nibble(pair[0]) << 4) | nibble(pair[1]);
        }
        Ok(Self(bytes))
    }
}

/// Value of one already validated `[0-9a-f]` character.
fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        _ => c - b'a' + 10,
    }
}

impl TryFrom<String> for Seed {
    type Error = ParseSeedError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.to_hex()
    }
}

/// SHA-256 of the UTF-8 bytes of `composite`.
pub fn composite_digest(composite: &str) -> [u8; DIGEST_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(composite.as_bytes());
    hasher.finalize().into()
}

pub fn derive_seed(remote: &str, epoch: &str, start: &str) -> Seed {
    let composite = composite_key(remote, epoch, start);
    let seed = Seed::from_digest(&composite_digest(&composite));
    tracing::debug!(composite_len = composite.len(), %seed, "derived seed");
    seed
}

/// Returns the 12-character lowercase hex seed for `remote|epoch|start`.
pub fn generate_seed(remote: &str, epoch: &str, start: &str) -> String {
    derive_seed(remote, epoch, start).to_hex()
}
