use serde::{Deserialize, Serialize};

use crate::coefficients::SeedCoefficients;
use crate::seed::{derive_seed, Seed};

pub const SEED_DELIMITER: char = '|';
pub const SEED_HEX_LEN: usize = 12;
pub const SEED_BYTE_LEN: usize = SEED_HEX_LEN / 2;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedInputs {
    pub remote: String,
    pub epoch: String,
    pub start: String,
}

impl SeedInputs {
    pub fn new(
        remote: impl Into<String>,
        epoch: impl Into<String>,
        start: impl Into<String>,
    ) -> Self {
        Self {
            remote: remote.into(),
            epoch: epoch.into(),
            start: start.into(),
        }
    }

    pub fn composite_key(&self) -> String {
        composite_key(&self.remote, &self.epoch, &self.start)
    }

    pub fn seed(&self) -> Seed {
        derive_seed(&self.remote, &self.epoch, &self.start)
    }
}

/// Everything a caller may want to publish about one derivation.
///
/// Only built through [`SeedReport::from_inputs`], so the coefficients always
/// belong to the seed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SeedReport {
    #[serde(flatten)]
    pub inputs: SeedInputs,
    pub seed: Seed,
    pub coefficients: SeedCoefficients,
}

impl SeedReport {
    pub fn from_inputs(inputs: SeedInputs) -> Self {
        let seed = inputs.seed();
        Self {
            coefficients: seed.coefficients(),
            inputs,
            seed,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Joins the inputs in fixed order without escaping.
///
/// Values that themselves contain [`SEED_DELIMITER`] can produce the same
/// composite key as a differently split triple, and therefore the same seed.
pub fn composite_key(remote: &str, epoch: &str, start: &str) -> String {
    format!("{remote}{SEED_DELIMITER}{epoch}{SEED_DELIMITER}{start}")
}
