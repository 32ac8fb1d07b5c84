//! Scoring coefficients carried by a seed.
//!
//! A seed's first three bytes pick one modulus each for the priority score.
//! Two deployments sharing a seed therefore rank identically.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::seed::Seed;

pub const BASE_SCORE: i64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCoefficients {
    /// Latency modulus, 7..=11.
    pub a: u64,
    /// Account age modulus, 13..=19.
    pub b: u64,
    /// Rapid action modulus, 3..=5.
    pub c: u64,
}

/// Measurements for one candidate. Callers sample clocks; this crate does not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInputs {
    pub signup_latency_ms: u64,
    pub account_age_days: u64,
    pub rapid_actions: u64,
}

impl SeedCoefficients {
    pub fn from_seed(seed: &Seed) -> Self {
        let [first, second, third, ..] = *seed.as_bytes();
        Self {
            a: 7 + u64::from(first % 5),
            b: 13 + u64::from(second % 7),
            c: 3 + u64::from(third % 3),
        }
    }

    pub fn priority_score(&self, inputs: &ScoreInputs) -> i64 {
        // Each remainder is below 20, so the casts are lossless.
        let latency = (inputs.signup_latency_ms % self.a) as i64;
        let age = (inputs.account_age_days % self.b) as i64;
        let rapid = (inputs.rapid_actions % self.c) as i64;
        BASE_SCORE + latency + age - rapid
    }
}

impl fmt::Display for SeedCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a={} b={} c={}", self.a, self.b, self.c)
    }
}
