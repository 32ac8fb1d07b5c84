//! Deterministic seed derivation primitives.
//!
//! This crate owns the seed contract: how three input strings become a
//! composite key, how that key is hashed into a short seed, and what the
//! seed's consumers derive from it. It never reads clocks, files, or the
//! environment, and it never installs a tracing subscriber.

pub mod coefficients;
pub mod contract;
pub mod seed;

pub use coefficients::{ScoreInputs, SeedCoefficients};
pub use contract::{composite_key, SeedInputs, SeedReport, SEED_DELIMITER, SEED_HEX_LEN};
pub use seed::{derive_seed, generate_seed, ParseSeedError, Seed};
