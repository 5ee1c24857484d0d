//! State bucket name generation

use rand::Rng;

/// Prefix shared by all state buckets created by `snowclone init`
pub const BUCKET_PREFIX: &str = "snowclone-";

/// Generate a state bucket name with a random hex suffix
///
/// Uniqueness relies entirely on the 48 bits of randomness; no collision
/// check is made against existing buckets.
pub fn generate_bucket_name() -> String {
    let suffix: [u8; 6] = rand::rng().random();
    format!("{}{}", BUCKET_PREFIX, hex::encode(suffix))
}
