use rand::RngCore;
use sha2::{Digest, Sha256};

/// A server seed and the hash a game commits to before anyone can join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCommitment {
    seed: String,
    hash: String,
}

impl SeedCommitment {
    /// 32 random bytes, hex encoded so the seed fits the program's string field.
    pub fn generate<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        Self::from_seed(hex::encode(bytes))
    }

    pub fn from_seed(seed: impl Into<String>) -> Self {
        let seed = seed.into();
        let hash = hex::encode(Sha256::digest(seed.as_bytes()));
        Self { seed, hash }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }
}

pub fn verify(seed: &str, hash: &str) -> bool {
    SeedCommitment::from_seed(seed).hash.eq_ignore_ascii_case(hash)
}
