use anchor_lang::solana_program::hash::hashv;

use crate::{SEED_HASH_LENGTH};

/// Checks the commitment is a hex encoded SHA-256 digest.
pub fn is_valid_seed_hash(server_seed_hash:&str)->bool{
    server_seed_hash.len() == SEED_HASH_LENGTH && hex::decode(server_seed_hash).is_ok()
}

/// Hex encoded SHA-256 of the server seed, the value a creator commits to.
pub fn hash_server_seed(server_seed:&str)->String{
    hex::encode(hashv(&[server_seed.as_bytes()]).to_bytes())
}

pub fn is_seed_committed(server_seed:&str, server_seed_hash:&str)->bool{
    hash_server_seed(server_seed).eq_ignore_ascii_case(server_seed_hash)
}

/// Flips the coin, the side is the parity of the first byte of
/// SHA-256(server_seed || block_hash).
// Both inputs are variable length, but the seed is fixed by the commitment
// before the block hash is chosen so the split point cannot be moved.
pub fn flip(server_seed:&str, block_hash:&str)->u8{
    let digest = hashv(&[
        server_seed.as_bytes(),
        block_hash.as_bytes()
    ]).to_bytes();

    digest[0] % 2
}
