pub const MIN_BET:u64 = 1_000_000; // 0.001 SOL

pub const MAX_COMMISSION_FEE:u8 = 10; // In percent

pub const PERCENT:u64 = 100;

pub const HASH_LENGTH:usize = 32;

/// A SHA-256 digest written out as hex
pub const SEED_HASH_LENGTH:usize = HASH_LENGTH * 2;

pub const MAX_SERVER_SEED_LENGTH:usize = 64;

pub const MAX_BLOCK_HASH_LENGTH:usize = 64;

/// How long a joined game waits for its seed before either player can take
/// their stake back
pub const DEFAULT_OFFSET:i64 = 60 * 60 * 36; // 36 hours

pub const HEADS:u8 = 0;

pub const TAILS:u8 = 1;

pub const CASINO_SEED:&str = "casino";

pub const VAULT_SEED:&str = "vault";

pub const GAME_SEED:&str = "game";
