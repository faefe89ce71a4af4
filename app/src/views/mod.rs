mod create_modal;
mod game_list;
mod page;

pub use create_modal::*;
pub use game_list::*;
pub use page::*;

/// Stakes are entered in SOL.
pub const MIN_STAKE: f64 = 0.1;
pub const STAKE_STEP: f64 = 0.1;
pub const DEFAULT_STAKE: f64 = 0.1;
