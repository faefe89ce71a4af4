pub mod initialize_casino;
pub use initialize_casino::*;

pub mod update_casino;
pub use update_casino::*;

pub mod create_game;
pub use create_game::*;

pub mod join_game;
pub use join_game::*;

pub mod resolve_game;
pub use resolve_game::*;

pub mod cancel_game;
pub use cancel_game::*;

pub mod withdraw;
pub use withdraw::*;

pub mod default_game;
pub use default_game::*;
