pub mod game;
pub use game::*;

pub mod error;
pub use error::*;

pub mod casino;
pub use casino::*;

pub mod constants;
pub use constants::*;

pub mod event;
pub use event::*;
