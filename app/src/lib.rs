pub mod client;
pub mod config;
pub mod error;
pub mod game;
pub mod health;
pub mod logging;
pub mod seed;
pub mod views;
pub mod wallet;
