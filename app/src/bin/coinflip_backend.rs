use anyhow::Result;
use clap::Parser;

use coinflip_app::{config::BackendArgs, health, logging};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let args = BackendArgs::parse();

    health::serve(&args).await
}
