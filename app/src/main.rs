use anyhow::{anyhow, Context, Result};
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use coinflip_app::{
    client::RpcProgramClient,
    config::{Cli, Command},
    logging,
    views::CoinFlipPage,
    wallet::WalletProvider,
};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    let wallet = WalletProvider::new(cli.wallet_adapters(), cli.auto_connect());
    let client = RpcProgramClient::new(cli.rpc_url.clone(), wallet);

    info!(rpc_url = %cli.rpc_url, "using cluster");

    match cli.command {
        Command::Games => {
            let mut page = CoinFlipPage::default();

            page.reload(&client)
                .await
                .context("Failed to fetch open games")?;

            let view = page.render(&client.wallet().state());

            if view.cards.is_empty() {
                println!("No open games");
            }

            for card in view.cards {
                println!("{}", card);
            }
        }

        Command::Create { amount, side } => {
            let mut page = CoinFlipPage::default();

            if !page.open_create_modal(&client.wallet().state()) {
                return Err(anyhow!("Connect your wallet first"));
            }

            let modal = page.modal_mut();
            modal.set_amount(amount);
            modal.set_side(side);

            let created = page
                .confirm_create(&client, &mut StdRng::from_entropy())
                .await;

            let Some(created) = created else {
                let error = page.modal().error().unwrap_or("unknown error");
                return Err(anyhow!("Failed to create game: {}", error));
            };

            if let Some(alert) = page.modal_mut().take_alert() {
                println!("{}", alert);
            }

            println!("Signature:   {}", created.signature);
            println!("Server seed: {}", created.commitment.seed());
            println!("Seed hash:   {}", created.commitment.hash());
            println!("Pass the server seed to the casino admin to resolve the game");
            println!("A joined game nobody resolves can be refunded with `coinflip default` after 36 hours");
        }

        Command::Join { game, block_hash } => {
            let signature = client
                .submit_join_game(game, block_hash)
                .await
                .with_context(|| format!("Failed to join game {}", game))?;

            println!("Joined game {}. Tx: {}", game, signature);
        }

        Command::Cancel { game } => {
            let signature = client
                .submit_cancel_game(game)
                .await
                .with_context(|| format!("Failed to cancel game {}", game))?;

            println!("Cancelled game {}. Tx: {}", game, signature);
        }

        Command::Default { game } => {
            let signature = client
                .submit_default_game(game)
                .await
                .with_context(|| format!("Failed to default game {}", game))?;

            println!("Refunded both stakes of game {}. Tx: {}", game, signature);
        }

        Command::Resolve { game, seed } => {
            let signature = client
                .submit_resolve_game(game, seed)
                .await
                .with_context(|| format!("Failed to resolve game {}", game))?;

            println!("Resolved game {}. Tx: {}", game, signature);
        }
    }

    Ok(())
}
