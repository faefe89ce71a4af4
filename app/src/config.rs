use std::path::PathBuf;

use clap::{Parser, Subcommand};
use solana_sdk::pubkey::Pubkey;

use crate::{game::CoinSide, views::DEFAULT_STAKE, wallet::WalletAdapter};

#[derive(Parser, Debug)]
#[command(name = "coinflip", author, version, about = "Create, join and settle coin flips", long_about = None)]
pub struct Cli {
    /// Solana RPC URL
    #[arg(long, env = "COINFLIP_RPC_URL", default_value = "http://localhost:8899")]
    pub rpc_url: String,

    /// Keypair files to offer as wallets, the first one that loads is connected
    #[arg(long = "keypair", env = "COINFLIP_KEYPAIR", value_delimiter = ',')]
    pub keypairs: Vec<PathBuf>,

    /// Don't connect a wallet on start
    #[arg(long)]
    pub no_auto_connect: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn wallet_adapters(&self) -> Vec<WalletAdapter> {
        self.keypairs.iter().cloned().map(WalletAdapter::KeypairFile).collect()
    }

    pub fn auto_connect(&self) -> bool {
        !self.no_auto_connect
    }
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// List the games waiting for a second player
    Games,
    /// Open a new game, staking the amount in SOL
    Create {
        #[arg(long, default_value_t = DEFAULT_STAKE)]
        amount: f64,
        #[arg(long, value_enum, default_value_t = CoinSide::Heads)]
        side: CoinSide,
    },
    /// Match the stake of an open game
    Join {
        game: Pubkey,
        /// Defaults to the latest block hash of the cluster
        #[arg(long)]
        block_hash: Option<String>,
    },
    /// Take back the stake of a game nobody joined
    Cancel { game: Pubkey },
    /// Reveal the server seed and pay the winner (admin)
    Resolve { game: Pubkey, seed: String },
    /// Take both stakes back from a joined game whose seed was never revealed
    Default { game: Pubkey },
}

#[derive(Parser, Debug)]
#[command(name = "coinflip-backend", author, version, about = "Coinflip health backend", long_about = None)]
pub struct BackendArgs {
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "COINFLIP_PORT", default_value_t = 3000)]
    pub port: u16,
}
