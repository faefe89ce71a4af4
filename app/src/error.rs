use std::path::PathBuf;

use solana_client::client_error::ClientError;
use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Failures of calls that reach the cluster. The display string is what the
/// create-game modal shows to the player.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Connect your wallet first")]
    WalletNotConnected,
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error("account {0} not found")]
    AccountNotFound(Pubkey),
    #[error("could not decode account {account}: {source}")]
    Decode {
        account: Pubkey,
        #[source]
        source: anchor_lang::error::Error,
    },
    #[error("game {0} has not been joined")]
    GameNotJoined(Pubkey),
}

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("could not read keypair {path}: {message}")]
    Keypair { path: PathBuf, message: String },
    #[error("no wallet adapter at position {0}")]
    UnknownAdapter(usize),
}
