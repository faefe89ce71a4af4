use std::{path::PathBuf, sync::Arc};

use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
    signer::Signer,
};
use tracing::{info, warn};

use crate::error::WalletError;

/// Where a wallet's key comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletAdapter {
    /// A Solana CLI JSON keypair file
    KeypairFile(PathBuf),
}

impl WalletAdapter {
    pub fn name(&self) -> String {
        match self {
            WalletAdapter::KeypairFile(path) => path.display().to_string(),
        }
    }

    pub fn load(&self) -> Result<Keypair, WalletError> {
        match self {
            WalletAdapter::KeypairFile(path) => {
                read_keypair_file(path).map_err(|error| WalletError::Keypair {
                    path: path.clone(),
                    message: error.to_string(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalletState {
    pub public_key: Option<Pubkey>,
    pub connected: bool,
}

/// Owns the connected wallet and hands out its signer.
#[derive(Default)]
pub struct WalletProvider {
    adapters: Vec<WalletAdapter>,
    signer: Option<Arc<Keypair>>,
}

impl WalletProvider {
    pub fn new(adapters: Vec<WalletAdapter>, auto_connect: bool) -> Self {
        let mut provider = Self {
            adapters,
            signer: None,
        };

        if auto_connect {
            provider.auto_connect();
        }

        provider
    }

    /// Already connected, for callers that hold the key themselves.
    pub fn with_signer(keypair: Keypair) -> Self {
        Self {
            adapters: Vec::new(),
            signer: Some(Arc::new(keypair)),
        }
    }

    fn auto_connect(&mut self) {
        for index in 0..self.adapters.len() {
            match self.connect(index) {
                Ok(_) => return,
                Err(error) => warn!(%error, "skipping wallet adapter"),
            }
        }
    }

    pub fn adapters(&self) -> &[WalletAdapter] {
        &self.adapters
    }

    pub fn connect(&mut self, index: usize) -> Result<Pubkey, WalletError> {
        let adapter = self
            .adapters
            .get(index)
            .ok_or(WalletError::UnknownAdapter(index))?;

        let keypair = adapter.load()?;
        let public_key = keypair.pubkey();

        info!(wallet = %adapter.name(), %public_key, "wallet connected");

        self.signer = Some(Arc::new(keypair));
        Ok(public_key)
    }

    pub fn disconnect(&mut self) {
        if let Some(signer) = self.signer.take() {
            info!(public_key = %signer.pubkey(), "wallet disconnected");
        }
    }

    pub fn public_key(&self) -> Option<Pubkey> {
        self.signer.as_ref().map(|signer| signer.pubkey())
    }

    pub fn signer(&self) -> Option<Arc<Keypair>> {
        self.signer.clone()
    }

    pub fn state(&self) -> WalletState {
        let public_key = self.public_key();

        WalletState {
            public_key,
            connected: public_key.is_some(),
        }
    }
}
