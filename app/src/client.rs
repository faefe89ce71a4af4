#![allow(async_fn_in_trait)]

use anchor_lang::{AccountDeserialize, Discriminator, InstructionData, ToAccountMetas};
use coinflip::{
    accounts::{
        CancelGameAccounts, CreateGameAccounts, DefaultGameAccounts, JoinGameAccounts,
        ResolveGameAccounts,
    },
    instruction, Casino, CreateGameArgs, JoinGameArgs, ResolveGameArgs,
};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    commitment_config::CommitmentConfig, instruction::Instruction, pubkey::Pubkey,
    signer::Signer, system_program, transaction::Transaction,
};
use tracing::{debug, info};

use crate::{error::RpcError, game::Game, wallet::WalletProvider};

/// What the create-game flow needs from the wallet and the cluster.
pub trait ProgramClient {
    fn connected_address(&self) -> Option<Pubkey>;

    /// Submits `create_game` and returns the transaction signature.
    async fn submit_create_game(
        &self,
        stake: u64,
        side: u8,
        seed_hash: &str,
    ) -> Result<String, RpcError>;
}

pub trait GameReader {
    /// Games still waiting for a second player, oldest first.
    async fn fetch_open_games(&self) -> Result<Vec<Game>, RpcError>;
}

pub fn casino_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[coinflip::CASINO_SEED.as_bytes()], program_id).0
}

pub fn vault_address(program_id: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[coinflip::VAULT_SEED.as_bytes()], program_id).0
}

pub fn game_address(program_id: &Pubkey, index: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[coinflip::GAME_SEED.as_bytes(), index.to_le_bytes().as_ref()],
        program_id,
    )
    .0
}

fn decode<T: AccountDeserialize>(address: Pubkey, data: &[u8]) -> Result<T, RpcError> {
    let mut data = data;
    T::try_deserialize(&mut data).map_err(|source| RpcError::Decode {
        account: address,
        source,
    })
}

/// Decodes the game accounts among `accounts` and keeps the open ones, oldest first.
fn open_games<'a>(
    accounts: impl Iterator<Item = (&'a Pubkey, &'a [u8])>,
) -> Result<Vec<(u64, Game)>, RpcError> {
    let mut games = Vec::new();

    for (address, data) in accounts {
        // The casino account is owned by the program too
        if !data.starts_with(coinflip::Game::DISCRIMINATOR) {
            continue;
        }

        let game: coinflip::Game = decode(*address, data)?;

        if game.is_open() {
            games.push((game.index, Game::from_account(address, &game)));
        }
    }

    games.sort_by_key(|(index, _)| *index);
    Ok(games)
}

pub struct RpcProgramClient {
    rpc: RpcClient,
    wallet: WalletProvider,
    program_id: Pubkey,
}

impl RpcProgramClient {
    pub fn new(rpc_url: String, wallet: WalletProvider) -> Self {
        Self {
            rpc: RpcClient::new_with_commitment(rpc_url, CommitmentConfig::confirmed()),
            wallet,
            program_id: coinflip::ID,
        }
    }

    pub fn wallet(&self) -> &WalletProvider {
        &self.wallet
    }

    pub fn wallet_mut(&mut self) -> &mut WalletProvider {
        &mut self.wallet
    }

    pub async fn fetch_casino(&self) -> Result<Casino, RpcError> {
        let address = casino_address(&self.program_id);
        let data = self.fetch_account_data(address).await?;
        decode(address, &data)
    }

    pub async fn fetch_game(&self, address: Pubkey) -> Result<coinflip::Game, RpcError> {
        let data = self.fetch_account_data(address).await?;
        decode(address, &data)
    }

    async fn fetch_account_data(&self, address: Pubkey) -> Result<Vec<u8>, RpcError> {
        self.rpc
            .get_account_with_commitment(&address, self.rpc.commitment())
            .await?
            .value
            .map(|account| account.data)
            .ok_or(RpcError::AccountNotFound(address))
    }

    async fn send(&self, instruction: Instruction) -> Result<String, RpcError> {
        let signer = self.wallet.signer().ok_or(RpcError::WalletNotConnected)?;

        let recent_blockhash = self.rpc.get_latest_blockhash().await?;

        let transaction = Transaction::new_signed_with_payer(
            &[instruction],
            Some(&signer.pubkey()),
            &[signer.as_ref()],
            recent_blockhash,
        );

        let signature = self.rpc.send_and_confirm_transaction(&transaction).await?;

        info!(%signature, "transaction confirmed");
        Ok(signature.to_string())
    }

    fn player(&self) -> Result<Pubkey, RpcError> {
        self.wallet.public_key().ok_or(RpcError::WalletNotConnected)
    }

    /// Matches the stake of `game`, mixing in the cluster's latest block hash
    /// when none is given.
    pub async fn submit_join_game(
        &self,
        game: Pubkey,
        block_hash: Option<String>,
    ) -> Result<String, RpcError> {
        let player = self.player()?;

        let block_hash = match block_hash {
            Some(block_hash) => block_hash,
            None => self.rpc.get_latest_blockhash().await?.to_string(),
        };

        debug!(%game, %block_hash, "joining game");

        let accounts = JoinGameAccounts {
            game,
            casino: casino_address(&self.program_id),
            vault: vault_address(&self.program_id),
            player,
            system_program: system_program::ID,
        };

        self.send(Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: instruction::JoinGame {
                args: JoinGameArgs { block_hash },
            }
            .data(),
        })
        .await
    }

    pub async fn submit_cancel_game(&self, game: Pubkey) -> Result<String, RpcError> {
        let creator = self.player()?;

        let accounts = CancelGameAccounts {
            creator,
            game,
            casino: casino_address(&self.program_id),
            vault: vault_address(&self.program_id),
        };

        self.send(Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: instruction::CancelGame {}.data(),
        })
        .await
    }

    /// Refunds both stakes once a joined game has waited too long for its seed.
    pub async fn submit_default_game(&self, game: Pubkey) -> Result<String, RpcError> {
        let player = self.player()?;

        let account = self.fetch_game(game).await?;
        let joiner = account.joiner.ok_or(RpcError::GameNotJoined(game))?;

        let accounts = DefaultGameAccounts {
            player,
            game,
            creator: account.creator,
            joiner,
            casino: casino_address(&self.program_id),
            vault: vault_address(&self.program_id),
        };

        self.send(Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: instruction::DefaultGame {}.data(),
        })
        .await
    }

    /// Flips the coin locally to find the account the program will pay, the
    /// program repeats the flip and rejects any other winner.
    pub async fn submit_resolve_game(
        &self,
        game: Pubkey,
        server_seed: String,
    ) -> Result<String, RpcError> {
        let admin = self.player()?;

        let account = self.fetch_game(game).await?;

        let winner = account
            .block_hash
            .as_deref()
            .and_then(|block_hash| account.winner_for(coinflip::flip(&server_seed, block_hash)))
            .ok_or(RpcError::GameNotJoined(game))?;

        debug!(%game, %winner, "resolving game");

        let accounts = ResolveGameAccounts {
            game,
            casino: casino_address(&self.program_id),
            vault: vault_address(&self.program_id),
            winner,
            creator: account.creator,
            admin,
        };

        self.send(Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: instruction::ResolveGame {
                args: ResolveGameArgs { server_seed },
            }
            .data(),
        })
        .await
    }
}

impl ProgramClient for RpcProgramClient {
    fn connected_address(&self) -> Option<Pubkey> {
        self.wallet.public_key()
    }

    async fn submit_create_game(
        &self,
        stake: u64,
        side: u8,
        seed_hash: &str,
    ) -> Result<String, RpcError> {
        let player = self.player()?;

        // The next game lands at the current game count
        let casino = self.fetch_casino().await?;
        let game = game_address(&self.program_id, casino.total_games);

        debug!(%game, stake, side, "creating game");

        let accounts = CreateGameAccounts {
            casino: casino_address(&self.program_id),
            game,
            vault: vault_address(&self.program_id),
            player,
            system_program: system_program::ID,
        };

        self.send(Instruction {
            program_id: self.program_id,
            accounts: accounts.to_account_metas(None),
            data: instruction::CreateGame {
                args: CreateGameArgs {
                    bet_amount: stake,
                    side_choice: side,
                    server_seed_hash: seed_hash.to_string(),
                },
            }
            .data(),
        })
        .await
    }
}

impl GameReader for RpcProgramClient {
    /// Finished games are closed, so only live games come back from the program.
    async fn fetch_open_games(&self) -> Result<Vec<Game>, RpcError> {
        let accounts = self.rpc.get_program_accounts(&self.program_id).await?;

        let games = open_games(
            accounts
                .iter()
                .map(|(address, account)| (address, account.data.as_slice())),
        )?;

        debug!(count = games.len(), "fetched open games");
        Ok(games.into_iter().map(|(_, game)| game).collect())
    }
}
