#![cfg(feature = "test-sbf")]

use anchor_lang::InstructionData;
use litesvm::LiteSVM;
use anyhow::Result;
use solana_sdk::{
    instruction::{Instruction, AccountMeta},
    pubkey::Pubkey,
    signer::{Signer, keypair::Keypair},
    system_program::ID as SYSTEM_PROGRAM_ID,
};

mod common;
use common::utils::{
    BLOCK_HASH,
    add_coinflip_program,
    balance,
    casino_address,
    create_casino_account,
    create_game_account,
    create_vault_account,
    funded_keypair,
    game_address,
    read_casino,
    read_game,
    send,
    set_current_time,
    server_seed_hash,
    vault_address,
};

use coinflip::{
    Casino, Game, GameState, HEADS, ID as COINFLIP_PROGRAM_ID, JoinGameArgs, MAX_BLOCK_HASH_LENGTH, instruction::JoinGame
};

struct TestSetup {}

impl TestSetup {
    const COINFLIP_PROGRAM_ID: Pubkey = COINFLIP_PROGRAM_ID;

    const BET_AMOUNT: u64 = 50_000_000;

    fn builder(
        svm: &mut LiteSVM,
        state: GameState,
        joiner_is_creator: bool,
        block_hash: String,
    ) -> Result<([Instruction; 1], Vec<Keypair>)> {

        let creator = funded_keypair(svm);

        let joiner = if joiner_is_creator {
            creator.insecure_clone()
        } else {
            funded_keypair(svm)
        };

        let (casino_key, _) = casino_address();
        let (vault_key, vault_bump) = vault_address();

        let mut casino = Casino::new(Pubkey::new_unique(), 2, vault_bump);
        casino.total_games = 1;
        casino.total_volume = Self::BET_AMOUNT;
        casino.escrowed = Self::BET_AMOUNT;

        create_casino_account(svm, casino_key, &casino);

        create_vault_account(svm, vault_key, Self::BET_AMOUNT);

        let mut game = Game::new(0, creator.pubkey(), Self::BET_AMOUNT, HEADS, server_seed_hash(), 0);
        game.state = state;

        let game_key = game_address(0);

        create_game_account(svm, game_key, &game);

        let accounts: Vec<AccountMeta> = vec![
            AccountMeta::new(game_key, false),
            AccountMeta::new(casino_key, false),
            AccountMeta::new(vault_key, false),
            AccountMeta::new(joiner.pubkey(), true),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ];

        let args = JoinGameArgs { block_hash };

        let join_game = Instruction {
            program_id: Self::COINFLIP_PROGRAM_ID,
            accounts,
            data: JoinGame { args }.data(),
        };

        Ok(([join_game], vec![joiner]))
    }

    pub fn with_default(svm: &mut LiteSVM) -> Result<([Instruction; 1], Vec<Keypair>)> {
        Self::builder(svm, GameState::Created, false, BLOCK_HASH.to_string())
    }

    pub fn with_own_game(svm: &mut LiteSVM) -> Result<([Instruction; 1], Vec<Keypair>)> {
        Self::builder(svm, GameState::Created, true, BLOCK_HASH.to_string())
    }

    pub fn with_cancelled_game(svm: &mut LiteSVM) -> Result<([Instruction; 1], Vec<Keypair>)> {
        Self::builder(svm, GameState::Cancelled, false, BLOCK_HASH.to_string())
    }

    pub fn with_already_joined_game(svm: &mut LiteSVM) -> Result<([Instruction; 1], Vec<Keypair>)> {
        Self::builder(svm, GameState::Joined, false, BLOCK_HASH.to_string())
    }

    pub fn with_empty_block_hash(svm: &mut LiteSVM) -> Result<([Instruction; 1], Vec<Keypair>)> {
        Self::builder(svm, GameState::Created, false, String::new())
    }

    pub fn with_block_hash_too_long(svm: &mut LiteSVM) -> Result<([Instruction; 1], Vec<Keypair>)> {
        Self::builder(svm, GameState::Created, false, "a".repeat(MAX_BLOCK_HASH_LENGTH + 1))
    }
}

fn expect_failure(
    setup: fn(&mut LiteSVM) -> Result<([Instruction; 1], Vec<Keypair>)>,
    reason: &str,
) {
    let mut svm = LiteSVM::new();

    add_coinflip_program(&mut svm);

    let (instructions, signers) = match setup(&mut svm) {
        Ok(result) => result,
        Err(error) => panic!("Failed to create instruction: {}", error),
    };

    if send(&mut svm, &instructions, &signers) {
        panic!("This transaction should have failed - {}", reason);
    }
}

#[test]
fn test_join_game_success() {
    let mut svm = LiteSVM::new();

    add_coinflip_program(&mut svm);

    let (instructions, signers) = match TestSetup::with_default(&mut svm) {
        Ok(result) => result,
        Err(error) => panic!("Failed to create instruction: {}", error),
    };

    let vault_before = balance(&svm, vault_address().0);

    set_current_time(&mut svm, 1_700_000_000);

    if !send(&mut svm, &instructions, &signers) {
        panic!("Expected success but transaction failed");
    }

    assert_eq!(balance(&svm, vault_address().0), vault_before + TestSetup::BET_AMOUNT);

    let game = read_game(&svm, game_address(0));

    assert!(game.state == GameState::Joined);
    assert_eq!(game.joiner, Some(signers[0].pubkey()));
    assert_eq!(game.block_hash.as_deref(), Some(BLOCK_HASH));
    assert_eq!(game.joined_at, 1_700_000_000);

    let casino = read_casino(&svm, casino_address().0);

    assert_eq!(casino.escrowed, TestSetup::BET_AMOUNT * 2);
    assert_eq!(casino.total_volume, TestSetup::BET_AMOUNT * 2);
}

#[test]
fn test_join_game_fails_for_own_game() {
    expect_failure(TestSetup::with_own_game, "Cannot join own game");
}

#[test]
fn test_join_game_fails_for_cancelled_game() {
    expect_failure(TestSetup::with_cancelled_game, "Game cancelled");
}

#[test]
fn test_join_game_fails_for_joined_game() {
    expect_failure(TestSetup::with_already_joined_game, "Game already joined");
}

#[test]
fn test_join_game_fails_with_empty_block_hash() {
    expect_failure(TestSetup::with_empty_block_hash, "Empty block hash");
}

#[test]
fn test_join_game_fails_with_block_hash_too_long() {
    expect_failure(TestSetup::with_block_hash_too_long, "Block hash too long");
}
