#![allow(dead_code)]

use litesvm::LiteSVM;
use solana_sdk::{
        account::Account as SolanaAccount, clock::Clock, instruction::Instruction, pubkey::Pubkey, signer::{
            Signer, keypair::Keypair
        }, transaction::Transaction
};
use coinflip::{
    Casino, Game, ID as COINFLIP_PROGRAM_ID, hash_server_seed
};
use anchor_lang::{
    AccountDeserialize,
    AccountSerialize,
    Space,
};

pub const SERVER_SEED:&str = "4f1c9a0b7d2e83f56a1b0c9d8e7f60514a3b2c1d0e9f8a7b6c5d4e3f2a1b0c9d";

pub const BLOCK_HASH:&str = "9xQeWvG816bUx9EPjHmaT23yvVM2ZWbrrpZb9PusVFin";

pub fn server_seed_hash()->String{
    hash_server_seed(SERVER_SEED)
}

pub fn casino_address()->(Pubkey, u8){
    Pubkey::find_program_address(&[b"casino"], &COINFLIP_PROGRAM_ID)
}

pub fn vault_address()->(Pubkey, u8){
    Pubkey::find_program_address(&[b"vault"], &COINFLIP_PROGRAM_ID)
}

pub fn game_address(index:u64)->Pubkey{
    Pubkey::find_program_address(&[b"game", index.to_le_bytes().as_ref()], &COINFLIP_PROGRAM_ID).0
}

pub fn add_coinflip_program(litesvm:&mut LiteSVM){
    let binary_path = include_bytes!("../../../../target/deploy/coinflip.so");

    litesvm.add_program(COINFLIP_PROGRAM_ID, binary_path);
}

pub fn create_casino_account(
    svm: &mut LiteSVM,
    casino_pubkey: Pubkey,
    casino: &Casino,
) {
    let mut data = Vec::with_capacity(8 + Casino::INIT_SPACE);

    // Serialize account
    casino
        .try_serialize(&mut data)
        .expect("Could not serialize Casino");

    // Pad to the allocated size so later writes fit
    data.resize(8 + Casino::INIT_SPACE, 0);

    let rent = svm.minimum_balance_for_rent_exemption(data.len());

    let account = SolanaAccount {
        lamports: rent,
        data,
        owner: COINFLIP_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    let result = svm.set_account(casino_pubkey, account);

    match result {
        Ok(()) => {},

        Err(error) =>{
            panic!("Could not insert account into SVM:- {:?}", error);
        }
    }
}

/// The vault always carries its rent exemption on top of `lamports`.
pub fn create_vault_account(svm: &mut LiteSVM, vault_pubkey: Pubkey, lamports: u64) {
    let rent = svm.minimum_balance_for_rent_exemption(0);

    let account = SolanaAccount {
        lamports: rent + lamports,
        data: Vec::new(),
        owner: COINFLIP_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    svm.set_account(vault_pubkey, account).expect("Could not add in vault account");
}

pub fn create_game_account(
    svm: &mut LiteSVM,
    game_pubkey: Pubkey,
    game: &Game,
) {
    let mut data = Vec::with_capacity(8 + Game::INIT_SPACE);

    // Anchor writes the discriminator + fields
    game
        .try_serialize(&mut data)
        .expect("Could not serialize Game");

    data.resize(8 + Game::INIT_SPACE, 0);

    let rent = svm.minimum_balance_for_rent_exemption(data.len());

    let account = SolanaAccount {
        lamports: rent,
        data,
        owner: COINFLIP_PROGRAM_ID,
        executable: false,
        rent_epoch: 0,
    };

    svm.set_account(game_pubkey, account)
        .expect("Could not insert Game account into SVM");
}

pub fn read_casino(svm:&LiteSVM, casino_pubkey:Pubkey)->Casino{
    let account = svm.get_account(&casino_pubkey).expect("Casino account missing");

    Casino::try_deserialize(&mut account.data.as_slice()).expect("Could not deserialize Casino")
}

pub fn read_game(svm:&LiteSVM, game_pubkey:Pubkey)->Game{
    let account = svm.get_account(&game_pubkey).expect("Game account missing");

    Game::try_deserialize(&mut account.data.as_slice()).expect("Could not deserialize Game")
}

pub fn balance(svm:&LiteSVM, pubkey:Pubkey)->u64{
    svm.get_account(&pubkey).map(|account| account.lamports).unwrap_or(0)
}

pub fn funded_keypair(svm:&mut LiteSVM)->Keypair{
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), 10_000_000_000).expect("Could not airdrop");
    keypair
}

pub fn set_current_time(svm: &mut LiteSVM, time:i64){
        let mut initial_clock = svm.get_sysvar::<Clock>();
        initial_clock.unix_timestamp = time;
        svm.set_sysvar::<Clock>(&initial_clock);
}

/// Signs with every signer, the first one pays.
pub fn send(svm:&mut LiteSVM, instructions:&[Instruction], signers:&[Keypair])->bool{
    let payer = signers[0].pubkey();

    let recent_blockhash = svm.latest_blockhash();

    let transaction = Transaction::new_signed_with_payer(
        instructions, Some(&payer), signers, recent_blockhash,
    );

    match svm.send_transaction(transaction) {
        Ok(result) => {
            println!("Program succeeded (compute units: {:?})", result.compute_units_consumed);
            true
        }
        Err(error) => {
            println!("Program failed: {:?}", error);
            false
        }
    }
}
