use rand::RngCore;
use tracing::debug;

use super::{render_game_list, CreateGameModal, CreatedGame, GameCard, ModalView};
use crate::{
    client::{GameReader, ProgramClient},
    error::RpcError,
    game::Game,
    wallet::WalletState,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Only a connected wallet can open a game
    pub create_button: bool,
    pub cards: Vec<GameCard>,
    pub modal: Option<ModalView>,
}

/// The coin flip page: the open games and the create-game modal.
#[derive(Debug, Clone, Default)]
pub struct CoinFlipPage {
    games: Vec<Game>,
    modal: CreateGameModal,
}

impl CoinFlipPage {
    pub fn new(games: Vec<Game>) -> Self {
        Self {
            games,
            modal: CreateGameModal::new(),
        }
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn modal(&self) -> &CreateGameModal {
        &self.modal
    }

    pub fn modal_mut(&mut self) -> &mut CreateGameModal {
        &mut self.modal
    }

    /// Refused while no wallet is connected.
    pub fn open_create_modal(&mut self, wallet: &WalletState) -> bool {
        if !wallet.connected {
            return false;
        }

        self.modal.open();
        true
    }

    pub fn render(&self, wallet: &WalletState) -> PageView {
        let public_key = wallet.public_key.as_ref().filter(|_| wallet.connected);

        PageView {
            create_button: wallet.connected,
            cards: render_game_list(&self.games, public_key),
            modal: self.modal.render(),
        }
    }

    /// Replaces the list with the open games on chain, returns how many there are.
    pub async fn reload<R: GameReader>(&mut self, reader: &R) -> Result<usize, RpcError> {
        self.games = reader.fetch_open_games().await?;

        debug!(count = self.games.len(), "game list reloaded");
        Ok(self.games.len())
    }

    pub async fn confirm_create<C, R>(&mut self, client: &C, rng: &mut R) -> Option<CreatedGame>
    where
        C: ProgramClient,
        R: RngCore + ?Sized,
    {
        self.modal.confirm(client, rng).await
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};
    use solana_sdk::pubkey::Pubkey;

    use super::*;

    struct FakeChain {
        address: Option<Pubkey>,
        games: Vec<Game>,
    }

    impl ProgramClient for FakeChain {
        fn connected_address(&self) -> Option<Pubkey> {
            self.address
        }

        async fn submit_create_game(
            &self,
            _stake: u64,
            _side: u8,
            _seed_hash: &str,
        ) -> Result<String, RpcError> {
            Ok("3Bxs4ThwQbE4vyj5tBw8R7wwsuXbZbMmJB8qEGGdKBQ6".to_string())
        }
    }

    impl GameReader for FakeChain {
        async fn fetch_open_games(&self) -> Result<Vec<Game>, RpcError> {
            Ok(self.games.clone())
        }
    }

    fn connected() -> WalletState {
        WalletState {
            public_key: Some(Pubkey::new_unique()),
            connected: true,
        }
    }

    #[test]
    fn create_button_needs_a_wallet() {
        let mut page = CoinFlipPage::default();

        assert!(!page.render(&WalletState::default()).create_button);
        assert!(!page.open_create_modal(&WalletState::default()));
        assert_eq!(page.render(&WalletState::default()).modal, None);

        let wallet = connected();
        assert!(page.render(&wallet).create_button);
        assert!(page.open_create_modal(&wallet));
        assert_eq!(page.render(&wallet).modal.unwrap().title, "Create Game");
    }

    #[test]
    fn cards_offer_join_to_a_connected_wallet() {
        let page = CoinFlipPage::new(vec![Game::new("game-1", "ABCDEFGH", 0.5)]);

        assert!(!page.render(&WalletState::default()).cards[0].join);
        assert!(page.render(&connected()).cards[0].join);
    }

    #[tokio::test]
    async fn reload_replaces_the_list() {
        let mut page = CoinFlipPage::new(vec![Game::new("stale", "ABCDEFGH", 0.5)]);

        let chain = FakeChain {
            address: None,
            games: vec![
                Game::new("game-1", "ABCDEFGH", 0.1),
                Game::new("game-2", "IJKLMNOP", 0.2),
            ],
        };

        assert_eq!(page.reload(&chain).await.unwrap(), 2);

        let ids: Vec<_> = page.games().iter().map(|game| game.id.as_str()).collect();
        assert_eq!(ids, ["game-1", "game-2"]);
    }

    #[tokio::test]
    async fn confirm_goes_through_the_modal() {
        let wallet = connected();
        let chain = FakeChain {
            address: wallet.public_key,
            games: Vec::new(),
        };

        let mut page = CoinFlipPage::default();
        page.open_create_modal(&wallet);

        let created = page
            .confirm_create(&chain, &mut StdRng::seed_from_u64(3))
            .await
            .unwrap();

        assert!(created.signature.starts_with("3Bxs4ThwQb"));
        assert_eq!(page.render(&wallet).modal, None);
        assert_eq!(page.modal().alert(), Some("Game created! Tx: 3Bxs4ThwQb..."));
    }
}
