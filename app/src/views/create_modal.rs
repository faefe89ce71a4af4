use rand::RngCore;
use tracing::{info, warn};

use super::{DEFAULT_STAKE, MIN_STAKE, STAKE_STEP};
use crate::{
    client::ProgramClient,
    error::RpcError,
    game::{sol_to_lamports, CoinSide},
    seed::SeedCommitment,
};

/// Tolerance when snapping an amount to the step grid
const STEP_EPSILON: f64 = 1e-9;

/// Amounts are kept to whole lamports
const LAMPORT_SCALE: f64 = 1e9;

const SIGNATURE_PREFIX_LEN: usize = 10;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmitState {
    #[default]
    Idle,
    InFlight,
    Failed(String),
}

/// What an open modal shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub title: &'static str,
    pub amount: f64,
    pub min: f64,
    pub step: f64,
    pub side: CoinSide,
    pub cancel_label: &'static str,
    pub confirm_label: &'static str,
    pub confirm_disabled: bool,
    pub error: Option<String>,
}

/// A game the modal created. The seed has to be kept to resolve it.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedGame {
    pub signature: String,
    pub commitment: SeedCommitment,
}

#[derive(Debug, Clone)]
pub struct CreateGameModal {
    open: bool,
    amount: f64,
    side: CoinSide,
    state: SubmitState,
    alert: Option<String>,
}

impl Default for CreateGameModal {
    fn default() -> Self {
        Self {
            open: false,
            amount: DEFAULT_STAKE,
            side: CoinSide::default(),
            state: SubmitState::Idle,
            alert: None,
        }
    }
}

impl CreateGameModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Free-form entry, stored as typed.
    pub fn set_amount(&mut self, amount: f64) {
        self.amount = amount;
    }

    pub fn step_up(&mut self) {
        let steps = (self.grid_position() + STEP_EPSILON).floor() + 1.0;
        self.amount = snap(steps * STAKE_STEP);
    }

    pub fn step_down(&mut self) {
        let steps = (self.grid_position() - STEP_EPSILON).ceil() - 1.0;
        self.amount = snap(steps * STAKE_STEP);
    }

    fn grid_position(&self) -> f64 {
        let amount = if self.amount.is_finite() {
            self.amount
        } else {
            MIN_STAKE
        };

        amount / STAKE_STEP
    }

    pub fn side(&self) -> CoinSide {
        self.side
    }

    pub fn set_side(&mut self, side: CoinSide) {
        self.side = side;
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            SubmitState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Shown while the transaction is on its way.
    pub fn pending_message(&self) -> String {
        format!("Creating game with {} SOL", self.amount)
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn take_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    pub fn render(&self) -> Option<ModalView> {
        if !self.open {
            return None;
        }

        let in_flight = self.state == SubmitState::InFlight;

        Some(ModalView {
            title: "Create Game",
            amount: self.amount,
            min: MIN_STAKE,
            step: STAKE_STEP,
            side: self.side,
            cancel_label: "Cancel",
            confirm_label: if in_flight { "Creating..." } else { "Confirm" },
            confirm_disabled: in_flight,
            error: self.error().map(str::to_string),
        })
    }

    /// Submits the game with a fresh seed commitment. Failures stay on the
    /// form so the player can retry.
    pub async fn confirm<C, R>(&mut self, client: &C, rng: &mut R) -> Option<CreatedGame>
    where
        C: ProgramClient,
        R: RngCore + ?Sized,
    {
        if !self.open || self.state == SubmitState::InFlight {
            return None;
        }

        if client.connected_address().is_none() {
            self.state = SubmitState::Failed(RpcError::WalletNotConnected.to_string());
            return None;
        }

        self.state = SubmitState::InFlight;

        let stake = sol_to_lamports(self.amount);
        let commitment = SeedCommitment::generate(rng);

        info!("{}", self.pending_message());

        match client
            .submit_create_game(stake, self.side.as_u8(), commitment.hash())
            .await
        {
            Ok(signature) => {
                info!(%signature, stake, "game created");

                let prefix: String = signature.chars().take(SIGNATURE_PREFIX_LEN).collect();
                self.alert = Some(format!("Game created! Tx: {prefix}..."));
                self.state = SubmitState::Idle;
                self.open = false;

                Some(CreatedGame {
                    signature,
                    commitment,
                })
            }
            Err(error) => {
                warn!(%error, "could not create game");
                self.state = SubmitState::Failed(error.to_string());
                None
            }
        }
    }
}

fn snap(amount: f64) -> f64 {
    let snapped = (amount * LAMPORT_SCALE).round() / LAMPORT_SCALE;
    snapped.max(MIN_STAKE)
}
