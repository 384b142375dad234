//! One game against the computer.

use super::{GameError, GameId, MoveToken, EXIT_TOKEN, HELP_TOKEN};
use crate::crypto::{Commitment, Secret};
use crate::games::{choose_move, winner_of, HelpTable, MoveSet, Outcome};
use crate::terminal::Terminal;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::{debug, info};

/// Where a session is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    AwaitingMove,
    Resolved,
    Exited,
    HelpShown,
}

/// Everything revealed once a game has been played
#[derive(Clone, Debug)]
pub struct Resolution {
    pub user_move: String,
    pub computer_move: String,
    pub outcome: Outcome,
    pub secret: Secret,
    pub commitment: Commitment,
}

impl Resolution {
    /// Recompute the commitment from the revealed secret and computer move
    pub fn is_consistent(&self) -> bool {
        self.commitment.verify(&self.secret, &self.computer_move)
    }
}

/// How a session ended
#[derive(Clone, Debug)]
pub enum SessionEnd {
    Exited,
    HelpShown,
    Resolved(Resolution),
}

/// A single game: the computer commits to its move before the user picks one
pub struct GameSession {
    id: GameId,
    moves: MoveSet,
    secret: Secret,
    computer_move: String,
    commitment: Commitment,
    state: SessionState,
}

impl GameSession {
    /// Start a game using the operating system's secure random source
    pub fn new(moves: MoveSet) -> Result<Self, GameError> {
        Self::with_rng(moves, &mut OsRng)
    }

    /// Start a game drawing the secret and the computer's move from `rng`
    pub fn with_rng<R: RngCore + CryptoRng>(moves: MoveSet, rng: &mut R) -> Result<Self, GameError> {
        let id = GameId::new();
        let secret = Secret::generate(rng)?;
        let computer_move = choose_move(&moves, rng).to_string();
        let commitment = Commitment::new(&secret, &computer_move)?;

        info!(game_id = %id, moves = moves.len(), %commitment, "game started");

        Ok(Self {
            id,
            moves,
            secret,
            computer_move,
            commitment,
            state: SessionState::AwaitingMove,
        })
    }

    pub fn id(&self) -> GameId {
        self.id
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    /// The published commitment
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Play the game on `terminal`: publish the commitment and menu, read
    /// moves until one is valid, then exit, show help, or resolve.
    pub async fn run<T: Terminal + ?Sized>(
        &mut self,
        terminal: &mut T,
    ) -> Result<SessionEnd, GameError> {
        if self.state != SessionState::AwaitingMove {
            return Err(GameError::AlreadyFinished(self.state));
        }

        self.announce(terminal).await?;

        match self.read_token(terminal).await? {
            MoveToken::Exit => {
                terminal.write_line("Exiting the game...").await?;
                self.state = SessionState::Exited;
                info!(game_id = %self.id, "user exited");
                Ok(SessionEnd::Exited)
            }
            MoveToken::Help => {
                for line in HelpTable::new(&self.moves)?.lines() {
                    terminal.write_line(&line).await?;
                }
                self.state = SessionState::HelpShown;
                info!(game_id = %self.id, "help shown");
                Ok(SessionEnd::HelpShown)
            }
            MoveToken::Play(user_index) => {
                let resolution = self.resolve(user_index)?;

                terminal
                    .write_line(&format!("Your move: {}", resolution.user_move))
                    .await?;
                terminal
                    .write_line(&format!("Computer move: {}", resolution.computer_move))
                    .await?;
                terminal.write_line(resolution.outcome.as_str()).await?;
                terminal
                    .write_line(&format!("HMAC key: {}", resolution.secret.to_hex()))
                    .await?;

                self.state = SessionState::Resolved;
                info!(
                    game_id = %self.id,
                    user_move = %resolution.user_move,
                    computer_move = %resolution.computer_move,
                    outcome = ?resolution.outcome,
                    "game resolved"
                );
                Ok(SessionEnd::Resolved(resolution))
            }
        }
    }

    async fn announce<T: Terminal + ?Sized>(&self, terminal: &mut T) -> Result<(), GameError> {
        terminal
            .write_line(&format!("HMAC: {}", self.commitment))
            .await?;
        terminal.write_line("Available moves:").await?;
        for (i, label) in self.moves.iter().enumerate() {
            terminal.write_line(&format!("{} - {}", i + 1, label)).await?;
        }
        terminal
            .write_line(&format!("{} - exit", EXIT_TOKEN))
            .await?;
        terminal
            .write_line(&format!("{} - help", HELP_TOKEN))
            .await?;
        Ok(())
    }

    async fn read_token<T: Terminal + ?Sized>(
        &self,
        terminal: &mut T,
    ) -> Result<MoveToken, GameError> {
        let prompt = format!("Enter your move (1-{}): ", self.moves.len());
        loop {
            let line = terminal.prompt(&prompt).await?;
            if let Some(token) = MoveToken::parse(&line, self.moves.len()) {
                return Ok(token);
            }
            debug!(game_id = %self.id, input = %line, "rejected input");
            terminal.write_line("Invalid move. Please try again.").await?;
        }
    }

    fn resolve(&self, user_index: usize) -> Result<Resolution, GameError> {
        let outcome = winner_of(&self.moves, user_index, &self.computer_move)?;
        Ok(Resolution {
            user_move: self.moves[user_index].to_string(),
            computer_move: self.computer_move.clone(),
            outcome,
            secret: self.secret.clone(),
            commitment: self.commitment,
        })
    }
}
