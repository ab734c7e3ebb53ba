//! A human-versus-computer game.

use crate::config::{ConfigError, PlayerConfig};
use crate::search::{Minimax, SearchExhaustedError};
use derive_more::{Display, Error, From};
use reversi_othello::{Game, GameStatus, IllegalMoveError, Location, MoveReport, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error, From)]
pub enum ComputerTurnError {
    #[display(fmt = "it is not the computer's turn")]
    #[from(ignore)]
    NotComputersTurn,
    #[display(fmt = "{}", source)]
    Exhausted { source: SearchExhaustedError },
    #[display(fmt = "the game refused the computer's move: {}", source)]
    Rejected { source: IllegalMoveError },
}

/// Owns the real [`Game`] and the computer's search settings.
///
/// The caller decides when to act: check [`Match::is_human_turn`], then either pass the
/// human's choice to [`Match::submit_human_move`] or call [`Match::play_computer_turn`].
#[derive(Clone, Debug)]
pub struct Match {
    game: Game,
    config: PlayerConfig,
    computer: Minimax,
}

impl Match {
    /// Start a new game from the standard position.
    pub fn new(config: PlayerConfig) -> Result<Self, ConfigError> {
        Self::from_game(Game::new(), config)
    }

    /// Continue an existing game.
    pub fn from_game(game: Game, config: PlayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            game,
            config,
            computer: Minimax::from_config(&config),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn human(&self) -> Player {
        self.config.human
    }

    pub fn computer(&self) -> Player {
        self.config.computer()
    }

    pub fn is_human_turn(&self) -> bool {
        self.game.to_move() == Some(self.human())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.game.to_move() == Some(self.computer())
    }

    /// Play the human's move. On error nothing changes and the human should pick again.
    pub fn submit_human_move(
        &mut self,
        location: Location,
    ) -> Result<MoveReport, IllegalMoveError> {
        self.game.submit_move(self.human(), location)
    }

    /// Let the computer search and play its move.
    pub fn play_computer_turn(&mut self) -> Result<MoveReport, ComputerTurnError> {
        if !self.is_computer_turn() {
            return Err(ComputerTurnError::NotComputersTurn);
        }

        let location = self.computer.choose_move(&self.game)?;
        Ok(self.game.submit_move(self.computer(), location)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::seq::IteratorRandom;
    use rand::SeedableRng;

    #[test]
    fn computer_moves_first_as_black() {
        let config = PlayerConfig::default().with_human(Player::White);
        let mut session = Match::new(config).unwrap();
        assert!(session.is_computer_turn());
        assert_eq!(
            session.submit_human_move(Location::from_index(19).unwrap()),
            Err(IllegalMoveError::NotYourTurn {
                player: Player::White
            })
        );

        let report = session.play_computer_turn().unwrap();
        assert_eq!(report.player, Player::Black);
        assert!(session.is_human_turn());
        assert_eq!(
            session.play_computer_turn(),
            Err(ComputerTurnError::NotComputersTurn)
        );
    }

    #[test]
    fn zero_depth_is_refused() {
        let config = PlayerConfig::default().with_search_depth(0);
        assert_eq!(Match::new(config).unwrap_err(), ConfigError::ZeroDepth);
    }

    #[test]
    fn full_game_against_random_human() {
        let config = PlayerConfig::default().with_search_depth(2);
        let mut session = Match::new(config).unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        while !session.game().is_finished() {
            if session.is_human_turn() {
                let location = session
                    .game()
                    .legal_moves()
                    .locations()
                    .into_iter()
                    .choose(&mut rng)
                    .unwrap();
                session.submit_human_move(location).unwrap();
            } else {
                session.play_computer_turn().unwrap();
            }
        }

        let (black, white) = session.game().score();
        assert!(black + white <= 64);
        assert!(matches!(session.status(), GameStatus::Over { .. }));
    }
}
