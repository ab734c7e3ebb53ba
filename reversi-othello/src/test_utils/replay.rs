use crate::{Game, IllegalMoveError, Location};
use derive_more::{Display, Error};

#[derive(Debug, PartialEq, Display, Error)]
pub enum ReplayError {
    #[display(fmt = "cannot parse move {:?}", notation)]
    BadNotation { notation: String },
    #[display(fmt = "move {}: {}", ply, source)]
    Illegal { ply: usize, source: IllegalMoveError },
}

/// Play a sequence of moves in notation ("E3 F4 ...") from the starting position,
/// each by whichever player is to move. Forced passes are skipped automatically.
pub fn replay(moves: &str) -> Result<Game, ReplayError> {
    let mut game = Game::new();

    for (ply, notation) in moves.split_whitespace().enumerate() {
        let location: Location = notation.parse().map_err(|_| ReplayError::BadNotation {
            notation: notation.to_string(),
        })?;

        let result = match game.to_move() {
            Some(player) => game.submit_move(player, location).map(|_| ()),
            None => Err(IllegalMoveError::GameOver),
        };
        result.map_err(|source| ReplayError::Illegal { ply, source })?;
    }

    Ok(game)
}
