use crate::{Match, PlayerConfig};
use reversi_othello::{GameStatus, Location, MoveReport, Outcome};
use std::io::{self, BufRead, Write};

/// Play a human-versus-computer game over text streams.
///
/// The human types moves in notation ("D3") or as board indices; "quit" stops early.
/// Returns the outcome, or `None` if the human quit or the input ran out.
pub fn play_interactive<R, W>(
    config: PlayerConfig,
    mut input: R,
    mut output: W,
) -> io::Result<Option<Outcome>>
where
    R: BufRead,
    W: Write,
{
    let mut session =
        Match::new(config).map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    writeln!(
        output,
        "You play {}; the computer searches {} plies.",
        session.human(),
        config.search_depth
    )?;

    loop {
        writeln!(output, "\n{}\n", session.game())?;

        if let GameStatus::Over { outcome } = session.status() {
            return Ok(Some(outcome));
        }

        if session.is_computer_turn() {
            let report = session
                .play_computer_turn()
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
            write_report(&mut output, &report)?;
            continue;
        }

        write!(output, "Enter a move: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        let location: Location = match line.parse() {
            Ok(location) => location,
            Err(_) => {
                writeln!(output, "Cannot parse move {:?}.", line)?;
                continue;
            }
        };

        match session.submit_human_move(location) {
            Ok(report) => write_report(&mut output, &report)?,
            Err(err) => writeln!(
                output,
                "Invalid move ({}). Legal moves: {}",
                err,
                session.game().legal_moves()
            )?,
        }
    }
}

fn write_report<W: Write>(output: &mut W, report: &MoveReport) -> io::Result<()> {
    writeln!(
        output,
        "{} plays {}, flipping {}.",
        report.player,
        report.location,
        report.flips.count()
    )?;
    if let Some(passed) = report.passed {
        writeln!(output, "{} has no legal moves and passes.", passed)?;
    }
    Ok(())
}
