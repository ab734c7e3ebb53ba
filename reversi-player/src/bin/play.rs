//! Play Reversi against the computer in a terminal.
//!
//! Usage: `reversi-play [black|white] [depth]`. Set `RUST_LOG=debug` to see search details.

use reversi_othello::{Outcome, Player};
use reversi_player::{play_interactive, PlayerConfig};
use std::io;
use std::process;

fn parse_args() -> Result<PlayerConfig, String> {
    let mut config = PlayerConfig::default();
    let mut args = std::env::args().skip(1);

    if let Some(color) = args.next() {
        let human: Player = color.parse().map_err(|err| format!("{}: {}", color, err))?;
        config = config.with_human(human);
    }
    if let Some(depth) = args.next() {
        let depth: u8 = depth
            .parse()
            .map_err(|err| format!("bad depth {:?}: {}", depth, err))?;
        config = config.with_search_depth(depth);
    }
    config.validate().map_err(|err| err.to_string())?;

    Ok(config)
}

fn main() {
    env_logger::init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("usage: reversi-play [black|white] [depth]");
            process::exit(2);
        }
    };

    let stdin = io::stdin();
    match play_interactive(config, stdin.lock(), io::stdout()) {
        Ok(Some(Outcome::Winner(player))) if player == config.human => println!("You win!"),
        Ok(Some(Outcome::Winner(_))) => println!("The computer wins."),
        Ok(Some(Outcome::Tie)) => println!("Tie."),
        Ok(None) => {}
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
