//! Text front end over [`GameState`] for manual play.

mod command;

use std::io::{self, BufRead, Write};

pub use command::{parse_command, Command};

use crate::game::{GameState, Outcome};

/// Read commands from `input` until `quit` or end of input, writing
/// responses to `output`.
pub fn run_loop<R: BufRead, W: Write>(input: R, mut output: W) -> io::Result<()> {
    let mut game = GameState::new();

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };

        match cmd {
            Command::Select(sq) => {
                game = game.select(sq);
                if game.selected().is_none() {
                    writeln!(output, "nothing to select on {sq}")?;
                } else {
                    let targets: Vec<String> =
                        game.legal_moves().iter().map(ToString::to_string).collect();
                    writeln!(output, "{sq}: {}", targets.join(" "))?;
                }
            }
            Command::Move(from, to) => {
                let next = game.move_piece(from, to);
                if next == game {
                    writeln!(output, "illegal move {from}{to}")?;
                    continue;
                }
                game = next;
                writeln!(output, "{}", game.last_move().unwrap_or_default())?;
                write_status(&mut output, &game)?;
            }
            Command::Board => writeln!(output, "{}", game.board())?,
            Command::Moves => writeln!(output, "{}", game.moves().join(" "))?,
            Command::Reset => {
                game = game.reset();
                writeln!(output, "new game")?;
            }
            Command::Quit => break,
            Command::Unknown(text) => writeln!(output, "unknown command: {text}")?,
        }
    }

    output.flush()
}

/// Run the loop on stdin/stdout.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_loop(stdin.lock(), stdout.lock())
}

fn write_status<W: Write>(output: &mut W, game: &GameState) -> io::Result<()> {
    match game.outcome() {
        Some(Outcome::Checkmate { winner }) => writeln!(output, "checkmate, {winner} wins"),
        Some(Outcome::Stalemate) => writeln!(output, "stalemate"),
        None if game.in_check() => writeln!(output, "{} is in check", game.to_move()),
        None => Ok(()),
    }
}
