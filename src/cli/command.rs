use crate::board::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Select(Square),
    Move(Square, Square),
    Board,
    Moves,
    Reset,
    Quit,
    Unknown(String),
}

fn square(s: &str) -> Option<Square> {
    s.parse().ok()
}

/// Parse one input line. Blank lines yield `None`.
///
/// Accepts `select e2`, `move e2 e4`, the compact `e2e4`, `board`, `moves`,
/// `reset` and `quit`.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.is_empty() {
        return None;
    }

    let unknown = || Command::Unknown(trimmed.to_string());

    let cmd = match parts.as_slice() {
        ["select", sq] => square(sq).map_or_else(unknown, Command::Select),
        ["move", from, to] => match (square(from), square(to)) {
            (Some(from), Some(to)) => Command::Move(from, to),
            _ => unknown(),
        },
        ["board"] => Command::Board,
        ["moves"] => Command::Moves,
        ["reset"] => Command::Reset,
        ["quit"] => Command::Quit,
        [compact] if compact.len() == 4 && compact.is_ascii() => {
            match (square(&compact[..2]), square(&compact[2..])) {
                (Some(from), Some(to)) => Command::Move(from, to),
                _ => unknown(),
            }
        }
        _ => unknown(),
    };

    Some(cmd)
}
