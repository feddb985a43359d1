//! Terminal front end: a line-based command language and an ASCII view of
//! the session.
//!
//! Coordinates use a column letter and a 1-based row, so `B7` is row 6,
//! column 1.

use std::fmt;

use crate::core::{ship_kind_from_name, Board, Cell, Orientation, BOARD_SIZE};
use crate::session::{Command, Phase, SessionSnapshot};

pub const HELP: &str = "\
Commands:
  login <user> <password>     register <user> <password>     logout
  queue                       exit-queue
  host                        join <code>                    leave
  rotate                      place <ship> <A1>              auto
  fire <B7>                   resign                         lobby
  help                        quit";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliInput {
    Command(Command),
    Help,
    Quit,
}

pub fn coord_to_string(row: usize, col: usize) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse `A5` style coordinates into `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.is_empty() {
        return Err("Empty coordinate".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars
        .next()
        .ok_or("No column letter")?
        .to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

fn credentials<'a, I>(mut args: I, usage: &str) -> Result<(String, String), String>
where
    I: Iterator<Item = &'a str>,
{
    match (args.next(), args.next()) {
        (Some(user), Some(password)) => Ok((user.to_string(), password.to_string())),
        _ => Err(format!("Usage: {} <user> <password>", usage)),
    }
}

pub fn parse_command(line: &str) -> Result<CliInput, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("Empty command".to_string());
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "help" | "?" => return Ok(CliInput::Help),
        "quit" | "exit" => return Ok(CliInput::Quit),
        "login" => {
            let (username, password) = credentials(parts, "login")?;
            Command::Login { username, password }
        }
        "register" => {
            let (username, password) = credentials(parts, "register")?;
            Command::Register { username, password }
        }
        "logout" => Command::Logout,
        "queue" => Command::EnterQueue,
        "exit-queue" => Command::ExitQueue,
        "host" => Command::HostLobby,
        "join" => {
            let code = parts.next().ok_or("Usage: join <code>")?;
            Command::JoinLobby {
                code: code.to_string(),
            }
        }
        "leave" => Command::LeaveLobby,
        "rotate" | "r" => Command::RotateShipOrientation,
        "place" => {
            let name = parts.next().ok_or("Usage: place <ship> <A1>")?;
            let kind =
                ship_kind_from_name(name).ok_or_else(|| format!("Unknown ship '{}'", name))?;
            let (row, col) = parse_coord(parts.next().ok_or("Usage: place <ship> <A1>")?)?;
            Command::PlaceShip { kind, row, col }
        }
        "auto" => Command::AutoPlace,
        "fire" | "f" => {
            let (row, col) = parse_coord(parts.next().ok_or("Usage: fire <B7>")?)?;
            Command::Attack { row, col }
        }
        "resign" => Command::Resign,
        "lobby" => Command::ReturnToLobby,
        other => return Err(format!("Unknown command '{}' (try 'help')", other)),
    };
    Ok(CliInput::Command(command))
}

fn cell_char(cell: Cell, reveal: bool) -> char {
    match cell {
        Cell::Hit => 'X',
        Cell::Miss => 'o',
        Cell::ShipOccupied if reveal => 'S',
        _ => '.',
    }
}

fn write_board(f: &mut fmt::Formatter<'_>, board: &Board, reveal: bool) -> fmt::Result {
    write!(f, "     ")?;
    for c in 0..BOARD_SIZE {
        write!(f, " {}", (b'A' + c as u8) as char)?;
    }
    writeln!(f)?;
    for (r, row) in board.rows().enumerate() {
        write!(f, "   {:2}", r + 1)?;
        for &cell in row.iter() {
            write!(f, " {}", cell_char(cell, reveal))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

/// Full text rendering of a snapshot: status line, then the boards that
/// matter in the current phase.
pub struct View<'a>(pub &'a SessionSnapshot);

impl fmt::Display for View<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snap = self.0;
        write!(f, "[{}]", snap.phase)?;
        if let Some(identity) = &snap.identity {
            write!(f, " {}", identity.username)?;
            if let Some(elo) = identity.elo {
                write!(f, " ({})", elo)?;
            }
        }
        if let Some(lobby) = &snap.lobby {
            write!(f, " | lobby {}", lobby.code)?;
        }
        if let Some(current) = &snap.match_info {
            write!(f, " | vs {}", current.opponent_name)?;
            if current.concluded {
                write!(f, " | game over")?;
            } else if snap.my_turn() {
                write!(f, " | your turn")?;
            } else {
                write!(f, " | opponent's turn")?;
            }
        }
        writeln!(f)?;

        match snap.phase {
            Phase::Placement => {
                match snap.placement.current {
                    Some(kind) => {
                        let orientation = match snap.placement.orientation {
                            Orientation::Vertical => "vertical",
                            Orientation::Horizontal => "horizontal",
                        };
                        writeln!(f, "Place {} ({}), {}", kind, kind.size(), orientation)?;
                    }
                    None => writeln!(f, "Fleet complete")?,
                }
                write_board(f, &snap.own_board, true)?;
            }
            Phase::Battle | Phase::Queued => {
                writeln!(f, "Opponent board:")?;
                write_board(f, &snap.opponent_board, false)?;
                writeln!(f, "Your board:")?;
                write_board(f, &snap.own_board, true)?;
            }
            Phase::MatchEnded => {
                if let Some(summary) = &snap.last_result {
                    write!(
                        f,
                        "Result vs {}: {} (elo {}",
                        summary.opponent_name, summary.outcome, summary.new_elo
                    )?;
                    if let Some(delta) = summary.elo_delta {
                        write!(f, ", {:+}", delta)?;
                    }
                    writeln!(f, ")")?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}
