//! Line-oriented command loop for driving a game from a terminal or from
//! another program.
//!
//! Each input line is `[id] command [args...]`. Replies follow the
//! `=[id] message` / `?[id] message` convention, each followed by a blank
//! line, so a controlling program can read responses without knowing how
//! long they are.
//!
//! ## Supported Commands
//!
//! - `name` / `version` - Engine identification
//! - `list_commands` / `known_command <cmd>` - Introspection
//! - `quit` - Exit the loop
//! - `new` - Start a fresh game with the same seats
//! - `showboard` - Render the board
//! - `turn` - Report the side to act
//! - `moves` - List legal destinations for the side to act
//! - `play <vertex>` - Play a move for the side to act, e.g. `play D3`
//! - `genmove` - Let the computer seat to act choose and play
//! - `score` - Disc counts and result

use std::io::{self, BufRead, Write};

use crate::board::{Board, Color, parse_coord, str_coord};
use crate::game::Game;
use crate::strategy::Agent;

const KNOWN_COMMANDS: &[&str] = &[
    "genmove",
    "known_command",
    "list_commands",
    "moves",
    "name",
    "new",
    "play",
    "quit",
    "score",
    "showboard",
    "turn",
    "version",
];

/// A game plus the agents occupying its two seats.
pub struct ConsoleSession {
    game: Game,
    black: Agent,
    white: Agent,
}

impl ConsoleSession {
    pub fn new(black: Agent, white: Agent) -> Self {
        Self {
            game: fresh_game(),
            black,
            white,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the loop on stdin/stdout until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the loop on arbitrary streams.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();

            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id off the front of `line`.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        if end == 0 {
            return (None, trimmed);
        }
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    /// Execute one command and return `(success, response)`.
    pub fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, env!("CARGO_PKG_NAME").to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "new" => {
                self.game = fresh_game();
                (true, String::new())
            }

            "showboard" => (true, format!("\n{}", self.game.board())),

            "turn" => {
                if self.game.is_over() {
                    (true, "none".to_string())
                } else {
                    (true, self.game.turn().to_string())
                }
            }

            "moves" => {
                let moves: Vec<String> =
                    self.game.legal_moves().keys().map(|&pt| str_coord(pt)).collect();
                (true, moves.join(" "))
            }

            "play" => {
                let Some(vertex) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Some(pt) = parse_coord(vertex) else {
                    return (false, format!("invalid vertex '{vertex}'"));
                };
                match self.game.play(pt) {
                    Ok(_) => (true, String::new()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "genmove" => {
                if self.game.is_over() {
                    return (false, "game is over".to_string());
                }
                let color = self.game.turn();
                let agent = match color {
                    Color::Black => &mut self.black,
                    Color::White => &mut self.white,
                };
                if agent.is_human() {
                    return (false, format!("{color} is played by a human"));
                }
                match self.game.step(agent) {
                    Ok(Some(mv)) => (true, str_coord(mv.dest)),
                    Ok(None) => (true, "pass".to_string()),
                    Err(e) => (false, e.to_string()),
                }
            }

            "score" => {
                let (black, white) = self.game.score();
                (true, format!("black {black} white {white} ({})", self.game.outcome()))
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}

fn fresh_game() -> Game {
    Game::from_board(Board::new(), Color::Black)
}
