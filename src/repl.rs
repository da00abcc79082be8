//! Line-oriented prompt for playing a game at the terminal.
//!
//! Each line is one command in move notation:
//!
//! - `32-28` - step from 32 to 28
//! - `39x28x17` - capture series
//! - `exit` - end the game
//!
//! Blank lines and lines starting with `#` are skipped. The board is printed
//! after every accepted move; a rejected move prints the reason and asks
//! again.
//!
//! ## Example
//!
//! ```ignore
//! use draughts_rust::game::GameConfig;
//! use draughts_rust::repl::Repl;
//! let mut repl = Repl::new(GameConfig::default());
//! repl.run()?;
//! ```

use std::io::{self, BufRead, Write};

use crate::board::render_tile_indices;
use crate::game::{Game, GameConfig, Outcome};

const RULES: &str = "\
Provide your moves using international draughts standard notation:

- Normal steps are indicated with a hyphen (e.g., `32-28`).
- Captures are indicated with an `x` (e.g., `39x28x17`).
- Type `exit` to stop.

For reference, tiles are indexed as follows:";

/// Welcome text: the notation and the tile numbering.
pub fn intro() -> String {
    format!("International Draughts\n\n{RULES}\n\n{}", render_tile_indices())
}

/// Prompt state: the game being played.
pub struct Repl {
    game: Game,
}

impl Repl {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::with_config(config),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Run the prompt on stdin and stdout.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        self.run_with(stdin.lock(), &mut stdout)
    }

    /// Run the prompt until `exit`, the end of the game, or the end of input.
    pub fn run_with<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", intro())?;
        writeln!(output, "{}", self.game.board())?;
        write!(output, "{}", self.prompt())?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                write!(output, "{}", self.prompt())?;
                output.flush()?;
                continue;
            }

            let (_, message) = self.execute(line);
            writeln!(output, "{message}")?;

            if self.game.is_over() {
                break;
            }
            write!(output, "{}", self.prompt())?;
            output.flush()?;
        }
        writeln!(output, "\nThanks for playing!")
    }

    fn prompt(&self) -> String {
        format!("[{}] player {} > ", self.game.ply() / 2 + 1, self.game.to_move())
    }

    /// Play one command and return (accepted, response).
    pub fn execute(&mut self, line: &str) -> (bool, String) {
        match self.game.play(line) {
            Ok(Outcome::Exited) => (true, String::new()),
            Ok(Outcome::Moved { captured, .. }) => {
                let mut response = self.game.board().to_string();
                if !captured.is_empty() {
                    response.push_str(&format!("{} piece(s) captured.\n", captured.len()));
                }
                if let Some(winner) = self.game.winner() {
                    response.push_str(&format!("Player {winner} wins!"));
                    self.game.exit();
                }
                (true, response)
            }
            Err(e) => (false, format!("{e}. Please try again.")),
        }
    }
}
