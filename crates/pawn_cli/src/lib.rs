//! Line-oriented front end: prompts, board rendering and status output.
//! All rule decisions live in `pawn_game`; this crate only shuttles text.

use std::io::{self, BufRead, Write};

use log::info;

use pawn_game::{Game, Status};

/// One interactive match over a pair of text streams.
pub struct Session<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Session<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    pub fn run(mut self) -> io::Result<()> {
        let white = self.prompt("White player name")?;
        let black = self.prompt("Black player name")?;
        info!("new game: {white} vs {black}");

        let mut game = Game::new(white, black);
        writeln!(self.output, "{}", game.board())?;

        loop {
            let player = game.current_player();
            write!(self.output, "{} ({}) > ", player.name(), player.color().code())?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                // End of input plays like an exit command.
                break;
            };

            match game.play(&line) {
                Ok(Status::InProgress) => writeln!(self.output, "{}", game.board())?,
                Ok(Status::Won(color)) => {
                    writeln!(self.output, "{}", game.board())?;
                    writeln!(self.output, "{} wins!", game.player(color).name())?;
                    break;
                }
                Ok(Status::Stalemate) => {
                    writeln!(self.output, "{}", game.board())?;
                    writeln!(self.output, "Stalemate!")?;
                    break;
                }
                Ok(Status::Exited) => {
                    writeln!(self.output, "Goodbye.")?;
                    break;
                }
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }

        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

/// Run a match on stdin/stdout.
pub fn run() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock()).run()
}
