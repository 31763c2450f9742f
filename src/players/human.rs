//! Human player reading moves from a text stream.

use super::Player;
use anyhow::{Context, Result};
use noughts_core::{Game, Position};
use std::io::{self, BufRead, Read, Write};
use tracing::{debug, warn};

/// Line reader over process stdin that holds the lock only while reading a
/// line, so several players can share the terminal.
#[derive(Debug, Default)]
pub struct StdinLines {
    buf: Vec<u8>,
    pos: usize,
}

impl StdinLines {
    /// Creates a reader with an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Read for StdinLines {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}

impl BufRead for StdinLines {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.pos >= self.buf.len() {
            self.buf.clear();
            self.pos = 0;
            io::stdin().lock().read_until(b'\n', &mut self.buf)?;
        }
        Ok(&self.buf[self.pos..])
    }

    fn consume(&mut self, amt: usize) {
        self.pos = (self.pos + amt).min(self.buf.len());
    }
}

/// Human player typing positions on a line-oriented input.
///
/// Accepts `row,col`, a keypad number 1-9, or a cell label, and asks again
/// until the answer is a legal move.
pub struct HumanPlayer<I, O> {
    name: String,
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> HumanPlayer<I, O> {
    /// Creates a human player reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, input: I, output: O) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

impl<I: BufRead, O: Write> Player for HumanPlayer<I, O> {
    fn choose_move(&mut self, game: &Game) -> Result<Position> {
        loop {
            self.prompt(&format!("{} ({}) move: ", self.name, game.to_move()))?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} moved", self.name);
            }

            match line.parse::<Position>() {
                Ok(pos) if game.is_legal(pos.row(), pos.col()) => {
                    debug!(player = %self.name, %pos, "Human chose position");
                    return Ok(pos);
                }
                Ok(pos) => {
                    warn!(player = %self.name, %pos, "Square not available");
                    writeln!(self.output, "{} is not available.", pos.label())?;
                }
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
