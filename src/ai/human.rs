use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

use crate::error::AgentError;
use crate::game::GameState;

use super::agent::{Agent, Move};
use super::search::Depth;

/// Where typed moves come from. Stdin locks per line, so two human agents
/// can share the terminal.
pub trait ReadLine {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl ReadLine for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> ReadLine for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// Prompts a person for a column, re-prompting until a legal one is given.
pub struct HumanAgent<R, W> {
    input: R,
    output: W,
}

impl HumanAgent<Stdin, Stdout> {
    /// Read moves from stdin and prompt on stdout.
    pub fn stdio() -> Self {
        HumanAgent::new(io::stdin(), io::stdout())
    }
}

impl<R: ReadLine, W: Write> HumanAgent<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanAgent { input, output }
    }

    /// Consume the agent, returning what was written to the prompt stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: ReadLine, W: Write> Agent for HumanAgent<R, W> {
    fn get_move(&mut self, state: &GameState, _depth: Depth) -> Result<Move, AgentError> {
        let legal = state.legal_moves();
        if legal.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }

        let mut line = String::new();
        loop {
            write!(self.output, "Enter your move {legal:?}: ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(AgentError::InputClosed);
            }

            match line.trim().parse::<usize>() {
                Ok(column) if legal.contains(&column) => {
                    return Ok((column, state.apply_move(column)?));
                }
                Ok(column) => writeln!(self.output, "Column {column} is not playable.")?,
                Err(_) => writeln!(self.output, "'{}' is not a column number.", line.trim())?,
            }
        }
    }

    fn name(&self) -> &str {
        "Human"
    }
}
