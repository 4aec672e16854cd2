//! Line-oriented driver for one round.
//!
//! Reads commands from any `BufRead` and writes the transcript to any
//! `Write`. Output is flushed before every read so the digest (and each
//! prompt) is visible before the session blocks for input.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::Result;

use super::command::Command;
use super::controller::{Round, RoundSummary, Step};
use super::render;

/// How a session ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player chose `0`.
    Quit,
    /// A move was played and the key disclosed.
    Resolved(RoundSummary),
    /// Input ran out before a decisive command.
    InputClosed,
}

/// Interactive session over an input and an output stream.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_command(&mut self, move_count: usize) -> Result<Option<Command>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(Command::parse(&line, move_count)))
    }

    /// Play `round` to completion.
    pub fn run(&mut self, mut round: Round) -> Result<SessionEnd> {
        render::write_digest(&mut self.output, round.digest())?;
        render::write_menu(&mut self.output, round.moves())?;

        loop {
            let Some(command) = self.next_command(round.moves().len())? else {
                info!("input closed before a move was chosen");
                return Ok(SessionEnd::InputClosed);
            };
            debug!(?command, "player input");

            match round.handle(command)? {
                Step::Quit => {
                    writeln!(self.output, "{}", render::EXIT_MESSAGE)?;
                    self.output.flush()?;
                    return Ok(SessionEnd::Quit);
                }
                Step::Help => render::write_help(&mut self.output, round.moves(), round.table())?,
                Step::Invalid => {
                    writeln!(self.output, "{}", render::INVALID_CHOICE)?;
                    render::write_menu(&mut self.output, round.moves())?;
                }
                Step::Resolved(resolution) => {
                    render::write_resolution(&mut self.output, round.moves(), &resolution)?;
                    let disclosure = round.disclose()?;
                    render::write_key(&mut self.output, &disclosure.key)?;
                    self.output.flush()?;
                    return Ok(SessionEnd::Resolved(disclosure.summary));
                }
            }
        }
    }
}
