//! Input providers for the interactive strategy.
//!
//! The interactive strategy never touches the console itself. It asks a
//! `MoveInput` for raw text and tells it when a parsed value was out of range.
//!
//! - `StdioInput`: prompts on stdout, reads a line from stdin
//! - `ScriptedInput`: replays a fixed list of replies (tests, demos)

use std::collections::VecDeque;
use std::io::Write;

use crate::core::{GameError, Result};

/// Source of raw move text for an interactive player.
pub trait MoveInput {
    /// Ask for a move between `min_step` and `max_step`, returning the raw reply.
    fn request_move(&mut self, min_step: i64, max_step: i64) -> Result<String>;

    /// Tell the player their move was outside `min_step..=max_step`.
    fn report_invalid(&mut self, amount: i64, min_step: i64, max_step: i64) -> Result<()>;
}

impl<I: MoveInput + ?Sized> MoveInput for Box<I> {
    fn request_move(&mut self, min_step: i64, max_step: i64) -> Result<String> {
        (**self).request_move(min_step, max_step)
    }

    fn report_invalid(&mut self, amount: i64, min_step: i64, max_step: i64) -> Result<()> {
        (**self).report_invalid(amount, min_step, max_step)
    }
}

/// Prompt shown before reading a move.
#[must_use]
pub fn move_prompt(min_step: i64, max_step: i64) -> String {
    format!("Input your move between {} and {}: ", min_step, max_step)
}

/// Message shown after an out-of-range move.
pub const INVALID_MOVE_MESSAGE: &str = "Invalid move. Try Again!";

/// Console provider.
///
/// Reads through the process-wide stdin handle on every request, so it can be
/// mixed with other stdin reads in the same program.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdioInput;

impl StdioInput {
    /// Create a console provider.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl MoveInput for StdioInput {
    fn request_move(&mut self, min_step: i64, max_step: i64) -> Result<String> {
        let mut stdout = std::io::stdout();
        write!(stdout, "{}", move_prompt(min_step, max_step))?;
        stdout.flush()?;

        let mut line = String::new();
        if std::io::stdin().read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(line)
    }

    fn report_invalid(&mut self, _amount: i64, _min_step: i64, _max_step: i64) -> Result<()> {
        println!("{}", INVALID_MOVE_MESSAGE);
        Ok(())
    }
}

/// Provider that replays queued replies in order.
///
/// Runs dry with `GameError::InputClosed`. Keeps count of prompts and the
/// amounts reported as invalid.
#[derive(Clone, Debug, Default)]
pub struct ScriptedInput {
    replies: VecDeque<String>,
    prompts: usize,
    rejected: Vec<i64>,
}

impl ScriptedInput {
    /// Queue the given replies.
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            prompts: 0,
            rejected: Vec::new(),
        }
    }

    /// Replies not yet consumed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.replies.len()
    }

    /// Number of times a move was requested.
    #[must_use]
    pub fn prompts(&self) -> usize {
        self.prompts
    }

    /// Amounts reported as out of range, in order.
    #[must_use]
    pub fn rejected(&self) -> &[i64] {
        &self.rejected
    }
}

impl MoveInput for ScriptedInput {
    fn request_move(&mut self, _min_step: i64, _max_step: i64) -> Result<String> {
        self.prompts += 1;
        self.replies.pop_front().ok_or(GameError::InputClosed)
    }

    fn report_invalid(&mut self, amount: i64, _min_step: i64, _max_step: i64) -> Result<()> {
        self.rejected.push(amount);
        Ok(())
    }
}
