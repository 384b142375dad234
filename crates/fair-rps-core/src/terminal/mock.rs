//! Scripted terminal for testing.

use super::traits::{Terminal, TerminalError};
use async_trait::async_trait;
use std::collections::VecDeque;

/// In-memory terminal that replays queued input lines and records output
#[derive(Clone, Debug, Default)]
pub struct ScriptedTerminal {
    /// Lines still to be returned by `prompt`
    input: VecDeque<String>,
    /// Every line written, in order
    output: Vec<String>,
    /// Every prompt shown, in order
    prompts: Vec<String>,
}

impl ScriptedTerminal {
    /// Create a terminal that will answer prompts with `lines`, in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
            prompts: Vec::new(),
        }
    }

    /// Lines written so far
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Prompts shown so far
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Input lines not yet consumed
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// First written line starting with `prefix`, with the prefix removed
    pub fn find_value(&self, prefix: &str) -> Option<&str> {
        self.output.iter().find_map(|line| line.strip_prefix(prefix))
    }
}

#[async_trait]
impl Terminal for ScriptedTerminal {
    async fn write_line(&mut self, line: &str) -> Result<(), TerminalError> {
        self.output.push(line.to_string());
        Ok(())
    }

    async fn prompt(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.prompts.push(prompt.to_string());
        self.input.pop_front().ok_or(TerminalError::Closed)
    }
}
