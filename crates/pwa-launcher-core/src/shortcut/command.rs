//! Launch command tokenization.

use crate::error::{LauncherError, Result};

/// Split a launch command into tokens.
///
/// Single and double quotes both toggle the same quoted state and are never
/// emitted, so `"a b'` is one token. Only the space character separates
/// tokens. An unbalanced quote keeps the rest of the input quoted.
pub fn tokenize(command: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for ch in command.chars() {
        match ch {
            '"' | '\'' => in_quote = !in_quote,
            ' ' if !in_quote => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(ch),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// A tokenized launch command: program first, then its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTokens(Vec<String>);

impl CommandTokens {
    /// Tokenize `command`, failing if it yields no tokens.
    pub fn parse(command: &str) -> Result<Self> {
        let tokens = tokenize(command);
        if tokens.is_empty() {
            return Err(LauncherError::EmptyCommand {
                command: command.to_string(),
            });
        }
        Ok(Self(tokens))
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        &self.0[0]
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.0[1..]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
