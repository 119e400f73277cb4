use std::fmt;
use std::io::{self, BufRead, Lines, StdinLock};
use std::str::FromStr;

use dialoguer::{theme::ColorfulTheme, Input};

use crate::errors::CliError;

/// Outcome of a single prompt.
pub enum Prompted<T> {
    Value(T),
    /// Scripted line that did not parse as the expected type. Interactive
    /// prompts never produce this; dialoguer re-prompts instead.
    Invalid(String),
    /// End of scripted input.
    Eof,
}

/// Where prompt answers come from.
pub enum PromptSource {
    /// Themed dialoguer prompts on the terminal.
    Interactive(Box<ColorfulTheme>),
    /// Successive plain lines from stdin, used by scripted sessions.
    Script(Lines<StdinLock<'static>>),
}

impl PromptSource {
    pub fn interactive() -> Self {
        Self::Interactive(Box::new(ColorfulTheme::default()))
    }

    pub fn script() -> Self {
        Self::Script(io::stdin().lock().lines())
    }

    fn next_line(lines: &mut Lines<StdinLock<'static>>) -> Result<Option<String>, CliError> {
        match lines.next() {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }

    /// Reads free-form text.
    pub fn read_text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self {
            Self::Interactive(theme) => {
                let value = Input::<String>::with_theme(theme.as_ref())
                    .with_prompt(prompt)
                    .allow_empty(true)
                    .interact_text()?;
                Ok(Some(value))
            }
            Self::Script(lines) => Self::next_line(lines),
        }
    }

    /// Reads a value parsed from the reply, typically a number.
    pub fn read_number<T>(&mut self, prompt: &str) -> Result<Prompted<T>, CliError>
    where
        T: Clone + FromStr + fmt::Display,
        <T as FromStr>::Err: fmt::Display + fmt::Debug,
    {
        match self {
            Self::Interactive(theme) => {
                let value = Input::<T>::with_theme(theme.as_ref())
                    .with_prompt(prompt)
                    .interact_text()?;
                Ok(Prompted::Value(value))
            }
            Self::Script(lines) => match Self::next_line(lines)? {
                Some(line) => match line.trim().parse::<T>() {
                    Ok(value) => Ok(Prompted::Value(value)),
                    Err(_) => Ok(Prompted::Invalid(line)),
                },
                None => Ok(Prompted::Eof),
            },
        }
    }
}
