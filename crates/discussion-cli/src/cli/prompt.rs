//! Terminal prompter backed by dialoguer.
//!
//! - `Select` questions become an arrow-key list (Esc/q cancels)
//! - `Text` questions become a single-line input
//! - `Editor` questions open `$VISUAL`/`$EDITOR` on a scratch file

use std::io;

use console::style;
use dialoguer::{Editor, Input, Select};

use discussion_core::prompt::Prompter;
use discussion_types::error::PromptError;
use discussion_types::prompt::{Choice, Question};

/// Prompter talking to the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn select(
        &self,
        message: &str,
        choices: &[Choice],
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        let items = choice_labels(choices);
        let selection = Select::new()
            .with_prompt(message)
            .items(&items)
            .default(default_index(choices, default))
            .interact_opt()
            .map_err(dialoguer_error)?
            .ok_or(PromptError::Cancelled)?;

        choices
            .get(selection)
            .map(|c| c.value.clone())
            .ok_or_else(|| PromptError::Io(format!("selection {selection} out of range")))
    }

    fn text(&self, message: &str, required: bool) -> Result<String, PromptError> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(!required)
            .interact_text()
            .map_err(dialoguer_error)
    }

    fn edit(
        &self,
        message: &str,
        help: Option<&str>,
        default: Option<&str>,
        extension: &str,
        required: bool,
    ) -> Result<String, PromptError> {
        println!("{} {}", style("?").green().bold(), style(message).bold());
        if let Some(help) = help {
            println!("  {}", style(help).dim());
        }

        loop {
            let edited = Editor::new()
                .extension(extension)
                .trim_newlines(false)
                .edit(default.unwrap_or_default())
                .map_err(dialoguer_error)?;
            let answer = editor_answer(edited, default);

            if !required || !answer.trim().is_empty() {
                return Ok(answer);
            }
            println!("  {}", style("This field is required, reopening the editor").red());
        }
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &Question, required: bool) -> Result<String, PromptError> {
        match question {
            Question::Select {
                message,
                choices,
                default,
            } => self.select(message, choices, default.as_deref()),
            Question::Text { message } => self.text(message, required),
            Question::Editor {
                message,
                help,
                default,
                extension,
            } => self.edit(
                message,
                help.as_deref(),
                default.as_deref(),
                extension,
                required,
            ),
        }
    }
}

/// Display labels: `value -- hint` with the hint dimmed.
fn choice_labels(choices: &[Choice]) -> Vec<String> {
    choices
        .iter()
        .map(|c| match &c.hint {
            Some(hint) => format!("{} -- {}", c.value, style(hint).dim()),
            None => c.value.clone(),
        })
        .collect()
}

/// Index of the pre-selected choice, falling back to the first.
fn default_index(choices: &[Choice], default: Option<&str>) -> usize {
    default
        .and_then(|d| choices.iter().position(|c| c.value == d))
        .unwrap_or(0)
}

/// An editor closed without saving leaves the default in place.
fn editor_answer(edited: Option<String>, default: Option<&str>) -> String {
    edited
        .or_else(|| default.map(str::to_string))
        .unwrap_or_default()
}

fn dialoguer_error(err: dialoguer::Error) -> PromptError {
    let dialoguer::Error::IO(err) = err;
    io_error(err)
}

fn io_error(err: io::Error) -> PromptError {
    match err.kind() {
        io::ErrorKind::Interrupted => PromptError::Cancelled,
        _ => PromptError::Io(err.to_string()),
    }
}
