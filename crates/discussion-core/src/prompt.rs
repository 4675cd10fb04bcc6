//! Interactive prompter trait.

use discussion_types::error::PromptError;
use discussion_types::prompt::Question;

/// Asks the user one question at a time.
///
/// Implementations block until the question is answered. When `required` is
/// set they must not return an empty answer. Cancellation by the user is
/// reported as [`PromptError::Cancelled`] and ends the session; callers never
/// ask again after an error.
pub trait Prompter {
    fn ask(&mut self, question: &Question, required: bool) -> Result<String, PromptError>;
}
