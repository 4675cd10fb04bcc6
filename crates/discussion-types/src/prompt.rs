//! Question descriptors handed to an interactive prompter.
//!
//! These describe *what* to ask; rendering and keystroke handling belong to
//! whichever `Prompter` implementation receives them.

/// One selectable option of a [`Question::Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    /// The string returned as the answer when this option is picked.
    pub value: String,
    /// Extra text displayed next to the option.
    pub hint: Option<String>,
}

impl Choice {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hint: None,
        }
    }

    pub fn with_hint(value: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            hint: Some(hint.into()),
        }
    }
}

/// A single interactive question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Question {
    /// Pick exactly one of `choices`.
    Select {
        message: String,
        choices: Vec<Choice>,
        /// Value of the pre-selected choice.
        default: Option<String>,
    },
    /// Single-line free text.
    Text { message: String },
    /// Multi-line free text edited in an external editor.
    Editor {
        message: String,
        help: Option<String>,
        /// Text the editor opens with. Submitting it unedited returns it as-is.
        default: Option<String>,
        /// File extension of the scratch file, including the dot.
        extension: String,
    },
}

impl Question {
    pub fn message(&self) -> &str {
        match self {
            Question::Select { message, .. }
            | Question::Text { message }
            | Question::Editor { message, .. } => message,
        }
    }

    /// Values of a `Select`'s choices, in display order. Empty for other kinds.
    pub fn choice_values(&self) -> Vec<&str> {
        match self {
            Question::Select { choices, .. } => choices.iter().map(|c| c.value.as_str()).collect(),
            _ => Vec::new(),
        }
    }

    pub fn default_answer(&self) -> Option<&str> {
        match self {
            Question::Select { default, .. } | Question::Editor { default, .. } => {
                default.as_deref()
            }
            Question::Text { .. } => None,
        }
    }
}

/// A form field mapped to the question that collects its answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPrompt {
    pub question: Question,
    /// Section heading in the composed body.
    pub label: String,
    /// Whether an empty answer must be rejected.
    pub required: bool,
}
