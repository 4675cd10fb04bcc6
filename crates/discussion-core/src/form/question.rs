//! Mapping of form fields (and the fixed title/category steps) to questions.
//!
//! Pure functions: no I/O, same input always yields the same question.

use discussion_types::category::Category;
use discussion_types::form::{BodyItem, FormField};
use discussion_types::prompt::{Choice, FieldPrompt, Question};

/// The implicit dropdown choice, appended when absent and pre-selected.
pub const NONE_CHOICE: &str = "None";

/// Scratch-file extension for multi-line answers.
pub const EDITOR_EXTENSION: &str = ".md";

pub const TITLE_MESSAGE: &str = "Discussion title";

pub const CATEGORY_MESSAGE: &str = "Select category for new Discussion";

/// Map a form field to the question that collects its answer.
pub fn field_prompt(item: &BodyItem) -> FieldPrompt {
    let label = item.label().to_string();

    let question = match &item.field {
        FormField::Dropdown(attrs) => {
            let mut options = attrs.options.clone();
            if !options.iter().any(|o| o == NONE_CHOICE) {
                options.push(NONE_CHOICE.to_string());
            }
            Question::Select {
                message: label.clone(),
                choices: options.into_iter().map(Choice::new).collect(),
                default: Some(NONE_CHOICE.to_string()),
            }
        }
        FormField::Input(_) => Question::Text {
            message: label.clone(),
        },
        FormField::Textarea(attrs) => Question::Editor {
            message: label.clone(),
            help: non_empty(attrs.description.as_deref()),
            default: non_empty(attrs.value.as_deref()),
            extension: EDITOR_EXTENSION.to_string(),
        },
    };

    FieldPrompt {
        question,
        label,
        required: item.is_required(),
    }
}

/// The always-required title question.
pub fn title_prompt() -> FieldPrompt {
    FieldPrompt {
        question: Question::Text {
            message: TITLE_MESSAGE.to_string(),
        },
        label: TITLE_MESSAGE.to_string(),
        required: true,
    }
}

/// Single-choice question over the unique category slugs, sorted, each
/// hinted with its category's description.
pub fn category_question(categories: &[Category]) -> Question {
    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by(|a, b| a.slug.cmp(&b.slug));
    sorted.dedup_by(|a, b| a.slug == b.slug);

    let choices = sorted
        .into_iter()
        .map(|c| match non_empty(Some(c.description.as_str())) {
            Some(hint) => Choice::with_hint(&c.slug, hint),
            None => Choice::new(&c.slug),
        })
        .collect();

    Question::Select {
        message: CATEGORY_MESSAGE.to_string(),
        choices,
        default: None,
    }
}

fn non_empty(text: Option<&str>) -> Option<String> {
    text.filter(|t| !t.is_empty()).map(str::to_string)
}
