//! Discussion category form types.
//!
//! A category form lives at `.github/DISCUSSION_TEMPLATE/<slug>.yml` and
//! declares an ordered `body` of fields. Once decoded, a [`Template`] is fully
//! typed: every field is one of the three [`FormField`] variants.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A decoded discussion category form.
///
/// The order of `body` is the order of sections in the composed discussion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub body: Vec<BodyItem>,
}

impl Template {
    /// Number of fields in the form.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// One field of a category form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyItem {
    /// The field's `id` key. Carried through but not interpreted.
    pub id: String,
    /// Variant-specific attributes.
    pub field: FormField,
    /// Validation flags attached to the field (empty when absent).
    pub validations: Validations,
}

impl BodyItem {
    pub fn kind(&self) -> FieldKind {
        self.field.kind()
    }

    pub fn label(&self) -> &str {
        self.field.label()
    }

    pub fn is_required(&self) -> bool {
        self.validations.is_required()
    }
}

/// The closed set of field variants a category form may declare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormField {
    Dropdown(DropdownAttributes),
    Input(InputAttributes),
    Textarea(TextareaAttributes),
}

impl FormField {
    pub fn kind(&self) -> FieldKind {
        match self {
            FormField::Dropdown(_) => FieldKind::Dropdown,
            FormField::Input(_) => FieldKind::Input,
            FormField::Textarea(_) => FieldKind::Textarea,
        }
    }

    /// The heading used for this field's section in the composed body.
    pub fn label(&self) -> &str {
        match self {
            FormField::Dropdown(attrs) => &attrs.label,
            FormField::Input(attrs) => &attrs.label,
            FormField::Textarea(attrs) => &attrs.label,
        }
    }
}

/// The `type` discriminator of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Dropdown,
    Input,
    Textarea,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Dropdown => write!(f, "dropdown"),
            FieldKind::Input => write!(f, "input"),
            FieldKind::Textarea => write!(f, "textarea"),
        }
    }
}

impl FromStr for FieldKind {
    type Err = String;

    /// Matching is exact: `Dropdown` is not a known type.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dropdown" => Ok(FieldKind::Dropdown),
            "input" => Ok(FieldKind::Input),
            "textarea" => Ok(FieldKind::Textarea),
            other => Err(format!("unknown type: {other}")),
        }
    }
}

/// Attributes of a single-choice dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropdownAttributes {
    #[serde(default)]
    pub label: String,
    /// Choices in declaration order. Duplicates are kept as distinct choices.
    #[serde(default)]
    pub options: Vec<String>,
}

/// Attributes of a single-line text input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputAttributes {
    #[serde(default)]
    pub label: String,
}

/// Attributes of a multi-line text area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextareaAttributes {
    #[serde(default)]
    pub label: String,
    /// Help text shown alongside the question.
    #[serde(default)]
    pub description: Option<String>,
    /// Pre-filled content of the answer.
    #[serde(default)]
    pub value: Option<String>,
}

/// Per-field validation flags (`validations:` in the form YAML).
///
/// Only `required` is interpreted; other keys are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Validations(BTreeMap<String, bool>);

impl Validations {
    pub const REQUIRED: &'static str = "required";

    pub fn new(flags: BTreeMap<String, bool>) -> Self {
        Self(flags)
    }

    /// True only when `required: true` is present.
    pub fn is_required(&self) -> bool {
        self.get(Self::REQUIRED).unwrap_or(false)
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, bool)> for Validations {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
