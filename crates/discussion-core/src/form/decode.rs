//! Category form decoding.
//!
//! Turns the raw bytes of `.github/DISCUSSION_TEMPLATE/<slug>.yml` into a
//! typed [`Template`]. Each `body` entry is dispatched on its `type` key and
//! decoded into the matching [`FormField`] variant; an unknown type or a
//! malformed entry fails the whole template. Keys the decoder does not read
//! (`title`, `labels`, `render`, ...) are ignored.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};

use discussion_types::error::DecodeError;
use discussion_types::form::{BodyItem, FieldKind, FormField, Template, Validations};

/// Top level of a category form. Only `body` is read.
#[derive(Debug, Deserialize)]
struct RawTemplate {
    #[serde(default)]
    body: Option<Vec<Value>>,
}

/// Decode a category form document.
///
/// The returned template has exactly one item per `body` entry, in document
/// order.
pub fn decode_template(raw: &[u8]) -> Result<Template, DecodeError> {
    let text = std::str::from_utf8(raw).map_err(|e| DecodeError::Syntax(e.to_string()))?;
    let doc: RawTemplate =
        serde_yaml_ng::from_str(text).map_err(|e| DecodeError::Syntax(e.to_string()))?;
    let entries = doc.body.ok_or(DecodeError::MissingBody)?;

    let body = entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| decode_item(index, entry))
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(fields = body.len(), "Decoded discussion category form");
    Ok(Template { body })
}

/// Decode one `body` entry: discriminator first, then flags, then attributes.
fn decode_item(index: usize, entry: Value) -> Result<BodyItem, DecodeError> {
    let Value::Mapping(map) = entry else {
        return Err(DecodeError::InvalidItem {
            index,
            item_type: String::new(),
            message: "expected a mapping".to_string(),
        });
    };

    let type_name = map.get("type").map(render_scalar).unwrap_or_default();
    let kind: FieldKind = type_name
        .parse()
        .map_err(|_| DecodeError::UnknownType { index, type_name })?;

    let id: String = optional_key(&map, "id", index, kind)?;
    let validations: Validations = optional_key(&map, "validations", index, kind)?;

    let field = match kind {
        FieldKind::Dropdown => FormField::Dropdown(optional_key(&map, "attributes", index, kind)?),
        FieldKind::Input => FormField::Input(optional_key(&map, "attributes", index, kind)?),
        FieldKind::Textarea => FormField::Textarea(optional_key(&map, "attributes", index, kind)?),
    };

    Ok(BodyItem {
        id,
        field,
        validations,
    })
}

/// Text of a `type` value for error reporting. Non-string scalars keep their
/// YAML spelling.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => serde_yaml_ng::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Deserialize `key` from an entry, defaulting when absent or null.
fn optional_key<T>(map: &Mapping, key: &str, index: usize, kind: FieldKind) -> Result<T, DecodeError>
where
    T: DeserializeOwned + Default,
{
    match map.get(key) {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_yaml_ng::from_value(value.clone()).map_err(|e| {
            DecodeError::InvalidItem {
                index,
                item_type: kind.to_string(),
                message: format!("`{key}`: {e}"),
            }
        }),
    }
}
