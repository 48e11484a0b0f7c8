use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unable to serialize template props: {0}")]
    Props(String),

    #[error("template props must serialize to a map, got {0}")]
    NotAMap(&'static str),

    #[error("unterminated placeholder at byte {offset}")]
    Unterminated { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    EmptyPlaceholder { offset: usize },

    #[error("no value for placeholder '{0}'")]
    UnknownField(String),

    #[error("placeholder '{name}' refers to a {kind} value, only strings, numbers and booleans can be rendered")]
    NonScalar { name: String, kind: &'static str },
}

/// Renders `template`, replacing every `{{name}}` with the `name` field of
/// `props`.
pub fn fill_props_to_template<P: Serialize>(
    props: &P,
    template: &str,
) -> Result<String, TemplateError> {
    let values = match serde_json::to_value(props).map_err(|e| TemplateError::Props(e.to_string()))? {
        Value::Object(map) => map,
        other => return Err(TemplateError::NotAMap(kind_of(&other))),
    };

    let mut rendered = String::with_capacity(template.len());
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find(OPEN) {
        let start = cursor + found;
        rendered.push_str(&template[cursor..start]);

        let body_start = start + OPEN.len();
        let body_len = template[body_start..]
            .find(CLOSE)
            .ok_or(TemplateError::Unterminated { offset: start })?;
        let name = template[body_start..body_start + body_len].trim();
        if name.is_empty() {
            return Err(TemplateError::EmptyPlaceholder { offset: start });
        }

        rendered.push_str(&render_value(&values, name)?);
        cursor = body_start + body_len + CLOSE.len();
    }

    rendered.push_str(&template[cursor..]);
    Ok(rendered)
}

fn render_value(values: &Map<String, Value>, name: &str) -> Result<String, TemplateError> {
    match values.get(name) {
        None => Err(TemplateError::UnknownField(name.to_string())),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other) => Err(TemplateError::NonScalar {
            name: name.to_string(),
            kind: kind_of(other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "map",
    }
}
