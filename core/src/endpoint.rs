//! Endpoint templates: path-parameter substitution and query flattening.
//!
//! # Design
//! An `Endpoint` is the fully-resolved target of one call: the relative
//! path with every `{name}` placeholder substituted, plus flat query pairs.
//! Parameter objects stay strongly typed at the call site; serde turns them
//! into the name/value mapping substitution works from, so a placeholder
//! without a matching field is caught before anything touches the network.

use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

/// A resolved request target: relative path plus query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    path: String,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// An endpoint with no placeholders and no query string.
    pub fn new(path: &str) -> Self {
        Self {
            path: path.to_string(),
            query: Vec::new(),
        }
    }

    /// Resolve `template` by substituting `{name}` placeholders with the
    /// fields of `params`. Fails if `params` does not serialize to an
    /// object, if a placeholder has no matching field, or if the matching
    /// field is not a scalar.
    pub fn with_path<P: Serialize>(template: &str, params: &P) -> Result<Self, ApiError> {
        let fields = to_object(params)?;
        let path = render(template, &fields)?;
        Ok(Self {
            path,
            query: Vec::new(),
        })
    }

    /// Attach query parameters, flattened from the fields of `params`.
    /// `None` fields are omitted entirely, never sent as `null`.
    pub fn query<Q: Serialize>(mut self, params: &Q) -> Result<Self, ApiError> {
        let fields = to_object(params)?;
        for (key, value) in fields {
            if value.is_null() {
                continue;
            }
            match scalar(&value) {
                Some(text) => self.query.push((key, text)),
                None => {
                    return Err(ApiError::SerializationError(format!(
                        "query field '{key}' is not a scalar"
                    )))
                }
            }
        }
        Ok(self)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Join onto `base_url` (already stripped of its trailing slash).
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url, self.path.trim_start_matches('/'))
    }
}

fn to_object<P: Serialize>(params: &P) -> Result<serde_json::Map<String, Value>, ApiError> {
    match serde_json::to_value(params) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ApiError::SerializationError(format!(
            "parameters must serialize to an object, got {other}"
        ))),
        Err(error) => Err(ApiError::SerializationError(error.to_string())),
    }
}

/// Substitute every `{name}` in `template` from `fields`.
fn render(template: &str, fields: &serde_json::Map<String, Value>) -> Result<String, ApiError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let close = after.find('}').ok_or_else(|| {
            ApiError::TemplateError(format!("unclosed placeholder in '{template}'"))
        })?;
        let name = &after[..close];
        let value = fields.get(name).ok_or_else(|| {
            ApiError::TemplateError(format!("no field for placeholder '{name}'"))
        })?;
        let text = scalar(value).ok_or_else(|| {
            ApiError::TemplateError(format!("placeholder '{name}' is not a scalar"))
        })?;
        out.push_str(&text);
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// A JSON scalar in its URL text form; `None` for null, arrays and objects.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
