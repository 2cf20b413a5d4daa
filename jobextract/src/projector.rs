//! Projecting a decoded JSON value onto [`ExtractionResult`].

use serde_json::Value;
use tracing::debug;

use crate::schema::{ExtractionResult, Field};

/// Key that conventionally wraps the six fields.
pub const DEFAULT_WRAPPER_KEY: &str = "parameters";

/// What the projector found while filling a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    /// Whether the wrapper key was present.
    pub wrapper_found: bool,
    /// Fields that were absent or not arrays, in wire order.
    pub defaulted: Vec<Field>,
}

/// Maps the parameter object onto the six fixed fields.
///
/// Each field is read on its own: a field that is missing, or that holds
/// anything other than an array, becomes empty without affecting the rest.
///
/// # Examples
///
/// ```
/// use jobextract::projector::FieldProjector;
/// use serde_json::json;
///
/// let decoded = json!({"parameters": {"degree": ["BSc"], "soft_skill": "communication"}});
/// let (record, projection) = FieldProjector::default().project(&decoded);
///
/// assert_eq!(record.degree, vec!["BSc".to_string()]);
/// assert!(record.soft_skill.is_empty());
/// assert!(projection.wrapper_found);
/// ```
#[derive(Debug, Clone)]
pub struct FieldProjector {
    wrapper_key: String,
}

impl Default for FieldProjector {
    fn default() -> Self {
        Self::new(DEFAULT_WRAPPER_KEY)
    }
}

impl FieldProjector {
    /// Creates a projector that looks for the fields under `wrapper_key`.
    pub fn new(wrapper_key: impl Into<String>) -> Self {
        Self {
            wrapper_key: wrapper_key.into(),
        }
    }

    /// Returns the wrapper key this projector looks for.
    #[inline]
    pub fn wrapper_key(&self) -> &str {
        &self.wrapper_key
    }

    /// Fills a record from `decoded`.
    ///
    /// The value under the wrapper key is the parameter source. If the key is
    /// absent, `decoded` itself is. Non-object sources yield an empty record.
    pub fn project(&self, decoded: &Value) -> (ExtractionResult, Projection) {
        let wrapped = decoded.get(self.wrapper_key.as_str());
        let params = wrapped.unwrap_or(decoded);

        let mut record = ExtractionResult::empty();
        let mut projection = Projection {
            wrapper_found: wrapped.is_some(),
            defaulted: Vec::new(),
        };

        for field in Field::ALL {
            match params.get(field.as_str()) {
                Some(Value::Array(items)) => {
                    *record.get_mut(field) = items.iter().map(item_text).collect();
                }
                Some(other) => {
                    debug!(%field, found = kind_of(other), "field is not a list, using empty");
                    projection.defaulted.push(field);
                }
                None => projection.defaulted.push(field),
            }
        }

        (record, projection)
    }
}

/// Renders one array element. Strings pass through unchanged.
fn item_text(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
