use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single codemod argument value.
///
/// The argument record of a case is a flat JSON object whose values are
/// strings, numbers, or booleans. Nulls, arrays, and nested objects do not
/// match any variant and fail at deserialization, which is how the decoder
/// enforces the schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// The argument record of a case: argument name to value.
pub type ArgumentMap = BTreeMap<String, ArgumentValue>;
