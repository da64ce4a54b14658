//! Data Model Definition
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};

/// Raw analyze payload as it arrives at the JSON boundary.
///
/// Deserialization is untagged: a JSON object takes the [`Object`](Self::Object) path
/// and is validated key by key, while every other JSON shape is kept whole so the
/// payload-shape error can name the type it actually saw.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AnalyzePayload {
  /// A JSON object payload. The validator inspects its key set.
  Object(Map<String, JsonValue>),

  /// Any other JSON value (array, string, number, boolean, null).
  Other(JsonValue),
}

/// Descriptive statistics for one analyzed text.
///
/// Serializes to the API response shape:
/// `{"textLength": {...}, "wordCount": n, "characterCount": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStats {
  /// Character counts with and without whitespace
  pub text_length: TextLength,

  /// Number of whitespace-delimited words
  pub word_count: usize,

  /// Per-letter occurrence counts, sorted by character ascending
  pub character_count: Vec<CharCount>,
}

/// Character counts for the original and the whitespace-collapsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextLength {
  /// Characters in the text exactly as submitted
  pub with_spaces: usize,

  /// Characters left once every whitespace run is removed
  pub without_spaces: usize,
}

/// Occurrence count for one lower-case alphabetic character.
///
/// Serializes as a single-key object `{"<char>": <count>}`; the response's
/// `characterCount` is a sequence of these. The key is dynamic, which rules
/// out a derived `Serialize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCount {
  /// The counted character
  pub character: char,

  /// Number of occurrences
  pub count: usize,
}

impl Serialize for CharCount {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: Serializer,
  {
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry(&self.character.to_string(), &self.count)?;
    map.end()
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
