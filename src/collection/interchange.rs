//! collection::interchange
//!
//! JSON encoding and decoding of whole collections.
//!
//! A collection encodes as a bare JSON array of its elements. Structured
//! elements use their serde field names, so `#[serde(rename = "...")]`
//! controls the external tag.
//!
//! # Example
//!
//! ```
//! use pippi::collection;
//! use pippi::collection::Collection;
//!
//! let json = collection![1, 2, 3].to_json().unwrap();
//! assert_eq!(json, "[1,2,3]");
//!
//! let parsed: Collection<i32> = Collection::from_json(&json).unwrap();
//! assert_eq!(parsed.all(), &[1, 2, 3]);
//!
//! assert!(Collection::<i32>::from_json("[1, \"two\"]").is_err());
//! ```

use std::io::{Read, Write};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::Collection;

/// Errors from encoding or decoding a collection.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// An element cannot be represented in JSON.
    #[error("failed to encode collection: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The input is malformed or does not match the element type.
    #[error("failed to decode collection: {0}")]
    Decoding(#[source] serde_json::Error),
}

impl<T: Serialize> Collection<T> {
    /// Encode as compact JSON.
    ///
    /// # Errors
    ///
    /// Returns `InterchangeError::Encoding` if an element cannot be
    /// represented, e.g. a map with non-string keys.
    pub fn to_json(&self) -> Result<String, InterchangeError> {
        serde_json::to_string(self).map_err(InterchangeError::Encoding)
    }

    /// Encode as indented JSON.
    ///
    /// # Errors
    ///
    /// Same as [`Collection::to_json`].
    pub fn to_json_pretty(&self) -> Result<String, InterchangeError> {
        serde_json::to_string_pretty(self).map_err(InterchangeError::Encoding)
    }

    /// Encode as compact or indented JSON into `writer`.
    ///
    /// # Errors
    ///
    /// Returns `InterchangeError::Encoding` for unrepresentable elements and
    /// for write failures.
    pub fn to_writer<W: Write>(&self, writer: W, pretty: bool) -> Result<(), InterchangeError> {
        let written = if pretty {
            serde_json::to_writer_pretty(writer, self)
        } else {
            serde_json::to_writer(writer, self)
        };
        written.map_err(InterchangeError::Encoding)
    }
}

impl<T: DeserializeOwned> Collection<T> {
    /// Decode a JSON array.
    ///
    /// # Errors
    ///
    /// Returns `InterchangeError::Decoding` on malformed input or when the
    /// encoded shape does not match `T`.
    pub fn from_json(json: &str) -> Result<Self, InterchangeError> {
        serde_json::from_str(json).map_err(InterchangeError::Decoding)
    }

    /// Decode a JSON array from `reader`.
    ///
    /// # Errors
    ///
    /// Returns `InterchangeError::Decoding` on malformed input, shape
    /// mismatch, or read failure.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, InterchangeError> {
        serde_json::from_reader(reader).map_err(InterchangeError::Decoding)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use serde::Deserialize;

    use super::*;
    use crate::collection;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Person {
        #[serde(rename = "full_name")]
        name: String,
        age: u32,
    }

    #[test]
    fn round_trip_integers() {
        let c = collection![1, 2, 3, 4, 5];
        let json = c.to_json().unwrap();
        let parsed: Collection<i32> = Collection::from_json(&json).unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn structs_use_serde_field_names() {
        let c = collection![
            Person { name: "Alice".into(), age: 25 },
            Person { name: "Bob".into(), age: 30 },
        ];
        let json = c.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"full_name":"Alice","age":25},{"full_name":"Bob","age":30}]"#
        );

        let plain: Vec<Person> = serde_json::from_str(&json).unwrap();
        assert_eq!(plain[0].name, "Alice");
        assert_eq!(Collection::from_json(&json).unwrap(), c);
    }

    #[test]
    fn empty_round_trip() {
        let c: Collection<String> = Collection::new();
        assert_eq!(c.to_json().unwrap(), "[]");
        assert!(Collection::<String>::from_json("[]").unwrap().is_empty());
    }

    #[test]
    fn unrepresentable_element_is_encoding_error() {
        let mut keyed = HashMap::new();
        keyed.insert((1, 2), "pair");
        let c = collection![keyed];
        let err = c.to_json().unwrap_err();
        assert!(matches!(err, InterchangeError::Encoding(_)));
        assert!(err.to_string().starts_with("failed to encode collection"));
    }

    #[test]
    fn malformed_input_is_decoding_error() {
        let err = Collection::<i32>::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, InterchangeError::Decoding(_)));
    }

    #[test]
    fn shape_mismatch_is_decoding_error() {
        assert!(matches!(
            Collection::<i32>::from_json(r#"{"a": 1}"#),
            Err(InterchangeError::Decoding(_))
        ));
        assert!(matches!(
            Collection::<Person>::from_json(r#"[{"name": "Alice", "age": 1}]"#),
            Err(InterchangeError::Decoding(_))
        ));
    }

    #[test]
    fn writer_and_reader() {
        let c = collection!["a".to_string(), "b".to_string()];
        let mut buffer = Vec::new();
        c.to_writer(&mut buffer, true).unwrap();
        assert!(String::from_utf8_lossy(&buffer).contains('\n'));

        let parsed: Collection<String> = Collection::from_reader(buffer.as_slice()).unwrap();
        assert_eq!(parsed, c);
    }

    #[test]
    fn pretty_output_decodes() {
        let c = collection![1.5, -2.25];
        let pretty = c.to_json_pretty().unwrap();
        assert_eq!(Collection::<f64>::from_json(&pretty).unwrap(), c);
    }
}
