//! Benchmark fixtures for the `jsondiffpatch`-wire-compatible diff/patch
//! engine: a small set of representative before/after document pairs,
//! spanning the shapes the engine is expected to handle well — a small
//! config object, a medium array-of-objects collection (exercising the
//! Myers SES and object-pair fusion), and a deeply nested document.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

use jdp_core::Value;

/// A named before/after document pair used as a benchmark input.
#[derive(Debug, Clone)]
pub struct Corpus {
    name: &'static str,
    before: &'static str,
    after: &'static str,
}

impl Corpus {
    /// The corpus's identifier, used as the Criterion benchmark-group parameter.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Parses the `before` document.
    #[must_use]
    pub fn before(&self) -> Value {
        Value::from_json_str(self.before).expect("benchmark fixture is valid JSON")
    }

    /// Parses the `after` document.
    #[must_use]
    pub fn after(&self) -> Value {
        Value::from_json_str(self.after).expect("benchmark fixture is valid JSON")
    }

    /// Combined byte size of both documents, used for Criterion throughput reporting.
    #[must_use]
    pub fn fixture_bytes(&self) -> usize {
        self.before.len() + self.after.len()
    }
}

/// Returns the full set of registered benchmark corpora.
#[must_use]
pub fn available_corpora() -> Vec<Corpus> {
    vec![
        Corpus {
            name: "config-object",
            before: r#"{"host":"localhost","port":8080,"debug":false,"tags":["a","b","c"]}"#,
            after: r#"{"host":"localhost","port":9090,"debug":true,"tags":["a","b","d"],"retries":3}"#,
        },
        Corpus {
            name: "array-of-objects",
            before: r#"[{"id":1,"name":"alice"},{"id":2,"name":"bob"},{"id":3,"name":"carol"},{"id":4,"name":"dave"}]"#,
            after: r#"[{"id":1,"name":"alice"},{"id":3,"name":"carol"},{"id":4,"name":"dave"},{"id":5,"name":"erin"}]"#,
        },
        Corpus {
            name: "nested-document",
            before: r#"{"a":{"b":{"c":{"d":[1,2,3],"e":"x"}}},"f":[{"g":1},{"g":2}]}"#,
            after: r#"{"a":{"b":{"c":{"d":[1,2,4],"e":"y"}}},"f":[{"g":1},{"g":3}]}"#,
        },
    ]
}
