//! Typed testcase descriptors and the JSON document that carries them.
//!
//! A document is a JSON object of named testcases. Each testcase holds a
//! `keys` member with the `n`/`k` threshold and one member per share, keyed by
//! the share's x-coordinate:
//!
//! ```json
//! {
//!   "testcase1": {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": "2", "value": "111" }
//!   }
//! }
//! ```
//!
//! Members are kept in document order, so "the first k shares" means the
//! first k as written.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;

use crate::error::DocumentError;

const THRESHOLD_KEY: &str = "keys";

/// `n` shares were issued; any `k` of them reconstruct the secret.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Threshold {
    pub n: usize,
    pub k: usize,
}

/// A share's y-value as written: digits in the given base.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct EncodedShare {
    pub base: String,
    pub value: String,
}

/// An encoded share together with the label carrying its x-coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabeledShare {
    pub label: String,
    pub share: EncodedShare,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Testcase {
    pub threshold: Threshold,
    pub shares: Vec<LabeledShare>,
}

impl Testcase {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            shares: Vec::new(),
        }
    }

    /// Append a share, keeping insertion order.
    pub fn with_share(
        mut self,
        label: impl Into<String>,
        base: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.shares.push(LabeledShare {
            label: label.into(),
            share: EncodedShare {
                base: base.into(),
                value: value.into(),
            },
        });
        self
    }
}

struct TestcaseVisitor;

impl<'de> Visitor<'de> for TestcaseVisitor {
    type Value = Testcase;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a testcase object with a `keys` threshold and share entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Testcase, A::Error> {
        let mut threshold = None;
        let mut shares = Vec::new();

        while let Some(label) = map.next_key::<String>()? {
            if label == THRESHOLD_KEY {
                if threshold.is_some() {
                    return Err(de::Error::duplicate_field(THRESHOLD_KEY));
                }
                threshold = Some(map.next_value::<Threshold>()?);
            } else {
                let share = map.next_value::<EncodedShare>()?;
                shares.push(LabeledShare { label, share });
            }
        }

        let threshold = threshold.ok_or_else(|| de::Error::missing_field(THRESHOLD_KEY))?;
        Ok(Testcase { threshold, shares })
    }
}

impl<'de> Deserialize<'de> for Testcase {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(TestcaseVisitor)
    }
}

/// Named testcases in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub testcases: Vec<(String, Testcase)>,
}

impl Document {
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let json = fs::read_to_string(path)?;
        Ok(Self::from_json_str(&json)?)
    }

    pub fn len(&self) -> usize {
        self.testcases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.testcases.is_empty()
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = Document;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object of named testcases")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Document, A::Error> {
        let mut testcases = Vec::new();
        while let Some((name, testcase)) = map.next_entry::<String, Testcase>()? {
            testcases.push((name, testcase));
        }
        Ok(Document { testcases })
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}
