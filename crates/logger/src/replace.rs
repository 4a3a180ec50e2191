//! Attribute replacement pipeline
//!
//! Every attribute of a record, built-in ones (`time`, `level`, `source`,
//! `msg`) included, is threaded through the registered replacers in
//! registration order before it is encoded. A replacer sees the group path of
//! the attribute: the names of the enclosing spans for event fields, an empty
//! slice for built-ins.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Key of the record timestamp
pub const TIME_KEY: &str = "time";
/// Key of the record level
pub const LEVEL_KEY: &str = "level";
/// Key of the call site annotation
pub const SOURCE_KEY: &str = "source";
/// Key of the record message
pub const MESSAGE_KEY: &str = "msg";

/// A single key/value pair of a log record
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    /// Attribute name; an empty key removes the attribute from the record
    pub key: String,
    /// Attribute value
    pub value: Value,
}

impl Attr {
    /// Create a new attribute
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// An attribute that will be left out of the record
    #[must_use]
    pub fn dropped() -> Self {
        Self {
            key: String::new(),
            value: Value::Null,
        }
    }

    /// Whether this attribute has been dropped
    #[inline]
    #[must_use]
    pub fn is_dropped(&self) -> bool {
        self.key.is_empty()
    }
}

/// Signature of a single replacer function
pub type ReplaceFn = dyn Fn(&[&str], Attr) -> Attr + Send + Sync + 'static;

/// Ordered composition of replacer functions
#[derive(Clone, Default)]
pub struct Replacer {
    steps: Vec<Arc<ReplaceFn>>,
}

impl Replacer {
    /// Identity pipeline
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a function; it runs after every function added before it
    pub fn push<F>(&mut self, f: F)
    where
        F: Fn(&[&str], Attr) -> Attr + Send + Sync + 'static,
    {
        self.steps.push(Arc::new(f));
    }

    pub(crate) fn push_shared(&mut self, f: Arc<ReplaceFn>) {
        self.steps.push(f);
    }

    /// Number of registered functions
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the pipeline is the identity
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Run `attr` through every function in order
    pub fn apply(&self, groups: &[&str], attr: Attr) -> Attr {
        self.steps.iter().fold(attr, |attr, f| f(groups, attr))
    }
}

impl fmt::Debug for Replacer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Replacer")
            .field("steps", &self.steps.len())
            .finish()
    }
}
