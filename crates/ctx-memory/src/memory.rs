//! Context-memory store

use indexmap::IndexMap;

use crate::error::ContextError;
use crate::Result;

/// The external collaborator seam: a flat string-keyed property store.
///
/// Thread-safety across concurrent workflow executions is the
/// implementation's concern; key namespaces are scoped per workflow by the
/// caller-supplied prefixes.
pub trait ContextMemory {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str);
}

/// In-memory context with deterministic (insertion-ordered) iteration,
/// suitable for fixtures, the CLI, and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContext {
    entries: IndexMap<String, String>,
}

impl InMemoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `key = value` lines. Empty lines and `#` comments are skipped.
    pub fn from_properties(content: &str) -> Result<Self> {
        let mut ctx = Self::new();
        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| ContextError::Parse {
                line: index + 1,
                message: format!("expected 'key = value', found '{}'", line),
            })?;
            ctx.set(key.trim(), value.trim());
        }
        Ok(ctx)
    }

    /// Render the context back into properties format, one entry per line in
    /// insertion order.
    pub fn to_properties(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push_str(key);
            out.push_str(" = ");
            out.push_str(value);
            out.push('\n');
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All entries whose key starts with the given prefix, in insertion
    /// order.
    pub fn entries_with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.iter().filter(move |(k, _)| k.starts_with(prefix))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContextMemory for InMemoryContext {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}
