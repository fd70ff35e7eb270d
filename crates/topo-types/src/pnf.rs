//! Physical network function

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::Vertex;

/// A physical network function, identified by its name. The name is the
/// case-sensitive equality and hash key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pnf(String);

impl Pnf {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Pnf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Vertex for Pnf {}
