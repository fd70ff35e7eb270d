//! Operation registry
//!
//! Named workflow operations behind a registry value that callers pass in
//! explicitly. No global state: tests and embedders build independent
//! registries without cross-talk.

use std::collections::HashMap;
use std::sync::Arc;

use pce_ctx_memory::ContextMemory;

use crate::engine::{compute_path, compute_paths, PathStatus};
use crate::Result;

/// A named operation invokable by the workflow engine with a flat parameter
/// map and a context.
pub trait PathOperation: Send + Sync {
    fn name(&self) -> &str;

    fn execute(
        &self,
        params: &HashMap<String, String>,
        ctx: &mut dyn ContextMemory,
    ) -> Result<PathStatus>;
}

/// Single-path computation operation (`compute-path`).
pub struct ComputePath;

impl PathOperation for ComputePath {
    fn name(&self) -> &str {
        "compute-path"
    }

    fn execute(
        &self,
        params: &HashMap<String, String>,
        ctx: &mut dyn ContextMemory,
    ) -> Result<PathStatus> {
        compute_path(params, ctx)
    }
}

/// Primary-plus-backup computation operation (`compute-paths`).
pub struct ComputePaths;

impl PathOperation for ComputePaths {
    fn name(&self) -> &str {
        "compute-paths"
    }

    fn execute(
        &self,
        params: &HashMap<String, String>,
        ctx: &mut dyn ContextMemory,
    ) -> Result<PathStatus> {
        compute_paths(params, ctx)
    }
}

/// Registry of operations, keyed by name.
#[derive(Clone, Default)]
pub struct OperationRegistry {
    operations: HashMap<String, Arc<dyn PathOperation>>,
}

impl OperationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            operations: HashMap::new(),
        }
    }

    /// Registry pre-populated with the built-in operations.
    pub fn with_builtin_operations() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(ComputePath));
        registry.register(Arc::new(ComputePaths));
        registry
    }

    /// Register an operation under its own name, replacing any previous
    /// registration.
    pub fn register(&mut self, operation: Arc<dyn PathOperation>) {
        let name = operation.name().to_string();
        log::info!("registering path operation: {}", name);
        self.operations.insert(name, operation);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn PathOperation>> {
        self.operations.get(name).cloned()
    }

    pub fn operation_names(&self) -> Vec<&str> {
        self.operations.keys().map(String::as_str).collect()
    }
}
