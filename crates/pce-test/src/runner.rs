//! Scenario runner
//!
//! Drives the fixture scenarios end-to-end through an operation registry
//! and context memory, collecting per-scenario results for the
//! `scenario-test` binary.

use serde::Serialize;

use pce_ctx_memory::{ContextMemory, InMemoryContext};
use pce_path_engine::{OperationRegistry, PathStatus};

use crate::scenarios::{
    backup_cross_link, backup_dst_node, backup_params, base_params, dst_node, no_path_context,
    same_node_context, src_node, two_domain_context, RESPONSE_PREFIX,
};

/// Scenario runner over a caller-owned registry.
pub struct ScenarioRunner {
    registry: OperationRegistry,
}

/// Result of a single scenario
#[derive(Debug, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    pub passed: bool,
    pub details: Vec<String>,
    pub error: Option<String>,
}

/// Aggregated suite results
#[derive(Debug, Serialize)]
pub struct ScenarioSuite {
    pub results: Vec<ScenarioResult>,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self {
            registry: OperationRegistry::with_builtin_operations(),
        }
    }

    /// Run every scenario and aggregate the outcome.
    pub fn run_all(&self) -> ScenarioSuite {
        let results = vec![
            self.run_two_domain_primary(),
            self.run_two_domain_backup(),
            self.run_no_path(),
            self.run_same_node(),
        ];
        let passed = results.iter().filter(|result| result.passed).count();
        let failed = results.len() - passed;
        ScenarioSuite {
            total: results.len(),
            passed,
            failed,
            results,
        }
    }

    fn run_two_domain_primary(&self) -> ScenarioResult {
        self.run(
            "two-domain-primary",
            "compute-path",
            two_domain_context(),
            base_params(&src_node(), &dst_node()),
            |ctx, status, checks| {
                checks.expect(status == PathStatus::Success, format!("status {}", status));
                let length = solutions_length(ctx, "solutions");
                checks.expect(length > 0, format!("solutions_length {}", length));
            },
        )
    }

    fn run_two_domain_backup(&self) -> ScenarioResult {
        self.run(
            "two-domain-backup",
            "compute-paths",
            two_domain_context(),
            backup_params(&src_node(), &dst_node(), &backup_dst_node()),
            |ctx, status, checks| {
                checks.expect(status == PathStatus::Success, format!("status {}", status));
                let secondary = solutions_length(ctx, "secondarySolutions");
                checks.expect(
                    secondary > 0,
                    format!("secondarySolutions_length {}", secondary),
                );
                let link = ctx
                    .get(&format!("{}.secondarySolutions[0].original_link", RESPONSE_PREFIX))
                    .unwrap_or_default();
                checks.expect(
                    link == backup_cross_link(),
                    format!("secondary original_link {}", link),
                );
            },
        )
    }

    fn run_no_path(&self) -> ScenarioResult {
        self.run(
            "no-path",
            "compute-path",
            no_path_context(),
            base_params(&src_node(), &dst_node()),
            |ctx, status, checks| {
                checks.expect(status == PathStatus::NotFound, format!("status {}", status));
                let length = solutions_length(ctx, "solutions");
                checks.expect(length == 0, format!("solutions_length {}", length));
            },
        )
    }

    fn run_same_node(&self) -> ScenarioResult {
        self.run(
            "same-node",
            "compute-path",
            same_node_context(),
            base_params(&src_node(), &src_node()),
            |ctx, status, checks| {
                checks.expect(status == PathStatus::Success, format!("status {}", status));
                let length = solutions_length(ctx, "solutions");
                checks.expect(length == 0, format!("solutions_length {}", length));
            },
        )
    }

    fn run<F>(
        &self,
        name: &str,
        operation: &str,
        mut ctx: InMemoryContext,
        params: std::collections::HashMap<String, String>,
        verify: F,
    ) -> ScenarioResult
    where
        F: FnOnce(&InMemoryContext, PathStatus, &mut Checks),
    {
        log::info!("running scenario: {}", name);
        let Some(operation) = self.registry.get(operation) else {
            return ScenarioResult {
                name: name.to_string(),
                passed: false,
                details: Vec::new(),
                error: Some(format!("operation not registered: {}", operation)),
            };
        };
        match operation.execute(&params, &mut ctx) {
            Ok(status) => {
                let mut checks = Checks::default();
                verify(&ctx, status, &mut checks);
                ScenarioResult {
                    name: name.to_string(),
                    passed: checks.passed,
                    details: checks.details,
                    error: None,
                }
            }
            Err(error) => ScenarioResult {
                name: name.to_string(),
                passed: false,
                details: Vec::new(),
                error: Some(error.to_string()),
            },
        }
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-scenario assertion collector.
pub struct Checks {
    passed: bool,
    details: Vec<String>,
}

impl Default for Checks {
    fn default() -> Self {
        Self {
            passed: true,
            details: Vec::new(),
        }
    }
}

impl Checks {
    fn expect(&mut self, ok: bool, detail: String) {
        let marker = if ok { "✓" } else { "✗" };
        self.details.push(format!("{} {}", marker, detail));
        if !ok {
            self.passed = false;
        }
    }
}

fn solutions_length(ctx: &InMemoryContext, base: &str) -> usize {
    ctx.get(&format!("{}.{}_length", RESPONSE_PREFIX, base))
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}

impl ScenarioSuite {
    /// Print a human-readable summary.
    pub fn print_summary(&self) {
        println!("Scenario results: {}/{} passed", self.passed, self.total);
        for result in &self.results {
            let marker = if result.passed { "PASS" } else { "FAIL" };
            println!("  [{}] {}", marker, result.name);
            for detail in &result.details {
                println!("      {}", detail);
            }
            if let Some(error) = &result.error {
                println!("      error: {}", error);
            }
        }
    }

    /// JSON report for machine consumption.
    pub fn generate_report(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
