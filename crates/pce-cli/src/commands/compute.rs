//! Compute command

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use clap::Args;

use pce_ctx_memory::InMemoryContext;
use pce_path_engine::engine::{
    PARAM_BACKUP_DST_NODE, PARAM_DST_NODE, PARAM_LINKS_PREFIX, PARAM_OUTPUT_END_TO_END,
    PARAM_PNFS_PREFIX, PARAM_REQUIRE_BACKUP, PARAM_RESPONSE_PREFIX, PARAM_SRC_NODE,
};
use pce_path_engine::{OperationRegistry, PathStatus};

/// Arguments for one computation run.
#[derive(Debug, Args)]
pub struct ComputeArgs {
    /// Context properties file holding the PNF and link records
    #[arg(short, long)]
    pub context: String,

    /// Source PNF name
    #[arg(long)]
    pub src: String,

    /// Destination PNF name
    #[arg(long)]
    pub dst: String,

    /// Backup destination PNF name (switches to the two-path operation)
    #[arg(long)]
    pub backup_dst: Option<String>,

    /// Context prefix of the PNF records
    #[arg(long, default_value = "pnfs")]
    pub pnfs_pfx: String,

    /// Context prefix of the link records
    #[arg(long, default_value = "links")]
    pub links_pfx: String,

    /// Context prefix the result is written under
    #[arg(long, default_value = "response")]
    pub response_pfx: String,

    /// Emit every hop including intra-domain segments
    #[arg(long)]
    pub end_to_end: bool,

    /// Machine-readable JSON output
    #[arg(long)]
    pub json: bool,
}

/// Compute command implementation
pub struct ComputeCommand {
    registry: OperationRegistry,
}

impl ComputeCommand {
    pub fn new() -> Self {
        Self {
            registry: OperationRegistry::with_builtin_operations(),
        }
    }

    /// Run the computation and print the response entries. Returns the
    /// engine status so the caller can map it to an exit code.
    pub fn execute(&self, args: &ComputeArgs) -> Result<PathStatus> {
        let content = fs::read_to_string(&args.context)
            .with_context(|| format!("Failed to read context file: {}", args.context))?;
        let mut ctx = InMemoryContext::from_properties(&content)
            .with_context(|| format!("Failed to parse context file: {}", args.context))?;

        let mut params: HashMap<String, String> = HashMap::new();
        params.insert(PARAM_PNFS_PREFIX.to_string(), args.pnfs_pfx.clone());
        params.insert(PARAM_LINKS_PREFIX.to_string(), args.links_pfx.clone());
        params.insert(PARAM_SRC_NODE.to_string(), args.src.clone());
        params.insert(PARAM_DST_NODE.to_string(), args.dst.clone());
        params.insert(PARAM_RESPONSE_PREFIX.to_string(), args.response_pfx.clone());
        if args.end_to_end {
            params.insert(PARAM_OUTPUT_END_TO_END.to_string(), "true".to_string());
        }
        let operation_name = if let Some(backup_dst) = &args.backup_dst {
            params.insert(PARAM_REQUIRE_BACKUP.to_string(), "true".to_string());
            params.insert(PARAM_BACKUP_DST_NODE.to_string(), backup_dst.clone());
            "compute-paths"
        } else {
            "compute-path"
        };

        let operation = self
            .registry
            .get(operation_name)
            .with_context(|| format!("Operation not registered: {}", operation_name))?;
        let status = operation
            .execute(&params, &mut ctx)
            .with_context(|| "Path computation failed")?;

        let response_prefix = format!("{}.", args.response_pfx);
        if args.json {
            let mut output = serde_json::Map::new();
            output.insert("status".to_string(), status.as_str().into());
            for (key, value) in ctx.entries_with_prefix(&response_prefix) {
                output.insert(key.to_string(), value.into());
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("status: {}", status);
            for (key, value) in ctx.entries_with_prefix(&response_prefix) {
                println!("{} = {}", key, value);
            }
        }

        Ok(status)
    }
}

impl Default for ComputeCommand {
    fn default() -> Self {
        Self::new()
    }
}
