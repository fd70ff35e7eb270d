//! Validate command

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use pce_ctx_memory::{read_link_records, read_pnf_records, InMemoryContext};
use pce_topo_types::Topology;

/// Validate command implementation
pub struct ValidateCommand;

impl ValidateCommand {
    pub fn new() -> Self {
        Self
    }

    /// Check that the context file parses and yields a well-formed
    /// topology, reporting the first malformed entry.
    pub fn execute(&self, context_file: &str, pnfs_pfx: &str, links_pfx: &str) -> Result<()> {
        println!("Validating context file: {}", context_file);

        if !Path::new(context_file).exists() {
            anyhow::bail!("Context file not found: {}", context_file);
        }

        let content = fs::read_to_string(context_file)
            .with_context(|| format!("Failed to read context file: {}", context_file))?;
        let ctx = InMemoryContext::from_properties(&content)
            .with_context(|| "Context file is not valid properties format")?;
        println!("✓ Properties syntax valid ({} entries)", ctx.len());

        let pnfs =
            read_pnf_records(&ctx, pnfs_pfx).with_context(|| "Malformed PNF record")?;
        let links =
            read_link_records(&ctx, links_pfx).with_context(|| "Malformed link record")?;
        println!("✓ Records well-formed ({} PNFs, {} links)", pnfs.len(), links.len());

        let topology = Topology::from_records(&pnfs, &links)
            .with_context(|| "Topology construction failed")?;
        println!(
            "✓ Topology constructed ({} PNFs, {} logical links)",
            topology.pnfs().len(),
            topology.links().len()
        );

        Ok(())
    }
}

impl Default for ValidateCommand {
    fn default() -> Self {
        Self::new()
    }
}
