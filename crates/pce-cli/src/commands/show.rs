//! Show command

use std::collections::BTreeSet;
use std::fs;

use anyhow::{Context, Result};

use pce_ctx_memory::{read_link_records, read_pnf_records, InMemoryContext};
use pce_topo_types::Topology;

/// Show command implementation
pub struct ShowCommand;

impl ShowCommand {
    pub fn new() -> Self {
        Self
    }

    /// Parse the topology from a context file and print a summary.
    pub fn execute(&self, context_file: &str, pnfs_pfx: &str, links_pfx: &str) -> Result<()> {
        let content = fs::read_to_string(context_file)
            .with_context(|| format!("Failed to read context file: {}", context_file))?;
        let ctx = InMemoryContext::from_properties(&content)
            .with_context(|| format!("Failed to parse context file: {}", context_file))?;

        let pnfs = read_pnf_records(&ctx, pnfs_pfx)?;
        let links = read_link_records(&ctx, links_pfx)?;
        let topology = Topology::from_records(&pnfs, &links)
            .with_context(|| "Failed to construct topology")?;

        println!("PNFs ({}):", topology.pnfs().len());
        for pnf in topology.pnfs() {
            println!("  {}", pnf);
        }

        println!("Links ({}):", topology.links().len());
        for edge in topology.links() {
            let domain = if edge.link().is_inner_domain() {
                "inner"
            } else {
                "cross"
            };
            println!(
                "  {} [{} {}] {} -> {}",
                edge.link().name(),
                edge.link().link_type(),
                domain,
                edge.src(),
                edge.dst()
            );
        }

        let domains: BTreeSet<&str> = topology
            .links()
            .iter()
            .filter_map(|edge| edge.link().endpoints())
            .flat_map(|(src, dst)| [src.name.network_id(), dst.name.network_id()])
            .flatten()
            .collect();
        println!("Domains ({}):", domains.len());
        for domain in domains {
            println!("  {}", domain);
        }

        Ok(())
    }
}

impl Default for ShowCommand {
    fn default() -> Self {
        Self::new()
    }
}
