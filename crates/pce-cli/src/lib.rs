//! PCE CLI
//!
//! Command-line tooling for running path computations against a
//! properties-file context, inspecting parsed topologies and validating
//! context records before handing them to a workflow.

pub mod commands;
