//! PCE Scenario Test
//!
//! End-to-end scenarios for the path computation engine: fixture topologies
//! driven through the operation registry and context memory exactly the way
//! a workflow engine would, plus a runner with a pass/fail summary for the
//! `scenario-test` binary.

pub mod runner;
pub mod scenarios;
