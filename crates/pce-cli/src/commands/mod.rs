//! CLI commands

pub mod compute;
pub mod show;
pub mod validate;

pub use compute::{ComputeArgs, ComputeCommand};
pub use show::ShowCommand;
pub use validate::ValidateCommand;
