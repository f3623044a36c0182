//! Platform probes for the current user's home directory and username.
//!
//! - `probe.rs` - One [`Probe`] per resolution mechanism
//! - `chain.rs` - Per-target [`ProbeChain`] registry
//! - `passwd.rs` - Account database records
//! - `command.rs` - Subprocess wrapper
//! - `env.rs` - Environment variable bindings

pub use chain::{Fact, ProbeChain, home_chain, username_chain};
pub use env::EnvBindings;
pub use error::{Error, Result};
pub use probe::{
    AccountDbProbe, AccountField, DirectoryServiceProbe, EnvPairProbe, EnvProbe, IdentityProbe,
    Probe, ShellProbe,
};

pub mod chain;
pub mod command;
pub mod env;
mod error;
pub mod passwd;
pub mod probe;
