//! Current user's home directory and username, resolved through an ordered
//! chain of platform probes and cached for the life of the process.
//!
//! # Architecture
//!
//! - `resolver.rs` - Runs a probe chain to the first answer
//! - `cache.rs` - Per-fact memoization with explicit reset
//! - `expand.rs` - Leading `~` expansion
//! - `dirs.rs` - [`UserDirs`], one chain and cache per fact
//!
//! Probes and the per-target chains live in `userhome-platform`.
//!
//! # Example
//!
//! ```no_run
//! let home = userhome::home_dir()?;
//! let config = userhome::expand_path("~/.config")?;
//! assert!(config.starts_with(&home));
//! # Ok::<(), userhome::Error>(())
//! ```

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;

pub use cache::FactCache;
pub use dirs::{UserDirs, UserDirsBuilder};
pub use error::{Error, Result};
pub use expand::{clean, expand_with};
pub use resolver::resolve;
pub use userhome_platform::{EnvBindings, Fact, Probe, ProbeChain};

mod cache;
mod dirs;
mod error;
mod expand;
mod resolver;

static USER_DIRS: Lazy<UserDirs> = Lazy::new(UserDirs::new);

/// Home directory of the user running this process.
pub fn home_dir() -> Result<PathBuf> {
    USER_DIRS.home_dir()
}

/// Forgets the cached home directory. Mostly useful after changing `HOME`.
pub fn reset_home_dir() {
    USER_DIRS.reset_home_dir()
}

/// Expands a leading `~` to [`home_dir`]. Other paths come back unchanged.
pub fn expand_path(path: impl AsRef<Path>) -> Result<PathBuf> {
    USER_DIRS.expand_path(path)
}

pub fn username() -> Result<String> {
    USER_DIRS.username()
}

pub fn reset_username() {
    USER_DIRS.reset_username()
}

pub fn home_dir_cache_enabled() -> bool {
    USER_DIRS.home_dir_cache_enabled()
}

/// With caching off every [`home_dir`] call runs the probe chain.
pub fn set_home_dir_cache_enabled(enabled: bool) {
    USER_DIRS.set_home_dir_cache_enabled(enabled)
}

pub fn username_cache_enabled() -> bool {
    USER_DIRS.username_cache_enabled()
}

pub fn set_username_cache_enabled(enabled: bool) {
    USER_DIRS.set_username_cache_enabled(enabled)
}
