use std::path::{Path, PathBuf};

use userhome_platform::{EnvBindings, Fact, ProbeChain, home_chain, username_chain};

use crate::cache::FactCache;
use crate::error::Result;
use crate::expand::expand_with;

#[derive(Debug)]
struct Lookup {
    chain: ProbeChain,
    cache: FactCache,
}

impl Lookup {
    fn new(chain: ProbeChain, cached: bool) -> Self {
        let cache = FactCache::new();
        cache.set_enabled(cached);
        Self { chain, cache }
    }

    fn get(&self) -> Result<String> {
        self.cache.get_or_resolve(&self.chain)
    }
}

/// Home directory and username lookups, each with its own chain and cache.
///
/// [`UserDirs::new`] uses the chains for the compile target. Tests and
/// embedders can swap in their own through [`UserDirs::builder`].
#[derive(Debug)]
pub struct UserDirs {
    home: Lookup,
    username: Lookup,
}

impl Default for UserDirs {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirs {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> UserDirsBuilder {
        UserDirsBuilder::default()
    }

    pub fn home_dir(&self) -> Result<PathBuf> {
        self.home.get().map(PathBuf::from)
    }

    pub fn reset_home_dir(&self) {
        self.home.cache.reset();
    }

    pub fn expand_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        expand_with(path.as_ref(), || self.home_dir())
    }

    pub fn username(&self) -> Result<String> {
        self.username.get()
    }

    pub fn reset_username(&self) {
        self.username.cache.reset();
    }

    pub fn home_dir_cache_enabled(&self) -> bool {
        self.home.cache.is_enabled()
    }

    pub fn set_home_dir_cache_enabled(&self, enabled: bool) {
        self.home.cache.set_enabled(enabled);
    }

    pub fn username_cache_enabled(&self) -> bool {
        self.username.cache.is_enabled()
    }

    pub fn set_username_cache_enabled(&self, enabled: bool) {
        self.username.cache.set_enabled(enabled);
    }
}

pub struct UserDirsBuilder {
    bindings: EnvBindings,
    home_chain: Option<ProbeChain>,
    username_chain: Option<ProbeChain>,
    home_dir_cache: bool,
    username_cache: bool,
}

impl Default for UserDirsBuilder {
    fn default() -> Self {
        Self {
            bindings: EnvBindings::current(),
            home_chain: None,
            username_chain: None,
            home_dir_cache: true,
            username_cache: true,
        }
    }
}

impl UserDirsBuilder {
    /// Environment variable names for the platform chains. Ignored for a
    /// chain replaced with [`Self::home_chain`] or [`Self::username_chain`].
    pub fn bindings(mut self, bindings: EnvBindings) -> Self {
        self.bindings = bindings;
        self
    }

    pub fn home_chain(mut self, chain: ProbeChain) -> Self {
        debug_assert_eq!(chain.fact(), Fact::HomeDir);
        self.home_chain = Some(chain);
        self
    }

    pub fn username_chain(mut self, chain: ProbeChain) -> Self {
        debug_assert_eq!(chain.fact(), Fact::Username);
        self.username_chain = Some(chain);
        self
    }

    pub fn home_dir_cache(mut self, enabled: bool) -> Self {
        self.home_dir_cache = enabled;
        self
    }

    pub fn username_cache(mut self, enabled: bool) -> Self {
        self.username_cache = enabled;
        self
    }

    pub fn build(self) -> UserDirs {
        let home = self
            .home_chain
            .unwrap_or_else(|| home_chain(&self.bindings));
        let username = self
            .username_chain
            .unwrap_or_else(|| username_chain(&self.bindings));

        UserDirs {
            home: Lookup::new(home, self.home_dir_cache),
            username: Lookup::new(username, self.username_cache),
        }
    }
}
