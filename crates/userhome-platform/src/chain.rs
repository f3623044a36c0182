//! Per-platform probe chains.
//!
//! Order encodes priority: the environment first, spawned utilities last.
//!
//! | target        | home                                   | username                  |
//! |---------------|----------------------------------------|---------------------------|
//! | macOS         | `HOME`, `dscl`, `sh -c "cd && pwd"`    | `USER`, `whoami`          |
//! | other Unix    | `HOME`, `getent passwd`, `sh`          | `USER`, `getent`, `whoami`|
//! | Windows       | `HOME`, `USERPROFILE`, `HOMEDRIVE`+`HOMEPATH` | `USERNAME`, `whoami` |

use std::fmt;

use crate::env::EnvBindings;
use crate::probe::{EnvProbe, Probe};

/// Which value a chain resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fact {
    HomeDir,
    Username,
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HomeDir => f.write_str("home directory"),
            Self::Username => f.write_str("username"),
        }
    }
}

pub struct ProbeChain {
    fact: Fact,
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeChain {
    pub fn new(fact: Fact) -> Self {
        Self {
            fact,
            probes: Vec::new(),
        }
    }

    /// Appends `probe` as the lowest-priority fallback.
    pub fn then(mut self, probe: impl Probe + 'static) -> Self {
        self.probes.push(Box::new(probe));
        self
    }

    pub fn fact(&self) -> Fact {
        self.fact
    }

    pub fn probes(&self) -> impl Iterator<Item = &dyn Probe> {
        self.probes.iter().map(|p| p.as_ref())
    }

    pub fn len(&self) -> usize {
        self.probes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl fmt::Debug for ProbeChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeChain")
            .field("fact", &self.fact)
            .field("probes", &self.probes().map(|p| p.name()).collect::<Vec<_>>())
            .finish()
    }
}

pub fn home_chain(bindings: &EnvBindings) -> ProbeChain {
    let chain = ProbeChain::new(Fact::HomeDir).then(EnvProbe::new(bindings.home));

    #[cfg(target_os = "macos")]
    {
        use crate::probe::{DirectoryServiceProbe, ShellProbe};
        chain.then(DirectoryServiceProbe).then(ShellProbe)
    }
    #[cfg(all(unix, not(target_os = "macos")))]
    {
        use crate::probe::{AccountDbProbe, ShellProbe};
        chain.then(AccountDbProbe::home()).then(ShellProbe)
    }
    #[cfg(target_os = "windows")]
    {
        use crate::probe::EnvPairProbe;
        chain
            .then(EnvProbe::new("USERPROFILE"))
            .then(EnvPairProbe::home_drive())
    }
    #[cfg(not(any(unix, target_os = "windows")))]
    {
        chain
    }
}

pub fn username_chain(bindings: &EnvBindings) -> ProbeChain {
    let chain = ProbeChain::new(Fact::Username).then(EnvProbe::new(bindings.user));

    #[cfg(all(unix, not(target_os = "macos")))]
    let chain = chain.then(crate::probe::AccountDbProbe::username());

    #[cfg(any(unix, target_os = "windows"))]
    let chain = chain.then(crate::probe::IdentityProbe);

    chain
}
