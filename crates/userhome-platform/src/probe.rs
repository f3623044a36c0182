//! Single resolution mechanisms.
//!
//! A [`Probe`] answers `Ok(Some(value))` when its mechanism produced a
//! non-empty value and `Ok(None)` when it did not. Probes never cache.

use crate::command::Command;
use crate::env::var_trimmed;
use crate::error::Result;
use crate::passwd;

const DSCL_SCRIPT: &str =
    r#"dscl -q . -read /Users/"$(whoami)" NFSHomeDirectory | sed 's/^[^ ]*: //'"#;
const CD_PWD_SCRIPT: &str = "cd && pwd";
#[cfg(unix)]
const GETENT: &str = "getent";
const WHOAMI: &str = "whoami";

pub trait Probe: Send + Sync {
    /// Short label used in log events.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn probe(&self) -> Result<Option<String>>;
}

impl<F> Probe for F
where
    F: Fn() -> Result<Option<String>> + Send + Sync,
{
    fn probe(&self) -> Result<Option<String>> {
        self()
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Reads one environment variable.
#[derive(Debug, Clone, Copy)]
pub struct EnvProbe {
    key: &'static str,
}

impl EnvProbe {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Probe for EnvProbe {
    fn name(&self) -> &str {
        self.key
    }

    fn probe(&self) -> Result<Option<String>> {
        Ok(var_trimmed(self.key))
    }
}

/// Concatenates two environment variables, e.g. `HOMEDRIVE` + `HOMEPATH`.
/// Absent unless both are set.
#[derive(Debug, Clone, Copy)]
pub struct EnvPairProbe {
    prefix: &'static str,
    suffix: &'static str,
}

impl EnvPairProbe {
    pub const fn new(prefix: &'static str, suffix: &'static str) -> Self {
        Self { prefix, suffix }
    }

    pub const fn home_drive() -> Self {
        Self::new("HOMEDRIVE", "HOMEPATH")
    }
}

impl Probe for EnvPairProbe {
    fn name(&self) -> &str {
        "env-pair"
    }

    fn probe(&self) -> Result<Option<String>> {
        let (Some(prefix), Some(suffix)) = (var_trimmed(self.prefix), var_trimmed(self.suffix))
        else {
            return Ok(None);
        };
        Ok(Some(prefix + &suffix))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountField {
    Name,
    Home,
}

/// Queries the account database through `getent passwd <uid>`.
///
/// The home lookup surfaces command failures other than a missing `getent`
/// and aborts its chain. The name lookup treats every failure as absent.
#[derive(Debug, Clone)]
pub struct AccountDbProbe {
    program: String,
    uid: u32,
    field: AccountField,
}

impl AccountDbProbe {
    pub fn new(program: impl Into<String>, uid: u32, field: AccountField) -> Self {
        Self {
            program: program.into(),
            uid,
            field,
        }
    }

    #[cfg(unix)]
    pub fn home() -> Self {
        Self::new(GETENT, passwd::current_uid(), AccountField::Home)
    }

    #[cfg(unix)]
    pub fn username() -> Self {
        Self::new(GETENT, passwd::current_uid(), AccountField::Name)
    }
}

impl Probe for AccountDbProbe {
    fn name(&self) -> &str {
        match self.field {
            AccountField::Name => "getent-name",
            AccountField::Home => "getent-home",
        }
    }

    fn probe(&self) -> Result<Option<String>> {
        let entry = match passwd::lookup(&self.program, self.uid) {
            Ok(entry) => entry,
            Err(e) if self.field == AccountField::Home => return Err(e),
            Err(e) => {
                tracing::debug!(uid = self.uid, error = %e, "account lookup failed");
                None
            }
        };

        Ok(entry.and_then(|entry| match self.field {
            AccountField::Name => non_empty(entry.name),
            AccountField::Home => entry.home.and_then(non_empty),
        }))
    }
}

/// Asks Directory Services for the user's `NFSHomeDirectory`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryServiceProbe;

impl Probe for DirectoryServiceProbe {
    fn name(&self) -> &str {
        "dscl"
    }

    fn probe(&self) -> Result<Option<String>> {
        Ok(Command::shell(DSCL_SCRIPT).stdout().ok().and_then(non_empty))
    }
}

/// Lets the shell resolve `cd` with no argument.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellProbe;

impl Probe for ShellProbe {
    fn name(&self) -> &str {
        "shell"
    }

    fn probe(&self) -> Result<Option<String>> {
        Ok(Command::shell(CD_PWD_SCRIPT).stdout().ok().and_then(non_empty))
    }
}

/// Runs `whoami`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityProbe;

impl Probe for IdentityProbe {
    fn name(&self) -> &str {
        WHOAMI
    }

    fn probe(&self) -> Result<Option<String>> {
        Ok(Command::new(WHOAMI).stdout().ok().and_then(non_empty))
    }
}
