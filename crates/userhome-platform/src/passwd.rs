//! Account database records as printed by `getent passwd`.

use std::process::ExitStatus;

use crate::command::Command;
use crate::error::{Error, Result};

/// `getent` exits with 2 when the requested key is not in the database.
const KEY_NOT_FOUND: i32 = 2;

/// One `name:password:uid:gid:gecos:home:shell` record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswdEntry {
    pub name: String,
    /// `None` when the record is cut short before the home field.
    pub home: Option<String>,
}

impl PasswdEntry {
    /// Parses a single record. Blank input yields `None`.
    pub fn parse(record: &str) -> Option<Self> {
        let record = record.trim();
        if record.is_empty() {
            return None;
        }

        let mut fields = record.splitn(7, ':');
        let name = fields.next().unwrap_or_default().to_string();
        let home = fields.nth(4).map(str::to_string);

        Some(Self { name, home })
    }
}

/// Looks up `uid` with `<program> passwd <uid>`.
///
/// A missing `program` or an unknown uid is `Ok(None)`; any other failure
/// to run the lookup is returned as an error.
pub fn lookup(program: &str, uid: u32) -> Result<Option<PasswdEntry>> {
    match Command::new(program)
        .arg("passwd")
        .arg(uid.to_string())
        .stdout()
    {
        Ok(out) => Ok(PasswdEntry::parse(&out)),
        Err(Error::CommandNotFound { .. }) => Ok(None),
        Err(Error::CommandExited { status, .. }) if is_key_not_found(status) => Ok(None),
        Err(e) => Err(e),
    }
}

fn is_key_not_found(status: ExitStatus) -> bool {
    status.code() == Some(KEY_NOT_FOUND)
}

/// Numeric id of the user running this process.
#[cfg(unix)]
pub fn current_uid() -> u32 {
    nix::unistd::Uid::current().as_raw()
}
