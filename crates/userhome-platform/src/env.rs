use std::env;

/// Names of the environment variables that carry the home directory and
/// the login name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvBindings {
    pub home: &'static str,
    pub user: &'static str,
}

impl Default for EnvBindings {
    fn default() -> Self {
        Self::current()
    }
}

impl EnvBindings {
    pub const fn unix() -> Self {
        Self {
            home: "HOME",
            user: "USER",
        }
    }

    pub const fn windows() -> Self {
        Self {
            home: "HOME",
            user: "USERNAME",
        }
    }

    /// Plan 9 keeps its environment lowercase.
    pub const fn plan9() -> Self {
        Self {
            home: "home",
            user: "user",
        }
    }

    /// Bindings for the target this crate was compiled for.
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::windows()
        } else {
            Self::unix()
        }
    }
}

/// Reads `key`, trimmed. Unset, blank and non-Unicode values are `None`.
pub fn var_trimmed(key: &str) -> Option<String> {
    let value = env::var(key).ok()?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
