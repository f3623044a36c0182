use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use userhome::{Error, Fact};

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

/// Sets or removes `key` for the lifetime of the guard.
struct EnvGuard {
    key: &'static str,
    previous: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, value: Option<&str>) -> Self {
        let previous = std::env::var_os(key);
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
        }
        Self { key, previous }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: callers hold ENV_LOCK.
        unsafe {
            match &self.previous {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }
}

fn home_var() -> &'static str {
    userhome::EnvBindings::current().home
}

#[test]
fn home_dir_follows_environment() {
    let _lock = lock();
    let home = tempfile::tempdir().expect("Failed to create temp dir");
    let home_str = home.path().to_string_lossy().into_owned();
    let _env = EnvGuard::set(home_var(), Some(home_str.as_str()));

    userhome::reset_home_dir();
    let resolved = userhome::home_dir().expect("home dir");
    assert_eq!(resolved, home.path());
    userhome::reset_home_dir();
}

// `home` reads `USERPROFILE` on Windows, so only Unix chains are comparable.
#[cfg(unix)]
#[test]
fn home_dir_matches_home_crate() {
    let _lock = lock();
    userhome::reset_home_dir();

    if let (Ok(ours), Some(theirs)) = (userhome::home_dir(), home::home_dir()) {
        assert_eq!(ours, theirs);
    }
}

#[test]
fn home_dir_is_cached_until_reset() {
    let _lock = lock();
    let first = tempfile::tempdir().expect("Failed to create temp dir");
    let second = tempfile::tempdir().expect("Failed to create temp dir");

    let _env = EnvGuard::set(home_var(), Some(first.path().to_string_lossy().as_ref()));
    userhome::reset_home_dir();
    assert_eq!(userhome::home_dir().unwrap(), first.path());

    let _env2 = EnvGuard::set(home_var(), Some(second.path().to_string_lossy().as_ref()));
    assert_eq!(userhome::home_dir().unwrap(), first.path());

    userhome::reset_home_dir();
    assert_eq!(userhome::home_dir().unwrap(), second.path());
    userhome::reset_home_dir();
}

#[cfg(unix)]
#[test]
fn home_dir_falls_back_without_environment() {
    let _lock = lock();
    let _env = EnvGuard::set("HOME", None);
    userhome::set_home_dir_cache_enabled(false);

    let result = userhome::home_dir();
    userhome::set_home_dir_cache_enabled(true);

    // Minimal containers may have neither a passwd record nor a usable `cd`.
    match result {
        Ok(dir) => assert!(!dir.as_os_str().is_empty()),
        Err(e) => assert!(
            matches!(e, Error::NotDetermined(Fact::HomeDir) | Error::ProbeFailed { .. }),
            "unexpected error: {e}"
        ),
    }
}

#[test]
fn expand_path_cases() {
    let _lock = lock();
    let home = if cfg!(windows) { "C:\\Users\\alice" } else { "/home/alice" };
    let _env = EnvGuard::set(home_var(), Some(home));
    userhome::reset_home_dir();

    let home = PathBuf::from(home);
    let cases: [(&str, Option<PathBuf>); 6] = [
        ("/foo", Some(PathBuf::from("/foo"))),
        ("~/foo", Some(home.join("foo"))),
        ("", Some(PathBuf::new())),
        ("~", Some(home.clone())),
        ("~/foo/../foo", Some(home.join("foo"))),
        ("~foo/foo", None),
    ];

    for (input, expected) in cases {
        let actual = userhome::expand_path(input);
        match expected {
            Some(expected) => assert_eq!(actual.unwrap(), expected, "input: {input:?}"),
            None => assert!(
                matches!(actual, Err(Error::UnsupportedUserExpansion(_))),
                "input: {input:?}"
            ),
        }
    }
    userhome::reset_home_dir();
}

#[cfg(unix)]
#[test]
fn expand_path_without_cache() {
    let _lock = lock();
    userhome::set_home_dir_cache_enabled(false);
    let _env = EnvGuard::set("HOME", Some("/custom/path/"));

    let actual = userhome::expand_path("~/foo/bar");
    userhome::set_home_dir_cache_enabled(true);

    assert_eq!(actual.unwrap(), Path::new("/custom/path/foo/bar"));
    userhome::reset_home_dir();
}

#[test]
fn username_follows_environment() {
    let _lock = lock();
    let user_var = userhome::EnvBindings::current().user;
    let _env = EnvGuard::set(user_var, Some("userhome-test-user"));

    userhome::reset_username();
    assert_eq!(userhome::username().unwrap(), "userhome-test-user");

    userhome::set_username_cache_enabled(false);
    assert!(!userhome::username_cache_enabled());
    let _env2 = EnvGuard::set(user_var, Some("userhome-other-user"));
    assert_eq!(userhome::username().unwrap(), "userhome-other-user");

    userhome::set_username_cache_enabled(true);
    assert!(userhome::username_cache_enabled());
    userhome::reset_username();
}

#[cfg(unix)]
#[test]
fn username_falls_back_without_environment() {
    let _lock = lock();
    let _env = EnvGuard::set("USER", None);
    userhome::set_username_cache_enabled(false);

    let result = userhome::username();
    userhome::set_username_cache_enabled(true);

    match result {
        Ok(name) => assert!(!name.trim().is_empty()),
        Err(e) => assert!(matches!(e, Error::NotDetermined(Fact::Username)), "unexpected error: {e}"),
    }
}

#[test]
fn cache_flags_default_to_enabled() {
    let _lock = lock();
    assert!(userhome::home_dir_cache_enabled());
    assert!(userhome::username_cache_enabled());
}
