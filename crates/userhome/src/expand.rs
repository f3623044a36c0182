use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

const TILDE: &str = "~";

/// Replaces a leading `~` component with the directory produced by `home`.
///
/// Paths that do not start with `~` are returned unchanged and `home` is not
/// called. `~user` forms are rejected.
pub fn expand_with<F>(path: &Path, home: F) -> Result<PathBuf>
where
    F: FnOnce() -> Result<PathBuf>,
{
    let mut components = path.components();
    let Some(Component::Normal(first)) = components.next() else {
        return Ok(path.to_path_buf());
    };

    if first != TILDE {
        if first.to_string_lossy().starts_with(TILDE) {
            return Err(Error::UnsupportedUserExpansion(path.to_path_buf()));
        }
        return Ok(path.to_path_buf());
    }

    let home = home()?;
    Ok(clean(&home.join(components.as_path())))
}

/// Lexically simplifies `path`: drops `.`, folds `name/..`, drops `..`
/// directly under the root and collapses separators. An empty result is `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.into_iter().collect()
}
