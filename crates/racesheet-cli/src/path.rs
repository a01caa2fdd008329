//! Path sanitizing for workbook arguments
//!
//! Paths pasted into a terminal often carry surrounding whitespace, quotes
//! from a file manager, or a `~` the shell did not expand.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

/// Clean up a user-supplied path and resolve it against `cwd`.
///
/// Trims whitespace, removes one layer of matching single or double quotes,
/// expands a leading `~` to `home` when known, and joins relative paths
/// onto `cwd`.
pub fn resolve_path(input: &str, cwd: &Path, home: Option<&Path>) -> PathBuf {
    let trimmed = strip_quotes(input.trim()).trim();

    let expanded = match (trimmed, home) {
        ("~", Some(home)) => home.to_path_buf(),
        (s, Some(home)) if s.starts_with("~/") || s.starts_with("~\\") => home.join(&s[2..]),
        (s, _) => PathBuf::from(s),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        cwd.join(expanded)
    }
}

/// [`resolve_path`] against the process working directory and home
pub fn sanitize_path(input: &str) -> io::Result<PathBuf> {
    let cwd = env::current_dir()?;
    let home = home_dir();
    Ok(resolve_path(input, &cwd, home.as_deref()))
}

fn home_dir() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

fn strip_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cwd() -> PathBuf {
        PathBuf::from("/work")
    }

    #[test]
    fn test_relative_path_joins_cwd() {
        assert_eq!(
            resolve_path("tmp/league.xlsx", &cwd(), None),
            PathBuf::from("/work/tmp/league.xlsx")
        );
    }

    #[test]
    fn test_absolute_path_is_kept() {
        assert_eq!(
            resolve_path("/data/league.xlsx", &cwd(), None),
            PathBuf::from("/data/league.xlsx")
        );
    }

    #[test]
    fn test_whitespace_and_quotes_are_removed() {
        assert_eq!(
            resolve_path("  \"/data/My League.xlsx\"  ", &cwd(), None),
            PathBuf::from("/data/My League.xlsx")
        );
        assert_eq!(
            resolve_path("'league.xlsx'", &cwd(), None),
            PathBuf::from("/work/league.xlsx")
        );
    }

    #[test]
    fn test_only_one_layer_of_matching_quotes() {
        assert_eq!(
            resolve_path("\"'a.xlsx'\"", &cwd(), None),
            PathBuf::from("/work/'a.xlsx'")
        );
        assert_eq!(
            resolve_path("\"a.xlsx'", &cwd(), None),
            PathBuf::from("/work/\"a.xlsx'")
        );
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let home = PathBuf::from("/home/racer");
        assert_eq!(
            resolve_path("~/league.xlsx", &cwd(), Some(&home)),
            PathBuf::from("/home/racer/league.xlsx")
        );
        assert_eq!(resolve_path("~", &cwd(), Some(&home)), home);
    }

    #[test]
    fn test_tilde_without_home_is_literal() {
        assert_eq!(
            resolve_path("~/league.xlsx", &cwd(), None),
            PathBuf::from("/work/~/league.xlsx")
        );
    }

    #[test]
    fn test_tilde_inside_name_is_literal() {
        let home = PathBuf::from("/home/racer");
        assert_eq!(
            resolve_path("~league.xlsx", &cwd(), Some(&home)),
            PathBuf::from("/work/~league.xlsx")
        );
    }
}
