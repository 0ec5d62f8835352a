use std::path::{Path, PathBuf};

use thiserror::Error;

/// Program name used when argv is empty.
const DEFAULT_PROGRAM: &str = "feature-view";

/// Wrong number of command-line arguments.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Usage: {program} bed-file")]
pub struct UsageError {
    pub program: String,
}

/// Check the argument count and return the single BED path.
///
/// `args` is the full argv, program name first. No file access happens here.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<PathBuf, UsageError> {
    let mut args = args.into_iter();
    let program = args
        .next()
        .as_deref()
        .map(program_name)
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());

    match (args.next(), args.next()) {
        (Some(path), None) => Ok(PathBuf::from(path)),
        _ => Err(UsageError { program }),
    }
}

fn program_name(argv0: &str) -> String {
    Path::new(argv0)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(argv0)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_path_is_accepted() {
        let path = parse_args(argv(&["feature-view", "genes.bed"])).unwrap();
        assert_eq!(path, PathBuf::from("genes.bed"));
    }

    #[test]
    fn no_path_is_usage_error() {
        let err = parse_args(argv(&["/usr/local/bin/feature-view"])).unwrap_err();
        assert_eq!(err.program, "feature-view");
        assert_eq!(err.to_string(), "Usage: feature-view bed-file");
    }

    #[test]
    fn two_paths_is_usage_error() {
        assert!(parse_args(argv(&["fv", "a.bed", "b.bed"])).is_err());
    }

    #[test]
    fn empty_argv_falls_back_to_default_name() {
        let err = parse_args(Vec::new()).unwrap_err();
        assert_eq!(err.program, DEFAULT_PROGRAM);
    }

    #[test]
    fn missing_file_is_not_checked() {
        let path = parse_args(argv(&["fv", "/no/such/file.bed"])).unwrap();
        assert!(!path.exists());
    }
}
