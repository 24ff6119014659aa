use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub(crate) const DATA_DIR_ENV: &str = "QUICKBUDGET_DATA_DIR";
const EPHEMERAL_FLAG: &str = "--ephemeral";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) data_dir: PathBuf,
    /// Keep budget state in memory; the store file is never opened.
    pub(crate) ephemeral: bool,
}

impl Config {
    /// Resolve the data directory and strip global flags from `args`.
    pub(crate) fn from_args(args: &mut Vec<String>) -> Result<Self> {
        let ephemeral = take_flag(args, EPHEMERAL_FLAG);
        let data_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        Ok(Self { data_dir, ephemeral })
    }

    pub(crate) fn db_path(&self) -> PathBuf {
        self.data_dir.join("quickbudget.db")
    }

    pub(crate) fn log_path(&self) -> PathBuf {
        self.data_dir.join("quickbudget.log")
    }

    pub(crate) fn ensure_data_dir(&self) -> Result<&Path> {
        std::fs::create_dir_all(&self.data_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.data_dir.display()
            )
        })?;
        Ok(&self.data_dir)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "quickbudget", "QuickBudget")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    let before = args.len();
    args.retain(|a| a != flag);
    args.len() != before
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_take_flag_removes_all() {
        let mut a = args(&["quickbudget", "--ephemeral", "status", "--ephemeral"]);
        assert!(take_flag(&mut a, EPHEMERAL_FLAG));
        assert_eq!(a, args(&["quickbudget", "status"]));
    }

    #[test]
    fn test_take_flag_absent() {
        let mut a = args(&["quickbudget", "status"]);
        assert!(!take_flag(&mut a, EPHEMERAL_FLAG));
        assert_eq!(a.len(), 2);
    }

    #[test]
    fn test_paths_live_in_data_dir() {
        let config = Config {
            data_dir: PathBuf::from("/tmp/qb"),
            ephemeral: false,
        };
        assert_eq!(config.db_path(), PathBuf::from("/tmp/qb/quickbudget.db"));
        assert_eq!(config.log_path(), PathBuf::from("/tmp/qb/quickbudget.log"));
    }

    #[test]
    fn test_ensure_data_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            data_dir: dir.path().join("a").join("b"),
            ephemeral: false,
        };
        assert!(config.ensure_data_dir().unwrap().is_dir());
    }
}
