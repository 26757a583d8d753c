use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::history;

/// Settings that may come from the config file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    capacity: Option<u64>,
    skip_hidden: Option<bool>,
}

/// Effective settings after merging CLI arguments over the config file.
#[derive(Debug)]
pub struct Config {
    pub root: PathBuf,
    pub capacity: usize,
    pub skip_hidden: bool,
    pub json_output: bool,
    pub once: bool,
    pub verbose: bool,
}

impl Config {
    /// Builds the effective configuration. CLI arguments win over the
    /// config file, which wins over built-in defaults.
    pub fn from_args(args: &Cli) -> Result<Self> {
        let file = match &args.config {
            Some(path) => load_file(path)?,
            None => load_default_file(),
        };

        let file_capacity = match file.capacity {
            Some(0) => {
                log::warn!("ignoring capacity 0 from config file, the minimum is 1");
                None
            }
            other => other,
        };

        let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));

        let capacity = args
            .capacity
            .or(file_capacity)
            .map(|c| c as usize)
            .unwrap_or(history::DEFAULT_CAPACITY);

        Ok(Config {
            root,
            capacity,
            skip_hidden: args.skip_hidden || file.skip_hidden.unwrap_or(false),
            json_output: args.json,
            once: args.once,
            verbose: args.verbose,
        })
    }
}

fn load_file(path: &Path) -> Result<FileConfig> {
    let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| Error::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the config file from the platform config directory, if present.
/// A missing file is normal; a broken one gets a warning but never stops
/// startup.
fn load_default_file() -> FileConfig {
    let Some(path) = default_config_path() else {
        return FileConfig::default();
    };
    if !path.exists() {
        return FileConfig::default();
    }
    match load_file(&path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("{e}");
            FileConfig::default()
        }
    }
}

/// ~/.config/dirscope/config.toml or the platform equivalent.
fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "dirscope")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn bare_cli() -> Cli {
        Cli {
            path: None,
            capacity: None,
            once: false,
            json: false,
            skip_hidden: false,
            verbose: false,
            config: None,
        }
    }

    fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut args = bare_cli();
        args.config = Some(write_config(&dir, ""));

        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(config.capacity, history::DEFAULT_CAPACITY);
        assert!(!config.skip_hidden);
    }

    #[test]
    fn file_settings_fill_in_missing_cli_arguments() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut args = bare_cli();
        args.config = Some(write_config(&dir, "capacity = 4\nskip_hidden = true\n"));

        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.capacity, 4);
        assert!(config.skip_hidden);
    }

    #[test]
    fn cli_arguments_win_over_the_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut args = bare_cli();
        args.config = Some(write_config(&dir, "capacity = 4\n"));
        args.capacity = Some(7);

        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.capacity, 7);
    }

    #[test]
    fn zero_capacity_in_the_file_is_ignored() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut args = bare_cli();
        args.config = Some(write_config(&dir, "capacity = 0\n"));

        let config = Config::from_args(&args).unwrap();
        assert_eq!(config.capacity, history::DEFAULT_CAPACITY);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut args = bare_cli();
        args.config = Some(dir.path().join("nope.toml"));

        match Config::from_args(&args) {
            Err(Error::ConfigRead { .. }) => {}
            other => panic!("expected ConfigRead, got {other:?}"),
        }
    }

    #[test]
    fn malformed_explicit_config_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut args = bare_cli();
        args.config = Some(write_config(&dir, "capacity = \"lots\"\n"));

        match Config::from_args(&args) {
            Err(Error::ConfigParse { .. }) => {}
            other => panic!("expected ConfigParse, got {other:?}"),
        }
    }
}
