//! Configuration loading and defaults.
//!
//! Configuration comes from a `dokura.toml` (or `.dokura.toml`) file found
//! near the input, from an explicit `--config` path, or from the XDG config
//! directory; every field has a default so a partial file is fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_FILE_NAMES: &[&str] = &["dokura.toml", ".dokura.toml"];

/// Parser and renderer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Columns of list indentation per nesting level.
    pub list_indent: usize,
    /// Columns a tab advances when measuring indentation.
    pub tab_width: usize,
    /// Wrap bare URLs in link brackets before inline parsing.
    pub autolink: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_indent: 2,
            tab_width: 4,
            autolink: true,
        }
    }
}

/// Builder-style construction for [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn list_indent(mut self, columns: usize) -> Self {
        self.config.list_indent = columns;
        self
    }

    pub fn tab_width(mut self, columns: usize) -> Self {
        self.config.tab_width = columns;
        self
    }

    pub fn autolink(mut self, enabled: bool) -> Self {
        self.config.autolink = enabled;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

fn read_config(path: &Path) -> io::Result<Config> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Search `start_dir` and its ancestors for a config file.
fn find_in_tree(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dokura").join("config.toml"))
}

/// Resolve the configuration: an explicit path wins, then the nearest config
/// file up the directory tree, then XDG, then the defaults.
pub fn load(explicit: Option<&Path>, start_dir: &Path) -> io::Result<(Config, Option<PathBuf>)> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        return Ok((config, Some(path.to_path_buf())));
    }

    if let Some(path) = find_in_tree(start_dir)
        && let Ok(config) = read_config(&path)
    {
        return Ok((config, Some(path)));
    }

    if let Some(path) = xdg_config_path()
        && path.is_file()
        && let Ok(config) = read_config(&path)
    {
        return Ok((config, Some(path)));
    }

    log::debug!("No config file found, using defaults");
    Ok((Config::default(), None))
}
