// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".spellscan.toml";

/// Settings for a spell check run, read from `.spellscan.toml`.
///
/// Every key is optional; missing keys take the values of [`Config::default`].
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File extension that qualifies a directory, without the leading dot
    pub extension: String,
    /// Spell checking program to run
    pub program: String,
    /// Arguments selecting the tool's built-in base dictionary
    pub base_dictionary_args: Vec<String>,
    /// Flag preceding the override dictionary path
    pub dictionary_flag: String,
    /// Override dictionary, relative to the working directory
    pub dictionary: PathBuf,
    /// Flag putting the tool in report-only mode
    pub report_only_flag: String,
    /// Gitignore-style patterns pruned from the scan
    pub exclude: Vec<String>,
    pub follow_links: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extension: String::from("go"),
            program: String::from("hunspell"),
            base_dictionary_args: vec![String::from("-d"), String::from("en_US")],
            dictionary_flag: String::from("-p"),
            dictionary: PathBuf::from("./spelling_dict.txt"),
            report_only_flag: String::from("-l"),
            exclude: Vec::new(),
            follow_links: false,
        }
    }
}

impl Config {
    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The file is not valid TOML or contains unknown keys
    #[inline]
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Target extension with any leading dot removed.
    #[inline]
    #[must_use]
    pub fn target_extension(&self) -> &str {
        self.extension.trim_start_matches('.')
    }
}

/// Loads the config from the first `.spellscan.toml` found in `dir` or one of
/// its parents, falling back to the defaults when there is none.
///
/// Returns the config together with the file it came from.
///
/// # Errors
///
/// This function may return an error if a config file exists but cannot be
/// read or parsed.
#[inline]
pub fn load_config(dir: &Path) -> Result<(Config, Option<PathBuf>)> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let config_file = current_dir.join(CONFIG_FILE_NAME);

        if config_file.is_file() {
            let config = Config::from_file(&config_file)?;
            return Ok((config, Some(config_file)));
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    Ok((Config::default(), None))
}
