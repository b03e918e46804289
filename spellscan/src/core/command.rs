// src/core/command.rs
use crate::config::Config;
use crate::core::scanner::has_extension;
use crate::models::CheckStatus;
use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, info, warn};

/// Builds one `<dir>/*.<ext>` pattern per directory.
///
/// An empty list still yields the bare suffix `/*.<ext>`, the same argument
/// the joined shell command ends with when there is nothing to join.
#[inline]
#[must_use]
pub fn glob_patterns(dirs: &[PathBuf], extension: &str) -> Vec<String> {
    let suffix = glob_suffix(extension);
    if dirs.is_empty() {
        return vec![suffix];
    }
    dirs.iter()
        .map(|dir| format!("{}{suffix}", dir.display()))
        .collect()
}

fn glob_suffix(extension: &str) -> String {
    format!("/*.{}", extension.trim_start_matches('.'))
}

/// A spell checker invocation over a set of directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCommand {
    program: String,
    fixed_args: Vec<String>,
    dirs: Vec<PathBuf>,
    extension: String,
}

impl CheckCommand {
    /// Assembles the invocation: base dictionary arguments, override
    /// dictionary, report-only flag, then one glob per directory.
    ///
    /// Empty flags in `config` are left out.
    #[inline]
    #[must_use]
    pub fn new(config: &Config, dirs: Vec<PathBuf>) -> Self {
        let mut fixed_args = config.base_dictionary_args.clone();
        if !config.dictionary_flag.is_empty() {
            fixed_args.push(config.dictionary_flag.clone());
            fixed_args.push(config.dictionary.to_string_lossy().into_owned());
        }
        if !config.report_only_flag.is_empty() {
            fixed_args.push(config.report_only_flag.clone());
        }

        Self {
            program: config.program.clone(),
            fixed_args,
            dirs,
            extension: config.target_extension().to_owned(),
        }
    }

    #[inline]
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[inline]
    #[must_use]
    pub fn fixed_args(&self) -> &[String] {
        &self.fixed_args
    }

    #[inline]
    #[must_use]
    pub fn patterns(&self) -> Vec<String> {
        glob_patterns(&self.dirs, &self.extension)
    }

    /// Renders the invocation as a single shell-style command line.
    ///
    /// Directories are joined with `/*.<ext> ` and the suffix is appended once
    /// more, so `[A, B]` renders as `... A/*.<ext> B/*.<ext>`.
    #[inline]
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut parts = Vec::with_capacity(self.fixed_args.len().saturating_add(2));
        parts.push(self.program.clone());
        parts.extend(self.fixed_args.iter().cloned());
        parts.push(self.patterns().join(" "));
        parts.join(" ")
    }

    /// Expands each directory's pattern into the matching files.
    ///
    /// Directory names are escaped, so glob metacharacters in them are taken
    /// literally. Dotfiles are not matched. A pattern that matches nothing is
    /// passed through unchanged, as a POSIX shell would.
    ///
    /// # Errors
    ///
    /// This function may return an error if a matched path cannot be read.
    #[inline]
    pub fn expanded_args(&self) -> Result<Vec<OsString>> {
        let literals = self.patterns();
        let dirs = if self.dirs.is_empty() {
            vec![PathBuf::new()]
        } else {
            self.dirs.clone()
        };

        let mut args = Vec::new();
        for (dir, literal) in dirs.iter().zip(literals) {
            let (mut matched, literal) = match dir.to_str() {
                Some(dir_str) => (self.glob_files(dir_str, &literal)?, OsString::from(literal)),
                // Glob patterns are strings, so non-UTF-8 names are listed directly.
                None => (
                    self.list_files(dir)?,
                    dir.join(format!("*.{}", self.extension)).into_os_string(),
                ),
            };

            if matched.is_empty() {
                debug!(pattern = %literal.to_string_lossy(), "pattern matched nothing, passing it through");
                args.push(literal);
            } else {
                args.append(&mut matched);
            }
        }
        Ok(args)
    }

    fn glob_files(&self, dir: &str, literal: &str) -> Result<Vec<OsString>> {
        let options = MatchOptions {
            require_literal_leading_dot: true,
            ..MatchOptions::new()
        };
        let pattern = format!(
            "{}/*.{}",
            Pattern::escape(dir),
            Pattern::escape(&self.extension)
        );

        let mut matched = Vec::new();
        for path in glob::glob_with(&pattern, options)
            .with_context(|| format!("Invalid glob pattern: {pattern}"))?
        {
            let path = path.with_context(|| format!("Failed to expand pattern: {literal}"))?;
            matched.push(path.into_os_string());
        }
        Ok(matched)
    }

    fn list_files(&self, dir: &Path) -> Result<Vec<OsString>> {
        let mut matched = Vec::new();
        for entry in fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory: {}", dir.display()))?
        {
            let entry =
                entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
            let path = entry.path();
            let hidden = entry.file_name().as_encoded_bytes().starts_with(b".");
            if !hidden && path.is_file() && has_extension(&path, &self.extension) {
                matched.push(path.into_os_string());
            }
        }
        matched.sort();
        Ok(matched)
    }

    /// Runs the spell checker and waits for it to exit.
    ///
    /// The tool is started directly, without a shell, and inherits this
    /// process's standard streams.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * A pattern cannot be expanded
    /// * The tool cannot be started for a reason other than being missing or
    ///   not executable
    #[inline]
    pub fn execute(&self) -> Result<CheckStatus> {
        let files = self.expanded_args()?;
        info!(
            program = %self.program,
            dirs = self.dirs.len(),
            args = files.len(),
            "running spell checker"
        );

        let result = Command::new(&self.program)
            .args(&self.fixed_args)
            .args(&files)
            .status();

        match result {
            Ok(status) => Ok(check_status(status)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!(program = %self.program, "spell checker not found");
                Ok(CheckStatus::ToolNotFound)
            }
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                warn!(program = %self.program, "spell checker is not executable");
                Ok(CheckStatus::NotExecutable)
            }
            Err(err) => Err(err).with_context(|| format!("Failed to execute '{}'", self.program)),
        }
    }
}

fn check_status(status: ExitStatus) -> CheckStatus {
    if let Some(code) = status.code() {
        return CheckStatus::Exited(code);
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt as _;
        if let Some(signal) = status.signal() {
            return CheckStatus::Signaled(signal);
        }
    }
    CheckStatus::Exited(-1)
}
