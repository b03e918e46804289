// src/core/exclude.rs
use anyhow::{Context as _, Result};
use glob::{MatchOptions, Pattern};
use std::path::Path;

#[derive(Debug)]
struct Rule {
    pattern: Pattern,
    negated: bool,
    dir_only: bool,
    /// Anchored rules only match against the path relative to the scan root
    anchored: bool,
}

/// Gitignore-style exclusion rules applied while scanning.
#[derive(Debug, Default)]
pub struct Patterns {
    rules: Vec<Rule>,
}

impl Patterns {
    /// Builds a rule set from pattern lines, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if any line contains invalid glob syntax.
    #[inline]
    pub fn from_lines<I, S>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Self::default();
        for line in lines {
            patterns.add_pattern(line.as_ref())?;
        }
        Ok(patterns)
    }

    /// Adds a new pattern to the rule list.
    ///
    /// Handles these pattern formats:
    /// - Blank lines and `#` comments, which are skipped
    /// - Negation with `!` prefix
    /// - Directory-only patterns ending with `/`
    /// - Root-anchored patterns starting with `/`
    /// - Any glob the `glob` crate accepts, including `**`
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern contains invalid glob syntax.
    #[inline]
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let (pattern, negated) = pattern
            .strip_prefix('!')
            .map_or((pattern, false), |stripped| (stripped, true));
        let (pattern, dir_only) = pattern
            .strip_suffix('/')
            .map_or((pattern, false), |stripped| (stripped, true));
        let (pattern, anchored) = pattern
            .strip_prefix('/')
            .map_or((pattern, false), |stripped| (stripped, true));

        let compiled = Pattern::new(pattern)
            .with_context(|| format!("Invalid exclude pattern: {pattern}"))?;
        self.rules.push(Rule {
            pattern: compiled,
            negated,
            dir_only,
            anchored,
        });
        Ok(())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns `true` if `path` (relative to the scan root) is excluded.
    ///
    /// The last matching rule decides, so a later `!pattern` re-includes a
    /// path an earlier rule excluded.
    #[inline]
    pub fn matches(&self, path: impl AsRef<Path>, is_dir: bool) -> bool {
        let path = path.as_ref();
        let path_str = path.to_string_lossy();
        let file_name = path
            .file_name()
            .map(|f| f.to_string_lossy())
            .unwrap_or_default();

        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };

        let mut excluded = false;
        for rule in &self.rules {
            if rule.dir_only && !is_dir {
                continue;
            }
            let hit = rule.pattern.matches_with(&path_str, options)
                || (!rule.anchored && rule.pattern.matches_with(&file_name, options));
            if hit {
                excluded = !rule.negated;
            }
        }
        excluded
    }
}
