// Search Pattern - wildcard file-name filter for directory enumeration

use regex::{Regex, RegexBuilder};

use crate::error::{FacadeError, Result};

/// Pattern matching every file name
pub const MATCH_ALL: &str = "*";

/// How far directory enumeration descends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOption {
    /// Only the given directory
    #[default]
    TopDirectoryOnly,
    /// The given directory and every subdirectory
    AllDirectories,
}

/// Compiled wildcard pattern
///
/// `*` matches zero or more characters, `?` exactly one. Everything else is
/// literal. Matching is applied to the file name only, never the full path.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    source: String,
    regex: Regex,
}

impl SearchPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(FacadeError::InvalidPattern("pattern is empty".to_string()));
        }
        if pattern.contains('/') || pattern.contains('\\') {
            return Err(FacadeError::InvalidPattern(format!(
                "'{}' contains a path separator",
                pattern
            )));
        }
        if pattern.contains("..") {
            return Err(FacadeError::InvalidPattern(format!(
                "'{}' contains '..'",
                pattern
            )));
        }

        let mut expr = String::with_capacity(pattern.len() + 8);
        expr.push('^');
        let mut literal = String::new();
        for ch in pattern.chars() {
            match ch {
                '*' | '?' => {
                    expr.push_str(&regex::escape(&literal));
                    literal.clear();
                    expr.push_str(if ch == '*' { ".*" } else { "." });
                }
                _ => literal.push(ch),
            }
        }
        expr.push_str(&regex::escape(&literal));
        expr.push('$');

        let regex = RegexBuilder::new(&expr)
            .case_insensitive(cfg!(windows))
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| FacadeError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}
