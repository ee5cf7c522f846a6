//! Module with the data a host tool uses to select a lexer for a piece of source text.
use rustc_hash::FxHashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Lexer;

/// Registration data of a lexer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LexerInfo {
    /// The human readable name of the lexer.
    pub name: String,
    /// Short names that select the lexer, e.g. in the info string of a fenced code block.
    pub aliases: Vec<String>,
    /// File name patterns, `*` matches any sequence of characters.
    pub filenames: Vec<String>,
    /// MIME types of the sources the lexer handles.
    pub mimetypes: Vec<String>,
}

impl LexerInfo {
    /// Create new registration data.
    pub fn new(name: &str, aliases: &[&str], filenames: &[&str], mimetypes: &[&str]) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Self {
            name: name.to_string(),
            aliases: owned(aliases),
            filenames: owned(filenames),
            mimetypes: owned(mimetypes),
        }
    }

    /// Aliases are compared case-insensitively.
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.aliases.iter().any(|a| a.eq_ignore_ascii_case(alias))
    }

    /// Check the file name part of `path` against the file name patterns.
    pub fn matches_filename(&self, path: &str) -> bool {
        let file_name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        self.filenames
            .iter()
            .any(|pattern| glob_matches(pattern, file_name))
    }

    /// MIME types are compared case-insensitively.
    pub fn matches_mimetype(&self, mimetype: &str) -> bool {
        self.mimetypes.iter().any(|m| m.eq_ignore_ascii_case(mimetype))
    }
}

// Matches a pattern where `*` stands for any, possibly empty, sequence of characters.
fn glob_matches(pattern: &str, text: &str) -> bool {
    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or_default();
    let Some(mut rest) = text.strip_prefix(first) else {
        return false;
    };
    let parts: Vec<&str> = parts.collect();
    let Some((last, middle)) = parts.split_last() else {
        // No wildcard in the pattern.
        return rest.is_empty();
    };
    for part in middle {
        match rest.find(part) {
            Some(index) => rest = &rest[index + part.len()..],
            None => return false,
        }
    }
    rest.ends_with(last)
}

/// A collection of lexers that can be looked up by alias, file name or MIME type.
#[derive(Debug, Default)]
pub struct LexerRegistry {
    lexers: Vec<Lexer>,
    aliases: FxHashMap<String, usize>,
}

impl LexerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry that contains the lexers of this crate.
    pub fn with_defaults() -> crate::Result<Self> {
        let mut registry = Self::new();
        registry.register(crate::csharp::lexer()?);
        Ok(registry)
    }

    /// Adds a lexer. Aliases of lexers registered later take precedence.
    pub fn register(&mut self, lexer: Lexer) {
        let index = self.lexers.len();
        for alias in &lexer.info().aliases {
            self.aliases.insert(alias.to_ascii_lowercase(), index);
        }
        self.lexers.push(lexer);
    }

    /// Find a lexer by one of its aliases.
    pub fn by_alias(&self, alias: &str) -> Option<&Lexer> {
        self.aliases
            .get(&alias.to_ascii_lowercase())
            .map(|index| &self.lexers[*index])
    }

    /// Find the first lexer whose file name patterns match the given path.
    pub fn for_filename(&self, path: &str) -> Option<&Lexer> {
        self.lexers
            .iter()
            .find(|lexer| lexer.info().matches_filename(path))
    }

    /// Find the first lexer that handles the given MIME type.
    pub fn for_mimetype(&self, mimetype: &str) -> Option<&Lexer> {
        self.lexers
            .iter()
            .find(|lexer| lexer.info().matches_mimetype(mimetype))
    }

    /// The number of registered lexers.
    pub fn len(&self) -> usize {
        self.lexers.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.lexers.is_empty()
    }
}
