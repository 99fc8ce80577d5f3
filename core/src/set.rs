//! Ordered pattern sets bound to a watch root.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::matcher;
use crate::pattern::Pattern;

/// Failure while reading an ignore file. A missing file is not an error.
#[derive(Debug, Error)]
pub enum IgnoreError {
    #[error("failed to read ignore file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// An ordered collection of compiled ignore patterns bound to a root path.
///
/// Insertion order is significant and never reordered; appending is the
/// only mutation. During construction a set is single-owner; once installed
/// on an [`ActiveIgnore`](crate::active::ActiveIgnore) handle it must be
/// treated as read-only and replaced wholesale, never edited in place.
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    root: PathBuf,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// An empty set rooted at `root`. Filters nothing until patterns arrive.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            patterns: Vec::new(),
        }
    }

    /// Build a set from raw pattern lines, preserving their order.
    pub fn compile<I, S>(root: impl Into<PathBuf>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new(root);
        for line in lines {
            set.add_pattern(line.as_ref());
        }
        set
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Compiled patterns in insertion order.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Append one rule. Comments and blank lines are dropped silently;
    /// nothing else can fail.
    pub fn add_pattern(&mut self, line: &str) {
        if let Some(pattern) = Pattern::compile(line, self.patterns.len()) {
            self.patterns.push(pattern);
        }
    }

    /// Append every rule from an ignore file, preserving file order.
    ///
    /// A file that does not exist is a normal state and loads nothing. Any
    /// other I/O failure is returned; lines appended before the failure
    /// stay in the set (best effort, not transactional).
    pub fn load_ignore_file(&mut self, path: &Path) -> Result<(), IgnoreError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(IgnoreError::Io {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };

        for line in content.lines() {
            self.add_pattern(line);
        }
        debug!(file = %path.display(), total = self.patterns.len(), "loaded ignore file");
        Ok(())
    }

    /// Whether `path` is excluded by this set.
    ///
    /// Directory-ness is inferred with a stat; callers on the delivery path
    /// should prefer [`should_ignore_with_hint`](Self::should_ignore_with_hint)
    /// with the hint taken from the originating event.
    pub fn should_ignore(&self, path: &Path) -> bool {
        self.should_ignore_with_hint(path, None)
    }

    /// Whether `path` is excluded, with an optional directory-ness hint.
    ///
    /// The path is relativized against the set root and normalized to
    /// forward slashes. Patterns are folded in insertion order and the last
    /// matching pattern wins: a match sets the verdict to `!negate`,
    /// overwriting whatever an earlier pattern decided. With no hint, a
    /// failed stat (deleted, permission denied) counts as non-directory;
    /// the call itself never fails. An empty set ignores nothing.
    pub fn should_ignore_with_hint(&self, path: &Path, dir_hint: Option<bool>) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let rel = self.relativize(path);
        if rel.is_empty() {
            return false;
        }
        let is_dir = dir_hint.unwrap_or_else(|| {
            fs::symlink_metadata(path)
                .map(|meta| meta.is_dir())
                .unwrap_or(false)
        });

        let mut ignored = false;
        for pattern in &self.patterns {
            if matcher::matches(pattern, &rel, is_dir) {
                ignored = !pattern.negate;
            }
        }
        ignored
    }

    /// Path relative to the root, `/`-separated, without a leading `./`.
    /// A path outside the root is used as-is, like the unanchored rules
    /// expect.
    fn relativize(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        let mut rel = rel.to_string_lossy().replace('\\', "/");
        if let Some(stripped) = rel.strip_prefix("./") {
            rel = stripped.to_string();
        }
        rel.trim_end_matches('/').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> IgnoreSet {
        IgnoreSet::compile("/watched", patterns.iter().copied())
    }

    fn ignored(set: &IgnoreSet, rel: &str, is_dir: bool) -> bool {
        set.should_ignore_with_hint(&set.root().join(rel), Some(is_dir))
    }

    #[test]
    fn empty_set_ignores_nothing() {
        let s = IgnoreSet::new("/watched");
        assert!(!s.should_ignore(Path::new("/watched/.git")));
        assert!(!s.should_ignore(Path::new("/watched/a/b/c")));
    }

    #[test]
    fn later_patterns_always_win() {
        let s = set(&["*.log", "!*.log"]);
        assert!(!ignored(&s, "debug.log", false));

        let s = set(&["!*.log", "*.log"]);
        assert!(ignored(&s, "debug.log", false));
    }

    #[test]
    fn negation_reincludes_a_single_path() {
        let s = set(&["build/", "!build/important.log"]);
        assert!(ignored(&s, "build", true));
        assert!(ignored(&s, "build/output", false));
        assert!(!ignored(&s, "build/important.log", false));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let s = set(&["# noise", "", "   ", "*.tmp"]);
        assert_eq!(s.patterns().len(), 1);
        assert!(ignored(&s, "scratch.tmp", false));
    }

    #[test]
    fn root_itself_is_never_ignored() {
        let s = set(&["*"]);
        assert!(!s.should_ignore_with_hint(Path::new("/watched"), Some(true)));
    }

    #[test]
    fn paths_outside_the_root_still_match_unanchored_rules() {
        let s = set(&["*.log"]);
        assert!(s.should_ignore_with_hint(Path::new("/elsewhere/x.log"), Some(false)));
    }

    #[test]
    fn dir_hint_overrides_the_stat_fallback() {
        // Nothing at this path exists; only the hint says directory.
        let s = set(&["build/"]);
        assert!(ignored(&s, "build", true));
        assert!(!ignored(&s, "build", false));
    }

    #[test]
    fn missing_stat_falls_open_for_dir_only_rules() {
        let s = set(&["build/"]);
        // No hint and the path does not exist: treated as non-directory.
        assert!(!s.should_ignore(&s.root().join("build")));
        // Descendants are still swept via the ancestor branch.
        assert!(s.should_ignore(&s.root().join("build/output.bin")));
    }

    #[test]
    fn pattern_order_counts_only_kept_lines() {
        let mut s = IgnoreSet::new("/watched");
        s.add_pattern("# comment");
        s.add_pattern("one");
        s.add_pattern("two");
        let orders: Vec<usize> = s.patterns().iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![0, 1]);
    }
}
