//! Compilation of raw ignore-file lines into `Pattern` records.

/// One compiled gitignore-style rule.
///
/// Immutable once compiled. `order` is the rule's position among every
/// pattern added to its owning set; later patterns override earlier ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The line as written, before any markers were stripped.
    pub raw: String,
    /// Glob body with the `!`, leading `/` and trailing `/` markers removed.
    pub body: String,
    /// `!`-prefixed rules re-include paths a previous rule excluded.
    pub negate: bool,
    /// Trailing-`/` rules match directories and everything beneath them.
    pub dir_only: bool,
    /// Leading-`/` rules match only from the root, never at depth.
    pub anchored: bool,
    /// Insertion position within the owning set.
    pub order: usize,
}

impl Pattern {
    /// Compile one line of ignore-file text.
    ///
    /// Returns `None` for blank lines and `#` comments. Never fails:
    /// whatever survives marker stripping becomes the glob body as-is, so a
    /// malformed line degrades to a best-effort literal instead of
    /// poisoning the rest of the file.
    pub fn compile(line: &str, order: usize) -> Option<Self> {
        let mut text = line.trim();
        if text.is_empty() || text.starts_with('#') {
            return None;
        }

        let negate = text.starts_with('!');
        if negate {
            text = &text[1..];
        }

        let dir_only = text.ends_with('/');
        if dir_only {
            text = &text[..text.len() - 1];
        }

        let anchored = text.starts_with('/');
        if anchored {
            text = &text[1..];
        }

        Some(Self {
            raw: line.to_string(),
            body: text.to_string(),
            negate,
            dir_only,
            anchored,
            order,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(line: &str) -> Pattern {
        Pattern::compile(line, 0).expect("line should produce a pattern")
    }

    #[test]
    fn plain_body() {
        let p = compile("node_modules");
        assert_eq!(p.body, "node_modules");
        assert!(!p.negate);
        assert!(!p.dir_only);
        assert!(!p.anchored);
    }

    #[test]
    fn blank_and_comment_lines_are_discarded() {
        assert!(Pattern::compile("", 0).is_none());
        assert!(Pattern::compile("   ", 0).is_none());
        assert!(Pattern::compile("# a comment", 0).is_none());
        assert!(Pattern::compile("   # indented comment", 0).is_none());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let p = compile("  build/  ");
        assert_eq!(p.body, "build");
        assert!(p.dir_only);
    }

    #[test]
    fn negation_marker() {
        let p = compile("!build/important.log");
        assert!(p.negate);
        assert_eq!(p.body, "build/important.log");
    }

    #[test]
    fn directory_marker() {
        let p = compile(".git/");
        assert!(p.dir_only);
        assert_eq!(p.body, ".git");
    }

    #[test]
    fn anchor_marker() {
        let p = compile("/src");
        assert!(p.anchored);
        assert_eq!(p.body, "src");
    }

    #[test]
    fn all_markers_combined() {
        let p = compile("!/build/");
        assert!(p.negate);
        assert!(p.dir_only);
        assert!(p.anchored);
        assert_eq!(p.body, "build");
    }

    #[test]
    fn malformed_glob_is_kept_as_literal() {
        // Unterminated class: accepted, matching degrades to best effort.
        let p = compile("[abc");
        assert_eq!(p.body, "[abc");
    }

    #[test]
    fn raw_preserves_original_line() {
        let p = compile("!build/");
        assert_eq!(p.raw, "!build/");
    }
}
