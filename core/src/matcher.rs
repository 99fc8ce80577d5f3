//! Pure glob evaluation for compiled ignore patterns.
//!
//! Matching is segment-wise over `/`-separated relative paths. A standalone
//! `**` segment matches zero or more complete path segments, evaluated left
//! to right, so several `**` tokens in one pattern compose deterministically.
//! Within a single segment `*` and `?` never cross a `/` boundary, and
//! bracket classes follow POSIX glob (`[abc]`, `[a-z]`, `[!x]`).

use crate::pattern::Pattern;

/// Decide whether one compiled pattern matches a candidate relative path.
///
/// Anchored patterns are tested against the whole path only; unanchored
/// patterns are tested against every suffix obtained by dropping leading
/// segments, which covers the bare-basename case. Directory-only patterns
/// match a directory candidate directly and sweep in every path beneath a
/// matching directory.
pub fn matches(pattern: &Pattern, rel_path: &str, is_dir: bool) -> bool {
    let path = split(rel_path);
    if path.is_empty() {
        return false;
    }
    let pat = split(&pattern.body);
    if pat.is_empty() {
        return false;
    }

    if body_matches(&pat, &path, pattern.anchored) && (!pattern.dir_only || is_dir) {
        return true;
    }
    if pattern.dir_only {
        // Descendant propagation: every proper ancestor prefix of the
        // candidate is a directory, so no stat is needed here.
        return (1..path.len()).any(|cut| body_matches(&pat, &path[..cut], pattern.anchored));
    }
    false
}

fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty() && *s != ".").collect()
}

fn body_matches(pat: &[&str], path: &[&str], anchored: bool) -> bool {
    if anchored {
        return segments_match(pat, path);
    }
    (0..path.len()).any(|start| segments_match(pat, &path[start..]))
}

/// Match a segmented pattern against a segmented path, both in full.
fn segments_match(pat: &[&str], path: &[&str]) -> bool {
    match pat.split_first() {
        None => path.is_empty(),
        Some((&"**", rest)) => {
            if rest.is_empty() {
                // Trailing `**`: the prefix alone decides.
                return true;
            }
            (0..=path.len()).any(|skip| segments_match(rest, &path[skip..]))
        }
        Some((head, rest)) => match path.split_first() {
            Some((seg, tail)) => glob_match(head, seg) && segments_match(rest, tail),
            None => false,
        },
    }
}

/// Shell-style glob over a single path segment.
fn glob_match(pattern: &str, text: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = text.chars().collect();
    let (mut p, mut t) = (0usize, 0usize);
    // Last `*` seen and the text position it is currently pinned to.
    let mut star: Option<(usize, usize)> = None;

    while t < txt.len() {
        let advanced = if p < pat.len() {
            match pat[p] {
                '*' => {
                    star = Some((p, t));
                    p += 1;
                    continue;
                }
                '?' => true,
                '[' => match class_match(&pat, p, txt[t]) {
                    Some((hit, next)) => {
                        if hit {
                            p = next;
                            t += 1;
                            continue;
                        }
                        false
                    }
                    // Unterminated class: `[` falls back to a literal.
                    None => txt[t] == '[',
                },
                c => c == txt[t],
            }
        } else {
            false
        };

        if advanced {
            p += 1;
            t += 1;
        } else if let Some((sp, st)) = star {
            // Backtrack: widen the last `*` by one character.
            p = sp + 1;
            t = st + 1;
            star = Some((sp, st + 1));
        } else {
            return false;
        }
    }

    while p < pat.len() && pat[p] == '*' {
        p += 1;
    }
    p == pat.len()
}

/// Match `c` against the bracket class starting at `pat[start] == '['`.
///
/// Returns the verdict and the index just past the closing `]`, or `None`
/// when the class never closes.
fn class_match(pat: &[char], start: usize, c: char) -> Option<(bool, usize)> {
    let mut i = start + 1;
    let negated = matches!(pat.get(i), Some(&'!') | Some(&'^'));
    if negated {
        i += 1;
    }
    let mut hit = false;
    let mut first = true;
    while i < pat.len() {
        if pat[i] == ']' && !first {
            return Some((hit != negated, i + 1));
        }
        first = false;
        if i + 2 < pat.len() && pat[i + 1] == '-' && pat[i + 2] != ']' {
            if pat[i] <= c && c <= pat[i + 2] {
                hit = true;
            }
            i += 3;
        } else {
            if pat[i] == c {
                hit = true;
            }
            i += 1;
        }
    }
    None
}
