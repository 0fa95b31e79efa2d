
use glob::{MatchOptions, Pattern};

/// Glob options used for exclusion patterns.
///
/// The whole leading-slash path is matched as one flat string, so `*` may span
/// `/`. Matching is case-sensitive: patterns name the exact casing to leave alone.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// An exclusion pattern that failed to compile.
#[derive(Debug, Clone)]
pub struct RejectedPattern {
    pub pattern: String,
    pub reason: String,
}

#[derive(Debug, Clone)]
struct CompiledPattern {
    raw: String,
    pattern: Pattern,
}

/// A compiled set of exclusion globs.
///
/// Patterns use shell glob syntax: `\x` matches `x` literally, `[^...]` and
/// `[!...]` both negate a class, and a run of `*` behaves like a single `*`.
/// Patterns are compiled once at configuration time. Empty patterns are ignored
/// and malformed ones are set aside in [`ExclusionMatcher::rejected`]; neither
/// ever matches a request.
#[derive(Debug, Clone, Default)]
pub struct ExclusionMatcher {
    patterns: Vec<CompiledPattern>,
    rejected: Vec<RejectedPattern>,
}

impl ExclusionMatcher {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut matcher = Self::default();

        for raw in patterns {
            let raw = raw.as_ref();
            if raw.is_empty() {
                continue;
            }
            match compile(raw) {
                Ok(pattern) => matcher.patterns.push(CompiledPattern {
                    raw: raw.to_owned(),
                    pattern,
                }),
                Err(reason) => matcher.rejected.push(RejectedPattern {
                    pattern: raw.to_owned(),
                    reason,
                }),
            }
        }

        matcher
    }

    /// Returns true when any pattern matches `path`.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns
            .iter()
            .any(|p| p.pattern.matches_with(path, MATCH_OPTIONS))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// The accepted patterns, as they were written in the configuration.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.raw.as_str())
    }

    pub fn rejected(&self) -> &[RejectedPattern] {
        &self.rejected
    }
}

/// Evaluates raw pattern strings against `path` without keeping a compiled set.
///
/// Malformed patterns count as non-matching.
pub fn matches<S: AsRef<str>>(path: &str, patterns: &[S]) -> bool {
    patterns.iter().any(|raw| {
        let raw = raw.as_ref();
        !raw.is_empty()
            && compile(raw)
                .map(|p| p.matches_with(path, MATCH_OPTIONS))
                .unwrap_or(false)
    })
}

fn compile(raw: &str) -> Result<Pattern, String> {
    let translated = to_glob_syntax(raw)?;
    Pattern::new(&translated).map_err(|err| format!("{} at position {}", err.msg, err.pos))
}

/// Rewrites shell glob syntax into the dialect understood by [`glob::Pattern`].
///
/// `glob` has no backslash escape, reads `[^` literally and reserves `**` for
/// whole path components. Escaped metacharacters become one-member classes,
/// `[^` becomes `[!` and runs of `*` collapse to one.
fn to_glob_syntax(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                while chars.next_if_eq(&'*').is_some() {}
                out.push('*');
            }
            '\\' => match chars.next() {
                Some(esc @ ('*' | '?' | '[' | ']')) => {
                    out.push('[');
                    out.push(esc);
                    out.push(']');
                }
                Some(esc) => out.push(esc),
                None => return Err("trailing backslash escapes nothing".to_owned()),
            },
            '[' => {
                out.push('[');
                if chars.next_if(|&n| n == '^' || n == '!').is_some() {
                    out.push('!');
                }
                // A leading `]` is a member, not the end of the class.
                if chars.next_if_eq(&']').is_some() {
                    out.push(']');
                }
                loop {
                    match chars.next() {
                        Some(']') => {
                            out.push(']');
                            break;
                        }
                        Some('\\') => match chars.next() {
                            Some(']') => {
                                return Err("escaped ']' inside a class; write it first instead".to_owned());
                            }
                            Some(esc) => out.push(esc),
                            None => return Err("trailing backslash escapes nothing".to_owned()),
                        },
                        Some(other) => out.push(other),
                        // Unterminated; `glob` reports it.
                        None => break,
                    }
                }
            }
            other => out.push(other),
        }
    }

    Ok(out)
}
