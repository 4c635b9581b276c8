//! Standard escaping rules.
//!
//! Escaping happens in two steps. Backslashes and the wildcards `*` `?` are
//! escaped everywhere. Then the context decides: a quoted phrase only needs
//! `"` escaped, while a bare term also escapes syntax characters, whitespace,
//! a leading `+`/`-`/`@` and whole-word operator keywords.
//!
//! `discard_escape_chars` undoes any of this.

use flexql_core::{EscapeContext, EscapeQuerySyntax};

const ESCAPE: char = '\\';

const WILDCARD_CHARS: &[char] = &['*', '?'];

const QUOTED_CHARS: &[char] = &['"'];

const TERM_CHARS: &[char] = &[
    '"', '<', '>', '=', '!', '(', ')', '^', '[', '{', ':', ']', '}', '~',
];

const TERM_FIRST_CHARS: &[char] = &['+', '-', '@'];

const WHITESPACE_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\u{c}', '\u{8}', '\u{3000}'];

const RESERVED_WORDS: &[&str] = &[
    "AND",
    "OR",
    "NOT",
    "TO",
    "WITHIN",
    "SENTENCE",
    "PARAGRAPH",
    "INORDER",
];

/// Escaper producing text the standard syntax parses back verbatim.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardEscaper;

impl EscapeQuerySyntax for StandardEscaper {
    fn escape(&self, text: &str, context: EscapeContext) -> String {
        if text.is_empty() {
            return String::new();
        }
        let base = escape_chars(text, |c| c == ESCAPE || WILDCARD_CHARS.contains(&c));
        match context {
            EscapeContext::Quoted => escape_chars(&base, |c| QUOTED_CHARS.contains(&c)),
            EscapeContext::Normal => escape_term(&base),
        }
    }
}

fn escape_term(text: &str) -> String {
    let mut out = escape_chars(text, |c| {
        TERM_CHARS.contains(&c) || WHITESPACE_CHARS.contains(&c)
    });

    if out.starts_with(TERM_FIRST_CHARS) {
        out.insert(0, ESCAPE);
    }

    if RESERVED_WORDS
        .iter()
        .any(|word| out.eq_ignore_ascii_case(word))
    {
        out.insert(0, ESCAPE);
    }

    out
}

fn escape_chars(text: &str, needs_escape: impl Fn(char) -> bool) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if needs_escape(c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

/// Failure to undo escaping. Offsets are byte positions of the backslash.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    #[error("truncated escape sequence at offset {offset}")]
    TruncatedEscape { offset: usize },

    #[error("truncated unicode escape sequence at offset {offset}")]
    TruncatedUnicodeEscape { offset: usize },

    #[error("invalid unicode escape sequence `{sequence}` at offset {offset}")]
    InvalidUnicodeEscape { offset: usize, sequence: String },
}

/// Remove escape characters: `\x` becomes `x`, `\uXXXX` the code point it names.
pub fn discard_escape_chars(text: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices();

    while let Some((offset, c)) = chars.next() {
        if c != ESCAPE {
            out.push(c);
            continue;
        }

        match chars.next() {
            None => return Err(EscapeError::TruncatedEscape { offset }),
            Some((_, 'u')) => {
                let digits: String = chars.by_ref().take(4).map(|(_, c)| c).collect();
                if digits.chars().count() < 4 {
                    return Err(EscapeError::TruncatedUnicodeEscape { offset });
                }
                let decoded = u32::from_str_radix(&digits, 16)
                    .ok()
                    .filter(|_| digits.chars().all(|c| c.is_ascii_hexdigit()))
                    .and_then(char::from_u32)
                    .ok_or_else(|| EscapeError::InvalidUnicodeEscape {
                        offset,
                        sequence: format!("\\u{digits}"),
                    })?;
                out.push(decoded);
            }
            Some((_, escaped)) => out.push(escaped),
        }
    }

    Ok(out)
}
