//! Staged resolution of a selected span into dictionary lookup candidates.
//!
//! Candidates are tried against the store in order: the raw span verbatim,
//! the span with camelCase/kebab/snake delimiters rewritten to spaces, and
//! finally the single sub-token under the cursor.

/// One lookup candidate: `display` keeps the casing found in the span for the
/// hover header, `key` is the case-folded form probed against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub display: String,
    pub key: String,
}

impl Candidate {
    fn new(display: String) -> Self {
        let key = display.to_lowercase();
        Self { display, key }
    }
}

/// Produce the candidate keys for a span and an in-span cursor offset.
///
/// An empty span yields no candidates. Offsets are character offsets; an
/// offset at or past the end of the span falls back to the last segment.
pub fn candidates(raw: &str, cursor: usize) -> Vec<Candidate> {
    if raw.is_empty() {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(3);
    out.push(Candidate::new(raw.to_string()));

    let spaced = split_delimiters(raw);
    if spaced != raw {
        out.push(Candidate::new(spaced));
    }

    if let Some(segment) = segment_at(raw, cursor) {
        out.push(Candidate::new(segment));
    }

    out
}

fn is_delim(c: char) -> bool {
    c == '-' || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Rewrite an identifier-shaped span into a space-segmented phrase:
/// a space lands before every uppercase letter that follows a word character,
/// and every run of hyphens or underscores collapses to a single space.
/// `helloWorld` becomes `hello World`, `foo-bar` becomes `foo bar`.
fn split_delimiters(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev: Option<char> = None;

    for c in raw.chars() {
        if is_delim(c) {
            if prev != Some(c) {
                out.push(' ');
            }
        } else if c.is_ascii_uppercase() && prev.is_some_and(is_word_char) {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

/// Isolate the word-like segment the cursor sits in.
///
/// The cursor first skips forward over delimiters; if that runs off the end
/// of the span it restarts from the last character and skips backward. From
/// the resolved index the segment extends backward until an uppercase letter
/// (kept) or a delimiter (excluded), and forward until any of the three.
/// Returns `None` when the span is all delimiters.
fn segment_at(raw: &str, cursor: usize) -> Option<String> {
    let chars: Vec<char> = raw.chars().collect();
    let len = chars.len();
    if len == 0 {
        return None;
    }

    let mut idx = cursor;
    while idx < len && is_delim(chars[idx]) {
        idx += 1;
    }
    if idx >= len {
        idx = len - 1;
        while is_delim(chars[idx]) {
            if idx == 0 {
                return None;
            }
            idx -= 1;
        }
    }

    let mut start = idx;
    while start > 0 {
        let c = chars[start];
        if c.is_ascii_uppercase() {
            break;
        }
        if is_delim(c) {
            start += 1;
            break;
        }
        start -= 1;
    }

    let mut end = idx + 1;
    while end < len && !chars[end].is_ascii_uppercase() && !is_delim(chars[end]) {
        end += 1;
    }

    Some(chars[start..end].iter().collect())
}
