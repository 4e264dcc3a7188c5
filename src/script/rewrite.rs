//! Text-level post-processing of serialized options.

use std::sync::LazyLock;

use crate::options::token::ReservedToken;

static CATALOG: LazyLock<ReservedSet> = LazyLock::new(|| ReservedSet::new(ReservedToken::catalog()));

/// Mapping from quoted token form (`"$JssorSlider$"`) to bare form (`$JssorSlider$`).
#[derive(Clone, Debug)]
pub struct ReservedSet {
    pairs: Vec<(String, &'static str)>,
}

impl ReservedSet {
    pub fn new(tokens: impl IntoIterator<Item = ReservedToken>) -> Self {
        Self {
            pairs: tokens
                .into_iter()
                .map(|t| (t.quoted(), t.script_name()))
                .collect(),
        }
    }

    /// Every plugin constant the widget knows about.
    pub fn catalog() -> &'static ReservedSet {
        &CATALOG
    }

    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(q, b)| (q.as_str(), *b))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Replace every quoted reserved form in `text` with its bare form.
///
/// Applies the set until no unescaped quoted form is left, so the result is a fixed point and a second
/// call returns it unchanged. A plain string value that happens to equal a quoted form is
/// unquoted as well; callers that need to tell them apart use the native encoder. Forms whose
/// opening quote is escaped (string content such as `\"$JssorSlider$`) are left alone.
pub fn unquote_reserved(text: &str, set: &ReservedSet) -> String {
    let mut out = text.to_string();
    loop {
        let mut changed = false;
        for (quoted, bare) in set.pairs() {
            if let Some(next) = replace_unescaped(&out, quoted, bare, usize::MAX) {
                out = next;
                changed = true;
            }
        }
        if !changed {
            return out;
        }
    }
}

/// Replace the first occurrence of `placeholder` with `replacement`.
///
/// A placeholder starting with a quote only matches where that quote is not escaped. A
/// missing placeholder leaves the text unchanged.
pub fn substitute_placeholder(text: &str, placeholder: &str, replacement: &str) -> String {
    replace_unescaped(text, placeholder, replacement, 1).unwrap_or_else(|| text.to_string())
}

/// Replace up to `limit` matches of `needle`; `None` when nothing was replaced.
fn replace_unescaped(
    text: &str,
    needle: &str,
    replacement: &str,
    limit: usize,
) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;
    for (at, _) in text.match_indices(needle) {
        if count == limit {
            break;
        }
        if needle.starts_with('"') && is_escaped(text, at) {
            continue;
        }
        out.push_str(&text[last..at]);
        out.push_str(replacement);
        last = at + needle.len();
        count += 1;
    }
    if count == 0 {
        return None;
    }
    out.push_str(&text[last..]);
    Some(out)
}

/// An odd run of backslashes before `at` escapes the character there.
fn is_escaped(text: &str, at: usize) -> bool {
    text[..at].bytes().rev().take_while(|&b| b == b'\\').count() % 2 == 1
}

#[cfg(test)]
#[path = "../../tests/unit/script/rewrite.rs"]
mod tests;
