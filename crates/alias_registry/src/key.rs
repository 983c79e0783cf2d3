//! Cache keys and case folding.

use std::any::TypeId;

/// Canonical case of every char in `text`.
///
/// Per-char lower-casing with no context rules, plus the final sigma folded
/// to its medial form so `ΟΔΟΣ`, `οδοσ` and `οδος` all agree. Key building
/// and comparison both go through here, so texts that share a cache key
/// always compare equal.
fn folded_chars(text: &str) -> impl Iterator<Item = char> + '_ {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
}

/// Fold `text` to the canonical case used by alias lookups.
///
/// No trimming: `" uk"` and `"uk"` stay distinct.
#[inline]
pub(crate) fn fold_case(text: &str) -> Box<str> {
    if text.is_ascii() {
        return text.to_ascii_lowercase().into_boxed_str();
    }
    folded_chars(text).collect::<String>().into_boxed_str()
}

/// Case-insensitive equality without allocating.
///
/// `eq_ignore_case(a, b)` holds exactly when `fold_case(a) == fold_case(b)`.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    folded_chars(a).eq(folded_chars(b))
}

/// Key for per-member entries: the member is identified by its table index.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct MemberKey {
    pub ty: TypeId,
    pub index: usize,
}

/// Key for alias → value entries: the request text, case-folded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TextKey {
    pub ty: TypeId,
    pub text: Box<str>,
}

impl TextKey {
    pub(crate) fn folded(ty: TypeId, text: &str) -> Self {
        TextKey {
            ty,
            text: fold_case(text),
        }
    }
}
