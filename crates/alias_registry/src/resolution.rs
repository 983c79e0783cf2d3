//! Outcome of resolving a string to an enum member.

/// How an alias lookup found its member.
///
/// Falling back to the sentinel is a normal outcome, not an error;
/// `Defaulted` keeps it distinguishable for callers that care.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Resolution<T> {
    /// Matched a declared alias.
    Alias(T),
    /// Matched a member name.
    Name(T),
    /// Matched a member's ordinal written as an integer.
    Ordinal(T),
    /// Nothing matched; this is the type's sentinel member.
    Defaulted(T),
}

impl<T> Resolution<T> {
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Resolution::Alias(value)
            | Resolution::Name(value)
            | Resolution::Ordinal(value)
            | Resolution::Defaulted(value) => value,
        }
    }

    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Resolution::Alias(value)
            | Resolution::Name(value)
            | Resolution::Ordinal(value)
            | Resolution::Defaulted(value) => value,
        }
    }

    #[inline]
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Resolution::Defaulted(_))
    }

    /// The value, unless the lookup fell back to the sentinel.
    pub fn matched(self) -> Option<T> {
        match self {
            Resolution::Defaulted(_) => None,
            other => Some(other.into_value()),
        }
    }
}

/// Which resolution step matched. Stored in the cache in place of `T`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Matched {
    Alias,
    Name,
    Ordinal,
    Default,
}

/// Cached result of a resolution: a member index and how it was found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Resolved {
    pub index: usize,
    pub matched: Matched,
}

impl Resolved {
    pub(crate) const fn new(index: usize, matched: Matched) -> Self {
        Resolved { index, matched }
    }

    pub(crate) fn wrap<T>(self, value: T) -> Resolution<T> {
        match self.matched {
            Matched::Alias => Resolution::Alias(value),
            Matched::Name => Resolution::Name(value),
            Matched::Ordinal => Resolution::Ordinal(value),
            Matched::Default => Resolution::Defaulted(value),
        }
    }
}
