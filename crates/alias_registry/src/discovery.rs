//! Metadata scans over an enum's static member table.
//!
//! These are the uncached computations behind each registry projection.
//! All of them are pure functions of the table.

use crate::key::eq_ignore_case;
use crate::resolution::{Matched, Resolved};
use crate::shape::EnumShape;

/// Declared alias of the member at `index`, or `""` when it has none.
pub(crate) fn alias_of(shape: &EnumShape, index: usize) -> &'static str {
    shape
        .members
        .get(index)
        .and_then(|member| member.alias)
        .unwrap_or("")
}

/// Resolve request text to a member index.
///
/// First match wins:
/// 1. a declared alias equal to `text`, ignoring case;
/// 2. a member name equal to the trimmed `text`, ignoring case, or a
///    declared ordinal equal to it parsed as an integer;
/// 3. the sentinel member.
///
/// Returns `None` only for an empty member table.
pub(crate) fn resolve(shape: &EnumShape, text: &str) -> Option<Resolved> {
    if let Some(index) = shape
        .members
        .iter()
        .position(|member| member.alias.is_some_and(|alias| eq_ignore_case(alias, text)))
    {
        return Some(Resolved::new(index, Matched::Alias));
    }

    if let Some(resolved) = parse_member(shape, text) {
        return Some(resolved);
    }

    shape
        .sentinel_index()
        .map(|index| Resolved::new(index, Matched::Default))
}

/// Parse `text` as a member name or ordinal.
fn parse_member(shape: &EnumShape, text: &str) -> Option<Resolved> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(index) = shape
        .members
        .iter()
        .position(|member| eq_ignore_case(member.name, trimmed))
    {
        return Some(Resolved::new(index, Matched::Name));
    }

    let ordinal: i64 = trimmed.parse().ok()?;
    shape
        .members
        .iter()
        .position(|member| member.ordinal == ordinal)
        .map(|index| Resolved::new(index, Matched::Ordinal))
}

/// Every external name of the type, in declaration order.
///
/// A declared alias is used when non-empty; a declared empty alias drops the
/// member; an undeclared alias falls back to the member name.
pub(crate) fn alias_list(shape: &EnumShape) -> Vec<&'static str> {
    let mut aliases = Vec::with_capacity(shape.len());
    aliases.extend(shape.members.iter().filter_map(|member| match member.alias {
        Some("") => None,
        Some(alias) => Some(alias),
        None => Some(member.name),
    }));
    aliases
}
