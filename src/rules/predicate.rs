//! Applicability tests, one per rule.
//!
//! All predicates are total over arbitrary strings, including the empty one.

/// True iff the last character of `s` is `I`.
#[must_use]
#[inline]
pub fn rule1_applicable(s: &str) -> bool {
    s.ends_with('I')
}

/// True iff the first character of `s` is `M`.
#[must_use]
#[inline]
pub fn rule2_applicable(s: &str) -> bool {
    s.starts_with('M')
}

/// True iff `s` contains `III`.
#[must_use]
#[inline]
pub fn rule3_applicable(s: &str) -> bool {
    s.contains("III")
}

/// True iff `s` contains `UU`.
#[must_use]
#[inline]
pub fn rule4_applicable(s: &str) -> bool {
    s.contains("UU")
}
