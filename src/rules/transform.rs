//! Rule transforms.
//!
//! Each transform re-checks its own precondition and returns
//! [`RuleError`] instead of rewriting a string the rule does not apply to.

use super::predicate::{rule1_applicable, rule2_applicable};
use super::{Rule, RuleLabel};
use crate::error::{RuleError, RuleResult};

fn not_applicable(rule: Rule, s: &str) -> RuleError {
    RuleError::NotApplicable {
        rule,
        string: s.to_owned(),
    }
}

/// `xI -> xIU`.
///
/// # Errors
///
/// Returns [`RuleError::NotApplicable`] if `s` does not end in `I`.
pub fn apply_rule1(s: &str) -> RuleResult<String> {
    if !rule1_applicable(s) {
        return Err(not_applicable(Rule::One, s));
    }
    let mut out = String::with_capacity(s.len() + 1);
    out.push_str(s);
    out.push('U');
    Ok(out)
}

/// `Mx -> Mxx`.
///
/// # Errors
///
/// Returns [`RuleError::NotApplicable`] if `s` does not start with `M`.
pub fn apply_rule2(s: &str) -> RuleResult<String> {
    if !rule2_applicable(s) {
        return Err(not_applicable(Rule::Two, s));
    }
    // Leading `M` is one byte wide.
    let tail = &s[1..];
    let mut out = String::with_capacity(s.len() + tail.len());
    out.push_str(s);
    out.push_str(tail);
    Ok(out)
}

/// `xIIIy -> xUy`, replacing the `III` that starts at `index`.
///
/// # Errors
///
/// Returns [`RuleError::NoSiteAt`] if `III` does not start at `index`.
pub fn apply_rule3(s: &str, index: usize) -> RuleResult<String> {
    let at_site = s.get(index..).is_some_and(|rest| rest.starts_with("III"));
    if !at_site {
        return Err(RuleError::NoSiteAt {
            index,
            string: s.to_owned(),
        });
    }
    let mut out = String::with_capacity(s.len() - 2);
    out.push_str(&s[..index]);
    out.push('U');
    out.push_str(&s[index + 3..]);
    Ok(out)
}

/// `xUUy -> xy`, removing the leftmost `UU`.
///
/// # Errors
///
/// Returns [`RuleError::NotApplicable`] if `s` contains no `UU`.
pub fn apply_rule4(s: &str) -> RuleResult<String> {
    let index = s.find("UU").ok_or_else(|| not_applicable(Rule::Four, s))?;
    let mut out = String::with_capacity(s.len() - 2);
    out.push_str(&s[..index]);
    out.push_str(&s[index + 2..]);
    Ok(out)
}

/// Apply the transition named by `label` to `s`.
///
/// # Errors
///
/// Returns an error if the labelled rule (or site) does not apply to `s`.
pub fn apply(s: &str, label: RuleLabel) -> RuleResult<String> {
    match label {
        RuleLabel::One => apply_rule1(s),
        RuleLabel::Two => apply_rule2(s),
        RuleLabel::Three { site } => apply_rule3(s, site),
        RuleLabel::Four => apply_rule4(s),
    }
}
