//! Legacy compact rule strings.
//!
//! Older menu configuration describes visibility as a 14 character string
//! such as `"d d iaaa iaaa dddd"`: one segment per dimension, in the order
//! online (1), other project (1), unlocked (4), locked by me (4), locked by
//! other (4). Whitespace is insignificant. Each segment is matched as a whole
//! against its dimension's code table; unknown codes leave the dimension out.
//!
//! Two whole strings predate the segment scheme and map to the composite
//! rules instead.

use crate::error::{MenuError, MenuResult};
use crate::rules::{Dimension, LockedByOtherRule, ProjectRule, Rule, RuleSet, WorkflowRule};

/// Significant characters in a segmented legacy rule string
pub const LEGACY_RULE_LENGTH: usize = 14;

/// Literal meaning "direct publish" for files
pub const DIRECT_PUBLISH_LITERAL: &str = "ddiaaaiaaadddd";

/// Literal meaning "show siblings"
pub const SHOW_SIBLINGS_LITERAL: &str = "aaaaaaaaaaaa";

/// Prefix of rule set names produced by the decoder
pub const LEGACY_NAME_PREFIX: &str = "legacy:";

/// Remove all whitespace
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Registry name of the rule set decoded from `input`
pub fn legacy_name(input: &str) -> String {
    format!("{}{}", LEGACY_NAME_PREFIX, normalize(input))
}

/// Whether `input` has the length of a legacy rule string, or is one of the
/// two literals. Codes are not checked; unknown ones decode to nothing.
pub fn is_legacy_string(input: &str) -> bool {
    let normalized = normalize(input);
    normalized == DIRECT_PUBLISH_LITERAL
        || normalized == SHOW_SIBLINGS_LITERAL
        || normalized.chars().count() == LEGACY_RULE_LENGTH
}

/// Decode a legacy rule string into a rule set.
///
/// The two historical literals short-circuit to the composite rules. Any
/// other input must carry exactly 14 significant characters.
pub fn decode(input: &str) -> MenuResult<RuleSet> {
    let normalized = normalize(input);
    let name = format!("{}{}", LEGACY_NAME_PREFIX, normalized);

    if normalized == DIRECT_PUBLISH_LITERAL {
        return Ok(RuleSet::new(name, vec![Rule::DirectPublish]));
    }
    if normalized == SHOW_SIBLINGS_LITERAL {
        return Ok(RuleSet::new(name, vec![Rule::ShowSiblings]));
    }

    decode_positional(input)
}

/// Decode segment by segment, without the literal shortcuts
pub fn decode_positional(input: &str) -> MenuResult<RuleSet> {
    let normalized = normalize(input);
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() != LEGACY_RULE_LENGTH {
        return Err(MenuError::InvalidLegacyLength {
            input: input.to_string(),
            expected: LEGACY_RULE_LENGTH,
            found: chars.len(),
        });
    }

    let mut rules = Vec::with_capacity(Dimension::ALL.len());
    let mut offset = 0;
    for dimension in Dimension::ALL {
        let width = dimension.legacy_width();
        let code: String = chars[offset..offset + width].iter().collect();
        offset += width;

        match decode_segment(dimension, &code) {
            Some(rule) => rules.push(rule),
            None => tracing::debug!(
                input = %normalized,
                %dimension,
                code = %code,
                "Unknown legacy code, dimension left out"
            ),
        }
    }

    Ok(RuleSet::new(
        format!("{}{}", LEGACY_NAME_PREFIX, normalized),
        rules,
    ))
}

/// Look one segment up in its dimension's code table
pub fn decode_segment(dimension: Dimension, code: &str) -> Option<Rule> {
    match dimension {
        Dimension::Online => ProjectRule::from_code(code).map(Rule::Online),
        Dimension::OtherProject => ProjectRule::from_code(code).map(Rule::OtherProject),
        Dimension::Unlocked => WorkflowRule::from_code(code).map(Rule::Unlocked),
        Dimension::LockedByMe => WorkflowRule::from_code(code).map(Rule::LockedByMe),
        Dimension::LockedByOther => LockedByOtherRule::from_code(code).map(Rule::LockedByOther),
    }
}

/// Encode a rule set back into the spaced legacy form (`"d d aaaa aaaa dddd"`).
///
/// Returns `None` unless the set holds exactly one encodable rule per
/// dimension in segment order, or is one of the two composite literals.
pub fn encode(rule_set: &RuleSet) -> Option<String> {
    match rule_set.rules() {
        [Rule::DirectPublish] => return Some(DIRECT_PUBLISH_LITERAL.to_string()),
        [Rule::ShowSiblings] => return Some(SHOW_SIBLINGS_LITERAL.to_string()),
        _ => {}
    }
    if rule_set.rules().len() != Dimension::ALL.len() {
        return None;
    }

    let mut segments = Vec::with_capacity(Dimension::ALL.len());
    for (rule, dimension) in rule_set.rules().iter().zip(Dimension::ALL) {
        if rule.dimension() != Some(dimension) {
            return None;
        }
        segments.push(rule.legacy_code()?);
    }
    Some(segments.join(" "))
}
