use log::trace;

use crate::models::rules::{ISSUED_BY_RULES, PLACE_OF_BIRTH_RULES};
use crate::models::NormalizationRule;

/// TextNormalizer cleans up free-text passport fields that are stored as
/// typed, such as the place of birth and the issuing authority name.
pub struct TextNormalizer;

impl TextNormalizer {
    /// Collapse double spaces and hyphens and remove spaces around hyphens:
    /// `"U  S- SR"` becomes `"U S-SR"`.
    pub fn place_of_birth(place_of_birth: &str) -> String {
        Self::apply_rules(place_of_birth, &PLACE_OF_BIRTH_RULES)
    }

    /// Collapse doubled spaces, periods, commas and quotes in the issuing
    /// authority name.
    pub fn issued_by(issued_by: &str) -> String {
        Self::apply_rules(issued_by, &ISSUED_BY_RULES)
    }

    /// Apply every rule repeatedly until one full pass changes nothing.
    ///
    /// Removing one pattern can expose another (`"-  -"` -> `"- -"` -> `"--"`),
    /// so a single pass is not enough. Each substitution shortens the text,
    /// which bounds the number of passes.
    pub fn apply_rules(text: &str, rules: &[NormalizationRule]) -> String {
        let mut normalized = text.to_string();
        if normalized.is_empty() {
            return normalized;
        }

        let mut passes = 0;
        loop {
            let mut changed = false;
            for rule in rules {
                if normalized.contains(rule.pattern) {
                    normalized = normalized.replace(rule.pattern, rule.replacement);
                    changed = true;
                }
            }
            passes += 1;
            if !changed {
                break;
            }
        }

        trace!("normalized {:?} -> {:?} in {} passes", text, normalized, passes);
        normalized
    }
}
