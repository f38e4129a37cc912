// Domain constants for the Russian internal passport.

/// Year the current passport blank was introduced; no series may predate it.
pub const BLANK_RELEASE_YEAR: i32 = 1997;

/// Series are sometimes printed against future quotas, up to this many years ahead.
pub const SERIES_FUTURE_QUOTA_YEARS: i32 = 5;

/// Youngest age (by calendar-year difference) at which a passport may be issued.
pub const MIN_ISSUE_AGE: i32 = 14;

/// Ages at which the passport must be replaced.
pub const AGE_20_PASSPORT_CHANGE: i32 = 20;
pub const AGE_45_PASSPORT_CHANGE: i32 = 45;

/// Days after a replacement birthday during which the old passport stays valid.
pub const PASSPORT_DAYS_VALIDITY: u64 = 91;

/// Minimum holder age accepted for a birth date.
pub const ADULT_AGE: i32 = 18;

pub const SERIES_LEN: usize = 4;
pub const NUMBER_LEN: usize = 6;
pub const ISSUER_CODE_GROUP_LEN: usize = 3;

/// Non-Cyrillic characters accepted in names. `I` and `V` appear in
/// Roman-numeral suffixes.
pub const NAME_ALLOWED_CHARACTERS: [char; 9] = ['-', ' ', '.', ',', 'I', 'V', '\'', '(', ')'];

/// A literal substitution applied until the text stops changing.
/// Every replacement is shorter than its pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizationRule {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl NormalizationRule {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        NormalizationRule {
            pattern,
            replacement,
        }
    }
}

/// Collapses repeated spaces and hyphens and strips spaces around hyphens.
pub const PLACE_OF_BIRTH_RULES: [NormalizationRule; 4] = [
    NormalizationRule::new("  ", " "),
    NormalizationRule::new("--", "-"),
    NormalizationRule::new(" -", "-"),
    NormalizationRule::new("- ", "-"),
];

/// Collapses repeated spaces, punctuation and quotes.
pub const ISSUED_BY_RULES: [NormalizationRule; 5] = [
    NormalizationRule::new("  ", " "),
    NormalizationRule::new("..", "."),
    NormalizationRule::new(",,", ","),
    NormalizationRule::new("\"\"", "\""),
    NormalizationRule::new("''", "'"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_shrink_text() {
        for rule in PLACE_OF_BIRTH_RULES.iter().chain(ISSUED_BY_RULES.iter()) {
            assert!(rule.replacement.len() < rule.pattern.len(), "{:?}", rule);
        }
    }
}
