use unicode_script::{Script, UnicodeScript};

use crate::models::rules::NAME_ALLOWED_CHARACTERS;

pub fn is_cyrillic(c: char) -> bool {
    c.script() == Script::Cyrillic
}

/// A character may appear in a name if it is Cyrillic or one of the
/// allowed punctuation marks.
pub fn is_name_char(c: char) -> bool {
    is_cyrillic(c) || NAME_ALLOWED_CHARACTERS.contains(&c)
}

/// First character that may not appear in a name, scanning left to right.
pub fn first_disallowed_char(text: &str) -> Option<char> {
    text.chars().find(|&c| !is_name_char(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyrillic_letters() {
        for c in "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯабвгдеёжзийклмнопрстуфхцчшщъыьэюя".chars() {
            assert!(is_cyrillic(c), "{} should be Cyrillic", c);
        }
        // Ukrainian and Serbian letters are Cyrillic script too
        assert!(is_cyrillic('ї'));
        assert!(is_cyrillic('ђ'));
    }

    #[test]
    fn test_lookalike_latin_is_not_cyrillic() {
        // Latin A, C, E, O, X look like Cyrillic А, С, Е, О, Х
        for c in "ACEOXaceox".chars() {
            assert!(!is_cyrillic(c), "{} should not be Cyrillic", c);
        }
    }

    #[test]
    fn test_allowed_punctuation() {
        for c in "- .,IV'()".chars() {
            assert!(is_name_char(c), "{:?} should be allowed", c);
        }
        for c in "XL4_\t!\"".chars() {
            assert!(!is_name_char(c), "{:?} should not be allowed", c);
        }
    }

    #[test]
    fn test_first_disallowed_char() {
        assert_eq!(first_disallowed_char("Иванов"), None);
        assert_eq!(first_disallowed_char("Иванов XV"), Some('X'));
        assert_eq!(first_disallowed_char("Алекс4ндрови4"), Some('4'));
    }
}
