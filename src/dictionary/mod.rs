//! Dictionary lookup
//!
//! Deciding whether a candidate is a real word is delegated to a `Dictionary`.
//! The bundled implementation is a static word list; any closure of the form
//! `Fn(&str, &str) -> bool` works too, so a platform spell checker can be
//! plugged in per language.

mod word_list;

pub use word_list::WordListDictionary;

/// Default language tag for the bundled dictionary
pub const DEFAULT_LANGUAGE: &str = "en";

/// A word validity lookup for one or more languages
pub trait Dictionary {
    /// Check whether `word` is a correctly spelled word in `language`
    ///
    /// Lookups are case-insensitive and exact: no partial or fuzzy matches.
    fn is_valid_word(&self, word: &str, language: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str, &str) -> bool,
{
    fn is_valid_word(&self, word: &str, language: &str) -> bool {
        self(word, language)
    }
}

/// Compare language tags by their primary subtag, case-insensitively
///
/// `en`, `EN` and `en-GB` all match each other; `en` and `fr` do not.
#[must_use]
pub fn same_language(a: &str, b: &str) -> bool {
    fn primary(tag: &str) -> &str {
        tag.split(['-', '_']).next().unwrap_or(tag)
    }
    primary(a).eq_ignore_ascii_case(primary(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<D: Dictionary + ?Sized>(dictionary: &D, word: &str) -> bool {
        dictionary.is_valid_word(word, DEFAULT_LANGUAGE)
    }

    #[test]
    fn closure_is_a_dictionary() {
        let dictionary = |word: &str, _language: &str| word == "pain";
        assert!(lookup(&dictionary, "pain"));
        assert!(!lookup(&dictionary, "pian"));
    }

    #[test]
    fn trait_object_dispatch() {
        let dictionary: Box<dyn Dictionary> = Box::new(|word: &str, language: &str| {
            language == "fr" && word == "pain"
        });
        assert!(!lookup(dictionary.as_ref(), "pain"));
        assert!(dictionary.is_valid_word("pain", "fr"));
    }

    #[test]
    fn language_tags_match_on_primary_subtag() {
        assert!(same_language("en", "en"));
        assert!(same_language("en", "EN"));
        assert!(same_language("en-GB", "en_US"));
        assert!(!same_language("en", "fr"));
        assert!(!same_language("en", ""));
    }
}
