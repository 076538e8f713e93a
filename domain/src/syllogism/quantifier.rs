//! Quantifier value object and the fixed phrase/symbol table

use crate::core::error::EncodeError;
use serde::{Deserialize, Serialize};

/// Generalized syllogistic quantifier (Value Object)
///
/// The ten phrases and their one-character symbols form a stable wire format
/// shared with every caller. Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use sylcode_domain::Quantifier;
///
/// let q: Quantifier = "Most not".parse().unwrap();
/// assert_eq!(q, Quantifier::MostNot);
/// assert_eq!(q.symbol(), 'D');
/// assert!("most not".parse::<Quantifier>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Quantifier {
    All,
    No,
    FewNot,
    Few,
    Most,
    MostNot,
    Many,
    ManyNot,
    Some,
    SomeNot,
}

/// Phrase and symbol of every quantifier, in canonical order
const TABLE: [(Quantifier, &str, char); 10] = [
    (Quantifier::All, "All", 'A'),
    (Quantifier::No, "No", 'E'),
    (Quantifier::FewNot, "Few not", 'P'),
    (Quantifier::Few, "Few", 'B'),
    (Quantifier::Most, "Most", 'T'),
    (Quantifier::MostNot, "Most not", 'D'),
    (Quantifier::Many, "Many", 'K'),
    (Quantifier::ManyNot, "Many not", 'G'),
    (Quantifier::Some, "Some", 'I'),
    (Quantifier::SomeNot, "Some not", 'O'),
];

impl Quantifier {
    /// All quantifiers in canonical table order
    pub const ALL: [Quantifier; 10] = [
        Quantifier::All,
        Quantifier::No,
        Quantifier::FewNot,
        Quantifier::Few,
        Quantifier::Most,
        Quantifier::MostNot,
        Quantifier::Many,
        Quantifier::ManyNot,
        Quantifier::Some,
        Quantifier::SomeNot,
    ];

    fn entry(self) -> (Quantifier, &'static str, char) {
        TABLE[self as usize]
    }

    /// The natural-language phrase (e.g., "Few not")
    pub fn phrase(self) -> &'static str {
        self.entry().1
    }

    /// The single-character encoding symbol (e.g., 'P')
    pub fn symbol(self) -> char {
        self.entry().2
    }

    /// Look up a quantifier by its encoding symbol
    pub fn from_symbol(symbol: char) -> Option<Self> {
        TABLE
            .iter()
            .find(|(_, _, s)| *s == symbol)
            .map(|(q, _, _)| *q)
    }
}

/// Look up the symbol for a quantifier phrase
pub fn symbol_of(phrase: &str) -> Result<char, EncodeError> {
    phrase.parse::<Quantifier>().map(Quantifier::symbol)
}

impl std::fmt::Display for Quantifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.phrase())
    }
}

impl std::str::FromStr for Quantifier {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TABLE
            .iter()
            .find(|(_, phrase, _)| *phrase == s)
            .map(|(q, _, _)| *q)
            .ok_or_else(|| EncodeError::unknown_quantifier(s))
    }
}

impl TryFrom<String> for Quantifier {
    type Error = EncodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Quantifier> for String {
    fn from(value: Quantifier) -> Self {
        value.phrase().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_of_every_phrase() {
        let expected = [
            ("All", 'A'),
            ("No", 'E'),
            ("Few not", 'P'),
            ("Few", 'B'),
            ("Most", 'T'),
            ("Most not", 'D'),
            ("Many", 'K'),
            ("Many not", 'G'),
            ("Some", 'I'),
            ("Some not", 'O'),
        ];
        for (phrase, symbol) in expected {
            assert_eq!(symbol_of(phrase).unwrap(), symbol, "phrase {phrase}");
        }
    }

    #[test]
    fn test_unknown_phrase_fails() {
        assert_eq!(
            symbol_of("Several"),
            Err(EncodeError::unknown_quantifier("Several"))
        );
        // Case and spacing are significant
        assert!(symbol_of("all").is_err());
        assert!(symbol_of("Some  not").is_err());
        assert!(symbol_of("").is_err());
    }

    #[test]
    fn test_table_order_matches_variants() {
        for (i, q) in Quantifier::ALL.iter().enumerate() {
            assert_eq!(TABLE[i].0, *q);
        }
    }

    #[test]
    fn test_symbols_are_unique() {
        for q in Quantifier::ALL {
            assert_eq!(Quantifier::from_symbol(q.symbol()), Some(q));
        }
        assert_eq!(Quantifier::from_symbol('Z'), None);
    }

    #[test]
    fn test_display_is_phrase() {
        assert_eq!(Quantifier::SomeNot.to_string(), "Some not");
        assert_eq!(Quantifier::All.to_string(), "All");
    }

    #[test]
    fn test_serde_uses_phrase() {
        let json = serde_json::to_string(&Quantifier::ManyNot).unwrap();
        assert_eq!(json, "\"Many not\"");

        let parsed: Quantifier = serde_json::from_str("\"Few\"").unwrap();
        assert_eq!(parsed, Quantifier::Few);

        assert!(serde_json::from_str::<Quantifier>("\"Several\"").is_err());
    }
}
