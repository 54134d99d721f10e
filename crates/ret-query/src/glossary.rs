//! Bidirectional term/phrase expansion table used to broaden queries.

use std::collections::HashMap;

use crate::tokenizer::tokenize_and_stem;

/// Maps a term to the phrases it should expand to at query time.
///
/// Loading is always bidirectional: registering `a -> [b]` also registers
/// `b -> [a]`, so a query for either side of the pair matches documents
/// that only contain the other.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    expansions: HashMap<String, Vec<String>>,
}

impl Glossary {
    /// Creates an empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the glossary contents with `entries`, registering each
    /// `term -> [phrase, ...]` mapping and its reverse.
    pub fn load(&mut self, entries: &HashMap<String, Vec<String>>) {
        self.expansions.clear();
        for (term, phrases) in entries {
            for phrase in phrases {
                self.add_pair(term, phrase);
            }
        }
    }

    /// Registers a single bidirectional term <-> phrase pair.
    ///
    /// Expansion lookups happen per stemmed token (queries arrive already
    /// tokenized), so each side is also registered under every stemmed
    /// token of the *other* side — otherwise a query for the multi-word
    /// side would never hit the single-token key the short side is stored
    /// under.
    pub fn add_pair(&mut self, a: &str, b: &str) {
        let a = a.to_lowercase();
        let b = b.to_lowercase();
        Self::push_unique(&mut self.expansions, &a, &b);
        Self::push_unique(&mut self.expansions, &b, &a);
        for tok in tokenize_and_stem(&b) {
            Self::push_unique(&mut self.expansions, &tok, &a);
        }
        for tok in tokenize_and_stem(&a) {
            Self::push_unique(&mut self.expansions, &tok, &b);
        }
    }

    fn push_unique(map: &mut HashMap<String, Vec<String>>, key: &str, value: &str) {
        let entry = map.entry(key.to_string()).or_default();
        if !entry.iter().any(|v| v == value) {
            entry.push(value.to_string());
        }
    }

    /// Returns the raw expansion phrases registered for `term`, if any.
    pub fn expansions_for(&self, term: &str) -> Option<&[String]> {
        self.expansions.get(term).map(Vec::as_slice)
    }

    /// Expands a tokenized+stemmed set of query terms.
    ///
    /// For each original term, every registered expansion phrase is itself
    /// tokenized and stemmed, and the resulting tokens are unioned into the
    /// returned set (deduplicated). The original terms are always present.
    pub fn expand(&self, original_terms: &[String]) -> Vec<String> {
        let mut expanded: Vec<String> = original_terms.to_vec();
        for term in original_terms {
            if let Some(phrases) = self.expansions.get(term) {
                for phrase in phrases {
                    for tok in tokenize_and_stem(phrase) {
                        if !expanded.contains(&tok) {
                            expanded.push(tok);
                        }
                    }
                }
            }
        }
        expanded
    }

    /// Expands a tokenized+stemmed set of query terms, pairing each
    /// resulting term with the original term whose entry produced it.
    ///
    /// The original terms are always present, paired with themselves.
    /// Callers that need to score or count matches against the terms the
    /// user actually typed (rather than the fully expanded set) should use
    /// the second element of each pair instead of the first.
    pub fn expand_with_origins(&self, original_terms: &[String]) -> Vec<(String, String)> {
        let mut expanded: Vec<(String, String)> = Vec::new();
        for term in original_terms {
            if !expanded.iter().any(|(t, _)| t == term) {
                expanded.push((term.clone(), term.clone()));
            }
            if let Some(phrases) = self.expansions.get(term) {
                for phrase in phrases {
                    for tok in tokenize_and_stem(phrase) {
                        if !expanded.iter().any(|(t, _)| t == &tok) {
                            expanded.push((tok, term.clone()));
                        }
                    }
                }
            }
        }
        expanded
    }

    /// Returns true if the glossary has no entries.
    pub fn is_empty(&self) -> bool {
        self.expansions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_pair_is_bidirectional() {
        let mut g = Glossary::new();
        g.add_pair("cli", "command line interface");
        assert_eq!(
            g.expansions_for("cli"),
            Some(&["command line interface".to_string()][..])
        );
        assert_eq!(
            g.expansions_for("command line interface"),
            Some(&["cli".to_string()][..])
        );
    }

    #[test]
    fn load_replaces_existing_entries() {
        let mut g = Glossary::new();
        g.add_pair("a", "b");
        let mut entries = HashMap::new();
        entries.insert("cli".to_string(), vec!["command line interface".to_string()]);
        g.load(&entries);
        assert!(g.expansions_for("a").is_none());
        assert!(g.expansions_for("cli").is_some());
    }

    #[test]
    fn expand_unions_stemmed_phrase_tokens() {
        let mut g = Glossary::new();
        g.add_pair("cli", "command line interface");
        let original = tokenize_and_stem("cli");
        let expanded = g.expand(&original);
        assert!(expanded.contains(&"command".to_string()));
        assert!(expanded.contains(&"line".to_string()));
        assert!(expanded.contains(&"interface".to_string()));
        assert!(expanded.contains(&"cli".to_string()));
    }

    #[test]
    fn expand_without_glossary_entry_returns_original() {
        let g = Glossary::new();
        let original = tokenize_and_stem("token refresh");
        assert_eq!(g.expand(&original), original);
    }

    #[test]
    fn glossary_symmetry_matches_both_queries() {
        let mut g = Glossary::new();
        g.add_pair("CLI", "command line interface");
        let from_short = g.expand(&tokenize_and_stem("CLI"));
        let from_long = g.expand(&tokenize_and_stem("command line interface"));
        assert!(from_short.iter().any(|t| t == "command"));
        assert!(from_long.iter().any(|t| t == "cli"));
    }
}
