//! Tokenization and stemming shared by indexing and querying.
//!
//! The same tokenizer and stemmer must run at index time and at query time:
//! any divergence between the two would make indexed terms unmatchable by
//! otherwise-identical query terms.

/// Minimum token length retained after splitting.
const MIN_TOKEN_LEN: usize = 2;

/// Minimum length a token must have before stemming is attempted.
const MIN_STEM_LEN: usize = 4;

/// Lowercases `input`, keeps letters/digits/`_`/`-`/`.`/`/` as intra-token
/// characters, splits on everything else, and discards tokens shorter than
/// [`MIN_TOKEN_LEN`].
pub fn tokenize(input: &str) -> Vec<String> {
    let lowered = input.to_lowercase();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in lowered.chars() {
        if is_intra_token(c) {
            current.push(c);
        } else if !current.is_empty() {
            push_token(&mut tokens, std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, current);
    }

    tokens
}

fn is_intra_token(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '/')
}

fn push_token(tokens: &mut Vec<String>, token: String) {
    if token.chars().count() >= MIN_TOKEN_LEN {
        tokens.push(token);
    }
}

/// Tokenizes then stems every resulting token.
pub fn tokenize_and_stem(input: &str) -> Vec<String> {
    tokenize(input).into_iter().map(|t| stem(&t)).collect()
}

/// Applies the deterministic suffix-rewrite stemmer.
///
/// Rules apply only to tokens of length >= [`MIN_STEM_LEN`], in this fixed
/// order: `ies -> y`, `ied -> y`, trailing `s`/`es` removed, `ing` removed
/// only when the remaining stem is longer than 4 characters, then the
/// suffixes `tion -> t`, `ment`, `ness`, `able`, `ible`, `ally`, `ful`,
/// `ous`, `ive`, `ly` are stripped if present.
pub fn stem(token: &str) -> String {
    if token.chars().count() < MIN_STEM_LEN {
        return token.to_string();
    }

    let mut s = token.to_string();

    if let Some(stripped) = s.strip_suffix("ies") {
        s = format!("{stripped}y");
    } else if let Some(stripped) = s.strip_suffix("ied") {
        s = format!("{stripped}y");
    } else if let Some(stripped) = s.strip_suffix("es") {
        s = stripped.to_string();
    } else if let Some(stripped) = s.strip_suffix('s') {
        if !s.ends_with("ss") {
            s = stripped.to_string();
        }
    }

    if let Some(stripped) = s.strip_suffix("ing") {
        if stripped.chars().count() > 4 {
            s = stripped.to_string();
        }
    }

    for (suffix, replacement) in [
        ("tion", "t"),
        ("ment", ""),
        ("ness", ""),
        ("able", ""),
        ("ible", ""),
        ("ally", ""),
        ("ful", ""),
        ("ous", ""),
        ("ive", ""),
        ("ly", ""),
    ] {
        if let Some(stripped) = s.strip_suffix(suffix) {
            s = format!("{stripped}{replacement}");
            break;
        }
    }

    s
}

/// A fenced code region delimiter used to mark code spans within section
/// bodies, e.g. `[code:rust]`.
const CODE_FENCE_PREFIX: &str = "[code:";

/// Returns the set of stemmed tokens that occur inside fenced code regions
/// of `body`. A region starts at a line beginning with [`CODE_FENCE_PREFIX`]
/// and ends at the next blank line or the next fence line, whichever comes
/// first.
pub fn code_tokens(body: &str) -> std::collections::HashSet<String> {
    let mut in_fence = false;
    let mut tokens = std::collections::HashSet::new();

    for line in body.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with(CODE_FENCE_PREFIX) {
            in_fence = true;
            continue;
        }
        if in_fence && trimmed.is_empty() {
            in_fence = false;
            continue;
        }
        if in_fence {
            tokens.extend(tokenize_and_stem(line));
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Token Refresh Flow!"),
            vec!["token", "refresh", "flow"]
        );
    }

    #[test]
    fn tokenize_keeps_intra_token_punctuation() {
        assert_eq!(
            tokenize("foo_bar-baz.rs/mod"),
            vec!["foo_bar-baz.rs/mod"]
        );
    }

    #[test]
    fn tokenize_discards_short_tokens() {
        assert_eq!(tokenize("a an the I"), vec!["an", "the"]);
    }

    #[test]
    fn stem_ies_to_y() {
        assert_eq!(stem("policies"), "policy");
    }

    #[test]
    fn stem_ied_to_y() {
        assert_eq!(stem("tried"), "try");
    }

    #[test]
    fn stem_trailing_s() {
        assert_eq!(stem("tokens"), "token");
        assert_eq!(stem("boss"), "boss");
    }

    #[test]
    fn stem_trailing_es() {
        assert_eq!(stem("matches"), "match");
    }

    #[test]
    fn stem_ing_requires_remaining_length() {
        assert_eq!(stem("processing"), "process");
        assert_eq!(stem("running"), "running");
        assert_eq!(stem("ping"), "ping");
    }

    #[test]
    fn stem_suffix_chain() {
        assert_eq!(stem("authentication"), "authenticat");
        assert_eq!(stem("refreshment"), "refresh");
        assert_eq!(stem("readiness"), "readi");
        assert_eq!(stem("capable"), "cap");
        assert_eq!(stem("terrible"), "terr");
        assert_eq!(stem("magically"), "magic");
        assert_eq!(stem("helpful"), "help");
        assert_eq!(stem("dangerous"), "dangerou");
        assert_eq!(stem("active"), "act");
        assert_eq!(stem("quickly"), "quick");
    }

    #[test]
    fn stem_short_tokens_unchanged() {
        assert_eq!(stem("ids"), "ids");
        assert_eq!(stem("go"), "go");
    }

    #[test]
    fn tokenize_and_stem_applies_stemmer_to_each() {
        assert_eq!(
            tokenize_and_stem("Token Refresh Flow"),
            vec!["token", "refresh", "flow"]
        );
    }

    #[test]
    fn code_tokens_only_from_fenced_regions() {
        let body = "See below\n[code:rust]\nfn get_user(id: Id) {}\n\nMore prose about users.";
        let tokens = code_tokens(body);
        assert!(tokens.contains("get_user") || tokens.contains("fn"));
        assert!(!tokens.contains("prose"));
    }

    #[test]
    fn code_tokens_closes_on_next_fence() {
        let body = "[code:rust]\nstruct Foo;\n[code:python]\ndef bar(): pass\n";
        let tokens = code_tokens(body);
        assert!(tokens.contains("struct"));
        assert!(tokens.contains("def"));
    }
}
