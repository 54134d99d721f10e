//! GitHub-compatible heading slug generation.
//!
//! Slugs are used to generate unique, stable identifiers for headings in markdown documents.
//! The algorithm follows GitHub's conventions:
//! - Lowercase the text
//! - Remove punctuation except hyphens and spaces
//! - Replace spaces with hyphens
//! - Collapse consecutive hyphens
//! - Trim leading/trailing hyphens
//! - Append `-N` suffix for duplicate slugs

use std::collections::HashMap;

/// Generates URL-compatible slugs from heading text.
///
/// Tracks previously generated slugs to ensure uniqueness by appending
/// numeric suffixes to duplicates.
#[derive(Debug, Default)]
pub struct Slugifier {
    /// Count of how many times each base slug has been used.
    counts: HashMap<String, usize>,
}

impl Slugifier {
    /// Creates a new slugifier with no prior slugs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates a GitHub-compatible slug from heading text.
    ///
    /// The algorithm:
    /// 1. Convert to lowercase
    /// 2. Remove all characters except alphanumeric, hyphens, spaces, and underscores
    /// 3. Replace spaces with hyphens
    /// 4. Collapse consecutive hyphens into one
    /// 5. Trim leading and trailing hyphens
    /// 6. If empty, use "heading"
    /// 7. Append `-N` for duplicates (N starts at 1)
    pub fn slugify(&mut self, heading: &str) -> String {
        let base = Self::make_base_slug(heading);
        self.deduplicate(base)
    }

    /// Creates the base slug without deduplication.
    fn make_base_slug(heading: &str) -> String {
        let slug: String = heading
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' {
                    c.to_ascii_lowercase()
                } else if c == ' ' || c == '-' {
                    '-'
                } else {
                    // Remove other characters (punctuation, non-ASCII)
                    '\0'
                }
            })
            .filter(|&c| c != '\0')
            .collect();

        // Collapse consecutive hyphens
        let mut result = String::with_capacity(slug.len());
        let mut prev_hyphen = false;
        for c in slug.chars() {
            if c == '-' {
                if !prev_hyphen {
                    result.push('-');
                }
                prev_hyphen = true;
            } else {
                result.push(c);
                prev_hyphen = false;
            }
        }

        // Trim leading/trailing hyphens
        let result = result.trim_matches('-');

        if result.is_empty() {
            "heading".to_string()
        } else {
            result.to_string()
        }
    }

    /// Ensures the slug is unique, appending `-N` suffix if needed.
    fn deduplicate(&mut self, base: String) -> String {
        let count = self.counts.entry(base.clone()).or_insert(0);
        *count += 1;

        if *count == 1 {
            base
        } else {
            format!("{}-{}", base, *count - 1)
        }
    }
}
