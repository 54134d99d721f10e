//! YAML frontmatter parsing for markdown documents.
//!
//! Frontmatter is optional metadata at the start of a markdown file, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: My Document
//! tags: [rust, tutorial]
//! ---
//!
//! # Content starts here
//! ```

use std::collections::HashMap;

use serde::Deserialize;

/// Parsed frontmatter from a markdown document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Frontmatter {
    /// Document title.
    pub title: Option<String>,
    /// Short description shown alongside search results.
    #[serde(default)]
    pub description: Option<String>,
    /// Document tags (supports both array and Obsidian-style inline tags).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Arbitrary facet key -> ordered list of values, merged into the
    /// document's facets on top of the automatically derived ones.
    #[serde(default)]
    pub facets: HashMap<String, Vec<String>>,
}

/// Parses YAML frontmatter from markdown content.
///
/// Returns the parsed frontmatter (if valid) and the remaining content after the frontmatter.
/// If no frontmatter is present or it's malformed, returns `None` and the original content.
///
/// Frontmatter must:
/// - Start at the beginning of the content
/// - Be delimited by `---` on its own line
/// - Contain valid YAML
pub fn parse_frontmatter(content: &str) -> (Option<Frontmatter>, &str) {
    // Frontmatter must start with ---
    let content = content.trim_start_matches('\u{feff}'); // Strip BOM if present
    if !content.starts_with("---") {
        return (None, content);
    }

    // Find the closing ---
    let after_opening = &content[3..];
    let after_opening = after_opening
        .strip_prefix('\n')
        .unwrap_or(after_opening.strip_prefix("\r\n").unwrap_or(after_opening));

    // Look for closing delimiter
    let closing_pos = find_closing_delimiter(after_opening);
    let Some(closing_pos) = closing_pos else {
        // No closing delimiter found
        return (None, content);
    };

    let yaml_content = &after_opening[..closing_pos];
    let remaining = &after_opening[closing_pos..];

    // Skip the closing --- and any immediately following blank line
    let remaining = remaining.strip_prefix("---").unwrap_or(remaining);
    let remaining = remaining
        .strip_prefix("\r\n")
        .or_else(|| remaining.strip_prefix('\n'))
        .unwrap_or(remaining);
    // Strip one more blank line if present (common pattern: --- followed by blank line before content)
    let remaining = remaining
        .strip_prefix("\r\n")
        .or_else(|| remaining.strip_prefix('\n'))
        .unwrap_or(remaining);

    // Parse the YAML
    match serde_yaml::from_str::<Frontmatter>(yaml_content) {
        Ok(fm) => (Some(fm), remaining),
        Err(_) => (None, content), // Malformed YAML, return original content
    }
}

/// Finds the position of the closing `---` delimiter.
///
/// The delimiter must be at the start of a line.
fn find_closing_delimiter(content: &str) -> Option<usize> {
    let mut pos = 0;
    for line in content.lines() {
        if line == "---" {
            return Some(pos);
        }
        pos += line.len() + 1; // +1 for newline (approximate, handles both \n and \r\n)
    }
    None
}
