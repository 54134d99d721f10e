//! Density-window snippet extraction.

/// Default maximum snippet length, in characters.
pub const DEFAULT_SNIPPET_LEN: usize = 180;

/// Builds a snippet around the densest cluster of match positions.
///
/// `positions` are word offsets into the section's title+body token stream;
/// `title_token_count` is subtracted so they line up with `body` split on
/// whitespace (title matches don't correspond to a body word and are
/// dropped). `body` is the section's raw, pre-tokenization text.
pub fn build_snippet(
    body: &str,
    title: &str,
    title_token_count: usize,
    positions: &[usize],
    max_len: usize,
) -> String {
    let words: Vec<&str> = body.split_whitespace().collect();
    if words.is_empty() {
        return truncate(title, max_len);
    }

    let body_positions: Vec<usize> = positions
        .iter()
        .filter_map(|&p| p.checked_sub(title_token_count))
        .filter(|&p| p < words.len())
        .collect();

    if body_positions.is_empty() {
        let joined = words.join(" ");
        return truncate(&joined, max_len);
    }

    let window = (max_len / 6).max(10);
    let window = window.min(words.len());

    let mut best_start = 0;
    let mut best_count = -1isize;
    for start in 0..=(words.len() - window) {
        let end = start + window;
        let count = body_positions
            .iter()
            .filter(|&&p| p >= start && p < end)
            .count() as isize;
        if count > best_count {
            best_count = count;
            best_start = start;
        }
    }

    let end = (best_start + window).min(words.len());
    let mut snippet = words[best_start..end].join(" ");

    if snippet.chars().count() > max_len {
        let len = snippet.len();
        let cutoff = ((max_len * 7) / 10).min(len);
        let window_end = max_len.min(len);
        if let Some(trim_at) = snippet[cutoff..window_end].rfind(char::is_whitespace) {
            snippet.truncate(cutoff + trim_at);
        } else {
            snippet = snippet.chars().take(max_len).collect();
        }
    }

    if best_start > 0 {
        snippet = format!("…{snippet}");
    }
    if end < words.len() {
        snippet = format!("{snippet}…");
    }

    snippet
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_len).collect();
    format!("{truncated}…")
}
