//! Shared terminal rendering utilities.
//!
//! Match highlighting with proper ANSI reset handling, word wrapping for card
//! bodies, and centring for header lines. All functions operate on character
//! indices, not byte indices.

use crate::ui::theme::Theme;

/// Renders text with highlighted character ranges.
///
/// `ranges` are `(start, end)` character indices with exclusive end, sorted and
/// non-overlapping. After each highlight the `base_fg` colour is restored.
///
/// # Example
///
/// ```rust
/// use archive_front::ui::helpers::highlighted_text;
/// use archive_front::ui::Theme;
///
/// let theme = Theme::default();
/// let plain = highlighted_text("ai ethics", &[], &theme, &theme.colors.text_normal);
/// assert_eq!(plain, "ai ethics");
/// ```
#[must_use]
pub fn highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, base_fg: &str) -> String {
    if ranges.is_empty() {
        return text.to_string();
    }

    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() * 2);
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len()).max(current_pos);
        let end = end.min(chars.len());
        if end <= start {
            continue;
        }
        if start > current_pos {
            out.extend(&chars[current_pos..start]);
        }

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(base_fg));

        current_pos = end;
    }

    if current_pos < chars.len() {
        out.extend(&chars[current_pos..]);
    }
    out
}

/// Greedy word wrap to `width` characters. Words longer than a line are split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > width && line_len > 0 {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Centres `text` in `cols` columns, left padding taking the odd column.
#[must_use]
pub fn center(text: &str, cols: usize) -> String {
    let len = text.chars().count().min(cols);
    let padding = cols.saturating_sub(len) / 2;
    let right = cols.saturating_sub(padding + len);
    format!("{}{text}{}", " ".repeat(padding), " ".repeat(right))
}
