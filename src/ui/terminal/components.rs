//! Terminal block renderers.
//!
//! Each function writes one self-contained block and leaves styling reset
//! afterwards. Text is printed raw; the terminal has no markup to escape.

use crate::domain::StatKind;
use crate::ui::helpers::{center, highlighted_text, wrap_text};
use crate::ui::html::TopicCard;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FeaturedView, ToastView};
use std::io::{self, Write};

/// Writes the centred title bar.
///
/// Padding is split evenly on both sides; the left side takes the odd column.
///
/// ```text
/// [left padding] TITLE [right padding]
/// ```
pub fn render_header<W: Write>(out: &mut W, title: &str, theme: &Theme, cols: usize) -> io::Result<()> {
    write!(out, "{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg))?;
    if let Some(bg) = &theme.colors.header_bg {
        write!(out, "{}", Theme::bg(bg))?;
    }
    writeln!(out, "{}{}", center(title, cols), Theme::reset())
}

/// Formats the stat counters on one line.
#[must_use]
pub fn stats_line(values: &[(StatKind, u64)], theme: &Theme) -> String {
    StatKind::ALL
        .iter()
        .map(|&kind| {
            let value = values
                .iter()
                .find(|(k, _)| *k == kind)
                .map_or(0, |&(_, v)| v);
            format!(
                "{}{}{}{} {}{}{}",
                Theme::bold(),
                Theme::fg(&theme.colors.counter_fg),
                crate::ui::format::group_thousands(value),
                Theme::reset(),
                Theme::fg(&theme.colors.text_dim),
                kind.label(),
                Theme::reset()
            )
        })
        .collect::<Vec<_>>()
        .join("   ")
}

/// Writes one counter frame over the current line.
pub fn render_counter_frame<W: Write>(out: &mut W, values: &[(StatKind, u64)], theme: &Theme) -> io::Result<()> {
    write!(out, "\r  {}", stats_line(values, theme))?;
    out.flush()
}

/// Writes the final counter line and the footer sentence.
pub fn render_stats<W: Write>(
    out: &mut W,
    values: &[(StatKind, u64)],
    footer: &str,
    theme: &Theme,
) -> io::Result<()> {
    writeln!(out, "\r  {}", stats_line(values, theme))?;
    writeln!(
        out,
        "  {}{footer}{}",
        Theme::fg(&theme.colors.text_dim),
        Theme::reset()
    )
}

/// Writes the topic list, one card per line.
pub fn render_topics<W: Write>(out: &mut W, topics: &[TopicCard], theme: &Theme) -> io::Result<()> {
    if topics.is_empty() {
        return Ok(());
    }
    let width = topics.iter().map(|t| t.name.chars().count()).max().unwrap_or(0);
    writeln!(out)?;
    for card in topics {
        let pad = width - card.name.chars().count();
        writeln!(
            out,
            "  {}{}{}{}  {}{}{}",
            Theme::fg(&theme.colors.category_fg),
            card.name,
            Theme::reset(),
            " ".repeat(pad),
            Theme::fg(&theme.colors.text_dim),
            card.count_text,
            Theme::reset()
        )?;
    }
    Ok(())
}

/// Writes a horizontal rule with an optional label.
pub fn render_rule<W: Write>(out: &mut W, label: &str, theme: &Theme, cols: usize) -> io::Result<()> {
    let label = if label.is_empty() { String::new() } else { format!(" {label} ") };
    let fill = cols.saturating_sub(label.chars().count() + 2);
    writeln!(
        out,
        "{}──{label}{}{}",
        Theme::fg(&theme.colors.border),
        "─".repeat(fill),
        Theme::reset()
    )
}

/// Writes the featured article card.
///
/// ```text
/// CATEGORY  [87% Confidence]
/// Title with highlighted matches
/// excerpt, wrapped to the terminal width
/// 12 verified sources · Read Article → article.html?slug=...
/// ```
pub fn render_featured<W: Write>(out: &mut W, view: &FeaturedView, theme: &Theme, cols: usize) -> io::Result<()> {
    let body_width = cols.saturating_sub(4).max(20);

    writeln!(
        out,
        "  {}{}{}  {}[{}]{}",
        Theme::fg(&theme.colors.category_fg),
        view.category.to_uppercase(),
        Theme::reset(),
        Theme::fg(theme.colors.badge(view.confidence_class)),
        view.badge_text(),
        Theme::reset()
    )?;

    let base = &theme.colors.text_normal;
    writeln!(
        out,
        "  {}{}{}{}",
        Theme::bold(),
        Theme::fg(base),
        highlighted_text(&view.title, &view.title_highlights, theme, base),
        Theme::reset()
    )?;

    for line in wrap_text(&view.excerpt, body_width) {
        writeln!(out, "  {}{line}{}", Theme::fg(base), Theme::reset())?;
    }

    writeln!(
        out,
        "  {}{}{} · {}{} → {}{}",
        Theme::fg(&theme.colors.text_dim),
        view.sources_text,
        Theme::reset(),
        Theme::fg(&theme.colors.link_fg),
        view.action.label,
        view.action.href,
        Theme::reset()
    )
}

/// Writes a toast box.
pub fn render_toast<W: Write>(out: &mut W, toast: &ToastView, theme: &Theme) -> io::Result<()> {
    writeln!(
        out,
        "{}{} {} {}",
        Theme::fg(&theme.colors.toast_fg),
        Theme::bg(&theme.colors.toast_bg),
        toast.message,
        Theme::reset()
    )
}
