//! Markup fragments for the landing page.
//!
//! Every free-text value (titles, excerpts, categories, queries, toast messages,
//! topic names) passes through [`escape_html`] before interpolation.

use super::page::{StatElement, ToastSlot, TopicCard};
use crate::app::ToastState;
use crate::ui::sanitize::escape_html;
use crate::ui::viewmodel::{FeaturedView, Suggestion};
use std::fmt::{self, Write};

pub fn write_head(out: &mut String, title: &str, redirect: Option<&str>) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    if let Some(href) = redirect {
        writeln!(
            out,
            "<meta http-equiv=\"refresh\" content=\"0; url={}\">",
            escape_html(href)
        )?;
    }
    writeln!(out, "<title>{}</title>", escape_html(title))?;
    writeln!(out, "<link rel=\"stylesheet\" href=\"styles.css\">")?;
    writeln!(out, "</head>")
}

pub fn write_hero(out: &mut String, title: &str, stats: &[StatElement]) -> fmt::Result {
    writeln!(out, "<header class=\"hero\">")?;
    writeln!(out, "<h1>{}</h1>", escape_html(title))?;
    writeln!(out, "<div class=\"stats\">")?;
    for stat in stats {
        write!(out, "<div class=\"stat\"><span class=\"stat-number\" data-stat=\"{}\"", stat.kind.as_str())?;
        if let Some(count) = stat.data_count {
            write!(out, " data-count=\"{count}\"")?;
        }
        writeln!(
            out,
            ">{}</span><span class=\"stat-label\">{}</span></div>",
            escape_html(&stat.text),
            stat.kind.label()
        )?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</header>")
}

pub fn write_search(out: &mut String, query: &str, suggestions: &[Suggestion]) -> fmt::Result {
    writeln!(out, "<section class=\"search\">")?;
    writeln!(
        out,
        "<input id=\"searchInput\" type=\"search\" placeholder=\"Search the archive\" value=\"{}\">",
        escape_html(query)
    )?;
    writeln!(out, "<button id=\"searchBtn\" class=\"search-btn\">Search</button>")?;
    if !suggestions.is_empty() {
        writeln!(out, "<div class=\"suggestions\">")?;
        for suggestion in suggestions {
            writeln!(
                out,
                "<span class=\"suggestion\" data-query=\"{}\">{}</span>",
                escape_html(&suggestion.query),
                escape_html(&suggestion.label)
            )?;
        }
        writeln!(out, "</div>")?;
    }
    writeln!(out, "</section>")
}

pub fn write_topics(out: &mut String, topics: &[TopicCard]) -> fmt::Result {
    if topics.is_empty() {
        return Ok(());
    }
    writeln!(out, "<section class=\"topics\">")?;
    for card in topics {
        writeln!(
            out,
            "<div class=\"topic-card\"><span class=\"topic-name\">{}</span><span class=\"topic-count\">{}</span></div>",
            escape_html(&card.name),
            escape_html(&card.count_text)
        )?;
    }
    writeln!(out, "</section>")
}

pub fn write_results(out: &mut String, featured: Option<&FeaturedView>) -> fmt::Result {
    writeln!(out, "<section id=\"results\">")?;
    writeln!(out, "<div id=\"featuredArticle\" class=\"featured-article\">")?;
    if let Some(view) = featured {
        write_featured(out, view)?;
    }
    writeln!(out, "</div>")?;
    writeln!(out, "</section>")
}

/// The featured card body.
pub fn write_featured(out: &mut String, view: &FeaturedView) -> fmt::Result {
    writeln!(out, "<div class=\"article-header\">")?;
    writeln!(out, "<div class=\"article-meta\">")?;
    writeln!(out, "<span class=\"article-category\">{}</span>", escape_html(&view.category))?;
    writeln!(
        out,
        "<span class=\"confidence-badge {}\">{}</span>",
        view.confidence_class.as_str(),
        escape_html(&view.badge_text())
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "<h3 class=\"article-title\">{}</h3>", escape_html(&view.title))?;
    writeln!(out, "<p class=\"article-excerpt\">{}</p>", escape_html(&view.excerpt))?;
    writeln!(out, "</div>")?;
    writeln!(out, "<div class=\"article-footer\">")?;
    writeln!(out, "<span class=\"article-sources\">{}</span>", escape_html(&view.sources_text))?;
    writeln!(
        out,
        "<a class=\"search-btn\" href=\"{}\">{}</a>",
        escape_html(&view.action.href),
        escape_html(&view.action.label)
    )?;
    writeln!(out, "</div>")
}

pub fn write_footer(out: &mut String, count: Option<&str>) -> fmt::Result {
    writeln!(out, "<footer>")?;
    write!(out, "<span id=\"footerArticleCount\">")?;
    if let Some(text) = count {
        write!(out, "{}", escape_html(text))?;
    }
    writeln!(out, "</span>")?;
    writeln!(out, "</footer>")
}

pub fn write_toast(out: &mut String, slot: &ToastSlot) -> fmt::Result {
    let phase = match slot.state {
        ToastState::Appearing => "appearing",
        ToastState::Visible => "visible",
        ToastState::Disappearing => "disappearing",
        ToastState::Absent => return Ok(()),
    };
    writeln!(
        out,
        "<div class=\"toast toast-{phase}\" role=\"status\" data-toast-id=\"{}\">{}</div>",
        slot.toast.id,
        escape_html(&slot.toast.message)
    )
}

pub fn write_scroll_script(out: &mut String) -> fmt::Result {
    writeln!(
        out,
        "<script>document.getElementById('results').scrollIntoView({{behavior: 'smooth'}});</script>"
    )
}
