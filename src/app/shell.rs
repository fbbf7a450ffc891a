//! Interactive search session over a line-oriented input.
//!
//! Input lines become events; a clock interval keeps the toast slot moving
//! between lines, so a toast leaves the screen on its own.
//!
//! # Input
//!
//! - any text: search for it
//! - `:open`: open the featured article
//! - `:s N`: choose suggestion chip N (1-based)
//! - `:q` / `:quit`: end the session

use crate::app::actions::Action;
use crate::app::handler::{handle_event, Event};
use crate::app::state::AppState;
use crate::domain::error::Result;
use crate::ui::presenter::{apply_actions, Presenter};
use crate::ui::viewmodel::Suggestion;
use chrono::Utc;
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::MissedTickBehavior;

/// How often the session advances the toast slot without input.
pub const TICK_INTERVAL_MS: u64 = 50;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Blank,
    Quit,
    OpenFeatured,
    /// Zero-based chip index; `None` when the number is not a valid chip.
    Suggestion(Option<usize>),
    Search(String),
}

impl Command {
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        match input {
            "" => Self::Blank,
            ":q" | ":quit" => Self::Quit,
            ":open" => Self::OpenFeatured,
            _ => match input.strip_prefix(":s ") {
                Some(n) => Self::Suggestion(
                    n.trim().parse::<usize>().ok().and_then(|n| n.checked_sub(1)),
                ),
                None => Self::Search(input.to_string()),
            },
        }
    }
}

/// Runs the session until `:q` or end of input.
///
/// Toast phases advance every `tick_every`, whether or not a line arrived.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the presenter fails.
pub async fn run_shell<R>(
    state: &mut AppState,
    presenter: &mut dyn Presenter,
    input: R,
    suggestions: &[Suggestion],
    tick_every: Duration,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    let mut ticks = tokio::time::interval(tick_every);
    ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticks.tick() => {
                let actions = handle_event(state, &Event::Tick, Utc::now());
                apply_actions(presenter, &actions).await?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::debug!("input closed, ending session");
                    break;
                };
                let Some(actions) = handle_line(state, &line, suggestions) else {
                    break;
                };
                apply_actions(presenter, &actions).await?;
            }
        }
    }
    Ok(())
}

/// Actions for one input line, or `None` to quit.
fn handle_line(
    state: &mut AppState,
    line: &str,
    suggestions: &[Suggestion],
) -> Option<Vec<Action>> {
    let now = Utc::now();
    let mut actions = handle_event(state, &Event::Tick, now);

    let event = match Command::parse(line) {
        Command::Quit => return None,
        Command::Blank => None,
        Command::OpenFeatured => Some(Event::OpenFeatured),
        Command::Suggestion(index) => {
            let chosen = index.and_then(|i| suggestions.get(i));
            if chosen.is_none() {
                tracing::debug!(line, "no such suggestion");
            }
            chosen.map(|s| Event::SuggestionChosen(s.query.clone()))
        }
        Command::Search(query) => {
            actions.extend(handle_event(state, &Event::QueryChanged(query), now));
            Some(Event::SubmitSearch)
        }
    };
    if let Some(event) = event {
        actions.extend(handle_event(state, &event, now));
    }
    Some(actions)
}
