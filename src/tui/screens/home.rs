//! Home feed: news cards, the sports list (opens a details page), live
//! cricket and football scores, and the most recent logged activities.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use super::panel;
use crate::core::action::Action;
use crate::core::activity::{Activity, SPORTS};
use crate::core::navigation::Route;
use crate::core::sports::{MatchStatus, MatchSummary, NEWS};
use crate::core::state::{App, MatchBoard};
use crate::tui::TuiState;
use crate::tui::components::SPINNER;
use crate::tui::event::TuiEvent;

pub const HINTS: &str =
    "↑↓ sport · Enter: details · r: refresh scores · a: add activity · p: profile · Tab: switch tab · Esc: quit";

/// Activities shown on the home feed; the profile lists all of them.
const RECENT_ACTIVITIES: usize = 3;

#[derive(Debug, Default)]
pub struct HomeState {
    pub selected_sport: usize,
    pub scores_scroll: u16,
}

pub fn handle_event(_app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let home = &mut tui.home;
    match event {
        TuiEvent::CursorUp => {
            home.selected_sport = home.selected_sport.saturating_sub(1);
            None
        }
        TuiEvent::CursorDown => {
            home.selected_sport = (home.selected_sport + 1).min(SPORTS.len() - 1);
            None
        }
        TuiEvent::Submit => SPORTS
            .get(home.selected_sport)
            .map(|sport| Action::Navigate(Route::SportDetails(sport.to_string()))),
        TuiEvent::ScrollUp => {
            home.scores_scroll = home.scores_scroll.saturating_sub(1);
            None
        }
        TuiEvent::ScrollDown => {
            home.scores_scroll = home.scores_scroll.saturating_add(1);
            None
        }
        TuiEvent::ScrollPageUp => {
            home.scores_scroll = home.scores_scroll.saturating_sub(10);
            None
        }
        TuiEvent::ScrollPageDown => {
            home.scores_scroll = home.scores_scroll.saturating_add(10);
            None
        }
        TuiEvent::InputChar('r') => {
            home.scores_scroll = 0;
            Some(Action::RefreshMatches)
        }
        TuiEvent::InputChar('a') => Some(Action::Navigate(Route::AddActivity)),
        TuiEvent::InputChar('p') => Some(Action::Navigate(Route::Profile)),
        _ => None,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, spinner_frame: usize) {
    let [news_area, middle, recent_area] = Layout::vertical([
        Constraint::Length(NEWS.len() as u16 + 2),
        Constraint::Min(6),
        Constraint::Length(RECENT_ACTIVITIES as u16 + 2),
    ])
    .areas(area);
    let [sports_area, scores_area] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(middle);

    draw_news(frame, news_area);
    draw_sports(frame, sports_area, tui.home.selected_sport);
    draw_scores(frame, scores_area, &app.matches, tui.home.scores_scroll, spinner_frame);
    draw_recent(frame, recent_area, &app.activities);
}

fn draw_news(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = NEWS
        .iter()
        .map(|card| {
            Line::from(vec![
                Span::styled(card.title, Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(format!(" · {}", card.description), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines).block(panel("Latest News")), area);
}

fn draw_sports(frame: &mut Frame, area: Rect, selected: usize) {
    let items: Vec<ListItem> = SPORTS.iter().map(|s| ListItem::new(*s)).collect();
    let list = List::new(items)
        .block(panel("Sports"))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::REVERSED))
        .highlight_symbol("▸ ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn status_badge(m: &MatchSummary) -> Span<'static> {
    let (text, colour) = match m.status {
        MatchStatus::Live => ("LIVE", Color::Red),
        MatchStatus::Completed => ("FT", Color::DarkGray),
        MatchStatus::Upcoming => ("SOON", Color::Yellow),
    };
    Span::styled(
        format!("{:<5}", text),
        Style::default().fg(colour).add_modifier(Modifier::BOLD),
    )
}

fn match_lines(m: &MatchSummary) -> [Line<'static>; 2] {
    [
        Line::from(vec![
            status_badge(m),
            Span::raw(format!(
                "{} {}  vs  {} {}",
                m.home, m.home_score, m.away, m.away_score
            )),
        ]),
        Line::styled(
            format!(
                "      {} · {} · {} · {}",
                m.competition,
                m.detail,
                m.status_label,
                m.date_label()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

fn sport_section(
    lines: &mut Vec<Line<'static>>,
    title: &'static str,
    matches: &[MatchSummary],
    error: Option<&str>,
    board: &MatchBoard,
    spinner: &str,
) {
    lines.push(Line::styled(title, Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)));
    if let Some(error) = error {
        lines.push(Line::styled(error.to_string(), Style::default().fg(Color::Red)));
    } else if board.loading && !board.loaded {
        lines.push(Line::raw(format!("{} Loading scores...", spinner)));
    } else if matches.is_empty() {
        lines.push(Line::styled("No matches right now", Style::default().fg(Color::DarkGray)));
    }
    for m in matches {
        lines.extend(match_lines(m));
    }
    lines.push(Line::default());
}

fn draw_scores(frame: &mut Frame, area: Rect, board: &MatchBoard, scroll: u16, spinner_frame: usize) {
    let spinner = SPINNER[spinner_frame % SPINNER.len()];
    let mut lines = Vec::new();
    sport_section(
        &mut lines,
        "Cricket",
        &board.cricket,
        board.cricket_error.as_deref(),
        board,
        spinner,
    );
    sport_section(
        &mut lines,
        "Football",
        &board.football,
        board.football_error.as_deref(),
        board,
        spinner,
    );

    let title = if board.loading && board.loaded {
        format!("Live Scores {}", spinner)
    } else {
        String::from("Live Scores")
    };
    let paragraph = Paragraph::new(lines)
        .block(panel(&title))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

pub fn activity_line(activity: &Activity) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            activity.date.format("%Y-%m-%d").to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{:<11}", activity.sport),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("{:>4} min", activity.duration_minutes)),
    ];
    if !activity.notes.is_empty() {
        spans.push(Span::styled(
            format!("  {}", activity.notes),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}

fn draw_recent(frame: &mut Frame, area: Rect, activities: &[Activity]) {
    let lines: Vec<Line> = if activities.is_empty() {
        vec![Line::styled(
            "No activities yet. Press a to log one.",
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        activities
            .iter()
            .take(RECENT_ACTIVITIES)
            .map(activity_line)
            .collect()
    };
    frame.render_widget(Paragraph::new(lines).block(panel("Recent Activity")), area);
}
