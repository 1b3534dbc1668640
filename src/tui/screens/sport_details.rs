use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use super::panel;
use crate::core::action::Action;
use crate::core::sports::details_for;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::event::TuiEvent;

pub const HINTS: &str = "↑↓ scroll · Esc: back";

pub fn handle_event(_app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::CursorUp | TuiEvent::ScrollUp => {
            tui.detail_scroll = tui.detail_scroll.saturating_sub(1)
        }
        TuiEvent::CursorDown | TuiEvent::ScrollDown => {
            tui.detail_scroll = tui.detail_scroll.saturating_add(1)
        }
        TuiEvent::ScrollPageUp => tui.detail_scroll = tui.detail_scroll.saturating_sub(10),
        TuiEvent::ScrollPageDown => tui.detail_scroll = tui.detail_scroll.saturating_add(10),
        _ => {}
    }
    None
}

fn section<'a>(lines: &mut Vec<Line<'a>>, heading: &'a str, items: &'a [&'a str]) {
    if items.is_empty() {
        return;
    }
    lines.push(Line::default());
    lines.push(Line::styled(
        heading,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    lines.extend(items.iter().map(|item| Line::raw(format!("  • {}", item))));
}

pub fn draw(frame: &mut Frame, area: Rect, sport: &str, tui: &TuiState) {
    let details = details_for(sport);
    let mut lines = vec![Line::raw(details.description)];
    section(&mut lines, "Benefits", details.benefits);
    section(&mut lines, "Rules", details.rules);
    section(&mut lines, "Equipment", details.equipment);

    let paragraph = Paragraph::new(lines)
        .block(panel(sport))
        .wrap(Wrap { trim: true })
        .scroll((tui.detail_scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::signed_in_app;
    use crate::tui::screens::render_to_string;

    #[test]
    fn test_known_sport_lists_sections() {
        let app = signed_in_app();
        let tui = TuiState::new(&app);
        let text = render_to_string(90, 30, |f| draw(f, f.area(), "Tennis", &tui));
        assert!(text.contains("Benefits"));
        assert!(text.contains("Rules"));
        assert!(text.contains("• Tennis racket"));
    }

    #[test]
    fn test_unknown_sport_shows_fallback() {
        let app = signed_in_app();
        let tui = TuiState::new(&app);
        let text = render_to_string(90, 10, |f| draw(f, f.area(), "Cycling", &tui));
        assert!(text.contains("No details available for this sport."));
        assert!(!text.contains("Benefits"));
    }

    #[test]
    fn test_scroll_never_underflows() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        handle_event(&app, &mut tui, &TuiEvent::CursorUp);
        assert_eq!(tui.detail_scroll, 0);
        handle_event(&app, &mut tui, &TuiEvent::ScrollPageDown);
        assert_eq!(tui.detail_scroll, 10);
    }
}
