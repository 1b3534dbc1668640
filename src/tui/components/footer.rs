use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::core::state::{Notice, NoticeKind};
use crate::tui::component::Component;

/// Bottom line: the current notice when there is one, key hints otherwise.
pub struct Footer<'a> {
    pub notice: Option<&'a Notice>,
    pub hints: &'a str,
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = match self.notice {
            Some(notice) => {
                let style = match notice.kind {
                    NoticeKind::Info => Style::default().fg(Color::Green),
                    NoticeKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                };
                Span::styled(notice.text.as_str(), style)
            }
            None => Span::styled(self.hints, Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(footer: &mut Footer) -> String {
        let backend = TestBackend::new(50, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| footer.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_notice_replaces_hints() {
        let notice = Notice::error("Login failed");
        let text = render(&mut Footer {
            notice: Some(&notice),
            hints: "Esc: quit",
        });
        assert!(text.contains("Login failed"));
        assert!(!text.contains("Esc: quit"));
    }

    #[test]
    fn test_hints_without_notice() {
        let text = render(&mut Footer {
            notice: None,
            hints: "Esc: quit",
        });
        assert!(text.contains("Esc: quit"));
    }
}
