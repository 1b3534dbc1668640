use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Tabs;

use crate::core::navigation::Tab;
use crate::tui::component::Component;

/// Home / Quiz / Chat strip. `active` is `None` on stacked screens, where the
/// tabs are shown dimmed.
pub struct TabBar {
    pub active: Option<Tab>,
}

impl Component for TabBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let titles = Tab::ALL.iter().map(|t| t.label());
        let base = if self.active.is_some() {
            Style::default()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut tabs = Tabs::new(titles)
            .style(base)
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .divider("|");
        tabs = match self.active {
            Some(tab) => tabs.select(tab.index()),
            None => tabs.select(None),
        };
        frame.render_widget(tabs, area);
    }
}
