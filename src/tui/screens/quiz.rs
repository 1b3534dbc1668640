//! Quiz tab: intro, one question at a time with a fun-fact reveal after
//! each answer, and the results banner.
//!
//! Options are picked with 1-4, or Up/Down and Enter. While the fun fact is
//! shown the options are locked; Enter continues.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Padding, Paragraph, Wrap};

use super::{centered, panel};
use crate::core::action::Action;
use crate::core::quiz::{QuizRun, ResultTier};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::event::TuiEvent;

pub const INTRO_HINTS: &str = "Enter: start quiz · Tab: switch tab · Esc: quit";
pub const QUESTION_HINTS: &str = "1-4 or ↑↓ + Enter: answer · Esc: leave quiz";
pub const REVEAL_HINTS: &str = "Enter: continue · Esc: leave quiz";
pub const RESULTS_HINTS: &str = "Enter: try again · Esc: back";

pub fn hints(app: &App) -> &'static str {
    match &app.quiz {
        Some(run) if run.reveal.is_some() => REVEAL_HINTS,
        _ => QUESTION_HINTS,
    }
}

pub fn handle_intro(_app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Submit => {
            tui.quiz_cursor = 0;
            Some(Action::StartQuiz)
        }
        _ => None,
    }
}

pub fn handle_questions(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let run = app.quiz.as_ref()?;
    if run.reveal.is_some() {
        return match event {
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                tui.quiz_cursor = 0;
                Some(Action::ContinueQuiz)
            }
            _ => None,
        };
    }

    let (_, question) = run.displayed_question()?;
    let count = question.options.len();
    match event {
        TuiEvent::CursorUp => {
            tui.quiz_cursor = tui.quiz_cursor.saturating_sub(1);
            None
        }
        TuiEvent::CursorDown => {
            tui.quiz_cursor = (tui.quiz_cursor + 1).min(count.saturating_sub(1));
            None
        }
        TuiEvent::InputChar(c) => c
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|d| (1..=count).contains(d))
            .map(|d| Action::AnswerQuestion(d - 1)),
        TuiEvent::Submit => Some(Action::AnswerQuestion(tui.quiz_cursor)),
        _ => None,
    }
}

pub fn handle_results(_app: &App, _tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Submit => Some(Action::RetakeQuiz),
        _ => None,
    }
}

pub fn draw_intro(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::styled(
            "Sports Quiz",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::raw("Test your sports knowledge with five quick questions."),
        Line::raw("Every answer comes with a fun fact."),
        Line::default(),
        Line::styled("Press Enter to start", Style::default().fg(Color::Yellow)),
    ];
    let box_area = centered(area, 60, lines.len() as u16 + 2);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(panel("Quiz")),
        box_area,
    );
}

pub fn draw_questions(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState) {
    let Some(run) = app.quiz.as_ref() else {
        frame.render_widget(Paragraph::new("No quiz in progress."), area);
        return;
    };
    let Some((index, question)) = run.displayed_question() else {
        return;
    };
    let total = run.session.total();

    let [gauge_area, prompt_area, options_area, fact_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(question.options.len() as u16 + 2),
        Constraint::Min(0),
    ])
    .areas(area);

    let ratio = ((index + 1) as f64 / total.max(1) as f64).clamp(0.0, 1.0);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(Color::Cyan))
            .ratio(ratio)
            .label(format!(
                "Question {} of {} · Score {}",
                index + 1,
                total,
                run.session.score()
            )),
        gauge_area,
    );

    frame.render_widget(
        Paragraph::new(Line::styled(
            question.prompt.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().padding(Padding::top(1))),
        prompt_area,
    );

    frame.render_widget(
        Paragraph::new(option_lines(run, tui.quiz_cursor)).block(panel("Options")),
        options_area,
    );

    if let Some(reveal) = &run.reveal {
        let (verdict, colour) = if reveal.step.was_correct() {
            ("Correct!", Color::Green)
        } else {
            ("Not quite!", Color::Red)
        };
        let lines = vec![
            Line::styled(verdict, Style::default().fg(colour).add_modifier(Modifier::BOLD)),
            Line::raw(question.fun_fact.as_str()),
            Line::default(),
            Line::styled("Press Enter to continue", Style::default().fg(Color::Yellow)),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .block(panel("Fun Fact")),
            fact_area,
        );
    }
}

fn option_lines(run: &QuizRun, cursor: usize) -> Vec<Line<'_>> {
    let Some((_, question)) = run.displayed_question() else {
        return Vec::new();
    };
    question
        .options
        .iter()
        .enumerate()
        .map(|(i, option)| {
            let label = format!("{}. {}", i + 1, option.text);
            match &run.reveal {
                Some(reveal) => {
                    if option.correct {
                        Line::styled(format!("✓ {}", label), Style::default().fg(Color::Green))
                    } else if reveal.chosen == i {
                        Line::styled(format!("✗ {}", label), Style::default().fg(Color::Red))
                    } else {
                        Line::styled(format!("  {}", label), Style::default().fg(Color::DarkGray))
                    }
                }
                None if i == cursor => Line::from(Span::styled(
                    format!("▸ {}", label),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                None => Line::raw(format!("  {}", label)),
            }
        })
        .collect()
}

pub fn draw_results(frame: &mut Frame, area: Rect, score: usize, total: usize) {
    let tier = ResultTier::for_score(score);
    let lines = vec![
        Line::styled(
            tier.title(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Line::default(),
        Line::raw(format!("You scored {} out of {}", score, total)),
        Line::default(),
        Line::raw(tier.description()),
        Line::default(),
        Line::styled("Press Enter to try again", Style::default().fg(Color::Cyan)),
    ];
    let box_area = centered(area, 70, lines.len() as u16 + 4);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(panel("Quiz Results")),
        box_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::test_support::signed_in_app;
    use crate::tui::screens::render_to_string;

    fn app_in_quiz() -> App {
        let mut app = signed_in_app();
        update(&mut app, Action::StartQuiz);
        app
    }

    #[test]
    fn test_digit_answers_by_position() {
        let app = app_in_quiz();
        let mut tui = TuiState::new(&app);
        assert!(matches!(
            handle_questions(&app, &mut tui, &TuiEvent::InputChar('2')),
            Some(Action::AnswerQuestion(1))
        ));
        assert!(handle_questions(&app, &mut tui, &TuiEvent::InputChar('5')).is_none());
        assert!(handle_questions(&app, &mut tui, &TuiEvent::InputChar('0')).is_none());
    }

    #[test]
    fn test_cursor_then_enter_answers() {
        let app = app_in_quiz();
        let mut tui = TuiState::new(&app);
        for _ in 0..10 {
            handle_questions(&app, &mut tui, &TuiEvent::CursorDown);
        }
        assert!(matches!(
            handle_questions(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::AnswerQuestion(3))
        ));
    }

    #[test]
    fn test_reveal_locks_options_until_continue() {
        let mut app = app_in_quiz();
        update(&mut app, Action::AnswerQuestion(0));
        let mut tui = TuiState::new(&app);
        tui.quiz_cursor = 2;

        assert!(handle_questions(&app, &mut tui, &TuiEvent::InputChar('2')).is_none());
        assert!(matches!(
            handle_questions(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::ContinueQuiz)
        ));
        assert_eq!(tui.quiz_cursor, 0);
    }

    #[test]
    fn test_reveal_draws_fun_fact_and_marks() {
        let mut app = app_in_quiz();
        // Option 1 (Basketball) is wrong for the first question
        update(&mut app, Action::AnswerQuestion(0));
        let tui = TuiState::new(&app);
        let text = render_to_string(90, 24, |f| draw_questions(f, f.area(), &app, &tui));
        assert!(text.contains("Question 1 of 5"));
        assert!(text.contains("Not quite!"));
        assert!(text.contains("✗ 1. Basketball"));
        assert!(text.contains("✓ 2. Soccer"));
        assert!(text.contains("The Beautiful Game"));
    }

    #[test]
    fn test_results_banner_by_tier() {
        let text = render_to_string(80, 16, |f| draw_results(f, f.area(), 4, 5));
        assert!(text.contains("Sports Master!"));
        assert!(text.contains("You scored 4 out of 5"));

        let text = render_to_string(80, 16, |f| draw_results(f, f.area(), 1, 5));
        assert!(text.contains("Sports Rookie!"));
    }

    #[test]
    fn test_results_enter_retakes() {
        let app = signed_in_app();
        let mut tui = TuiState::new(&app);
        assert!(matches!(
            handle_results(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::RetakeQuiz)
        ));
    }
}
