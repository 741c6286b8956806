use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;

const SLOT_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(question) = app.current_question() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app, &question.category);
    render_question_text(frame, chunks[1], &question.question);
    render_slots(frame, chunks[2], app.board().slots(), app.selected_slot());
    render_score(frame, chunks[3], app);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, category: &str) {
    let category = Paragraph::new(category.to_string()).fg(Color::DarkGray);
    frame.render_widget(category, area);

    let progress = format!(
        "{}/{}",
        app.session().current_question_number(),
        app.session().total_questions()
    );
    let widget = Paragraph::new(progress)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_slots(frame: &mut Frame, area: Rect, slots: &[String; 4], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(slots.len() * 2);

    for (slot, answer) in slots.iter().enumerate() {
        let is_selected = slot == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", SLOT_LABELS[slot]), style),
            Span::styled(answer.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_score(frame: &mut Frame, area: Rect, app: &App) {
    let Some(score_line) = app.session().score_line() else {
        return;
    };

    let widget = Paragraph::new(score_line).fg(Color::Yellow);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  enter answer  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
