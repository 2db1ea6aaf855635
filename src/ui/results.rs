use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::models::Team;
use crate::session::QUESTIONS_PER_TEAM;

use super::{render_controls, team_color};

const QUESTION_PREVIEW_LENGTH: usize = 50;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[1], app);
    render_answer_breakdown(frame, chunks[2], app);
    render_controls(frame, chunks[3], "j/k scroll  ·  r restart  ·  q quit");
}

fn render_summary(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let banner = match session.winning_team() {
        Some(team) => Line::from(Span::styled(
            format!("{} WINS", team.name.to_uppercase()),
            Style::default().fg(team_color(team.color)).bold(),
        )),
        None => Line::from(Span::styled(
            "IT'S A TIE",
            Style::default().fg(Color::Yellow).bold(),
        )),
    };

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "RESULTS",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        banner,
        Line::from(""),
    ];
    content.extend(session.teams().iter().map(score_line));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn score_line(team: &Team) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            team.name.as_str(),
            Style::default().fg(team_color(team.color)).bold(),
        ),
        Span::styled(
            format!(
                "  {} pts  ({}/{} correct)",
                team.score, team.questions_correct, QUESTIONS_PER_TEAM
            ),
            Style::default().fg(Color::Gray),
        ),
    ])
}

fn render_answer_breakdown(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let lines: Vec<Line> = session
        .answers()
        .iter()
        .map(|record| {
            let (symbol, color) = if record.is_correct {
                ("+", Color::Green)
            } else {
                ("-", Color::Red)
            };
            let team = &session.teams()[record.team];
            let prompt = session
                .bank()
                .find(record.question_id)
                .map_or("", |question| question.prompt.as_str());

            Line::from(vec![
                Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
                Span::styled(
                    format!("{:<14}", team.name),
                    Style::default().fg(team_color(team.color)),
                ),
                Span::styled(truncate_question(prompt), Style::default().fg(Color::Gray)),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((app.result_scroll() as u16, 0));
    frame.render_widget(widget, area);
}

fn truncate_question(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > QUESTION_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(QUESTION_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_prompts_are_truncated() {
        let long = "x".repeat(QUESTION_PREVIEW_LENGTH + 5);
        let preview = truncate_question(&long);
        assert_eq!(preview.chars().count(), QUESTION_PREVIEW_LENGTH + 3);
        assert!(preview.ends_with("..."));
        assert_eq!(truncate_question("short"), "short");
    }
}
