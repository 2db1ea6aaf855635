use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::session::{POINTS_PER_CORRECT_ANSWER, QUESTIONS_PER_TEAM};

use super::team_color;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(13),
        Constraint::Fill(1),
    ])
    .split(area);

    let teams = app.session().teams();
    let mut matchup = Vec::new();
    for (index, team) in teams.iter().enumerate() {
        if index > 0 {
            matchup.push(Span::styled("  vs  ", Style::default().fg(Color::DarkGray)));
        }
        matchup.push(Span::styled(
            team.name.as_str(),
            Style::default().fg(team_color(team.color)).bold(),
        ));
    }

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TEAM TRIVIA",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(matchup),
        Line::from(""),
        Line::from(
            format!("Each team answers {QUESTIONS_PER_TEAM} questions in turn.").fg(Color::Gray),
        ),
        Line::from(
            format!("{POINTS_PER_CORRECT_ANSWER} points for every correct answer.").fg(Color::Gray),
        ),
        Line::from("Most points wins.".fg(Color::Gray)),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to continue  ·  q to quit".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );

    frame.render_widget(widget, chunks[1]);
}
