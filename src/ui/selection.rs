use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::roulette::Roulette;

use super::{render_controls, team_color};

pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(11),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    let roulette = app.roulette();
    let highlighted = roulette.highlighted(now);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "TEAM DRAW",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
    ];

    for (index, team) in app.session().teams().iter().enumerate() {
        let is_highlighted = highlighted == Some(index);
        let style = if is_highlighted {
            Style::default()
                .fg(Color::Black)
                .bg(team_color(team.color))
                .bold()
        } else {
            Style::default().fg(team_color(team.color))
        };
        content.push(Line::from(Span::styled(format!("  {}  ", team.name), style)));
        content.push(Line::from(""));
    }

    content.push(status_line(app, roulette));

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = if roulette.is_spinning() {
        "spinning...  ·  q quit"
    } else {
        "space spin  ·  enter start  ·  q quit"
    };
    render_controls(frame, chunks[3], controls);
}

fn status_line<'a>(app: &'a App, roulette: &Roulette) -> Line<'a> {
    match roulette {
        Roulette::Idle => Line::from("Spin to draw a team, or press ENTER to start.".fg(Color::DarkGray)),
        Roulette::Spinning { .. } => Line::from("...".fg(Color::Yellow)),
        Roulette::Revealed(team) => {
            let name = app
                .session()
                .team(*team)
                .map_or("", |team| team.name.as_str());
            Line::from(vec![
                Span::styled("Drawn: ", Style::default().fg(Color::Gray)),
                Span::styled(name, Style::default().fg(Color::Green).bold()),
            ])
        }
    }
}
