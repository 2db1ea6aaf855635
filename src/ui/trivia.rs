use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::{Question, Team};
use crate::session::{POINTS_PER_CORRECT_ANSWER, QUESTIONS_PER_TEAM};

use super::{render_controls, team_color};

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let (Some(team), Some(question)) = (session.active_team(), session.active_question()) else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(8),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0], app, team);
    render_progress(frame, chunks[1], team, session.progress_fraction());
    render_question_text(frame, chunks[3], &question.prompt);
    render_options(frame, chunks[4], app, question);

    if session.explanation_visible() {
        render_explanation(frame, chunks[5], app, question);
        let label = format!("enter {}  ·  q quit", session.next_step());
        render_controls(frame, chunks[6], &label);
    } else {
        render_controls(frame, chunks[6], "j/k navigate  ·  1-4 answer  ·  enter select  ·  q quit");
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, team: &Team) {
    let [left, right] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(16)]).areas(area);

    let title = Line::from(vec![
        Span::styled(team.name.as_str(), Style::default().fg(team_color(team.color)).bold()),
        Span::styled(
            format!("  {} pts", team.score),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(title), left);

    let counter = format!(
        "{}/{}",
        app.session().current_question_index() + 1,
        QUESTIONS_PER_TEAM
    );
    let widget = Paragraph::new(counter)
        .alignment(Alignment::Right)
        .fg(Color::DarkGray);
    frame.render_widget(widget, right);
}

fn render_progress(frame: &mut Frame, area: Rect, team: &Team, fraction: f64) {
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(team_color(team.color)))
        .ratio(fraction.clamp(0.0, 1.0))
        .label(format!(
            "{} of {} answered",
            team.questions_answered, QUESTIONS_PER_TEAM
        ));
    frame.render_widget(gauge, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let selected = app.session().selected_option();
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let style = option_style(index, app.cursor(), selected, question);
        let marker = if selected.is_none() && index == app.cursor() {
            ">"
        } else {
            " "
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_style(index: usize, cursor: usize, selected: Option<usize>, question: &Question) -> Style {
    match selected {
        None if index == cursor => Style::default().fg(Color::Cyan).bold(),
        None => Style::default().fg(Color::Gray),
        Some(_) if question.is_correct(index) => Style::default().fg(Color::Green).bold(),
        Some(chosen) if chosen == index => Style::default().fg(Color::Red).bold(),
        Some(_) => Style::default().fg(Color::DarkGray),
    }
}

fn render_explanation(frame: &mut Frame, area: Rect, app: &App, question: &Question) {
    let is_correct = app
        .session()
        .selected_option()
        .is_some_and(|option| question.is_correct(option));

    let verdict = if is_correct {
        Line::from(Span::styled(
            format!("Correct! +{POINTS_PER_CORRECT_ANSWER}"),
            Style::default().fg(Color::Green).bold(),
        ))
    } else {
        Line::from(vec![
            Span::styled("Wrong. ", Style::default().fg(Color::Red).bold()),
            Span::styled(
                format!(
                    "The answer was {}",
                    question.correct_option().unwrap_or_default()
                ),
                Style::default().fg(Color::Gray),
            ),
        ])
    };

    let widget = Paragraph::new(vec![verdict, Line::from(""), Line::from(question.explanation.as_str())])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
