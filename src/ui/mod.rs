mod intro;
mod results;
mod selection;
mod trivia;

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::{ColorTag, Screen};

pub fn render(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen() {
        Screen::Intro => intro::render(frame, area, app),
        Screen::Selection => selection::render(frame, area, app, now),
        Screen::Trivia => trivia::render(frame, area, app),
        Screen::Results => results::render(frame, area, app),
    }
}

fn team_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Blue => Color::Blue,
        ColorTag::Red => Color::Red,
        ColorTag::Green => Color::Green,
        ColorTag::Yellow => Color::Yellow,
        ColorTag::Magenta => Color::Magenta,
        ColorTag::Cyan => Color::Cyan,
    }
}

fn render_controls(frame: &mut Frame, area: Rect, text: &str) {
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
