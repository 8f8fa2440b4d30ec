use crate::app::App;
use crate::models::{WordCard, language_name};
use crate::ui::layout::calculate_learn_chunks;
use crate::utils::format_session_time;
use ratatui::{
    Frame,
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};
use std::time::Instant;

pub fn draw_learning(f: &mut Frame, app: &App, now: Instant) {
    let Some(session) = &app.session else {
        return;
    };
    let layout = calculate_learn_chunks(f.area());
    let theme = &app.theme;

    let timer = Paragraph::new(vec![
        Line::from(Span::styled(
            "SESSION TIME",
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            format_session_time(session.elapsed_secs(now)),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(timer, layout.timer);

    let total = session.queue.len().max(1);
    let ratio = if session.is_finished() {
        1.0
    } else {
        session.current_index as f64 / total as f64
    };
    let progress = Gauge::default()
        .gauge_style(Style::default().fg(theme.accent).bg(theme.surface))
        .label(format!(
            "{} / {}",
            (session.current_index + 1).min(session.queue.len()),
            session.queue.len()
        ))
        .ratio(ratio.clamp(0.0, 1.0));
    f.render_widget(progress, layout.progress);

    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if session.is_flipped {
            Style::default().fg(theme.accent)
        } else {
            Style::default().fg(theme.border)
        });

    let content = if let Some(reviewed) = session.finished_reviewed {
        let mut text = Text::default();
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "Session complete!",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            format!("You reviewed {} cards.", reviewed),
            Style::default().fg(theme.text),
        )));
        text
    } else if let Some(card) = session.current() {
        if session.is_flipped {
            back_face(app, card)
        } else {
            front_face(app, card)
        }
    } else {
        Text::default()
    };

    let card = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(card_block);
    f.render_widget(card, layout.card);

    let key_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let help_spans = if session.is_flipped {
        vec![
            Span::styled("1", key_style),
            Span::from(" Hard  "),
            Span::styled("2", key_style),
            Span::from(" Good  "),
            Span::styled("3", key_style),
            Span::from(" Easy  "),
            Span::styled("Esc", key_style),
            Span::from(" End session"),
        ]
    } else {
        vec![
            Span::styled("Space", key_style),
            Span::from(" Flip  "),
            Span::styled("Esc", key_style),
            Span::from(" End session"),
        ]
    };
    let help = Paragraph::new(Line::from(help_spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        );
    f.render_widget(help, layout.help);
}

fn front_face(app: &App, card: &WordCard) -> Text<'static> {
    let theme = &app.theme;
    let source = card.source_lang.as_deref().unwrap_or(&app.config.source_lang);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        language_name(source).to_uppercase(),
        Style::default().fg(theme.accent),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        card.clean_word.clone(),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )));
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        "Space to flip",
        Style::default()
            .fg(theme.muted)
            .add_modifier(Modifier::ITALIC),
    )));
    text
}

fn back_face(app: &App, card: &WordCard) -> Text<'static> {
    let theme = &app.theme;
    let target = card.target_lang.as_deref().unwrap_or(&app.config.target_lang);
    let secondary = card
        .secondary_lang
        .as_deref()
        .unwrap_or(&app.config.secondary_lang);

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        language_name(target).to_uppercase(),
        Style::default().fg(theme.success),
    )));
    text.push_line(Line::from(Span::styled(
        card.english_definition.clone(),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD | Modifier::ITALIC),
    )));
    if !card.definitions.is_empty() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            language_name(secondary).to_uppercase(),
            Style::default().fg(theme.warning),
        )));
        for definition in &card.definitions {
            text.push_line(Line::from(Span::styled(
                definition.clone(),
                Style::default().fg(theme.text),
            )));
        }
    }
    if card.audio_url.is_some() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "♪ pronunciation audio available",
            Style::default().fg(theme.muted),
        )));
    }
    text
}
