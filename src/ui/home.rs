use crate::app::App;
use crate::models::{Panel, language_name};
use crate::ui::layout::HomeLayout;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

pub fn draw_home(f: &mut Frame, app: &App, layout: &HomeLayout) {
    draw_search_box(f, app, layout.search);
    draw_lang_bar(f, app, layout.lang_bar);
    draw_results(f, app, layout.results);
    draw_help(f, app, layout.help);
}

fn draw_search_box(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let focused = app.focus == Panel::Search;
    let border_style = if focused {
        Style::default().fg(app.theme.accent)
    } else {
        Style::default().fg(app.theme.border)
    };

    let content = if app.query.is_empty() {
        Span::styled(
            "Type a word to look up...",
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(app.query.as_str(), Style::default().fg(app.theme.text))
    };

    let search = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Search"),
    );
    f.render_widget(search, area);

    if focused {
        let prefix_width = app.query[..app.cursor_position].width() as u16;
        let cursor_x = (area.x + 1 + prefix_width).min(area.right().saturating_sub(2));
        f.set_cursor_position((cursor_x, area.y + 1));
    }
}

fn draw_lang_bar(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let secondary = if app.config.include_secondary {
        format!(" +{}", language_name(&app.config.secondary_lang))
    } else {
        String::new()
    };
    let bar = Line::from(vec![
        Span::styled(
            format!(
                "{} → {}{}",
                language_name(&app.config.source_lang),
                language_name(&app.config.target_lang),
                secondary,
            ),
            Style::default().fg(app.theme.accent),
        ),
        Span::styled(
            "   F2/F3/F4 languages · Ctrl+P secondary · Ctrl+T theme",
            Style::default().fg(app.theme.muted),
        ),
    ]);
    f.render_widget(Paragraph::new(bar), area);
}

fn draw_results(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let focused = app.focus == Panel::Results;
    let border_style = if focused {
        Style::default().fg(app.theme.accent)
    } else {
        Style::default().fg(app.theme.border)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title("Result");

    let text = if app.loading {
        Text::from(Line::from(Span::styled(
            "Looking up...",
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )))
    } else if let Some(error) = &app.error {
        Text::from(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(app.theme.danger),
        )))
    } else if let Some(card) = &app.data {
        result_text(app, card)
    } else {
        let mut text = Text::default();
        text.push_line(Line::from(Span::styled(
            "Learn any language, your way.",
            Style::default()
                .fg(app.theme.text)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "Look up a word, save it into a list, export Anki decks and",
            Style::default().fg(app.theme.muted),
        )));
        text.push_line(Line::from(Span::styled(
            "Obsidian notes, or review your cards in learning mode.",
            Style::default().fg(app.theme.muted),
        )));
        text
    };

    let results = Paragraph::new(text).wrap(Wrap { trim: true }).block(block);
    f.render_widget(results, area);
}

fn result_text(app: &App, card: &crate::models::WordCard) -> Text<'static> {
    let theme = &app.theme;
    let source = card.source_lang.as_deref().unwrap_or(&app.config.source_lang);
    let target = card.target_lang.as_deref().unwrap_or(&app.config.target_lang);
    let secondary = card
        .secondary_lang
        .as_deref()
        .unwrap_or(&app.config.secondary_lang);

    let mut text = Text::default();
    text.push_line(Line::from(Span::styled(
        language_name(source).to_uppercase(),
        Style::default().fg(theme.accent),
    )));

    let mut word_spans = vec![Span::styled(
        card.clean_word.clone(),
        Style::default()
            .fg(theme.text)
            .add_modifier(Modifier::BOLD),
    )];
    if card.audio_url.is_some() {
        word_spans.push(Span::styled(
            "  ♪",
            Style::default().fg(theme.accent),
        ));
    }
    if app.is_saved() {
        word_spans.push(Span::styled(
            "  ● saved",
            Style::default().fg(theme.success),
        ));
    } else {
        word_spans.push(Span::styled(
            "  ○ s to save",
            Style::default().fg(theme.muted),
        ));
    }
    text.push_line(Line::from(word_spans));

    if card.original_word != card.clean_word {
        text.push_line(Line::from(Span::styled(
            format!("Looked up as: {}", card.original_word),
            Style::default().fg(theme.muted),
        )));
    }

    text.push_line(Line::from(""));
    text.push_line(Line::from(Span::styled(
        format!("{} definition", language_name(target)).to_uppercase(),
        Style::default().fg(theme.success),
    )));
    if card.english_definition.is_empty() {
        text.push_line(Line::from(Span::styled(
            "Definition not available",
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    } else {
        text.push_line(Line::from(Span::styled(
            card.english_definition.clone(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    if app.config.include_secondary {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            format!("{} definition", language_name(secondary)).to_uppercase(),
            Style::default().fg(theme.warning),
        )));
        if !app.show_secondary {
            text.push_line(Line::from(Span::styled(
                "Hidden — p to show",
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else if card.definitions.is_empty() {
            text.push_line(Line::from(Span::styled(
                "Definition not available",
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            )));
        } else {
            for definition in &card.definitions {
                text.push_line(Line::from(Span::styled(
                    format!("• {}", definition),
                    Style::default().fg(theme.text),
                )));
            }
        }
    }

    if !card.synonyms.is_empty() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            "SYNONYMS",
            Style::default().fg(theme.accent),
        )));
        let focused = app.focus == Panel::Results;
        for (i, synonym) in card.synonyms.iter().enumerate() {
            let selected = focused && i == app.synonym_index;
            let style = if selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(theme.muted)
            };
            let marker = if selected { "▸ " } else { "  " };
            text.push_line(Line::from(vec![
                Span::raw(marker.to_string()),
                Span::styled(synonym.clone(), style),
            ]));
        }
    }

    text
}

fn draw_help(f: &mut Frame, app: &App, area: ratatui::layout::Rect) {
    let key_style = Style::default()
        .fg(app.theme.accent)
        .add_modifier(Modifier::BOLD);

    let spans = match app.focus {
        Panel::Search => vec![
            Span::styled("Enter", key_style),
            Span::from(" Look up  "),
            Span::styled("Tab", key_style),
            Span::from(" Panels  "),
            Span::styled("Esc", key_style),
            Span::from(" Quit"),
        ],
        Panel::Results => vec![
            Span::styled("↑/↓", key_style),
            Span::from(" Synonym  "),
            Span::styled("Enter", key_style),
            Span::from(" Look it up  "),
            Span::styled("s", key_style),
            Span::from(" Save  "),
            Span::styled("p", key_style),
            Span::from(" Secondary  "),
            Span::styled("Tab", key_style),
            Span::from(" Panels"),
        ],
        Panel::Lists => vec![
            Span::styled("↑/↓", key_style),
            Span::from(" Navigate  "),
            Span::styled("Enter", key_style),
            Span::from(" Open  "),
            Span::styled("n", key_style),
            Span::from(" New  "),
            Span::styled("r", key_style),
            Span::from(" Rename  "),
            Span::styled("d", key_style),
            Span::from(" Delete"),
        ],
        Panel::Cards => vec![
            Span::styled("↑/↓", key_style),
            Span::from(" Navigate  "),
            Span::styled("Enter", key_style),
            Span::from(" View  "),
            Span::styled("d", key_style),
            Span::from(" Remove  "),
            Span::styled("l", key_style),
            Span::from(" Learn  "),
            Span::styled("a", key_style),
            Span::from("/"),
            Span::styled("o", key_style),
            Span::from(" Export"),
        ],
    };

    let help = Paragraph::new(Line::from(spans))
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(help, area);
}
