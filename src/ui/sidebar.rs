use crate::app::App;
use crate::models::Panel;
use crate::ui::layout::calculate_sidebar_chunks;
use crate::utils::truncate_string;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

pub fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let layout = calculate_sidebar_chunks(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "FLASHCARD STATION",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.active_list
                .as_ref()
                .map(|l| format!("Active list: {}", l.name))
                .unwrap_or_else(|| "Loading lists...".to_string()),
            Style::default().fg(app.theme.muted),
        )),
    ]);
    f.render_widget(header, layout.header);

    draw_lists(f, app, layout.lists);
    draw_cards(f, app, layout.cards);

    let footer = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} cards ready to export", app.saved_cards.len()),
            Style::default().fg(app.theme.muted),
        )),
        Line::from(vec![
            Span::styled(
                "l",
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Start learning", Style::default().fg(app.theme.muted)),
        ]),
    ]);
    f.render_widget(footer, layout.footer);
}

fn draw_lists(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Panel::Lists;
    let items: Vec<ListItem> = if app.lists.is_empty() {
        vec![ListItem::new("No lists yet").style(
            Style::default()
                .fg(app.theme.muted)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        app.lists
            .iter()
            .enumerate()
            .map(|(i, list)| {
                let active = app.active_list.as_ref().is_some_and(|a| a.id == list.id);
                let marker = if active { "▸ " } else { "  " };
                let mut style = if active {
                    Style::default().fg(app.theme.accent)
                } else {
                    Style::default().fg(app.theme.text)
                };
                if focused && i == app.selected_list {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                ListItem::new(format!("{}{}", marker, list.name)).style(style)
            })
            .collect()
    };

    let lists = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("My Lists")
            .border_style(if focused {
                Style::default().fg(app.theme.accent)
            } else {
                Style::default().fg(app.theme.border)
            }),
    );
    f.render_widget(lists, area);
}

fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Panel::Cards;
    let name_width = (area.width.saturating_sub(4) as usize).max(8);

    let items: Vec<ListItem> = if app.saved_cards.is_empty() {
        vec![
            ListItem::new("No cards saved yet.").style(
                Style::default()
                    .fg(app.theme.muted)
                    .add_modifier(Modifier::ITALIC),
            ),
            ListItem::new("Search and save words!").style(
                Style::default()
                    .fg(app.theme.muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]
    } else {
        app.saved_cards
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let selected = focused && i == app.selected_card;
                let word_style = if selected {
                    Style::default()
                        .fg(app.theme.text)
                        .add_modifier(Modifier::REVERSED)
                } else {
                    Style::default().fg(app.theme.text)
                };
                let line = Line::from(vec![
                    Span::styled(card.clean_word.clone(), word_style),
                    Span::styled(
                        format!(
                            "  {}",
                            truncate_string(
                                &card.english_definition,
                                name_width.saturating_sub(card.clean_word.len() + 2).max(3),
                            )
                        ),
                        Style::default().fg(app.theme.muted),
                    ),
                ]);
                ListItem::new(line)
            })
            .collect()
    };

    let title = format!("Saved Cards ({})", app.saved_cards.len());
    let cards = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(if focused {
                Style::default().fg(app.theme.accent)
            } else {
                Style::default().fg(app.theme.border)
            }),
    );
    f.render_widget(cards, area);
}
