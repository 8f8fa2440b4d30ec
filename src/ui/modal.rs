use crate::app::App;
use crate::config::ThemeMode;
use crate::models::AppState;
use crate::theme::Theme;
use crate::utils::centered_rect;
use ratatui::{
    Frame,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn draw_list_modal(f: &mut Frame, app: &App) {
    let area = centered_rect(46, 6, f.area());
    let title = if app.state == AppState::RenameList {
        "Rename List"
    } else {
        "New List"
    };

    f.render_widget(Clear, area);
    let body = Paragraph::new(vec![
        Line::from(Span::styled(
            "List name",
            Style::default().fg(app.theme.muted),
        )),
        Line::from(Span::styled(
            app.list_name_input.clone(),
            Style::default().fg(app.theme.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Save  ", Style::default().fg(app.theme.muted)),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Cancel", Style::default().fg(app.theme.muted)),
        ]),
    ])
    .style(Style::default().bg(app.theme.surface))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent))
            .title(title),
    );
    f.render_widget(body, area);

    let cursor_x = area.x + 1 + app.list_name_input.width() as u16;
    f.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 2));
}

pub fn draw_theme_menu(f: &mut Frame, app: &App) {
    let height = Theme::ALL.len() as u16 + 5;
    let area = centered_rect(34, height, f.area());

    let mut lines = Vec::new();
    for (i, theme) in Theme::ALL.iter().enumerate() {
        let selected = i == app.theme_menu_index;
        let current = app.config.theme_mode == ThemeMode::Manual && app.config.theme == theme.id;
        let marker = if selected { "▸ " } else { "  " };
        let check = if current { " ✓" } else { "" };
        let style = if selected {
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::REVERSED)
        } else {
            Style::default().fg(app.theme.text)
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{}{}", theme.label, check), style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(
            "Mode: {}",
            match app.config.theme_mode {
                ThemeMode::Manual => "Manual",
                ThemeMode::System => "System",
            }
        ),
        Style::default().fg(app.theme.muted),
    )));
    lines.push(Line::from(vec![
        Span::styled(
            "Enter",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Apply  ", Style::default().fg(app.theme.muted)),
        Span::styled(
            "m",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Mode  ", Style::default().fg(app.theme.muted)),
        Span::styled(
            "Esc",
            Style::default()
                .fg(app.theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Close", Style::default().fg(app.theme.muted)),
    ]));

    f.render_widget(Clear, area);
    let menu = Paragraph::new(lines)
        .style(Style::default().bg(app.theme.surface))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent))
                .title("Theme"),
        );
    f.render_widget(menu, area);
}

pub fn draw_alert(f: &mut Frame, app: &App) {
    let Some(message) = &app.alert else {
        return;
    };
    let area = centered_rect(50, 7, f.area());

    f.render_widget(Clear, area);
    let alert = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(app.theme.danger),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter",
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Dismiss", Style::default().fg(app.theme.muted)),
        ]),
    ])
    .alignment(ratatui::layout::Alignment::Center)
    .style(Style::default().bg(app.theme.surface))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.danger))
            .title("Error"),
    );
    f.render_widget(alert, area);
}
