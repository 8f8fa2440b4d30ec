use crate::models::{Toast, ToastKind};
use crate::theme::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

/// Transient notification in the top-right corner, over whatever is showing.
pub fn draw_toast(f: &mut Frame, toast: &Toast, theme: &Theme) {
    let area = f.area();
    let width = (toast.message.as_str().width() as u16 + 4).min(area.width.saturating_sub(2));
    if width < 5 || area.height < 4 {
        return;
    }
    let rect = Rect::new(area.right().saturating_sub(width + 1), 1, width, 3);

    let color = match toast.kind {
        ToastKind::Info => theme.accent,
        ToastKind::Success => theme.success,
        ToastKind::Error => theme.danger,
    };

    f.render_widget(Clear, rect);
    let body = Paragraph::new(Line::from(Span::styled(
        toast.message.clone(),
        Style::default().fg(theme.text),
    )))
    .style(Style::default().bg(theme.surface))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );
    f.render_widget(body, rect);
}
