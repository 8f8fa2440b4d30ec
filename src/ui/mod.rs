pub mod home;
pub mod layout;
pub mod learn;
pub mod modal;
pub mod sidebar;
pub mod toast;

pub use layout::{calculate_home_chunks, calculate_learn_chunks, calculate_sidebar_chunks};

use crate::app::App;
use crate::models::AppState;
use ratatui::{Frame, style::Style, widgets::Block};
use std::time::Instant;

/// Single entry point for a frame. The home screen stays underneath modal
/// states; the learning overlay replaces it entirely.
pub fn draw(f: &mut Frame, app: &App, now: Instant) {
    let background = Block::default().style(
        Style::default()
            .bg(app.theme.background)
            .fg(app.theme.text),
    );
    f.render_widget(background, f.area());

    if app.state == AppState::Learning {
        learn::draw_learning(f, app, now);
    } else {
        let layout = calculate_home_chunks(f.area());
        sidebar::draw_sidebar(f, app, layout.sidebar);
        home::draw_home(f, app, &layout);
    }

    match app.state {
        AppState::NewList | AppState::RenameList => modal::draw_list_modal(f, app),
        AppState::ThemeMenu => modal::draw_theme_menu(f, app),
        AppState::Alert => modal::draw_alert(f, app),
        _ => {}
    }

    if let Some(toast) = &app.toast {
        toast::draw_toast(f, toast, &app.theme);
    }
}
