pub mod api;
pub mod api_worker;
pub mod app;
pub mod config;
pub mod file_io;
pub mod logger;
pub mod models;
pub mod session;
pub mod theme;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use api::{BackendClient, DEFAULT_BASE_URL};
pub use api_worker::spawn_api_worker;
pub use app::App;
pub use config::{Config, ThemeMode};
pub use models::{
    ApiRequest, ApiResponse, AppState, ExportKind, ListEntry, Panel, Rating, ReviewSession,
    SessionStats, Toast, ToastKind, WordCard,
};
pub use session::RateOutcome;
pub use theme::Theme;
pub use utils::{format_session_time, truncate_string};
