use crate::config::{Config, ThemeMode};
use crate::logger;
use crate::models::{
    ApiRequest, ApiResponse, AppState, ExportKind, ListEntry, Panel, RESERVED_LIST_NAME, Rating,
    ReviewSession, Toast, ToastKind, WordCard, next_language,
};
use crate::session::RateOutcome;
use crate::theme::Theme;
use crossbeam_channel::Sender;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

const TOAST_DURATION: Duration = Duration::from_secs(3);
const LIST_NAME_MAX_LEN: usize = 60;

/// All client-side view state. Mutations to lists and cards apply here first
/// and the matching request is fired afterwards; a failed request is logged
/// but the local state is kept (no rollback).
pub struct App {
    pub state: AppState,
    pub focus: Panel,

    // Search + lookup result
    pub query: String,
    pub cursor_position: usize,
    pub loading: bool,
    pub data: Option<WordCard>,
    pub error: Option<String>,
    pub synonym_index: usize,
    pub show_secondary: bool,

    // Lists and the saved-cards mirror for the active list
    pub lists: Vec<ListEntry>,
    pub active_list: Option<ListEntry>,
    pub saved_cards: Vec<WordCard>,
    pub selected_list: usize,
    pub selected_card: usize,

    // List create/rename modal
    pub list_name_input: String,
    pub renaming_list_id: Option<i64>,

    pub alert: Option<String>,
    pub toast: Option<Toast>,

    pub theme: Theme,
    pub theme_menu_index: usize,
    pub config: Config,

    pub session: Option<ReviewSession>,

    api_tx: Sender<ApiRequest>,
}

impl App {
    pub fn new(api_tx: Sender<ApiRequest>, config: Config) -> Self {
        let theme = Theme::resolve(&config);
        App {
            state: AppState::Home,
            focus: Panel::Search,
            query: String::new(),
            cursor_position: 0,
            loading: false,
            data: None,
            error: None,
            synonym_index: 0,
            show_secondary: true,
            lists: Vec::new(),
            active_list: None,
            saved_cards: Vec::new(),
            selected_list: 0,
            selected_card: 0,
            list_name_input: String::new(),
            renaming_list_id: None,
            alert: None,
            toast: None,
            theme,
            theme_menu_index: Theme::index_of(&config.theme),
            config,
            session: None,
            api_tx,
        }
    }

    /// First fetch; everything else follows from responses.
    pub fn bootstrap(&mut self) {
        self.send(ApiRequest::FetchLists);
    }

    fn send(&self, request: ApiRequest) {
        if self.api_tx.send(request).is_err() {
            logger::log("API worker unavailable, request dropped");
        }
    }

    fn save_config(&mut self) {
        if let Err(e) = self.config.save() {
            logger::log(&format!("Failed to save config: {}", e));
        }
    }

    fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.toast = Some(Toast {
            message: message.into(),
            kind,
            until: now + TOAST_DURATION,
        });
    }

    // ---- key handling -------------------------------------------------

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        match self.state {
            AppState::Home => return self.handle_home_key(key, now),
            AppState::Learning => self.handle_learning_key(key, now),
            AppState::NewList | AppState::RenameList => self.handle_list_modal_key(key, now),
            AppState::ThemeMenu => self.handle_theme_key(key),
            AppState::Alert => self.handle_alert_key(key),
        }
        false
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Tab => {
                self.cycle_focus();
                return false;
            }
            KeyCode::F(2) => {
                self.config.source_lang = next_language(&self.config.source_lang).to_string();
                self.save_config();
                return false;
            }
            KeyCode::F(3) => {
                self.config.target_lang = next_language(&self.config.target_lang).to_string();
                self.save_config();
                return false;
            }
            KeyCode::F(4) => {
                self.config.secondary_lang = next_language(&self.config.secondary_lang).to_string();
                self.save_config();
                return false;
            }
            KeyCode::Char('t') if ctrl => {
                self.theme_menu_index = Theme::index_of(&self.config.theme);
                self.state = AppState::ThemeMenu;
                return false;
            }
            KeyCode::Char('p') if ctrl => {
                self.config.include_secondary = !self.config.include_secondary;
                self.save_config();
                return false;
            }
            _ => {}
        }
        match self.focus {
            Panel::Search => self.handle_search_key(key),
            Panel::Results => self.handle_results_key(key, now),
            Panel::Lists => self.handle_lists_key(key, now),
            Panel::Cards => self.handle_cards_key(key, now),
        }
        false
    }

    fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Panel::Search if self.data.is_some() => Panel::Results,
            Panel::Search => Panel::Lists,
            Panel::Results => Panel::Lists,
            Panel::Lists => Panel::Cards,
            Panel::Cards => Panel::Search,
        };
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.request_lookup(self.query.clone()),
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position -= 1;
                }
                self.cursor_position = self.cursor_position.min(self.query.len());
            }
            KeyCode::Right => {
                if self.cursor_position < self.query.len() {
                    self.cursor_position += 1;
                }
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 && self.query.is_char_boundary(self.cursor_position) {
                    let prev = previous_char_boundary(&self.query, self.cursor_position);
                    self.query.remove(prev);
                    self.cursor_position = prev;
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if self.query.is_char_boundary(self.cursor_position) {
                    self.query.insert(self.cursor_position, c);
                    self.cursor_position += c.len_utf8();
                }
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent, now: Instant) {
        let synonym_count = self.data.as_ref().map_or(0, |d| d.synonyms.len());
        match key.code {
            KeyCode::Up => {
                self.synonym_index = self.synonym_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.synonym_index + 1 < synonym_count {
                    self.synonym_index += 1;
                }
            }
            KeyCode::Enter => {
                let synonym = self
                    .data
                    .as_ref()
                    .and_then(|d| d.synonyms.get(self.synonym_index))
                    .cloned();
                if let Some(word) = synonym {
                    self.request_lookup(word);
                }
            }
            KeyCode::Char('s') => self.toggle_save(now),
            KeyCode::Char('p') => self.show_secondary = !self.show_secondary,
            _ => {}
        }
    }

    fn handle_lists_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up => {
                self.selected_list = self.selected_list.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_list + 1 < self.lists.len() {
                    self.selected_list += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(entry) = self.lists.get(self.selected_list).cloned() {
                    self.activate_list(entry);
                }
            }
            KeyCode::Char('n') => {
                self.list_name_input.clear();
                self.renaming_list_id = None;
                self.state = AppState::NewList;
            }
            KeyCode::Char('r') => self.begin_rename(now),
            KeyCode::Char('d') => self.delete_selected_list(now),
            KeyCode::Char('l') => self.start_learning(now),
            _ => {}
        }
    }

    fn handle_cards_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Up => {
                self.selected_card = self.selected_card.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected_card + 1 < self.saved_cards.len() {
                    self.selected_card += 1;
                }
            }
            KeyCode::Enter => {
                if let Some(card) = self.saved_cards.get(self.selected_card).cloned() {
                    self.loading = false;
                    self.error = None;
                    self.synonym_index = 0;
                    self.data = Some(card);
                }
            }
            KeyCode::Char('d') => {
                if let Some(word) = self
                    .saved_cards
                    .get(self.selected_card)
                    .map(|c| c.clean_word.clone())
                {
                    self.remove_card(&word);
                }
            }
            KeyCode::Char('l') => self.start_learning(now),
            KeyCode::Char('a') => self.export(ExportKind::Anki, now),
            KeyCode::Char('o') => self.export(ExportKind::Obsidian, now),
            _ => {}
        }
    }

    fn handle_learning_key(&mut self, key: KeyEvent, now: Instant) {
        let flipped = self.session.as_ref().is_some_and(|s| s.is_flipped);
        match key.code {
            KeyCode::Esc => self.close_session(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(session) = &mut self.session {
                    session.flip();
                }
            }
            KeyCode::Char('1') | KeyCode::Char('h') if flipped => {
                self.handle_rating(Rating::Hard, now);
            }
            KeyCode::Char('2') | KeyCode::Char('g') if flipped => {
                self.handle_rating(Rating::Good, now);
            }
            KeyCode::Char('3') | KeyCode::Char('e') if flipped => {
                self.handle_rating(Rating::Easy, now);
            }
            _ => {}
        }
    }

    fn handle_list_modal_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Esc => {
                self.list_name_input.clear();
                self.renaming_list_id = None;
                self.state = AppState::Home;
            }
            KeyCode::Enter => self.submit_list_modal(now),
            KeyCode::Backspace => {
                self.list_name_input.pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if self.list_name_input.len() < LIST_NAME_MAX_LEN {
                    self.list_name_input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_theme_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.state = AppState::Home,
            KeyCode::Up => {
                self.theme_menu_index = self.theme_menu_index.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.theme_menu_index + 1 < Theme::ALL.len() {
                    self.theme_menu_index += 1;
                }
            }
            KeyCode::Enter => {
                let theme = Theme::ALL[self.theme_menu_index];
                self.config.theme = theme.id.to_string();
                self.config.theme_mode = ThemeMode::Manual;
                self.save_config();
                self.theme = Theme::resolve(&self.config);
                self.state = AppState::Home;
            }
            KeyCode::Char('m') => {
                self.config.theme_mode = match self.config.theme_mode {
                    ThemeMode::Manual => ThemeMode::System,
                    ThemeMode::System => ThemeMode::Manual,
                };
                self.save_config();
                self.theme = Theme::resolve(&self.config);
            }
            _ => {}
        }
    }

    fn handle_alert_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.alert = None;
            self.state = if self.session.is_some() {
                AppState::Learning
            } else {
                AppState::Home
            };
        }
    }

    // ---- lookup -------------------------------------------------------

    pub fn request_lookup(&mut self, word: String) {
        let word = word.trim().to_string();
        if word.is_empty() {
            return;
        }
        self.query = word.clone();
        self.cursor_position = self.query.len();
        self.loading = true;
        self.error = None;
        self.data = None;
        self.synonym_index = 0;
        let secondary_lang = self
            .config
            .include_secondary
            .then(|| self.config.secondary_lang.clone());
        self.send(ApiRequest::Lookup {
            word,
            source_lang: self.config.source_lang.clone(),
            target_lang: self.config.target_lang.clone(),
            secondary_lang,
        });
    }

    // ---- saved cards --------------------------------------------------

    pub fn is_saved(&self) -> bool {
        match &self.data {
            Some(data) => self
                .saved_cards
                .iter()
                .any(|c| c.clean_word == data.clean_word),
            None => false,
        }
    }

    pub fn toggle_save(&mut self, now: Instant) {
        let Some(card) = self.data.clone() else {
            return;
        };
        if self.active_list.is_none() {
            self.show_toast(ToastKind::Error, "Lists are still loading", now);
            return;
        }
        if self.is_saved() {
            let word = card.clean_word.clone();
            self.remove_card(&word);
        } else {
            let list_id = self.active_list.as_ref().map(|l| l.id).unwrap_or_default();
            self.saved_cards.push(card.clone());
            self.send(ApiRequest::SaveCard { list_id, card });
        }
    }

    pub fn remove_card(&mut self, clean_word: &str) {
        let Some(list) = self.active_list.clone() else {
            return;
        };
        self.saved_cards.retain(|c| c.clean_word != clean_word);
        if self.selected_card >= self.saved_cards.len() {
            self.selected_card = self.saved_cards.len().saturating_sub(1);
        }
        self.send(ApiRequest::DeleteCard {
            list_id: list.id,
            clean_word: clean_word.to_string(),
        });
    }

    // ---- lists --------------------------------------------------------

    pub fn activate_list(&mut self, entry: ListEntry) {
        self.send(ApiRequest::FetchCards { list_id: entry.id });
        self.active_list = Some(entry);
        self.saved_cards.clear();
        self.selected_card = 0;
    }

    fn validate_list_name(&self, name: &str, exclude_id: Option<i64>) -> Result<(), &'static str> {
        if name.eq_ignore_ascii_case(RESERVED_LIST_NAME) {
            return Err("That list name is reserved");
        }
        if self
            .lists
            .iter()
            .any(|l| Some(l.id) != exclude_id && l.name.eq_ignore_ascii_case(name))
        {
            return Err("A list with that name already exists");
        }
        Ok(())
    }

    fn submit_list_modal(&mut self, now: Instant) {
        let name = self.list_name_input.trim().to_string();
        if name.is_empty() {
            return;
        }
        match self.renaming_list_id {
            None => {
                if let Err(message) = self.validate_list_name(&name, None) {
                    self.show_toast(ToastKind::Error, message, now);
                    return;
                }
                self.send(ApiRequest::CreateList { name });
            }
            Some(id) => {
                if self.lists.iter().any(|l| l.id == id && l.name == name) {
                    // Unchanged, nothing to do.
                } else {
                    if let Err(message) = self.validate_list_name(&name, Some(id)) {
                        self.show_toast(ToastKind::Error, message, now);
                        return;
                    }
                    if let Some(list) = self.lists.iter_mut().find(|l| l.id == id) {
                        list.name = name.clone();
                    }
                    if let Some(active) = &mut self.active_list {
                        if active.id == id {
                            active.name = name.clone();
                        }
                    }
                    self.send(ApiRequest::RenameList { id, name });
                }
            }
        }
        self.list_name_input.clear();
        self.renaming_list_id = None;
        self.state = AppState::Home;
    }

    fn begin_rename(&mut self, now: Instant) {
        let Some(entry) = self.lists.get(self.selected_list).cloned() else {
            return;
        };
        if entry.name == RESERVED_LIST_NAME {
            self.show_toast(
                ToastKind::Error,
                "The General list cannot be renamed",
                now,
            );
            return;
        }
        self.list_name_input = entry.name;
        self.renaming_list_id = Some(entry.id);
        self.state = AppState::RenameList;
    }

    fn delete_selected_list(&mut self, now: Instant) {
        let Some(entry) = self.lists.get(self.selected_list).cloned() else {
            return;
        };
        if entry.name == RESERVED_LIST_NAME {
            self.show_toast(
                ToastKind::Error,
                "The General list cannot be deleted",
                now,
            );
            return;
        }
        self.lists.retain(|l| l.id != entry.id);
        if self.selected_list >= self.lists.len() {
            self.selected_list = self.lists.len().saturating_sub(1);
        }
        if self.active_list.as_ref().is_some_and(|a| a.id == entry.id) {
            let fallback = self
                .lists
                .iter()
                .find(|l| l.name == RESERVED_LIST_NAME)
                .or_else(|| self.lists.first())
                .cloned();
            match fallback {
                Some(next) => self.activate_list(next),
                None => {
                    self.active_list = None;
                    self.saved_cards.clear();
                }
            }
        }
        self.send(ApiRequest::DeleteList { id: entry.id });
    }

    // ---- exports ------------------------------------------------------

    pub fn export(&mut self, kind: ExportKind, now: Instant) {
        if self.saved_cards.is_empty() {
            self.show_toast(ToastKind::Error, "No cards to export", now);
            return;
        }
        let name = self
            .active_list
            .as_ref()
            .map(|l| l.name.clone())
            .unwrap_or_else(|| "vocab-station".to_string());
        let cards = self.saved_cards.clone();
        let source_lang = self.config.source_lang.clone();
        let target_lang = self.config.target_lang.clone();
        let secondary_lang = self
            .config
            .include_secondary
            .then(|| self.config.secondary_lang.clone());
        let request = match kind {
            ExportKind::Anki => ApiRequest::ExportAnki {
                cards,
                deck_name: name,
                source_lang,
                target_lang,
                secondary_lang,
            },
            ExportKind::Obsidian => ApiRequest::ExportObsidian {
                cards,
                note_name: name,
                source_lang,
                target_lang,
                secondary_lang,
            },
        };
        self.send(request);
        self.show_toast(ToastKind::Info, format!("Exporting {}…", kind.label()), now);
    }

    // ---- review session ----------------------------------------------

    pub fn start_learning(&mut self, now: Instant) {
        if self.session.is_some() {
            return;
        }
        if self.saved_cards.is_empty() {
            self.show_toast(ToastKind::Error, "No cards in this list yet", now);
            return;
        }
        if let Some(session) = ReviewSession::start(self.saved_cards.clone(), now) {
            self.session = Some(session);
            self.state = AppState::Learning;
        }
    }

    pub fn handle_rating(&mut self, rating: Rating, now: Instant) {
        let outcome = match &mut self.session {
            Some(session) => session.rate(rating, now),
            None => return,
        };
        match outcome {
            RateOutcome::Ignored => {}
            RateOutcome::Advanced { persist } => self.persist_review(persist),
            RateOutcome::Finished { persist, reviewed } => {
                self.persist_review(persist);
                self.show_toast(
                    ToastKind::Success,
                    format!("Session complete — {} reviewed", reviewed),
                    now,
                );
            }
        }
    }

    /// Fire-and-forget: stamps the card, updates the mirror, and ships the
    /// new `last_review` to the backend. A failure never rolls this back.
    fn persist_review(&mut self, mut card: WordCard) {
        card.last_review = Some(chrono::Local::now().to_rfc3339());
        if let Some(mirrored) = self
            .saved_cards
            .iter_mut()
            .find(|c| c.clean_word == card.clean_word)
        {
            mirrored.last_review = card.last_review.clone();
        }
        let Some(list) = self.active_list.clone() else {
            return;
        };
        self.send(ApiRequest::UpdateCard {
            list_id: list.id,
            card,
        });
    }

    /// Idempotent; discards the queue and the elapsed clock.
    pub fn close_session(&mut self) {
        self.session = None;
        if self.state == AppState::Learning {
            self.state = AppState::Home;
        }
    }

    // ---- periodic work ------------------------------------------------

    pub fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| now >= t.until) {
            self.toast = None;
        }
        let close = match &mut self.session {
            Some(session) => {
                session.tick(now);
                session.should_close(now)
            }
            None => false,
        };
        if close {
            self.close_session();
        }
    }

    // ---- responses ----------------------------------------------------

    pub fn process_api_response(&mut self, response: ApiResponse, now: Instant) {
        match response {
            ApiResponse::Lookup(Ok(card)) => {
                self.loading = false;
                self.error = None;
                self.synonym_index = 0;
                self.data = Some(card);
            }
            ApiResponse::Lookup(Err(message)) => {
                self.loading = false;
                self.error = Some(message);
            }
            ApiResponse::Lists(Ok(lists)) => {
                self.lists = lists;
                if self.selected_list >= self.lists.len() {
                    self.selected_list = self.lists.len().saturating_sub(1);
                }
                let refreshed = self
                    .active_list
                    .as_ref()
                    .and_then(|a| self.lists.iter().find(|l| l.id == a.id))
                    .cloned();
                match refreshed {
                    Some(entry) => self.active_list = Some(entry),
                    None => {
                        let fallback = self
                            .lists
                            .iter()
                            .find(|l| l.name == RESERVED_LIST_NAME)
                            .or_else(|| self.lists.first())
                            .cloned();
                        match fallback {
                            Some(entry) => self.activate_list(entry),
                            None => {
                                self.active_list = None;
                                self.saved_cards.clear();
                            }
                        }
                    }
                }
            }
            ApiResponse::Lists(Err(message)) => {
                logger::log(&format!("fetch lists failed: {}", message));
                self.show_toast(ToastKind::Error, "Could not reach the backend", now);
            }
            ApiResponse::ListCreated(Ok(())) => {
                self.send(ApiRequest::FetchLists);
                self.show_toast(ToastKind::Success, "List created", now);
            }
            ApiResponse::ListCreated(Err(message)) => {
                logger::log(&format!("create list failed: {}", message));
            }
            ApiResponse::Cards { list_id, result } => match result {
                Ok(cards) => {
                    if self.active_list.as_ref().is_some_and(|a| a.id == list_id) {
                        self.saved_cards = cards;
                        if self.selected_card >= self.saved_cards.len() {
                            self.selected_card = self.saved_cards.len().saturating_sub(1);
                        }
                    }
                }
                Err(message) => {
                    logger::log(&format!("fetch cards for list {} failed: {}", list_id, message));
                }
            },
            ApiResponse::MutationDone { action, result } => {
                if let Err(message) = result {
                    logger::log(&format!("{} failed: {}", action, message));
                }
            }
            ApiResponse::ExportDone { kind, result } => match result {
                Ok(path) => {
                    self.show_toast(
                        ToastKind::Success,
                        format!("Saved {}", path.display()),
                        now,
                    );
                }
                Err(message) => {
                    logger::log(&format!("export {} failed: {}", kind.label(), message));
                    self.alert = Some(format!("Failed to export {}.", kind.label()));
                    self.state = AppState::Alert;
                }
            },
        }
    }
}

fn previous_char_boundary(s: &str, index: usize) -> usize {
    let mut prev = index.saturating_sub(1);
    while prev > 0 && !s.is_char_boundary(prev) {
        prev -= 1;
    }
    prev
}
