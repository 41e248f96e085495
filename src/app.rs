//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern: `App` is the
//! model, `update` applies events and task results, `view` renders.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;
use tracing::{debug, info, trace, warn};

use crate::config::Settings;
use crate::demo::{self, DemoEvent, Person};
use crate::error::AppError;
use crate::events::{Event, KeyContext};
use crate::table::{DataTable, PendingSave, QueryString, Record, TableEvent};
use crate::tasks::TaskMessage;
use crate::ui::components::{
    render_context_help, ErrorDialog, LoadingIndicator, NotificationManager,
};
use crate::ui::table_view::render_table;
use crate::ui::theme::theme;

/// Title shown above the table.
const TITLE: &str = "Reusable Table Example";

/// Startup options, from the configuration file and the command line.
#[derive(Debug, Clone)]
pub struct AppOptions {
    /// Settings after CLI overrides.
    pub settings: Settings,
    /// Initial query string, e.g. `?page=2`.
    pub query: Option<String>,
    /// Latency of the simulated backend.
    pub save_latency: Duration,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            query: None,
            save_latency: demo::SAVE_LATENCY,
        }
    }
}

/// The main application struct that holds all state.
pub struct App {
    /// Whether the application should quit.
    should_quit: bool,
    /// The people shown in the table. Empty until loaded.
    people: Vec<Person>,
    /// The table over `people`.
    table: DataTable<Person>,
    /// The query string the table reflects its page into.
    location: Arc<Mutex<QueryString>>,
    /// Reports from the table callbacks.
    demo_rx: mpsc::UnboundedReceiver<DemoEvent>,
    /// Saves waiting to be spawned by the event loop.
    pending_saves: Vec<PendingSave<u32>>,
    /// Notification manager for toast messages.
    notifications: NotificationManager,
    /// Error dialog for critical errors.
    error_dialog: Option<ErrorDialog>,
    /// Loading indicator shown until the people arrive.
    loading: LoadingIndicator,
    /// Effective settings.
    settings: Settings,
}

impl App {
    /// Create a new application instance.
    ///
    /// The table starts in its loading state; feed the people in with a
    /// `TaskMessage::RecordsLoaded`.
    pub fn new(options: AppOptions) -> Self {
        debug!(?options, "Creating application");

        let location = Arc::new(Mutex::new(
            options
                .query
                .as_deref()
                .map(QueryString::parse)
                .unwrap_or_default(),
        ));

        let (demo_tx, demo_rx) = mpsc::unbounded_channel();
        let mut table = demo::table_builder(options.save_latency, demo_tx)
            .items_per_page(options.settings.items_per_page)
            .vim_keys(options.settings.vim_mode)
            .location(Box::new(Arc::clone(&location)))
            .build();
        table.set_loading(true);

        let mut loading = LoadingIndicator::with_message("Loading people...");
        loading.start();

        Self {
            should_quit: false,
            people: Vec::new(),
            table,
            location,
            demo_rx,
            pending_saves: Vec::new(),
            notifications: NotificationManager::new(),
            error_dialog: None,
            loading,
            settings: options.settings,
        }
    }

    /// Check whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The people currently shown.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// The table.
    pub fn table(&self) -> &DataTable<Person> {
        &self.table
    }

    /// The current query string.
    pub fn query(&self) -> String {
        match self.location.lock() {
            Ok(location) => location.to_query(),
            Err(poisoned) => poisoned.into_inner().to_query(),
        }
    }

    /// Replace the query string, as a navigation outside the table would.
    pub fn navigate(&mut self, query: &str) {
        match self.location.lock() {
            Ok(mut location) => location.set_query(query),
            Err(poisoned) => poisoned.into_inner().set_query(query),
        }
        self.table.sync(&self.people);
    }

    /// The notifications.
    pub fn notifications(&self) -> &NotificationManager {
        &self.notifications
    }

    /// Take the saves the event loop must spawn.
    pub fn take_pending_saves(&mut self) -> Vec<PendingSave<u32>> {
        std::mem::take(&mut self.pending_saves)
    }

    /// Report an error: critical ones open the error dialog, others toast.
    pub fn handle_error(&mut self, error: &AppError) {
        warn!(error = %error, "Application error");
        if error.is_critical() {
            self.show_error_dialog("Error", error.user_message());
        } else {
            self.notifications.error(error.user_message());
        }
    }

    /// Open the error dialog.
    pub fn show_error_dialog(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error_dialog = Some(ErrorDialog::new(title, message));
    }

    /// Check whether the error dialog is open.
    pub fn is_error_dialog_visible(&self) -> bool {
        self.error_dialog.is_some()
    }

    /// The input context, for the help bar.
    pub fn key_context(&self) -> KeyContext {
        if self.table.is_loading() {
            KeyContext::Loading
        } else if self.table.confirm_dialog().is_some() {
            KeyContext::Confirm
        } else if self.table.is_editing() {
            KeyContext::Editing
        } else {
            KeyContext::Viewing
        }
    }

    /// Update the application state based on an event.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Quit => {
                info!("Quit event received");
                self.should_quit = true;
            }
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.handle_tick(),
        }
    }

    /// Apply the result of a background task.
    pub fn handle_message(&mut self, message: TaskMessage<Person>) {
        match message {
            TaskMessage::RecordsLoaded(people) => {
                info!(count = people.len(), "People loaded");
                self.people = people;
                self.table.set_loading(false);
                self.table.sync(&self.people);
                self.loading.stop();
            }
            TaskMessage::SaveFinished { id, result } => {
                // The saved person arrives on the demo channel first.
                self.drain_demo_events();
                match self.table.finish_save(&id, result) {
                    Ok(()) => self.notifications.success("Changes saved"),
                    Err(err) => debug!(id, error = %err, "Save finished with an error"),
                }
                self.drain_demo_events();
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if let Some(dialog) = &self.error_dialog {
            if dialog.handle_input(key) {
                self.error_dialog = None;
            }
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        match self.key_context() {
            KeyContext::Loading => {
                if key.code == KeyCode::Char('q') {
                    self.should_quit = true;
                }
                return;
            }
            KeyContext::Viewing => match key.code {
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('+') => {
                    self.change_page_size(1);
                    return;
                }
                KeyCode::Char('-') => {
                    self.change_page_size(-1);
                    return;
                }
                _ => {}
            },
            KeyContext::Confirm | KeyContext::Editing => {}
        }

        if let Some(event) = self.table.handle_input(key, &self.people) {
            self.handle_table_event(event);
        }
        self.drain_demo_events();
    }

    fn handle_table_event(&mut self, event: TableEvent<u32>) {
        match event {
            TableEvent::SaveRequested(pending) => {
                debug!(id = pending.id(), "Save queued");
                self.notifications.info("Saving...");
                self.pending_saves.push(pending);
            }
            TableEvent::Error(err) => self.handle_error(&AppError::Table(err)),
            TableEvent::PageChanged(page) => debug!(page, query = %self.query(), "Page changed"),
            other => trace!(event = ?other, "Table event"),
        }
    }

    fn drain_demo_events(&mut self) {
        while let Ok(event) = self.demo_rx.try_recv() {
            match event {
                DemoEvent::Viewed(person) => {
                    info!(id = person.id, "Viewing person");
                    self.notifications
                        .info(format!("Viewing {} (age {})", person.name, person.age));
                }
                DemoEvent::Redirected(id) => {
                    info!(id, "Redirecting");
                    self.notifications
                        .info(format!("Redirecting {} to /people/{}", id, id));
                }
                DemoEvent::Deleted(id) => {
                    self.people.retain(|person| person.id() != id);
                    self.table.sync(&self.people);
                    self.notifications.success("Deleted");
                }
                DemoEvent::Saved(person) => {
                    if let Some(slot) = self.people.iter_mut().find(|p| p.id == person.id) {
                        *slot = person;
                    }
                    self.table.sync(&self.people);
                }
                DemoEvent::SaveFailed { id, message } => {
                    self.notifications
                        .error(format!("Could not save row {}: {}", id, message));
                }
            }
        }
    }

    fn change_page_size(&mut self, delta: isize) {
        let current = self.table.pagination().items_per_page();
        let next = current.saturating_add_signed(delta).max(1);
        if next != current {
            self.table.set_items_per_page(next, &self.people);
            self.settings.items_per_page = next;
            debug!(items_per_page = next, "Page size changed");
        }
    }

    fn handle_tick(&mut self) {
        self.loading.tick();
        self.notifications.tick();
        self.table.sync(&self.people);
    }

    /// Render the application UI.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();
        let [header, content, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .areas(area);

        self.render_header(frame, header);
        render_table(frame, content, "People", &self.table, &self.people);
        render_context_help(frame, footer, self.key_context());

        self.notifications.render(frame, area);
        if let Some(dialog) = &self.error_dialog {
            dialog.render(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let [title_area, status_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, title_area);

        if self.loading.is_active() {
            self.loading.render(frame, status_area);
        } else {
            let query = self.query();
            let status = Paragraph::new(Span::styled(
                format!("{} rows/page  {}", self.settings.items_per_page, query),
                Style::default().fg(t.muted),
            ))
            .alignment(Alignment::Right);
            frame.render_widget(status, status_area);
        }
    }
}
