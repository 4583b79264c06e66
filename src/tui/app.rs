use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::io::config_io::load_config;
use crate::io::log::log_error;
use crate::io::storage::{self, DirStore, Kv};
use crate::io::watcher::DataWatcher;
use crate::model::config::AppConfig;
use crate::model::task::{Filter, Task};
use crate::store::Store;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing a new task into the input row
    Insert,
    Search,
    /// Reordering the task under the cursor
    Move,
}

/// State recorded while a task is being moved, so Esc can put it back.
#[derive(Debug, Clone)]
pub struct MoveState {
    pub task_id: u64,
    /// Index in the full (unfiltered) list when the move started.
    pub original_index: usize,
}

/// One display row of the task list: the pure view-model the renderer
/// translates into terminal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Task {
        id: u64,
        text: String,
        completed: bool,
    },
    /// Centered message shown when the filtered view has nothing in it.
    Placeholder { message: &'static str },
}

/// Placeholder text for an empty filtered view.
pub fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No todos yet",
        Filter::Active => "No active todos",
        Filter::Completed => "No completed todos",
    }
}

/// Project tasks + filter into display rows, preserving store order.
pub fn build_rows(tasks: &[Task], filter: Filter) -> Vec<Row> {
    let rows: Vec<Row> = tasks
        .iter()
        .filter(|t| filter.matches(t))
        .map(|t| Row::Task {
            id: t.id,
            text: t.text.clone(),
            completed: t.completed,
        })
        .collect();

    if rows.is_empty() {
        return vec![Row::Placeholder {
            message: empty_message(filter),
        }];
    }
    rows
}

/// Main application state
pub struct App {
    pub store: Store,
    pub kv: Box<dyn Kv>,
    pub data_dir: PathBuf,
    pub config: AppConfig,
    pub filter: Filter,
    pub dark_theme: bool,
    pub theme: Theme,
    pub mode: Mode,
    /// Cursor index into the visible (filtered) rows
    pub cursor: usize,
    /// Scroll offset (first visible row)
    pub scroll_offset: usize,
    /// New-task input buffer and byte cursor
    pub input: String,
    pub input_cursor: usize,
    /// Search mode: current query being typed
    pub search_input: String,
    /// Last executed search pattern
    pub last_search: Option<String>,
    pub move_state: Option<MoveState>,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        store: Store,
        kv: Box<dyn Kv>,
        data_dir: PathBuf,
        config: AppConfig,
        dark_theme: bool,
    ) -> Self {
        let theme = Theme::from_config(dark_theme, &config.ui);
        App {
            store,
            kv,
            data_dir,
            config,
            filter: Filter::All,
            dark_theme,
            theme,
            mode: Mode::Navigate,
            cursor: 0,
            scroll_offset: 0,
            input: String::new(),
            input_cursor: 0,
            search_input: String::new(),
            last_search: None,
            move_state: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// The display rows for the current filter.
    pub fn rows(&self) -> Vec<Row> {
        build_rows(self.store.tasks(), self.filter)
    }

    /// Ids of the visible (filtered) tasks, in display order.
    pub fn visible_ids(&self) -> Vec<u64> {
        self.store
            .filtered(self.filter)
            .iter()
            .map(|t| t.id)
            .collect()
    }

    /// The task id under the cursor, if the cursor is on a task row.
    pub fn cursor_task_id(&self) -> Option<u64> {
        self.visible_ids().get(self.cursor).copied()
    }

    /// Keep the cursor inside the visible row range after mutations.
    pub fn clamp_cursor(&mut self) {
        let visible = self.visible_ids().len();
        self.cursor = self.cursor.min(visible.saturating_sub(1));
    }

    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter != filter {
            self.filter = filter;
            self.cursor = 0;
            self.scroll_offset = 0;
        }
    }

    /// Flip the theme flag, rebuild the palette, persist immediately.
    pub fn toggle_theme(&mut self) {
        self.dark_theme = !self.dark_theme;
        self.theme = Theme::from_config(self.dark_theme, &self.config.ui);
        if let Err(e) = storage::save_theme(self.kv.as_ref(), self.dark_theme) {
            log_error(&self.data_dir, "save darkTheme", &e.to_string());
        }
    }

    /// Write the task list back to the key-value store. Failures are
    /// logged, never surfaced; no operation is fatal.
    pub fn persist_tasks(&self) {
        if let Err(e) = storage::save_tasks(self.kv.as_ref(), self.store.tasks()) {
            log_error(&self.data_dir, "save todos", &e.to_string());
        }
    }

    /// Get the active search regex for highlighting.
    /// In Search mode: compiles from current input. In Navigate: compiles from last_search.
    pub fn active_search_re(&self) -> Option<Regex> {
        let pattern = match self.mode {
            Mode::Search if !self.search_input.is_empty() => &self.search_input,
            Mode::Navigate | Mode::Move => self.last_search.as_deref()?,
            _ => return None,
        };
        Regex::new(&format!("(?i){}", pattern))
            .or_else(|_| Regex::new(&format!("(?i){}", regex::escape(pattern))))
            .ok()
    }

    /// Re-read tasks and theme flag after an external change to the data
    /// directory. Skipped while a move is in flight so the restore index
    /// stays meaningful.
    pub fn reload_from_disk(&mut self) {
        if self.move_state.is_some() {
            return;
        }
        match storage::load_tasks(self.kv.as_ref()) {
            Ok(Some(tasks)) => self.store = Store::new(tasks),
            Ok(None) => {}
            Err(e) => log_error(&self.data_dir, "reload todos", &e.to_string()),
        }
        let dark = storage::load_theme(self.kv.as_ref());
        if dark != self.dark_theme {
            self.dark_theme = dark;
            self.theme = Theme::from_config(dark, &self.config.ui);
        }
        self.clamp_cursor();
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = storage::resolve_data_dir(data_dir)?;
    let kv = DirStore::open(&data_dir)?;

    let store = storage::load_or_seed(&kv, &data_dir);
    let dark_theme = storage::load_theme(&kv);
    let config = match load_config(&data_dir) {
        Ok(c) => c,
        Err(e) => {
            log_error(&data_dir, "load config.toml", &e.to_string());
            AppConfig::default()
        }
    };

    let mut app = App::new(store, Box::new(kv), data_dir.clone(), config, dark_theme);

    // External edits (e.g. the CLI) show up without restarting the TUI.
    let watcher = DataWatcher::start(&data_dir).ok();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Run event loop
    let result = run_event_loop(&mut terminal, &mut app, watcher.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    watcher: Option<&DataWatcher>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if let Some(watcher) = watcher
            && !watcher.poll().is_empty()
        {
            app.reload_from_disk();
        }

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
