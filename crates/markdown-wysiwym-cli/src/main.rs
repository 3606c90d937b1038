mod highlight;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use highlight::{LineMarks, TerminalSink};
use markdown_wysiwym_config::{Config, ConfigError};
use markdown_wysiwym_engine::{DocumentId, DocumentSession, LineRange, Workspace, io, render_into};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    config: Config,
    workspace: Workspace,
    files: Vec<RelativePathBuf>,
    file_list_state: ListState,
    current: Option<DocumentId>,
    cursor: usize,
    mark: Option<usize>,
    status: String,
}

impl App {
    fn new(config: Config) -> Result<Self> {
        let files = io::scan_markdown_files(&config.notes_path)?;
        let workspace = Workspace::new(&config.parser_options());

        let mut app = Self {
            config,
            workspace,
            files,
            file_list_state: ListState::default(),
            current: None,
            cursor: 0,
            mark: None,
            status: String::new(),
        };

        // Select first file if available
        if !app.files.is_empty() {
            app.file_list_state.select(Some(0));
            app.open_selected();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.open_selected();
    }

    fn previous_file(&mut self) {
        if self.files.is_empty() {
            return;
        }
        let i = match self.file_list_state.selected() {
            Some(0) | None => self.files.len() - 1,
            Some(i) => i - 1,
        };
        self.file_list_state.select(Some(i));
        self.open_selected();
    }

    /// Switches to the selected file, reusing its session if already open.
    fn open_selected(&mut self) {
        let Some(path) = self
            .file_list_state
            .selected()
            .and_then(|i| self.files.get(i))
        else {
            return;
        };

        self.cursor = 0;
        self.mark = None;
        if let Some(id) = self.workspace.find(path) {
            self.current = Some(id);
            return;
        }
        match self
            .workspace
            .open_file(&self.config.notes_path, &self.config.metadata_dir, path)
        {
            Ok(id) => {
                self.current = Some(id);
                self.status.clear();
            }
            Err(e) => {
                self.current = None;
                self.status = format!("Error opening {path}: {e:#}");
            }
        }
    }

    fn session(&self) -> Option<&DocumentSession> {
        self.current.and_then(|id| self.workspace.get(id).ok())
    }

    fn session_mut(&mut self) -> Option<&mut DocumentSession> {
        self.current.and_then(|id| self.workspace.get_mut(id).ok())
    }

    fn move_cursor(&mut self, down: bool) {
        let Some(count) = self.session().map(DocumentSession::line_count) else {
            return;
        };
        self.cursor = if down {
            (self.cursor + 1).min(count.saturating_sub(1))
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    fn toggle_mark(&mut self) {
        self.mark = match self.mark {
            Some(_) => None,
            None => Some(self.cursor),
        };
    }

    /// Marked lines, or the cursor line when nothing is marked.
    fn selection(&self) -> LineRange {
        LineRange::spanning(self.mark.unwrap_or(self.cursor), self.cursor)
    }

    fn tag_selection(&mut self, external: bool) {
        let range = self.selection();
        let Some(session) = self.session_mut() else {
            return;
        };
        if external {
            session.tag_external(range);
        } else {
            session.untag(range);
        }
        self.mark = None;
        self.status = format!(
            "{} lines {}-{}",
            if external { "Tagged" } else { "Untagged" },
            range.start + 1,
            range.end + 1
        );
    }

    fn open_line_below(&mut self) {
        let cursor = self.cursor;
        let Some(session) = self.session_mut() else {
            return;
        };
        // Past the last line this is the buffer end, so the newline still opens a new line.
        let at = session.line_start(cursor + 1);
        match session.apply_edit(at..at, "\n") {
            Ok(_) => self.cursor += 1,
            Err(e) => self.status = format!("Edit failed: {e}"),
        }
    }

    fn delete_line(&mut self) {
        let cursor = self.cursor;
        let Some(session) = self.session_mut() else {
            return;
        };
        let count = session.line_count();
        let range = if cursor + 1 < count {
            session.line_start(cursor)..session.line_start(cursor + 1)
        } else if cursor > 0 {
            // Last line: take the preceding newline with it.
            session.line_start(cursor) - 1..session.line_start(count)
        } else {
            0..session.line_start(count)
        };
        match session.apply_edit(range, "") {
            Ok(_) => {
                let count = session.line_count();
                self.cursor = self.cursor.min(count.saturating_sub(1));
            }
            Err(e) => self.status = format!("Edit failed: {e}"),
        }
    }

    fn save(&mut self) {
        let Some(id) = self.current else {
            return;
        };
        self.status = match self
            .workspace
            .save(id, &self.config.notes_path, &self.config.metadata_dir)
        {
            Ok(()) => "Saved".to_string(),
            Err(e) => format!("Save failed: {e:#}"),
        };
    }

    fn render_document(&self) -> Vec<Line<'static>> {
        let Some(session) = self.session() else {
            return Vec::new();
        };
        let text = session.text();
        let mut sink = TerminalSink::new(&self.config, &text);
        render_into(&mut sink, &session.spans());

        let is_external = |line: usize| session.is_external(line);
        sink.into_lines(&LineMarks {
            cursor: self.cursor,
            selection: self.mark.map(|_| {
                let range = self.selection();
                (range.start, range.end)
            }),
            is_external: &is_external,
        })
    }
}

/// Config for an explicit notes path: the config file's other settings when
/// one exists, defaults when none does. A broken config file is an error.
fn with_notes_path(
    loaded: Result<Option<Config>, ConfigError>,
    notes_path: PathBuf,
) -> Result<Config, ConfigError> {
    Ok(match loaded? {
        Some(mut config) => {
            config.notes_path = notes_path;
            config
        }
        None => Config::new(notes_path),
    })
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    // Determine notes path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it, keeping any other configured settings
        let notes_path = PathBuf::from(&args[1]);
        config = match with_notes_path(Config::load(), notes_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Fix or remove {}", config_path.display());
                process::exit(1);
            }
        };
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(loaded)) => {
                config = loaded;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No notes path provided and no config file found");
                eprintln!("Usage: {} <notes-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <notes-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [notes-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate notes directory using engine
    if let Err(e) = io::validate_notes_dir(&config.notes_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Notes path '{}'{} is invalid: {e}",
            config.notes_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app
    let res = App::new(config).and_then(|mut app| run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => app.next_file(),
                KeyCode::BackTab => app.previous_file(),
                KeyCode::Down | KeyCode::Char('j') => app.move_cursor(true),
                KeyCode::Up | KeyCode::Char('k') => app.move_cursor(false),
                KeyCode::Char('v') => app.toggle_mark(),
                KeyCode::Esc => app.mark = None,
                KeyCode::Char('t') => app.tag_selection(true),
                KeyCode::Char('u') => app.tag_selection(false),
                KeyCode::Char('o') => app.open_line_below(),
                KeyCode::Char('d') => app.delete_line(),
                KeyCode::Char('w') => app.save(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)].as_ref())
        .split(rows[0]);

    // File list panel
    let file_items: Vec<ListItem> = app
        .files
        .iter()
        .map(|path| ListItem::new(vec![Line::from(vec![Span::raw(format!("📄 {path}"))])]))
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Files"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Content panel
    let mut content_text = app.render_document();
    if content_text.is_empty() {
        content_text = vec![Line::from("Select a file to view its content")];
    }
    let title = match app.session() {
        Some(session) => format!(
            "{} ({} external lines)",
            session.path(),
            session.annotations().covered_lines()
        ),
        None => "Content".to_string(),
    };
    let scroll = app.cursor.saturating_sub(chunks[1].height.saturating_sub(3) as usize);
    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll.min(u16::MAX as usize) as u16, 0));

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | Tab: Next file | j/k: Move | v: Mark | "),
        Span::raw("t: Tag external | u: Untag | o: New line | d: Delete line | w: Save"),
    ]);
    let status = Line::from(Span::styled(
        app.status.clone(),
        Style::default().fg(Color::Cyan),
    ));

    f.render_widget(Paragraph::new(vec![help_text, status]), rows[1]);
}
