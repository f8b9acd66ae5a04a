use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use historian::{
    event_detail, figure_block, format_date, leaders_text, search_events, submit_event,
    submit_figure, Event, EventForm, FigureForm, HistoryStore, LEADERS,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Events,
    Figures,
    Leaders,
}

impl Page {
    pub fn next(&self) -> Self {
        match self {
            Page::Events => Page::Figures,
            Page::Figures => Page::Leaders,
            Page::Leaders => Page::Events,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Page::Events => Page::Leaders,
            Page::Figures => Page::Events,
            Page::Leaders => Page::Figures,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Events => "Events",
            Page::Figures => "Figures",
            Page::Leaders => "Leaders",
        }
    }
}

/// Modal input currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    None,
    Search { keyword: String },
    AddEvent { form: EventForm, field: usize },
    AddFigure { form: FigureForm, field: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Warning,
}

pub struct App {
    pub store: HistoryStore,
    pub filtered_events: Vec<Event>,
    pub active_search: Option<String>,
    pub state: ListState,
    pub current_page: Page,
    pub show_detail: bool,
    pub dialog: Dialog,
    /// Validation error shown inside the open dialog
    pub dialog_error: Option<String>,
    pub message: Option<(MessageKind, String)>,
}

impl App {
    pub fn new(store: HistoryStore) -> Self {
        let filtered_events = store.events().to_vec();
        let mut state = ListState::default();
        if !filtered_events.is_empty() {
            state.select(Some(0));
        }

        Self {
            store,
            filtered_events,
            active_search: None,
            state,
            current_page: Page::Events,
            show_detail: false,
            dialog: Dialog::None,
            dialog_error: None,
            message: None,
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.state.selected().and_then(|i| self.filtered_events.get(i))
    }

    fn show_events(&mut self, events: Vec<Event>) {
        self.filtered_events = events;
        if self.filtered_events.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(0));
        }
    }

    pub fn clear_search(&mut self) {
        self.active_search = None;
        self.show_events(self.store.events().to_vec());
    }

    /// Run a search. On a blank keyword or no hits the list stays as it was.
    pub fn run_search(&mut self, keyword: &str) {
        match search_events(&self.store, keyword) {
            Ok(hits) => {
                let hits: Vec<Event> = hits.into_iter().cloned().collect();
                self.message = Some((MessageKind::Info, format!("{} matching events", hits.len())));
                self.active_search = Some(keyword.to_string());
                self.show_events(hits);
            }
            Err(e) => self.message = Some((MessageKind::Warning, e.to_string())),
        }
    }

    fn submit_dialog(&mut self) {
        match &self.dialog {
            Dialog::None => {}
            Dialog::Search { keyword } => {
                let keyword = keyword.clone();
                self.dialog = Dialog::None;
                self.run_search(&keyword);
            }
            Dialog::AddEvent { form, .. } => match submit_event(&mut self.store, form) {
                Ok(event) => {
                    info!(name = %event.name, "event added from ui");
                    self.message = Some((MessageKind::Info, "Event added".to_string()));
                    self.close_dialog();
                    // Back to the full list, like after any add
                    self.clear_search();
                }
                Err(e) => self.dialog_error = Some(e.to_string()),
            },
            Dialog::AddFigure { form, .. } => match submit_figure(&mut self.store, form) {
                Ok(figure) => {
                    info!(name = %figure.name, "figure added from ui");
                    self.message = Some((MessageKind::Info, "Figure added".to_string()));
                    self.close_dialog();
                }
                Err(e) => self.dialog_error = Some(e.to_string()),
            },
        }
    }

    fn close_dialog(&mut self) {
        self.dialog = Dialog::None;
        self.dialog_error = None;
    }

    /// Text field that currently receives typed characters
    fn focused_input(&mut self) -> Option<&mut String> {
        match &mut self.dialog {
            Dialog::None => None,
            Dialog::Search { keyword } => Some(keyword),
            Dialog::AddEvent { form, field } => Some(match *field {
                0 => &mut form.name,
                1 => &mut form.date,
                _ => &mut form.description,
            }),
            Dialog::AddFigure { form, field } => Some(match *field {
                0 => &mut form.name,
                _ => &mut form.periods,
            }),
        }
    }

    fn move_field(&mut self, forward: bool) {
        let (field, count) = match &mut self.dialog {
            Dialog::AddEvent { field, .. } => (field, 3),
            Dialog::AddFigure { field, .. } => (field, 2),
            _ => return,
        };
        *field = if forward {
            (*field + 1) % count
        } else {
            (*field + count - 1) % count
        };
    }

    /// Handle one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.dialog != Dialog::None {
            match key.code {
                KeyCode::Esc => self.close_dialog(),
                KeyCode::Enter => self.submit_dialog(),
                KeyCode::Tab | KeyCode::Down => self.move_field(true),
                KeyCode::BackTab | KeyCode::Up => self.move_field(false),
                KeyCode::Backspace => {
                    if let Some(input) = self.focused_input() {
                        input.pop();
                    }
                }
                KeyCode::Char(c) => {
                    if let Some(input) = self.focused_input() {
                        input.push(c);
                    }
                }
                _ => {}
            }
            return false;
        }

        self.message = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    self.current_page = self.current_page.previous();
                } else {
                    self.current_page = self.current_page.next();
                }
            }
            KeyCode::BackTab => self.current_page = self.current_page.previous(),
            KeyCode::Char('/') => {
                self.current_page = Page::Events;
                self.dialog = Dialog::Search {
                    keyword: String::new(),
                };
            }
            KeyCode::Char('a') => {
                self.dialog = Dialog::AddEvent {
                    form: EventForm::default(),
                    field: 0,
                };
            }
            KeyCode::Char('n') => {
                self.dialog = Dialog::AddFigure {
                    form: FigureForm::default(),
                    field: 0,
                };
            }
            KeyCode::Char('c') => self.clear_search(),
            KeyCode::Enter if self.current_page == Page::Events => {
                self.show_detail = !self.show_detail;
            }
            KeyCode::Down | KeyCode::Char('j') => self.next(),
            KeyCode::Up | KeyCode::Char('k') => self.previous(),
            KeyCode::Home => {
                if !self.filtered_events.is_empty() {
                    self.state.select(Some(0));
                }
            }
            KeyCode::End => {
                if !self.filtered_events.is_empty() {
                    self.state.select(Some(self.filtered_events.len() - 1));
                }
            }
            _ => {}
        }
        false
    }

    pub fn next(&mut self) {
        let len = self.filtered_events.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.filtered_events.len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(i));
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with navigation
            Constraint::Min(0),    // Content area
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0], app);

    match app.current_page {
        Page::Events if app.show_detail => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(chunks[1]);
            render_events(f, content_chunks[0], app);
            render_detail_panel(f, content_chunks[1], app);
        }
        Page::Events => render_events(f, chunks[1], app),
        Page::Figures => render_figures(f, chunks[1], app),
        Page::Leaders => render_leaders(f, chunks[1], app),
    }

    render_status_bar(f, chunks[2], app);

    if app.dialog != Dialog::None {
        render_dialog(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let pages = [Page::Events, Page::Figures, Page::Leaders];

    let mut tab_spans = vec![];
    for (i, page) in pages.iter().enumerate() {
        if i > 0 {
            tab_spans.push(Span::raw(" │ "));
        }
        let style = if *page == app.current_page {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        tab_spans.push(Span::styled(page.title(), style));
    }

    tab_spans.push(Span::raw("  |  "));
    tab_spans.push(Span::styled(
        format!("Events: {}", app.store.events().len()),
        Style::default().fg(Color::White),
    ));
    tab_spans.push(Span::raw("  "));
    tab_spans.push(Span::styled(
        format!("Figures: {}", app.store.figures().len()),
        Style::default().fg(Color::Green),
    ));

    let header = Paragraph::new(Line::from(tab_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Historian "),
    );

    f.render_widget(header, area);
}

fn render_events(f: &mut Frame, area: Rect, app: &mut App) {
    let items: Vec<ListItem> = app
        .filtered_events
        .iter()
        .map(|event| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(
                    event.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(vec![
                    Span::styled("- Date: ", Style::default().fg(Color::Cyan)),
                    Span::raw(format_date(event.date)),
                ]),
                Line::from(vec![
                    Span::styled("- Description: ", Style::default().fg(Color::Cyan)),
                    Span::raw(event.description.clone()),
                ]),
                Line::from(""),
            ]))
        })
        .collect();

    let title = match &app.active_search {
        Some(keyword) => format!(" Events matching '{}' ", keyword),
        None => " Events ".to_string(),
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("→ ");

    f.render_stateful_widget(list, area, &mut app.state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Event Details ");

    let Some(event) = app.selected_event() else {
        f.render_widget(Paragraph::new("No event selected").block(block), area);
        return;
    };

    let mut content = vec![Line::from("")];
    for (label, value) in event_detail(event) {
        content.push(Line::from(vec![
            Span::styled(
                format!("  {}: ", label),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(value),
        ]));
        content.push(Line::from(""));
    }
    content.push(Line::from(Span::styled(
        "  Press Enter to close",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let panel = Paragraph::new(content).block(block).wrap(Wrap { trim: false });
    f.render_widget(panel, area);
}

fn render_figures(f: &mut Frame, area: Rect, app: &App) {
    let mut items: Vec<ListItem> = app
        .store
        .figures()
        .iter()
        .map(|figure| ListItem::new(format!("{}\n", figure_block(figure))))
        .collect();
    items.extend(
        LEADERS
            .iter()
            .map(|leader| ListItem::new(Span::styled(*leader, Style::default().fg(Color::DarkGray)))),
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Figures "),
    );

    f.render_widget(list, area);
}

fn render_leaders(f: &mut Frame, area: Rect, app: &App) {
    let text = leaders_text(app.store.figures_by_first_period_start());
    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(" Historical Leaders "),
    );

    f.render_widget(paragraph, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut status_spans = vec![];

    if let Some((kind, text)) = &app.message {
        let color = match kind {
            MessageKind::Info => Color::Green,
            MessageKind::Warning => Color::Red,
        };
        status_spans.push(Span::styled(format!(" {} ", text), Style::default().fg(color)));
        status_spans.push(Span::raw(" | "));
    }

    for (key, label, color) in [
        ("/", " Search | ", Color::Yellow),
        ("a", " Add event | ", Color::Yellow),
        ("n", " Add figure | ", Color::Yellow),
        ("c", " Clear | ", Color::Yellow),
        ("Enter", " Details | ", Color::Yellow),
        ("Tab", " Page | ", Color::Yellow),
        ("q", " Quit", Color::Red),
    ] {
        status_spans.push(Span::styled(key, Style::default().fg(color)));
        status_spans.push(Span::raw(label));
    }

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

fn render_dialog(f: &mut Frame, app: &App) {
    let (title, fields, focused): (&str, Vec<(&str, &str)>, usize) = match &app.dialog {
        Dialog::None => return,
        Dialog::Search { keyword } => (" Search Events ", vec![("Keyword", keyword.as_str())], 0),
        Dialog::AddEvent { form, field } => (
            " New Event ",
            vec![
                ("Name", form.name.as_str()),
                ("Date (dd/mm/yyyy)", form.date.as_str()),
                ("Description", form.description.as_str()),
            ],
            *field,
        ),
        Dialog::AddFigure { form, field } => (
            " New Figure ",
            vec![
                ("Name", form.name.as_str()),
                ("Periods (Name - dd/mm/yyyy - dd/mm/yyyy, ...)", form.periods.as_str()),
            ],
            *field,
        ),
    };

    let area = centered_rect(70, 50, f.size());
    let mut content = vec![Line::from("")];
    for (i, (label, value)) in fields.iter().enumerate() {
        let label_style = if i == focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        content.push(Line::from(Span::styled(format!("  {}:", label), label_style)));
        let cursor = if i == focused { "_" } else { "" };
        content.push(Line::from(format!("  {}{}", value, cursor)));
        content.push(Line::from(""));
    }
    if let Some(error) = &app.dialog_error {
        content.push(Line::from(Span::styled(
            format!("  {}", error),
            Style::default().fg(Color::Red),
        )));
        content.push(Line::from(""));
    }
    content.push(Line::from(Span::styled(
        "  Enter submit | Tab next field | Esc cancel",
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
    )));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(title),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_search_filters_list() {
        let mut app = App::new(HistoryStore::with_sample_data());

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "berlin");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.filtered_events.len(), 1);
        assert_eq!(app.filtered_events[0].name, "Berlin Duvarı Yıkıldı");
        assert_eq!(app.dialog, Dialog::None);
    }

    #[test]
    fn test_search_without_match_keeps_list() {
        let mut app = App::new(HistoryStore::with_sample_data());

        app.run_search("xyzzy");

        assert_eq!(app.filtered_events.len(), 10);
        assert!(matches!(app.message, Some((MessageKind::Warning, _))));
    }

    #[test]
    fn test_add_event_dialog() {
        let mut app = App::new(HistoryStore::with_sample_data());
        app.run_search("berlin");

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Test Olay");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "14/07/1789");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "desc");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.dialog, Dialog::None);
        assert_eq!(app.store.events().len(), 11);
        // Full list is shown again after adding
        assert_eq!(app.filtered_events.len(), 11);
        assert_eq!(app.active_search, None);
    }

    #[test]
    fn test_add_event_bad_date_stays_open() {
        let mut app = App::new(HistoryStore::new());

        press(&mut app, KeyCode::Char('a'));
        type_text(&mut app, "Olay");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "1789");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "desc");
        press(&mut app, KeyCode::Enter);

        assert!(matches!(app.dialog, Dialog::AddEvent { .. }));
        assert!(app.dialog_error.is_some());
        assert!(app.store.events().is_empty());

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.dialog, Dialog::None);
        assert_eq!(app.dialog_error, None);
    }

    #[test]
    fn test_add_figure_dialog() {
        let mut app = App::new(HistoryStore::new());

        press(&mut app, KeyCode::Char('n'));
        type_text(&mut app, "Atatürk");
        press(&mut app, KeyCode::Down);
        type_text(&mut app, "Savaş - 19/05/1919 - 24/07/1923");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.store.figures().len(), 1);
        assert_eq!(app.store.figures()[0].periods[0].name, "Savaş");
    }

    #[test]
    fn test_typing_q_in_dialog_does_not_quit() {
        let mut app = App::new(HistoryStore::new());
        press(&mut app, KeyCode::Char('/'));

        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(
            app.dialog,
            Dialog::Search {
                keyword: "q".to_string()
            }
        );
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn test_navigation_wraps() {
        let mut app = App::new(HistoryStore::with_sample_data());

        app.previous();
        assert_eq!(app.state.selected(), Some(9));
        app.next();
        assert_eq!(app.state.selected(), Some(0));
    }

    #[test]
    fn test_pages_cycle() {
        let mut app = App::new(HistoryStore::new());

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page, Page::Figures);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.current_page, Page::Leaders);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.current_page, Page::Figures);
    }

    #[test]
    fn test_render_events_page() {
        let mut app = App::new(HistoryStore::with_sample_data());
        let text = screen(&mut app);

        assert!(text.contains("Fransız Devrimi"));
        assert!(text.contains("14/07/1789"));
    }

    #[test]
    fn test_render_figures_page_shows_leaders() {
        let mut app = App::new(HistoryStore::new());
        app.current_page = Page::Figures;

        assert!(screen(&mut app).contains("Napolyon Bonapart"));
    }

    #[test]
    fn test_render_dialog_error() {
        let mut app = App::new(HistoryStore::new());
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Enter);

        assert!(screen(&mut app).contains("please fill in the name field"));
    }
}
