use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Tabs, Wrap},
    Frame, Terminal,
};
use std::io;

use woke_or_not::{Catalog, CatalogQuery, Category, Entity, LinkLogoLoader, LogoImage, LogoLoader};

const WOKE_COLOR: Color = Color::Blue;
const NOT_WOKE_COLOR: Color = Color::Red;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub struct App<'a> {
    catalog: &'a Catalog,
    pub category: Category,
    pub search: String,
    pub input_mode: InputMode,
    pub limit: usize,
    /// Index into woke rows followed by not-woke rows
    pub selected: Option<usize>,
    pub show_detail: bool,
    loader: LinkLogoLoader,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog, limit: usize) -> Self {
        let mut app = Self {
            catalog,
            category: Category::default(),
            search: String::new(),
            input_mode: InputMode::Normal,
            limit,
            selected: None,
            show_detail: false,
            loader: LinkLogoLoader,
        };
        app.reset_selection();
        app
    }

    fn section(&self, is_woke: bool) -> Vec<&'a Entity> {
        CatalogQuery::new(self.category, is_woke)
            .search(self.search.clone())
            .limit(self.limit)
            .run(self.catalog)
    }

    pub fn woke_items(&self) -> Vec<&'a Entity> {
        self.section(true)
    }

    pub fn not_woke_items(&self) -> Vec<&'a Entity> {
        self.section(false)
    }

    /// Both sections as one selectable list
    pub fn rows(&self) -> Vec<&'a Entity> {
        let mut rows = self.woke_items();
        rows.extend(self.not_woke_items());
        rows
    }

    pub fn selected_entity(&self) -> Option<&'a Entity> {
        self.selected.and_then(|i| self.rows().get(i).copied())
    }

    pub fn logo_for(&self, entity: &Entity) -> LogoImage {
        self.loader.load(entity.logo_ref.as_deref())
    }

    fn reset_selection(&mut self) {
        self.selected = if self.rows().is_empty() { None } else { Some(0) };
        if self.selected.is_none() {
            self.show_detail = false;
        }
    }

    /// Switching tabs clears the search text
    pub fn set_category(&mut self, category: Category) {
        self.category = category;
        self.search.clear();
        self.show_detail = false;
        self.reset_selection();
    }

    pub fn next_category(&mut self) {
        self.set_category(self.category.next());
    }

    pub fn previous_category(&mut self) {
        self.set_category(self.category.previous());
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.reset_selection();
    }

    pub fn pop_search(&mut self) {
        self.search.pop();
        self.reset_selection();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.reset_selection();
    }

    pub fn toggle_detail(&mut self) {
        if self.selected_entity().is_some() {
            self.show_detail = !self.show_detail;
        }
    }

    pub fn next(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    pub fn previous(&mut self) {
        let len = self.rows().len();
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.selected = Some(i);
    }

    /// Apply one key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match self.input_mode {
            InputMode::Editing => match key.code {
                KeyCode::Enter | KeyCode::Esc => self.input_mode = InputMode::Normal,
                KeyCode::Backspace => self.pop_search(),
                KeyCode::Char(c) => self.push_search(c),
                _ => {}
            },
            InputMode::Normal => match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc => {
                    if self.show_detail {
                        self.show_detail = false;
                    } else {
                        return true;
                    }
                }
                KeyCode::Char('/') | KeyCode::Char('s') => {
                    self.input_mode = InputMode::Editing;
                }
                KeyCode::Char('c') => self.clear_search(),
                KeyCode::Enter => self.toggle_detail(),
                KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.next_category(),
                KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => self.previous_category(),
                KeyCode::Down | KeyCode::Char('j') => self.next(),
                KeyCode::Up | KeyCode::Char('k') => self.previous(),
                KeyCode::Home => self.reset_selection(),
                KeyCode::End => {
                    let len = self.rows().len();
                    if len > 0 {
                        self.selected = Some(len - 1);
                    }
                }
                _ => {}
            },
        }

        false
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res?;
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Category tabs
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Sections
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_title(f, chunks[0]);
    render_tabs(f, chunks[1], app);
    render_search(f, chunks[2], app);

    if app.show_detail {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55), // Sections
                Constraint::Percentage(45), // Detail panel
            ])
            .split(chunks[3]);

        render_sections(f, content_chunks[0], app);
        render_detail_panel(f, content_chunks[1], app);
    } else {
        render_sections(f, chunks[3], app);
    }

    render_status_bar(f, chunks[4], app);
}

fn render_title(f: &mut Frame, area: Rect) {
    let bold = Modifier::BOLD;
    let title = Line::from(vec![
        Span::styled("WOKE", Style::default().fg(WOKE_COLOR).add_modifier(bold)),
        Span::styled(" OR ", Style::default().fg(Color::White).add_modifier(bold)),
        Span::styled("NOT", Style::default().fg(NOT_WOKE_COLOR).add_modifier(bold)),
        Span::styled(" ?", Style::default().fg(Color::White).add_modifier(bold)),
    ]);
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);
}

fn render_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Category::ALL.iter().map(|c| Line::from(c.label())).collect();
    let selected = Category::ALL
        .iter()
        .position(|c| *c == app.category)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(WOKE_COLOR)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" │ ")
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::Cyan)));
    f.render_widget(tabs, area);
}

fn render_search(f: &mut Frame, area: Rect, app: &App) {
    let (border, hint) = match app.input_mode {
        InputMode::Editing => (Color::Yellow, " Search (Enter to finish) "),
        InputMode::Normal => (Color::White, " Search (/ to type) "),
    };

    let text = if app.search.is_empty() && app.input_mode == InputMode::Normal {
        Line::from(Span::styled("Woke or Not", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(vec![
            Span::raw(app.search.as_str()),
            if app.input_mode == InputMode::Editing {
                Span::styled("█", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("")
            },
        ])
    };

    let search = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(hint),
    );
    f.render_widget(search, area);
}

fn render_sections(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let woke = app.woke_items();
    let not_woke = app.not_woke_items();
    let woke_len = woke.len();

    let woke_selected = app.selected.filter(|i| *i < woke_len);
    let not_woke_selected = app
        .selected
        .filter(|i| *i >= woke_len)
        .map(|i| i - woke_len);

    render_section(f, halves[0], app, true, &woke, woke_selected);
    render_section(f, halves[1], app, false, &not_woke, not_woke_selected);
}

fn render_section(
    f: &mut Frame,
    area: Rect,
    app: &App,
    is_woke: bool,
    items: &[&Entity],
    selected: Option<usize>,
) {
    let color = if is_woke { WOKE_COLOR } else { NOT_WOKE_COLOR };
    let prefix = if is_woke { "WOKE" } else { "NOT WOKE" };
    let title = format!(" {} {} ", prefix, app.category.label().to_uppercase());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)));

    if items.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No matches",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
        ))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows = items.iter().map(|entity| {
        let logo = app.logo_for(entity);
        let logo_color = if logo.is_placeholder() { Color::Gray } else { color };
        let cells = vec![
            Cell::from(logo.glyph()).style(Style::default().fg(logo_color)),
            Cell::from(truncate(&entity.name, 40)).style(Style::default().fg(color)),
            Cell::from(format!("{:>3}%", entity.displayed_percentage()))
                .style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ];
        Row::new(cells).height(1)
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Min(20),
            Constraint::Length(5),
        ],
    )
    .block(block)
    .highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("→ ");

    let mut state = TableState::default();
    state.select(selected);
    f.render_stateful_widget(table, area, &mut state);
}

fn render_detail_panel(f: &mut Frame, area: Rect, app: &App) {
    let Some(entity) = app.selected_entity() else {
        let no_selection = Paragraph::new("Nothing selected").block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Details "),
        );
        f.render_widget(no_selection, area);
        return;
    };

    let color = if entity.is_woke { WOKE_COLOR } else { NOT_WOKE_COLOR };
    let label = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let logo = app.logo_for(entity);

    let logo_line = match &logo {
        LogoImage::Remote(url) => Line::from(vec![
            Span::styled("  Logo: ", label),
            Span::styled(logo.glyph(), Style::default().fg(color)),
            Span::raw(" "),
            Span::raw(url.as_str()),
        ]),
        LogoImage::Placeholder => Line::from(vec![
            Span::styled("  Logo: ", label),
            Span::styled(
                format!("{} placeholder", logo.glyph()),
                Style::default().fg(Color::Gray),
            ),
        ]),
    };

    let mut content = vec![
        Line::from(""),
        logo_line,
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", entity.name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", entity.status_label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Woke Percentage: ", label),
            Span::styled(
                format!("{}%", entity.displayed_percentage()),
                Style::default().fg(color),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Category: ", label),
            Span::raw(entity.category.label()),
        ]),
    ];

    if let Some(evidence) = &entity.evidence_ref {
        content.push(Line::from(""));
        content.push(Line::from(vec![
            Span::styled(
                "  Best Evidence: ",
                Style::default().fg(Color::White).bg(WOKE_COLOR).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(evidence.as_str(), Style::default().add_modifier(Modifier::UNDERLINED)),
        ]));
    }

    let detail = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Details "),
        );
    f.render_widget(detail, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let total = app.rows().len();
    let selected = app.selected.map(|i| i + 1).unwrap_or(0);

    let mut status_spans = vec![Span::styled(
        format!(" Row: {}/{} ", selected, total),
        Style::default().fg(Color::Cyan),
    )];

    if !app.search.is_empty() {
        status_spans.push(Span::raw(" | "));
        status_spans.push(Span::styled(
            format!("Search: \"{}\"", app.search),
            Style::default().fg(Color::Green),
        ));
        status_spans.push(Span::raw(" ("));
        status_spans.push(Span::styled("c", Style::default().fg(Color::Yellow)));
        status_spans.push(Span::raw(" clear)"));
    }

    status_spans.push(Span::raw(" | "));
    status_spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Details | "));
    status_spans.push(Span::styled("Tab", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Category | "));
    status_spans.push(Span::styled("/", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Search | "));
    status_spans.push(Span::styled("↑/↓", Style::default().fg(Color::Yellow)));
    status_spans.push(Span::raw(" Nav | "));
    status_spans.push(Span::styled("q", Style::default().fg(Color::Red)));
    status_spans.push(Span::raw(" Quit"));

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    f.render_widget(status_bar, area);
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn names(items: &[&Entity]) -> Vec<String> {
        items.iter().map(|e| e.name.clone()).collect()
    }

    fn screen(app: &App) -> String {
        let backend = TestBackend::new(110, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_initial_state() {
        let catalog = Catalog::builtin();
        let app = App::new(&catalog, 5);

        assert_eq!(app.category, Category::Companies);
        assert_eq!(app.selected, Some(0));
        assert_eq!(app.rows().len(), 10);
        assert_eq!(app.selected_entity().unwrap().name, "Apple");
    }

    #[test]
    fn test_typing_filters_live() {
        let catalog = Catalog::builtin();
        let mut app = App::new(&catalog, 5);

        app.handle_key(key(KeyCode::Char('/')));
        assert_eq!(app.input_mode, InputMode::Editing);
        for c in "HOME".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.search, "HOME");
        assert!(app.woke_items().is_empty());
        assert_eq!(names(&app.not_woke_items()), vec!["Home Depot"]);
        assert_eq!(app.selected_entity().unwrap().name, "Home Depot");

        // 'q' while editing is text, not quit
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.search, "HOMEq");
        assert!(app.selected.is_none());

        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.search, "HOME");
    }

    #[test]
    fn test_switching_category_resets_search() {
        let catalog = Catalog::builtin();
        let mut app = App::new(&catalog, 5);
        app.push_search('a');

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.category, Category::Countries);
        assert!(app.search.is_empty());
        assert_eq!(app.selected_entity().unwrap().name, "Canada");

        app.handle_key(key(KeyCode::BackTab));
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.category, Category::Government);
    }

    #[test]
    fn test_navigation_crosses_sections_and_wraps() {
        let catalog = Catalog::builtin();
        let mut app = App::new(&catalog, 5);

        for _ in 0..5 {
            app.handle_key(key(KeyCode::Down));
        }
        assert_eq!(app.selected_entity().unwrap().name, "Chick-fil-A");

        app.handle_key(key(KeyCode::End));
        assert_eq!(app.selected_entity().unwrap().name, "Walmart");

        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_entity().unwrap().name, "Apple");

        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected_entity().unwrap().name, "Walmart");
    }

    #[test]
    fn test_detail_toggle_and_quit() {
        let catalog = Catalog::builtin();
        let mut app = App::new(&catalog, 5);

        app.handle_key(key(KeyCode::Enter));
        assert!(app.show_detail);

        // Esc closes the panel first, then quits
        assert!(!app.handle_key(key(KeyCode::Esc)));
        assert!(!app.show_detail);
        assert!(app.handle_key(key(KeyCode::Esc)));

        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_detail_needs_selection() {
        let catalog = Catalog::builtin();
        let mut app = App::new(&catalog, 5);
        for c in "zzz".chars() {
            app.push_search(c);
        }
        app.toggle_detail();
        assert!(!app.show_detail);
    }

    #[test]
    fn test_limit_applies_per_section() {
        let catalog = Catalog::builtin();
        let app = App::new(&catalog, 2);
        assert_eq!(names(&app.woke_items()), vec!["Apple", "Google"]);
        assert_eq!(names(&app.not_woke_items()), vec!["Chick-fil-A", "Hobby Lobby"]);
    }

    #[test]
    fn test_render_main_screen() {
        let catalog = Catalog::builtin();
        let app = App::new(&catalog, 5);
        let text = screen(&app);

        assert!(text.contains("WOKE OR NOT ?"));
        assert!(text.contains("Non-Profits"));
        assert!(text.contains("WOKE COMPANIES"));
        assert!(text.contains("NOT WOKE COMPANIES"));
        assert!(text.contains("Apple"));
        assert!(text.contains(" 90%"));
        // Goya shows the complement
        assert!(text.contains(" 75%"));
    }

    #[test]
    fn test_render_detail_panel() {
        let catalog = Catalog::builtin();
        let mut app = App::new(&catalog, 5);
        for _ in 0..7 {
            app.next();
        }
        assert_eq!(app.selected_entity().unwrap().name, "Goya");
        app.toggle_detail();

        let text = screen(&app);
        assert!(text.contains("Woke Percentage: 75%"));
        assert!(text.contains("NOT WOKE"));
        assert!(text.contains("Best Evidence"));
    }

    #[test]
    fn test_render_empty_section() {
        let catalog = Catalog::builtin();
        let mut app = App::new(&catalog, 5);
        app.set_category(Category::Government);
        for c in "zzz".chars() {
            app.push_search(c);
        }
        let text = screen(&app);
        assert!(text.contains("NOT WOKE GOVERNMENT"));
        assert!(text.contains("No matches"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Apple", 10), "Apple");
        assert_eq!(truncate("University of California, Berkeley", 10), "Univers...");
    }
}
