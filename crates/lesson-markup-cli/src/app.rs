use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use lesson_markup_engine::Lesson;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

use crate::styled::bullet_lines;

/// A selectable entry in the left pane: a lesson section or a practice task.
struct Entry {
    title: String,
    description: String,
    bullets: Vec<String>,
    numbered: bool,
}

pub struct App {
    title: String,
    entries: Vec<Entry>,
    list_state: ListState,
}

impl App {
    pub fn new(lesson: Lesson) -> Self {
        let sections = lesson.sections.into_iter().map(|s| Entry {
            title: s.title,
            description: s.description,
            bullets: s.bullets,
            numbered: false,
        });
        let practice = lesson.practice.into_iter().map(|p| Entry {
            title: p.title,
            description: p.description,
            bullets: p.steps,
            numbered: true,
        });

        let mut app = Self {
            title: lesson.title,
            entries: sections.chain(practice).collect(),
            list_state: ListState::default(),
        };
        if !app.entries.is_empty() {
            app.list_state.select(Some(0));
        }
        app
    }

    fn next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn selected_lines(&self) -> Vec<Line<'static>> {
        let Some(entry) = self
            .list_state
            .selected()
            .and_then(|i| self.entries.get(i))
        else {
            return vec![Line::from("This lesson has no sections")];
        };

        let mut lines = vec![Line::from(Span::styled(
            entry.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        if !entry.description.is_empty() {
            lines.push(Line::from(entry.description.clone()));
        }
        lines.push(Line::default());

        for (i, bullet) in entry.bullets.iter().enumerate() {
            let marker = if entry.numbered {
                format!("{}. ", i + 1)
            } else {
                "• ".to_string()
            };
            lines.extend(bullet_lines(bullet, &marker));
        }
        lines
    }
}

/// Runs the viewer until the user quits, restoring the terminal afterwards.
pub fn run(lesson: Lesson) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(lesson);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(rows[0]);

    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            let icon = if entry.numbered { "✎ " } else { "§ " };
            ListItem::new(Line::from(format!("{icon}{}", entry.title)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.title.clone()),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_stateful_widget(list, chunks[0], &mut app.list_state);

    let content = Paragraph::new(app.selected_lines())
        .block(Block::default().borders(Borders::ALL).title("Content"))
        .wrap(Wrap { trim: false });
    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from("q: Quit | ↑/k: Previous | ↓/j: Next"));
    f.render_widget(help, rows[1]);
}
