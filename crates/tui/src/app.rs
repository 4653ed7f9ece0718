use std::{cmp, io, time::Duration};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use guessr_core::{
    config::{AppConfig, ThemeConfig},
    resource::split_selection,
    GuessOutcome, Presentation, QuizSession, RoundStats,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::{error, info};

use crate::{block_font, picture::PictureView};

const TICK_RATE: Duration = Duration::from_millis(250);
const MAX_INPUT_LEN: usize = 512;

#[derive(Debug, Clone)]
struct Theme {
    background: Color,
    foreground: Color,
    label: Color,
    submit: Color,
    load: Color,
    success: Color,
    restart: Color,
    danger: Color,
    muted: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Color::Rgb(0x00, 0x00, 0x00),
            foreground: Color::White,
            label: Color::Rgb(0x00, 0xFF, 0xFF),
            submit: Color::Rgb(0xFF, 0xD7, 0x00),
            load: Color::Rgb(0xFF, 0x00, 0xFF),
            success: Color::Rgb(0x00, 0xFF, 0x00),
            restart: Color::Rgb(0x00, 0x00, 0xFF),
            danger: Color::Red,
            muted: Color::DarkGray,
        }
    }
}

fn load_theme(overrides: &ThemeConfig) -> (Theme, Option<String>) {
    let mut theme = Theme::default();
    let mut applied: Vec<&str> = Vec::new();
    let mut rejected: Vec<&str> = Vec::new();

    let slots: [(&str, &Option<String>, &mut Color); 8] = [
        ("background", &overrides.background, &mut theme.background),
        ("foreground", &overrides.foreground, &mut theme.foreground),
        ("label", &overrides.label, &mut theme.label),
        ("submit", &overrides.submit, &mut theme.submit),
        ("load", &overrides.load, &mut theme.load),
        ("success", &overrides.success, &mut theme.success),
        ("restart", &overrides.restart, &mut theme.restart),
        ("danger", &overrides.danger, &mut theme.danger),
    ];
    for (name, value, slot) in slots {
        let Some(raw) = value.as_deref() else {
            continue;
        };
        match parse_hex_color(raw) {
            Some(color) => {
                *slot = color;
                applied.push(name);
            }
            None => rejected.push(name),
        }
    }

    let summary = match (applied.is_empty(), rejected.is_empty()) {
        (true, true) => None,
        (false, true) => Some(format!("Theme overrides applied ({}).", applied.join(", "))),
        _ => Some(format!(
            "Ignored invalid theme colors ({}).",
            rejected.join(", ")
        )),
    };
    (theme, summary)
}

fn parse_hex_color(input: &str) -> Option<Color> {
    let trimmed = input.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

fn contrast_color(color: &Color, fallback: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let luminance =
                0.299 * f64::from(*r) + 0.587 * f64::from(*g) + 0.114 * f64::from(*b);
            if luminance > 186.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => fallback,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Menu,
    Play,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Info,
    Success,
    Error,
}

/// Single-line text field with a character cursor.
#[derive(Debug, Clone, Default)]
struct TextInput {
    input: String,
    cursor: usize,
}

impl TextInput {
    fn len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len())
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.len() as isize;
        self.cursor = (self.cursor as isize + delta).clamp(0, len) as usize;
    }

    fn move_home(&mut self) {
        self.cursor = 0;
    }

    fn move_end(&mut self) {
        self.cursor = self.len();
    }

    fn insert(&mut self, ch: char) {
        if ch.is_control() || self.len() >= MAX_INPUT_LEN {
            return;
        }
        let idx = self.byte_index();
        self.input.insert(idx, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.input.remove(idx);
        }
    }

    fn delete(&mut self) {
        if self.cursor < self.len() {
            let idx = self.byte_index();
            self.input.remove(idx);
        }
    }

    fn clear(&mut self) {
        self.input.clear();
        self.cursor = 0;
    }

    fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.input)
    }

    fn value(&self) -> &str {
        &self.input
    }

    /// Apply an editing key; returns false for keys it does not handle.
    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match key.code {
            KeyCode::Left => self.move_cursor(-1),
            KeyCode::Right => self.move_cursor(1),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.insert(ch)
            }
            _ => return false,
        }
        true
    }
}

/// Terminal front-end for the guessing quizzes.
pub struct GuessApp {
    config: AppConfig,
    theme: Theme,
    screen: Screen,
    menu_cursor: usize,
    session: Option<QuizSession>,
    guess: TextInput,
    load_prompt: Option<TextInput>,
    status: String,
    status_kind: StatusKind,
    should_quit: bool,
}

impl GuessApp {
    pub fn new(config: AppConfig) -> Self {
        let (theme, theme_status) = load_theme(&config.theme);
        let mut status = format!("{} quizzes available", config.quizzes.len());
        if let Some(note) = theme_status {
            status.push_str(" • ");
            status.push_str(&note);
        }
        Self {
            config,
            theme,
            screen: Screen::Menu,
            menu_cursor: 0,
            session: None,
            guess: TextInput::default(),
            load_prompt: None,
            status,
            status_kind: StatusKind::Info,
            should_quit: false,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if !event::poll(TICK_RATE).context("failed to poll terminal events")? {
                continue;
            }
            let event = event::read().context("failed to read terminal event")?;
            if let Err(err) = self.handle_input(event) {
                error!(?err, "Input handling failed");
                self.set_status(StatusKind::Error, format!("Error: {err}"));
            }
        }
        Ok(())
    }

    fn set_status(&mut self, kind: StatusKind, message: String) {
        self.status_kind = kind;
        self.status = message;
    }

    fn handle_input(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if key.modifiers == KeyModifiers::CONTROL && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        match self.screen {
            Screen::Menu => {
                self.handle_menu_key(key);
                Ok(())
            }
            Screen::Play if self.load_prompt.is_some() => {
                self.handle_load_prompt_key(key);
                Ok(())
            }
            Screen::Play => self.handle_play_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let total = self.config.quizzes.len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.menu_cursor + 1 < total {
                    self.menu_cursor += 1;
                }
            }
            KeyCode::Enter => self.open_quiz(self.menu_cursor),
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn open_quiz(&mut self, index: usize) {
        let Some(definition) = self.config.quizzes.get(index).cloned() else {
            self.set_status(StatusKind::Error, "No quiz configured".to_string());
            return;
        };

        let session = QuizSession::open(definition, self.config.bounds());
        let view = session.view();
        info!(quiz = %view.title, total = view.total, "Quiz started");
        let message = match &view.round_over_message {
            Some(message) => message.clone(),
            None => format!(
                "{} {} to guess. Good luck!",
                view.total,
                session.definition().items
            ),
        };

        self.session = Some(session);
        self.guess.clear();
        self.load_prompt = None;
        self.screen = Screen::Play;
        self.set_status(StatusKind::Info, message);
    }

    fn leave_quiz(&mut self) {
        self.session = None;
        self.load_prompt = None;
        self.guess.clear();
        self.screen = Screen::Menu;
        self.set_status(StatusKind::Info, "Pick a quiz".to_string());
    }

    fn handle_play_key(&mut self, key: KeyEvent) -> Result<()> {
        let Some(session) = self.session.as_ref() else {
            self.screen = Screen::Menu;
            return Ok(());
        };

        if !session.accepts_guesses() {
            match key.code {
                KeyCode::Char('r') | KeyCode::Enter => self.restart(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Esc => self.leave_quiz(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Esc => self.leave_quiz(),
            KeyCode::Enter => self.submit_guess()?,
            KeyCode::Char('l') if key.modifiers == KeyModifiers::CONTROL => {
                self.load_prompt = Some(TextInput::default());
            }
            _ => {
                if self.guess.handle_key(&key) {
                    // typing replaces the previous verdict
                    if self.status_kind == StatusKind::Error {
                        self.set_status(StatusKind::Info, String::new());
                    }
                }
            }
        }
        Ok(())
    }

    fn submit_guess(&mut self) -> Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        let text = self.guess.take();
        let (kind, message) = match session.submit_guess(&text)? {
            GuessOutcome::Correct {
                answer,
                next: Presentation::Showing(_),
            } => (
                StatusKind::Success,
                format!(
                    "Correct! That was {answer}. Guess the next {}!",
                    session.definition().item
                ),
            ),
            GuessOutcome::Correct {
                next: Presentation::RoundOver { won },
                ..
            } => (
                StatusKind::Success,
                session.definition().round_over_message(won),
            ),
            GuessOutcome::Incorrect => {
                (StatusKind::Error, "Incorrect Guess. Try again!".to_string())
            }
        };
        self.set_status(kind, message);
        Ok(())
    }

    fn restart(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let message = match session.restart() {
            Presentation::Showing(_) => {
                format!("Round restarted. Guess the {}!", session.definition().item)
            }
            Presentation::RoundOver { won } => session.definition().round_over_message(won),
        };
        self.guess.clear();
        self.set_status(StatusKind::Info, message);
    }

    fn handle_load_prompt_key(&mut self, key: KeyEvent) {
        let Some(prompt) = self.load_prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Esc => {
                self.load_prompt = None;
                self.set_status(StatusKind::Info, "Load cancelled".to_string());
            }
            KeyCode::Enter => {
                let entries = split_selection(prompt.value());
                self.load_prompt = None;
                self.load_more(entries);
            }
            _ => {
                prompt.handle_key(&key);
            }
        }
    }

    fn load_more(&mut self, entries: Vec<String>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let (kind, message) = match session.load_more(&entries) {
            None => (StatusKind::Info, "Nothing selected".to_string()),
            Some(Presentation::Showing(_)) => {
                (StatusKind::Success, session.definition().loaded_message())
            }
            Some(Presentation::RoundOver { won }) => {
                (StatusKind::Info, session.definition().round_over_message(won))
            }
        };
        self.guess.clear();
        self.set_status(kind, message);
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        frame.render_widget(
            Block::default().style(
                Style::default()
                    .bg(self.theme.background)
                    .fg(self.theme.foreground),
            ),
            area,
        );
        match self.screen {
            Screen::Menu => self.draw_menu(frame, area),
            Screen::Play => self.draw_play(frame, area),
        }
        if let Some(prompt) = &self.load_prompt {
            self.render_load_prompt(frame, prompt);
        }
    }

    fn draw_menu(&self, frame: &mut Frame, area: Rect) {
        let banner_lines = block_font::render("GUESSR");
        let banner_height = banner_lines.len() as u16 + 2;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_height.min(area.height)),
                Constraint::Min(3),
                Constraint::Length(3),
            ])
            .split(area);

        let banner_content: Vec<Line> = banner_lines
            .into_iter()
            .map(|line| {
                Line::from(Span::styled(
                    line,
                    Style::default()
                        .fg(self.theme.label)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();
        let banner = Paragraph::new(banner_content)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Image Guessing Quizzes"));
        frame.render_widget(banner, layout[0]);

        let items: Vec<ListItem> = self
            .config
            .quizzes
            .iter()
            .enumerate()
            .map(|(idx, quiz)| {
                let marker = if idx == self.menu_cursor {
                    Span::styled(
                        "▶ ",
                        Style::default()
                            .fg(self.theme.label)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::raw("  ")
                };
                ListItem::new(Line::from(vec![
                    marker,
                    Span::styled(
                        quiz.title.clone(),
                        Style::default()
                            .fg(self.theme.foreground)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" · {}", quiz.folder.display()),
                        Style::default().fg(self.theme.muted),
                    ),
                ]))
            })
            .collect();

        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(self.menu_cursor.min(items.len() - 1)));
        }
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Quizzes (Enter play · q quit)"),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, layout[1], &mut list_state);

        self.render_status(frame, layout[2]);
    }

    fn draw_play(&self, frame: &mut Frame, area: Rect) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let view = session.view();
        let active = session.accepts_guesses();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);

        let drawn = view.total - view.remaining;
        let title = Paragraph::new(Line::from(vec![
            Span::styled(
                view.title.to_string(),
                Style::default()
                    .fg(self.theme.label)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {drawn}/{}", view.total),
                Style::default().fg(self.theme.muted),
            ),
        ]))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, layout[0]);

        let picture_block = Block::default().borders(Borders::ALL);
        let picture_area = picture_block.inner(layout[1]);
        frame.render_widget(picture_block, layout[1]);
        if let Some(picture) = view.picture {
            frame.render_widget(
                PictureView::new(picture, self.theme.background),
                picture_area,
            );
        } else if let Some(message) = &view.round_over_message {
            self.render_round_over(frame, picture_area, message, view.stats);
        }

        self.render_guess_field(frame, layout[2], active);
        self.render_actions(frame, layout[3], active, &session.definition().load_more_label());
        self.render_status(frame, layout[4]);
    }

    fn render_round_over(&self, frame: &mut Frame, area: Rect, message: &str, stats: &RoundStats) {
        let restart_style = Style::default()
            .bg(self.theme.restart)
            .fg(contrast_color(&self.theme.restart, Color::Black))
            .add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(
                message.to_string(),
                Style::default()
                    .fg(self.theme.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(format!(
                "Correct: {}   Wrong: {}   Skipped: {}",
                stats.correct, stats.incorrect, stats.skipped
            )),
            Line::from(format!("Time: {}", format_elapsed(stats.elapsed()))),
            Line::from(""),
            Line::from(Span::styled(" r  Restart Game ", restart_style)),
        ];
        let top_padding = area.height.saturating_sub(lines.len() as u16) / 2;
        let mut padded = vec![Line::from(""); top_padding as usize];
        padded.append(&mut lines);

        let paragraph = Paragraph::new(padded)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_guess_field(&self, frame: &mut Frame, area: Rect, active: bool) {
        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            "Your Guess:",
            Style::default().fg(self.theme.label),
        ));
        let inner = block.inner(area);
        let content = if active {
            Line::from(self.guess.value().to_string())
        } else {
            Line::from(Span::styled(
                "(round over)",
                Style::default().fg(self.theme.muted),
            ))
        };
        frame.render_widget(Paragraph::new(content).block(block), area);

        if active && self.load_prompt.is_none() && inner.width > 0 {
            let cursor_x = (inner.x + self.guess.cursor as u16)
                .min(inner.x + inner.width.saturating_sub(1));
            frame.set_cursor(cursor_x, inner.y);
        }
    }

    fn render_actions(&self, frame: &mut Frame, area: Rect, active: bool, load_label: &str) {
        let button = |color: Color| {
            if active {
                Style::default()
                    .bg(color)
                    .fg(contrast_color(&color, Color::Black))
            } else {
                Style::default()
                    .bg(self.theme.background)
                    .fg(self.theme.load)
            }
        };
        let hint = Style::default().fg(self.theme.muted);
        let line = Line::from(vec![
            Span::styled(" Enter  Submit Guess ", button(self.theme.submit)),
            Span::raw("  "),
            Span::styled(format!(" Ctrl+L  {load_label} "), button(self.theme.load)),
            Span::styled("   Esc menu · Ctrl+C quit", hint),
        ]);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let color = match self.status_kind {
            StatusKind::Info => self.theme.foreground,
            StatusKind::Success => self.theme.success,
            StatusKind::Error => self.theme.danger,
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            self.status.clone(),
            Style::default().fg(color),
        )))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }

    fn render_load_prompt(&self, frame: &mut Frame, prompt: &TextInput) {
        let frame_area = frame.size();
        let mut width = cmp::min(72_u16, frame_area.width.saturating_sub(4));
        width = cmp::max(width, 24_u16).min(frame_area.width);
        let height = 7_u16.min(frame_area.height);
        let x = frame_area.x + (frame_area.width.saturating_sub(width)) / 2;
        let y = frame_area.y + (frame_area.height.saturating_sub(height)) / 2;
        let area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, area);

        let title = self
            .session
            .as_ref()
            .map(|session| session.definition().picker_title())
            .unwrap_or_else(|| "Select Images".to_string());
        let input_line = Line::from(vec![
            Span::styled("> ", Style::default().fg(self.theme.label)),
            Span::raw(prompt.value().to_string()),
        ]);
        let helper = Line::from(vec![
            Span::styled("Enter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" load  "),
            Span::styled("Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" cancel"),
        ]);

        let paragraph = Paragraph::new(vec![
            input_line,
            Line::from(""),
            Line::from("Files or folders, separated by ';'"),
            helper,
        ])
        .style(
            Style::default()
                .bg(self.theme.background)
                .fg(self.theme.foreground),
        )
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });

        frame.render_widget(paragraph, area);

        let cursor_x =
            (area.x + 3 + prompt.cursor as u16).min(area.x + area.width.saturating_sub(2));
        let cursor_y = area.y + 1;
        frame.set_cursor(cursor_x, cursor_y);
    }
}

fn format_elapsed(elapsed: chrono::Duration) -> String {
    let seconds = elapsed.num_seconds().max(0);
    if seconds >= 60 {
        format!("{}m {:02}s", seconds / 60, seconds % 60)
    } else {
        format!("{seconds}s")
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn text_input_edits_at_cursor() {
        let mut input = TextInput::default();
        for ch in "Thr".chars() {
            input.insert(ch);
        }
        input.move_cursor(-1);
        input.insert('o');
        assert_eq!(input.value(), "Thor");
        input.move_end();
        input.insert('!');
        input.backspace();
        input.move_home();
        input.delete();
        assert_eq!(input.value(), "hor");
        assert_eq!(input.take(), "hor");
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor, 0);
    }

    #[test]
    fn text_input_handles_multibyte_characters() {
        let mut input = TextInput::default();
        for ch in "Pokémon".chars() {
            input.insert(ch);
        }
        input.move_cursor(-3);
        input.backspace();
        assert_eq!(input.value(), "Pokmon");
        input.insert('é');
        assert_eq!(input.value(), "Pokémon");
    }

    #[test]
    fn text_input_ignores_control_shortcuts() {
        let mut input = TextInput::default();
        assert!(input.handle_key(&key(KeyCode::Char('a'))));
        assert!(!input.handle_key(&KeyEvent::new(
            KeyCode::Char('l'),
            KeyModifiers::CONTROL
        )));
        assert!(!input.handle_key(&key(KeyCode::Enter)));
        assert_eq!(input.value(), "a");
    }

    #[test]
    fn parses_hex_colors() {
        assert_eq!(parse_hex_color("#FFD700"), Some(Color::Rgb(255, 215, 0)));
        assert_eq!(parse_hex_color("0f0"), Some(Color::Rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn theme_overrides_apply_and_report() {
        let overrides = ThemeConfig {
            submit: Some("#010203".to_string()),
            load: Some("not-a-color".to_string()),
            ..ThemeConfig::default()
        };
        let (theme, summary) = load_theme(&overrides);
        assert_eq!(theme.submit, Color::Rgb(1, 2, 3));
        assert_eq!(theme.load, Theme::default().load);
        assert_eq!(
            summary.as_deref(),
            Some("Ignored invalid theme colors (load).")
        );

        let (_, summary) = load_theme(&ThemeConfig::default());
        assert!(summary.is_none());
    }

    #[test]
    fn formats_elapsed_time() {
        assert_eq!(format_elapsed(chrono::Duration::seconds(42)), "42s");
        assert_eq!(format_elapsed(chrono::Duration::seconds(125)), "2m 05s");
    }
}
