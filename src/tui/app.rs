//! Main TUI application: layout, focus and key handling.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};

use crate::application::{ModelRegistry, Predictor};
use crate::config::Config;
use crate::domain::Disease;

use super::session::Session;
use super::ui::{form::render_form, render_disclaimer, result::render_result, sidebar::render_sidebar};

/// Which panel receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Form,
}

/// Main application state
pub struct App {
    session: Session,
    predictor: Predictor,
    focus: Focus,
    should_quit: bool,
}

impl App {
    /// Load every model from the configured directory and build the app.
    ///
    /// Runs before the terminal is touched, so a load failure is reported
    /// on a normal screen.
    ///
    /// # Errors
    /// Returns error if any model cannot be loaded or verified.
    pub fn new(config: &Config) -> Result<Self> {
        let registry = ModelRegistry::load_all(&config.model_dir, config.require_manifest)?;
        Ok(Self::with_dependencies(Predictor::new(Arc::new(registry))))
    }

    /// Create application with an already built predictor.
    #[must_use]
    pub fn with_dependencies(predictor: Predictor) -> Self {
        Self {
            session: Session::default(),
            predictor,
            focus: Focus::Sidebar,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            // Every turn is synchronous; block until the next key.
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code, key.modifiers);
                }
            }
        }
        Ok(())
    }

    /// Render the whole screen from current state.
    pub fn draw(&self, f: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(f.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(rows[0]);

        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(4)])
            .split(columns[1]);

        render_sidebar(
            f,
            columns[0],
            self.session.selected(),
            self.focus == Focus::Sidebar,
        );
        render_form(f, main[0], self.session.form(), self.focus == Focus::Form);
        render_result(f, main[1], self.session.outcome());
        render_disclaimer(f, rows[1]);
    }

    pub(crate) fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Form => self.handle_form_key(key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyCode) {
        let index = self.session.selected() as usize;
        match key {
            KeyCode::Up => {
                let prev = (index + Disease::ALL.len() - 1) % Disease::ALL.len();
                self.session.select_disease(Disease::ALL[prev]);
            }
            KeyCode::Down => {
                let next = (index + 1) % Disease::ALL.len();
                self.session.select_disease(Disease::ALL[next]);
            }
            KeyCode::Char(c @ '1'..='5') => {
                let pick = c as usize - '1' as usize;
                self.session.select_disease(Disease::ALL[pick]);
            }
            KeyCode::Enter | KeyCode::Right | KeyCode::Tab => {
                self.focus = Focus::Form;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyCode) {
        let form = self.session.form_mut();
        match key {
            KeyCode::Esc => {
                self.focus = Focus::Sidebar;
            }
            KeyCode::Up | KeyCode::BackTab => form.prev_field(),
            KeyCode::Down | KeyCode::Tab => form.next_field(),
            KeyCode::Left => form.step(-1.0),
            KeyCode::Right => form.step(1.0),
            KeyCode::F(2) => form.load_sample(),
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Backspace => form.delete_char(),
            KeyCode::Delete => form.clear_field(),
            KeyCode::Enter => self.session.submit(&self.predictor),
            _ => {}
        }
    }
}
