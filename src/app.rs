// App state and main event loop.
// Owns the window stack and maps keyboard input to navigation.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{debug, info};
use ratatui::prelude::*;

use crate::config::Config;
use crate::state::{LayerSettings, Screen, WindowStack};
use crate::ui;

/// Main application state.
pub struct App {
    /// Pushed windows, root at the bottom.
    pub windows: WindowStack,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// How long to wait for input before redrawing.
    tick_rate: Duration,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let mut windows = WindowStack::new(LayerSettings::from(config));
        windows.push(Screen::MainMenu);
        Self {
            windows,
            show_help: false,
            should_quit: false,
            tick_rate: config.tick_rate(),
        }
    }

    /// Main event loop. Tears down all windows when it ends.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        info!("event loop started");
        let result = self.event_loop(terminal);
        self.teardown();
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code);
                }
            }
        }
        Ok(())
    }

    /// Dispatch a key press. The help overlay swallows everything but close and quit.
    pub fn handle_key(&mut self, code: KeyCode) {
        if self.show_help {
            match code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => self.select(),
            KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => {
                self.go_back()
            }
            _ => {}
        }
    }

    fn select_prev(&mut self) {
        if let Some(layer) = self.windows.current_mut().and_then(|w| w.layer_mut()) {
            layer.select_prev();
        }
    }

    fn select_next(&mut self) {
        if let Some(layer) = self.windows.current_mut().and_then(|w| w.layer_mut()) {
            layer.select_next();
        }
    }

    fn select(&mut self) {
        self.windows.select();
    }

    /// Pop the visible window. Leaving the root window ends the app.
    pub fn go_back(&mut self) {
        self.windows.pop();
        if self.windows.is_empty() {
            debug!("root window popped, exiting");
            self.should_quit = true;
        }
    }

    /// Destroy every remaining window.
    pub fn teardown(&mut self) {
        self.windows.clear();
        info!("event loop finished");
    }
}
