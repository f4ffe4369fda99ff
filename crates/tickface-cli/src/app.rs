//! Terminal application loop.
//!
//! Owns the terminal for the whole session: raw mode plus the alternate
//! screen on the way in, both undone on the way out, whether we leave via a
//! quit key, Ctrl-C or an error. Keyboard input mutates the `ClockState`;
//! rendering is handed to the presentation layer each frame.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, info};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Frame, Terminal,
};

use tickface_core::ClockState;

use crate::presentation::presenter;
use crate::presentation::view_models::FaceViewModel;
use crate::presentation::views::{AnalogView, DigitalView, StatusBarView, TimerView};

/// How long to block on input before giving the loop another turn.
const INPUT_POLL: Duration = Duration::from_millis(100);
/// The once-per-second state update.
const TICK_RATE: Duration = Duration::from_secs(1);
/// On/off cadence of the expired-timer alert.
const FLASH_INTERVAL: Duration = Duration::from_millis(400);

pub struct App {
    state: ClockState,

    /// UI state: whether the alert is currently in its lit half-phase.
    flash_lit: bool,
    last_flash_flip: Instant,

    should_quit: bool,
}

impl App {
    pub fn new(state: ClockState) -> Self {
        Self {
            state,
            flash_lit: false,
            last_flash_flip: Instant::now(),
            should_quit: false,
        }
    }

    /// Set up the terminal, run the event loop, clean up the terminal.
    pub fn run(mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // A hard Ctrl-C (SIGINT) must still put the terminal back.
        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        info!("entering the event loop on the {} face", self.state.mode());

        // Run event loop
        let result = self.event_loop(&mut terminal);

        // Cleanup terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        let mut last_tick = Instant::now();

        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            // Wake for input, but never sleep through the next tick.
            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0))
                .min(INPUT_POLL);

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Resize(width, height) => {
                        debug!("terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                last_tick = Instant::now();
                self.tick();
            }

            self.advance_flash();
        }

        info!("leaving the event loop");
        Ok(())
    }

    /// One logical second. The state decides what that means; the app only
    /// notices when the countdown expires so it can start the alert lit.
    fn tick(&mut self) {
        let was_ringing = self.state.flash_on();
        self.state.on_tick();
        if self.state.flash_on() && !was_ringing {
            info!("countdown expired, alert ringing");
            self.flash_lit = true;
            self.last_flash_flip = Instant::now();
        }
    }

    /// Alternate the alert between its lit and dark halves while it rings.
    fn advance_flash(&mut self) {
        if !self.state.flash_on() {
            self.flash_lit = false;
            return;
        }
        if self.last_flash_flip.elapsed() >= FLASH_INTERVAL {
            self.flash_lit = !self.flash_lit;
            self.last_flash_flip = Instant::now();
        }
    }

    /// Handle keyboard input
    fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Next face
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.state.switch_mode();
                debug!("switched to the {} face", self.state.mode());
            }
            // Timer adjustments; the state ignores them on the other faces
            KeyCode::Up => self.state.adjust_timer(1, 0),
            KeyCode::Down => self.state.adjust_timer(-1, 0),
            KeyCode::Right => self.state.adjust_timer(0, 10),
            KeyCode::Left => self.state.adjust_timer(0, -10),
            KeyCode::Char(' ') => self.state.toggle_running(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.state.reset_timer(),
            _ => {}
        }
    }

    /// Render the screen using Views
    fn render(&self, f: &mut Frame) {
        let screen = presenter::build_screen(&self.state, chrono::Local::now(), self.flash_lit);

        // Main layout: [Face | Status bar]
        let chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(f.area());

        match &screen.face {
            FaceViewModel::Analog(model) => f.render_widget(AnalogView::new(model), chunks[0]),
            FaceViewModel::Digital(model) => f.render_widget(DigitalView::new(model), chunks[0]),
            FaceViewModel::Timer(model) => f.render_widget(TimerView::new(model), chunks[0]),
        }

        f.render_widget(StatusBarView::new(&screen.status_bar), chunks[1]);
    }
}
