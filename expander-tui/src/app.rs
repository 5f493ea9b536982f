//! Event loop and input handling.

use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use expander::{InstantTweens, ListAdapter, SelectionEvent};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::terminal::Terminal;
use crate::view::{self, View, ViewParams, row_height};

pub struct App {
    adapter: ListAdapter<String>,
    cursor: usize,
    scroll: usize,
    body_height: u16,
    frame: Duration,
    reduced_motion: bool,
    viewport: (u16, u16),
    view: View,
    /// Input arrived since the last draw.
    dirty: bool,
    quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        let items = config.items.clone();
        let adapter = if config.reduced_motion {
            ListAdapter::with_tweens(items, config.row, InstantTweens)
        } else {
            ListAdapter::new(items, config.row)
        };

        Self {
            adapter,
            cursor: 0,
            scroll: 0,
            body_height: config.body_height,
            frame: config.frame(),
            reduced_motion: config.reduced_motion,
            viewport: (0, 0),
            view: View::default(),
            dirty: true,
            quit: false,
        }
    }

    pub fn adapter(&self) -> &ListAdapter<String> {
        &self.adapter
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn run(mut self, terminal: &mut Terminal) -> Result<(), AppError> {
        log::info!("showing {} items", self.adapter.len());

        loop {
            let animating = self.tick(Instant::now());
            let (width, height) = terminal.size()?;
            if self.needs_redraw((width, height)) {
                terminal.draw(self.layout(width, height))?;
            }

            // Binding rows that scrolled in can resize them after layout
            let timeout = if animating || self.adapter.is_animating() {
                Some(self.frame)
            } else if self.adapter.needs_layout() {
                Some(Duration::ZERO)
            } else {
                None
            };
            for event in terminal.poll(timeout)? {
                self.handle_event(&event);
            }

            if self.quit {
                log::info!("quit requested");
                return Ok(());
            }
        }
    }

    /// Advance animations and react to rows that started expanding.
    pub fn tick(&mut self, now: Instant) -> bool {
        let animating = self.adapter.tick(now);
        for event in self.adapter.poll_events() {
            match event {
                SelectionEvent::Activated { position } => {
                    log::debug!("row {} activated", position);
                    self.scroll_to(position);
                }
            }
        }
        animating
    }

    /// Whether the screen is stale: input arrived, the terminal was resized or
    /// a row changed size. Clears the pending flags.
    pub fn needs_redraw(&mut self, size: (u16, u16)) -> bool {
        let resized = size != self.viewport;
        let requested = self.adapter.take_layout_requests();
        std::mem::take(&mut self.dirty) | requested | resized
    }

    /// Lay out for a `width` x `height` terminal and update the rendered window.
    pub fn layout(&mut self, width: u16, height: u16) -> &View {
        self.viewport = (width, height);
        let view = view::layout(
            &self.adapter,
            &ViewParams {
                scroll: self.scroll,
                cursor: self.cursor,
                width,
                height,
                body_height: self.body_height,
            },
        );
        self.adapter.set_rendered(view.rendered.clone());
        self.view = view;
        &self.view
    }

    pub fn handle_event(&mut self, event: &Event) {
        self.dirty = true;
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::Home => self.move_cursor(isize::MIN),
            KeyCode::End => self.move_cursor(isize::MAX),
            KeyCode::Enter | KeyCode::Char(' ') => self.tap(self.cursor),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(position) = self.view.title_at(mouse.row) {
                    self.tap(position);
                }
            }
            MouseEventKind::ScrollUp => self.scroll = self.scroll.saturating_sub(1),
            MouseEventKind::ScrollDown => {
                self.scroll = (self.scroll + 1).min(self.adapter.len().saturating_sub(1));
            }
            _ => {}
        }
    }

    fn tap(&mut self, position: usize) {
        if position >= self.adapter.len() {
            return;
        }
        self.cursor = position;
        let Some(outcome) = self.adapter.tap(position) else {
            return;
        };
        log::info!(
            "tapped row {}: selection {:?} -> {:?}",
            position,
            outcome.previous,
            outcome.selected
        );
        // Instant rows never report Activated, so follow the tap itself
        if self.reduced_motion && outcome.selected == Some(position) {
            self.scroll_to(position);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let Some(last) = self.adapter.len().checked_sub(1) else {
            return;
        };
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.reveal(self.cursor, 1);
    }

    /// Scroll so a fully expanded row at `position` fits on screen.
    fn scroll_to(&mut self, position: usize) {
        self.reveal(position, 1 + usize::from(self.body_height));
    }

    /// Scroll until `lines` lines starting at row `position`'s title are visible.
    fn reveal(&mut self, position: usize, lines: usize) {
        if position < self.scroll {
            self.scroll = position;
            return;
        }
        let list_height = usize::from(self.viewport.1.saturating_sub(1));
        let rows = self.adapter.rows();
        while self.scroll < position {
            let above: usize = rows[self.scroll..position]
                .iter()
                .map(|row| row_height(row, self.body_height))
                .sum();
            if above + lines <= list_height {
                break;
            }
            self.scroll += 1;
        }
    }
}
