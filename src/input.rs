use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::game::Controls;

/// One-shot actions triggered by a single key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    Quit,
}

/// Keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    left: bool,
    right: bool,
    fire: bool,
}

/// Manages input polling and translates raw key events into game input
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
    /// Whether the terminal sends key release events. Without them a press
    /// only counts as held for the frame it arrives in.
    reports_releases: bool,
}

impl InputManager {
    pub fn new(reports_releases: bool) -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
            reports_releases,
        }
    }

    /// Drains all pending terminal events without blocking.
    /// Call once per frame before reading [`InputManager::controls`].
    pub fn poll_events(&mut self) -> color_eyre::Result<()> {
        self.begin_frame();

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key_event) = event::read()? {
                self.handle_key_event(key_event);
            }
        }

        Ok(())
    }

    /// Forgets last frame's one-shot actions, and taps if releases never arrive
    pub(crate) fn begin_frame(&mut self) {
        self.oneshot_actions.clear();
        if !self.reports_releases {
            self.key_state = KeyState::default();
        }
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) {
        match key_event.kind {
            // Repeats keep a key held on terminals without release reporting
            KeyEventKind::Press | KeyEventKind::Repeat => self.handle_key_press(key_event),
            KeyEventKind::Release => self.handle_key_release(key_event.code),
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent) {
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            if !self.oneshot_actions.contains(&InputAction::Quit) {
                self.oneshot_actions.push(InputAction::Quit);
            }
            return;
        }

        match key_event.code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = true;
                self.key_state.right = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = true;
                self.key_state.left = false;
            }
            KeyCode::Char(' ') => {
                self.key_state.fire = true;
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            KeyCode::Char(' ') => {
                self.key_state.fire = false;
            }
            _ => {}
        }
    }

    /// Keys currently held
    pub fn controls(&self) -> Controls {
        Controls {
            left: self.key_state.left,
            right: self.key_state.right,
            fire: self.key_state.fire,
        }
    }

    /// One-shot actions received since the last poll
    pub fn actions(&self) -> &[InputAction] {
        &self.oneshot_actions
    }
}
