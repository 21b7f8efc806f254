use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use std::time::Duration;

/// Which screen input is being read for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    Paused,
    Ended,
}

/// Represents semantic game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Pointer moved to a terminal cell
    PointerMoved { column: u16, row: u16 },
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Fire,
    Pause,
    Resume,
    Restart,
    Quit,
}

/// Tracks the state of keys that can be held down for continuous input
#[derive(Debug, Default)]
struct KeyState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

/// Manages input polling and translates raw terminal events into game actions
pub struct InputManager {
    key_state: KeyState,
    oneshot_actions: Vec<InputAction>,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            key_state: KeyState::default(),
            oneshot_actions: Vec::new(),
        }
    }

    /// Polls for all input events and stores one-shot actions.
    /// Should be called once per frame before getting actions
    pub fn poll_events(&mut self, mode: InputMode) -> color_eyre::Result<()> {
        self.oneshot_actions.clear();

        // Poll for all available events without blocking
        while event::poll(Duration::from_millis(0))? {
            let event = event::read()?;
            self.handle_event(event, mode);
        }

        Ok(())
    }

    pub fn handle_event(&mut self, event: Event, mode: InputMode) {
        match event {
            Event::Key(key_event) => match key_event.kind {
                KeyEventKind::Press => self.handle_key_press(key_event, mode),
                KeyEventKind::Release => self.handle_key_release(key_event.code),
                _ => {}
            },
            Event::Mouse(mouse_event) => self.handle_mouse(mouse_event, mode),
            // Resize is picked up from the terminal size on the next draw
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse_event: MouseEvent, mode: InputMode) {
        if mode != InputMode::Playing {
            return;
        }
        match mouse_event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                // Only the latest position matters
                self.oneshot_actions
                    .retain(|a| !matches!(a, InputAction::PointerMoved { .. }));
                self.oneshot_actions.push(InputAction::PointerMoved {
                    column: mouse_event.column,
                    row: mouse_event.row,
                });
            }
            MouseEventKind::Down(_) => {
                self.oneshot_actions.push(InputAction::Fire);
            }
            _ => {}
        }
    }

    fn handle_key_press(&mut self, key_event: KeyEvent, mode: InputMode) {
        // Quit works on every screen
        if matches!(
            key_event.code,
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
        ) || (key_event.code == KeyCode::Char('c')
            && key_event.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.oneshot_actions.push(InputAction::Quit);
            return;
        }

        match mode {
            InputMode::Playing => {
                if matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P')) {
                    self.oneshot_actions.push(InputAction::Pause);
                    return;
                }
            }
            InputMode::Paused => {
                if matches!(key_event.code, KeyCode::Char('p') | KeyCode::Char('P')) {
                    self.oneshot_actions.push(InputAction::Resume);
                }
                return;
            }
            InputMode::Ended => {
                if matches!(key_event.code, KeyCode::Char('r') | KeyCode::Char('R')) {
                    self.oneshot_actions.push(InputAction::Restart);
                }
                return;
            }
        }

        match key_event.code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.key_state.up = true;
                self.key_state.down = false;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                self.key_state.down = true;
                self.key_state.up = false;
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = true;
                self.key_state.right = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = true;
                self.key_state.left = false;
            }
            // One throw per press; the bullet cap does the rate limiting
            KeyCode::Char(' ') => {
                self.oneshot_actions.push(InputAction::Fire);
            }
            _ => {}
        }
    }

    fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
                self.key_state.up = false;
            }
            KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                self.key_state.down = false;
            }
            KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
                self.key_state.left = false;
            }
            KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
                self.key_state.right = false;
            }
            _ => {}
        }
    }

    /// Terminals without release events would otherwise keep moving forever
    pub fn release_all(&mut self) {
        self.key_state = KeyState::default();
    }

    /// Returns all actions for this frame (both continuous and one-shot).
    /// Must be called after poll_events()
    pub fn get_actions(&self, mode: InputMode) -> Vec<InputAction> {
        let mut actions = Vec::new();

        actions.extend_from_slice(&self.oneshot_actions);

        if mode == InputMode::Playing {
            if self.key_state.left {
                actions.push(InputAction::MoveLeft);
            }
            if self.key_state.right {
                actions.push(InputAction::MoveRight);
            }
            if self.key_state.up {
                actions.push(InputAction::MoveUp);
            }
            if self.key_state.down {
                actions.push(InputAction::MoveDown);
            }
        }

        actions
    }
}
