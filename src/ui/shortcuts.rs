use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, ModifiersState, PhysicalKey};

/// Keyboard shortcut table
pub struct ShortcutManager {
    shortcuts: Vec<Shortcut>,
}

#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: PhysicalKey,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub action: ShortcutAction,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    TogglePause,
    SpeedUp,
    SpeedDown,
    Quit,
}

impl ShortcutManager {
    pub fn new() -> Self {
        let mut manager = Self {
            shortcuts: Vec::new(),
        };
        manager.register_defaults();
        manager
    }

    fn register_defaults(&mut self) {
        self.register(KeyCode::Space, false, ShortcutAction::TogglePause, "Play/Pause");
        self.register(KeyCode::ArrowUp, false, ShortcutAction::SpeedUp, "Speed Up");
        self.register(KeyCode::ArrowDown, false, ShortcutAction::SpeedDown, "Speed Down");
        self.register(KeyCode::Escape, false, ShortcutAction::Quit, "Quit");
        self.register(KeyCode::KeyQ, true, ShortcutAction::Quit, "Quit");
    }

    fn register(&mut self, code: KeyCode, ctrl: bool, action: ShortcutAction, description: &'static str) {
        self.shortcuts.push(Shortcut {
            key: PhysicalKey::Code(code),
            ctrl,
            shift: false,
            alt: false,
            action,
            description,
        });
    }

    /// Action bound to a key with exactly these modifiers
    pub fn lookup(&self, key: PhysicalKey, modifiers: ModifiersState) -> Option<ShortcutAction> {
        self.shortcuts
            .iter()
            .find(|s| {
                s.key == key
                    && s.ctrl == modifiers.control_key()
                    && s.shift == modifiers.shift_key()
                    && s.alt == modifiers.alt_key()
            })
            .map(|s| s.action)
    }

    /// Process a key event and return the matching action (if any).
    /// Releases and auto-repeats are ignored.
    pub fn process_event(&self, event: &KeyEvent, modifiers: ModifiersState) -> Option<ShortcutAction> {
        if event.state != ElementState::Pressed || event.repeat {
            return None;
        }
        self.lookup(event.physical_key, modifiers)
    }

    /// One-line summary for the status bar, first binding per action
    pub fn hint_line(&self) -> String {
        let mut seen = Vec::new();
        let mut parts = Vec::new();
        for shortcut in &self.shortcuts {
            if seen.contains(&shortcut.action) {
                continue;
            }
            seen.push(shortcut.action);
            parts.push(format!("{} {}", shortcut_label(shortcut), shortcut.description));
        }
        parts.join("   ")
    }
}

impl Default for ShortcutManager {
    fn default() -> Self {
        Self::new()
    }
}

fn shortcut_label(shortcut: &Shortcut) -> String {
    let mut label = String::new();
    if shortcut.ctrl {
        label.push_str("Ctrl+");
    }
    if shortcut.shift {
        label.push_str("Shift+");
    }
    if shortcut.alt {
        label.push_str("Alt+");
    }
    label.push_str(&key_to_string(shortcut.key));
    label
}

fn key_to_string(key: PhysicalKey) -> String {
    match key {
        PhysicalKey::Code(code) => match code {
            KeyCode::Space => "Space".to_string(),
            KeyCode::Escape => "Esc".to_string(),
            KeyCode::ArrowUp => "Up".to_string(),
            KeyCode::ArrowDown => "Down".to_string(),
            KeyCode::KeyQ => "Q".to_string(),
            _ => format!("{:?}", code),
        },
        _ => "?".to_string(),
    }
}
