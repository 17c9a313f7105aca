//! Keyboard input boundary.
//!
//! The palette consumes raw key events from whatever input surface hosts
//! it. Only a handful of keys are meaningful (the toggle hotkey, arrows,
//! Enter, Escape); everything else passes through unhandled so normal
//! typing is never intercepted.

use glint_core::ConfigError;

// =============================================================================
// Keys and Modifiers
// =============================================================================

/// A key press, reduced to what the palette cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character key (lowercase for letters).
    Char(char),
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
}

/// Modifier state attached to a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub command: bool,
    pub control: bool,
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        command: false,
        control: false,
        shift: false,
        alt: false,
    };

    pub const COMMAND: Modifiers = Modifiers {
        command: true,
        control: false,
        shift: false,
        alt: false,
    };

    pub const CONTROL: Modifiers = Modifiers {
        command: false,
        control: true,
        shift: false,
        alt: false,
    };

    pub const SHIFT: Modifiers = Modifiers {
        command: false,
        control: false,
        shift: true,
        alt: false,
    };
}

/// A raw key event from the host input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with explicit modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key press with no modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// An unmodified character key.
    pub fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }
}

/// What the palette did with a key event.
///
/// `Handled` means the host must suppress the platform default for the key
/// (page scroll on arrows, form submit on enter). `Ignored` means the event
/// passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

// =============================================================================
// Hotkey
// =============================================================================

/// A parsed global hotkey like "mod+k" or "ctrl+shift+p".
///
/// The `mod` modifier matches either Command or Control, so one config
/// string covers both macOS and everyone else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotkey {
    primary: bool,
    command: bool,
    control: bool,
    shift: bool,
    alt: bool,
    key: char,
}

impl Hotkey {
    /// The common case: `mod` plus a character key.
    pub fn primary(key: char) -> Self {
        Self {
            primary: true,
            command: false,
            control: false,
            shift: false,
            alt: false,
            key: key.to_ascii_lowercase(),
        }
    }

    /// Parse a user-facing hotkey string.
    ///
    /// Accepted modifiers: `cmd`/`meta`/`super`, `ctrl`/`control`,
    /// `mod`/`primary`, `shift`, `alt`/`option`. The last token must be a
    /// single character, and at least one non-shift modifier is required
    /// (a bare or shifted key is still normal typing and must never be
    /// claimed globally).
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let parts: Vec<String> = s.split('+').map(|p| p.trim().to_lowercase()).collect();

        let (last, mods) = match parts.split_last() {
            Some(split) => split,
            None => return Err(ConfigError::InvalidHotkey(s.to_string())),
        };

        let mut hotkey = Self {
            primary: false,
            command: false,
            control: false,
            shift: false,
            alt: false,
            key: '\0',
        };

        for part in mods {
            match part.as_str() {
                "cmd" | "meta" | "super" => hotkey.command = true,
                "ctrl" | "control" => hotkey.control = true,
                "mod" | "primary" => hotkey.primary = true,
                "shift" => hotkey.shift = true,
                "alt" | "option" => hotkey.alt = true,
                _ => return Err(ConfigError::InvalidHotkey(s.to_string())),
            }
        }

        let mut chars = last.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => hotkey.key = c.to_ascii_lowercase(),
            _ => return Err(ConfigError::InvalidHotkey(s.to_string())),
        }

        if !(hotkey.primary || hotkey.command || hotkey.control || hotkey.alt) {
            return Err(ConfigError::InvalidHotkey(s.to_string()));
        }

        Ok(hotkey)
    }

    /// Check whether an event triggers this hotkey.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        let c = match event.key {
            Key::Char(c) => c.to_ascii_lowercase(),
            _ => return false,
        };
        if c != self.key {
            return false;
        }

        let m = event.modifiers;
        if self.primary {
            if !(m.command || m.control) {
                return false;
            }
        } else if m.command != self.command || m.control != self.control {
            return false;
        }

        m.shift == self.shift && m.alt == self.alt
    }
}

// =============================================================================
// Tests
// =============================================================================
