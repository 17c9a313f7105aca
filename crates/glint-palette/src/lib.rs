//! Palette controller and keyboard routing for the Glint palette.
//!
//! This crate is deliberately headless: it owns the palette state machine
//! and the keyboard boundary, and talks to the outside world through two
//! seams: the injected [`SearchIndex`](glint_index::SearchIndex) it
//! filters against, and the [`Navigator`] it sends selections to. A
//! rendering layer subscribes to [`PaletteSnapshot`] updates and draws
//! whatever the snapshot says.

mod controller;
mod keys;
mod navigator;
mod shortcuts;
mod state;

pub use controller::PaletteController;
pub use keys::{Hotkey, Key, KeyEvent, KeyOutcome, Modifiers};
pub use navigator::{Navigator, NoopNavigator};
pub use shortcuts::{KeyRouter, KeySubscription};
pub use state::{OpenState, PalettePhase, PaletteSnapshot};
