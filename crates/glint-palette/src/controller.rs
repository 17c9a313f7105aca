//! The palette controller.
//!
//! Owns the [`PalettePhase`] state machine and translates keyboard and
//! pointer input into state transitions and navigation requests. Every
//! mutation broadcasts a fresh [`PaletteSnapshot`] over a watch channel so
//! a rendering layer can react without polling.

use std::sync::Arc;

use tokio::sync::watch;

use glint_core::{AppConfig, ConfigError};
use glint_index::{filter, SearchIndex, DEFAULT_MAX_RESULTS};

use crate::keys::{Hotkey, Key, KeyEvent, KeyOutcome};
use crate::navigator::Navigator;
use crate::state::{OpenState, PalettePhase, PaletteSnapshot};

/// Owns palette state; wires key events to filtering and navigation.
pub struct PaletteController {
    index: Arc<SearchIndex>,
    navigator: Arc<dyn Navigator>,
    toggle_hotkey: Hotkey,
    max_results: usize,
    phase: PalettePhase,
    state_tx: watch::Sender<PaletteSnapshot>,
}

impl PaletteController {
    /// Create a controller with default hotkey (`mod+k`) and result cap.
    pub fn new(index: Arc<SearchIndex>, navigator: Arc<dyn Navigator>) -> Self {
        let (state_tx, _state_rx) = watch::channel(PaletteSnapshot::closed());
        Self {
            index,
            navigator,
            toggle_hotkey: Hotkey::primary('k'),
            max_results: DEFAULT_MAX_RESULTS,
            phase: PalettePhase::Closed,
            state_tx,
        }
    }

    /// Create a controller configured from an [`AppConfig`].
    pub fn from_config(
        index: Arc<SearchIndex>,
        navigator: Arc<dyn Navigator>,
        config: &AppConfig,
    ) -> Result<Self, ConfigError> {
        let hotkey = Hotkey::parse(&config.hotkey.toggle)?;
        Ok(Self::new(index, navigator)
            .with_hotkey(hotkey)
            .with_max_results(config.search.max_results))
    }

    /// Override the toggle hotkey.
    pub fn with_hotkey(mut self, hotkey: Hotkey) -> Self {
        self.toggle_hotkey = hotkey;
        self
    }

    /// Override the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// Subscribe to state changes. Clone the receiver for each subscriber.
    pub fn subscribe(&self) -> watch::Receiver<PaletteSnapshot> {
        self.state_tx.subscribe()
    }

    /// Current state as an immutable snapshot.
    pub fn snapshot(&self) -> PaletteSnapshot {
        PaletteSnapshot::of(&self.phase)
    }

    /// Check if the palette is open.
    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    // =========================================================================
    // Open / Close
    // =========================================================================

    /// Open the palette with a fresh (empty) query. No-op if already open.
    pub fn open(&mut self) {
        if self.phase.is_open() {
            return;
        }
        self.phase = PalettePhase::Open(OpenState::new());
        tracing::debug!("Palette opened");
        self.broadcast();
    }

    /// Close the palette, discarding query and cursor. No-op if closed.
    ///
    /// This is the single close path: escape, backdrop, close button, and
    /// post-navigation teardown all land here, so the query is always
    /// cleared on close.
    pub fn dismiss(&mut self) {
        if !self.phase.is_open() {
            return;
        }
        self.phase = PalettePhase::Closed;
        tracing::debug!("Palette dismissed");
        self.broadcast();
    }

    /// Toggle open/closed (the global hotkey action).
    pub fn toggle(&mut self) {
        if self.phase.is_open() {
            self.dismiss();
        } else {
            self.open();
        }
    }

    // =========================================================================
    // Query and Cursor
    // =========================================================================

    /// Replace the query, re-filter, and reset the cursor to the top.
    ///
    /// Ignored while closed; the input field only exists in the open
    /// palette.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let entries = self.index.entries();
        let max_results = self.max_results;

        let open = match self.phase.open_mut() {
            Some(open) => open,
            None => return,
        };

        open.query = query.into();
        open.results = filter(&open.query, &entries, max_results);
        open.cursor_index = 0;
        self.broadcast();
    }

    /// Move the highlight down one row (wraps).
    pub fn cursor_down(&mut self) {
        if let Some(open) = self.phase.open_mut() {
            open.cursor_down();
            self.broadcast();
        }
    }

    /// Move the highlight up one row (wraps).
    pub fn cursor_up(&mut self) {
        if let Some(open) = self.phase.open_mut() {
            open.cursor_up();
            self.broadcast();
        }
    }

    /// Hover-to-select: highlight the row under the pointer.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_cursor(&mut self, index: usize) {
        if let Some(open) = self.phase.open_mut() {
            if index < open.result_count() {
                open.cursor_index = index;
                self.broadcast();
            }
        }
    }

    // =========================================================================
    // Activation
    // =========================================================================

    /// Navigate to the entry under the cursor, then close and clear.
    ///
    /// No-op when closed or when there are no results.
    pub fn submit(&mut self) {
        let path = match self.phase.open() {
            Some(open) => match open.cursor_entry() {
                Some(entry) => entry.path.clone(),
                None => return,
            },
            None => return,
        };

        tracing::debug!("Navigating to {}", path);
        self.navigator.navigate_to(&path);
        self.dismiss();
    }

    /// Pointer click on result row `index`: navigate to it, close, clear.
    pub fn activate(&mut self, index: usize) {
        let path = match self.phase.open() {
            Some(open) => match open.results.get(index) {
                Some(entry) => entry.path.clone(),
                None => return,
            },
            None => return,
        };

        tracing::debug!("Navigating to {}", path);
        self.navigator.navigate_to(&path);
        self.dismiss();
    }

    // =========================================================================
    // Keyboard Entry Point
    // =========================================================================

    /// Handle a raw key event.
    ///
    /// The toggle hotkey is recognised regardless of open state. While
    /// open, arrows and escape are always claimed (so the host suppresses
    /// page scroll etc.), and enter is claimed only when there is a result
    /// to activate. Everything else, including plain character keys,
    /// passes through so typing reaches the search input untouched.
    pub fn handle_key(&mut self, event: &KeyEvent) -> KeyOutcome {
        if self.toggle_hotkey.matches(event) {
            self.toggle();
            return KeyOutcome::Handled;
        }

        let has_results = match self.phase.open() {
            Some(open) => open.result_count() > 0,
            None => return KeyOutcome::Ignored,
        };

        match event.key {
            Key::ArrowDown => {
                self.cursor_down();
                KeyOutcome::Handled
            }
            Key::ArrowUp => {
                self.cursor_up();
                KeyOutcome::Handled
            }
            Key::Enter if has_results => {
                self.submit();
                KeyOutcome::Handled
            }
            Key::Escape => {
                self.dismiss();
                KeyOutcome::Handled
            }
            Key::Enter | Key::Char(_) => KeyOutcome::Ignored,
        }
    }

    fn broadcast(&self) {
        self.state_tx.send_replace(PaletteSnapshot::of(&self.phase));
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Modifiers;
    use crate::navigator::mock::RecordingNavigator;
    use crate::navigator::MockNavigator;
    use glint_index::Registry;

    fn test_index() -> Arc<SearchIndex> {
        // Three entries matching "mod", one matching "card" only.
        Arc::new(SearchIndex::new(Arc::new(
            Registry::builder()
                .component("Modal", "modal", "Accessible modal dialog", "Overlays")
                .component("Modern SaaS", "modern-saas", "SaaS landing page", "Templates")
                .component("Modern Navbar", "modern-navbar", "Responsive navbar", "Navigation")
                .component("Card", "card", "Surface container", "Cards")
                .build(),
        )))
    }

    fn controller_with(navigator: Arc<dyn Navigator>) -> PaletteController {
        PaletteController::new(test_index(), navigator)
    }

    fn controller() -> PaletteController {
        controller_with(Arc::new(RecordingNavigator::new()))
    }

    fn cmd_k() -> KeyEvent {
        KeyEvent::new(Key::Char('k'), Modifiers::COMMAND)
    }

    fn ctrl_k() -> KeyEvent {
        KeyEvent::new(Key::Char('k'), Modifiers::CONTROL)
    }

    #[test]
    fn test_toggle_hotkey_opens_and_closes() {
        let mut controller = controller();
        assert!(!controller.is_open());

        assert_eq!(controller.handle_key(&cmd_k()), KeyOutcome::Handled);
        assert!(controller.is_open());

        // Ctrl works as the primary modifier too
        assert_eq!(controller.handle_key(&ctrl_k()), KeyOutcome::Handled);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_double_toggle_ends_closed_with_query_cleared() {
        let mut controller = controller();

        controller.handle_key(&ctrl_k());
        controller.set_query("mod");
        assert_eq!(controller.snapshot().results.len(), 3);

        controller.handle_key(&ctrl_k());
        assert!(!controller.is_open());
        assert_eq!(controller.snapshot().query, "");

        controller.handle_key(&ctrl_k());
        let snapshot = controller.snapshot();
        assert!(snapshot.is_open);
        assert_eq!(snapshot.query, "");
        assert!(snapshot.results.is_empty());
    }

    #[test]
    fn test_query_change_resets_cursor() {
        let mut controller = controller();
        controller.open();
        controller.set_query("mod");
        controller.cursor_down();
        assert_eq!(controller.snapshot().cursor_index, 1);

        controller.set_query("moda");
        assert_eq!(controller.snapshot().cursor_index, 0);
    }

    #[test]
    fn test_empty_query_shows_no_results() {
        let mut controller = controller();
        controller.open();
        controller.set_query("   ");
        assert!(controller.snapshot().results.is_empty());
    }

    #[test]
    fn test_arrow_keys_wrap_and_claim_events() {
        let mut controller = controller();
        controller.open();
        controller.set_query("mod");

        let down = KeyEvent::plain(Key::ArrowDown);
        for expected in [1, 2, 0, 1] {
            assert_eq!(controller.handle_key(&down), KeyOutcome::Handled);
            assert_eq!(controller.snapshot().cursor_index, expected);
        }

        let up = KeyEvent::plain(Key::ArrowUp);
        assert_eq!(controller.handle_key(&up), KeyOutcome::Handled);
        assert_eq!(controller.snapshot().cursor_index, 0);
        assert_eq!(controller.handle_key(&up), KeyOutcome::Handled);
        assert_eq!(controller.snapshot().cursor_index, 2);
    }

    #[test]
    fn test_arrows_with_no_results_are_safe_but_claimed() {
        let mut controller = controller();
        controller.open();

        let down = KeyEvent::plain(Key::ArrowDown);
        assert_eq!(controller.handle_key(&down), KeyOutcome::Handled);
        assert_eq!(controller.snapshot().cursor_index, 0);
    }

    #[test]
    fn test_keys_pass_through_while_closed() {
        let mut controller = controller();
        assert_eq!(
            controller.handle_key(&KeyEvent::plain(Key::ArrowDown)),
            KeyOutcome::Ignored
        );
        assert_eq!(
            controller.handle_key(&KeyEvent::plain(Key::Enter)),
            KeyOutcome::Ignored
        );
        assert_eq!(controller.handle_key(&KeyEvent::char('k')), KeyOutcome::Ignored);
    }

    #[test]
    fn test_typing_passes_through_while_open() {
        let mut controller = controller();
        controller.open();
        assert_eq!(controller.handle_key(&KeyEvent::char('m')), KeyOutcome::Ignored);
    }

    #[test]
    fn test_enter_with_no_results_passes_through() {
        let navigator = Arc::new(RecordingNavigator::new());
        let mut controller = controller_with(navigator.clone());
        controller.open();

        assert_eq!(
            controller.handle_key(&KeyEvent::plain(Key::Enter)),
            KeyOutcome::Ignored
        );
        assert!(controller.is_open());
        assert!(navigator.paths().is_empty());
    }

    #[test]
    fn test_submit_scenario_mod_down_down_enter() {
        let navigator = Arc::new(RecordingNavigator::new());
        let mut controller = controller_with(navigator.clone());

        controller.handle_key(&cmd_k());
        controller.set_query("mod");
        controller.handle_key(&KeyEvent::plain(Key::ArrowDown));
        controller.handle_key(&KeyEvent::plain(Key::ArrowDown));
        controller.handle_key(&KeyEvent::plain(Key::Enter));

        // Third-from-top match, exactly one navigation, palette closed
        assert_eq!(navigator.paths(), vec!["/components/modern-navbar"]);
        assert!(!controller.is_open());
        assert_eq!(controller.snapshot().query, "");
    }

    #[test]
    fn test_submit_wraps_when_fewer_matches() {
        let navigator = Arc::new(RecordingNavigator::new());
        let mut controller = controller_with(navigator.clone());

        controller.open();
        controller.set_query("card");
        // One match; two downs wrap back to it
        controller.handle_key(&KeyEvent::plain(Key::ArrowDown));
        controller.handle_key(&KeyEvent::plain(Key::ArrowDown));
        controller.handle_key(&KeyEvent::plain(Key::Enter));

        assert_eq!(navigator.paths(), vec!["/components/card"]);
    }

    #[test]
    fn test_submit_navigates_exactly_once() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate_to()
            .withf(|path| path == "/components/modal")
            .times(1)
            .return_const(());

        let mut controller = controller_with(Arc::new(navigator));
        controller.open();
        controller.set_query("modal");
        controller.submit();
        // A second submit on the closed palette must not navigate again
        controller.submit();
    }

    #[test]
    fn test_hover_then_click() {
        let navigator = Arc::new(RecordingNavigator::new());
        let mut controller = controller_with(navigator.clone());

        controller.open();
        controller.set_query("mod");
        controller.set_cursor(1);
        assert_eq!(controller.snapshot().cursor_index, 1);

        // Out-of-range hover is ignored
        controller.set_cursor(99);
        assert_eq!(controller.snapshot().cursor_index, 1);

        controller.activate(1);
        assert_eq!(navigator.paths(), vec!["/components/modern-saas"]);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_escape_dismisses_and_clears() {
        let mut controller = controller();
        controller.open();
        controller.set_query("mod");

        assert_eq!(
            controller.handle_key(&KeyEvent::plain(Key::Escape)),
            KeyOutcome::Handled
        );
        assert!(!controller.is_open());
        assert_eq!(controller.snapshot().query, "");
    }

    #[test]
    fn test_subscribers_see_updates() {
        let mut controller = controller();
        let rx = controller.subscribe();
        assert!(!rx.borrow().is_open);

        controller.open();
        controller.set_query("mod");

        let snapshot = rx.borrow().clone();
        assert!(snapshot.is_open);
        assert_eq!(snapshot.query, "mod");
        assert_eq!(snapshot.results.len(), 3);
    }

    #[test]
    fn test_result_cap_applies() {
        let registry = {
            let mut builder = Registry::builder();
            for i in 0..8 {
                builder = builder.component(
                    format!("Panel {}", i),
                    format!("panel-{}", i),
                    "a panel",
                    "Panels",
                );
            }
            builder.build()
        };
        let index = Arc::new(SearchIndex::new(Arc::new(registry)));
        let mut controller =
            PaletteController::new(index, Arc::new(RecordingNavigator::new()));

        controller.open();
        controller.set_query("panel");
        assert_eq!(controller.snapshot().results.len(), DEFAULT_MAX_RESULTS);
    }

    #[test]
    fn test_from_config_rejects_bad_hotkey() {
        let mut config = AppConfig::default();
        config.hotkey.toggle = "turbo+k".to_string();

        let result = PaletteController::from_config(
            test_index(),
            Arc::new(RecordingNavigator::new()),
            &config,
        );
        assert!(matches!(result, Err(ConfigError::InvalidHotkey(_))));
    }
}
