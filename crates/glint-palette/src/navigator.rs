//! The navigation seam.
//!
//! Routing belongs to the host page; the palette only ever asks it to go
//! somewhere. Keeping this behind a trait makes the controller testable
//! without any routing facility at all.

/// External collaborator responsible for changing the displayed page.
///
/// The palette controller is the sole caller. Navigation to an unknown
/// path is the navigator's concern (its own not-found handling), not the
/// palette's.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Request a move to the given path.
    fn navigate_to(&self, path: &str);
}

/// Navigator that drops every request. Useful as a placeholder in tools
/// that only exercise filtering.
#[derive(Debug, Default)]
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate_to(&self, _path: &str) {}
}

// =============================================================================
// Recording mock for tests
// =============================================================================

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;

    /// Navigator that records every requested path.
    #[derive(Debug, Default)]
    pub struct RecordingNavigator {
        paths: Mutex<Vec<String>>,
    }

    impl RecordingNavigator {
        pub fn new() -> Self {
            Self::default()
        }

        /// Paths navigated to, in call order.
        pub fn paths(&self) -> Vec<String> {
            self.paths.lock().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate_to(&self, path: &str) {
            self.paths.lock().push(path.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_navigator_expectations() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_navigate_to()
            .withf(|path| path == "/components/modal")
            .times(1)
            .return_const(());

        navigator.navigate_to("/components/modal");
    }

    #[test]
    fn test_recording_navigator() {
        let navigator = mock::RecordingNavigator::new();
        navigator.navigate_to("/docs/introduction");
        navigator.navigate_to("/components/tabs");
        assert_eq!(
            navigator.paths(),
            vec!["/docs/introduction", "/components/tabs"]
        );
    }
}
