//! # Application State
//!
//! Core board state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── sponsors: SponsorStore             // the ordered sponsor collection
//! ├── session: Option<DragSession>       // the one active drag, if any
//! ├── selected: Option<SponsorId>        // sponsor shown in the detail panel
//! ├── filter: BoardFilter                // category + search
//! ├── status_message: String             // status bar text
//! ├── tap_threshold: f64                 // tap vs drag distance
//! ├── mounted: bool                      // false once the board is torn down
//! └── text_selection_suppressed: bool    // true while a drag is active
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::ResolvedConfig;
use crate::core::drag::{DEFAULT_TAP_THRESHOLD, DragSession};
use crate::core::entity::{Sponsor, SponsorId};
use crate::core::store::{BoardFilter, SponsorStore};

pub struct App {
    pub sponsors: SponsorStore,
    pub session: Option<DragSession>,
    pub selected: Option<SponsorId>,
    pub filter: BoardFilter,
    pub status_message: String,
    pub tap_threshold: f64,
    /// Pointer input is only accepted while the board is mounted.
    pub mounted: bool,
    pub text_selection_suppressed: bool,
}

impl App {
    pub fn new(sponsors: Vec<Sponsor>) -> Self {
        Self {
            sponsors: SponsorStore::new(sponsors),
            session: None,
            selected: None,
            filter: BoardFilter::default(),
            status_message: String::from("Drag a card to move it, click to open it"),
            tap_threshold: DEFAULT_TAP_THRESHOLD,
            mounted: true,
            text_selection_suppressed: false,
        }
    }

    pub fn from_config(sponsors: Vec<Sponsor>, config: &ResolvedConfig) -> Self {
        Self {
            tap_threshold: config.tap_threshold,
            ..Self::new(sponsors)
        }
    }

    /// True while pointer moves and releases are routed to the drag engine.
    pub fn is_capturing(&self) -> bool {
        self.mounted && self.session.is_some()
    }

    pub fn active_id(&self) -> Option<&SponsorId> {
        self.session.as_ref().map(|s| &s.active_id)
    }

    pub fn selected_sponsor(&self) -> Option<&Sponsor> {
        self.selected.as_ref().and_then(|id| self.sponsors.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::Lane;
    use crate::test_support::{sponsor, test_app};

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert!(app.session.is_none());
        assert!(app.selected.is_none());
        assert!(app.mounted);
        assert!(!app.is_capturing());
        assert!(!app.text_selection_suppressed);
        assert_eq!(app.tap_threshold, DEFAULT_TAP_THRESHOLD);
    }

    #[test]
    fn test_from_config_takes_threshold() {
        let config = ResolvedConfig {
            tap_threshold: 2.0,
            roster_file: None,
            proxy: Default::default(),
        };
        let app = App::from_config(vec![sponsor("1", Lane::Prospecting)], &config);
        assert_eq!(app.tap_threshold, 2.0);
        assert_eq!(app.sponsors.len(), 1);
    }

    #[test]
    fn test_selected_sponsor_lookup() {
        let mut app = test_app();
        app.selected = Some("2".into());
        assert_eq!(app.selected_sponsor().map(|s| s.id.as_str()), Some("2"));
        app.selected = Some("missing".into());
        assert!(app.selected_sponsor().is_none());
    }
}
