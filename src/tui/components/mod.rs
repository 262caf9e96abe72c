//! # TUI Components
//!
//! This module contains all UI components for the board.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: Top status bar with the headline metrics
//! - `SponsorCard`: One card, as a ratatui `Widget`
//! - `DragProxyView`: The card floating under the pointer
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `Board`: Lane columns, per-lane scrolling and the hit-test layout
//! - `FilterBar`: Category chips and the search field
//! - `DetailPanel`: Sponsor profile overlay
//!
//! ### Co-location of Concerns
//!
//! Each component file contains its state types, event types, rendering
//! logic, event handling and tests.
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state:
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! Board::new(&mut tui.board, app).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! board.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── filter_bar.rs    (Category chips + search)
//! ├── board.rs         (Lanes, scrolling, BoardLayout hit tester)
//! ├── sponsor_card.rs  (Single card widget)
//! ├── drag_proxy.rs    (Floating drag proxy)
//! └── detail_panel.rs  (Profile overlay)
//! ```

pub mod board;
pub mod detail_panel;
pub mod drag_proxy;
pub mod filter_bar;
pub mod sponsor_card;
mod title_bar;

pub use board::{Board, BoardState};
pub use detail_panel::{DetailPanel, DetailPanelState};
pub use drag_proxy::DragProxyView;
pub use filter_bar::{FilterBar, FilterBarState};
pub use title_bar::TitleBar;
