//! # Core Board Logic
//!
//! This module contains the sponsor board's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Drag engine          │
//!                    │                         │
//!                    │  No UI. No terminal.    │
//!                    └───────────┬─────────────┘
//!                                │ SpatialIndex
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`entity`]: `Sponsor`, `Lane`, `Category`
//! - [`store`]: the ordered sponsor collection, filters and summaries
//! - [`drag`]: sessions, gesture classification, hit targets, reordering
//! - [`proxy`]: the floating drag proxy and its wobble spring
//! - [`state`]: the `App` struct, all board state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`config`]: layered configuration
//! - [`roster`]: the initial sponsor collection

pub mod action;
pub mod config;
pub mod drag;
pub mod entity;
pub mod proxy;
pub mod roster;
pub mod state;
pub mod store;
