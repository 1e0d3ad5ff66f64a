//! # Core Navigation Logic
//!
//! This module contains faqnav's business logic: what list is showing and how
//! that maps to and from a URL. It knows nothing about any specific UI
//! technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • App (state)          │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • resolve() (lists)    │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  --print   │      │  History   │
//!     │  Adapter   │      │ (headless) │      │  (URLs)    │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct, all navigation state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`resolve`]: `NavigationState` and the list precedence rules
//! - [`search`], [`ordering`]: the three list sources
//! - [`category`], [`catalog`]: the content snapshot and its category set
//! - [`location`], [`history`]: URLs and the back/forward stack

pub mod action;
pub mod catalog;
pub mod category;
pub mod config;
pub mod history;
pub mod location;
pub mod ordering;
pub mod resolve;
pub mod search;
pub mod state;

pub use action::{Action, Effect, start, update};
pub use catalog::{Catalog, CatalogError, Item};
pub use category::{Category, CuratedView, Taxonomy};
pub use history::History;
pub use location::Location;
pub use resolve::{NavigationState, resolve};
pub use search::{Matcher, Scorer, TitleScorer};
pub use state::{App, View};
