//! # daygrid-core
//!
//! Day-view event layout engine: assigns overlapping calendar events to
//! side-by-side columns and computes their on-screen geometry.
//!
//! Given one day's events, the pipeline normalizes instants into minute-of-day
//! offsets, clusters transitively overlapping events into collision groups,
//! packs each group into the fewest possible columns (greedy first-fit), and
//! resolves absolute geometry: pixel top/height, percentage left/width, and
//! z-index stacking. The engine is pure and deterministic. It performs no I/O,
//! holds no state between calls, and produces the same layout for the same
//! event list in any input order.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daygrid_core::{layout_day, DayEvent, GridConfig};
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
//! let events = vec![
//!     DayEvent {
//!         id: "standup".into(),
//!         start: day.and_hms_opt(9, 0, 0),
//!         end: day.and_hms_opt(10, 0, 0),
//!         payload: (),
//!     },
//!     DayEvent {
//!         id: "review".into(),
//!         start: day.and_hms_opt(9, 30, 0),
//!         end: day.and_hms_opt(10, 30, 0),
//!         payload: (),
//!     },
//! ];
//!
//! let positioned = layout_day(events, &GridConfig::default()).unwrap();
//!
//! // Overlapping events render side by side in two columns.
//! assert_eq!(positioned.len(), 2);
//! assert!(positioned[0].layout.left < positioned[1].layout.left);
//! ```
//!
//! ## Modules
//!
//! - [`normalize`] — instants → minute-of-day offsets, minimum-duration floor
//! - [`group`] — sweep-line partition into collision groups
//! - [`columns`] — greedy first-fit column packing within a group
//! - [`geometry`] — column assignments → absolute layout blocks
//! - [`layout`] — the one-call day pipeline
//! - [`filter`] — day/range selection feeding the pipeline
//! - [`format`] — time and duration display text
//! - [`error`] — error types

pub mod columns;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod format;
pub mod geometry;
pub mod group;
pub mod layout;
pub mod normalize;

pub use columns::{pack_columns, PackedEvent, PackedGroup};
pub use config::GridConfig;
pub use error::LayoutError;
pub use event::DayEvent;
pub use filter::{events_in_range, events_on_day, ranges_overlap};
pub use format::{duration_text, format_time, TimeFormat};
pub use geometry::{resolve_geometry, LayoutBlock, PositionedEvent};
pub use group::{group_collisions, CollisionGroup};
pub use layout::layout_day;
pub use normalize::{normalize_events, NormalizedEvent, MIN_LAYOUT_MINUTES};
