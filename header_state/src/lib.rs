//! Platform-free state machines behind the site header.
//!
//! Nothing in this crate touches the DOM. The `app` crate feeds browser
//! events (intersection changes, image load errors, clicks, theme changes)
//! into these types and applies the results to the rendered header.

pub mod click;
pub mod icon;
pub mod sticky;

pub use click::{ClickTargets, SameNode};
pub use icon::{IconResolver, IconSet, IconState, LoadErrorOutcome, Theme, resolve};
pub use sticky::{IntersectionSource, ObserverGuard, Presentation, StickyController};
