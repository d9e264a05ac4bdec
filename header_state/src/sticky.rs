//! Sticky-header presentation driven by sentinel visibility.
//!
//! A sentinel element sits just above the header. While it is visible the
//! header renders inline; once it scrolls out of the viewport the header is
//! "stuck" to the top. The state is recomputed only from the most recent
//! intersection observation, never from scroll offsets.

use tracing::{debug, warn};

/// Visual mode applied to the header node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// Sticky mode enabled and the sentinel is visible.
    Inline,
    /// Sticky mode enabled and the sentinel has left the viewport.
    Stuck,
    /// Sticky mode disabled, or the platform cannot observe the sentinel.
    NonSticky,
}

impl Presentation {
    /// Class toggled on the header while it is stuck to the viewport.
    pub const STUCK_CLASS: &'static str = "sticky-nav-full";
    /// Class permanently added to the header when sticky mode is off.
    pub const NON_STICKY_CLASS: &'static str = "remove-sticky";

    /// Returns the CSS class this presentation requires on the header, if any.
    #[must_use]
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Inline => None,
            Self::Stuck => Some(Self::STUCK_CLASS),
            Self::NonSticky => Some(Self::NON_STICKY_CLASS),
        }
    }

    #[must_use]
    pub const fn is_stuck(self) -> bool {
        matches!(self, Self::Stuck)
    }
}

/// Tracks whether the header should be stuck to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StickyController {
    enabled: bool,
    presentation: Presentation,
}

impl StickyController {
    #[must_use]
    pub const fn new(sticky_enabled: bool) -> Self {
        Self {
            enabled: sticky_enabled,
            presentation: if sticky_enabled {
                Presentation::Inline
            } else {
                Presentation::NonSticky
            },
        }
    }

    /// Builds a controller from the site's `autoCollapsedNavBar` flag, which
    /// disables sticky behaviour when set.
    #[must_use]
    pub const fn from_auto_collapsed(auto_collapsed_nav_bar: bool) -> Self {
        Self::new(!auto_collapsed_nav_bar)
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[must_use]
    pub const fn presentation(&self) -> Presentation {
        self.presentation
    }

    #[must_use]
    pub const fn is_stuck(&self) -> bool {
        self.presentation.is_stuck()
    }

    /// Feeds one intersection observation into the controller.
    ///
    /// With sticky mode disabled the observation is ignored and the header
    /// stays non-sticky, so an observer that keeps firing is harmless.
    pub fn observe(&mut self, sentinel_visible: bool) -> Presentation {
        if self.enabled {
            self.presentation = if sentinel_visible {
                Presentation::Inline
            } else {
                Presentation::Stuck
            };
            debug!(sentinel_visible, presentation = ?self.presentation, "sentinel observed");
        }
        self.presentation
    }

    /// Switches to the non-sticky presentation for good. Used when the host
    /// has no intersection primitive to offer.
    pub fn degrade(&mut self) -> Presentation {
        if self.enabled {
            warn!("intersection observation unavailable; header stays non-sticky");
        }
        self.enabled = false;
        self.presentation = Presentation::NonSticky;
        self.presentation
    }
}

/// A viewport-intersection facility that can watch and unwatch nodes.
#[cfg_attr(test, mockall::automock(type Node = u32;))]
pub trait IntersectionSource {
    type Node;

    fn observe(&self, node: &Self::Node);

    fn unobserve(&self, node: &Self::Node);
}

/// Holds an intersection subscription for exactly one node.
///
/// The node that was subscribed is the node that gets unsubscribed, and the
/// release happens at most once: either through [`ObserverGuard::release`]
/// or when the guard is dropped. Subscribing without a node (the sentinel
/// was never mounted) yields an inert guard whose release is a no-op.
pub struct ObserverGuard<S: IntersectionSource> {
    source: S,
    node: Option<S::Node>,
}

impl<S: IntersectionSource> ObserverGuard<S> {
    pub fn subscribe(source: S, node: Option<S::Node>) -> Self {
        match &node {
            Some(node) => source.observe(node),
            None => debug!("no sentinel node mounted; skipping intersection subscription"),
        }
        Self { source, node }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.node.is_some()
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Unsubscribes the node. Returns `false` when there was nothing left
    /// to release.
    pub fn release(&mut self) -> bool {
        let Some(node) = self.node.take() else {
            return false;
        };
        self.source.unobserve(&node);
        true
    }
}

impl<S: IntersectionSource> Drop for ObserverGuard<S> {
    fn drop(&mut self) {
        self.release();
    }
}
