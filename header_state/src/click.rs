//! Click-to-top target matching.
//!
//! Only clicks whose originating target *is* one of the registered nodes
//! count. Descendants (links, images, nested spans) are different nodes and
//! never match, so comparison must be by identity.

use std::rc::Rc;
use std::sync::Arc;

use tracing::trace;

/// Identity comparison between two handles to rendering-tree nodes.
pub trait SameNode {
    fn same_node(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameNode for Rc<T> {
    fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SameNode for Arc<T> {
    fn same_node(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

/// A small fixed set of nodes whose direct clicks trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTargets<N> {
    nodes: Vec<N>,
}

impl<N> Default for ClickTargets<N> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<N: SameNode> ClickTargets<N> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a node. Unmounted nodes (`None`) are skipped.
    #[must_use]
    pub fn with(mut self, node: Option<N>) -> Self {
        self.register(node);
        self
    }

    pub fn register(&mut self, node: Option<N>) {
        if let Some(node) = node {
            self.nodes.push(node);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn matches(&self, target: &N) -> bool {
        self.nodes.iter().any(|node| node.same_node(target))
    }

    /// Runs `action` iff `target` is exactly one of the registered nodes.
    /// Returns whether the action ran.
    pub fn dispatch<F: FnOnce()>(&self, target: Option<&N>, action: F) -> bool {
        let hit = target.is_some_and(|target| self.matches(target));
        trace!(hit, registered = self.nodes.len(), "header click");
        if hit {
            action();
        }
        hit
    }
}
