//! Drop-target registry resolving release points to droppable identifiers.

use super::{Point, Rect};

#[derive(Debug, Clone, PartialEq, Eq)]
struct DropTarget {
    id: String,
    rect: Rect,
}

/// Droppable regions, resolved with pointer-within collision detection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropTargets {
    targets: Vec<DropTarget>,
}

impl DropTargets {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` over `rect`, replacing any previous region for `id`.
    pub fn register(&mut self, id: impl Into<String>, rect: Rect) {
        let key = id.into();
        if let Some(existing) = self.targets.iter_mut().find(|target| target.id == key) {
            existing.rect = rect;
        } else {
            self.targets.push(DropTarget { id: key, rect });
        }
    }

    /// Removes `id`. Returns `false` when it was not registered.
    pub fn unregister(&mut self, id: &str) -> bool {
        let before = self.targets.len();
        self.targets.retain(|target| target.id != id);
        self.targets.len() != before
    }

    /// Returns the identifier of the first registered region containing
    /// `point`.
    #[must_use]
    pub fn resolve(&self, point: Point) -> Option<&str> {
        self.targets
            .iter()
            .find(|target| target.rect.contains(point))
            .map(|target| target.id.as_str())
    }

    /// Returns the number of registered regions.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` when no region is registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
