//! Scroll spy — active-section tracking for the sticky sector nav.
//!
//! DESIGN
//! ======
//! The browser build wires an IntersectionObserver and toggles an `active`
//! class. Here the same selection rule is a pure state machine over reported
//! intersections: the last section reported intersecting wins, and a
//! non-intersecting report never steals the highlight.

/// Sticky-header clearance applied above a scroll target, in pixels.
pub const SCROLL_OFFSET: f64 = 100.0;

/// One section's visibility report.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub section_id: &'a str,
    pub is_intersecting: bool,
}

/// Tracks which registered section currently owns the nav highlight.
#[derive(Debug, Clone)]
pub struct ScrollSpy {
    section_ids: Vec<String>,
    active: Option<usize>,
}

impl ScrollSpy {
    /// Register the observed sections, in document order. Nothing is active
    /// until the first intersecting report.
    pub fn new<I, T>(section_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self { section_ids: section_ids.into_iter().map(Into::into).collect(), active: None }
    }

    /// Apply a batch of intersection reports and return the active section.
    ///
    /// Reports for unregistered ids are ignored, matching the original's
    /// silent selector miss.
    pub fn observe(&mut self, entries: &[Intersection<'_>]) -> Option<&str> {
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if let Some(idx) = self.section_ids.iter().position(|id| id == entry.section_id) {
                self.active = Some(idx);
            }
        }
        self.active()
    }

    /// Currently highlighted section, if any.
    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.map(|idx| self.section_ids[idx].as_str())
    }

    /// Scroll destination for a nav click: the section's document position
    /// minus the sticky-header clearance.
    #[must_use]
    pub fn scroll_target(section_top: f64, body_top: f64) -> f64 {
        (section_top - body_top) - SCROLL_OFFSET
    }
}

#[cfg(test)]
#[path = "scroll_spy_test.rs"]
mod tests;
