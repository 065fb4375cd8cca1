//! The live state of one open viewing session.
//!
//! Exactly one session exists while the viewer is open; opening again
//! replaces it rather than stacking. The session owns the ordered image
//! sequence and the current index, and exposes the pure view outputs
//! (counter label, button enablement, dot states) that the DOM layer
//! renders.

use std::rc::Rc;

use crate::gallery::ImageDescriptor;

/// An open gallery: non-empty image sequence plus the current index.
#[derive(Debug, Clone)]
pub struct ViewerSession {
    images: Rc<[ImageDescriptor]>,
    index: usize,
}

impl ViewerSession {
    /// Start a session on the given images.
    ///
    /// Returns `None` for an empty sequence — there is nothing to show, so
    /// the viewer must not open. An out-of-range start index clamps to the
    /// nearest valid image instead of failing.
    pub fn open(images: Rc<[ImageDescriptor]>, start_index: usize) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        let index = start_index.min(images.len() - 1);
        log::debug!("session opened: {} images, starting at {index}", images.len());
        Some(Self { images, index })
    }

    /// The descriptor currently on display.
    pub fn current(&self) -> &ImageDescriptor {
        &self.images[self.index]
    }

    /// Current index, in `[0, len - 1]`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of images in the session.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Sessions are never empty, but the conventional pair to `len`.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Step the index by a delta. Navigation does not wrap: a step that
    /// would leave `[0, len - 1]` is a no-op. Returns whether the index
    /// changed.
    pub fn step(&mut self, delta: i32) -> bool {
        let Some(next) = self.index.checked_add_signed(delta as isize) else {
            return false;
        };
        if next >= self.images.len() {
            return false;
        }
        self.index = next;
        true
    }

    /// Jump to an index, clamping out-of-range requests into range.
    pub fn jump_to(&mut self, index: usize) {
        self.index = index.min(self.images.len() - 1);
    }

    /// Counter label, `"{index + 1} / {len}"`.
    pub fn counter_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.images.len())
    }

    /// Whether the current image is the first (previous button disabled).
    pub fn at_first(&self) -> bool {
        self.index == 0
    }

    /// Whether the current image is the last (next button disabled).
    pub fn at_last(&self) -> bool {
        self.index + 1 == self.images.len()
    }

    /// Per-dot active flags, one per image, exactly one set.
    pub fn dot_states(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.images.len()).map(move |i| i == self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptors(count: usize) -> Rc<[ImageDescriptor]> {
        (0..count)
            .map(|i| ImageDescriptor {
                src: format!("/images/{i}.avif"),
                width: 1600,
                height: 1200,
                alt: None,
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_open_empty_is_none() {
        assert!(ViewerSession::open(Rc::from([]), 0).is_none());
    }

    #[test]
    fn test_open_clamps_start_index() {
        let session = ViewerSession::open(descriptors(3), 99).unwrap();
        assert_eq!(session.index(), 2);
        let session = ViewerSession::open(descriptors(3), 1).unwrap();
        assert_eq!(session.index(), 1);
    }

    #[test]
    fn test_step_moves_within_range() {
        let mut session = ViewerSession::open(descriptors(3), 0).unwrap();
        assert!(session.step(1));
        assert_eq!(session.index(), 1);
        assert!(session.step(1));
        assert_eq!(session.index(), 2);
    }

    #[test]
    fn test_step_does_not_wrap() {
        let mut session = ViewerSession::open(descriptors(3), 2).unwrap();
        assert!(!session.step(1));
        assert_eq!(session.index(), 2);

        session.jump_to(0);
        assert!(!session.step(-1));
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_jump_to_clamps() {
        let mut session = ViewerSession::open(descriptors(3), 0).unwrap();
        session.jump_to(7);
        assert_eq!(session.index(), 2);
    }

    #[test]
    fn test_counter_label() {
        let session = ViewerSession::open(descriptors(3), 1).unwrap();
        assert_eq!(session.counter_label(), "2 / 3");
    }

    #[test]
    fn test_button_enablement_at_edges() {
        let mut session = ViewerSession::open(descriptors(3), 0).unwrap();
        assert!(session.at_first());
        assert!(!session.at_last());

        session.step(1);
        assert!(!session.at_first());
        assert!(!session.at_last());

        session.step(1);
        assert!(!session.at_first());
        assert!(session.at_last());
    }

    #[test]
    fn test_single_image_disables_both_buttons() {
        let session = ViewerSession::open(descriptors(1), 0).unwrap();
        assert!(session.at_first());
        assert!(session.at_last());
    }

    #[test]
    fn test_exactly_one_active_dot() {
        let session = ViewerSession::open(descriptors(3), 1).unwrap();
        let dots: Vec<bool> = session.dot_states().collect();
        assert_eq!(dots, vec![false, true, false]);
    }

    #[test]
    fn test_current_follows_index() {
        let mut session = ViewerSession::open(descriptors(3), 0).unwrap();
        assert_eq!(session.current().src, "/images/0.avif");
        session.step(1);
        assert_eq!(session.current().src, "/images/1.avif");
    }
}
