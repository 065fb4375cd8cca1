//! Background scroll locking while the viewer is open.
//!
//! Locking snapshots the page's scroll offset and the style properties it is
//! about to overwrite, compensates for the vanishing scrollbar, and fixes
//! the background in place; unlocking restores the snapshot verbatim and
//! re-scrolls to the captured offset. Both directions are guarded so
//! repeated calls are no-ops.
//!
//! The lock is written against [`ScrollSurface`] so the sequencing and
//! idempotence rules are testable without a DOM; the web-sys implementation
//! lives in the DOM layer.

/// Style properties captured at lock time and restored verbatim at unlock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedStyles {
    pub body_overflow: String,
    pub body_position: String,
    pub body_top: String,
    pub body_width: String,
    pub body_padding_right: String,
    pub doc_overflow: String,
}

/// Snapshot of everything a lock changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollLockSnapshot {
    /// Vertical scroll offset at lock time
    pub offset: f64,
    /// Styles as they were before the lock
    pub styles: LockedStyles,
}

/// The scrollable background the lock manipulates.
pub trait ScrollSurface {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Width the scrollbar occupies (`innerWidth - documentClientWidth`);
    /// compensated as right padding so locking causes no layout shift.
    fn scrollbar_gap(&self) -> f64;

    /// Read the style properties the lock will overwrite.
    fn capture_styles(&self) -> LockedStyles;

    /// Fix the background in place at the negative of `offset`, hiding
    /// overflow and padding by `scrollbar_gap` when positive.
    fn freeze(&mut self, offset: f64, scrollbar_gap: f64);

    /// Write the captured styles back verbatim and re-scroll to `offset`.
    fn restore(&mut self, snapshot: &ScrollLockSnapshot);
}

/// Idempotent lock/unlock coordinator.
#[derive(Debug, Default)]
pub struct ScrollLock {
    snapshot: Option<ScrollLockSnapshot>,
}

impl ScrollLock {
    /// Create an unlocked coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the background is currently locked.
    pub fn is_locked(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Engage the lock. A no-op when already locked.
    pub fn lock(&mut self, surface: &mut impl ScrollSurface) {
        if self.snapshot.is_some() {
            return;
        }
        let snapshot = ScrollLockSnapshot {
            offset: surface.scroll_offset(),
            styles: surface.capture_styles(),
        };
        surface.freeze(snapshot.offset, surface.scrollbar_gap());
        log::debug!("scroll locked at offset {}", snapshot.offset);
        self.snapshot = Some(snapshot);
    }

    /// Release the lock. A no-op when not locked.
    pub fn unlock(&mut self, surface: &mut impl ScrollSurface) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };
        surface.restore(&snapshot);
        log::debug!("scroll unlocked, restored offset {}", snapshot.offset);
    }
}
