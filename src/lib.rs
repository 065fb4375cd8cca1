//! bits-lightbox — embeddable image-lightbox controller.
//!
//! Opens a modal viewer over a gallery of images, navigates between them,
//! and interprets touch input as pinch-to-zoom, drag-to-pan,
//! swipe-to-navigate, or swipe-down-to-dismiss. The gesture recognition,
//! transform clamping, navigation, and scroll-lock state machines are
//! target-independent and unit-tested; the DOM integration compiles for
//! `wasm32-unknown-unknown` only.

mod config;
mod constants;
mod error;
mod event;
mod gallery;
mod geometry;
mod gesture;
mod scroll_lock;
mod session;
mod transform;

pub use config::{LightboxConfig, LogLevel};
pub use error::LightboxError;
pub use event::{Key, TouchPoint};
pub use gallery::{GalleryCache, ImageDescriptor, parse_descriptors};
pub use geometry::GeometrySnapshot;
pub use gesture::{GestureEffect, GestureState, GestureTuning};
pub use scroll_lock::{LockedStyles, ScrollLock, ScrollLockSnapshot, ScrollSurface};
pub use session::ViewerSession;
pub use transform::Transform;

// DOM integration and WASM entry point
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod viewer;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use viewer::Lightbox;
#[cfg(target_arch = "wasm32")]
pub use wasm::*;
