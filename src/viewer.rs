//! Viewer lifecycle and event wiring.
//!
//! [`Lightbox`] attaches the controller to a host page: it resolves the
//! surface, wires the input listeners, and owns the live state behind an
//! `Rc<RefCell<_>>` shared with the event closures. Every listener
//! translates its raw event into core input (touch points, keys, steps) and
//! lets the core decide; this module only interprets the resulting effects.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, TouchList, Window};

use crate::config::LightboxConfig;
use crate::constants::attrs;
use crate::dom::{HostSurface, PageScrollSurface};
use crate::error::LightboxError;
use crate::event::{Key, TouchPoint};
use crate::gallery::{GalleryCache, ImageDescriptor};
use crate::geometry::GeometrySnapshot;
use crate::gesture::{GestureEffect, GestureState, GestureTuning};
use crate::scroll_lock::ScrollLock;
use crate::session::ViewerSession;
use crate::transform::Transform;

/// Live state of the attached controller.
struct Viewer {
    window: Window,
    surface: HostSurface,
    page: PageScrollSurface,
    scroll_lock: ScrollLock,
    cache: GalleryCache,
    session: Option<ViewerSession>,
    transform: Transform,
    gesture: GestureState,
    geometry: GeometrySnapshot,
    tuning: GestureTuning,
    dots_rendered: usize,
    /// Self-reference for scheduling next-frame work
    handle: Weak<RefCell<Viewer>>,
}

impl Viewer {
    fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open the viewer on a gallery. A no-op for an empty image list.
    fn open(&mut self, images: Rc<[ImageDescriptor]>, index: usize) {
        let Some(session) = ViewerSession::open(images, index) else {
            return;
        };
        self.session = Some(session);
        self.sync_view();
        self.surface.show_dialog();
        self.scroll_lock.lock(&mut self.page);
    }

    /// Close the viewer. Idempotent: hidden markers are always re-applied,
    /// but the close transition, drag reset, and scroll unlock run only when
    /// a session was actually open.
    fn close(&mut self) {
        if self.session.take().is_some() {
            self.gesture = GestureState::Idle;
            self.transform.reset();
            self.surface.apply_transform(&self.transform);
            self.surface.clear_backdrop();
            self.scroll_lock.unlock(&mut self.page);
            log::debug!("viewer closed");
        }
        self.surface.hide_dialog();
    }

    /// Step the session and re-render on success.
    fn step(&mut self, delta: i32) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if session.step(delta) {
            self.sync_view();
        }
    }

    /// Project the current session onto the host surface and schedule a
    /// re-measure for the next frame, once layout has settled.
    fn sync_view(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        self.surface.show_image(session.current());
        self.transform.reset();
        self.surface.apply_transform(&self.transform);
        self.surface.clear_backdrop();
        self.surface.set_counter(&session.counter_label());
        self.surface.sync_dots(session, &mut self.dots_rendered);
        self.surface.sync_buttons(session.at_first(), session.at_last());
        self.schedule_remeasure();
    }

    /// Refresh geometry from the DOM and re-clamp the translation.
    fn remeasure(&mut self) {
        self.geometry = self.surface.measure(self.transform.scale);
        self.transform.clamp_translate(&self.geometry);
        self.surface.apply_transform(&self.transform);
    }

    /// Defer a re-measure to the next frame boundary. Layout is not
    /// guaranteed settled until then after a DOM mutation.
    fn schedule_remeasure(&self) {
        let Some(inner) = self.handle.upgrade() else {
            return;
        };
        let callback = Closure::once_into_js(move || {
            inner.borrow_mut().remeasure();
        });
        let _ = self
            .window
            .request_animation_frame(callback.unchecked_ref());
    }

    fn on_resize(&mut self) {
        if self.is_open() {
            self.remeasure();
        }
    }

    fn on_key(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.step(-1),
            Key::ArrowRight => self.step(1),
            Key::Escape => self.close(),
        }
    }

    fn on_touch_start(&mut self, touches: &[TouchPoint]) {
        if !self.is_open() {
            return;
        }
        self.gesture.on_touch_start(touches, &self.transform);
    }

    fn on_touch_move(&mut self, touches: &[TouchPoint]) {
        let effect =
            self.gesture
                .on_touch_move(touches, &mut self.transform, &self.geometry, &self.tuning);
        self.apply_effect(effect);
    }

    fn on_touch_end(&mut self, remaining: &[TouchPoint]) {
        let effect =
            self.gesture
                .on_touch_end(remaining, &mut self.transform, &self.geometry, &self.tuning);
        self.apply_effect(effect);
    }

    fn on_touch_cancel(&mut self) {
        let effect = self.gesture.on_touch_cancel(&mut self.transform);
        self.apply_effect(effect);
    }

    fn apply_effect(&mut self, effect: GestureEffect) {
        match effect {
            GestureEffect::None => {}
            GestureEffect::Render { remeasure } => {
                self.surface.apply_transform(&self.transform);
                if remeasure {
                    self.remeasure();
                }
            }
            GestureEffect::DragPreview { backdrop } => {
                self.surface.apply_transform(&self.transform);
                self.surface.set_backdrop(backdrop);
            }
            GestureEffect::Navigate(delta) => {
                self.step(delta);
                // A step at the edge is a no-op; the drag visuals still
                // have to settle back to neutral.
                self.surface.apply_transform(&self.transform);
                self.surface.clear_backdrop();
            }
            GestureEffect::Dismiss => self.close(),
            GestureEffect::ResetDrag => {
                self.surface.apply_transform(&self.transform);
                self.surface.clear_backdrop();
            }
        }
    }

    /// Resolve a click on (or inside) a trigger element and open the
    /// enclosing gallery at the trigger's index.
    fn open_from_trigger(&mut self, target: &Element) {
        let hidden_selector = format!("[{}]", attrs::OPEN_HIDDEN);
        if let Ok(Some(hidden)) = target.closest(&hidden_selector) {
            // The hidden variant carries its own index but must still live
            // inside a trigger button.
            let button_selector = format!("[{}]", attrs::OPEN_BUTTON);
            let Ok(Some(button)) = hidden.closest(&button_selector) else {
                return;
            };
            let index = attr_index(&hidden, attrs::OPEN_HIDDEN);
            self.open_card(&button, index);
            return;
        }
        let button_selector = format!("[{}]", attrs::OPEN_BUTTON);
        if let Ok(Some(button)) = target.closest(&button_selector) {
            let index = attr_index(&button, attrs::OPEN_INDEX);
            self.open_card(&button, index);
        }
    }

    /// Look up (or parse and cache) the enclosing card's descriptor payload
    /// and open the viewer on it.
    fn open_card(&mut self, trigger: &Element, index: usize) {
        let card_selector = format!("[{}]", attrs::CARD);
        let Ok(Some(card)) = trigger.closest(&card_selector) else {
            return;
        };
        let payload_selector = format!("script[{}]", attrs::IMAGES);
        let payload = card
            .query_selector(&payload_selector)
            .ok()
            .flatten()
            .and_then(|script| script.text_content());
        let Some(payload) = payload else {
            return;
        };
        let key = card.get_attribute(attrs::CARD);
        let images = self.cache.lookup_or_parse(key.as_deref(), &payload);
        self.open(images, index);
    }

    /// Convert a touch list to container-center-relative points.
    fn touch_points(&self, list: &TouchList) -> Vec<TouchPoint> {
        let (cx, cy) = self.surface.container_center();
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|touch| {
                TouchPoint::new(
                    f64::from(touch.client_x()) - cx,
                    f64::from(touch.client_y()) - cy,
                )
            })
            .collect()
    }
}

/// The attached lightbox controller.
///
/// Dropping it detaches nothing (listeners stay registered) but frees the
/// shared state; callers that attach for the lifetime of the page should
/// call [`Lightbox::forget`].
pub struct Lightbox {
    inner: Rc<RefCell<Viewer>>,
    listeners: Vec<Closure<dyn FnMut(web_sys::Event)>>,
}

impl Lightbox {
    /// Attach the controller to the host page.
    ///
    /// Fails only when the required surface (dialog, image element) is
    /// absent or a listener cannot be registered.
    pub fn attach(window: &Window, config: &LightboxConfig) -> Result<Self, LightboxError> {
        let document = window
            .document()
            .ok_or_else(|| LightboxError::Dom("no document on window".into()))?;
        let surface = HostSurface::locate(&document)?;
        let page = PageScrollSurface::new(window, &document)?;

        let inner = Rc::new(RefCell::new(Viewer {
            window: window.clone(),
            surface,
            page,
            scroll_lock: ScrollLock::new(),
            cache: GalleryCache::new(),
            session: None,
            transform: Transform::identity(),
            gesture: GestureState::Idle,
            geometry: GeometrySnapshot::default(),
            tuning: GestureTuning::from(config),
            dots_rendered: 0,
            handle: Weak::new(),
        }));
        inner.borrow_mut().handle = Rc::downgrade(&inner);

        let mut lightbox = Lightbox {
            inner,
            listeners: Vec::new(),
        };
        lightbox.wire(window, &document)?;
        log::info!("lightbox attached");
        Ok(lightbox)
    }

    /// Leak the controller so it lives for the rest of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }

    fn wire(&mut self, window: &Window, document: &Document) -> Result<(), LightboxError> {
        let viewer = self.inner.borrow();
        let dialog: EventTarget = viewer.surface.dialog.clone().into();
        let image: EventTarget = viewer.surface.image.clone().into();
        let close_button = viewer.surface.close_button.clone();
        let prev_button = viewer.surface.prev_button.clone();
        let next_button = viewer.surface.next_button.clone();
        drop(viewer);

        // Resize while open re-measures without resetting zoom/pan.
        let inner = Rc::clone(&self.inner);
        self.listen(window, "resize", false, move |_| {
            inner.borrow_mut().on_resize();
        })?;

        // Delegated click handler for gallery triggers anywhere in the page.
        let inner = Rc::clone(&self.inner);
        self.listen(document, "click", false, move |event| {
            if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
                inner.borrow_mut().open_from_trigger(&target);
            }
        })?;

        if let Some(button) = prev_button {
            let inner = Rc::clone(&self.inner);
            self.listen(&button, "click", false, move |_| {
                inner.borrow_mut().step(-1);
            })?;
        }
        if let Some(button) = next_button {
            let inner = Rc::clone(&self.inner);
            self.listen(&button, "click", false, move |_| {
                inner.borrow_mut().step(1);
            })?;
        }
        if let Some(button) = close_button {
            let inner = Rc::clone(&self.inner);
            self.listen(&button, "click", false, move |_| {
                inner.borrow_mut().close();
            })?;
        }

        // Clicking the backdrop (the dialog itself, not its content) closes.
        let inner = Rc::clone(&self.inner);
        let backdrop_target = dialog.clone();
        self.listen(&dialog, "click", false, move |event| {
            if event.target().as_ref() == Some(&backdrop_target) {
                inner.borrow_mut().close();
            }
        })?;

        // The dialog's native cancel (e.g. platform back gesture) closes too.
        let inner = Rc::clone(&self.inner);
        self.listen(&dialog, "cancel", false, move |_| {
            inner.borrow_mut().close();
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&dialog, "keydown", false, move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            let mut viewer = inner.borrow_mut();
            if !viewer.is_open() {
                return;
            }
            if let Some(key) = Key::from_dom_key(&event.key()) {
                event.prevent_default();
                viewer.on_key(key);
            }
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&image, "load", false, move |_| {
            let mut viewer = inner.borrow_mut();
            if viewer.is_open() {
                viewer.remeasure();
            }
        })?;

        // Touch surface. Passive: the recognizer never prevents scrolling
        // itself; the scroll lock already freezes the background.
        let inner = Rc::clone(&self.inner);
        self.listen(&image, "touchstart", true, move |event| {
            let Some(event) = event.dyn_ref::<web_sys::TouchEvent>() else {
                return;
            };
            let mut viewer = inner.borrow_mut();
            let touches = viewer.touch_points(&event.touches());
            viewer.on_touch_start(&touches);
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&image, "touchmove", true, move |event| {
            let Some(event) = event.dyn_ref::<web_sys::TouchEvent>() else {
                return;
            };
            let mut viewer = inner.borrow_mut();
            let touches = viewer.touch_points(&event.touches());
            viewer.on_touch_move(&touches);
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&image, "touchend", true, move |event| {
            let Some(event) = event.dyn_ref::<web_sys::TouchEvent>() else {
                return;
            };
            let mut viewer = inner.borrow_mut();
            let remaining = viewer.touch_points(&event.touches());
            viewer.on_touch_end(&remaining);
        })?;

        let inner = Rc::clone(&self.inner);
        self.listen(&image, "touchcancel", true, move |_| {
            inner.borrow_mut().on_touch_cancel();
        })?;

        Ok(())
    }

    /// Register a listener and keep its closure alive with the controller.
    fn listen(
        &mut self,
        target: &EventTarget,
        kind: &str,
        passive: bool,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), LightboxError> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let result = if passive {
            let options = AddEventListenerOptions::new();
            options.set_passive(true);
            target.add_event_listener_with_callback_and_add_event_listener_options(
                kind,
                closure.as_ref().unchecked_ref(),
                &options,
            )
        } else {
            target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        };
        result.map_err(|err| LightboxError::Dom(format!("{kind} listener: {err:?}")))?;
        self.listeners.push(closure);
        Ok(())
    }
}

fn attr_index(element: &Element, attr: &str) -> usize {
    element
        .get_attribute(attr)
        .and_then(|value| value.parse().ok())
        .unwrap_or(0)
}
