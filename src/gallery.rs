//! Gallery descriptor payloads and the per-card parse cache.
//!
//! Each gallery card embeds a serialized, ordered list of image descriptors.
//! A payload that is missing, unparsable, not a list, or that carries a
//! degenerate dimension is treated as "no images" — opening such a gallery
//! is a no-op, never an error.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Deserialize;

/// One image in a gallery, as authored in the embedded payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImageDescriptor {
    /// Source URL
    pub src: String,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Alternative text, if authored
    #[serde(default)]
    pub alt: Option<String>,
}

impl ImageDescriptor {
    /// Alt text to write to the display element (empty when not authored).
    pub fn alt_text(&self) -> &str {
        self.alt.as_deref().unwrap_or("")
    }
}

/// Parse an embedded descriptor payload.
///
/// Returns the empty sequence for anything that is not a well-formed list of
/// descriptors with positive dimensions. The caller cannot distinguish "no
/// gallery" from "broken gallery", and does not need to: both mean there is
/// nothing to open.
pub fn parse_descriptors(payload: &str) -> Rc<[ImageDescriptor]> {
    match serde_json::from_str::<Vec<ImageDescriptor>>(payload) {
        Ok(images) => {
            if images.iter().any(|img| img.width == 0 || img.height == 0) {
                log::warn!("gallery payload has a zero-sized image, treating as empty");
                return Rc::from([]);
            }
            Rc::from(images)
        }
        Err(err) => {
            log::debug!("gallery payload did not parse: {err}");
            Rc::from([])
        }
    }
}

/// Parsed-descriptor cache, keyed by a stable gallery identifier.
///
/// The association is keyed by the card's `data-bit` attribute value, with
/// explicit eviction when a gallery leaves the page. Cards without a stable
/// key are parsed fresh on every open.
#[derive(Debug, Default)]
pub struct GalleryCache {
    entries: HashMap<String, Rc<[ImageDescriptor]>>,
}

impl GalleryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a card's descriptors, parsing the payload on first sight.
    ///
    /// A `None` key disables caching for this call. Repeated lookups with
    /// the same key return the cached sequence without re-parsing.
    pub fn lookup_or_parse(&mut self, key: Option<&str>, payload: &str) -> Rc<[ImageDescriptor]> {
        let Some(key) = key.filter(|k| !k.is_empty()) else {
            return parse_descriptors(payload);
        };
        if let Some(cached) = self.entries.get(key) {
            return Rc::clone(cached);
        }
        let parsed = parse_descriptors(payload);
        self.entries.insert(key.to_owned(), Rc::clone(&parsed));
        parsed
    }

    /// Drop the entry for a gallery that left the page.
    pub fn evict(&mut self, key: &str) {
        self.entries.remove(key);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of cached galleries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
