//! Deep links, browser history, and session restore.
//!
//! The slide a viewer is on lives in the URL fragment (`#slide-N`, 1-based
//! for humans). Writing the fragment on navigation pushes a browser
//! history entry; the frame loop polls the hash, so back/forward and
//! hand-edited fragments both come back through the same path. The
//! current slide is also mirrored to `sessionStorage` (session-scoped
//! only) so a reload lands where the viewer left off.
//!
//! Precedence at startup: deep link, then stored session, then slide 0.
//! Anything invalid or out of range is ignored.

use serde::{Deserialize, Serialize};

/// Session record format version. Bump on incompatible changes; records
/// from other versions are discarded rather than migrated (they only hold
/// a slide position).
const SESSION_VERSION: u32 = 1;

/// sessionStorage key.
const STORAGE_KEY: &str = "proposal_deck_session";

/// Serialized session record.
#[derive(Serialize, Deserialize)]
struct SessionSave {
    version: u32,
    slide: usize,
}

/// Format a slide index as a URL fragment (no leading `#`).
/// Displayed ordinals are 1-based; the index is 0-based.
pub fn format_fragment(index: usize) -> String {
    format!("slide-{}", index + 1)
}

/// Parse a URL fragment (with or without its leading `#`) into a slide
/// index. Returns `None` for anything malformed or out of `[0, total)`.
pub fn parse_fragment(raw: &str, total: usize) -> Option<usize> {
    let fragment = raw.strip_prefix('#').unwrap_or(raw);
    let ordinal: usize = fragment.strip_prefix("slide-")?.parse().ok()?;
    if ordinal == 0 || ordinal > total {
        return None;
    }
    Some(ordinal - 1)
}

fn encode_session(slide: usize) -> String {
    serde_json::to_string(&SessionSave {
        version: SESSION_VERSION,
        slide,
    })
    .unwrap_or_default()
}

fn decode_session(json: &str, total: usize) -> Option<usize> {
    let save: SessionSave = serde_json::from_str(json).ok()?;
    if save.version != SESSION_VERSION || save.slide >= total {
        return None;
    }
    Some(save.slide)
}

/// Keeps the URL fragment and the deck index in sync without feedback:
/// fragments this app wrote are remembered and not re-applied, so only
/// external changes (back/forward, hand edits) turn into navigation.
pub struct HashSync {
    last_seen: String,
}

impl HashSync {
    pub fn new() -> Self {
        Self {
            last_seen: String::new(),
        }
    }

    /// Decide whether a freshly read hash is an external change, and into
    /// which slide it parses. Updates the seen state either way so a bad
    /// fragment is only reported once.
    pub fn observe(&mut self, raw_hash: &str, total: usize) -> Option<usize> {
        if raw_hash == self.last_seen {
            return None;
        }
        self.last_seen = raw_hash.to_string();
        parse_fragment(raw_hash, total)
    }

    /// Note a fragment this app is about to write, so the next poll
    /// doesn't bounce it back as navigation.
    pub fn note_written(&mut self, fragment: &str) {
        self.last_seen = format!("#{fragment}");
    }

    /// Poll the browser hash; `Some(index)` only for external changes.
    pub fn poll(&mut self, total: usize) -> Option<usize> {
        let raw = read_hash()?;
        self.observe(&raw, total)
    }

    /// Write the current slide into the URL (pushes a history entry) and
    /// mirror it to sessionStorage.
    pub fn record(&mut self, index: usize) {
        let fragment = format_fragment(index);
        if self.last_seen == format!("#{fragment}") {
            return;
        }
        self.note_written(&fragment);
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            let _ = location.set_hash(&fragment);
        }
        store_session(index);
    }
}

/// Read the raw location hash (including the leading `#`), if any.
fn read_hash() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    if hash.is_empty() {
        None
    } else {
        Some(hash)
    }
}

fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok()?
}

fn store_session(index: usize) {
    if let Some(storage) = session_storage() {
        if let Err(e) = storage.set_item(STORAGE_KEY, &encode_session(index)) {
            web_sys::console::warn_1(&format!("session store failed: {e:?}").into());
        }
    }
}

fn load_session(total: usize) -> Option<usize> {
    let json = session_storage()?.get_item(STORAGE_KEY).ok()??;
    decode_session(&json, total)
}

/// Resolve the slide to open at startup: deep link first, then the stored
/// session, then 0.
pub fn initial_slide(sync: &mut HashSync, total: usize) -> usize {
    if let Some(raw) = read_hash() {
        // Seed the sync state so the startup fragment isn't re-applied
        if let Some(index) = sync.observe(&raw, total) {
            return index;
        }
    }
    load_session(total).unwrap_or(0)
}

/// Open a case study's external site in a new tab.
pub fn open_external(url: &str) {
    if let Some(window) = web_sys::window() {
        if window.open_with_url_and_target(url, "_blank").is_err() {
            web_sys::console::warn_1(&format!("could not open {url}").into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── fragment parsing ────────────────────────────────────────

    #[test]
    fn fragment_round_trip() {
        for i in 0..15 {
            assert_eq!(parse_fragment(&format_fragment(i), 15), Some(i));
        }
    }

    #[test]
    fn fragment_accepts_leading_hash() {
        assert_eq!(parse_fragment("#slide-3", 15), Some(2));
        assert_eq!(parse_fragment("slide-3", 15), Some(2));
    }

    #[test]
    fn fragment_ordinals_are_one_based() {
        assert_eq!(parse_fragment("#slide-1", 15), Some(0));
        assert_eq!(parse_fragment("#slide-15", 15), Some(14));
    }

    #[test]
    fn fragment_out_of_range_ignored() {
        assert_eq!(parse_fragment("#slide-0", 15), None);
        assert_eq!(parse_fragment("#slide-16", 15), None);
        assert_eq!(parse_fragment("#slide-99", 15), None);
    }

    #[test]
    fn fragment_malformed_ignored() {
        assert_eq!(parse_fragment("", 15), None);
        assert_eq!(parse_fragment("#", 15), None);
        assert_eq!(parse_fragment("#about", 15), None);
        assert_eq!(parse_fragment("#slide-", 15), None);
        assert_eq!(parse_fragment("#slide-abc", 15), None);
        assert_eq!(parse_fragment("#slide--3", 15), None);
        assert_eq!(parse_fragment("#slide-3x", 15), None);
    }

    // ── hash sync ───────────────────────────────────────────────

    #[test]
    fn observe_reports_external_change_once() {
        let mut sync = HashSync::new();
        assert_eq!(sync.observe("#slide-4", 15), Some(3));
        // Same hash again: no change
        assert_eq!(sync.observe("#slide-4", 15), None);
        assert_eq!(sync.observe("#slide-2", 15), Some(1));
    }

    #[test]
    fn observe_swallows_bad_fragment_once() {
        let mut sync = HashSync::new();
        assert_eq!(sync.observe("#garbage", 15), None);
        assert_eq!(sync.observe("#garbage", 15), None);
        // Recovery still works
        assert_eq!(sync.observe("#slide-5", 15), Some(4));
    }

    #[test]
    fn own_writes_do_not_bounce_back() {
        let mut sync = HashSync::new();
        sync.note_written(&format_fragment(6)); // app navigates to slide 7
        assert_eq!(sync.observe("#slide-7", 15), None);
        // A real back-button change afterwards still registers
        assert_eq!(sync.observe("#slide-6", 15), Some(5));
    }

    // ── session record ──────────────────────────────────────────

    #[test]
    fn session_round_trip() {
        let json = encode_session(9);
        assert_eq!(decode_session(&json, 15), Some(9));
    }

    #[test]
    fn session_out_of_range_discarded() {
        let json = encode_session(20);
        assert_eq!(decode_session(&json, 15), None);
    }

    #[test]
    fn session_version_mismatch_discarded() {
        let json = r#"{"version":999,"slide":3}"#;
        assert_eq!(decode_session(json, 15), None);
    }

    #[test]
    fn session_garbage_discarded() {
        assert_eq!(decode_session("", 15), None);
        assert_eq!(decode_session("{not json", 15), None);
        assert_eq!(decode_session(r#"{"slide":3}"#, 15), None);
    }
}
