//! Semantic action IDs for the deck's click targets.
//!
//! Registered during render, dispatched via `InputEvent::Click`. The deck
//! dispatcher resolves case-study ranges before CTA ranges, so a card's
//! detail control can never be mistaken for a generic CTA button.

// ── Footer navigation controls ──────────────────────────────────
pub const PREV_CONTROL: u16 = 1;
pub const NEXT_CONTROL: u16 = 2;

// ── Modal surface ───────────────────────────────────────────────
pub const MODAL_BACKDROP: u16 = 10;
pub const MODAL_CLOSE: u16 = 11;
pub const MODAL_CONFIRM: u16 = 12;
pub const MODAL_DISMISS: u16 = 13;
pub const MODAL_LINK: u16 = 14;
/// Inert shield over the modal sheet so body text doesn't hit the backdrop.
pub const MODAL_SHEET: u16 = 15;

// ── Sidebar nav links (base + slide index) ──────────────────────
pub const NAV_SLIDE_BASE: u16 = 100;

// ── Case-study cards (base + case-study table index) ────────────
pub const CASE_CARD_BASE: u16 = 200;

// ── CTA buttons (base + per-slide button ordinal) ───────────────
pub const CTA_BUTTON_BASE: u16 = 300;

// ── Content viewport scrolling ──────────────────────────────────
pub const SCROLL_UP: u16 = 400;
pub const SCROLL_DOWN: u16 = 401;
