//! Shared input plumbing: normalized events, click targets, and gesture
//! resolution.
//!
//! Everything here is independent of the deck itself so it can be unit
//! tested natively. `main.rs` translates raw ratzilla events into
//! [`InputEvent`]s; the deck dispatches them.

use ratzilla::ratatui::layout::Rect;

/// All input the deck reacts to, normalized from keyboard, mouse, and touch.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A normalized key press.
    Key(KeyInput),
    /// A click/tap that landed on a registered target, by semantic action ID.
    Click(u16),
    /// A horizontal swipe that passed the displacement threshold.
    Swipe(SwipeDirection),
}

/// Keys the deck cares about. Anything else is dropped at the source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyInput {
    Left,
    Right,
    Escape,
    Char(char),
}

/// A region on screen that can be tapped/clicked to trigger an action.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    /// The rectangular region (in terminal cell coordinates) for hit testing.
    pub rect: Rect,
    /// Semantic action ID; constants live in `deck::actions`.
    pub action_id: u16,
}

/// Shared state between the render loop and the click handler.
///
/// Render registers targets every frame; the click handler hit-tests
/// against whatever the last frame registered.
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    /// Register a click target with a rectangular hit region.
    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Convenience: register a full-row click target at the given row within an area.
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Hit-test a terminal cell coordinate against all registered targets.
    ///
    /// Later-registered targets win when regions overlap, matching UI
    /// layering: the modal overlay registers after the page underneath it,
    /// so an open modal absorbs every click. The dispatcher's precedence
    /// rules ride on this ordering.
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }

    /// Register click targets for a horizontal control bar from actual
    /// segment text widths.
    ///
    /// Each entry in `segments` is `(display_width, action)` for the padded
    /// label of that segment; `action` is `None` for inert segments (e.g. a
    /// counter readout sitting between two buttons). `separator_width` is
    /// the display width of the separator between segments.
    ///
    /// Clickable segments cover their label plus half of each adjacent
    /// separator; the first and last segments extend to the area edges so
    /// the bar has no dead zones next to its outer buttons.
    pub fn add_bar_targets(
        &mut self,
        segments: &[(u16, Option<u16>)],
        separator_width: u16,
        x: u16,
        y: u16,
        total_width: u16,
        height: u16,
    ) {
        let n = segments.len();
        if n == 0 || total_width == 0 {
            return;
        }

        // Starting column of each segment label
        let mut starts: Vec<u16> = Vec::with_capacity(n);
        let mut cursor: u16 = 0;
        for (i, &(w, _)) in segments.iter().enumerate() {
            if i > 0 {
                cursor += separator_width;
            }
            starts.push(cursor);
            cursor += w;
        }

        for i in 0..n {
            let Some(action_id) = segments[i].1 else {
                continue;
            };

            // Left boundary: first segment from 0, others from the midpoint
            // of the gap to their left
            let left = if i == 0 {
                0
            } else {
                let prev_end = starts[i - 1] + segments[i - 1].0;
                prev_end + (starts[i] - prev_end) / 2
            };

            // Right boundary: last segment to total_width, others to the
            // midpoint of the gap to their right
            let right = if i == n - 1 {
                total_width
            } else {
                let cur_end = starts[i] + segments[i].0;
                let next_start = starts[i + 1];
                cur_end + (next_start - cur_end) / 2
            };

            let w = right.saturating_sub(left);
            if w > 0 {
                self.add_click_target(Rect::new(x + left, y, w, height), action_id);
            }
        }
    }
}

/// Determine whether a screen width (in columns) should use the narrow
/// layout (no sidebar, no progress rail).
pub fn is_narrow_layout(width: u16) -> bool {
    width < 70
}

/// Convert a pixel Y coordinate to a terminal row index.
///
/// `click_y` is relative to the grid container's top edge; `grid_height`
/// is its total pixel height. Returns `None` outside the grid.
pub fn pixel_y_to_row(click_y: f64, grid_height: f64, terminal_rows: u16) -> Option<u16> {
    if grid_height <= 0.0 || terminal_rows == 0 || click_y < 0.0 {
        return None;
    }

    let cell_height = grid_height / terminal_rows as f64;
    let row = (click_y / cell_height) as u16;

    if row >= terminal_rows {
        return None;
    }

    Some(row)
}

/// Convert a pixel X coordinate to a terminal column index.
pub fn pixel_x_to_col(click_x: f64, grid_width: f64, terminal_cols: u16) -> Option<u16> {
    if grid_width <= 0.0 || terminal_cols == 0 || click_x < 0.0 {
        return None;
    }
    let cell_width = grid_width / terminal_cols as f64;
    let col = (click_x / cell_width) as u16;
    if col >= terminal_cols {
        None
    } else {
        Some(col)
    }
}

// ── Swipe gestures ─────────────────────────────────────────────

/// Minimum horizontal displacement (in pixels) for a press/release pair to
/// count as a swipe instead of a click.
pub const SWIPE_MIN_DISTANCE_PX: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeDirection {
    /// Finger moved left (advance).
    Left,
    /// Finger moved right (go back).
    Right,
}

/// Classify a press→release displacement.
///
/// A swipe requires the horizontal displacement to pass
/// [`SWIPE_MIN_DISTANCE_PX`] *and* to dominate the vertical displacement;
/// anything else stays a click candidate.
pub fn resolve_swipe(dx: f64, dy: f64) -> Option<SwipeDirection> {
    if dx.abs() < SWIPE_MIN_DISTANCE_PX || dx.abs() <= dy.abs() {
        return None;
    }
    if dx < 0.0 {
        Some(SwipeDirection::Left)
    } else {
        Some(SwipeDirection::Right)
    }
}

/// Tracks one pointer gesture from press to release.
///
/// The mouse handler feeds press/release pixel coordinates; `release`
/// resolves the pair into a swipe or hands back the release point so the
/// caller can hit-test it as a click.
pub struct GestureTracker {
    pressed_at: Option<(f64, f64)>,
}

/// What a completed press→release gesture turned out to be.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Swipe(SwipeDirection),
    /// Not a swipe; hit-test the release coordinates as a click.
    Click { x: f64, y: f64 },
}

impl GestureTracker {
    pub fn new() -> Self {
        Self { pressed_at: None }
    }

    pub fn press(&mut self, x: f64, y: f64) {
        self.pressed_at = Some((x, y));
    }

    /// Complete the gesture. Returns `None` if no press was recorded
    /// (e.g. the press landed outside the grid).
    pub fn release(&mut self, x: f64, y: f64) -> Option<Gesture> {
        let (sx, sy) = self.pressed_at.take()?;
        match resolve_swipe(x - sx, y - sy) {
            Some(dir) => Some(Gesture::Swipe(dir)),
            None => Some(Gesture::Click { x, y }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── hit_test ────────────────────────────────────────────────

    #[test]
    fn hit_test_basic() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 11, 80, 1), 2);

        assert_eq!(cs.hit_test(5, 10), Some(1));
        assert_eq!(cs.hit_test(5, 11), Some(2));
    }

    #[test]
    fn hit_test_miss_returns_none() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 10, 80, 1), 1);

        assert_eq!(cs.hit_test(5, 9), None);
        assert_eq!(cs.hit_test(5, 11), None);
    }

    #[test]
    fn hit_test_multi_row_rect() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 5, 40, 3), 42);

        assert_eq!(cs.hit_test(10, 4), None);
        assert_eq!(cs.hit_test(10, 5), Some(42));
        assert_eq!(cs.hit_test(10, 7), Some(42));
        assert_eq!(cs.hit_test(10, 8), None);
    }

    #[test]
    fn hit_test_overlap_last_wins() {
        let mut cs = ClickState::new();
        // Page-level target registered first
        cs.add_click_target(Rect::new(0, 5, 80, 1), 1);
        // Modal-level target registered later (on top)
        cs.add_click_target(Rect::new(5, 5, 10, 1), 2);

        assert_eq!(cs.hit_test(7, 5), Some(2));
        assert_eq!(cs.hit_test(0, 5), Some(1));
        assert_eq!(cs.hit_test(20, 5), Some(1));
    }

    #[test]
    fn hit_test_empty() {
        let cs = ClickState::new();
        assert_eq!(cs.hit_test(0, 0), None);
    }

    /// The modal layering contract: a backdrop covering the whole screen
    /// registered after the page, then the sheet's controls after the
    /// backdrop. Sheet controls win inside the sheet, the backdrop wins
    /// everywhere else, and nothing reaches the page.
    #[test]
    fn hit_test_modal_layering() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 0, 80, 30), 1); // page
        cs.add_click_target(Rect::new(0, 0, 80, 30), 90); // backdrop
        cs.add_click_target(Rect::new(20, 10, 40, 1), 91); // close control

        assert_eq!(cs.hit_test(30, 10), Some(91));
        assert_eq!(cs.hit_test(5, 5), Some(90));
        assert_eq!(cs.hit_test(75, 29), Some(90));
    }

    // ── add_row_target ──────────────────────────────────────────

    #[test]
    fn add_row_target_within_area() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 12, 99);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(15, 12), Some(99));
    }

    #[test]
    fn add_row_target_outside_area_ignored() {
        let mut cs = ClickState::new();
        let area = Rect::new(5, 10, 30, 5);
        cs.add_row_target(area, 9, 99); // before area
        cs.add_row_target(area, 15, 98); // after area

        assert_eq!(cs.targets.len(), 0);
    }

    #[test]
    fn click_state_clear() {
        let mut cs = ClickState::new();
        cs.add_click_target(Rect::new(0, 1, 80, 1), 1);
        cs.add_click_target(Rect::new(0, 2, 80, 1), 2);
        assert_eq!(cs.targets.len(), 2);

        cs.clear_targets();
        assert_eq!(cs.targets.len(), 0);
        assert_eq!(cs.hit_test(0, 1), None);
    }

    // ── layout ──────────────────────────────────────────────────

    #[test]
    fn narrow_layout_threshold() {
        assert!(is_narrow_layout(30));
        assert!(is_narrow_layout(69));
        assert!(!is_narrow_layout(70));
        assert!(!is_narrow_layout(120));
    }

    // ── pixel conversion ────────────────────────────────────────

    #[test]
    fn pixel_to_row_basic() {
        assert_eq!(pixel_y_to_row(0.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(14.0, 450.0, 30), Some(0));
        assert_eq!(pixel_y_to_row(15.0, 450.0, 30), Some(1));
        assert_eq!(pixel_y_to_row(449.0, 450.0, 30), Some(29));
    }

    #[test]
    fn pixel_to_row_out_of_bounds() {
        assert_eq!(pixel_y_to_row(450.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(-1.0, 450.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 0.0, 30), None);
        assert_eq!(pixel_y_to_row(10.0, 450.0, 0), None);
    }

    #[test]
    fn pixel_to_row_fractional_cell_height() {
        // 24 rows, 400px → cell_height ≈ 16.67px
        assert_eq!(pixel_y_to_row(0.0, 400.0, 24), Some(0));
        assert_eq!(pixel_y_to_row(16.0, 400.0, 24), Some(0));
        assert_eq!(pixel_y_to_row(17.0, 400.0, 24), Some(1));
        assert_eq!(pixel_y_to_row(399.0, 400.0, 24), Some(23));
    }

    #[test]
    fn pixel_to_col_basic() {
        assert_eq!(pixel_x_to_col(0.0, 800.0, 80), Some(0));
        assert_eq!(pixel_x_to_col(10.0, 800.0, 80), Some(1));
        assert_eq!(pixel_x_to_col(799.0, 800.0, 80), Some(79));
    }

    #[test]
    fn pixel_to_col_out_of_bounds() {
        assert_eq!(pixel_x_to_col(800.0, 800.0, 80), None);
        assert_eq!(pixel_x_to_col(-1.0, 800.0, 80), None);
    }

    // ── control bar targets ─────────────────────────────────────

    #[test]
    fn bar_targets_prev_counter_next() {
        // "[← Previous]  3 / 15  [Next →]" — outer segments clickable,
        // counter inert. Widths 12 / 8 / 10, separator 2.
        let mut cs = ClickState::new();
        let segments: Vec<(u16, Option<u16>)> =
            vec![(12, Some(1)), (8, None), (10, Some(2))];
        cs.add_bar_targets(&segments, 2, 0, 5, 80, 1);

        assert_eq!(cs.targets.len(), 2);

        // Prev: left edge to midpoint of the first gap (12 + 2/2 = 13)
        assert_eq!(cs.hit_test(0, 5), Some(1));
        assert_eq!(cs.hit_test(12, 5), Some(1));
        // Counter region: inert
        assert_eq!(cs.hit_test(16, 5), None);
        // Next: from the midpoint before it (23) to the right edge
        assert_eq!(cs.hit_test(23, 5), Some(2));
        assert_eq!(cs.hit_test(79, 5), Some(2));
    }

    #[test]
    fn bar_targets_single_segment_covers_bar() {
        let mut cs = ClickState::new();
        let segments: Vec<(u16, Option<u16>)> = vec![(8, Some(42))];
        cs.add_bar_targets(&segments, 2, 5, 10, 40, 1);

        assert_eq!(cs.targets.len(), 1);
        assert_eq!(cs.hit_test(5, 10), Some(42));
        assert_eq!(cs.hit_test(44, 10), Some(42));
    }

    #[test]
    fn bar_targets_empty() {
        let mut cs = ClickState::new();
        cs.add_bar_targets(&[], 2, 0, 0, 80, 1);
        assert_eq!(cs.targets.len(), 0);
    }

    #[test]
    fn bar_targets_all_inert() {
        let mut cs = ClickState::new();
        let segments: Vec<(u16, Option<u16>)> = vec![(8, None), (8, None)];
        cs.add_bar_targets(&segments, 2, 0, 0, 80, 1);
        assert_eq!(cs.targets.len(), 0);
    }

    #[test]
    fn bar_targets_with_offset() {
        // Bar starting at x=5 (e.g. inside a bordered block), height 2
        let mut cs = ClickState::new();
        let segments: Vec<(u16, Option<u16>)> = vec![(6, Some(10)), (6, Some(11))];
        cs.add_bar_targets(&segments, 1, 5, 3, 30, 2);

        assert_eq!(cs.targets.len(), 2);
        assert_eq!(cs.hit_test(5, 3), Some(10));
        assert_eq!(cs.hit_test(5, 4), Some(10)); // height=2
        assert_eq!(cs.hit_test(4, 3), None); // before x offset
    }

    // ── swipe resolution ────────────────────────────────────────

    #[test]
    fn swipe_left_past_threshold() {
        assert_eq!(resolve_swipe(-80.0, 5.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn swipe_right_past_threshold() {
        assert_eq!(resolve_swipe(120.0, -10.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn swipe_below_threshold_is_click() {
        assert_eq!(resolve_swipe(-30.0, 0.0), None);
        assert_eq!(resolve_swipe(59.9, 0.0), None);
    }

    #[test]
    fn swipe_vertical_dominant_is_not_a_swipe() {
        // Scrolling gesture: big vertical component
        assert_eq!(resolve_swipe(70.0, 90.0), None);
        assert_eq!(resolve_swipe(-70.0, -90.0), None);
    }

    #[test]
    fn swipe_exactly_diagonal_is_not_a_swipe() {
        assert_eq!(resolve_swipe(80.0, 80.0), None);
    }

    #[test]
    fn gesture_tracker_click() {
        let mut gt = GestureTracker::new();
        gt.press(100.0, 200.0);
        assert_eq!(
            gt.release(105.0, 203.0),
            Some(Gesture::Click { x: 105.0, y: 203.0 })
        );
    }

    #[test]
    fn gesture_tracker_swipe() {
        let mut gt = GestureTracker::new();
        gt.press(300.0, 200.0);
        assert_eq!(
            gt.release(150.0, 210.0),
            Some(Gesture::Swipe(SwipeDirection::Left))
        );
    }

    #[test]
    fn gesture_tracker_release_without_press() {
        let mut gt = GestureTracker::new();
        assert_eq!(gt.release(10.0, 10.0), None);
    }

    #[test]
    fn gesture_tracker_press_consumed_on_release() {
        let mut gt = GestureTracker::new();
        gt.press(0.0, 0.0);
        let _ = gt.release(0.0, 0.0);
        assert_eq!(gt.release(0.0, 0.0), None);
    }
}
