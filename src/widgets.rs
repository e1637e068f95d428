//! Reusable clickable UI components.
//!
//! Each component co-locates rendering and click-target registration so a
//! control can never be drawn without also being tappable.
//!
//! # Components
//!
//! - [`ControlBar`] — horizontal strip of button/readout segments
//!   (the footer's previous / counter / next controls).
//! - [`ClickableList`] — vertical list of lines with per-row click targets
//!   (sidebar navigation, slide-body buttons, modal controls).

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::style::{Color, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::ClickState;

// ── ControlBar ─────────────────────────────────────────────────

/// A horizontal bar of labeled segments, some clickable, some inert.
///
/// Renders the segments in one row separated by a configurable separator
/// string, and registers click targets matching the rendered positions
/// (computed from display widths, so dynamic labels stay accurate).
/// Inert segments (e.g. the "3 / 15" counter between the navigation
/// buttons) render like any other but register no target.
///
/// # Example
/// ```ignore
/// ControlBar::new("  ")
///     .button("[← Previous]", prev_style, PREV_CONTROL)
///     .readout("3 / 15", counter_style)
///     .button("[Next →]", next_style, NEXT_CONTROL)
///     .render(f, area, &mut cs);
/// ```
pub struct ControlBar<'a> {
    segments: Vec<(String, Style, Option<u16>)>,
    separator: &'a str,
    block: Option<Block<'a>>,
}

impl<'a> ControlBar<'a> {
    pub fn new(separator: &'a str) -> Self {
        Self {
            segments: Vec::new(),
            separator,
            block: None,
        }
    }

    /// Add a clickable segment with its label, style, and action ID.
    pub fn button(mut self, label: impl Into<String>, style: Style, action_id: u16) -> Self {
        self.segments.push((label.into(), style, Some(action_id)));
        self
    }

    /// Add an inert display-only segment.
    pub fn readout(mut self, label: impl Into<String>, style: Style) -> Self {
        self.segments.push((label.into(), style, None));
        self
    }

    /// Wrap the bar in a [`Block`].
    ///
    /// With a bordered block, click-target positions are adjusted via
    /// `Block::inner()`.
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Render the bar and register click targets for its buttons.
    pub fn render(self, f: &mut Frame, area: Rect, cs: &mut ClickState) {
        let mut spans: Vec<Span> = Vec::new();
        let sep_width = Line::from(self.separator).width() as u16;
        let mut seg_widths: Vec<(u16, Option<u16>)> = Vec::new();

        for (i, (label, style, action)) in self.segments.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    self.separator,
                    Style::default().fg(Color::DarkGray),
                ));
            }
            let padded = format!(" {} ", label);
            seg_widths.push((Line::from(padded.as_str()).width() as u16, *action));
            spans.push(Span::styled(padded, *style));
        }

        // Compute inner content area (accounting for borders) before consuming block
        let inner = match &self.block {
            Some(block) => block.inner(area),
            None => area,
        };

        let line = Line::from(spans);
        let paragraph = match self.block {
            Some(block) => Paragraph::new(line).block(block),
            None => Paragraph::new(line),
        };
        f.render_widget(paragraph, area);

        // Inner x/width for horizontal accuracy, outer y/height for better
        // tap tolerance on the whole bar
        cs.add_bar_targets(
            &seg_widths,
            sep_width,
            inner.x,
            area.y,
            inner.width,
            area.height.max(1),
        );
    }
}

// ── ClickableList ──────────────────────────────────────────────

/// A builder that pairs rendered [`Line`]s with click actions.
///
/// Instead of manually tracking row offsets for click targets, annotate
/// lines as clickable while building, then call
/// [`register_targets`](ClickableList::register_targets) once after
/// rendering; each action is bound to whatever row its line ends up on, so
/// inserting or removing lines above it moves the target automatically.
///
/// # Example
/// ```ignore
/// let mut cl = ClickableList::new();
/// cl.push(Line::from("Section heading"));
/// cl.push_clickable(Line::from("▸ View case study"), CASE_CARD_BASE);
/// let widget = Paragraph::new(cl.lines().to_vec()).block(block);
/// f.render_widget(widget, area);
/// cl.register_targets(area, &mut cs, 1, 1, 0, 0);
/// ```
pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs — line_index is the index into `lines`.
    actions: Vec<(u16, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: Line<'a>) {
        self.lines.push(line);
    }

    /// Add a clickable line with a semantic action ID.
    pub fn push_clickable(&mut self, line: Line<'a>, action_id: u16) {
        let idx = self.lines.len() as u16;
        self.actions.push((idx, action_id));
        self.lines.push(line);
    }

    /// Total number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Borrow the lines (e.g. to build the widget before registering targets).
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Consume the builder, returning the lines for rendering.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area (including borders).
    /// * `cs` — the shared click state.
    /// * `top_offset` — rows before content (1 for a top border).
    /// * `bottom_offset` — rows after content (1 for a bottom border).
    /// * `scroll` — vertical scroll offset in visual rows (0 if not scrollable).
    /// * `inner_width` — content width for wrap calculation. Pass `0` when
    ///   the widget does **not** use `Wrap`; each logical line then counts
    ///   as exactly one visual row.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        bottom_offset: u16,
        scroll: u16,
        inner_width: u16,
    ) {
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(bottom_offset);

        if inner_width == 0 {
            // Unwrapped path: 1 logical line = 1 visual row.
            for &(line_idx, action_id) in &self.actions {
                if line_idx < scroll {
                    continue;
                }
                let row = content_y + (line_idx - scroll);
                if row >= content_end {
                    continue;
                }
                cs.add_row_target(area, row, action_id);
            }
            return;
        }

        // Wrap-aware path: compute the visual row span of each logical line
        // with the renderer's own wrapping (`Paragraph::line_count`, behind
        // ratatui's `unstable-rendered-line-info` feature), so targets match
        // what actually lands on screen.
        let mut visual_starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut visual_heights: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            visual_starts.push(cumulative);
            let h = (Paragraph::new(line.clone())
                .wrap(Wrap { trim: false })
                .line_count(inner_width) as u16)
                .max(1);
            visual_heights.push(h);
            cumulative += h;
        }

        for &(line_idx, action_id) in &self.actions {
            let li = line_idx as usize;
            if li >= self.lines.len() {
                continue;
            }
            let vstart = visual_starts[li];
            let vheight = visual_heights[li];

            // A wrapped clickable line is clickable on every visual row it spans.
            for r in 0..vheight {
                let vr = vstart + r;
                if vr < scroll {
                    continue;
                }
                let screen_row = content_y + (vr - scroll);
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}
