//! Deck rendering: every UI surface derived from [`DeckState`] each frame.
//!
//! Rendering is a pure function of state: the same state always paints the
//! same screen. It doubles as the click-target registry. Each interactive
//! element registers its region as it is drawn, page first, modal overlay
//! last, so the overlay's targets sit on top.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, ControlBar};

use super::actions::{
    CASE_CARD_BASE, CTA_BUTTON_BASE, MODAL_BACKDROP, MODAL_CLOSE, MODAL_CONFIRM, MODAL_DISMISS,
    MODAL_LINK, MODAL_SHEET, NAV_SLIDE_BASE, NEXT_CONTROL, PREV_CONTROL, SCROLL_DOWN, SCROLL_UP,
};
use super::content::CONTACT_LINES;
use super::logic::hint_visible;
use super::state::{DeckState, ModalState, SlideBlock};

const SIDEBAR_WIDTH: u16 = 26;

const ACCENT: Color = Color::Red;

pub fn render(state: &DeckState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // Too small to hold anything meaningful; skip rather than fail.
    if area.width < 20 || area.height < 8 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + progress
            Constraint::Min(5),    // content
            Constraint::Length(1), // keyboard hint (reserved, often blank)
            Constraint::Length(3), // footer controls
        ])
        .split(area);

    render_header(state, f, chunks[0]);

    if is_narrow_layout(area.width) {
        // Narrow: no sidebar; the nav surface is simply absent.
        render_viewport(state, f, chunks[1], click_state);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(chunks[1]);
        render_sidebar(state, f, columns[0], click_state);
        render_viewport(state, f, columns[1], click_state);
    }

    render_hint(state, f, chunks[2]);
    render_footer(state, f, chunks[3], click_state);

    // Overlay last: its click targets land on top of everything above.
    if state.modal != ModalState::Closed {
        render_modal(state, f, area, click_state);
    }
}

/// Title line plus a progress rail proportional to `(index+1)/total`.
fn render_header(state: &DeckState, f: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " ASPIRI ",
            Style::default()
                .fg(Color::White)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Proposal Dashboard", Style::default().fg(Color::Gray)),
    ]);
    f.render_widget(Paragraph::new(title), Rect::new(area.x, area.y, area.width, 1));

    if area.height < 2 {
        return;
    }
    let width = area.width as usize;
    let filled = width * (state.current + 1) / state.total().max(1);
    let rail: String = "━".repeat(filled) + &"─".repeat(width.saturating_sub(filled));
    let progress = Line::from(Span::styled(rail, Style::default().fg(ACCENT)));
    f.render_widget(
        Paragraph::new(progress),
        Rect::new(area.x, area.y + 1, area.width, 1),
    );
}

/// Sidebar navigation: one entry per slide, active entry highlighted,
/// every entry clickable. Scrolls to keep the active entry visible.
fn render_sidebar(
    state: &DeckState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    for (i, slide) in state.slides.iter().enumerate() {
        let active = i == state.current;
        let marker = if active { "▸" } else { " " };
        let style = if active {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        cl.push_clickable(
            Line::from(Span::styled(
                format!("{marker}{:>2}. {}", i + 1, slide.nav_label),
                style,
            )),
            NAV_SLIDE_BASE + i as u16,
        );
    }

    // Keep the active entry inside the visible window
    let visible = area.height.saturating_sub(2);
    let scroll = if visible == 0 {
        0
    } else {
        (state.current as u16).saturating_sub(visible - 1)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Contents ");
    let widget = Paragraph::new(cl.lines().to_vec())
        .block(block)
        .scroll((scroll, 0));
    f.render_widget(widget, area);

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, scroll, 0);
}

/// The main content viewport: the active slide's blocks, wrapped, with
/// interactive blocks registered as click targets.
fn render_viewport(
    state: &DeckState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let slide = state.active_slide();
    let inner_width = area.width.saturating_sub(2);
    if inner_width == 0 {
        return;
    }

    let mut cl = ClickableList::new();
    let mut cta_ordinal: u16 = 0;
    for block in slide.blocks {
        match block {
            SlideBlock::Heading(text) => {
                cl.push(Line::from(Span::styled(
                    *text,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
                cl.push(Line::from(""));
            }
            SlideBlock::Text(text) => {
                cl.push(Line::from(Span::styled(*text, Style::default().fg(Color::Gray))));
            }
            SlideBlock::Bullet(text) => {
                cl.push(Line::from(vec![
                    Span::styled("  • ", Style::default().fg(ACCENT)),
                    Span::styled(*text, Style::default().fg(Color::Gray)),
                ]));
            }
            SlideBlock::CaseStudyCard { client } => {
                // Validated at init; a dangling key would simply not render.
                if let Some(idx) = state.case_studies.iter().position(|cs| cs.key == *client) {
                    let cs_data = &state.case_studies[idx];
                    cl.push_clickable(
                        Line::from(vec![
                            Span::styled(
                                format!(" ▸ {} ", cs_data.name),
                                Style::default()
                                    .fg(Color::White)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            Span::styled(
                                format!("— {}", cs_data.tagline),
                                Style::default().fg(Color::DarkGray),
                            ),
                        ]),
                        CASE_CARD_BASE + idx as u16,
                    );
                }
            }
            SlideBlock::CtaButton { label } => {
                cl.push(Line::from(""));
                cl.push_clickable(
                    Line::from(Span::styled(
                        format!("  ▶ {label}  "),
                        Style::default()
                            .fg(Color::White)
                            .bg(ACCENT)
                            .add_modifier(Modifier::BOLD),
                    )),
                    CTA_BUTTON_BASE + cta_ordinal,
                );
                cta_ordinal += 1;
            }
            SlideBlock::Spacer => {
                cl.push(Line::from(""));
            }
        }
    }

    // Clamp scroll to the content that actually overflows
    let content_rows = visual_height(cl.lines(), inner_width);
    let inner_height = area.height.saturating_sub(2);
    let max_scroll = content_rows.saturating_sub(inner_height);
    let scroll = state.viewport_scroll.min(max_scroll);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(format!(" {}. {} ", state.current + 1, slide.title));
    if scroll < max_scroll {
        block = block.title_bottom(Line::from(" ▼ more ").right_aligned());
    }

    let widget = Paragraph::new(cl.lines().to_vec())
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(widget, area);

    let mut cs = click_state.borrow_mut();
    cl.register_targets(area, &mut cs, 1, 1, scroll, inner_width);

    // Border rows page the overflow: top scrolls up (when scrolled), bottom
    // scrolls down (when more remains).
    if scroll > 0 {
        cs.add_row_target(area, area.y, SCROLL_UP);
    }
    if scroll < max_scroll {
        cs.add_row_target(area, area.y + area.height - 1, SCROLL_DOWN);
    }
}

/// Total visual rows the lines occupy at `width`, with wrapping.
fn visual_height(lines: &[Line], width: u16) -> u16 {
    lines
        .iter()
        .map(|line| {
            (Paragraph::new(line.clone())
                .wrap(Wrap { trim: false })
                .line_count(width) as u16)
                .max(1)
        })
        .sum()
}

/// The startup keyboard hint, visible only inside its tick window.
fn render_hint(state: &DeckState, f: &mut Frame, area: Rect) {
    if !hint_visible(state) {
        return;
    }
    let hint = Paragraph::new(Line::from(Span::styled(
        "← → to navigate · swipe on touch · Esc closes dialogs",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(hint, area);
}

/// Footer controls: previous / counter / next. The next control switches
/// to its terminal variant on the last slide.
fn render_footer(
    state: &DeckState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let prev_style = if state.is_first() {
        // Disabled look; the transition no-ops anyway
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    let (next_label, next_style) = if state.is_last() {
        (
            "Finish ✓",
            Style::default()
                .fg(Color::White)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("Next →", Style::default().fg(Color::White).bg(ACCENT))
    };

    let mut cs = click_state.borrow_mut();
    ControlBar::new("  ")
        .button("← Previous", prev_style, PREV_CONTROL)
        .readout(
            format!("{} / {}", state.current + 1, state.total()),
            Style::default().fg(Color::Gray),
        )
        .button(next_label, next_style, NEXT_CONTROL)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(f, area, &mut cs);
}

/// The modal overlay: a centered sheet over a full-screen backdrop.
///
/// Target order realizes dismissal: backdrop first (closes), an inert
/// shield over the sheet (so body text doesn't close), controls last.
fn render_modal(
    state: &DeckState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    let title = match state.modal {
        ModalState::CaseStudy(key) => {
            let Some(cs_data) = state.case_study(key) else {
                return;
            };
            cl.push(Line::from(Span::styled(
                cs_data.tagline,
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )));
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                cs_data.description,
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                "Highlights",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )));
            for item in cs_data.achievements {
                cl.push(Line::from(vec![
                    Span::styled("  ✓ ", Style::default().fg(Color::Green)),
                    Span::styled(*item, Style::default().fg(Color::Gray)),
                ]));
            }
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    format!("  ↗ Visit {}  ", cs_data.url),
                    Style::default().fg(Color::Cyan),
                )),
                MODAL_LINK,
            );
            cl.push_clickable(
                Line::from(Span::styled(
                    "  ✕ Close  ",
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                )),
                MODAL_CLOSE,
            );
            format!(" {} ", cs_data.name)
        }
        ModalState::CtaPrompt(action) => {
            cl.push(Line::from(Span::styled(
                action.prompt_message(),
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(""));
            for contact in CONTACT_LINES {
                cl.push(Line::from(Span::styled(
                    format!("  {contact}"),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    format!("  ▶ {}  ", action.confirm_label()),
                    Style::default()
                        .fg(Color::White)
                        .bg(ACCENT)
                        .add_modifier(Modifier::BOLD),
                )),
                MODAL_CONFIRM,
            );
            cl.push_clickable(
                Line::from(Span::styled(
                    "  Not yet — go back  ",
                    Style::default().fg(Color::Gray),
                )),
                MODAL_DISMISS,
            );
            " Confirm ".to_string()
        }
        ModalState::CtaConfirmed(action) => {
            cl.push(Line::from(Span::styled(
                action.success_message(),
                Style::default().fg(Color::Gray),
            )));
            cl.push(Line::from(""));
            cl.push(Line::from(Span::styled(
                "This closes itself in a few seconds.",
                Style::default().fg(Color::DarkGray),
            )));
            cl.push(Line::from(""));
            cl.push_clickable(
                Line::from(Span::styled(
                    "  ✕ Close  ",
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                )),
                MODAL_CLOSE,
            );
            " Thank You ".to_string()
        }
        ModalState::Closed => return,
    };

    let sheet_w = area.width.saturating_sub(6).min(64).max(20);
    let inner_w = sheet_w - 2;
    let sheet_h = (visual_height(cl.lines(), inner_w) + 2).min(area.height.saturating_sub(2));
    let sheet = Rect::new(
        area.x + (area.width - sheet_w) / 2,
        area.y + (area.height - sheet_h) / 2,
        sheet_w,
        sheet_h,
    );

    let mut cs = click_state.borrow_mut();
    // Backdrop: anywhere outside the sheet closes
    cs.add_click_target(area, MODAL_BACKDROP);
    // Shield: sheet body is inert, controls below re-cover their rows
    cs.add_click_target(sheet, MODAL_SHEET);

    f.render_widget(Clear, sheet);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT))
        .title(title);
    let widget = Paragraph::new(cl.lines().to_vec())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, sheet);

    cl.register_targets(sheet, &mut cs, 1, 1, 0, inner_w);
}
