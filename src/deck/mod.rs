//! Proposal deck viewer: the navigation state machine plus the input
//! dispatcher that drives it and the modal flow.

pub mod actions;
pub mod content;
pub mod logic;
pub mod render;
pub mod session;
pub mod state;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::diag;
use crate::input::{ClickState, InputEvent, KeyInput, SwipeDirection};

use actions::{
    CASE_CARD_BASE, CTA_BUTTON_BASE, MODAL_BACKDROP, MODAL_CLOSE, MODAL_CONFIRM, MODAL_DISMISS,
    MODAL_LINK, MODAL_SHEET, NAV_SLIDE_BASE, NEXT_CONTROL, PREV_CONTROL, SCROLL_DOWN, SCROLL_UP,
};
use logic::NavOutcome;
use state::{DeckState, InitError, ModalState};

/// Rows the viewport moves per scroll tap.
const SCROLL_STEP: i16 = 4;

pub struct DeckApp {
    pub state: DeckState,
}

impl DeckApp {
    pub fn new() -> Result<Self, InitError> {
        Ok(Self {
            state: DeckState::new(content::SLIDES, content::CASE_STUDIES)?,
        })
    }

    /// Handle one normalized input event. Returns true if consumed.
    ///
    /// Precedence is positional, not textual: case-study cards and CTA
    /// buttons own disjoint action-ID ranges, and the card range is
    /// resolved first, so a button inside a card can never fall through
    /// to generic CTA matching. Modal targets are registered on top of
    /// the page, so an open modal absorbs page clicks wholesale.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Key(KeyInput::Left) => {
                let outcome = logic::previous(&mut self.state);
                self.after_nav(outcome);
                true
            }
            InputEvent::Key(KeyInput::Right) => {
                let outcome = logic::next(&mut self.state);
                self.after_nav(outcome);
                true
            }
            InputEvent::Key(KeyInput::Escape) => {
                if self.state.modal == ModalState::Closed {
                    false
                } else {
                    logic::close_modal(&mut self.state);
                    true
                }
            }
            InputEvent::Key(KeyInput::Char(_)) => false,
            InputEvent::Swipe(SwipeDirection::Left) => {
                let outcome = logic::next(&mut self.state);
                self.after_nav(outcome);
                true
            }
            InputEvent::Swipe(SwipeDirection::Right) => {
                let outcome = logic::previous(&mut self.state);
                self.after_nav(outcome);
                true
            }
            InputEvent::Click(id) => self.handle_click(*id),
        }
    }

    fn handle_click(&mut self, id: u16) -> bool {
        match id {
            PREV_CONTROL => {
                let outcome = logic::previous(&mut self.state);
                self.after_nav(outcome);
                true
            }
            NEXT_CONTROL => {
                let outcome = logic::next(&mut self.state);
                self.after_nav(outcome);
                true
            }
            MODAL_BACKDROP | MODAL_CLOSE | MODAL_DISMISS => {
                logic::close_modal(&mut self.state);
                true
            }
            // Sheet body: consumed so it never reaches the backdrop.
            MODAL_SHEET => true,
            MODAL_CONFIRM => {
                if let ModalState::CtaPrompt(action) = self.state.modal {
                    diag::info(&format!("cta confirmed: {}", action.name()));
                    logic::confirm_cta(&mut self.state, action);
                }
                true
            }
            MODAL_LINK => {
                if let ModalState::CaseStudy(key) = self.state.modal {
                    if let Some(cs) = self.state.case_study(key) {
                        diag::info(&format!("case study link: {}", cs.url));
                        #[cfg(target_arch = "wasm32")]
                        session::open_external(cs.url);
                    }
                }
                true
            }
            SCROLL_UP => {
                logic::scroll_viewport(&mut self.state, -SCROLL_STEP);
                true
            }
            SCROLL_DOWN => {
                logic::scroll_viewport(&mut self.state, SCROLL_STEP);
                true
            }
            // Sidebar nav links: random access by index
            id if (NAV_SLIDE_BASE..CASE_CARD_BASE).contains(&id) => {
                let outcome = logic::go_to(&mut self.state, (id - NAV_SLIDE_BASE) as usize);
                self.after_nav(outcome);
                true
            }
            // Case-study cards, before any CTA matching
            id if (CASE_CARD_BASE..CTA_BUTTON_BASE).contains(&id) => {
                let idx = (id - CASE_CARD_BASE) as usize;
                match self.state.case_studies.get(idx) {
                    Some(cs) => {
                        logic::open_case_study(&mut self.state, cs.key);
                    }
                    None => diag::warn(&format!("click on unregistered case card {idx}")),
                }
                true
            }
            // CTA buttons: ordinal on the active slide → label → phrase match
            id if (CTA_BUTTON_BASE..SCROLL_UP).contains(&id) => {
                let ordinal = (id - CTA_BUTTON_BASE) as usize;
                match self.state.active_cta_buttons().get(ordinal) {
                    Some((label, Some(action))) => {
                        diag::info(&format!("cta clicked: {label}"));
                        logic::open_cta_prompt(&mut self.state, *action);
                    }
                    Some((label, None)) => {
                        diag::warn(&format!("cta label not recognized: {label}"));
                    }
                    None => diag::warn(&format!("click on unregistered cta button {ordinal}")),
                }
                true
            }
            _ => false,
        }
    }

    /// Emit the per-navigation effects: the slide-viewed event on a move,
    /// the terminal action when `next()` ran off the end.
    fn after_nav(&mut self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Moved => {
                let slide = self.state.active_slide();
                diag::info(&format!(
                    "slide {} viewed: {}",
                    self.state.current + 1,
                    slide.title
                ));
            }
            NavOutcome::AtEnd => {
                let action = self.state.terminal_action;
                diag::info(&format!("deck finished: {}", action.name()));
                logic::open_cta_prompt(&mut self.state, action);
            }
            NavOutcome::Rejected => {}
        }
    }

    /// Advance timers by `delta_ticks` discrete ticks.
    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }

    /// Render the whole viewer into the given area.
    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(&self.state, f, area, click_state);
    }
}
