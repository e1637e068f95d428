//! Deck transitions — pure functions over [`DeckState`], fully testable.
//!
//! Navigation (`go_to` / `next` / `previous`) and the modal flow
//! (`open_case_study` / `open_cta_prompt` / `confirm_cta` / `close_modal`)
//! are the only writers of their respective state. Rendering derives
//! everything else.

use super::state::{CtaAction, DeckState, ModalState};
use crate::diag;

/// Ticks before a confirmed CTA modal dismisses itself (8s at 10 ticks/sec).
pub const AUTO_DISMISS_TICKS: u32 = 80;

/// Keyboard-hint window: appears 2s after load, gone 5s later.
pub const HINT_SHOW_AT: u64 = 20;
pub const HINT_HIDE_AT: u64 = 70;

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavOutcome {
    /// The index changed (or was re-applied); emit the slide-viewed event.
    Moved,
    /// Out of range or already at the edge; state unchanged.
    Rejected,
    /// `next()` on the last slide; the caller triggers the terminal action.
    AtEnd,
}

/// Jump to an arbitrary slide. Out-of-range requests are logged and
/// rejected without mutating anything.
pub fn go_to(state: &mut DeckState, index: usize) -> NavOutcome {
    if index >= state.total() {
        diag::warn(&format!(
            "ignoring navigation to out-of-range slide {} (deck has {})",
            index,
            state.total()
        ));
        return NavOutcome::Rejected;
    }
    state.current = index;
    state.viewport_scroll = 0;
    NavOutcome::Moved
}

/// Advance one slide; on the last slide, report [`NavOutcome::AtEnd`]
/// instead so the caller can fire the terminal action.
pub fn next(state: &mut DeckState) -> NavOutcome {
    if state.is_last() {
        NavOutcome::AtEnd
    } else {
        go_to(state, state.current + 1)
    }
}

/// Go back one slide; no-op on the first.
pub fn previous(state: &mut DeckState) -> NavOutcome {
    if state.is_first() {
        NavOutcome::Rejected
    } else {
        go_to(state, state.current - 1)
    }
}

/// Scroll the content viewport. Render clamps to the actual content
/// height, so only the lower bound matters here.
pub fn scroll_viewport(state: &mut DeckState, delta: i16) {
    state.viewport_scroll = if delta < 0 {
        state.viewport_scroll.saturating_sub(delta.unsigned_abs())
    } else {
        state.viewport_scroll.saturating_add(delta as u16)
    };
}

/// Open the case-study modal for `key`. Unknown keys are logged and leave
/// the modal exactly as it was.
pub fn open_case_study(state: &mut DeckState, key: &str) -> bool {
    let Some(registered) = state.case_study(key).map(|cs| cs.key) else {
        diag::warn(&format!("no case study registered for '{key}'"));
        return false;
    };
    state.modal = ModalState::CaseStudy(registered);
    state.dismiss_ticks = 0;
    true
}

/// Show the confirmation prompt for a CTA. Replaces whatever the modal
/// was showing.
pub fn open_cta_prompt(state: &mut DeckState, action: CtaAction) {
    state.modal = ModalState::CtaPrompt(action);
    state.dismiss_ticks = 0;
}

/// Confirm a CTA: swap the prompt for the acknowledgment and arm the
/// auto-dismiss countdown.
pub fn confirm_cta(state: &mut DeckState, action: CtaAction) {
    state.modal = ModalState::CtaConfirmed(action);
    state.dismiss_ticks = AUTO_DISMISS_TICKS;
}

/// Hide the modal. Always succeeds; idempotent when already closed.
pub fn close_modal(state: &mut DeckState) {
    state.modal = ModalState::Closed;
    state.dismiss_ticks = 0;
}

/// Advance deck timers by `delta_ticks` discrete ticks.
pub fn tick(state: &mut DeckState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    state.total_ticks += delta_ticks as u64;

    if state.dismiss_ticks > 0 {
        state.dismiss_ticks = state.dismiss_ticks.saturating_sub(delta_ticks);
        if state.dismiss_ticks == 0 && matches!(state.modal, ModalState::CtaConfirmed(_)) {
            state.modal = ModalState::Closed;
        }
    }
}

/// Whether the "use arrow keys" hint is inside its display window.
pub fn hint_visible(state: &DeckState) -> bool {
    (HINT_SHOW_AT..HINT_HIDE_AT).contains(&state.total_ticks)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::deck::content::{CASE_STUDIES, SLIDES};
    use proptest::prelude::*;

    fn fresh() -> DeckState {
        DeckState::new(SLIDES, CASE_STUDIES).unwrap()
    }

    /// One user-visible operation, for random-walk invariant checks.
    #[derive(Debug, Clone)]
    enum Op {
        Next,
        Previous,
        GoTo(usize),
        OpenCase(usize),
        OpenPrompt,
        Confirm,
        Close,
        Tick(u32),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Next),
            Just(Op::Previous),
            (0usize..40).prop_map(Op::GoTo),
            (0usize..6).prop_map(Op::OpenCase),
            Just(Op::OpenPrompt),
            Just(Op::Confirm),
            Just(Op::Close),
            (0u32..200).prop_map(Op::Tick),
        ]
    }

    fn apply(state: &mut DeckState, op: &Op) {
        match op {
            Op::Next => {
                next(state);
            }
            Op::Previous => {
                previous(state);
            }
            Op::GoTo(i) => {
                go_to(state, *i);
            }
            Op::OpenCase(i) => {
                // Index past the table exercises the unknown-key path
                let key = CASE_STUDIES.get(*i).map(|cs| cs.key).unwrap_or("nope");
                open_case_study(state, key);
            }
            Op::OpenPrompt => open_cta_prompt(state, CtaAction::ScheduleCall),
            Op::Confirm => confirm_cta(state, CtaAction::ScheduleCall),
            Op::Close => close_modal(state),
            Op::Tick(n) => tick(state, *n),
        }
    }

    proptest! {
        #[test]
        fn prop_go_to_in_range_always_lands(i in 0usize..15) {
            let mut state = fresh();
            prop_assert_eq!(go_to(&mut state, i), NavOutcome::Moved);
            prop_assert_eq!(state.current, i);
        }

        #[test]
        fn prop_go_to_out_of_range_never_mutates(
            start in 0usize..15,
            target in 15usize..100_000,
        ) {
            let mut state = fresh();
            go_to(&mut state, start);
            prop_assert_eq!(go_to(&mut state, target), NavOutcome::Rejected);
            prop_assert_eq!(state.current, start);
        }

        /// The index invariant survives any input sequence.
        #[test]
        fn prop_random_walk_index_stays_in_bounds(ops in prop::collection::vec(arb_op(), 0..60)) {
            let mut state = fresh();
            for op in &ops {
                apply(&mut state, op);
                prop_assert!(state.current < state.total());
            }
        }

        /// Close always wins, whatever came before.
        #[test]
        fn prop_close_after_anything_is_closed(ops in prop::collection::vec(arb_op(), 0..60)) {
            let mut state = fresh();
            for op in &ops {
                apply(&mut state, op);
            }
            close_modal(&mut state);
            prop_assert_eq!(state.modal, ModalState::Closed);
        }

        /// Ticking a closed modal never reopens it.
        #[test]
        fn prop_tick_never_reopens(ticks in prop::collection::vec(0u32..300, 0..20)) {
            let mut state = fresh();
            confirm_cta(&mut state, CtaAction::DownloadProposal);
            close_modal(&mut state);
            for t in ticks {
                tick(&mut state, t);
                prop_assert_eq!(state.modal, ModalState::Closed);
            }
        }
    }
}
