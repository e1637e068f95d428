//! Deck data model: slides, case studies, CTA actions, and the one
//! authoritative state struct.

use std::error::Error;
use std::fmt;

/// One unit of slide content. Interactive blocks register click targets
/// when rendered; everything else is static text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideBlock {
    Heading(&'static str),
    Text(&'static str),
    Bullet(&'static str),
    /// Card opening the case-study modal; `client` keys into the table.
    CaseStudyCard { client: &'static str },
    /// Button whose label is matched against the known CTA phrase set.
    CtaButton { label: &'static str },
    Spacer,
}

/// One slide, addressed by its stable position in the registry.
pub struct Slide {
    pub id: &'static str,
    pub title: &'static str,
    /// Sidebar label. Every slide has exactly one nav entry.
    pub nav_label: &'static str,
    pub blocks: &'static [SlideBlock],
}

/// Static marketing reference record for a past client project.
pub struct CaseStudy {
    pub key: &'static str,
    pub name: &'static str,
    pub url: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

/// The fixed set of recognized call-to-action intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaAction {
    ScheduleCall,
    DownloadProposal,
    StartJourney,
    Contact,
}

impl CtaAction {
    /// Match a button label against the known phrase set.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim() {
            "Schedule Kickoff Call" | "Schedule a Call" | "Book a Call" => {
                Some(CtaAction::ScheduleCall)
            }
            "Download Proposal PDF" | "Download Proposal" => Some(CtaAction::DownloadProposal),
            "Confirm & Start" | "Start Your Journey" => Some(CtaAction::StartJourney),
            "Get in Touch" | "Contact Us" => Some(CtaAction::Contact),
            _ => None,
        }
    }

    /// Short name for analytics events.
    pub fn name(&self) -> &'static str {
        match self {
            CtaAction::ScheduleCall => "schedule-call",
            CtaAction::DownloadProposal => "download-proposal",
            CtaAction::StartJourney => "start-journey",
            CtaAction::Contact => "contact",
        }
    }

    /// Body text of the confirmation prompt.
    pub fn prompt_message(&self) -> &'static str {
        match self {
            CtaAction::ScheduleCall => {
                "We'll set up a 30-minute kickoff call with the project team."
            }
            CtaAction::DownloadProposal => {
                "Get a PDF copy of this proposal for your records."
            }
            CtaAction::StartJourney => {
                "Ready to kick off the project? Confirm and we'll take it from here."
            }
            CtaAction::Contact => {
                "Questions first? Drop us a line and we'll get right back to you."
            }
        }
    }

    /// Label of the prompt's confirm control.
    pub fn confirm_label(&self) -> &'static str {
        match self {
            CtaAction::ScheduleCall => "Book the call",
            CtaAction::DownloadProposal => "Download PDF",
            CtaAction::StartJourney => "Confirm & Start",
            CtaAction::Contact => "Send a note",
        }
    }

    /// Body text of the post-confirmation acknowledgment.
    pub fn success_message(&self) -> &'static str {
        match self {
            CtaAction::ScheduleCall => {
                "Redirecting to calendar booking — a calendar invite is on its way to your inbox."
            }
            CtaAction::DownloadProposal => {
                "Your proposal PDF is being prepared and will download shortly."
            }
            CtaAction::StartJourney => {
                "Thank you for your interest! We will contact you shortly to begin the project setup."
            }
            CtaAction::Contact => {
                "Thanks for reaching out — we'll get back to you within one business day."
            }
        }
    }
}

/// The modal overlay's state. Exactly one value at any time; only the
/// transition functions in `logic` write it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ModalState {
    Closed,
    /// Showing a case study, by its (validated) table key.
    CaseStudy(&'static str),
    /// Showing a CTA confirmation prompt.
    CtaPrompt(CtaAction),
    /// Showing the post-confirmation acknowledgment.
    CtaConfirmed(CtaAction),
}

/// Initialization failure: the deck cannot establish its index invariant.
#[derive(Debug, PartialEq)]
pub enum InitError {
    /// The slide registry is empty; there is no valid index range.
    EmptyDeck,
    /// A slide block references a client key missing from the case-study table.
    UnknownCaseStudy {
        slide: &'static str,
        client: &'static str,
    },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::EmptyDeck => write!(f, "slide registry is empty"),
            InitError::UnknownCaseStudy { slide, client } => {
                write!(f, "slide '{slide}' references unknown case study '{client}'")
            }
        }
    }
}

impl Error for InitError {}

/// Full state of the deck viewer.
///
/// `current` is the single source of truth for navigation; every UI
/// surface is derived from it at render time. `modal` is layered on top
/// and never touches `current`.
pub struct DeckState {
    pub slides: &'static [Slide],
    pub case_studies: &'static [CaseStudy],
    /// Current slide index, always in `[0, slides.len())`.
    pub current: usize,
    pub modal: ModalState,
    /// Action taken when `next()` is requested on the last slide.
    pub terminal_action: CtaAction,
    /// Content viewport scroll in visual rows; reset on navigation.
    pub viewport_scroll: u16,
    /// Ticks remaining before a confirmed CTA modal closes itself
    /// (0 = no auto-dismiss armed).
    pub dismiss_ticks: u32,
    /// Ticks since startup; drives the keyboard-hint window.
    pub total_ticks: u64,
}

impl DeckState {
    /// Build the initial state over a slide registry and case-study table.
    ///
    /// An empty registry is fatal: without slides there is no valid index
    /// range. A card referencing an unknown client key is a content defect
    /// caught here rather than at click time.
    pub fn new(
        slides: &'static [Slide],
        case_studies: &'static [CaseStudy],
    ) -> Result<Self, InitError> {
        if slides.is_empty() {
            return Err(InitError::EmptyDeck);
        }
        for slide in slides {
            for block in slide.blocks {
                if let SlideBlock::CaseStudyCard { client } = *block {
                    if !case_studies.iter().any(|cs| cs.key == client) {
                        return Err(InitError::UnknownCaseStudy {
                            slide: slide.id,
                            client,
                        });
                    }
                }
            }
        }
        Ok(Self {
            slides,
            case_studies,
            current: 0,
            modal: ModalState::Closed,
            terminal_action: CtaAction::StartJourney,
            viewport_scroll: 0,
            dismiss_ticks: 0,
            total_ticks: 0,
        })
    }

    pub fn total(&self) -> usize {
        self.slides.len()
    }

    pub fn active_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.slides.len()
    }

    /// Look up a case study by client key.
    pub fn case_study(&self, key: &str) -> Option<&CaseStudy> {
        self.case_studies.iter().find(|cs| cs.key == key)
    }

    /// All CTA buttons on the active slide, in block order, with their
    /// matched action kinds (`None` for labels outside the phrase set).
    pub fn active_cta_buttons(&self) -> Vec<(&'static str, Option<CtaAction>)> {
        self.active_slide()
            .blocks
            .iter()
            .filter_map(|b| match b {
                SlideBlock::CtaButton { label } => Some((*label, CtaAction::from_label(label))),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_CASE_STUDIES: &[CaseStudy] = &[CaseStudy {
        key: "acme",
        name: "Acme",
        url: "https://acme.example/",
        tagline: "Storefront relaunch",
        description: "Full storefront rebuild.",
        achievements: &["2x conversion"],
    }];

    static GOOD_SLIDES: &[Slide] = &[
        Slide {
            id: "welcome",
            title: "Welcome",
            nav_label: "Welcome",
            blocks: &[SlideBlock::Heading("Hello")],
        },
        Slide {
            id: "work",
            title: "Our Work",
            nav_label: "Our Work",
            blocks: &[SlideBlock::CaseStudyCard { client: "acme" }],
        },
    ];

    static BROKEN_SLIDES: &[Slide] = &[Slide {
        id: "work",
        title: "Our Work",
        nav_label: "Our Work",
        blocks: &[SlideBlock::CaseStudyCard { client: "nosuch" }],
    }];

    #[test]
    fn new_starts_at_slide_zero_modal_closed() {
        let state = DeckState::new(GOOD_SLIDES, TEST_CASE_STUDIES).unwrap();
        assert_eq!(state.current, 0);
        assert_eq!(state.modal, ModalState::Closed);
        assert_eq!(state.total(), 2);
    }

    #[test]
    fn empty_registry_is_fatal() {
        assert_eq!(
            DeckState::new(&[], TEST_CASE_STUDIES).unwrap_err(),
            InitError::EmptyDeck
        );
    }

    #[test]
    fn dangling_case_study_reference_is_fatal() {
        let err = DeckState::new(BROKEN_SLIDES, TEST_CASE_STUDIES).unwrap_err();
        assert_eq!(
            err,
            InitError::UnknownCaseStudy {
                slide: "work",
                client: "nosuch"
            }
        );
    }

    #[test]
    fn first_last_helpers() {
        let mut state = DeckState::new(GOOD_SLIDES, TEST_CASE_STUDIES).unwrap();
        assert!(state.is_first());
        assert!(!state.is_last());
        state.current = 1;
        assert!(!state.is_first());
        assert!(state.is_last());
    }

    #[test]
    fn case_study_lookup() {
        let state = DeckState::new(GOOD_SLIDES, TEST_CASE_STUDIES).unwrap();
        assert!(state.case_study("acme").is_some());
        assert!(state.case_study("hidesign").is_none());
    }

    // ── CTA label matching ──────────────────────────────────────

    #[test]
    fn cta_labels_match_known_phrases() {
        assert_eq!(
            CtaAction::from_label("Schedule Kickoff Call"),
            Some(CtaAction::ScheduleCall)
        );
        assert_eq!(
            CtaAction::from_label("Download Proposal PDF"),
            Some(CtaAction::DownloadProposal)
        );
        assert_eq!(
            CtaAction::from_label("Confirm & Start"),
            Some(CtaAction::StartJourney)
        );
        assert_eq!(CtaAction::from_label("Get in Touch"), Some(CtaAction::Contact));
    }

    #[test]
    fn cta_label_whitespace_trimmed() {
        assert_eq!(
            CtaAction::from_label("  Schedule Kickoff Call  "),
            Some(CtaAction::ScheduleCall)
        );
    }

    #[test]
    fn unknown_cta_label_unmatched() {
        assert_eq!(CtaAction::from_label("Learn More"), None);
        assert_eq!(CtaAction::from_label(""), None);
    }
}
