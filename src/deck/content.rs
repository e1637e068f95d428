//! Static deck content: the slide registry, the case-study table, and the
//! contact block. Read-only reference data; nothing here changes at
//! runtime.

use super::state::{CaseStudy, Slide, SlideBlock};

/// Contact details shown in every CTA confirmation prompt.
pub static CONTACT_LINES: &[&str] = &[
    "hello@aspiri.studio",
    "+91 98200 41520",
    "aspiri.studio — Mumbai / remote",
];

pub static CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        key: "hidesign",
        name: "Hidesign",
        url: "https://www.hidesign.com/",
        tagline: "Luxury leather goods, reimagined online",
        description: "A comprehensive Shopify website and marketing system for \
            luxury fashion brand Hidesign: a storefront worthy of the product, \
            integrated marketing automation, inventory management, and a \
            customer experience tuned for considered purchases.",
        achievements: &[
            "Storefront relaunch across 4 regional markets",
            "Marketing automation covering the full purchase journey",
            "Inventory sync between retail and online channels",
        ],
    },
    CaseStudy {
        key: "nonormal",
        name: "Nonormal",
        url: "https://www.nonormal.com/",
        tagline: "A lifestyle store that learns its customers",
        description: "A modern lifestyle ecommerce experience featuring \
            advanced product filtering, personalized recommendations, and a \
            seamless checkout flow, with AI-powered search and dynamic \
            content management behind it.",
        achievements: &[
            "Personalized recommendations on every collection page",
            "Checkout flow rebuilt to a two-step conversion path",
            "AI-powered search with typo tolerance",
        ],
    },
    CaseStudy {
        key: "pricklee",
        name: "Pricklee",
        url: "https://www.pricklee.com/",
        tagline: "Cactus water with a subscription backbone",
        description: "A dynamic online store for the innovative beverage brand \
            Pricklee: interactive product showcases, subscription management, \
            and integrated social commerce capabilities.",
        achievements: &[
            "Subscription program with pause/skip self-service",
            "Shoppable social content wired into product pages",
            "Interactive flavor explorer",
        ],
    },
    CaseStudy {
        key: "beastlife",
        name: "Beastlife",
        url: "https://www.beastlife.in/",
        tagline: "Health & wellness, personalized at scale",
        description: "A comprehensive health & wellness platform with \
            AI-powered personalization, workout tracking, nutrition planning, \
            and community features, backed by advanced analytics and user \
            engagement tooling.",
        achievements: &[
            "Personalized plans driving repeat purchases",
            "Community features with moderated challenges",
            "Engagement analytics feeding the content calendar",
        ],
    },
];

pub static SLIDES: &[Slide] = &[
    Slide {
        id: "welcome",
        title: "Welcome",
        nav_label: "Welcome",
        blocks: &[
            SlideBlock::Heading("A Proposal for Your Brand"),
            SlideBlock::Text(
                "Aspiri builds ecommerce experiences that sell. This deck walks \
                 through who we are, how we'd approach your project, and what \
                 it takes to get started.",
            ),
            SlideBlock::Spacer,
            SlideBlock::Text("Use the arrow keys, the sidebar, or swipe to move around."),
        ],
    },
    Slide {
        id: "about",
        title: "About Aspiri",
        nav_label: "About Us",
        blocks: &[
            SlideBlock::Heading("Who We Are"),
            SlideBlock::Text(
                "A senior team of designers, engineers, and growth marketers \
                 who have shipped storefronts for brands across fashion, food, \
                 and wellness.",
            ),
            SlideBlock::Bullet("Design and engineering under one roof"),
            SlideBlock::Bullet("Shopify specialists since 2017"),
            SlideBlock::Bullet("Retained partner to 20+ active brands"),
        ],
    },
    Slide {
        id: "understanding",
        title: "Understanding Your Brand",
        nav_label: "Your Brand",
        blocks: &[
            SlideBlock::Heading("What We Heard"),
            SlideBlock::Text(
                "Your current store undersells the product: slow pages, a \
                 generic theme, and no owned marketing channel. The brand \
                 deserves a storefront that feels like the product in hand.",
            ),
            SlideBlock::Bullet("Premium positioning, mid-market presentation"),
            SlideBlock::Bullet("High repeat-purchase potential, no retention program"),
            SlideBlock::Bullet("Strong social following, weak conversion path"),
        ],
    },
    Slide {
        id: "challenge",
        title: "The Challenge",
        nav_label: "The Challenge",
        blocks: &[
            SlideBlock::Heading("Where the Funnel Leaks"),
            SlideBlock::Bullet("Mobile bounce rate nearly double the category benchmark"),
            SlideBlock::Bullet("Checkout abandonment above 75%"),
            SlideBlock::Bullet("Email list growing, but unsegmented and unmailed"),
            SlideBlock::Spacer,
            SlideBlock::Text(
                "None of these are traffic problems. They are experience \
                 problems, and they are fixable.",
            ),
        ],
    },
    Slide {
        id: "approach",
        title: "Our Approach",
        nav_label: "Approach",
        blocks: &[
            SlideBlock::Heading("How We Work"),
            SlideBlock::Bullet("Discovery sprint: analytics audit, customer interviews"),
            SlideBlock::Bullet("Design in the open: weekly reviews, shared boards"),
            SlideBlock::Bullet("Build on Shopify with a measured, testable rollout"),
            SlideBlock::Bullet("Post-launch: conversion experiments, not guesswork"),
        ],
    },
    Slide {
        id: "scope",
        title: "Scope of Work",
        nav_label: "Scope",
        blocks: &[
            SlideBlock::Heading("What's Included"),
            SlideBlock::Bullet("Storefront design system and theme build"),
            SlideBlock::Bullet("Product, collection, and editorial templates"),
            SlideBlock::Bullet("Email marketing system with lifecycle flows"),
            SlideBlock::Bullet("Analytics and event tracking foundation"),
            SlideBlock::Bullet("Launch support and handover documentation"),
        ],
    },
    Slide {
        id: "platform",
        title: "Platform & Technology",
        nav_label: "Platform",
        blocks: &[
            SlideBlock::Heading("Built on Proven Rails"),
            SlideBlock::Text(
                "Shopify for commerce, Klaviyo for lifecycle marketing, and a \
                 lean custom theme — no page-builder bloat, nothing you can't \
                 maintain without us.",
            ),
            SlideBlock::Bullet("Sub-second product pages on mobile"),
            SlideBlock::Bullet("Structured data for search and social"),
            SlideBlock::Bullet("Accessibility checked against WCAG 2.1 AA"),
        ],
    },
    Slide {
        id: "case-studies",
        title: "Case Studies",
        nav_label: "Case Studies",
        blocks: &[
            SlideBlock::Heading("Selected Work"),
            SlideBlock::Text("Tap a card for the full story."),
            SlideBlock::Spacer,
            SlideBlock::CaseStudyCard { client: "hidesign" },
            SlideBlock::CaseStudyCard { client: "nonormal" },
            SlideBlock::CaseStudyCard { client: "pricklee" },
            SlideBlock::CaseStudyCard { client: "beastlife" },
        ],
    },
    Slide {
        id: "marketing",
        title: "Marketing System",
        nav_label: "Marketing",
        blocks: &[
            SlideBlock::Heading("Beyond the Storefront"),
            SlideBlock::Bullet("Welcome, browse, cart, and win-back flows"),
            SlideBlock::Bullet("Campaign calendar with a monthly testing slot"),
            SlideBlock::Bullet("Segmentation by purchase behavior, not vibes"),
            SlideBlock::Spacer,
            SlideBlock::Text("Owned channels compound. Paid traffic rents."),
        ],
    },
    Slide {
        id: "timeline",
        title: "Timeline & Milestones",
        nav_label: "Timeline",
        blocks: &[
            SlideBlock::Heading("Twelve Weeks, Four Gates"),
            SlideBlock::Bullet("Weeks 1–2 — discovery and audit readout"),
            SlideBlock::Bullet("Weeks 3–6 — design system and key templates"),
            SlideBlock::Bullet("Weeks 7–10 — theme build and content migration"),
            SlideBlock::Bullet("Weeks 11–12 — QA, launch, and stabilization"),
        ],
    },
    Slide {
        id: "deliverables",
        title: "Deliverables",
        nav_label: "Deliverables",
        blocks: &[
            SlideBlock::Heading("What You Keep"),
            SlideBlock::Bullet("Production storefront and theme repository"),
            SlideBlock::Bullet("Design system source files"),
            SlideBlock::Bullet("Lifecycle flows, live and documented"),
            SlideBlock::Bullet("Analytics dashboard and event dictionary"),
            SlideBlock::Bullet("Handover guide for your in-house team"),
        ],
    },
    Slide {
        id: "investment",
        title: "Investment",
        nav_label: "Investment",
        blocks: &[
            SlideBlock::Heading("Engagement Options"),
            SlideBlock::Bullet("Build — the twelve-week scope above, fixed fee"),
            SlideBlock::Bullet("Build + Grow — adds six months of experiments"),
            SlideBlock::Bullet("Partner — ongoing retainer after launch"),
            SlideBlock::Spacer,
            SlideBlock::Text(
                "Detailed pricing is on the accompanying one-pager; happy to \
                 walk through it on a call.",
            ),
            SlideBlock::CtaButton { label: "Download Proposal PDF" },
        ],
    },
    Slide {
        id: "team",
        title: "Your Team",
        nav_label: "Team",
        blocks: &[
            SlideBlock::Heading("Who You'll Work With"),
            SlideBlock::Bullet("Lead designer — owns the design system"),
            SlideBlock::Bullet("Lead engineer — owns the theme and integrations"),
            SlideBlock::Bullet("Growth strategist — owns the marketing system"),
            SlideBlock::Bullet("Project lead — your single point of contact"),
        ],
    },
    Slide {
        id: "support",
        title: "Support & Partnership",
        nav_label: "Support",
        blocks: &[
            SlideBlock::Heading("After Launch"),
            SlideBlock::Text(
                "Launch is the start, not the finish. Every engagement \
                 includes thirty days of stabilization; most clients continue \
                 into a growth retainer.",
            ),
            SlideBlock::Bullet("Same-day response on production issues"),
            SlideBlock::Bullet("Monthly performance review"),
            SlideBlock::CtaButton { label: "Get in Touch" },
        ],
    },
    Slide {
        id: "next-steps",
        title: "Next Steps",
        nav_label: "Next Steps",
        blocks: &[
            SlideBlock::Heading("Let's Build It"),
            SlideBlock::Text(
                "If this proposal fits, the next step is a kickoff call to \
                 lock the timeline and introduce the team.",
            ),
            SlideBlock::Spacer,
            SlideBlock::CtaButton { label: "Schedule Kickoff Call" },
            SlideBlock::CtaButton { label: "Download Proposal PDF" },
            SlideBlock::CtaButton { label: "Confirm & Start" },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::state::{CtaAction, DeckState};

    #[test]
    fn registry_has_fifteen_slides() {
        assert_eq!(SLIDES.len(), 15);
    }

    #[test]
    fn registry_passes_init_validation() {
        // Every card key resolves; the deck is non-empty.
        assert!(DeckState::new(SLIDES, CASE_STUDIES).is_ok());
    }

    #[test]
    fn nav_entries_one_to_one_with_slides() {
        // Same count, same order: each slide carries exactly one nonempty
        // nav label, and ids are unique.
        for slide in SLIDES {
            assert!(!slide.nav_label.is_empty(), "slide '{}' has no nav label", slide.id);
            assert!(!slide.title.is_empty());
        }
        let mut ids: Vec<&str> = SLIDES.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SLIDES.len(), "duplicate slide ids");
    }

    #[test]
    fn every_cta_button_label_is_recognized() {
        for slide in SLIDES {
            for block in slide.blocks {
                if let super::SlideBlock::CtaButton { label } = block {
                    assert!(
                        CtaAction::from_label(label).is_some(),
                        "slide '{}' has unmatched CTA label '{}'",
                        slide.id,
                        label
                    );
                }
            }
        }
    }

    #[test]
    fn case_study_table_complete() {
        assert_eq!(CASE_STUDIES.len(), 4);
        for cs in CASE_STUDIES {
            assert!(!cs.name.is_empty());
            assert!(cs.url.starts_with("https://"));
            assert!(!cs.description.is_empty());
            assert!(!cs.achievements.is_empty());
        }
    }
}
