//! Copy shipped on the landing page
//!
//! Kept as a raw document so it goes through exactly the same validation as
//! content loaded from a file.

use serde_json::{Value, json};

use super::input::Schema;
use super::page::LandingPage;
use super::validation::ValidationErrors;

const DEMO_MAILTO: &str = "mailto:hello@mindark.ai";

pub fn landing_page_document() -> Value {
    json!({
        "route": "/",
        "hero": {
            "headline": "We Automate Wisdom",
            "subheadline": "Onboarding and Offboarding Made Easy",
            "primaryCta": {
                "label": "Get a Demo",
                "href": DEMO_MAILTO,
                "icon": "mail",
                "srLabel": "Open demo request",
            },
            "video": { "src": "/videos/hero.mp4", "type": "mp4" },
        },
        "features": {
            "items": [
                {
                    "id": "precision-context",
                    "title": "Precision Context Engineering",
                    "description": "Curate sources, roles, and guardrails into a single conversation spec that travels with each Echo—deterministic, versionable, and auditable.",
                },
                {
                    "id": "transparent-agents",
                    "title": "Transparent Agentic Behavior",
                    "description": "Plain‑text prompts show what an agent can do, why answers happen, and which policies apply—clear governance without guesswork.",
                },
                {
                    "id": "unified-syntax",
                    "title": "Unified syntax for agentic apps",
                    "description": "One format for system, assistant, and user messages—with structure for tools and memory hints so complex flows don’t sprawl across files.",
                    "benefit": "Powered by Convo‑Lang",
                },
            ],
        },
        "echo": {
            "description": "An Echo is a secure AI replica of a departing expert's know‑how. New hires ask it what they would have asked their predecessor.",
            "useCases": [
                {
                    "prompt": "Where is the quarterly vendor renewal checklist?",
                    "note": "Answers cite the document the expert pointed to.",
                },
                { "prompt": "Who signs off on a change to the billing process?" },
                { "prompt": "Walk me through the month-end close in our ERP." },
            ],
        },
        "playbook": {
            "description": "The Continuity Engine turns interviews and documents into an onboarding playbook with the same seven chapters for every role.",
            "outline": [
                { "heading": "Role Overview", "bodyMarkdown": "What the role owns and why it matters." },
                { "heading": "Core Responsibilities", "bodyMarkdown": "- Outcomes the role is measured on\n- Decisions it makes alone" },
                { "heading": "Daily/Weekly/Monthly Routines", "bodyMarkdown": "Recurring work, in the order it happens." },
                { "heading": "Key Systems and Access", "bodyMarkdown": "Tools, accounts and who grants access." },
                { "heading": "Processes and SOPs", "bodyMarkdown": "Step-by-step procedures captured from the expert." },
                { "heading": "Stakeholders and Communication", "bodyMarkdown": "Who to talk to, about what, and how often." },
                { "heading": "FAQs and Troubleshooting", "bodyMarkdown": "Questions new hires ask in their first month." },
            ],
        },
        "metrics": {
            "title": "Measurable Results",
            "subtitle": "A focused look at what leaves when people do—and how Echo helps close the gap.",
            "metrics": [
                {
                    "id": "faster-onboarding",
                    "label": "Faster Onboarding",
                    "value": 70,
                    "unit": "%",
                    "animate": { "durationMs": 1300, "delayMs": 120 },
                },
                {
                    "id": "continuity",
                    "label": "Continuity Across Transitions",
                    "value": 100,
                    "unit": "%",
                    "animate": { "durationMs": 1300, "delayMs": 240 },
                },
                {
                    "id": "expertise-access",
                    "label": "Access to expertise",
                    "value": 24,
                    "unit": "/7",
                    "animate": { "durationMs": 1300, "delayMs": 360 },
                },
            ],
        },
        "howItWorks": {
            "title": "The Echo System",
            "steps": [
                {
                    "step": 1,
                    "title": "Centralize what matters",
                    "description": "We gather documents, meeting notes, process flows, and project details to uncover context and centralize information.",
                },
                {
                    "step": 2,
                    "title": "Interview for the unwritten",
                    "description": "Our Interview Agent (IA) engages the expert with organizational context and managerial goals to surface the unwritten know‑how—focusing on the vital 20% that drives 80% of results.",
                },
                {
                    "step": 3,
                    "title": "Deploy Echo + Playbook",
                    "description": "The Continuity Engine auto‑generates an onboarding playbook and a simple Knowledge Dashboard to empower a new hire—achieving in‑flow in weeks, not months, with significantly reduced onboarding costs.",
                },
            ],
        },
        "cta": {
            "title": "Capture what they know. Keep it working.",
            "primary": { "label": "Get a Demo", "href": DEMO_MAILTO, "icon": "mail" },
            "secondary": { "label": "See how it works", "href": "/#how-it-works", "style": "link" },
        },
        "faq": {
            "items": [
                {
                    "q": "What is an Echo?",
                    "a": "A secure assistant trained on one expert's documents and interview answers, available to whoever takes over their work.",
                },
                {
                    "q": "How long does capturing an expert take?",
                    "a": "Most interviews fit in a few sessions during the notice period.",
                },
            ],
        },
        "footer": {
            "links": [
                { "label": "Contact", "href": DEMO_MAILTO },
                { "label": "Convo-Lang", "href": "https://www.convo-lang.ai/", "external": true },
            ],
            "attribution": "© theMindArk.AI",
        },
        "config": {
            "brandName": "theMindArk.AI",
            "nav": {
                "items": [{ "label": "Get a Demo", "href": DEMO_MAILTO }],
            },
        },
    })
}

/// The shipped copy, validated and defaulted
pub fn landing_page() -> Result<LandingPage, ValidationErrors> {
    LandingPage::parse(&landing_page_document())
}
