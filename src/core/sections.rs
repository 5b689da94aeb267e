//! Content of each landing page section
//!
//! Every section owns its copy by value and carries the fixed [`SectionId`]
//! used as its anchor. Omitted presentation options are filled with their
//! documented defaults, so renderers never see a partially configured section.

use serde::Serialize;
use serde_json::Value;

use super::choice::{Easing, GraphBackground, MotifType, PlaybookHeading, SectionId};
use super::input::{Fields, Schema};
use super::link::LinkHref;
use super::media::{Cta, VideoSource};
use super::validation::{
    Count, FieldPath, Range, Text, ValidationErrors, validate_color_hex, validate_id,
};

/// Default brand accent
pub const BRAND_COLOR: &str = "#752E4F";

pub const ECHO_TITLE: &str = "Echo (AI Assistant)";
pub const PLAYBOOK_TITLE: &str = "Onboarding Playbook";
pub const METRICS_TITLE: &str = "Metrics & Impact";
pub const HOW_IT_WORKS_TITLE: &str = "How It Works";

// ============================================================================
// Hero
// ============================================================================

/// Backdrop drawn over the hero video
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overlay {
    pub enabled: bool,
    /// 0-1
    pub gradient_opacity: f64,
    /// 0-20
    pub blur_px: f64,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            enabled: true,
            gradient_opacity: 0.35,
            blur_px: 6.0,
        }
    }
}

impl Schema for Overlay {
    const NAME: &'static str = "Overlay";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let defaults = Self::default();
        let fields = Fields::open(value, path, issues)?;
        let enabled = fields.flag_or("enabled", defaults.enabled, issues);
        let gradient_opacity = fields.number_or(
            "gradientOpacity",
            Range::between(0.0, 1.0),
            defaults.gradient_opacity,
            issues,
        );
        let blur_px = fields.number_or("blurPx", Range::between(0.0, 20.0), defaults.blur_px, issues);
        fields.finish(issues)?;

        Some(Self {
            enabled,
            gradient_opacity,
            blur_px,
        })
    }
}

/// Brand motif framing the hero container
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Motif {
    #[serde(rename = "type")]
    pub kind: MotifType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    pub border_opacity: f64,
    pub radius: f64,
}

impl Default for Motif {
    fn default() -> Self {
        Self {
            kind: MotifType::default(),
            border_color: None,
            border_opacity: 0.2,
            radius: 8.0,
        }
    }
}

impl Schema for Motif {
    const NAME: &'static str = "Motif";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let defaults = Self::default();
        let fields = Fields::open(value, path, issues)?;
        let kind = fields.choice_or("type", defaults.kind, issues);
        let border_color = fields.optional_checked("borderColor", validate_color_hex, issues);
        let border_opacity = fields.number_or(
            "borderOpacity",
            Range::between(0.0, 1.0),
            defaults.border_opacity,
            issues,
        );
        let radius = fields.number_or("radius", Range::between(0.0, 24.0), defaults.radius, issues);
        fields.finish(issues)?;

        Some(Self {
            kind,
            border_color,
            border_opacity,
            radius,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub id: SectionId,
    pub headline: String,
    pub subheadline: String,
    pub primary_cta: Cta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<Cta>,
    pub video: VideoSource,
    pub overlay: Overlay,
    pub motif: Motif,
}

impl Schema for Hero {
    const NAME: &'static str = "Hero";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::Hero, issues);
        let headline = fields.text("headline", Text::required().max(120), issues);
        let subheadline = fields.text("subheadline", Text::required().max(240), issues);
        let primary_cta = fields.nested::<Cta>("primaryCta", issues);
        let secondary_cta = fields.optional_nested::<Cta>("secondaryCta", issues);
        let video = fields.nested::<VideoSource>("video", issues);
        let overlay = fields.nested_or_default::<Overlay>("overlay", issues);
        let motif = fields.nested_or_default::<Motif>("motif", issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            headline: headline?,
            subheadline: subheadline?,
            primary_cta: primary_cta?,
            secondary_cta,
            video: video?,
            overlay,
            motif,
        })
    }
}

// ============================================================================
// Features
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Feature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// One supporting tagline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefit: Option<String>,
}

impl Schema for Feature {
    const NAME: &'static str = "Feature";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.optional_checked("id", validate_id, issues);
        let title = fields.text("title", Text::required().max(80), issues);
        let description = fields.text("description", Text::required().max(280), issues);
        let icon = fields.optional_text("icon", Text::any(), issues);
        let benefit = fields.optional_text("benefit", Text::any().max(140), issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            title: title?,
            description: description?,
            icon,
            benefit,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturesSection {
    pub id: SectionId,
    pub items: Vec<Feature>,
}

impl Schema for FeaturesSection {
    const NAME: &'static str = "FeaturesSection";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::Features, issues);
        let items = fields.list::<Feature>("items", Count::between(1, 6), issues);
        fields.finish(issues)?;

        Some(Self { id, items: items? })
    }
}

// ============================================================================
// Echo
// ============================================================================

/// One example prompt for the assistant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoUseCase {
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Schema for EchoUseCase {
    const NAME: &'static str = "EchoUseCase";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let prompt = fields.text("prompt", Text::required().max(160), issues);
        let note = fields.optional_text("note", Text::any().max(160), issues);
        fields.finish(issues)?;

        Some(Self {
            prompt: prompt?,
            note,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoSection {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub use_cases: Vec<EchoUseCase>,
}

impl Schema for EchoSection {
    const NAME: &'static str = "EchoSection";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::Echo, issues);
        let title = fields.text_or("title", Text::required().max(100), ECHO_TITLE, issues);
        let description = fields.text("description", Text::required().max(320), issues);
        let use_cases = fields.list::<EchoUseCase>("useCases", Count::between(1, 8), issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            title,
            description: description?,
            use_cases: use_cases?,
        })
    }
}

// ============================================================================
// Playbook
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybookEntry {
    pub heading: PlaybookHeading,
    /// Markdown body for the entry
    pub body_markdown: String,
}

impl Schema for PlaybookEntry {
    const NAME: &'static str = "PlaybookEntry";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let heading = fields.choice::<PlaybookHeading>("heading", issues);
        let body_markdown = fields.text("bodyMarkdown", Text::required(), issues);
        fields.finish(issues)?;

        Some(Self {
            heading: heading?,
            body_markdown: body_markdown?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybookSection {
    pub id: SectionId,
    pub title: String,
    pub description: String,
    pub outline: Vec<PlaybookEntry>,
}

impl Schema for PlaybookSection {
    const NAME: &'static str = "PlaybookSection";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::Playbook, issues);
        let title = fields.text_or("title", Text::required().max(100), PLAYBOOK_TITLE, issues);
        let description = fields.text("description", Text::required().max(320), issues);
        let outline = fields.list::<PlaybookEntry>("outline", Count::at_least(1), issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            title,
            description: description?,
            outline: outline?,
        })
    }
}

// ============================================================================
// Metrics
// ============================================================================

/// How a metric counter animates to its target value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAnimation {
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
}

impl Default for MetricAnimation {
    fn default() -> Self {
        Self {
            duration_ms: 1400.0,
            delay_ms: 0.0,
            easing: Easing::default(),
        }
    }
}

impl Schema for MetricAnimation {
    const NAME: &'static str = "MetricAnimation";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let defaults = Self::default();
        let fields = Fields::open(value, path, issues)?;
        let duration_ms = fields.number_or(
            "durationMs",
            Range::between(100.0, 5000.0),
            defaults.duration_ms,
            issues,
        );
        let delay_ms = fields.number_or(
            "delayMs",
            Range::between(0.0, 2000.0),
            defaults.delay_ms,
            issues,
        );
        let easing = fields.choice_or("easing", defaults.easing, issues);
        fields.finish(issues)?;

        Some(Self {
            duration_ms,
            delay_ms,
            easing,
        })
    }
}

/// One animated KPI
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub label: String,
    /// Target value the counter animates to
    pub value: f64,
    /// Shown next to the value: %, days, /7, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub animate: MetricAnimation,
}

impl Schema for Metric {
    const NAME: &'static str = "Metric";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.optional_checked("id", validate_id, issues);
        let label = fields.text("label", Text::required().max(80), issues);
        let target = fields.number("value", Range::at_least(0.0), issues);
        let unit = fields.optional_text("unit", Text::any().max(16), issues);
        let animate = fields.nested_or_default::<MetricAnimation>("animate", issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            label: label?,
            value: target?,
            unit,
            animate,
        })
    }
}

/// Theming of the metrics graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStyle {
    pub background: GraphBackground,
    /// Highlight color, used sparingly
    pub accent: String,
    /// Thin highlight border around the primary chart
    pub accent_border: bool,
}

impl Default for GraphStyle {
    fn default() -> Self {
        Self {
            background: GraphBackground::default(),
            accent: BRAND_COLOR.to_string(),
            accent_border: true,
        }
    }
}

impl Schema for GraphStyle {
    const NAME: &'static str = "GraphStyle";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let background = fields.choice_or("background", GraphBackground::default(), issues);
        let accent = fields.checked_or("accent", validate_color_hex, BRAND_COLOR, issues);
        let accent_border = fields.flag_or("accentBorder", true, issues);
        fields.finish(issues)?;

        Some(Self {
            background,
            accent,
            accent_border,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSection {
    pub id: SectionId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub metrics: Vec<Metric>,
    pub graph_style: GraphStyle,
}

impl Schema for MetricsSection {
    const NAME: &'static str = "MetricsSection";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::Metrics, issues);
        let title = fields.text_or("title", Text::required().max(100), METRICS_TITLE, issues);
        let subtitle = fields.optional_text("subtitle", Text::any().max(200), issues);
        let metrics = fields.list::<Metric>("metrics", Count::between(1, 8), issues);
        let graph_style = fields.nested_or_default::<GraphStyle>("graphStyle", issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            title,
            subtitle,
            metrics: metrics?,
            graph_style,
        })
    }
}

// ============================================================================
// How it works
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowStep {
    /// 1-9
    pub step: u32,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Schema for HowStep {
    const NAME: &'static str = "HowStep";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let step = fields.integer("step", Range::between(1.0, 9.0), issues);
        let title = fields.text("title", Text::required().max(80), issues);
        let description = fields.text("description", Text::required().max(200), issues);
        let icon = fields.optional_text("icon", Text::any(), issues);
        fields.finish(issues)?;

        Some(Self {
            step: step?,
            title: title?,
            description: description?,
            icon,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HowItWorksSection {
    pub id: SectionId,
    pub title: String,
    pub steps: Vec<HowStep>,
}

impl Schema for HowItWorksSection {
    const NAME: &'static str = "HowItWorksSection";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::HowItWorks, issues);
        let title = fields.text_or("title", Text::required().max(100), HOW_IT_WORKS_TITLE, issues);
        // Three to six steps, even when every step is valid on its own
        let steps = fields.list::<HowStep>("steps", Count::between(3, 6), issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            title,
            steps: steps?,
        })
    }
}

// ============================================================================
// Call to action
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSection {
    pub id: SectionId,
    pub title: String,
    pub primary: Cta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Cta>,
    /// Brand color background behind the primary CTA
    pub emphasize_brand: bool,
}

impl Schema for CtaSection {
    const NAME: &'static str = "CtaSection";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::Cta, issues);
        let title = fields.text("title", Text::required().max(120), issues);
        let primary = fields.nested::<Cta>("primary", issues);
        let secondary = fields.optional_nested::<Cta>("secondary", issues);
        let emphasize_brand = fields.flag_or("emphasizeBrand", true, issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            title: title?,
            primary: primary?,
            secondary,
            emphasize_brand,
        })
    }
}

// ============================================================================
// FAQ
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqItem {
    pub q: String,
    pub a: String,
}

impl Schema for FaqItem {
    const NAME: &'static str = "FaqItem";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let q = fields.text("q", Text::required().max(140), issues);
        let a = fields.text("a", Text::required(), issues);
        fields.finish(issues)?;

        Some(Self { q: q?, a: a? })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FaqSection {
    pub id: SectionId,
    pub items: Vec<FaqItem>,
}

impl Schema for FaqSection {
    const NAME: &'static str = "FaqSection";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::Faq, issues);
        let items = fields.list::<FaqItem>("items", Count::at_least(1), issues);
        fields.finish(issues)?;

        Some(Self { id, items: items? })
    }
}

// ============================================================================
// Footer
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FooterLink {
    pub label: String,
    pub href: LinkHref,
    pub external: bool,
}

impl Schema for FooterLink {
    const NAME: &'static str = "FooterLink";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let label = fields.text("label", Text::required().max(48), issues);
        let href = fields.nested::<LinkHref>("href", issues);
        let external = fields.flag_or("external", false, issues);
        fields.finish(issues)?;

        Some(Self {
            label: label?,
            href: href?,
            external,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footer {
    pub id: SectionId,
    pub links: Vec<FooterLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
}

impl Schema for Footer {
    const NAME: &'static str = "Footer";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let id = fields.section_id("id", SectionId::Footer, issues);
        let links = fields.list::<FooterLink>("links", Count::at_least(1), issues);
        let attribution = fields.optional_text("attribution", Text::any().max(160), issues);
        fields.finish(issues)?;

        Some(Self {
            id,
            links: links?,
            attribution,
        })
    }
}
