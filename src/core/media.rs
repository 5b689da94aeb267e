//! Leaf objects embedded by value in several sections

use serde::Serialize;
use serde_json::Value;

use super::choice::{CtaStyle, VideoType};
use super::input::{Fields, Schema};
use super::link::LinkHref;
use super::validation::{FieldPath, Text, ValidationErrors, validate_video_path};

pub const CTA_LABEL_MAX: usize = 40;

/// A labeled, styled link prompting the visitor to act
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cta {
    pub label: String,
    pub href: LinkHref,
    pub style: CtaStyle,
    /// Icon name from the presentation layer's icon set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub new_tab: bool,
    /// Accessible description for screen readers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sr_label: Option<String>,
}

impl Cta {
    pub fn new(label: impl Into<String>, href: LinkHref) -> Self {
        Self {
            label: label.into(),
            href,
            style: CtaStyle::default(),
            icon: None,
            new_tab: false,
            sr_label: None,
        }
    }

    pub fn with_style(mut self, style: CtaStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// `target` attribute for the rendered anchor
    pub fn target(&self) -> Option<&'static str> {
        self.new_tab.then_some("_blank")
    }
}

impl Schema for Cta {
    const NAME: &'static str = "Cta";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let label = fields.text("label", Text::required().max(CTA_LABEL_MAX), issues);
        let href = fields.nested::<LinkHref>("href", issues);
        let style = fields.choice_or("style", CtaStyle::default(), issues);
        let icon = fields.optional_text("icon", Text::any(), issues);
        let new_tab = fields.flag_or("newTab", false, issues);
        let sr_label = fields.optional_text("srLabel", Text::any(), issues);
        fields.finish(issues)?;

        Some(Self {
            label: label?,
            href: href?,
            style,
            icon,
            new_tab,
            sr_label,
        })
    }
}

/// A playable video reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoSource {
    pub src: String,
    #[serde(rename = "type")]
    pub kind: VideoType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
}

impl Schema for VideoSource {
    const NAME: &'static str = "VideoSource";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let src = fields.checked("src", validate_video_path, issues);
        let kind = fields.choice_or("type", VideoType::default(), issues);
        let poster = fields.optional_text("poster", Text::any().trimmed(), issues);
        fields.finish(issues)?;

        Some(Self {
            src: src?,
            kind,
            poster,
        })
    }
}
