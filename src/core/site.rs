//! Site-wide configuration: navigation, social profiles and `<head>` metadata

use serde::Serialize;
use serde_json::Value;

use super::choice::SocialNetwork;
use super::input::{Fields, Schema};
use super::link::LinkHref;
use super::sections::BRAND_COLOR;
use super::validation::{Count, FieldPath, Text, ValidationErrors, validate_color_hex};

pub const BRAND_NAME: &str = "theMindArk.AI";
pub const DEFAULT_TITLE: &str = "theMindArk.AI — Exit Strategy Echo";
pub const DEFAULT_DESCRIPTION: &str = "Capture what they know. Keep it working. Replicate departing employees as secure Echos and generate an onboarding playbook that lasts.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub href: LinkHref,
}

impl Schema for NavItem {
    const NAME: &'static str = "NavItem";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let label = fields.text("label", Text::required().max(32), issues);
        let href = fields.nested::<LinkHref>("href", issues);
        fields.finish(issues)?;

        Some(Self {
            label: label?,
            href: href?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Nav {
    pub items: Vec<NavItem>,
}

impl Schema for Nav {
    const NAME: &'static str = "Nav";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let items = fields.list::<NavItem>("items", Count::at_least(1), issues);
        fields.finish(issues)?;

        Some(Self { items: items? })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub href: LinkHref,
}

impl Schema for SocialLink {
    const NAME: &'static str = "SocialLink";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let network = fields.choice::<SocialNetwork>("network", issues);
        let href = fields.nested::<LinkHref>("href", issues);
        fields.finish(issues)?;

        Some(Self {
            network: network?,
            href: href?,
        })
    }
}

/// Page `<head>` metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteMeta {
    pub title: String,
    pub description: String,
    /// Social preview image, a path or absolute URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_image: Option<String>,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            og_image: None,
        }
    }
}

impl Schema for SiteMeta {
    const NAME: &'static str = "SiteMeta";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let title = fields.text_or("title", Text::required().max(80), DEFAULT_TITLE, issues);
        let description = fields.text_or(
            "description",
            Text::required().max(200),
            DEFAULT_DESCRIPTION,
            issues,
        );
        let og_image = fields.optional_text("ogImage", Text::any(), issues);
        fields.finish(issues)?;

        Some(Self {
            title,
            description,
            og_image,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub brand_name: String,
    pub brand_color: String,
    pub dark_mode: bool,
    pub nav: Nav,
    pub social: Vec<SocialLink>,
    pub meta: SiteMeta,
}

impl SiteConfig {
    /// Social link for `network`, if configured
    pub fn social_link(&self, network: SocialNetwork) -> Option<&SocialLink> {
        self.social.iter().find(|link| link.network == network)
    }
}

impl Schema for SiteConfig {
    const NAME: &'static str = "SiteConfig";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let brand_name = fields.text_or("brandName", Text::required().max(64), BRAND_NAME, issues);
        let brand_color = fields.checked_or("brandColor", validate_color_hex, BRAND_COLOR, issues);
        let dark_mode = fields.flag_or("darkMode", true, issues);
        let nav = fields.nested::<Nav>("nav", issues);
        let social = fields.list_or_empty::<SocialLink>("social", Count::any(), issues);
        let meta = fields.nested_or_default::<SiteMeta>("meta", issues);
        fields.finish(issues)?;

        Some(Self {
            brand_name,
            brand_color,
            dark_mode,
            nav: nav?,
            social,
            meta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::choice::SectionId;
    use crate::core::input::assert_text_ceiling;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn nav() -> Value {
        json!({ "items": [{ "label": "Get a Demo", "href": "mailto:hello@mindark.ai" }] })
    }

    #[test]
    fn test_site_config_defaults() {
        let config = SiteConfig::parse(&json!({ "nav": nav() })).unwrap();
        assert_eq!(config.brand_name, BRAND_NAME);
        assert_eq!(config.brand_color, "#752E4F");
        assert!(config.dark_mode);
        assert!(config.social.is_empty());
        assert_eq!(config.meta, SiteMeta::default());
        assert_eq!(config.meta.title, DEFAULT_TITLE);
    }

    #[test]
    fn test_site_config_brand_color() {
        assert!(!SiteConfig::is_valid(&json!({ "nav": nav(), "brandColor": "752E4F" })));
        assert!(!SiteConfig::is_valid(&json!({ "nav": nav(), "brandColor": "#75" })));
        let config = SiteConfig::parse(&json!({ "nav": nav(), "brandColor": "#000" })).unwrap();
        assert_eq!(config.brand_color, "#000");
    }

    #[test]
    fn test_site_config_requires_nav_items() {
        let errors = SiteConfig::parse(&json!({ "nav": { "items": [] } })).unwrap_err();
        assert_eq!(errors[0].path.to_string(), "nav.items");
        assert!(!SiteConfig::is_valid(&json!({})));
    }

    #[test]
    fn test_nav_items_accept_anchors_and_paths() {
        let nav = Nav::parse(&json!({
            "items": [
                { "label": "Metrics", "href": "/#metrics" },
                { "label": "Blog", "href": "https://mindark.ai/blog" },
                { "label": "Pricing", "href": "/#pricing" },
            ],
        }))
        .unwrap();
        assert_eq!(nav.items[0].href.section(), Some(SectionId::Metrics));
        assert!(nav.items[1].href.is_absolute());
        assert_eq!(nav.items[2].href.section(), None);

        assert!(!NavItem::is_valid(&json!({ "label": "x".repeat(33), "href": "/" })));
        assert!(!NavItem::is_valid(&json!({ "label": "Home", "href": "home" })));
    }

    #[test]
    fn test_social_links() {
        let config = SiteConfig::parse(&json!({
            "nav": nav(),
            "social": [{ "network": "linkedin", "href": "https://www.linkedin.com/company/mindark" }],
        }))
        .unwrap();
        assert!(config.social_link(SocialNetwork::Linkedin).is_some());
        assert!(config.social_link(SocialNetwork::X).is_none());

        assert!(!SocialLink::is_valid(&json!({ "network": "myspace", "href": "https://x" })));
        assert!(!SocialLink::is_valid(&json!({ "network": "github", "href": "github.com/x" })));
    }

    #[test]
    fn test_site_meta_overrides() {
        let meta = SiteMeta::parse(&json!({ "title": "MindArk", "ogImage": "/og.png" })).unwrap();
        assert_eq!(meta.title, "MindArk");
        assert_eq!(meta.description, DEFAULT_DESCRIPTION);
        assert!(!SiteMeta::is_valid(&json!({ "title": "" })));
        assert!(!SiteMeta::is_valid(&json!({ "description": "x".repeat(201) })));
    }

    #[test]
    fn test_site_text_ceilings() {
        let item = json!({ "label": "Home", "href": "/" });
        assert_text_ceiling::<NavItem>(&item, "label", 32);
        assert_text_ceiling::<SiteConfig>(&json!({ "nav": nav() }), "brandName", 64);
        assert_text_ceiling::<SiteMeta>(&json!({}), "title", 80);
        assert_text_ceiling::<SiteMeta>(&json!({}), "description", 200);
    }
}
