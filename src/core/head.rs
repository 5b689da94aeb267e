//! `<head>` tags derived from [`SiteMeta`]

use serde::Serialize;

use super::page::LandingPage;
use super::site::SiteMeta;

/// Origin used when none is configured
pub const DEFAULT_SITE_ORIGIN: &str = "https://mindark.ai";

/// Social preview image served when the page sets none
pub const DEFAULT_OG_IMAGE: &str = "/opengraph.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tag", rename_all = "lowercase")]
pub enum HeadTag {
    Title { text: String },
    /// `<meta name=... content=...>`
    Name { name: &'static str, content: String },
    /// `<meta property=... content=...>`
    Property {
        property: &'static str,
        content: String,
    },
}

impl HeadTag {
    pub fn content(&self) -> &str {
        match self {
            HeadTag::Title { text } => text,
            HeadTag::Name { content, .. } | HeadTag::Property { content, .. } => content,
        }
    }
}

fn absolute(origin: &str, target: &str) -> String {
    // `//host/...` is a network reference and only borrows the origin's scheme
    if target.starts_with("//") {
        return match origin.split_once("://") {
            Some((scheme, _)) => format!("{}:{}", scheme, target),
            None => target.to_string(),
        };
    }
    if target.starts_with('/') {
        format!("{}{}", origin, target)
    } else {
        target.to_string()
    }
}

impl SiteMeta {
    /// Title, description and Open Graph tags for a page served from `origin`
    pub fn head_tags(&self, origin: &str) -> Vec<HeadTag> {
        let origin = origin.trim_end_matches('/');
        let image = self.og_image.as_deref().unwrap_or(DEFAULT_OG_IMAGE);

        vec![
            HeadTag::Title {
                text: self.title.clone(),
            },
            HeadTag::Name {
                name: "description",
                content: self.description.clone(),
            },
            HeadTag::Property {
                property: "og:title",
                content: self.title.clone(),
            },
            HeadTag::Property {
                property: "og:description",
                content: self.description.clone(),
            },
            HeadTag::Property {
                property: "og:type",
                content: "website".to_string(),
            },
            HeadTag::Property {
                property: "og:image",
                content: absolute(origin, image),
            },
            HeadTag::Property {
                property: "og:url",
                content: format!("{}/", origin),
            },
        ]
    }
}

impl LandingPage {
    pub fn head_tags(&self, origin: &str) -> Vec<HeadTag> {
        self.config.meta.head_tags(origin)
    }
}
