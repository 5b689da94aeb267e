use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Value;

use super::choice::SectionId;
use super::input::{Schema, read_checked};
use super::validation::{
    FieldPath, ValidationError, ValidationErrors, validate_anchor_href, validate_href,
};

/// A validated link target.
///
/// Any href accepted by [`validate_href`]; when it is exactly `/#<section-id>`
/// the section is remembered so navigation can scroll in-page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkHref {
    href: String,
    section: Option<SectionId>,
}

impl LinkHref {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let href = validate_href(value)?;
        let section = validate_anchor_href(&href).ok();
        Ok(Self { href, section })
    }

    /// Link to a section of the landing page
    pub fn for_section(section: SectionId) -> Self {
        Self {
            href: section.anchor_href(),
            section: Some(section),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.href
    }

    /// The section this link scrolls to, if it is an in-page anchor
    pub fn section(&self) -> Option<SectionId> {
        self.section
    }

    pub fn is_anchor(&self) -> bool {
        self.section.is_some()
    }

    pub fn is_absolute(&self) -> bool {
        self.href.starts_with("http://") || self.href.starts_with("https://")
    }
}

impl AsRef<str> for LinkHref {
    fn as_ref(&self) -> &str {
        &self.href
    }
}

impl fmt::Display for LinkHref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

impl Serialize for LinkHref {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.href)
    }
}

impl Schema for LinkHref {
    const NAME: &'static str = "LinkHref";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let href = read_checked(value, path, issues, validate_href)?;
        let section = validate_anchor_href(&href).ok();
        Some(Self { href, section })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_anchor_links_know_their_section() {
        let link = LinkHref::new("/#metrics").unwrap();
        assert!(link.is_anchor());
        assert_eq!(link.section(), Some(SectionId::Metrics));
        assert_eq!(LinkHref::for_section(SectionId::Metrics), link);
    }

    #[test]
    fn test_unknown_anchor_is_a_plain_path() {
        // The href rule only checks the prefix, so this is still a valid link
        let link = LinkHref::new("/#pricing").unwrap();
        assert!(!link.is_anchor());
        assert_eq!(link.as_str(), "/#pricing");
    }

    #[test]
    fn test_trims_and_rejects() {
        assert_eq!(LinkHref::new(" /#faq ").unwrap().section(), Some(SectionId::Faq));
        assert_eq!(LinkHref::new("www.mindark.ai"), Err(ValidationError::InvalidHref));
        assert!(LinkHref::new("https://mindark.ai").unwrap().is_absolute());
        assert!(!LinkHref::new("mailto:hello@mindark.ai").unwrap().is_absolute());
    }

    #[test]
    fn test_schema_reads_strings_only() {
        assert!(<LinkHref as Schema>::parse(&json!("tel:+15550100")).is_ok());
        assert!(<LinkHref as Schema>::parse(&json!(7)).is_err());
        assert_eq!(
            serde_json::to_value(LinkHref::new("/about").unwrap()).unwrap(),
            json!("/about")
        );
    }
}
