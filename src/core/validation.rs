//! Validation rules for landing page content
//!
//! Every composite validator in [`crate::core`] is assembled from the primitive
//! rules in this module, so content files, configuration and submitted forms
//! all report failures with the same vocabulary.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use derive_more::{Deref, Display, IntoIterator};
use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use serde_json::Value;

use super::choice::{Choice, SectionId};

/// Prefixes an href may start with
pub const HREF_PREFIXES: [&str; 5] = ["/", "http://", "https://", "mailto:", "tel:"];

/// On-site directory that hosts video assets
pub const VIDEO_DIRECTORY: &str = "/videos/";

/// Accepted video file suffixes (case-sensitive)
pub const VIDEO_EXTENSIONS: [&str; 2] = [".mp4", ".webm"];

/// Prefix of an in-page anchor link
pub const ANCHOR_PREFIX: &str = "/#";

static COLOR_HEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("color hex pattern is valid")
});

// Local part, "@", then one or more dot-terminated labels and a TLD of 2+ letters.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// The rule a value failed
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Value is absent or an empty string
    #[error("Required")]
    Required,
    /// Identifier is empty
    #[error("id is required")]
    IdRequired,
    /// Value has the wrong JSON type
    #[error("Expected {expected}")]
    InvalidType { expected: &'static str },
    /// String exceeds its length ceiling
    #[error("Must be at most {max} characters ({actual} given)")]
    TooLong { max: usize, actual: usize },
    /// Number below its minimum
    #[error("Must be at least {min}")]
    TooSmall { min: f64 },
    /// Number above its maximum
    #[error("Must be at most {max}")]
    TooLarge { max: f64 },
    /// Number has a fractional part where an integer is expected
    #[error("Expected an integer")]
    NotInteger,
    /// Array has fewer items than allowed
    #[error("Expected at least {min} item(s), got {actual}")]
    TooFew { min: usize, actual: usize },
    /// Array has more items than allowed
    #[error("Expected at most {max} item(s), got {actual}")]
    TooMany { max: usize, actual: usize },
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Invalid color hex")]
    InvalidColorHex,
    #[error("Must be a path or a valid URL (/, http(s), mailto, tel)")]
    InvalidHref,
    #[error("Video should be served from /videos or a full URL")]
    VideoOutsideLibrary,
    #[error("Video must be .mp4 or .webm")]
    UnsupportedVideoFormat,
    #[error("Anchor href must match '/#section-id'")]
    InvalidAnchorHref,
    /// String is not a member of a closed set
    #[error("Expected one of {}; got '{}'", .expected.join(", "), .actual)]
    NotOneOf {
        expected: &'static [&'static str],
        actual: String,
    },
    /// Value differs from the only literal allowed
    #[error("Expected '{expected}'")]
    UnexpectedValue { expected: &'static str },
}

/// Broad kind of failure, used by authoring tools to group messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// A required field is absent or empty
    Missing,
    /// The field holds the wrong kind of JSON value
    Type,
    /// A length or numeric bound was exceeded
    Bound,
    /// An array has too few or too many items
    Cardinality,
    /// A string failed a shape or closed-set check
    Format,
}

impl ValidationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationError::Required | ValidationError::IdRequired => ErrorCategory::Missing,
            ValidationError::InvalidType { .. } => ErrorCategory::Type,
            ValidationError::TooLong { .. }
            | ValidationError::TooSmall { .. }
            | ValidationError::TooLarge { .. }
            | ValidationError::NotInteger => ErrorCategory::Bound,
            ValidationError::TooFew { .. } | ValidationError::TooMany { .. } => {
                ErrorCategory::Cardinality
            }
            ValidationError::InvalidEmail
            | ValidationError::InvalidColorHex
            | ValidationError::InvalidHref
            | ValidationError::VideoOutsideLibrary
            | ValidationError::UnsupportedVideoFormat
            | ValidationError::InvalidAnchorHref
            | ValidationError::NotOneOf { .. }
            | ValidationError::UnexpectedValue { .. } => ErrorCategory::Format,
        }
    }
}

/// One step in a path to a nested field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Location of a field inside a content document, e.g. `hero.primaryCta.label`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<PathSegment>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path to `key` inside the object at this path
    pub fn key(&self, key: &str) -> Self {
        let mut path = self.clone();
        path.0.push(PathSegment::Key(key.to_string()));
        path
    }

    /// Path to element `index` of the array at this path
    pub fn index(&self, index: usize) -> Self {
        let mut path = self.clone();
        path.0.push(PathSegment::Index(index));
        path
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("(root)");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => f.write_str(key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A failed rule together with the field it failed on
#[derive(Debug, Clone, PartialEq, Display)]
#[display("{path}: {error}")]
pub struct Issue {
    pub path: FieldPath,
    pub error: ValidationError,
}

impl Serialize for Issue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Issue", 3)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("category", &self.error.category())?;
        state.serialize_field("message", &self.error.to_string())?;
        state.end()
    }
}

/// Every issue found while validating one value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deref, IntoIterator)]
pub struct ValidationErrors(#[into_iterator(owned, ref)] Vec<Issue>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: FieldPath, error: ValidationError) {
        self.0.push(Issue { path, error });
    }

    /// All issues as `path: reason` lines
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(|issue| issue.to_string()).collect()
    }

    /// Issues recorded for the field displayed as `path`
    pub fn for_field(&self, path: &str) -> Vec<&Issue> {
        self.0
            .iter()
            .filter(|issue| issue.path.to_string() == path)
            .collect()
    }

    /// Reasons grouped by field, for forms that show messages next to inputs
    pub fn by_field(&self) -> BTreeMap<String, Vec<String>> {
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for issue in &self.0 {
            grouped
                .entry(issue.path.to_string())
                .or_default()
                .push(issue.error.to_string());
        }
        grouped
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            0 => f.write_str("no validation issues"),
            1 => write!(f, "{}", self.0[0]),
            n => {
                write!(f, "{} validation issues: ", n)?;
                let joined: Vec<String> = self.messages();
                f.write_str(&joined.join("; "))
            }
        }
    }
}

impl std::error::Error for ValidationErrors {}

/// Length rule for a string field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Text {
    required: bool,
    max: Option<usize>,
    trim: bool,
}

impl Text {
    /// Any string, including the empty one
    pub const fn any() -> Self {
        Self {
            required: false,
            max: None,
            trim: false,
        }
    }

    /// Non-empty string
    pub const fn required() -> Self {
        Self {
            required: true,
            max: None,
            trim: false,
        }
    }

    pub const fn max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Trim surrounding whitespace before the other checks
    pub const fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Length is counted in Unicode scalar values
    pub fn check(&self, value: &str) -> Result<String, ValidationError> {
        let value = if self.trim { value.trim() } else { value };
        if self.required && value.is_empty() {
            return Err(ValidationError::Required);
        }
        if let Some(max) = self.max {
            let actual = value.chars().count();
            if actual > max {
                return Err(ValidationError::TooLong { max, actual });
            }
        }
        Ok(value.to_string())
    }
}

/// Inclusive numeric range
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Range {
    min: Option<f64>,
    max: Option<f64>,
}

impl Range {
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub const fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    pub fn check(&self, value: f64) -> Result<f64, ValidationError> {
        if let Some(min) = self.min
            && value < min
        {
            return Err(ValidationError::TooSmall { min });
        }
        if let Some(max) = self.max
            && value > max
        {
            return Err(ValidationError::TooLarge { max });
        }
        Ok(value)
    }
}

/// Inclusive bounds on the number of items in an array
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Count {
    min: usize,
    max: Option<usize>,
}

impl Count {
    pub const fn any() -> Self {
        Self { min: 0, max: None }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub fn check(&self, actual: usize) -> Result<(), ValidationError> {
        if actual < self.min {
            return Err(ValidationError::TooFew {
                min: self.min,
                actual,
            });
        }
        if let Some(max) = self.max
            && actual > max
        {
            return Err(ValidationError::TooMany { max, actual });
        }
        Ok(())
    }
}

/// Validates a string that must not be empty
pub fn validate_non_empty(value: &str) -> Result<String, ValidationError> {
    Text::required().check(value)
}

/// Validates a generic identifier
pub fn validate_id(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        Err(ValidationError::IdRequired)
    } else {
        Ok(value.to_string())
    }
}

/// Canonical form of an email address: trimmed and lower-cased
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Normalizes then validates an email address, returning the canonical form
pub fn validate_email(value: &str) -> Result<String, ValidationError> {
    let email = normalize_email(value);
    if email.starts_with('.') || email.contains("..") || !EMAIL.is_match(&email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

/// Validates `#rgb`, `#rrggbb` or `#rrggbbaa`
pub fn validate_color_hex(value: &str) -> Result<String, ValidationError> {
    if COLOR_HEX.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ValidationError::InvalidColorHex)
    }
}

/// Validates a link target by prefix only; the rest of the URL is not parsed
pub fn validate_href(value: &str) -> Result<String, ValidationError> {
    let href = value.trim();
    if HREF_PREFIXES.iter().any(|prefix| href.starts_with(prefix)) {
        Ok(href.to_string())
    } else {
        Err(ValidationError::InvalidHref)
    }
}

/// Validates a video location: on-site under `/videos/` or absolute http(s),
/// ending in `.mp4` or `.webm`
pub fn validate_video_path(value: &str) -> Result<String, ValidationError> {
    let path = value.trim();
    let hosted = path.starts_with(VIDEO_DIRECTORY)
        || path.starts_with("http://")
        || path.starts_with("https://");
    if !hosted {
        return Err(ValidationError::VideoOutsideLibrary);
    }
    if !VIDEO_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return Err(ValidationError::UnsupportedVideoFormat);
    }
    Ok(path.to_string())
}

/// Validates `/#<section-id>` against the closed set of sections
pub fn validate_anchor_href(value: &str) -> Result<SectionId, ValidationError> {
    value
        .strip_prefix(ANCHOR_PREFIX)
        .and_then(SectionId::from_name)
        .ok_or(ValidationError::InvalidAnchorHref)
}

/// True iff `value` is a string accepted by [`validate_anchor_href`]
pub fn is_anchor_href(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|href| validate_anchor_href(href).is_ok())
}

/// True iff `value` is a string accepted by [`validate_color_hex`]
pub fn is_color_hex(value: &Value) -> bool {
    value
        .as_str()
        .is_some_and(|color| validate_color_hex(color).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty_and_id() {
        assert_eq!(validate_non_empty(""), Err(ValidationError::Required));
        assert_eq!(validate_non_empty(" "), Ok(" ".to_string()));
        assert_eq!(validate_id(""), Err(ValidationError::IdRequired));
        assert_eq!(validate_id("faster-onboarding"), Ok("faster-onboarding".to_string()));
    }

    #[test]
    fn test_text_bounds() {
        let rule = Text::required().max(5);
        assert!(rule.check("abcde").is_ok());
        assert_eq!(
            rule.check("abcdef"),
            Err(ValidationError::TooLong { max: 5, actual: 6 })
        );
        // Multi-byte characters count once
        assert!(rule.check("ñññññ").is_ok());
        assert_eq!(Text::any().check(""), Ok(String::new()));
        assert_eq!(Text::any().trimmed().check("  x "), Ok("x".to_string()));
    }

    #[test]
    fn test_email_normalization() {
        let canonical = validate_email("  Foo@Example.COM ").unwrap();
        assert_eq!(canonical, "foo@example.com");
        assert_eq!(validate_email(&canonical), Ok(canonical.clone()));
        assert_eq!(validate_email("FOO@example.com"), validate_email("foo@EXAMPLE.com "));
    }

    #[test]
    fn test_invalid_emails() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@example",
            "user@@example.com",
            ".user@example.com",
            "us..er@example.com",
            "user.@example.com",
            "user@example.c",
        ] {
            assert_eq!(validate_email(email), Err(ValidationError::InvalidEmail), "{email}");
        }
        assert!(validate_email("first.last+tag@mail.mindark.ai").is_ok());
    }

    #[test]
    fn test_color_hex() {
        for color in ["#fff", "#FFFFFF", "#752E4F", "#752e4fcc"] {
            assert!(validate_color_hex(color).is_ok(), "{color}");
        }
        for color in ["", "fff", "#ffff", "#fffff", "#fffffff", "#ggg", "#752E4F ", "#123456789"] {
            assert_eq!(
                validate_color_hex(color),
                Err(ValidationError::InvalidColorHex),
                "{color}"
            );
        }
    }

    #[test]
    fn test_href_prefixes() {
        for href in ["/", "/about", "http://x", "https://", "mailto:hello@mindark.ai", "tel:+1555"] {
            assert!(validate_href(href).is_ok(), "{href}");
        }
        assert_eq!(validate_href("  /about "), Ok("/about".to_string()));
        for href in ["", "about", "ftp://files", "javascript:alert(1)", "#hero"] {
            assert_eq!(validate_href(href), Err(ValidationError::InvalidHref), "{href}");
        }
    }

    #[test]
    fn test_video_paths() {
        assert!(validate_video_path("/videos/demo.mp4").is_ok());
        assert!(validate_video_path("https://cdn.example.com/clip.webm").is_ok());
        assert_eq!(
            validate_video_path("/videos/demo.mov"),
            Err(ValidationError::UnsupportedVideoFormat)
        );
        assert_eq!(
            validate_video_path("/clips/demo.mp4"),
            Err(ValidationError::VideoOutsideLibrary)
        );
        assert_eq!(
            validate_video_path("/videos/demo.MP4"),
            Err(ValidationError::UnsupportedVideoFormat)
        );
    }

    #[test]
    fn test_anchor_hrefs() {
        for id in SectionId::NAMES {
            assert!(validate_anchor_href(&format!("/#{}", id)).is_ok(), "{id}");
        }
        assert_eq!(
            validate_anchor_href("/#how-it-works"),
            Ok(SectionId::HowItWorks)
        );
        for href in ["/#pricing", "#hero", "/hero", "/#", "/#Hero", " /#hero"] {
            assert_eq!(
                validate_anchor_href(href),
                Err(ValidationError::InvalidAnchorHref),
                "{href}"
            );
        }
    }

    #[test]
    fn test_guards_accept_any_json() {
        assert!(is_anchor_href(&json!("/#faq")));
        assert!(!is_anchor_href(&json!("/#pricing")));
        assert!(!is_anchor_href(&json!(42)));
        assert!(!is_anchor_href(&Value::Null));
        assert!(!is_anchor_href(&json!({ "href": "/#faq" })));

        assert!(is_color_hex(&json!("#752E4F")));
        assert!(!is_color_hex(&json!("#75")));
        assert!(!is_color_hex(&json!(["#fff"])));
        assert!(!is_color_hex(&json!(true)));
    }

    #[test]
    fn test_guards_agree_with_validators() {
        for candidate in ["#fff", "#ffff", "#12345678", "#xyz", "/#cta", "/#nope", ""] {
            assert_eq!(
                is_color_hex(&json!(candidate)),
                validate_color_hex(candidate).is_ok()
            );
            assert_eq!(
                is_anchor_href(&json!(candidate)),
                validate_anchor_href(candidate).is_ok()
            );
        }
    }

    #[test]
    fn test_ranges_and_counts() {
        let opacity = Range::between(0.0, 1.0);
        assert_eq!(opacity.check(0.0), Ok(0.0));
        assert_eq!(opacity.check(1.0), Ok(1.0));
        assert_eq!(opacity.check(-0.1), Err(ValidationError::TooSmall { min: 0.0 }));
        assert_eq!(opacity.check(1.5), Err(ValidationError::TooLarge { max: 1.0 }));

        let items = Count::between(1, 6);
        assert!(items.check(1).is_ok());
        assert!(items.check(6).is_ok());
        assert_eq!(items.check(0), Err(ValidationError::TooFew { min: 1, actual: 0 }));
        assert_eq!(items.check(7), Err(ValidationError::TooMany { max: 6, actual: 7 }));
        assert!(Count::at_least(1).check(1000).is_ok());
    }

    #[test]
    fn test_field_path_display() {
        let path = FieldPath::root().key("features").key("items").index(2).key("title");
        assert_eq!(path.to_string(), "features.items[2].title");
        assert_eq!(FieldPath::root().to_string(), "(root)");
        assert!(FieldPath::root().is_root());
        assert!(!path.is_root());
        assert_eq!(FieldPath::root().index(0).to_string(), "[0]");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ValidationError::Required.category(), ErrorCategory::Missing);
        assert_eq!(
            ValidationError::TooLong { max: 1, actual: 2 }.category(),
            ErrorCategory::Bound
        );
        assert_eq!(
            ValidationError::TooFew { min: 3, actual: 2 }.category(),
            ErrorCategory::Cardinality
        );
        assert_eq!(ValidationError::InvalidAnchorHref.category(), ErrorCategory::Format);
        assert_eq!(
            ValidationError::InvalidType { expected: "string" }.category(),
            ErrorCategory::Type
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ValidationError::Required.to_string(), "Required");
        assert_eq!(
            ValidationError::TooLong { max: 40, actual: 41 }.to_string(),
            "Must be at most 40 characters (41 given)"
        );
        assert_eq!(
            ValidationError::NotOneOf {
                expected: &["primary", "secondary", "link"],
                actual: "ghost".to_string(),
            }
            .to_string(),
            "Expected one of primary, secondary, link; got 'ghost'"
        );
        assert_eq!(ValidationError::TooSmall { min: 1.0 }.to_string(), "Must be at least 1");
    }

    #[test]
    fn test_errors_grouping() {
        let mut errors = ValidationErrors::new();
        let email = FieldPath::root().key("email");
        errors.push(email.clone(), ValidationError::InvalidEmail);
        errors.push(FieldPath::root().key("name"), ValidationError::Required);
        errors.push(email, ValidationError::Required);

        assert_eq!(errors.len(), 3);
        assert_eq!(errors.for_field("email").len(), 2);
        assert_eq!(
            errors.by_field().get("name"),
            Some(&vec!["Required".to_string()])
        );
        assert_eq!(errors.messages()[0], "email: Invalid email address");
        assert!(errors.to_string().starts_with("3 validation issues: "));
    }

    #[test]
    fn test_issue_serializes_with_category() {
        let issue = Issue {
            path: FieldPath::root().key("teamSize"),
            error: ValidationError::TooSmall { min: 1.0 },
        };
        assert_eq!(
            serde_json::to_value(&issue).unwrap(),
            json!({ "path": "teamSize", "category": "bound", "message": "Must be at least 1" })
        );
    }
}
