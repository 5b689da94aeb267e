//! Visitor-submitted forms
//!
//! A submission handler runs the matching validator before anything else and
//! answers with [`ValidationErrors::by_field`] when it fails.

use serde::Serialize;
use serde_json::Value;

use super::input::{Fields, Schema};
use super::validation::{FieldPath, Range, Text, ValidationErrors, validate_email};

/// Largest team a demo request may declare
pub const MAX_TEAM_SIZE: u32 = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsletterForm {
    pub name: String,
    /// Trimmed and lower-cased
    pub email: String,
}

impl Schema for NewsletterForm {
    const NAME: &'static str = "NewsletterForm";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let name = fields.text("name", Text::required().max(80), issues);
        let email = fields.checked("email", validate_email, issues);
        fields.finish(issues)?;

        Some(Self {
            name: name?,
            email: email?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequestForm {
    pub name: String,
    /// Trimmed and lower-cased
    pub email: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub agree_to_contact: bool,
}

impl Schema for DemoRequestForm {
    const NAME: &'static str = "DemoRequestForm";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let name = fields.text("name", Text::required().max(80), issues);
        let email = fields.checked("email", validate_email, issues);
        let company = fields.text("company", Text::required().max(120), issues);
        let role = fields.optional_text("role", Text::any().max(80), issues);
        let team_size = fields.optional_integer(
            "teamSize",
            Range::between(1.0, f64::from(MAX_TEAM_SIZE)),
            issues,
        );
        let message = fields.optional_text("message", Text::any().max(800), issues);
        let agree_to_contact = fields.flag_or("agreeToContact", true, issues);
        fields.finish(issues)?;

        Some(Self {
            name: name?,
            email: email?,
            company: company?,
            role,
            team_size,
            message,
            agree_to_contact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::assert_text_ceiling;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn demo(team_size: Value) -> Value {
        json!({
            "name": "Dana",
            "email": "dana@northwind.com",
            "company": "Northwind",
            "teamSize": team_size,
        })
    }

    #[test]
    fn test_newsletter_normalizes_email() {
        let form =
            NewsletterForm::parse(&json!({ "name": "Dana", "email": "  Dana@Northwind.COM " }))
                .unwrap();
        assert_eq!(form.email, "dana@northwind.com");
    }

    #[test]
    fn test_newsletter_field_errors() {
        let errors = NewsletterForm::parse(&json!({ "name": "", "email": "dana@" })).unwrap_err();
        let by_field = errors.by_field();
        assert_eq!(by_field["name"], vec!["Required"]);
        assert_eq!(by_field["email"], vec!["Invalid email address"]);
    }

    #[test]
    fn test_demo_request_team_size_bounds() {
        assert!(!DemoRequestForm::is_valid(&demo(json!(0))));
        assert!(DemoRequestForm::is_valid(&demo(json!(1))));
        assert!(DemoRequestForm::is_valid(&demo(json!(100_000))));
        assert!(!DemoRequestForm::is_valid(&demo(json!(100_001))));
        assert!(!DemoRequestForm::is_valid(&demo(json!(12.5))));
        assert!(!DemoRequestForm::is_valid(&demo(json!("12"))));
    }

    #[test]
    fn test_demo_request_defaults() {
        let form = DemoRequestForm::parse(&json!({
            "name": "Dana",
            "email": "DANA@northwind.com",
            "company": "Northwind",
        }))
        .unwrap();
        assert_eq!(
            form,
            DemoRequestForm {
                name: "Dana".to_string(),
                email: "dana@northwind.com".to_string(),
                company: "Northwind".to_string(),
                role: None,
                team_size: None,
                message: None,
                agree_to_contact: true,
            }
        );
    }

    #[test]
    fn test_demo_request_text_limits() {
        let mut input = demo(json!(25));
        input["message"] = json!("x".repeat(801));
        input["role"] = json!("x".repeat(81));
        input["company"] = json!("");
        let errors = DemoRequestForm::parse(&input).unwrap_err();
        let fields: Vec<String> = errors.by_field().into_keys().collect();
        assert_eq!(fields, vec!["company", "message", "role"]);
    }

    #[test]
    fn test_form_text_ceilings() {
        let newsletter = json!({ "name": "Dana", "email": "dana@northwind.com" });
        assert_text_ceiling::<NewsletterForm>(&newsletter, "name", 80);

        let request = demo(json!(25));
        assert_text_ceiling::<DemoRequestForm>(&request, "name", 80);
        assert_text_ceiling::<DemoRequestForm>(&request, "company", 120);
        assert_text_ceiling::<DemoRequestForm>(&request, "role", 80);
        assert_text_ceiling::<DemoRequestForm>(&request, "message", 800);
    }
}
