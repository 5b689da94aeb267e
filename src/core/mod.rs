//! Content model and validation for the landing page

pub mod choice;
#[cfg(feature = "cli")]
pub mod config;
pub mod content;
pub mod forms;
pub mod head;
pub mod input;
pub mod link;
pub mod media;
pub mod page;
pub mod sections;
pub mod site;
pub mod validation;

pub use choice::*;
pub use forms::{DemoRequestForm, NewsletterForm};
pub use head::HeadTag;
pub use input::{Fields, Schema};
pub use link::LinkHref;
pub use media::{Cta, VideoSource};
pub use page::LandingPage;
pub use sections::*;
pub use site::{Nav, NavItem, SiteConfig, SiteMeta, SocialLink};
pub use validation::{
    ErrorCategory, FieldPath, Issue, ValidationError, ValidationErrors, is_anchor_href,
    is_color_hex,
};
