//! The landing page aggregate served at `/`

use serde::Serialize;
use serde_json::Value;

use super::choice::SectionId;
use super::input::{Fields, Schema};
use super::sections::{
    CtaSection, EchoSection, FaqSection, FeaturesSection, Footer, Hero, HowItWorksSection,
    MetricsSection, PlaybookSection,
};
use super::site::SiteConfig;
use super::validation::{FieldPath, ValidationErrors};

/// The only route the landing page is served from
pub const LANDING_ROUTE: &str = "/";

/// Every section of the single-page layout, in page order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub route: &'static str,
    pub hero: Hero,
    pub features: FeaturesSection,
    pub echo: EchoSection,
    pub playbook: PlaybookSection,
    pub metrics: MetricsSection,
    pub how_it_works: HowItWorksSection,
    pub cta: CtaSection,
    pub faq: FaqSection,
    pub footer: Footer,
    pub config: SiteConfig,
}

impl LandingPage {
    /// Section ids in the order they appear on the page
    pub fn section_order(&self) -> [SectionId; 9] {
        [
            self.hero.id,
            self.features.id,
            self.echo.id,
            self.playbook.id,
            self.metrics.id,
            self.how_it_works.id,
            self.cta.id,
            self.faq.id,
            self.footer.id,
        ]
    }
}

impl Schema for LandingPage {
    const NAME: &'static str = "LandingPage";

    fn validate_at(value: &Value, path: &FieldPath, issues: &mut ValidationErrors) -> Option<Self> {
        let fields = Fields::open(value, path, issues)?;
        let route = fields.literal_or("route", LANDING_ROUTE, issues);
        let hero = fields.nested::<Hero>("hero", issues);
        let features = fields.nested::<FeaturesSection>("features", issues);
        let echo = fields.nested::<EchoSection>("echo", issues);
        let playbook = fields.nested::<PlaybookSection>("playbook", issues);
        let metrics = fields.nested::<MetricsSection>("metrics", issues);
        let how_it_works = fields.nested::<HowItWorksSection>("howItWorks", issues);
        let cta = fields.nested::<CtaSection>("cta", issues);
        let faq = fields.nested::<FaqSection>("faq", issues);
        let footer = fields.nested::<Footer>("footer", issues);
        let config = fields.nested::<SiteConfig>("config", issues);
        fields.finish(issues)?;

        Some(Self {
            route,
            hero: hero?,
            features: features?,
            echo: echo?,
            playbook: playbook?,
            metrics: metrics?,
            how_it_works: how_it_works?,
            cta: cta?,
            faq: faq?,
            footer: footer?,
            config: config?,
        })
    }
}
