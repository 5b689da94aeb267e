//! Closed string enums used across the content model

use super::validation::ValidationError;

/// A fieldless enum whose variants are written as fixed strings
pub trait Choice: Copy + Sized + 'static {
    /// Every accepted spelling, in declaration order
    const NAMES: &'static [&'static str];

    fn as_str(&self) -> &'static str;

    fn from_name(name: &str) -> Option<Self>;

    /// Like [`Choice::from_name`] but reports the accepted set on failure
    fn parse_name(name: &str) -> Result<Self, ValidationError> {
        Self::from_name(name).ok_or_else(|| ValidationError::NotOneOf {
            expected: Self::NAMES,
            actual: name.to_string(),
        })
    }
}

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl Choice for $name {
            const NAMES: &'static [&'static str] = &[$($text),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as Choice>::parse_name(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

choice! {
    /// Identifier of one landing page section
    pub enum SectionId {
        Hero => "hero",
        Features => "features",
        Echo => "echo",
        Playbook => "playbook",
        Metrics => "metrics",
        HowItWorks => "how-it-works",
        Cta => "cta",
        Faq => "faq",
        Footer => "footer",
    }
}

impl SectionId {
    /// In-page link to this section, `/#<id>`
    pub fn anchor_href(&self) -> String {
        format!("{}{}", super::validation::ANCHOR_PREFIX, self.as_str())
    }
}

choice! {
    #[derive(Default)]
    pub enum CtaStyle {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Link => "link",
    }
}

choice! {
    #[derive(Default)]
    pub enum VideoType {
        #[default]
        Mp4 => "mp4",
        Webm => "webm",
    }
}

choice! {
    /// Brand motif drawn around the hero container
    #[derive(Default)]
    pub enum MotifType {
        #[default]
        SquareWithCircle => "square-with-circle",
    }
}

choice! {
    /// Easing curve name handed to the metric counter
    #[derive(Default)]
    pub enum Easing {
        Linear => "linear",
        EaseIn => "easeIn",
        #[default]
        EaseOut => "easeOut",
        EaseInOut => "easeInOut",
    }
}

choice! {
    #[derive(Default)]
    pub enum GraphBackground {
        #[default]
        GlassDark => "glass-dark",
        SolidDark => "solid-dark",
    }
}

choice! {
    /// Fixed topic headings of a generated onboarding playbook
    pub enum PlaybookHeading {
        RoleOverview => "Role Overview",
        CoreResponsibilities => "Core Responsibilities",
        Routines => "Daily/Weekly/Monthly Routines",
        SystemsAndAccess => "Key Systems and Access",
        ProcessesAndSops => "Processes and SOPs",
        Stakeholders => "Stakeholders and Communication",
        FaqsAndTroubleshooting => "FAQs and Troubleshooting",
    }
}

choice! {
    pub enum SocialNetwork {
        X => "x",
        Linkedin => "linkedin",
        Github => "github",
        Website => "website",
        Youtube => "youtube",
        Facebook => "facebook",
        Instagram => "instagram",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ids_are_closed() {
        assert_eq!(SectionId::NAMES.len(), 9);
        for name in SectionId::NAMES {
            let id = SectionId::from_name(name).unwrap();
            assert_eq!(id.as_str(), *name);
        }
        assert_eq!(SectionId::from_name("pricing"), None);
        assert_eq!(SectionId::from_name("Hero"), None);
    }

    #[test]
    fn test_anchor_href() {
        assert_eq!(SectionId::HowItWorks.anchor_href(), "/#how-it-works");
        assert_eq!(SectionId::Faq.to_string(), "faq");
    }

    #[test]
    fn test_parse_name_reports_expected_set() {
        let err = "ghost".parse::<CtaStyle>().unwrap_err();
        assert_eq!(
            err,
            ValidationError::NotOneOf {
                expected: &["primary", "secondary", "link"],
                actual: "ghost".to_string(),
            }
        );
        assert_eq!("link".parse::<CtaStyle>(), Ok(CtaStyle::Link));
    }

    #[test]
    fn test_defaults() {
        assert_eq!(CtaStyle::default(), CtaStyle::Primary);
        assert_eq!(VideoType::default(), VideoType::Mp4);
        assert_eq!(Easing::default(), Easing::EaseOut);
        assert_eq!(GraphBackground::default(), GraphBackground::GlassDark);
        assert_eq!(MotifType::default().as_str(), "square-with-circle");
    }

    #[test]
    fn test_playbook_headings() {
        assert_eq!(PlaybookHeading::NAMES.len(), 7);
        assert_eq!(
            PlaybookHeading::from_name("Role Overview"),
            Some(PlaybookHeading::RoleOverview)
        );
        assert_eq!(PlaybookHeading::from_name("Random Heading"), None);
    }

    #[test]
    fn test_serializes_as_string() {
        assert_eq!(
            serde_json::to_value(SocialNetwork::Linkedin).unwrap(),
            serde_json::json!("linkedin")
        );
        assert_eq!(
            serde_json::to_value(Easing::EaseInOut).unwrap(),
            serde_json::json!("easeInOut")
        );
    }
}
