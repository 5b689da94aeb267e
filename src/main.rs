use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use mindark_landing::core::config::Config;
use mindark_landing::core::{
    CtaSection, DemoRequestForm, EchoSection, FaqSection, FeaturesSection, Footer, Hero,
    HowItWorksSection, LandingPage, MetricsSection, Nav, NewsletterForm, PlaybookSection, Schema,
    SiteConfig, ValidationErrors, content,
};
use serde::Serialize;
use serde_json::Value;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "mindark-content")]
#[command(about = "theMindArk.AI landing page content checker", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a content document and print it with defaults filled in.
    Validate {
        /// Which schema the document follows
        #[arg(short, long, value_enum, default_value_t = ContentKind::Landing)]
        kind: ContentKind,

        /// JSON document to check (defaults to CONTENT_PATH)
        path: Option<PathBuf>,
    },
    /// Print the shipped landing page copy in canonical form.
    Defaults,
    /// Print the document head tags for a landing page document.
    Head {
        /// JSON document to read (defaults to the shipped copy)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ContentKind {
    Landing,
    SiteConfig,
    Hero,
    Features,
    Echo,
    Playbook,
    Metrics,
    HowItWorks,
    Cta,
    Faq,
    Footer,
    Nav,
    Newsletter,
    DemoRequest,
}

impl ContentKind {
    fn validate(self, document: &Value) -> Result<Outcome> {
        match self {
            ContentKind::Landing => validate::<LandingPage>(document),
            ContentKind::SiteConfig => validate::<SiteConfig>(document),
            ContentKind::Hero => validate::<Hero>(document),
            ContentKind::Features => validate::<FeaturesSection>(document),
            ContentKind::Echo => validate::<EchoSection>(document),
            ContentKind::Playbook => validate::<PlaybookSection>(document),
            ContentKind::Metrics => validate::<MetricsSection>(document),
            ContentKind::HowItWorks => validate::<HowItWorksSection>(document),
            ContentKind::Cta => validate::<CtaSection>(document),
            ContentKind::Faq => validate::<FaqSection>(document),
            ContentKind::Footer => validate::<Footer>(document),
            ContentKind::Nav => validate::<Nav>(document),
            ContentKind::Newsletter => validate::<NewsletterForm>(document),
            ContentKind::DemoRequest => validate::<DemoRequestForm>(document),
        }
    }
}

/// What `validate` found in one document
#[derive(Debug)]
enum Outcome {
    /// Canonical form with every default filled in
    Valid(Value),
    Invalid {
        schema: &'static str,
        errors: ValidationErrors,
    },
}

impl Outcome {
    /// Prints the canonical form to stdout or every issue to stderr
    fn report(&self) -> Result<ExitCode> {
        match self {
            Outcome::Valid(canonical) => {
                println!("{}", serde_json::to_string_pretty(canonical)?);
                Ok(ExitCode::SUCCESS)
            }
            Outcome::Invalid { schema, errors } => {
                eprintln!("{} is invalid ({} issue(s)):", schema, errors.len());
                for issue in errors {
                    eprintln!("  {}", issue);
                }
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

fn validate<T: Schema + Serialize>(document: &Value) -> Result<Outcome> {
    match T::parse(document) {
        Ok(value) => Ok(Outcome::Valid(serde_json::to_value(&value)?)),
        Err(errors) => Ok(Outcome::Invalid {
            schema: T::NAME,
            errors,
        }),
    }
}

fn read_document(path: &Path) -> Result<Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path.display()))
}

fn main() -> Result<ExitCode> {
    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    // Initialize tracing on stderr so stdout carries only documents
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::from_env();
    tracing::info!(
        "Config loaded: content_path={}, site_origin={}",
        config.has_content_path(),
        config.has_site_origin()
    );

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Validate { kind, path } => {
            let Some(path) = path.or_else(|| config.content_path.clone()) else {
                bail!("no document given and CONTENT_PATH is not set");
            };
            let document = read_document(&path)?;
            tracing::debug!(path = %path.display(), ?kind, "validating document");
            kind.validate(&document)?.report()
        }
        Commands::Defaults => {
            let page = content::landing_page()?;
            println!("{}", serde_json::to_string_pretty(&page)?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Head { path } => {
            let document = match path {
                Some(path) => read_document(&path)?,
                None => content::landing_page_document(),
            };
            match LandingPage::parse(&document) {
                Ok(page) => {
                    let tags = page.head_tags(config.site_origin());
                    println!("{}", serde_json::to_string_pretty(&tags)?);
                    Ok(ExitCode::SUCCESS)
                }
                Err(errors) => {
                    eprintln!("{}", errors);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}
