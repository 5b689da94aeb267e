//! MindArk Landing - content schema for the theMindArk.AI landing page
//!
//! Declares every section of the one-page site as a typed value and validates
//! untyped JSON content, configuration and form submissions into it, filling
//! documented defaults and reporting each failed rule with its field path.

pub mod core;
