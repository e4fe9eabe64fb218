//! # studio
//!
//! Shared core of the **GoTech Solutions** studio site: the read-only content
//! catalog, the portfolio category filter and the contact submission flow.
//!
//! The same library backs two surfaces:
//!
//! - the Leptos single-page site in `landing/` (wasm, built without default
//!   features), which renders the [`catalog`] and drives a
//!   [`contact::ContactSession`] through a browser transport;
//! - the `studio` binary (feature `cli`), which prints catalog sections and
//!   sends contact messages through [`transport::HttpTransport`].
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust
//! use studio::catalog::{Catalog, CategoryFilter};
//!
//! let catalog = Catalog::builtin();
//! let branding = catalog.filter_projects(&CategoryFilter::parse("branding"));
//! assert!(branding.iter().all(|p| p.category == "branding"));
//! ```
//!
//! ## Contact Flow
//!
//! ```rust,no_run
//! # async fn run() {
//! use studio::config::SiteConfig;
//! use studio::contact::{ContactFlow, Field, ConsoleNotifier};
//! use studio::transport::HttpTransport;
//!
//! let config = SiteConfig::new("https://api.gotech.solutions");
//! let transport = HttpTransport::new(&config).expect("client");
//! let flow = ContactFlow::new(transport, ConsoleNotifier);
//! flow.update_field(Field::Name, "Jane");
//! flow.update_field(Field::Email, "jane@x.com");
//! flow.update_field(Field::Message, "Hi");
//! let outcome = flow.submit().await;
//! # let _ = outcome;
//! # }
//! ```

// ============================================================================
// Core Modules
// ============================================================================

/// Static display content: projects, categories, services, testimonials,
/// blog teasers and the studio profile.
pub mod catalog;

/// Backend location and request timeout.
pub mod config;

/// Contact form record, submission state machine and the async flow.
pub mod contact;

/// Error types shared by the contact flow and configuration.
pub mod error;

/// Outbound delivery of the contact form.
pub mod transport;

/// CLI argument parsing and command handlers for the `studio` binary.
#[cfg(feature = "cli")]
pub mod cli;

pub use catalog::{Catalog, CategoryFilter};
pub use config::SiteConfig;
pub use contact::{ContactFlow, ContactForm, ContactSession, Field, SubmissionStatus};
pub use error::{ConfigError, ContactError, DeliveryError};
