//! Contact form submission.
//!
//! Layers, bottom-up:
//!
//! - [`ContactForm`]: the five text fields backing the form inputs.
//! - [`SubmissionStatus`]: `idle → submitting → {succeeded, failed} → idle`.
//! - [`ContactSession`]: form + status; hands out a [`Submission`] ticket on
//!   `begin` and applies the delivery result on `finish`. This is the
//!   single-flight guard.
//! - [`ContactFlow`]: session + transport + notifier, for callers that just
//!   want `submit().await`.
//!
//! The Leptos page drives [`ContactSession`] directly from signals; the CLI
//! and the tests go through [`ContactFlow`].

mod flow;
mod form;
mod notice;
mod session;
mod status;

pub use flow::ContactFlow;
pub use form::{ContactForm, Field, FormIssue, UnknownField};
pub use notice::{ConsoleNotifier, Notice, Notifier};
pub use session::{ContactSession, Submission, SubmitOutcome};
pub use status::SubmissionStatus;
