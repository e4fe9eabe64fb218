use tracing::{debug, info, warn};

use super::form::{ContactForm, Field};
use super::notice::Notice;
use super::status::SubmissionStatus;
use crate::error::{ContactError, DeliveryError};
use crate::transport::Delivery;

/// Proof that a submission is in flight, carrying the form as it was when
/// the visitor pressed submit.
///
/// Only [`ContactSession::begin`] creates one and [`ContactSession::finish`]
/// consumes it, so each ticket settles exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct Submission {
    form: ContactForm,
}

impl Submission {
    /// The payload to deliver.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }
}

/// Result of one submit attempt, as seen by the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 2xx from the backend; the form was cleared.
    Sent,
    /// Rejected or undeliverable; the form was kept for a retry.
    Failed(DeliveryError),
    /// Nothing was sent (already in flight or form invalid).
    Refused(ContactError),
}

impl SubmitOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    /// Notice owed to the visitor. Refused attempts owe none.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            SubmitOutcome::Sent => Some(Notice::Sent),
            SubmitOutcome::Failed(_) => Some(Notice::Failed),
            SubmitOutcome::Refused(_) => None,
        }
    }
}

/// Form record plus submit status for one form instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSession {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }

    /// Set one field. Counts as a user interaction, so a settled outcome
    /// returns to `Idle`.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.update_field(field, value);
        self.status.reset();
    }

    /// Visitor dismissed the success/failure notice.
    pub fn acknowledge(&mut self) {
        self.status.reset();
    }

    /// Start a submission.
    ///
    /// Refused with [`ContactError::InFlight`] while another one is pending
    /// and with [`ContactError::Invalid`] when the form fails validation; in
    /// both cases the status is left as it was.
    pub fn begin(&mut self) -> Result<Submission, ContactError> {
        if self.status.is_submitting() {
            debug!("submit ignored: already in flight");
            return Err(ContactError::InFlight);
        }
        let issues = self.form.validate();
        if !issues.is_empty() {
            debug!(?issues, "submit refused: form incomplete");
            return Err(ContactError::Invalid(issues));
        }
        self.status.begin()?;
        debug!("submission started");
        Ok(Submission {
            form: self.form.clone(),
        })
    }

    /// Apply the delivery result of the ticket handed out by [`begin`].
    ///
    /// Success clears the form; failure leaves it exactly as the visitor
    /// left it. The in-flight flag is cleared either way.
    ///
    /// [`begin`]: ContactSession::begin
    pub fn finish(
        &mut self,
        _submission: Submission,
        result: Result<Delivery, DeliveryError>,
    ) -> SubmitOutcome {
        let delivered = result.is_ok();
        if let Err(err) = self.status.complete(delivered) {
            return SubmitOutcome::Refused(err);
        }
        match result {
            Ok(delivery) => {
                info!(status = delivery.status, "contact message delivered");
                self.form.clear();
                SubmitOutcome::Sent
            }
            Err(err) => {
                warn!(error = %err, "contact message not delivered");
                SubmitOutcome::Failed(err)
            }
        }
    }
}
