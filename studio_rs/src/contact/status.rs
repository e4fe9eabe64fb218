use serde::Serialize;

use crate::error::ContactError;

/// Where a form instance is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    /// `Succeeded` or `Failed`: an outcome the visitor has not moved past yet.
    pub fn is_settled(&self) -> bool {
        matches!(self, SubmissionStatus::Succeeded | SubmissionStatus::Failed)
    }

    /// Enter `Submitting`. Refused while already submitting.
    pub fn begin(&mut self) -> Result<(), ContactError> {
        if self.is_submitting() {
            return Err(ContactError::InFlight);
        }
        *self = SubmissionStatus::Submitting;
        Ok(())
    }

    /// Leave `Submitting` with the delivery outcome.
    pub fn complete(&mut self, delivered: bool) -> Result<(), ContactError> {
        if !self.is_submitting() {
            return Err(ContactError::NotSubmitting);
        }
        *self = if delivered {
            SubmissionStatus::Succeeded
        } else {
            SubmissionStatus::Failed
        };
        Ok(())
    }

    /// Settled outcomes fall back to `Idle` on the next interaction.
    /// `Submitting` is left alone.
    pub fn reset(&mut self) {
        if self.is_settled() {
            *self = SubmissionStatus::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_cycle() {
        let mut status = SubmissionStatus::default();
        status.begin().unwrap();
        assert_eq!(status, SubmissionStatus::Submitting);
        status.complete(true).unwrap();
        assert_eq!(status, SubmissionStatus::Succeeded);
        status.reset();
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[test]
    fn begin_twice_is_refused() {
        let mut status = SubmissionStatus::Idle;
        status.begin().unwrap();
        assert_eq!(status.begin(), Err(ContactError::InFlight));
        assert!(status.is_submitting());
    }

    #[test]
    fn complete_requires_submitting() {
        for mut status in [
            SubmissionStatus::Idle,
            SubmissionStatus::Succeeded,
            SubmissionStatus::Failed,
        ] {
            let before = status;
            assert_eq!(status.complete(true), Err(ContactError::NotSubmitting));
            assert_eq!(status, before);
        }
    }

    #[test]
    fn settled_states_may_begin_again() {
        let mut status = SubmissionStatus::Failed;
        status.begin().unwrap();
        status.complete(false).unwrap();
        assert_eq!(status, SubmissionStatus::Failed);
    }

    #[test]
    fn reset_does_not_cancel_in_flight() {
        let mut status = SubmissionStatus::Submitting;
        status.reset();
        assert!(status.is_submitting());
    }
}
