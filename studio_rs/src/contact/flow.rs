use std::cell::RefCell;

use super::form::{ContactForm, Field};
use super::notice::Notifier;
use super::session::{ContactSession, SubmitOutcome};
use super::status::SubmissionStatus;
use crate::transport::ContactTransport;

/// A contact form wired to a transport and a notification channel.
///
/// Runs on a single thread of control: the session sits in a `RefCell` and is
/// never borrowed across the network await, so a second [`submit`] polled
/// while the first is pending sees `Submitting` and is refused.
///
/// [`submit`]: ContactFlow::submit
pub struct ContactFlow<T, N> {
    session: RefCell<ContactSession>,
    transport: T,
    notifier: N,
}

impl<T: ContactTransport, N: Notifier> ContactFlow<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            session: RefCell::new(ContactSession::new()),
            transport,
            notifier,
        }
    }

    pub fn update_field(&self, field: Field, value: impl Into<String>) {
        self.session.borrow_mut().update_field(field, value);
    }

    /// Snapshot of the form record.
    pub fn form(&self) -> ContactForm {
        self.session.borrow().form().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.session.borrow().status()
    }

    pub fn is_submitting(&self) -> bool {
        self.session.borrow().is_submitting()
    }

    /// Visitor dismissed the notice.
    pub fn acknowledge(&self) {
        self.session.borrow_mut().acknowledge();
    }

    /// Send the form once.
    ///
    /// A refused attempt (in flight, or invalid form) sends nothing and
    /// notifies nothing. Otherwise exactly one request goes out and exactly
    /// one notice follows. No retry.
    pub async fn submit(&self) -> SubmitOutcome {
        let submission = match self.session.borrow_mut().begin() {
            Ok(submission) => submission,
            Err(err) => return SubmitOutcome::Refused(err),
        };

        let result = self.transport.deliver(submission.form()).await;

        let outcome = self.session.borrow_mut().finish(submission, result);
        if let Some(notice) = outcome.notice() {
            self.notifier.notify(notice);
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    use crate::contact::Notice;
    use crate::error::{ContactError, DeliveryError};
    use crate::transport::Delivery;

    /// Records every payload and answers with a scripted result.
    struct ScriptedTransport {
        sent: RefCell<Vec<String>>,
        reply: RefCell<Result<Delivery, DeliveryError>>,
    }

    impl ScriptedTransport {
        fn replying(reply: Result<Delivery, DeliveryError>) -> Self {
            Self {
                sent: RefCell::new(Vec::new()),
                reply: RefCell::new(reply),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.borrow().clone()
        }
    }

    impl ContactTransport for ScriptedTransport {
        async fn deliver(&self, form: &ContactForm) -> Result<Delivery, DeliveryError> {
            self.sent.borrow_mut().push(form.to_json().unwrap());
            // Yield once so concurrent submits interleave like a real request.
            tokio::task::yield_now().await;
            self.reply.borrow().clone()
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
        calls: Cell<usize>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: Notice) {
            self.calls.set(self.calls.get() + 1);
            self.notices.borrow_mut().push(notice);
        }
    }

    const JANE_JSON: &str =
        r#"{"name":"Jane","email":"jane@x.com","company":"","message":"Hi","service":"branding"}"#;

    fn fill<T: ContactTransport, N: Notifier>(flow: &ContactFlow<T, N>) {
        flow.update_field(Field::Name, "Jane");
        flow.update_field(Field::Email, "jane@x.com");
        flow.update_field(Field::Company, "");
        flow.update_field(Field::Message, "Hi");
        flow.update_field(Field::Service, "branding");
    }

    #[tokio::test]
    async fn success_posts_once_and_resets_form() {
        let transport = ScriptedTransport::replying(Ok(Delivery { status: 200 }));
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(&transport, &notifier);
        fill(&flow);

        let outcome = flow.submit().await;

        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(transport.sent(), vec![JANE_JSON]);
        assert_eq!(flow.form(), ContactForm::default());
        assert_eq!(*notifier.notices.borrow(), vec![Notice::Sent]);
        assert_eq!(flow.status(), SubmissionStatus::Succeeded);
    }

    #[tokio::test]
    async fn rejection_keeps_form_and_notifies_failure_once() {
        let rejected = DeliveryError::Rejected { status: 500 };
        let transport = ScriptedTransport::replying(Err(rejected.clone()));
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(&transport, &notifier);
        fill(&flow);
        let before = flow.form();

        let outcome = flow.submit().await;

        assert_eq!(outcome, SubmitOutcome::Failed(rejected));
        assert_eq!(flow.form(), before);
        assert_eq!(*notifier.notices.borrow(), vec![Notice::Failed]);
        assert!(!flow.is_submitting());
    }

    #[tokio::test]
    async fn transport_error_is_a_failure() {
        let refused = DeliveryError::Transport("connection refused".into());
        let transport = ScriptedTransport::replying(Err(refused));
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(&transport, &notifier);
        fill(&flow);
        let before = flow.form();

        assert!(matches!(flow.submit().await, SubmitOutcome::Failed(_)));
        assert_eq!(flow.form(), before);
        assert_eq!(notifier.calls.get(), 1);
    }

    #[tokio::test]
    async fn concurrent_submit_is_single_flight() {
        let transport = ScriptedTransport::replying(Ok(Delivery { status: 200 }));
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(&transport, &notifier);
        fill(&flow);

        let (first, second) = tokio::join!(flow.submit(), flow.submit());

        assert_eq!(first, SubmitOutcome::Sent);
        assert_eq!(second, SubmitOutcome::Refused(ContactError::InFlight));
        assert_eq!(transport.sent().len(), 1);
        assert_eq!(notifier.calls.get(), 1);
    }

    #[tokio::test]
    async fn invalid_form_sends_nothing() {
        let transport = ScriptedTransport::replying(Ok(Delivery { status: 200 }));
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(&transport, &notifier);
        flow.update_field(Field::Name, "Jane");

        let outcome = flow.submit().await;

        let refused = matches!(outcome, SubmitOutcome::Refused(ContactError::Invalid(_)));
        assert!(refused);
        assert!(transport.sent().is_empty());
        assert_eq!(notifier.calls.get(), 0);
        assert_eq!(flow.status(), SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn repeated_failures_are_idempotent() {
        let timeout = DeliveryError::Timeout(Duration::from_secs(15));
        let transport = ScriptedTransport::replying(Err(timeout.clone()));
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(&transport, &notifier);
        fill(&flow);
        let before = flow.form();
        let catalog_before = crate::catalog::Catalog::builtin();

        for _ in 0..3 {
            let outcome = flow.submit().await;
            assert_eq!(outcome, SubmitOutcome::Failed(timeout.clone()));
            assert_eq!(flow.form(), before);
        }

        assert_eq!(transport.sent().len(), 3);
        assert_eq!(*notifier.notices.borrow(), vec![Notice::Failed; 3]);
        assert_eq!(crate::catalog::Catalog::builtin(), catalog_before);
    }

    #[tokio::test]
    async fn retry_after_failure_can_succeed() {
        let rejected = DeliveryError::Rejected { status: 502 };
        let transport = ScriptedTransport::replying(Err(rejected));
        let notifier = RecordingNotifier::default();
        let flow = ContactFlow::new(&transport, &notifier);
        fill(&flow);

        assert!(!flow.submit().await.is_sent());
        *transport.reply.borrow_mut() = Ok(Delivery { status: 201 });
        assert!(flow.submit().await.is_sent());

        assert_eq!(transport.sent().len(), 2);
        assert_eq!(transport.sent()[0], transport.sent()[1]);
        let notices = notifier.notices.borrow().clone();
        assert_eq!(notices, vec![Notice::Failed, Notice::Sent]);
        flow.acknowledge();
        assert_eq!(flow.status(), SubmissionStatus::Idle);
    }
}
