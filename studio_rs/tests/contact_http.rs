//! Contact flow over real HTTP against a mock backend.

mod common;

use std::cell::RefCell;
use std::time::Duration;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use studio::config::SiteConfig;
use studio::contact::{ContactFlow, ContactForm, Field, Notice, Notifier, SubmitOutcome};
use studio::error::DeliveryError;
use studio::transport::HttpTransport;

#[derive(Default)]
struct Notices(RefCell<Vec<Notice>>);

impl Notifier for Notices {
    fn notify(&self, notice: Notice) {
        self.0.borrow_mut().push(notice);
    }
}

fn fill<N: Notifier>(flow: &ContactFlow<HttpTransport, N>) {
    flow.update_field(Field::Name, "Jane");
    flow.update_field(Field::Email, "jane@x.com");
    flow.update_field(Field::Company, "");
    flow.update_field(Field::Message, "Hi");
    flow.update_field(Field::Service, "branding");
}

#[tokio::test]
async fn posts_json_once_and_clears_form_on_200() {
    let backend = common::spawn(StatusCode::OK, None).await;
    let transport = HttpTransport::new(&SiteConfig::new(&backend.base_url)).unwrap();
    let notices = Notices::default();
    let flow = ContactFlow::new(transport, &notices);
    fill(&flow);

    let outcome = flow.submit().await;

    assert_eq!(outcome, SubmitOutcome::Sent);
    let received = backend.received();
    assert_eq!(received.len(), 1);
    let content_type = received[0].content_type.as_deref();
    assert_eq!(content_type, Some("application/json"));
    assert_eq!(
        received[0].body,
        r#"{"name":"Jane","email":"jane@x.com","company":"","message":"Hi","service":"branding"}"#
    );
    assert_eq!(flow.form(), ContactForm::default());
    assert_eq!(*notices.0.borrow(), vec![Notice::Sent]);
}

#[tokio::test]
async fn base_url_with_trailing_slash_hits_same_endpoint() {
    let backend = common::spawn(StatusCode::CREATED, None).await;
    let config = SiteConfig::new(format!("{}/", backend.base_url));
    let transport = HttpTransport::new(&config).unwrap();
    let flow = ContactFlow::new(transport, Notices::default());
    fill(&flow);

    assert!(flow.submit().await.is_sent());
    assert_eq!(backend.received().len(), 1);
}

#[tokio::test]
async fn server_error_keeps_form() {
    let backend = common::spawn(StatusCode::INTERNAL_SERVER_ERROR, None).await;
    let transport = HttpTransport::new(&SiteConfig::new(&backend.base_url)).unwrap();
    let notices = Notices::default();
    let flow = ContactFlow::new(transport, &notices);
    fill(&flow);
    let before = flow.form();

    let outcome = flow.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(DeliveryError::Rejected { status: 500 })
    );
    assert_eq!(flow.form(), before);
    assert_eq!(*notices.0.borrow(), vec![Notice::Failed]);
    assert_eq!(backend.received().len(), 1);
}

#[tokio::test]
async fn client_error_is_treated_like_server_error() {
    let backend = common::spawn(StatusCode::UNPROCESSABLE_ENTITY, None).await;
    let transport = HttpTransport::new(&SiteConfig::new(&backend.base_url)).unwrap();
    let notices = Notices::default();
    let flow = ContactFlow::new(transport, &notices);
    fill(&flow);

    assert!(matches!(
        flow.submit().await,
        SubmitOutcome::Failed(DeliveryError::Rejected { status: 422 })
    ));
    assert_eq!(*notices.0.borrow(), vec![Notice::Failed]);
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    let transport = HttpTransport::new(&SiteConfig::new(common::closed_port_url())).unwrap();
    let notices = Notices::default();
    let flow = ContactFlow::new(transport, &notices);
    fill(&flow);
    let before = flow.form();

    let outcome = flow.submit().await;

    assert!(
        matches!(outcome, SubmitOutcome::Failed(DeliveryError::Transport(_))),
        "{outcome:?}"
    );
    assert_eq!(flow.form(), before);
    assert_eq!(*notices.0.borrow(), vec![Notice::Failed]);
    assert!(!flow.is_submitting());
}

#[tokio::test]
async fn stalled_backend_times_out() {
    let backend = common::spawn(StatusCode::OK, Some(Duration::from_secs(5))).await;
    let config = SiteConfig::new(&backend.base_url).with_timeout(Duration::from_millis(200));
    let transport = HttpTransport::new(&config).unwrap();
    let notices = Notices::default();
    let flow = ContactFlow::new(transport, &notices);
    fill(&flow);
    let before = flow.form();

    let outcome = flow.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Failed(DeliveryError::Timeout(Duration::from_millis(200)))
    );
    assert_eq!(flow.form(), before);
    assert_eq!(*notices.0.borrow(), vec![Notice::Failed]);
}

#[test]
fn same_origin_config_is_rejected_natively() {
    assert!(HttpTransport::new(&SiteConfig::same_origin()).is_err());
}
