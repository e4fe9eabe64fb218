//! Contact section: info cards and the single-flight contact form.
//!
//! The whole form lives in one `RwSignal<ContactSession>`, so the
//! `Submitting` check and the transition into it happen in the same update.
//! A second click while a request is pending is refused by the session
//! before anything is posted.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use studio::contact::{FormIssue, Notice, Notifier};
use studio::transport::ContactTransport;
use studio::{Catalog, ContactError, ContactSession, Field, SiteConfig};

use crate::transport::GlooTransport;

/// `window.alert`: blocks until the visitor dismisses it.
struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, notice: Notice) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(notice.message());
        }
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let profile = catalog.profile;
    let transport = GlooTransport::new(&expect_context::<SiteConfig>());

    let session = RwSignal::new(ContactSession::new());
    let issues = RwSignal::new(Vec::<FormIssue>::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let submission = match session.try_update(|s| s.begin()) {
            Some(Ok(submission)) => submission,
            Some(Err(ContactError::Invalid(found))) => {
                issues.set(found);
                return;
            }
            Some(Err(err)) => {
                log::debug!("submit ignored: {err}");
                return;
            }
            None => return,
        };
        issues.set(Vec::new());

        let transport = transport.clone();
        spawn_local(async move {
            let result = transport.deliver(submission.form()).await;
            let Some(outcome) = session.try_update(|s| s.finish(submission, result)) else {
                return;
            };
            if let Some(notice) = outcome.notice() {
                AlertNotifier.notify(notice);
                session.update(|s| s.acknowledge());
            }
        });
    };

    let value_of = move |field: Field| move || session.with(|s| s.form().get(field).to_string());
    let set_field = move |field: Field| {
        move |ev: web_sys::Event| {
            let value = event_target_value(&ev);
            session.update(|s| s.update_field(field, value));
        }
    };
    let submitting = move || session.with(|s| s.is_submitting());

    view! {
        <section id="contact" class="contact">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Get In Touch"</h2>
                    <p class="section-description">
                        "Ready to bring your ideas to life? Let's discuss your project."
                    </p>
                </div>

                <div class="contact-grid">
                    <div class="contact-info">
                        <h3 class="contact-info-title">"Let's Work Together"</h3>
                        <p class="contact-info-text">
                            "Whether you need UX/UI design, branding, or copywriting services, "
                            "I'm here to help turn your vision into reality."
                        </p>
                        <InfoCard icon="📧" title="Email" text=profile.email />
                        <InfoCard icon="🕒" title="Response Time" text=profile.response_time />
                        <InfoCard icon="🎯" title="Expertise" text=profile.experience />
                    </div>

                    <form class="contact-form" on:submit=on_submit>
                        <div class="form-row">
                            <div class="form-field">
                                <label for="name">"Name *"</label>
                                <input
                                    type="text"
                                    id="name"
                                    name="name"
                                    required
                                    prop:value=value_of(Field::Name)
                                    on:input=set_field(Field::Name)
                                />
                            </div>
                            <div class="form-field">
                                <label for="email">"Email *"</label>
                                <input
                                    type="email"
                                    id="email"
                                    name="email"
                                    required
                                    prop:value=value_of(Field::Email)
                                    on:input=set_field(Field::Email)
                                />
                            </div>
                        </div>

                        <div class="form-row">
                            <div class="form-field">
                                <label for="company">"Company"</label>
                                <input
                                    type="text"
                                    id="company"
                                    name="company"
                                    prop:value=value_of(Field::Company)
                                    on:input=set_field(Field::Company)
                                />
                            </div>
                            <div class="form-field">
                                <label for="service">"Service Needed"</label>
                                <select
                                    id="service"
                                    name="service"
                                    prop:value=value_of(Field::Service)
                                    on:change=set_field(Field::Service)
                                >
                                    <option value="">"Select a service"</option>
                                    {catalog.services.iter().map(|s| view! {
                                        <option value=s.slug>{s.title}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>

                        <div class="form-field">
                            <label for="message">"Project Details *"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="4"
                                required
                                placeholder="Tell me about your project..."
                                prop:value=value_of(Field::Message)
                                on:input=set_field(Field::Message)
                            ></textarea>
                        </div>

                        <Show when=move || issues.with(|i| !i.is_empty())>
                            <ul class="form-issues">
                                {move || issues.get().into_iter().map(|issue| view! {
                                    <li>{issue.to_string()}</li>
                                }).collect_view()}
                            </ul>
                        </Show>

                        <button
                            type="submit"
                            class=move || if submitting() { "btn btn-primary btn-block disabled" } else { "btn btn-primary btn-block" }
                            disabled=submitting
                        >
                            {move || if submitting() { "Sending..." } else { "Send Message" }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    view! {
        <div class="info-card">
            <div class="info-icon">{icon}</div>
            <div>
                <h4 class="info-title">{title}</h4>
                <p class="info-text">{text}</p>
            </div>
        </div>
    }
}
