use leptos::prelude::*;
use studio::Catalog;

#[component]
pub fn About() -> impl IntoView {
    let profile = expect_context::<Catalog>().profile;

    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"About " {profile.brand}</h2>
                    <p class="section-description">
                        {format!("Founded in {}, {} combines technical expertise with creative vision ", profile.founded, profile.brand)}
                        "to deliver design solutions that make your ideas clear, smart, and strong."
                    </p>
                </div>
                <div class="about-grid">
                    {profile.highlights.iter().map(|h| {
                        view! {
                            <div class="about-card">
                                <div class="about-icon">{h.icon}</div>
                                <h3 class="about-card-title">{h.title}</h3>
                                <p class="about-card-text">{h.text}</p>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
