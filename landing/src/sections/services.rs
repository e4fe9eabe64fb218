use leptos::prelude::*;
use studio::Catalog;

#[component]
pub fn Services() -> impl IntoView {
    let catalog = expect_context::<Catalog>();

    view! {
        <section id="services" class="services">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Our Services"</h2>
                    <p class="section-description">
                        "Comprehensive design solutions to help your brand communicate better and grow faster"
                    </p>
                </div>
                <div class="services-grid">
                    {catalog.services.iter().map(|service| {
                        view! {
                            <div class="service-card" id=service.slug>
                                <div class="service-icon">{service.icon}</div>
                                <h3 class="service-title">{service.title}</h3>
                                <p class="service-description">{service.description}</p>
                                <ul class="service-features">
                                    {service.features.iter().map(|&f| view! { <li>{f}</li> }).collect_view()}
                                </ul>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
