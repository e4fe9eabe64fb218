use leptos::prelude::*;
use studio::Catalog;

#[component]
pub fn Footer() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let profile = catalog.profile;

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <span class="footer-title">{profile.brand}</span>
                        <p class="footer-tagline">{profile.tagline}</p>
                        <p class="footer-small">
                            {format!("Founded by {} - 10+ years of design excellence.", profile.founder)}
                        </p>
                    </div>
                    <div class="footer-column">
                        <h4>"Services"</h4>
                        <ul>
                            {catalog.services.iter().map(|s| view! {
                                <li><a href=format!("#{}", s.slug) class="footer-link">{s.title}</a></li>
                            }).collect_view()}
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>"Company"</h4>
                        <ul>
                            <li><a href="#home" class="footer-link">"About"</a></li>
                            <li><a href="#portfolio" class="footer-link">"Portfolio"</a></li>
                            <li><a href="#blog" class="footer-link">"Blog"</a></li>
                            <li><a href="#contact" class="footer-link">"Contact"</a></li>
                        </ul>
                    </div>
                    <div class="footer-column">
                        <h4>"Connect"</h4>
                        <a href=format!("mailto:{}", profile.email) class="footer-link">{profile.email}</a>
                        <p class="footer-small">"Response within 24 hours"</p>
                        <p class="footer-small">{profile.values.join(" • ")}</p>
                    </div>
                </div>
                <p class="footer-copyright">
                    {format!("© 2024 {}. All rights reserved. | Founded by {}", profile.brand, profile.founder)}
                </p>
            </div>
        </footer>
    }
}
