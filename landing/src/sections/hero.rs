use leptos::prelude::*;
use studio::Catalog;

const HERO_BACKDROP: &str = "https://images.unsplash.com/photo-1718220216044-006f43e3a9b1";
const HERO_PORTRAIT: &str = "https://images.unsplash.com/photo-1744686909434-fd158fca1c35";

#[component]
pub fn Hero() -> impl IntoView {
    let profile = expect_context::<Catalog>().profile;
    let backdrop = format!("background-image: url('{HERO_BACKDROP}')");

    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop" style=backdrop></div>
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <h1 class="hero-title">
                            "Bringing Ideas to Life Through "
                            <span class="hero-title-accent">"Design"</span>
                        </h1>
                        <p class="hero-lead">
                            "Hi, I'm " <strong>{profile.founder}</strong> ", founder of " {profile.brand}
                        </p>
                        <p class="hero-description">
                            "With over 10 years of experience in tech and design, I help businesses and individuals "
                            "communicate better and grow faster through clean, user-friendly designs."
                        </p>
                        <div class="hero-actions">
                            <a href="#portfolio" class="btn btn-primary">"View My Work"</a>
                            <a href="#contact" class="btn btn-secondary">"Get In Touch"</a>
                        </div>
                    </div>
                    <div class="hero-visual">
                        <img src=HERO_PORTRAIT alt="Professional Designer" />
                    </div>
                </div>
            </div>
        </section>
    }
}
