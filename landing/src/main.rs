// GoTech Solutions landing page (Leptos 0.8, client-side rendered)

mod sections;
mod transport;

use leptos::prelude::*;
use sections::*;
use studio::{Catalog, SiteConfig};

/// Backend base URL baked in at build time; unset means same-origin.
fn site_config() -> SiteConfig {
    let config = match option_env!("STUDIO_BACKEND_URL") {
        Some(url) if !url.trim().is_empty() => SiteConfig::new(url.trim()),
        _ => SiteConfig::same_origin(),
    };
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::error!("{e}; falling back to same-origin /api/contact");
            SiteConfig::same_origin()
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_context(Catalog::builtin());
    provide_context(site_config());

    view! {
        <Nav />
        <main>
            <Hero />
            <About />
            <Services />
            <Portfolio />
            <Testimonials />
            <Blog />
            <Contact />
        </main>
        <Footer />
    }
}
