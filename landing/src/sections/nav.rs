use leptos::prelude::*;
use studio::Catalog;

const LINKS: &[(&str, &str)] = &[
    ("#home", "Home"),
    ("#services", "Services"),
    ("#portfolio", "Portfolio"),
    ("#testimonials", "Testimonials"),
    ("#blog", "Blog"),
    ("#contact", "Contact"),
];

#[component]
pub fn Nav() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="#home" class="nav-brand">
                    <span class="nav-title">{catalog.profile.brand}</span>
                </a>
                <div class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                    {LINKS.iter().map(|&(href, label)| {
                        view! {
                            <a href=href class="nav-link" on:click=move |_| set_menu_open.set(false)>
                                {label}
                            </a>
                        }
                    }).collect_view()}
                </div>
                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
    }
}
