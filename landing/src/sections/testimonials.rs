use leptos::prelude::*;
use studio::Catalog;

#[component]
pub fn Testimonials() -> impl IntoView {
    let catalog = expect_context::<Catalog>();

    view! {
        <section id="testimonials" class="testimonials">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What Clients Say"</h2>
                    <p class="section-description">"Trusted by businesses and individuals worldwide"</p>
                </div>
                <div class="testimonials-grid">
                    {catalog.testimonials.iter().map(|t| {
                        view! {
                            <div class="testimonial-card">
                                <div class="testimonial-header">
                                    <img class="testimonial-avatar" src=t.avatar alt=t.name />
                                    <div>
                                        <h4 class="testimonial-name">{t.name}</h4>
                                        <p class="testimonial-company">{t.company}</p>
                                    </div>
                                </div>
                                <p class="testimonial-text">{format!("\"{}\"", t.text)}</p>
                                <div class="testimonial-rating" title=format!("{} out of 5", t.rating)>
                                    {"⭐".repeat(usize::from(t.rating))}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
