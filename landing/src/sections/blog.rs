use leptos::prelude::*;
use studio::Catalog;

#[component]
pub fn Blog() -> impl IntoView {
    let catalog = expect_context::<Catalog>();

    view! {
        <section id="blog" class="blog">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Latest Articles"</h2>
                    <p class="section-description">
                        "Insights on design, business growth, and industry trends"
                    </p>
                </div>
                <div class="blog-grid">
                    {catalog.posts.iter().map(|post| {
                        view! {
                            <article class="blog-card">
                                <div class="blog-image">
                                    <img src=post.image alt=post.title />
                                </div>
                                <div class="blog-body">
                                    <div class="blog-meta">
                                        <span>{post.display_date()}</span>
                                        <span>{post.read_time}</span>
                                    </div>
                                    <h3 class="blog-title">{post.title}</h3>
                                    <p class="blog-excerpt">{post.excerpt}</p>
                                    <span class="blog-cta">
                                        "Read More"
                                        <span class="arrow">"→"</span>
                                    </span>
                                </div>
                            </article>
                        }
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
