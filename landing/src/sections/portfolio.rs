use leptos::prelude::*;
use studio::{Catalog, CategoryFilter};

#[component]
pub fn Portfolio() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let (filter, set_filter) = signal(CategoryFilter::All);
    let visible = Memo::new(move |_| filter.with(|f| catalog.filter_projects(f)));

    view! {
        <section id="portfolio" class="portfolio">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Portfolio"</h2>
                    <p class="section-description">
                        "Showcasing recent projects across different design disciplines"
                    </p>
                </div>

                <div class="category-filter">
                    {catalog.categories.iter().map(|category| {
                        let id = category.id;
                        view! {
                            <button
                                class=move || {
                                    if filter.with(|f| f.id() == id) { "category-btn active" } else { "category-btn" }
                                }
                                on:click=move |_| set_filter.set(CategoryFilter::parse(id))
                            >
                                {category.name}
                            </button>
                        }
                    }).collect_view()}
                </div>

                <div class="portfolio-grid">
                    <For
                        each=move || visible.get()
                        key=|project| project.id
                        children=|project| {
                            view! {
                                <div class="project-card">
                                    <div class="project-image">
                                        <img src=project.image alt=project.title />
                                    </div>
                                    <div class="project-body">
                                        <h3 class="project-title">{project.title}</h3>
                                        <p class="project-description">{project.description}</p>
                                        <div class="project-tech">
                                            {project.technologies.iter().map(|&t| view! {
                                                <span class="tech-tag">{t}</span>
                                            }).collect_view()}
                                        </div>
                                        <div class="project-meta">
                                            <span class="project-client">"Client: " {project.client}</span>
                                            <span class="project-year">{project.year}</span>
                                        </div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
