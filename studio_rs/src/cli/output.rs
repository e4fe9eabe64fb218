//! Terminal rendering for catalog sections.

use colored::Colorize;
use serde::Serialize;

use crate::catalog::{BlogPost, Category, Project, ServiceOffering, Testimonial};

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn warn(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn category_line(category: &Category, active: bool) -> String {
    let marker = if active { "●" } else { "○" };
    format!("{} {:<18} {}", marker, category.id.bold(), category.name)
}

pub fn project_block(project: &Project) -> String {
    format!(
        "{} {}\n    {}\n    {} {} · {} · {}",
        format!("#{:<2}", project.id).dimmed(),
        project.title.bold(),
        project.description,
        "Client:".dimmed(),
        project.client,
        project.year,
        project.technologies.join(", ").cyan(),
    )
}

pub fn service_block(service: &ServiceOffering) -> String {
    format!(
        "{} {} ({})\n    {}\n    {}",
        service.icon,
        service.title.bold(),
        service.slug.dimmed(),
        service.description,
        service.features.join(" · ").cyan(),
    )
}

pub fn testimonial_block(testimonial: &Testimonial) -> String {
    format!(
        "{} {}, {}\n    \"{}\"\n    {}",
        stars(testimonial.rating).yellow(),
        testimonial.name.bold(),
        testimonial.company,
        testimonial.text,
        format!("{} · {}", testimonial.service, testimonial.date).dimmed(),
    )
}

pub fn post_block(post: &BlogPost) -> String {
    format!(
        "{}\n    {}\n    {}",
        post.title.bold(),
        post.excerpt,
        format!("{} · {}", post.date, post.read_time).dimmed(),
    )
}

/// Five-slot star row, e.g. `★★★★☆` for a rating of 4.
pub fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
