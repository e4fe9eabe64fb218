//! Command handlers.
//!
//! Catalog commands only read the injected [`Catalog`]; `contact` resolves the
//! site config and runs one [`ContactFlow`] submission.

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use tracing::{debug, info};

use super::output;
use super::{ContactArgs, OutputArgs, ProjectsArgs};
use crate::catalog::{Catalog, CategoryFilter};
use crate::config::{self, ConfigOverrides, FileConfig};
use crate::contact::{ConsoleNotifier, ContactFlow, Field, SubmitOutcome};
use crate::error::ContactError;
use crate::transport::HttpTransport;

pub fn categories(catalog: &Catalog, out: OutputArgs) -> anyhow::Result<ExitCode> {
    if out.json {
        output::print_json(catalog.categories)?;
    } else {
        for category in catalog.categories {
            println!("{}", output::category_line(category, false));
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn services(catalog: &Catalog, out: OutputArgs) -> anyhow::Result<ExitCode> {
    if out.json {
        output::print_json(catalog.services)?;
    } else {
        for service in catalog.services {
            println!("{}\n", output::service_block(service));
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn testimonials(catalog: &Catalog, out: OutputArgs) -> anyhow::Result<ExitCode> {
    if out.json {
        output::print_json(catalog.testimonials)?;
    } else {
        for testimonial in catalog.testimonials {
            println!("{}\n", output::testimonial_block(testimonial));
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn blog(catalog: &Catalog, out: OutputArgs) -> anyhow::Result<ExitCode> {
    if out.json {
        output::print_json(catalog.posts)?;
    } else {
        for post in catalog.posts {
            println!("{}\n", output::post_block(post));
        }
    }
    Ok(ExitCode::SUCCESS)
}

pub fn projects(catalog: &Catalog, args: &ProjectsArgs) -> anyhow::Result<ExitCode> {
    let filter = CategoryFilter::parse(&args.category);
    if !filter.is_known(catalog) {
        output::warn(&format!(
            "unknown category `{}` (see `studio categories`)",
            args.category
        ));
    }
    let view = catalog.filter_projects(&filter);
    let count = view.len();
    debug!(category = filter.id(), count, "filtered projects");

    if args.output.json {
        output::print_json(&view)?;
        return Ok(ExitCode::SUCCESS);
    }

    for category in catalog.categories {
        let selected = category.id == filter.id();
        println!("{}", output::category_line(category, selected));
    }
    println!();
    for project in &view {
        println!("{}\n", output::project_block(project));
    }
    Ok(ExitCode::SUCCESS)
}

pub async fn contact(
    catalog: &Catalog,
    args: &ContactArgs,
    config_path: &Path,
) -> anyhow::Result<ExitCode> {
    let file = FileConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let overrides = ConfigOverrides {
        backend_url: args.backend_url.clone(),
        timeout_ms: args.timeout_ms,
    };
    let site = config::resolve(&overrides, |key| std::env::var(key).ok(), file.as_ref())
        .context("resolving backend configuration")?;

    if !args.service.is_empty() && catalog.service(&args.service).is_none() {
        output::warn(&format!(
            "service `{}` is not offered (see `studio services`); sending anyway",
            args.service
        ));
    }

    let transport = HttpTransport::new(&site).context("building HTTP transport")?;
    info!(endpoint = transport.endpoint(), "sending contact message");

    let flow = ContactFlow::new(transport, ConsoleNotifier);
    flow.update_field(Field::Name, args.name.as_str());
    flow.update_field(Field::Email, args.email.as_str());
    flow.update_field(Field::Company, args.company.as_str());
    flow.update_field(Field::Message, args.message.as_str());
    flow.update_field(Field::Service, args.service.as_str());

    match flow.submit().await {
        SubmitOutcome::Sent => {
            output::success("delivered");
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Failed(err) => {
            output::error(&err.to_string());
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Refused(ContactError::Invalid(issues)) => {
            for issue in issues {
                output::error(&issue.to_string());
            }
            Ok(ExitCode::FAILURE)
        }
        SubmitOutcome::Refused(err) => {
            output::error(&err.to_string());
            Ok(ExitCode::FAILURE)
        }
    }
}
