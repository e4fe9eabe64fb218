//! `studio` command-line interface.
//!
//! ```text
//! studio [--config studio.toml] [--log-level info] <command>
//!
//!   categories | services | testimonials | blog   print a catalog section
//!   projects [--category <id>]                    portfolio, filtered
//!   contact --name .. --email .. --message ..     send one contact message
//! ```
//!
//! Catalog commands accept `--json`. `contact` exits non-zero when the
//! message was not delivered.

mod handlers;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crate::catalog::Catalog;
use crate::config::CONFIG_FILE;

#[derive(Parser, Debug)]
#[command(name = "studio")]
#[command(about = "GoTech Solutions studio site: catalog and contact form from the terminal")]
#[command(version)]
pub struct Cli {
    /// Config file (backend URL, request timeout)
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Log level (trace, debug, info, warn, error); RUST_LOG wins when set
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List portfolio categories
    Categories(OutputArgs),
    /// List service offerings
    Services(OutputArgs),
    /// List client testimonials
    Testimonials(OutputArgs),
    /// List blog teasers
    Blog(OutputArgs),
    /// List portfolio projects, optionally filtered by category
    Projects(ProjectsArgs),
    /// Send a message through the contact form endpoint
    Contact(ContactArgs),
}

#[derive(Args, Debug, Clone, Copy)]
pub struct OutputArgs {
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Category id (`all` for every project)
    #[arg(short, long, default_value = crate::catalog::ALL_CATEGORIES)]
    pub category: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub message: String,

    #[arg(long, default_value = "")]
    pub company: String,

    /// Service slug (see `studio services`)
    #[arg(long, default_value = "")]
    pub service: String,

    /// Backend base URL, without /api/contact (else STUDIO_BACKEND_URL, then the config file)
    #[arg(long)]
    pub backend_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,
}

/// Install the stderr subscriber. `RUST_LOG` overrides `--log-level`.
pub fn init_tracing(log_level: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap_or_default()),
        )
        .init();
}

/// Parse argv, run the command and map the result to an exit code.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match dispatch(&cli, Catalog::builtin()).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("[studio][error] {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Route a parsed command to its handler.
pub async fn dispatch(cli: &Cli, catalog: Catalog) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Categories(out) => handlers::categories(&catalog, *out),
        Command::Services(out) => handlers::services(&catalog, *out),
        Command::Testimonials(out) => handlers::testimonials(&catalog, *out),
        Command::Blog(out) => handlers::blog(&catalog, *out),
        Command::Projects(args) => handlers::projects(&catalog, args),
        Command::Contact(args) => handlers::contact(&catalog, args, &cli.config).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_contact_command() {
        let cli = Cli::try_parse_from([
            "studio",
            "contact",
            "--name",
            "Jane",
            "--email",
            "jane@x.com",
            "--message",
            "Hi",
            "--service",
            "branding",
            "--backend-url",
            "http://localhost:8001",
        ])
        .unwrap();
        let Command::Contact(args) = cli.command else {
            panic!("expected contact command");
        };
        assert_eq!(args.name, "Jane");
        assert_eq!(args.company, "");
        assert_eq!(args.service, "branding");
        assert_eq!(args.backend_url.as_deref(), Some("http://localhost:8001"));
    }

    #[test]
    fn projects_default_to_all() {
        let cli = Cli::try_parse_from(["studio", "projects"]).unwrap();
        let Command::Projects(args) = cli.command else {
            panic!("expected projects command");
        };
        assert_eq!(args.category, "all");
        assert!(!args.output.json);
    }

    #[test]
    fn contact_requires_name_email_message() {
        assert!(Cli::try_parse_from(["studio", "contact", "--name", "Jane"]).is_err());
    }
}
