//! congreso-import CLI
//!
//! Bulk attendee registration for a conference event: reads an upload file,
//! reconciles every row against the conference API and the identity
//! provider, and writes a per-row outcome report.

use anyhow::Context;
use clap::{Parser, Subcommand};
use congreso_client::{ClientConfig, FirebaseIdentity};
use congreso_import::{BulkImporter, ImportConfig, ingest};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "congreso-import", about = "Bulk attendee upload for congreso events")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Process an upload file and write the outcome report
    Run {
        /// Upload file (CSV with the template headers)
        file: PathBuf,

        /// Report output path
        #[arg(long, default_value = "bulk_attendees_report.csv")]
        report: PathBuf,
    },
    /// Write a headers-only upload template
    Template {
        /// Template output path
        #[arg(long, default_value = "usuarios_template.csv")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "congreso_import=info,congreso_client=info".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    match Cli::parse().command {
        Command::Template { out } => {
            ingest::write_template(&out)
                .with_context(|| format!("writing template to {}", out.display()))?;
            info!(path = %out.display(), "template written");
        }
        Command::Run { file, report } => {
            let config = ImportConfig::from_env();

            let client = ClientConfig::new(&config.api_base_url);
            let client = match &config.api_token {
                Some(token) => client.with_token(token),
                None => client,
            }
            .build()?;
            let identity =
                FirebaseIdentity::with_endpoint(&config.identity_signup_url, &config.identity_api_key)?;

            let rows = ingest::read_rows(&file)
                .with_context(|| format!("reading upload file {}", file.display()))?;
            info!(total = rows.len(), file = %file.display(), "upload file loaded");

            let importer =
                BulkImporter::new(client.clone(), identity, client, config.options());
            let outcome = importer.run(rows).await;

            ingest::write_report(&report, &outcome)
                .with_context(|| format!("writing report to {}", report.display()))?;
            info!(
                processed = outcome.processed,
                errors = outcome.errors,
                report = %report.display(),
                "import finished"
            );
        }
    }

    Ok(())
}
