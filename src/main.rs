use anyhow::Context;
use clap::Parser;
use tracing::info;

use keycloak_realm_import::cli::Cli;
use keycloak_realm_import::generate::generate;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        input = %cli.input.display(),
        "Starting keycloak-realm-import"
    );

    generate(&cli.input, &cli.output).with_context(|| {
        format!(
            "Failed to generate KeycloakRealmImport from '{}'",
            cli.input.display()
        )
    })?;

    Ok(())
}
