use clap::Parser;
use sprint_sync::utils::{logger, validation::Validate};
use sprint_sync::{CliConfig, GithubClient, Manifest, SyncEngine};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sprint-sync");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let manifest = match Manifest::from_file(&config.manifest) {
        Ok(manifest) => manifest,
        Err(e) => {
            tracing::error!("Failed to load manifest {}: {}", config.manifest, e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = manifest.validate() {
        tracing::error!("Manifest validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if config.dry_run {
        tracing::info!("🔍 Dry-run mode: no changes will be made");
    }

    let client = match GithubClient::from_env(&config.api_url, config.dry_run) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let engine = SyncEngine::new(client, manifest, config.update, config.concurrency);
    match engine.run().await {
        Ok(report) => {
            tracing::info!("✅ Sync completed successfully!");
            println!(
                "✅ Applied {} milestones to {} repositories",
                report.milestones, report.repos
            );
        }
        Err(e) => {
            tracing::error!("❌ Sync failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }
}
