//! PostGrid smoke run.
//!
//! Exercises each resource against the live API with the keys found in the
//! `POSTGRID_*` environment variables. Use test keys: every scenario creates
//! and then deletes real objects.

mod scenarios;

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use postgrid_sdk::{ClientConfig, PostGrid};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::scenarios::Tally;

/// Resource scenarios that can be run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    Contacts,
    Templates,
    Letters,
    Postcards,
    BankAccounts,
    Checks,
    Webhooks,
    Address,
    All,
}

#[derive(Debug, Parser)]
#[command(name = "postgrid-smoke")]
#[command(about = "Run create/get/list/delete scenarios against PostGrid")]
struct Cli {
    /// Scenario to run.
    #[arg(value_enum, default_value = "all")]
    scenario: Scenario,

    /// Local PDF uploaded with the letter instead of the sample URL.
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Callback URL for the webhook scenario.
    #[arg(long, default_value = "https://example.com/postgrid/callback")]
    callback_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,postgrid_sdk=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    tracing::info!("PostGrid base URL: {}", config.base_url);

    // no webhook registration here; the webhook scenario does its own
    let client = PostGrid::new(config)?;
    let mut tally = Tally::default();

    let all = cli.scenario == Scenario::All;
    if all || cli.scenario == Scenario::Contacts {
        scenarios::contacts(&client, &mut tally).await;
    }
    if all || cli.scenario == Scenario::Templates {
        scenarios::templates(&client, &mut tally).await;
    }
    if all || cli.scenario == Scenario::Letters {
        let pdf = match &cli.pdf {
            Some(path) => Some(tokio::fs::read(path).await?),
            None => None,
        };
        scenarios::letters(&client, &mut tally, pdf).await;
    }
    if all || cli.scenario == Scenario::Postcards {
        scenarios::postcards(&client, &mut tally).await;
    }
    if all || cli.scenario == Scenario::BankAccounts {
        scenarios::bank_accounts(&client, &mut tally).await;
    }
    if all || cli.scenario == Scenario::Checks {
        scenarios::checks(&client, &mut tally).await;
    }
    if all || cli.scenario == Scenario::Webhooks {
        scenarios::webhooks(&client, &mut tally, &cli.callback_url).await;
    }
    if all || cli.scenario == Scenario::Address {
        scenarios::address(&client, &mut tally).await;
    }

    tracing::info!(
        passed = tally.passed,
        failed = tally.failed,
        "smoke run finished"
    );
    if tally.failed > 0 {
        anyhow::bail!("{} step(s) failed", tally.failed);
    }
    Ok(())
}
