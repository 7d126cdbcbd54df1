// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! ConnectHealth command-line client.
//!
//! Signs in against the configured API and prints clients, plans or a
//! plan's exercises as JSON.

use clap::{Parser, Subcommand};
use connecthealth::{config::Config, models::exercise, navigation::Route, AppContext};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "connecthealth")]
#[command(version, about = "ConnectHealth trainer client", long_about = None)]
struct Cli {
    /// Account email
    #[arg(long, env = "CONNECTHEALTH_EMAIL")]
    email: String,

    /// Account password
    #[arg(long, env = "CONNECTHEALTH_PASSWORD", hide_env_values = true)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List clients
    Clients,
    /// List training plans
    Plans,
    /// List a plan's exercises in execution order
    Exercises {
        /// Plan id
        plan_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = Config::from_env()?;
    tracing::info!(api_url = %config.api_url, "Starting ConnectHealth client");

    let ctx = AppContext::new(config)?;
    let navigator = ctx.navigator(Route::SignIn);

    let auth = ctx.auth();
    auth.sign_in(&cli.email, &cli.password).await?;
    navigator.reconcile();
    tracing::info!(route = %navigator.current(), "Signed in");

    let output = match cli.command {
        Command::Clients => {
            navigator.navigate(Route::Clients);
            serde_json::to_string_pretty(&ctx.clients_facade().items().await?)?
        }
        Command::Plans => {
            navigator.navigate(Route::Plans);
            serde_json::to_string_pretty(&ctx.plans_facade().items().await?)?
        }
        Command::Exercises { plan_id } => {
            navigator.navigate(Route::Plans);
            let mut exercises = ctx.plans.get_exercises(&plan_id).await?;
            exercise::sort_by_order(&mut exercises);
            serde_json::to_string_pretty(&exercises)?
        }
    };
    println!("{}", output);

    auth.sign_out();
    navigator.reconcile();
    tracing::info!(route = %navigator.current(), "Signed out");
    Ok(())
}

/// Initialize logging on stderr; JSON when `LOG_FORMAT=json`.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("connecthealth=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json") {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
