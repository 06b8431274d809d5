// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing) and parse command-line arguments (clap)
// 2. `show`: load GitHub data, derive the view models, print them
// 3. `contact`: validate and "send" the contact form
// 4. Exit with proper code (0 = success, 1 = contact form rejected, 2 = error)
//
// Rust concepts used:
// - async/await: The two GitHub requests run concurrently
// - Result<T, E>: For error handling
// - match: Pattern matching to handle different subcommands
// =============================================================================

mod cli;      // src/cli.rs - command-line parsing
mod config;   // src/config.rs - load settings
mod contact;  // src/contact.rs - simulated contact form
mod view;     // src/view/ - view models
mod github;   // src/github/ - GitHub API access
mod render;   // src/render.rs - terminal output

use clap::Parser;
use cli::{Cli, Commands};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use anyhow::Result;

#[tokio::main]
async fn main() {
    init_tracing();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so `show --json` output on stdout stays machine-readable.
// RUST_LOG overrides the default level, e.g. RUST_LOG=portfolio_feed=debug
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_feed=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { feed, filter, show_all, json } => {
            let options = view::ViewOptions {
                technology: filter,
                cap: view::OtherProjectsCap::from_show_all(show_all),
            };
            handle_show(feed.into_config(), options, json).await
        }
        Commands::Contact { name, email, subject, message, delay_ms } => {
            let form = contact::ContactForm { name, email, subject, message };
            handle_contact(form, Duration::from_millis(delay_ms)).await
        }
    }
}

// Handles the 'show' subcommand
async fn handle_show(
    config: config::FeedConfig,
    options: view::ViewOptions,
    json: bool,
) -> Result<i32> {
    let catalog = view::ProjectCatalog::new(config.username.clone(), view::FEATURED_PROJECTS);

    let client = github::build_client()?;
    let loader = github::PortfolioLoader::new(client, config);
    let mut state = loader.subscribe();
    let load = tokio::spawn(loader.load());

    // Progress goes to stderr, keeping stdout for the report itself
    loop {
        let current = *state.borrow_and_update();
        match current {
            github::LoadState::Ready => break,
            github::LoadState::Pending => eprintln!("⏳ Loading portfolio..."),
            github::LoadState::Idle => {}
        }
        if state.changed().await.is_err() {
            // Loader finished (or panicked); the join below tells us which
            break;
        }
    }

    let data = load.await?;
    let portfolio = view::PortfolioView::build(&data, &catalog, &options);
    render::print_view(&portfolio, options.cap, json)?;

    Ok(0)
}

// Handles the 'contact' subcommand
async fn handle_contact(form: contact::ContactForm, delay: Duration) -> Result<i32> {
    eprintln!("📨 Sending message...");

    match contact::submit(&form, delay).await {
        Ok(receipt) => {
            println!("✅ Thanks, {}! {}", receipt.to_name, receipt.message);
            Ok(0)
        }
        Err(e) => {
            println!("❌ {}", e);
            Ok(1)
        }
    }
}
