// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - show: load the GitHub data and print the portfolio view models
// - contact: run the (simulated) contact form
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Args, Parser, Subcommand};
use std::time::Duration;
use url::Url;

use crate::config::{
    FeedConfig, DEFAULT_API_BASE, DEFAULT_PER_PAGE, DEFAULT_READY_DELAY, DEFAULT_USERNAME,
};
use crate::contact::DEFAULT_SUBMIT_DELAY;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "portfolio-feed",
    version,
    about = "Loads a developer's GitHub profile and repositories and prints their portfolio",
    long_about = "portfolio-feed fetches a GitHub profile and its most recently updated repositories, \
                  then derives the portfolio sections: profile card, language stats, featured \
                  projects, other projects and the technology filter."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load GitHub data and print the portfolio
    ///
    /// Example: portfolio-feed show --filter Flutter --show-all
    Show {
        #[command(flatten)]
        feed: FeedArgs,

        /// Only show featured projects using this technology ("all" for every project)
        #[arg(long, default_value = "all")]
        filter: String,

        /// Show up to 12 other projects instead of 6
        #[arg(long)]
        show_all: bool,

        /// Output the view models as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fill in and submit the contact form (nothing is actually sent)
    ///
    /// Example: portfolio-feed contact --name Jo --email jo@example.com --subject Hi --message "Hello!"
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        subject: String,

        #[arg(long)]
        message: String,

        /// Simulated sending time in milliseconds
        #[arg(long, default_value_t = DEFAULT_SUBMIT_DELAY.as_millis() as u64)]
        delay_ms: u64,
    },
}

// Flags that control where and how the data is loaded
#[derive(Args, Debug)]
pub struct FeedArgs {
    /// GitHub username whose portfolio to load
    #[arg(long, default_value = DEFAULT_USERNAME)]
    pub username: String,

    /// GitHub API root (useful for GitHub Enterprise or a local mock)
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_base: Url,

    /// Number of repositories to request
    #[arg(long, default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Minimum time before the portfolio is shown, in milliseconds
    #[arg(long, default_value_t = DEFAULT_READY_DELAY.as_millis() as u64)]
    pub ready_delay_ms: u64,
}

impl FeedArgs {
    pub fn into_config(self) -> FeedConfig {
        FeedConfig {
            username: self.username,
            api_base: self.api_base,
            per_page: self.per_page,
            ready_delay: Duration::from_millis(self.ready_delay_ms),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[command(flatten)] do?
//    - It pulls the fields of FeedArgs into the Show subcommand
//    - The user still types --username, --api-base, ... directly
//    - We get a tidy struct to convert into FeedConfig
//
// 2. How does clap parse a Url?
//    - Any type implementing FromStr can be an argument
//    - url::Url implements FromStr, so invalid URLs are rejected by clap
//      with a helpful message before our code even runs
// -----------------------------------------------------------------------------
