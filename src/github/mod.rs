// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - Fetching a user's public profile and their repositories, concurrently
// - Coercing whatever GitHub returns into typed Profile / Repository records
// - Publishing a load state (idle -> pending -> ready) for the UI
//
// Rust concepts:
// - Modules: Organizing related functionality
// - Public API: What other parts of the app can use
// =============================================================================

mod fetch;
mod models;

// Re-export what the rest of the app needs
pub use fetch::{build_client, LoadState, PortfolioData, PortfolioLoader};
pub use models::{Profile, Repository};
