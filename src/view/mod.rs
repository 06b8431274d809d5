// src/view/mod.rs
// =============================================================================
// This module turns raw GitHub data into presentation-ready view models.
//
// Submodules:
// - profile: Profile card with fallbacks
// - skills: Language distribution and colours
// - projects: Featured / other projects and the technology filter
//
// Everything here is a pure function of its inputs: no I/O, no caching.
// Re-running with the same repositories, filter and cap gives the same result.
// =============================================================================

mod profile;
mod projects;
mod skills;

use serde::Serialize;

use crate::github::{PortfolioData, Repository};

pub use profile::ProfileCard;
pub use projects::{
    filter_featured, technology_vocabulary, MergedProject, OtherProjectsCap, ProjectCatalog,
    ALL_TECHNOLOGIES, FEATURED_PROJECTS, MAX_FILTER_ENTRIES,
};
pub use skills::{language_color, language_stats, LanguageStat, TOP_LANGUAGES};

/// Inputs the user can change without refetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOptions {
    /// Selected technology, or "all"
    pub technology: String,
    pub cap: OtherProjectsCap,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            technology: ALL_TECHNOLOGIES.to_string(),
            cap: OtherProjectsCap::default(),
        }
    }
}

/// Every view model of the page, computed from one load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioView {
    pub profile: ProfileCard,
    pub languages: Vec<LanguageStat>,
    pub technologies: Vec<String>,
    pub selected_technology: String,
    pub featured: Vec<MergedProject>,
    pub other_projects: Vec<Repository>,
    pub show_more_available: bool,
}

impl PortfolioView {
    pub fn build(data: &PortfolioData, catalog: &ProjectCatalog, options: &ViewOptions) -> Self {
        let merged = catalog.merged_featured(&data.repositories);
        let other_projects: Vec<Repository> = catalog
            .other_projects(&data.repositories, options.cap)
            .into_iter()
            .cloned()
            .collect();

        Self {
            profile: ProfileCard::from_profile(data.profile.as_ref()),
            languages: language_stats(&data.repositories),
            technologies: technology_vocabulary(&data.repositories),
            selected_technology: options.technology.clone(),
            featured: filter_featured(&merged, &options.technology),
            show_more_available: OtherProjectsCap::toggle_available(other_projects.len()),
            other_projects,
        }
    }
}
