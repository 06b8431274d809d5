// src/render.rs
// =============================================================================
// Prints a PortfolioView, either as a human-readable report or as JSON.
//
// This is the terminal stand-in for the page's sections: hero/about
// (profile card), skills (language bars), projects (filter bar, featured
// grid, other projects list).
// =============================================================================

use anyhow::Result;

use crate::view::{
    language_color, OtherProjectsCap, PortfolioView, ALL_TECHNOLOGIES, MAX_FILTER_ENTRIES,
    TOP_LANGUAGES,
};

// Width of a 100% language bar
const BAR_WIDTH: usize = 30;

pub fn print_view(view: &PortfolioView, cap: OtherProjectsCap, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(view)?);
    } else {
        print_report(view, cap);
    }
    Ok(())
}

fn print_report(view: &PortfolioView, cap: OtherProjectsCap) {
    let profile = &view.profile;
    println!("👤 {}", profile.name);
    println!("   {}", profile.avatar_url);
    println!("   {}+ projects", profile.public_repos);
    println!();

    println!("🛠️  Languages");
    if view.languages.is_empty() {
        println!("   (no language data)");
    }
    for stat in view.languages.iter().take(TOP_LANGUAGES) {
        println!(
            "   {:<18} {:<width$} {:>3}%  {}",
            stat.name,
            bar(stat.percentage),
            stat.percentage,
            language_color(&stat.name),
            width = BAR_WIDTH
        );
    }
    println!();

    let filters: Vec<String> = view
        .technologies
        .iter()
        .take(MAX_FILTER_ENTRIES)
        .map(|tech| {
            let label = if tech == ALL_TECHNOLOGIES { "All Projects" } else { tech.as_str() };
            if *tech == view.selected_technology {
                format!("[{label}]")
            } else {
                label.to_string()
            }
        })
        .collect();
    println!("🔎 Filter: {}", filters.join(" | "));
    println!();

    println!("⭐ Featured projects");
    if view.featured.is_empty() {
        println!("   No projects use {}", view.selected_technology);
    }
    for project in &view.featured {
        println!(
            "   {:<28} ★ {:<4} ⑂ {:<4} {}",
            project.display_name,
            project.stargazers_count,
            project.forks_count,
            project.tags.join(", ")
        );
        println!("      {}", project.summary());
        if let Some(url) = &project.html_url {
            println!("      {}", url);
        }
        if let Some(homepage) = &project.homepage {
            println!("      {}", homepage);
        }
    }
    println!();

    println!("📁 Other projects");
    if view.other_projects.is_empty() {
        println!("   (none)");
    }
    for repo in &view.other_projects {
        println!(
            "   {:<32} {:<16} ★ {}",
            repo.name,
            repo.language.as_deref().unwrap_or("-"),
            repo.stargazers_count
        );
    }
    if view.show_more_available {
        let hint = match cap {
            OtherProjectsCap::Collapsed => "rerun with --show-all",
            OtherProjectsCap::Expanded => "rerun without --show-all",
        };
        println!("   ({} to show up to {})", hint, cap.toggled().limit());
    }
}

// Horizontal bar proportional to a percentage
fn bar(percentage: u32) -> String {
    let filled = (percentage.min(100) as usize * BAR_WIDTH + 50) / 100;
    "█".repeat(filled)
}
