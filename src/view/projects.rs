// src/view/projects.rs
// =============================================================================
// Project view models: featured projects, other projects, technology filter.
//
// Featured projects are hand-written entries (FEATURED_PROJECTS below). Live
// GitHub data is joined onto them by repository name:
// - stars, forks, URLs, live description and language come from GitHub
// - display name, curated description, image and tags always come from the
//   curated entry
// - a curated entry with no matching repository is still shown, with zero
//   stars/forks and no URLs
//
// "Other projects" are the remaining repositories in GitHub's order (most
// recently updated first), capped at 6, or 12 once the user asks for more.
//
// Rust concepts:
// - &'static data: Curated entries compiled into the binary
// - Copy enums: Small value types (the show-more toggle) passed by value
// =============================================================================

use serde::Serialize;

use crate::github::Repository;

/// Synthetic technology that matches every project.
pub const ALL_TECHNOLOGIES: &str = "all";

/// The filter bar shows this many vocabulary entries at most.
pub const MAX_FILTER_ENTRIES: usize = 8;

/// Shown when neither a curated nor a live description exists.
pub const NO_DESCRIPTION: &str = "No description available";

/// A hand-written showcase entry for one repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProjectDescriptor {
    /// Must equal the GitHub repository name to pick up live data
    pub name: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
}

/// The curated showcase, in display order.
pub const FEATURED_PROJECTS: &[FeaturedProjectDescriptor] = &[
    FeaturedProjectDescriptor {
        name: "SafeRide-Connect-React-",
        display_name: "SafeRide Connect",
        description: "A comprehensive ride-sharing platform built with React and TypeScript. \
                      Features real-time tracking, secure payments, and driver-passenger matching.",
        image: "https://images.unsplash.com/photo-1449965408869-eaa3f722e40d?w=800",
        tags: &["React", "TypeScript", "Node.js", "MongoDB"],
    },
    FeaturedProjectDescriptor {
        name: "Flutter-Chat-App",
        display_name: "Flutter Chat App",
        description: "Real-time messaging application built with Flutter and Firebase. \
                      Supports text, images, voice messages, and video calls.",
        image: "https://images.unsplash.com/photo-1611746872915-64382b5c76da?w=800",
        tags: &["Flutter", "Dart", "Firebase", "WebRTC"],
    },
    FeaturedProjectDescriptor {
        name: "ML-Model-Trainer-Flutter-App",
        display_name: "ML Model Trainer",
        description: "Mobile app for training and deploying machine learning models. \
                      Includes image classification, text analysis, and custom model support.",
        image: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800",
        tags: &["Flutter", "TensorFlow", "Python", "ML"],
    },
    FeaturedProjectDescriptor {
        name: "Safe-Ride-Connect",
        display_name: "Safe Ride Connect Mobile",
        description: "Flutter-based mobile application for the SafeRide platform \
                      with native performance and beautiful UI.",
        image: "https://images.unsplash.com/photo-1557862921-37829c790f19?w=800",
        tags: &["Flutter", "Dart", "Firebase", "Maps"],
    },
    FeaturedProjectDescriptor {
        name: "online-classroom-management",
        display_name: "Online Classroom",
        description: "Complete learning management system with course creation, \
                      student tracking, assignments, and video conferencing.",
        image: "https://images.unsplash.com/photo-1501504905252-473c47e087f8?w=800",
        tags: &["PHP", "MySQL", "JavaScript", "Bootstrap"],
    },
    FeaturedProjectDescriptor {
        name: "GymManagementSystem_C_Sharp",
        display_name: "Gym Management System",
        description: "Desktop application for gym management with member tracking, \
                      payment processing, and workout planning.",
        image: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?w=800",
        tags: &["C#", ".NET", "SQL Server", "WinForms"],
    },
];

/// A curated entry with whatever live data GitHub had for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedProject {
    pub name: String,
    // curated
    pub display_name: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,
    // live (absent / zero without a matching repository)
    pub live_description: Option<String>,
    pub language: Option<String>,
    pub html_url: Option<String>,
    pub homepage: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
}

impl MergedProject {
    // Joins one curated entry with its repository, if any
    fn from_parts(descriptor: &FeaturedProjectDescriptor, live: Option<&Repository>) -> Self {
        Self {
            name: descriptor.name.to_string(),
            display_name: descriptor.display_name.to_string(),
            description: descriptor.description.to_string(),
            image: descriptor.image.to_string(),
            tags: descriptor.tags.iter().map(|t| t.to_string()).collect(),
            live_description: live.and_then(|r| r.description.clone()),
            language: live.and_then(|r| r.language.clone()),
            html_url: live.and_then(|r| r.html_url.clone()),
            homepage: live.and_then(|r| r.homepage.clone()),
            stargazers_count: live.map_or(0, |r| r.stargazers_count),
            forks_count: live.map_or(0, |r| r.forks_count),
        }
    }

    /// Text for the project card: curated, then live, then a placeholder.
    pub fn summary(&self) -> &str {
        [Some(self.description.as_str()), self.live_description.as_deref()]
            .into_iter()
            .flatten()
            .find(|text| !text.trim().is_empty())
            .unwrap_or(NO_DESCRIPTION)
    }

    // Case-insensitive match against the live language or any curated tag
    fn uses(&self, technology: &str) -> bool {
        let wanted = technology.to_lowercase();
        self.language.iter().chain(self.tags.iter()).any(|t| t.to_lowercase() == wanted)
    }
}

/// How many "other" projects to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OtherProjectsCap {
    #[default]
    Collapsed,
    Expanded,
}

impl OtherProjectsCap {
    pub fn limit(self) -> usize {
        match self {
            OtherProjectsCap::Collapsed => 6,
            OtherProjectsCap::Expanded => 12,
        }
    }

    /// "Show more" / "Show less". Only the cap changes; nothing is refetched.
    pub fn toggled(self) -> Self {
        match self {
            OtherProjectsCap::Collapsed => OtherProjectsCap::Expanded,
            OtherProjectsCap::Expanded => OtherProjectsCap::Collapsed,
        }
    }

    pub fn from_show_all(show_all: bool) -> Self {
        if show_all {
            OtherProjectsCap::Expanded
        } else {
            OtherProjectsCap::Collapsed
        }
    }

    // The toggle is offered once the collapsed list is full
    pub fn toggle_available(shown: usize) -> bool {
        shown >= OtherProjectsCap::Collapsed.limit()
    }
}

/// Featured catalogue plus the account that owns it.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    owner: String,
    featured: &'static [FeaturedProjectDescriptor],
}

impl ProjectCatalog {
    pub fn new(owner: impl Into<String>, featured: &'static [FeaturedProjectDescriptor]) -> Self {
        Self { owner: owner.into(), featured }
    }

    // Every curated entry, in curated order, enriched from `repositories`.
    // Never drops an entry for lack of live data.
    pub fn merged_featured(&self, repositories: &[Repository]) -> Vec<MergedProject> {
        self.featured
            .iter()
            .map(|descriptor| {
                let live = repositories.iter().find(|r| r.name == descriptor.name);
                MergedProject::from_parts(descriptor, live)
            })
            .collect()
    }

    // Repositories that are neither featured nor the owner's profile
    // repository (named after the account), in source order, at most
    // `cap.limit()` of them.
    pub fn other_projects<'a>(
        &self,
        repositories: &'a [Repository],
        cap: OtherProjectsCap,
    ) -> Vec<&'a Repository> {
        repositories
            .iter()
            .filter(|r| r.name != self.owner && !self.is_featured(&r.name))
            .take(cap.limit())
            .collect()
    }

    fn is_featured(&self, name: &str) -> bool {
        self.featured.iter().any(|d| d.name == name)
    }
}

// "all" followed by each distinct language in first-seen order.
pub fn technology_vocabulary(repositories: &[Repository]) -> Vec<String> {
    let mut vocabulary = vec![ALL_TECHNOLOGIES.to_string()];
    for language in repositories.iter().filter_map(|r| r.language.as_deref()) {
        if !vocabulary.iter().any(|known| known == language) {
            vocabulary.push(language.to_string());
        }
    }
    vocabulary
}

// Projects using `technology`, in their original order.
// "all" keeps everything; an unknown technology gives an empty list.
pub fn filter_featured(projects: &[MergedProject], technology: &str) -> Vec<MergedProject> {
    if technology == ALL_TECHNOLOGIES {
        return projects.to_vec();
    }
    projects.iter().filter(|p| p.uses(technology)).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(name: &str, language: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            language: language.map(str::to_string),
            ..Repository::default()
        }
    }

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::new("noor4964", FEATURED_PROJECTS)
    }

    #[test]
    fn test_featured_without_live_data_keep_curated_order() {
        let merged = catalog().merged_featured(&[]);
        assert_eq!(merged.len(), FEATURED_PROJECTS.len());

        let names: Vec<_> = merged.iter().map(|p| p.name.as_str()).collect();
        let curated: Vec<_> = FEATURED_PROJECTS.iter().map(|d| d.name).collect();
        assert_eq!(names, curated);

        for project in &merged {
            assert_eq!(project.stargazers_count, 0);
            assert_eq!(project.forks_count, 0);
            assert_eq!(project.html_url, None);
            assert_eq!(project.language, None);
        }
    }

    #[test]
    fn test_live_data_enriches_but_never_overrides_curated_fields() {
        let live = Repository {
            name: "Flutter-Chat-App".to_string(),
            language: Some("Dart".to_string()),
            description: Some("live description".to_string()),
            html_url: Some("https://github.com/noor4964/Flutter-Chat-App".to_string()),
            homepage: Some("https://chat.example.com".to_string()),
            stargazers_count: 12,
            forks_count: 4,
        };
        // Live order is irrelevant to featured order
        let repos = vec![repo("unrelated", Some("Go")), live];

        let merged = catalog().merged_featured(&repos);
        assert_eq!(merged[0].name, "SafeRide-Connect-React-");
        let chat = &merged[1];
        assert_eq!(chat.display_name, "Flutter Chat App");
        assert!(chat.description.starts_with("Real-time messaging"));
        assert_eq!(chat.tags, vec!["Flutter", "Dart", "Firebase", "WebRTC"]);
        assert_eq!(chat.live_description.as_deref(), Some("live description"));
        assert_eq!(chat.language.as_deref(), Some("Dart"));
        assert_eq!(chat.stargazers_count, 12);
        assert_eq!(chat.forks_count, 4);
        assert_eq!(chat.homepage.as_deref(), Some("https://chat.example.com"));
        assert_eq!(chat.summary(), chat.description);
    }

    #[test]
    fn test_summary_falls_back_to_live_then_placeholder() {
        let descriptor = FeaturedProjectDescriptor {
            name: "bare",
            display_name: "Bare",
            description: "",
            image: "",
            tags: &[],
        };
        let mut project = MergedProject::from_parts(&descriptor, None);
        assert_eq!(project.summary(), NO_DESCRIPTION);

        project.live_description = Some("from GitHub".to_string());
        assert_eq!(project.summary(), "from GitHub");
    }

    #[test]
    fn test_other_projects_exclude_featured_and_owner() {
        let repos = vec![
            repo("noor4964", None),
            repo("alpha", Some("Rust")),
            repo("Flutter-Chat-App", Some("Dart")),
            repo("beta", None),
        ];
        let others = catalog().other_projects(&repos, OtherProjectsCap::Collapsed);
        let names: Vec<_> = others.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "beta"]);
    }

    #[test]
    fn test_other_projects_cap_and_toggle() {
        let repos: Vec<_> = (0..20).map(|i| repo(&format!("repo-{i}"), None)).collect();
        let catalog = catalog();

        let collapsed = catalog.other_projects(&repos, OtherProjectsCap::default());
        assert_eq!(collapsed.len(), 6);
        assert_eq!(collapsed[0].name, "repo-0");
        assert_eq!(collapsed[5].name, "repo-5");

        let cap = OtherProjectsCap::default().toggled();
        let expanded = catalog.other_projects(&repos, cap);
        assert_eq!(expanded.len(), 12);
        // Same prefix: toggling only changes the truncation
        assert_eq!(&expanded[..6], &collapsed[..]);

        assert_eq!(cap.toggled(), OtherProjectsCap::Collapsed);
        assert!(OtherProjectsCap::toggle_available(collapsed.len()));
        assert!(!OtherProjectsCap::toggle_available(5));
    }

    #[test]
    fn test_other_projects_never_exceed_cap_or_leak_excluded() {
        let mut repos: Vec<_> = FEATURED_PROJECTS.iter().map(|d| repo(d.name, None)).collect();
        repos.push(repo("noor4964", None));
        repos.extend((0..3).map(|i| repo(&format!("side-{i}"), None)));

        for cap in [OtherProjectsCap::Collapsed, OtherProjectsCap::Expanded] {
            let others = catalog().other_projects(&repos, cap);
            assert!(others.len() <= cap.limit());
            assert_eq!(others.len(), 3);
            assert!(others.iter().all(|r| r.name.starts_with("side-")));
        }
    }

    #[test]
    fn test_vocabulary_first_seen_with_all_first() {
        let repos = vec![
            repo("a", Some("Python")),
            repo("b", None),
            repo("c", Some("Dart")),
            repo("d", Some("Python")),
            repo("e", Some("C#")),
        ];
        assert_eq!(technology_vocabulary(&repos), vec!["all", "Python", "Dart", "C#"]);
        assert_eq!(technology_vocabulary(&[]), vec!["all"]);
    }

    #[test]
    fn test_filter_matches_language_or_tag_case_insensitively() {
        let repos = vec![repo("online-classroom-management", Some("Flutter"))];
        let projects = catalog().merged_featured(&repos);

        let flutter = filter_featured(&projects, "flutter");
        let names: Vec<_> = flutter.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Flutter-Chat-App",
                "ML-Model-Trainer-Flutter-App",
                "Safe-Ride-Connect",
                // matched through its live language, not its tags
                "online-classroom-management",
            ]
        );

        let csharp = filter_featured(&projects, "C#");
        assert_eq!(csharp.len(), 1);
        assert_eq!(csharp[0].name, "GymManagementSystem_C_Sharp");
    }

    #[test]
    fn test_filter_all_and_no_match() {
        let projects = catalog().merged_featured(&[]);
        assert_eq!(filter_featured(&projects, ALL_TECHNOLOGIES), projects);
        assert!(filter_featured(&projects, "COBOL").is_empty());
    }
}
