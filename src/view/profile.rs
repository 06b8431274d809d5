// src/view/profile.rs
// Profile card for the hero/about/footer sections, with fixed fallbacks for
// anything GitHub did not give us.

use serde::Serialize;

use crate::github::Profile;

pub const FALLBACK_NAME: &str = "SK. Nur Alam";
pub const FALLBACK_AVATAR_URL: &str = "https://avatars.githubusercontent.com/u/100152180?v=4";
pub const FALLBACK_PUBLIC_REPOS: u64 = 18;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub name: String,
    pub avatar_url: String,
    pub public_repos: u64,
}

impl ProfileCard {
    // Empty strings and a zero repo count fall back too, like a missing field
    pub fn from_profile(profile: Option<&Profile>) -> Self {
        let name = profile
            .and_then(|p| p.name.as_deref())
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(FALLBACK_NAME);
        let avatar_url = profile
            .and_then(|p| p.avatar_url.as_deref())
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(FALLBACK_AVATAR_URL);
        let public_repos = profile
            .and_then(|p| p.public_repos)
            .filter(|&n| n > 0)
            .unwrap_or(FALLBACK_PUBLIC_REPOS);

        Self {
            name: name.to_string(),
            avatar_url: avatar_url.to_string(),
            public_repos,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_profile_uses_fallbacks() {
        let card = ProfileCard::from_profile(None);
        assert_eq!(card.name, FALLBACK_NAME);
        assert_eq!(card.avatar_url, FALLBACK_AVATAR_URL);
        assert_eq!(card.public_repos, FALLBACK_PUBLIC_REPOS);
    }

    #[test]
    fn test_partial_profile_mixes_live_and_fallback() {
        let profile = Profile {
            login: Some("octocat".to_string()),
            name: Some("The Octocat".to_string()),
            avatar_url: None,
            public_repos: Some(0),
        };
        let card = ProfileCard::from_profile(Some(&profile));
        assert_eq!(card.name, "The Octocat");
        assert_eq!(card.avatar_url, FALLBACK_AVATAR_URL);
        assert_eq!(card.public_repos, FALLBACK_PUBLIC_REPOS);
    }
}
