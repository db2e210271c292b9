use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A GitHub user profile as returned by `GET /users/{login}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    pub html_url: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub blog: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter_username: Option<String>,
    #[serde(default)]
    pub public_repos: u32,
    #[serde(default)]
    pub public_gists: u32,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Display name, falling back to the login
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.login)
    }

    /// "Member since" line, e.g. `Jan 25, 2011`
    pub fn member_since(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }
}

/// A repository as returned by `GET /users/{login}/repos`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Repository {
    pub name: String,
    #[serde(default)]
    pub full_name: String,
    pub html_url: String,
    #[serde(default)]
    pub clone_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default = "default_branch")]
    pub default_branch: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub fork: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_branch() -> String {
    String::from("main")
}

/// Order in which the repository list is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Newest first by creation date
    #[default]
    Recent,
    /// Most starred first
    Stars,
    /// Most forked first
    Forks,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::Recent, SortOrder::Stars, SortOrder::Forks];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Recent => "Most Recent",
            SortOrder::Stars => "Most Stars",
            SortOrder::Forks => "Most Forks",
        }
    }

    pub fn next(&self) -> SortOrder {
        match self {
            SortOrder::Recent => SortOrder::Stars,
            SortOrder::Stars => SortOrder::Forks,
            SortOrder::Forks => SortOrder::Recent,
        }
    }

    pub fn prev(&self) -> SortOrder {
        match self {
            SortOrder::Recent => SortOrder::Forks,
            SortOrder::Stars => SortOrder::Recent,
            SortOrder::Forks => SortOrder::Stars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_deserializes_sparse_payload() {
        let json = r#"{
            "login": "octocat",
            "html_url": "https://github.com/octocat",
            "created_at": "2011-01-25T18:44:36Z",
            "name": null,
            "followers": 42
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name(), "octocat");
        assert_eq!(profile.followers, 42);
        assert_eq!(profile.member_since(), "Jan 25, 2011");
    }

    #[test]
    fn test_repository_defaults_branch() {
        let json = r#"{
            "name": "hello-world",
            "html_url": "https://github.com/octocat/hello-world",
            "created_at": "2011-01-26T19:01:12Z"
        }"#;
        let repo: Repository = serde_json::from_str(json).unwrap();
        assert_eq!(repo.default_branch, "main");
        assert!(!repo.fork);
        assert_eq!(repo.stargazers_count, 0);
    }

    #[test]
    fn test_sort_order_cycles() {
        let mut order = SortOrder::default();
        for _ in 0..3 {
            order = order.next();
        }
        assert_eq!(order, SortOrder::Recent);
        assert_eq!(SortOrder::Recent.prev(), SortOrder::Forks);
    }
}
