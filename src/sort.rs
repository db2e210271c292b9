//! Repository ordering

use std::cmp::Reverse;

use crate::models::{Repository, SortOrder};

/// Sort repositories in place. Stable: ties keep the API order.
pub fn sort_repos(repos: &mut [Repository], order: SortOrder) {
    match order {
        SortOrder::Recent => repos.sort_by_key(|r| Reverse(r.created_at)),
        SortOrder::Stars => repos.sort_by_key(|r| Reverse(r.stargazers_count)),
        SortOrder::Forks => repos.sort_by_key(|r| Reverse(r.forks_count)),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use chrono::{TimeZone, Utc};

    use crate::models::Repository;

    pub fn repo(name: &str, created_day: u32, stars: u32, forks: u32) -> Repository {
        Repository {
            name: name.to_string(),
            full_name: format!("octocat/{}", name),
            html_url: format!("https://github.com/octocat/{}", name),
            clone_url: format!("https://github.com/octocat/{}.git", name),
            description: None,
            language: Some("Rust".to_string()),
            default_branch: "main".to_string(),
            stargazers_count: stars,
            forks_count: forks,
            fork: false,
            created_at: Utc.with_ymd_and_hms(2020, 1, created_day, 0, 0, 0).unwrap(),
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::repo;
    use super::*;

    fn names(repos: &[Repository]) -> Vec<&str> {
        repos.iter().map(|r| r.name.as_str()).collect()
    }

    fn sample() -> Vec<Repository> {
        vec![
            repo("old", 1, 50, 2),
            repo("newest", 20, 5, 9),
            repo("middle", 10, 50, 0),
        ]
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut repos = sample();
        sort_repos(&mut repos, SortOrder::Recent);
        assert_eq!(names(&repos), ["newest", "middle", "old"]);
    }

    #[test]
    fn test_stars_ties_keep_input_order() {
        let mut repos = sample();
        sort_repos(&mut repos, SortOrder::Stars);
        assert_eq!(names(&repos), ["old", "middle", "newest"]);
    }

    #[test]
    fn test_forks_descending() {
        let mut repos = sample();
        sort_repos(&mut repos, SortOrder::Forks);
        assert_eq!(names(&repos), ["newest", "old", "middle"]);
    }

    #[test]
    fn test_empty_is_fine() {
        let mut repos: Vec<Repository> = Vec::new();
        sort_repos(&mut repos, SortOrder::Stars);
        assert!(repos.is_empty());
    }
}
