//! GitHub importer — the single point of entry for all GitHub API calls.
//! Maps a public profile and its recently pushed repositories onto a
//! partial resume.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::resume::{BasicsPatch, CustomField, Links, Project, ResumePatch};

const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("resume-builder-api/", env!("CARGO_PKG_VERSION"));
const MAX_REPOS_FETCHED: usize = 10;
const MAX_PROJECTS: usize = 6;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("invalid GitHub profile URL: {0}")]
    InvalidUrl(String),

    #[error("invalid API token")]
    InvalidToken,

    #[error("API rate limit exceeded")]
    RateLimited,

    #[error("GitHub user not found")]
    UserNotFound,

    #[error("GitHub API returned status {0}")]
    Api(u16),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Debug, Deserialize)]
struct GithubProfile {
    name: Option<String>,
    email: Option<String>,
    bio: Option<String>,
    location: Option<String>,
    blog: Option<String>,
    html_url: String,
    twitter_username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GithubRepo {
    name: String,
    description: Option<String>,
    language: Option<String>,
    html_url: String,
    homepage: Option<String>,
    fork: bool,
    #[serde(default)]
    private: bool,
}

/// Client for the GitHub REST API. An optional server-side fallback token
/// raises the rate limit when the user supplies none of their own.
#[derive(Clone)]
pub struct GithubClient {
    client: reqwest::Client,
    fallback_token: Option<String>,
}

impl GithubClient {
    pub fn new(fallback_token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            fallback_token,
        }
    }

    /// Fetches a profile and its repositories and maps them to a partial
    /// resume for the client to merge.
    pub async fn import_profile(
        &self,
        profile_url: &str,
        token: Option<&str>,
    ) -> Result<ResumePatch, GithubError> {
        let username = parse_username(profile_url)
            .ok_or_else(|| GithubError::InvalidUrl(profile_url.to_string()))?;

        let profile: GithubProfile = self
            .get_json(&format!("{GITHUB_API_URL}/users/{username}"), token)
            .await?;
        let repos: Vec<GithubRepo> = self
            .get_json(
                &format!(
                    "{GITHUB_API_URL}/users/{username}/repos?sort=pushed&per_page={MAX_REPOS_FETCHED}&type=all"
                ),
                token,
            )
            .await?;

        debug!(
            "GitHub import for {username}: {} repo(s) fetched",
            repos.len()
        );
        Ok(build_patch(profile, repos))
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        token: Option<&str>,
    ) -> Result<T, GithubError> {
        let mut request = self.client.get(url).header("Accept", GITHUB_ACCEPT).header(
            "User-Agent",
            USER_AGENT,
        );
        if let Some(token) = token.or(self.fallback_token.as_deref()) {
            request = request.header("Authorization", format!("token {token}"));
        }

        let response = request.send().await?;
        match response.status().as_u16() {
            401 => Err(GithubError::InvalidToken),
            403 => Err(GithubError::RateLimited),
            404 => Err(GithubError::UserNotFound),
            status if !response.status().is_success() => Err(GithubError::Api(status)),
            _ => Ok(response.json().await?),
        }
    }
}

/// Pulls the username out of a profile URL like
/// `https://github.com/octocat` or `github.com/octocat/anything`.
fn parse_username(url: &str) -> Option<&str> {
    url.split("github.com/")
        .nth(1)?
        .split('/')
        .next()
        .filter(|u| !u.is_empty())
}

fn build_patch(profile: GithubProfile, repos: Vec<GithubRepo>) -> ResumePatch {
    let blog = profile
        .blog
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty());
    let blog_is_linkedin = blog.is_some_and(|b| b.contains("linkedin"));

    let links = Links {
        github: Some(profile.html_url),
        linkedin: blog.filter(|_| blog_is_linkedin).map(str::to_string),
        twitter: profile
            .twitter_username
            .map(|u| format!("https://twitter.com/{u}")),
        portfolio: None,
    };

    // A website that is not a LinkedIn profile lands in the custom fields,
    // where the UI shows it under "Personal Info".
    let custom_fields: Vec<CustomField> = blog
        .filter(|_| !blog_is_linkedin)
        .map(|b| {
            vec![CustomField {
                id: "website".to_string(),
                label: "Portfolio".to_string(),
                value: b.to_string(),
            }]
        })
        .unwrap_or_default();

    let projects: Vec<Project> = repos
        .iter()
        .filter(|repo| !repo.fork)
        .take(MAX_PROJECTS)
        .map(|repo| Project {
            title: repo.name.clone(),
            bullets: vec![
                repo.description
                    .clone()
                    .filter(|d| !d.trim().is_empty())
                    .unwrap_or_else(|| "Project source code.".to_string()),
                if repo.private {
                    "Private Repository (Access Granted)".to_string()
                } else {
                    "Open Source Project".to_string()
                },
            ],
            tech: repo.language.clone().into_iter().collect(),
            github: Some(repo.html_url.clone()),
            website: repo
                .homepage
                .clone()
                .filter(|h| !h.trim().is_empty()),
        })
        .collect();

    // Unique languages across all fetched repos, in fetch order.
    let mut skills: Vec<String> = Vec::new();
    for language in repos.iter().filter_map(|r| r.language.as_deref()) {
        if !skills.iter().any(|s| s == language) {
            skills.push(language.to_string());
        }
    }

    ResumePatch {
        basics: Some(BasicsPatch {
            name: profile.name.filter(|n| !n.trim().is_empty()),
            email: profile.email.filter(|e| !e.trim().is_empty()),
            location: profile.location.filter(|l| !l.trim().is_empty()),
            links: Some(links),
            custom_fields: (!custom_fields.is_empty()).then_some(custom_fields),
        }),
        summary: profile.bio.filter(|b| !b.trim().is_empty()),
        skills: (!skills.is_empty()).then_some(skills),
        experience: None,
        projects: (!projects.is_empty()).then_some(projects),
        education: None,
    }
}
