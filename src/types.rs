use serde::Deserialize;

// GitHub API response structure
//
// Counters default to zero so a response that resolves without them (404
// bodies, truncated payloads) still decodes; hiding the panel is reserved
// for transport failures and bodies that are not JSON at all.
#[derive(Debug, Deserialize)]
pub struct RepoMetrics {
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
}
