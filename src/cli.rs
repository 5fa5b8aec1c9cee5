use clap::Parser;

use crate::assets::DEFAULT_ASSETS_BASE;
use crate::error::{GitHubBadgeError, Result};
use crate::github::API_BASE_URL;
use crate::theme::Theme;

#[derive(Parser)]
#[command(name = "github-badge")]
#[command(about = "GitHub Badge Renderer - Renders star/fork badges as HTML for static embedding")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Repositories to render, as OWNER/REPO
    #[arg(required = true, value_name = "OWNER/REPO")]
    pub targets: Vec<String>,

    /// Theme mode selecting which icon asset variants are used
    #[arg(long, env = "BADGE_THEME", value_enum, default_value_t = Theme::Light)]
    pub theme: Theme,

    /// Extra class composed onto the badge root element
    #[arg(long, env = "BADGE_CLASS_NAME", default_value = "")]
    pub class_name: String,

    /// Base path the icon assets are deployed under
    #[arg(long, env = "BADGE_ASSETS_BASE", default_value = DEFAULT_ASSETS_BASE)]
    pub assets_base: String,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = API_BASE_URL)]
    pub api_url: String,

    /// Write one OWNER-REPO.html fragment per target into this directory
    /// instead of printing to stdout
    #[arg(long, env = "BADGE_OUT_DIR")]
    pub out_dir: Option<std::path::PathBuf>,

    /// Maximum metadata fetches in flight
    #[arg(long, default_value_t = 4)]
    pub concurrency: usize,

    /// HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

/// Split an OWNER/REPO argument, rejecting anything without exactly one
/// slash and a non-empty half on each side.
pub fn parse_target(target: &str) -> Result<(String, String)> {
    let parts: Vec<&str> = target.split('/').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(GitHubBadgeError::InvalidTarget(format!(
            "expected OWNER/REPO, got: {}",
            target
        )));
    }

    Ok((parts[0].to_string(), parts[1].to_string()))
}
