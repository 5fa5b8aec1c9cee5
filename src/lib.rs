//! GitHub repository badge rendering
//!
//! Fetches a repository's star and fork counts from the GitHub REST API and
//! renders the badge as HTML: a link to the repository carrying the GitHub
//! mark and, when the metadata fetch succeeded, a detail panel with the
//! wordmark and compact-formatted counters. A failed fetch degrades the
//! badge to the bare link; nothing is retried or surfaced to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use github_badge::assets::AssetResolver;
//! use github_badge::badge::{BadgeProps, BadgeWidget};
//! use github_badge::github::GitHubClient;
//! use github_badge::theme::Theme;
//!
//! # async fn example() -> github_badge::error::Result<()> {
//! let client = GitHubClient::new()?;
//! let mut badge = BadgeWidget::new(
//!     BadgeProps {
//!         owner: "great-expectations".to_string(),
//!         repository: "great_expectations".to_string(),
//!         class_name: String::new(),
//!     },
//!     Theme::Dark,
//!     AssetResolver::default(),
//! );
//!
//! badge.mount(&client).await;
//! if let Some(markup) = badge.render() {
//!     println!("{}", markup.into_string());
//! }
//! # Ok(())
//! # }
//! ```

pub mod assets;
pub mod badge;
pub mod cli;
pub mod error;
pub mod format;
pub mod github;
pub mod http;
pub mod theme;
pub mod types;

pub use assets::{AssetResolver, Icon};
pub use badge::{BadgeProps, BadgeWidget};
pub use error::{GitHubBadgeError, Result};
pub use format::compact_number;
pub use github::GitHubClient;
pub use theme::Theme;
pub use types::RepoMetrics;

// Re-export the markup type so consumers don't need maud directly
pub use maud::Markup;
