//! The badge widget: display state and markup

use maud::{html, Markup};

use crate::assets::{AssetResolver, Icon};
use crate::format::compact_number;
use crate::github::GitHubClient;
use crate::theme::Theme;

/// Style-module class names composed into the markup
pub mod style {
    pub const GITHUB_BADGE: &str = "githubBadge";
    pub const GITHUB_BADGE_NO_ERRORS: &str = "githubBadgeNoErrors";
    pub const GITHUB_BADGE_INFO: &str = "githubBadgeInfo";
    pub const GITHUB_MARK: &str = "githubMark";
    pub const GITHUB_LOGO: &str = "githubLogo";
    pub const GITHUB_STATS: &str = "githubStats";
}

/// Externally supplied identifiers for the badge target
#[derive(Debug, Clone)]
pub struct BadgeProps {
    pub owner: String,
    /// May be empty, in which case the widget renders nothing
    pub repository: String,
    /// Caller class composed into the root element's class list
    pub class_name: String,
}

/// The GitHub badge widget.
///
/// Construction seeds the optimistic display state ("0" counters, detail
/// panel visible). [`mount`](BadgeWidget::mount) performs the single
/// metadata fetch of the widget's lifetime and settles the state;
/// [`render`](BadgeWidget::render) produces markup for whatever the state
/// currently is, so rendering before the fetch settles shows the optimistic
/// default and a re-render afterwards picks up the result.
pub struct BadgeWidget {
    props: BadgeProps,
    theme: Theme,
    assets: AssetResolver,
    stars_text: String,
    forks_text: String,
    show_details: bool,
    mounted: bool,
}

impl BadgeWidget {
    pub fn new(props: BadgeProps, theme: Theme, assets: AssetResolver) -> Self {
        BadgeWidget {
            props,
            theme,
            assets,
            stars_text: "0".to_string(),
            forks_text: "0".to_string(),
            show_details: true,
            mounted: false,
        }
    }

    /// Fetch the repository metrics, exactly once.
    ///
    /// On success the counters are formatted and the panel stays visible.
    /// On failure the panel is hidden and the error goes no further than a
    /// debug log; there is no retry, and the panel never comes back.
    /// Repeated calls are no-ops.
    pub async fn mount(&mut self, client: &GitHubClient) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if self.props.repository.is_empty() {
            // Nothing will render; skip the request.
            return;
        }

        match client
            .repo_metrics(&self.props.owner, &self.props.repository)
            .await
        {
            Ok(metrics) => {
                self.stars_text = compact_number(metrics.stargazers_count);
                self.forks_text = compact_number(metrics.forks_count);
            }
            Err(e) => {
                tracing::debug!(
                    owner = %self.props.owner,
                    repository = %self.props.repository,
                    error = %e,
                    "metrics fetch failed, hiding badge details"
                );
                self.show_details = false;
            }
        }
    }

    /// Markup for the current state, or `None` when there is no repository
    /// to point at.
    pub fn render(&self) -> Option<Markup> {
        if self.props.repository.is_empty() {
            return None;
        }

        let href = format!(
            "https://github.com/{}/{}",
            self.props.owner, self.props.repository
        );

        Some(html! {
            a class=(self.root_class()) href=(href) target="_blank" rel="noopener noreferrer" {
                img class=(style::GITHUB_MARK)
                    src=(self.assets.url(Icon::Mark, self.theme))
                    alt=(Icon::Mark.alt_text());
                @if self.show_details {
                    div class=(style::GITHUB_BADGE_INFO) {
                        img class=(style::GITHUB_LOGO)
                            src=(self.assets.url(Icon::Logo, self.theme))
                            alt=(Icon::Logo.alt_text());
                        div class=(style::GITHUB_STATS) {
                            img src=(self.assets.url(Icon::Star, self.theme))
                                alt=(Icon::Star.alt_text());
                            span { (self.stars_text) }
                            img src=(self.assets.url(Icon::Fork, self.theme))
                                alt=(Icon::Fork.alt_text());
                            span { (self.forks_text) }
                        }
                    }
                }
            }
        })
    }

    // The "no-errors" class rides along only while the panel is showing,
    // composed with the caller-supplied class.
    fn root_class(&self) -> String {
        let mut class = String::from(style::GITHUB_BADGE);
        if self.show_details {
            class.push(' ');
            class.push_str(style::GITHUB_BADGE_NO_ERRORS);
        }
        if !self.props.class_name.is_empty() {
            class.push(' ');
            class.push_str(&self.props.class_name);
        }
        class
    }
}
