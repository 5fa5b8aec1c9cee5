use crate::theme::Theme;

pub const DEFAULT_ASSETS_BASE: &str = "/img";

/// Logical icons the badge is composed of
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// The GitHub mark (Invertocat)
    Mark,
    /// The GitHub wordmark logo
    Logo,
    Star,
    Fork,
}

impl Icon {
    fn stem(&self) -> &'static str {
        match self {
            Icon::Mark => "github-mark",
            Icon::Logo => "github-logo",
            Icon::Star => "star",
            Icon::Fork => "fork",
        }
    }

    /// Fixed alt text carried by this icon's image element
    pub fn alt_text(&self) -> &'static str {
        match self {
            Icon::Mark => "Github Invertocat Logo",
            Icon::Logo => "Github Logo",
            Icon::Star => "Github Stargazers Count",
            Icon::Fork => "Github Forks Count",
        }
    }
}

/// Maps logical icon names to deployable asset URLs under a base path
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base: String,
}

impl Default for AssetResolver {
    fn default() -> Self {
        AssetResolver::new(DEFAULT_ASSETS_BASE)
    }
}

impl AssetResolver {
    pub fn new(base: &str) -> Self {
        AssetResolver {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// URL for an icon in the given theme; dark mode selects the `-dark`
    /// filename variant.
    pub fn url(&self, icon: Icon, theme: Theme) -> String {
        format!("{}/{}{}.svg", self.base, icon.stem(), theme.asset_suffix())
    }
}
