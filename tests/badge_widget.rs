mod common;

use common::{client_with, StubTransport};
use github_badge::assets::AssetResolver;
use github_badge::badge::{style, BadgeProps, BadgeWidget};
use github_badge::theme::Theme;

const METRICS_BODY: &str = r#"{"stargazers_count": 1234, "forks_count": 56}"#;

fn props(owner: &str, repository: &str) -> BadgeProps {
    BadgeProps {
        owner: owner.to_string(),
        repository: repository.to_string(),
        class_name: String::new(),
    }
}

async fn rendered(stub: StubTransport, props: BadgeProps, theme: Theme) -> Option<String> {
    let client = client_with(stub);
    let mut badge = BadgeWidget::new(props, theme, AssetResolver::default());
    badge.mount(&client).await;
    badge.render().map(|markup| markup.into_string())
}

#[tokio::test]
async fn test_successful_fetch_formats_counters() {
    let markup = rendered(
        StubTransport::json(METRICS_BODY),
        props("great-expectations", "great_expectations"),
        Theme::Light,
    )
    .await
    .expect("badge renders");

    assert!(markup.contains(">1.2k</span>"));
    assert!(markup.contains(">56</span>"));
    assert!(markup.contains(style::GITHUB_BADGE_NO_ERRORS));
}

#[tokio::test]
async fn test_empty_repository_renders_nothing() {
    for owner in ["great-expectations", ""] {
        let markup = rendered(
            StubTransport::json(METRICS_BODY),
            props(owner, ""),
            Theme::Light,
        )
        .await;

        assert!(markup.is_none());
    }
}

#[tokio::test]
async fn test_network_failure_drops_detail_panel() {
    let markup = rendered(
        StubTransport::failing(),
        props("octocat", "Hello-World"),
        Theme::Light,
    )
    .await
    .expect("the bare link still renders");

    assert!(markup.contains(r#"href="https://github.com/octocat/Hello-World""#));
    assert!(markup.contains("Github Invertocat Logo"));
    assert!(!markup.contains(style::GITHUB_BADGE_NO_ERRORS));
    assert!(!markup.contains(style::GITHUB_BADGE_INFO));
    assert!(!markup.contains("Github Logo"));
}

#[tokio::test]
async fn test_missing_fields_render_zero_counters() {
    // A resolved-but-malformed response is not a failure: only rejected
    // requests and non-JSON bodies hide the panel.
    let markup = rendered(
        StubTransport::status(404, r#"{"message": "Not Found"}"#),
        props("nonexistent", "repository"),
        Theme::Light,
    )
    .await
    .expect("badge renders");

    assert!(markup.contains(style::GITHUB_BADGE_NO_ERRORS));
    assert_eq!(markup.matches(">0</span>").count(), 2);
}

#[tokio::test]
async fn test_theme_selects_asset_variants() {
    let light = rendered(
        StubTransport::json(METRICS_BODY),
        props("octocat", "Hello-World"),
        Theme::Light,
    )
    .await
    .expect("badge renders");
    let dark = rendered(
        StubTransport::json(METRICS_BODY),
        props("octocat", "Hello-World"),
        Theme::Dark,
    )
    .await
    .expect("badge renders");

    for stem in ["github-mark", "github-logo", "star", "fork"] {
        assert!(light.contains(&format!("/img/{}.svg", stem)));
        assert!(dark.contains(&format!("/img/{}-dark.svg", stem)));
    }
    assert!(!light.contains("-dark.svg"));

    // Theme changes asset paths only, never the counter values
    assert!(light.contains(">1.2k</span>"));
    assert!(dark.contains(">1.2k</span>"));
}

#[tokio::test]
async fn test_repository_link_opens_new_tab() {
    let markup = rendered(
        StubTransport::json(METRICS_BODY),
        props("great-expectations", "great_expectations"),
        Theme::Light,
    )
    .await
    .expect("badge renders");

    assert!(markup
        .contains(r#"href="https://github.com/great-expectations/great_expectations""#));
    assert!(markup.contains(r#"target="_blank""#));
}
