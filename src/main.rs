use clap::Parser;
use colored::*;
use futures::stream::{self, StreamExt};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use github_badge::assets::AssetResolver;
use github_badge::badge::{BadgeProps, BadgeWidget};
use github_badge::cli::{parse_target, Cli};
use github_badge::error::Result;
use github_badge::github::GitHubClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so stdout carries nothing but the rendered markup
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Validate every target up front; one bad argument fails the whole run
    let targets = cli
        .targets
        .iter()
        .map(|target| parse_target(target))
        .collect::<Result<Vec<_>>>()?;

    eprintln!("{}", "GitHub Badge Renderer".bold().green());
    eprintln!("{}", "=".repeat(50).dimmed());

    let client = GitHubClient::with_base_url(&cli.api_url, Duration::from_secs(cli.timeout))?;
    let assets = AssetResolver::new(&cli.assets_base);

    if let Some(dir) = &cli.out_dir {
        std::fs::create_dir_all(dir)?;
    }

    // Bounded fetch concurrency; `buffered` keeps the input order
    let concurrency = cli.concurrency.max(1);
    let rendered: Vec<(String, String, Option<String>)> = stream::iter(targets)
        .map(|(owner, repo)| {
            let client = &client;
            let assets = assets.clone();
            let theme = cli.theme;
            let class_name = cli.class_name.clone();
            async move {
                let props = BadgeProps {
                    owner: owner.clone(),
                    repository: repo.clone(),
                    class_name,
                };
                let mut badge = BadgeWidget::new(props, theme, assets);
                badge.mount(client).await;
                let markup = badge.render().map(|m| m.into_string());
                (owner, repo, markup)
            }
        })
        .buffered(concurrency)
        .collect()
        .await;

    let mut written = 0;
    for (owner, repo, markup) in rendered {
        let Some(markup) = markup else { continue };
        match &cli.out_dir {
            Some(dir) => {
                let path = dir.join(format!("{}-{}.html", owner, repo));
                std::fs::write(&path, &markup)?;
                tracing::info!(path = %path.display(), "wrote badge");
            }
            None => println!("{}", markup),
        }
        written += 1;
    }

    eprintln!("✅ Rendered {} badge(s)", written);

    Ok(())
}
