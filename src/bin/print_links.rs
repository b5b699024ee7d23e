//! Links binary - shows how a URL maps across locales and how a visit resolves
//!
//! Usage:
//!   cargo run --bin links -- /bg/talento?ref=mail#contacto
//!   cargo run --bin links -- /privacy --stored bg
//!   cargo run --bin links -- /privacy?lang=en --stored es --strategy query
//!
//! Optional environment variables:
//! - LOCALE_STRATEGY (path | query, overridden by --strategy)

use anyhow::{Context, Result};
use scouting_landing::i18n::{
    Locale, LocaleRegistry, LocaleResolver, LocalizationStrategy, Location, ResolverOutcome,
};
use tracing::info;

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|index| args.get(index + 1))
        .cloned()
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scouting_landing=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let url = args
        .iter()
        .find(|arg| !arg.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "/".to_string());
    let stored = flag_value(&args, "--stored");
    let strategy: LocalizationStrategy = match flag_value(&args, "--strategy")
        .or_else(|| std::env::var("LOCALE_STRATEGY").ok())
    {
        Some(value) => value.parse().context("Invalid strategy")?,
        None => LocalizationStrategy::default(),
    };

    info!("Mapping {} with {} strategy", url, strategy);

    let location = Location::parse(&url);
    let registry = LocaleRegistry::get();

    println!();
    println!("URL:        {}", url);
    println!("Base path:  {}", location.base_path());
    println!("Route:      {}", strategy.route_locale(&location));
    println!();
    println!("--- Equivalent URLs ---");
    for config in registry.locales() {
        let marker = if config.is_default { " (default)" } else { "" };
        let locale = Locale::from_code(config.code)?;
        println!(
            "{:<4}{:<12}{}",
            config.code,
            marker,
            strategy.href_for(locale, &location)
        );
    }

    println!();
    println!("--- Resolution (stored preference: {}) ---", stored.as_deref().unwrap_or("none"));
    let resolution = LocaleResolver::new(strategy).resolve_location(&location, stored.as_deref());
    match &resolution.outcome {
        ResolverOutcome::RenderAsIs => println!("render as-is in {}", resolution.effective),
        ResolverOutcome::RenderAndStore => {
            println!("render in {} and store '{}'", resolution.effective, resolution.effective)
        }
        ResolverOutcome::RedirectAndStore { target } => {
            println!("redirect to {} ({})", target, resolution.effective)
        }
    }
    println!();

    Ok(())
}
