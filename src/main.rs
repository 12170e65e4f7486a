// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Run the search (or profile lookup) and render the results
// 4. Exit with proper code (0 = success, 1 = failed search, 2 = error)
//
// Rendering lives entirely in this file. Everything printed here comes from
// the merged SearchState (or a fetched Profile) - the view depends on the
// normalized model only, never on raw API shapes.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - credential from the environment
mod filter;        // src/filter.rs - client-side repository filtering
mod github;        // src/github/ - GraphQL client, wire shapes, mapper
mod links;         // src/links/ - free-text field resolution
mod models;        // src/models.rs - internal entities
mod search;        // src/search/ - orchestration state machine

use clap::Parser;

use anyhow::Result;

use cli::{Cli, Commands};
use config::{Config, TOKEN_ENV_VAR};
use github::GithubClient;
use links::{company_link, resolve_portfolio_url, resolve_social_ref, SocialProvider};
use models::{Profile, Repository};
use search::{run_search, SearchSession};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            handle,
            json,
            name,
            language,
        } => handle_search(&handle, json, name.as_deref(), language.as_deref()).await,
        Commands::Profile { handle, json } => handle_profile(&handle, json).await,
    }
}

// Handles the 'search' subcommand: repositories plus the profile panel
async fn handle_search(
    handle: &str,
    json: bool,
    name_filter: Option<&str>,
    language_filter: Option<&str>,
) -> Result<i32> {
    // Trimming happens here, at the form boundary - the fetch client
    // expects an already-trimmed handle
    let handle = handle.trim();
    if handle.is_empty() {
        anyhow::bail!("Please enter a GitHub username");
    }

    let config = Config::from_env();
    print_token_advisory(&config);
    if !json {
        println!("🔍 Searching GitHub for user: {}", handle);
    }

    let client = GithubClient::new(&config)?;
    let mut session = SearchSession::new();
    run_search(&client, &mut session, handle).await;

    let state = session.state();

    if json {
        // Machine-readable output is the consumer contract itself
        println!("{}", serde_json::to_string_pretty(state)?);
        return Ok(if session.outcome().is_success() { 0 } else { 1 });
    }

    if let Some(error) = &state.error {
        println!("\n❌ Error: {}", error);
        return Ok(1);
    }

    println!();

    if let Some(profile) = &state.profile {
        print_profile(profile);
        println!();
    }

    if let Some(advisory) = &state.advisory {
        println!("ℹ️  {}", advisory);
        return Ok(0);
    }

    let filtered = filter::filter_repositories(&state.repositories, name_filter, language_filter);

    if filtered.len() == state.repositories.len() {
        println!("📦 Repositories ({})", state.repositories.len());
    } else {
        println!(
            "📦 Repositories ({} of {} after filters)",
            filtered.len(),
            state.repositories.len()
        );
    }

    let languages = filter::language_options(&state.repositories);
    if !languages.is_empty() {
        println!("🏷️  Languages: {}", languages.join(", "));
    }

    println!();
    print_repository_table(&filtered);

    Ok(0)
}

// Handles the 'profile' subcommand
//
// Unlike the orchestrated search, a profile failure here is surfaced
// directly - this command has no repository list to fall back on.
async fn handle_profile(handle: &str, json: bool) -> Result<i32> {
    let handle = handle.trim();
    if handle.is_empty() {
        anyhow::bail!("Please enter a GitHub username");
    }

    let config = Config::from_env();
    print_token_advisory(&config);
    if !json {
        println!("🔍 Looking up GitHub user: {}", handle);
    }

    let client = GithubClient::new(&config)?;

    match client.fetch_profile(handle).await {
        Ok(profile) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!();
                print_profile(&profile);
            }
            Ok(0)
        }
        Err(error) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&error)?);
            } else {
                println!("\n❌ Error: {}", error);
            }
            Ok(1)
        }
    }
}

// Shown when no credential is configured; the search still runs,
// unauthenticated. Goes to stderr so --json output stays clean.
fn print_token_advisory(config: &Config) {
    if config.has_token() {
        return;
    }
    eprintln!("⚠️  No GitHub token configured - the GraphQL API requires authentication.");
    eprintln!(
        "   Create a token at https://github.com/settings/tokens and export it as {}.",
        TOKEN_ENV_VAR
    );
}

// Prints the profile panel
//
// All link fields go through the resolvers in src/links/ - nothing from the
// raw website/bio/company text is printed as a link without classification.
fn print_profile(profile: &Profile) {
    println!("👤 {} (@{})", profile.shown_name(), profile.handle);
    println!("   {}", profile.profile_url);

    if let Some(bio) = &profile.bio {
        println!("   {}", bio);
    }

    if let Some(location) = &profile.location {
        println!("   📍 {}", location);
    }

    if let Some(company) = &profile.company {
        match company_link(company) {
            Some(url) => println!("   🏢 {} ({})", company, url),
            None => println!("   🏢 {}", company),
        }
    }

    if let Some(email) = &profile.email {
        println!("   ✉️  {}", email);
    }

    if let Some(twitter) = &profile.twitter_handle {
        println!("   🐦 @{} (https://x.com/{})", twitter, twitter);
    }

    let website = profile.website_text.as_deref().unwrap_or("");
    if let Some(social) = resolve_social_ref(website, profile.bio.as_deref()) {
        let label = match social.provider {
            SocialProvider::Linkedin => "LinkedIn",
        };
        println!("   🔗 {}: @{} ({})", label, social.handle, social.url);
    }
    if let Some(portfolio) = resolve_portfolio_url(website) {
        println!("   🌐 Portfolio: {}", portfolio);
    }

    println!(
        "   👥 {} followers · {} following · ⭐ {} starred · {} contributions",
        profile.follower_count,
        profile.following_count,
        profile.starred_repo_count,
        profile.total_contributions
    );
    println!(
        "   📦 {} public repositories · joined {}",
        profile.public_repo_count,
        date_part(&profile.created_at)
    );
}

// Prints repositories as a human-readable table in the terminal
fn print_repository_table(repositories: &[&Repository]) {
    println!(
        "{:<35} {:<15} {:>7} {:>7}  {:<10}",
        "NAME", "LANGUAGE", "STARS", "FORKS", "UPDATED"
    );
    println!("{}", "=".repeat(80));

    for repo in repositories {
        // Truncate name if too long for display
        let name_display = if repo.name.len() > 32 {
            format!("{}...", &repo.name[..32])
        } else {
            repo.name.clone()
        };

        let language = repo.language.as_deref().unwrap_or("-");
        let mut flags = String::new();
        if repo.is_fork {
            flags.push_str(" [fork]");
        }

        println!(
            "{:<35} {:<15} {:>7} {:>7}  {:<10}{}",
            name_display,
            language,
            repo.star_count,
            repo.fork_count,
            date_part(&repo.updated_at),
            flags
        );

        // Description on its own line, with a fallback for blank ones
        match &repo.description {
            Some(description) => println!("    {}", description),
            None => println!("    (no description)"),
        }
    }

    println!();
    println!("📊 Total: {}", repositories.len());
}

// The date portion of an ISO-8601 timestamp, for compact display
fn date_part(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}
