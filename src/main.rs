mod enrich;
mod identity;
mod model;
mod parser;
mod pipeline;
mod search;
mod seed;
mod settings;
mod store;

use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::warn;

use crate::model::{LeaderRecord, UNKNOWN};
use crate::parser::CapitalizedRuns;
use crate::pipeline::UpdateOptions;
use crate::search::{SearchProvider, SerpApiClient};
use crate::settings::Settings;

#[derive(Parser)]
#[command(name = "leader_scraper", about = "Collect GenAI leader profiles into leaders.json")]
struct Cli {
    /// Leader store (JSON). Overrides LEADERS_STORE_PATH.
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge seed CSV rows and search results into the store (default)
    Update(UpdateArgs),
    /// Show store statistics
    Stats,
    /// Leaders table, optionally filtered by name, company or skill
    List {
        /// Case-insensitive filter term
        term: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
    /// Export leaders as CSV
    Export {
        /// Case-insensitive filter term
        term: Option<String>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Args, Default)]
struct UpdateArgs {
    /// Seed CSV with name,company columns. Overrides LEADERS_SEED_PATH.
    #[arg(long)]
    seed: Option<PathBuf>,
    /// Only use seed rows
    #[arg(long)]
    skip_search: bool,
    /// Report what would be added without writing the store
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut settings = Settings::load()?;
    if let Some(store) = cli.store {
        settings.store_path = store;
    }

    let result = match cli.command.unwrap_or(Commands::Update(UpdateArgs::default())) {
        Commands::Update(args) => update(settings, args).await,
        Commands::Stats => {
            let leaders = store::load(&settings.store_path)?;
            print_stats(&leaders);
            Ok(())
        }
        Commands::List { term, limit } => {
            let leaders = store::load(&settings.store_path)?;
            let rows = filtered(&leaders, term.as_deref());
            if rows.is_empty() {
                println!("No leaders found.");
                return Ok(());
            }
            print_table(&rows, limit);
            Ok(())
        }
        Commands::Export { term, output } => {
            let leaders = store::load(&settings.store_path)?;
            let rows = filtered(&leaders, term.as_deref());
            match output {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("could not create {}", path.display()))?;
                    store::export_csv(file, &rows)?;
                    println!("Exported {} leaders to {}", rows.len(), path.display());
                }
                None => store::export_csv(io::stdout().lock(), &rows)?,
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        eprintln!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    result
}

async fn update(settings: Settings, args: UpdateArgs) -> anyhow::Result<()> {
    let client = if args.skip_search {
        None
    } else {
        match SerpApiClient::from_env(&settings.credential_var, settings.results_per_query) {
            Ok(c) => Some(c),
            Err(e) => {
                warn!("Skipping search step: {}", e);
                None
            }
        }
    };

    let opts = UpdateOptions {
        store_path: settings.store_path,
        seed_path: args.seed.unwrap_or(settings.seed_path),
        queries: settings.queries,
        dry_run: args.dry_run,
        show_progress: true,
    };

    println!("Updating {}...", opts.store_path.display());
    let report = pipeline::run_update(
        &opts,
        client.as_ref().map(|c| c as &dyn SearchProvider),
        &CapitalizedRuns,
    )
    .await?;
    report.print();
    Ok(())
}

fn filtered<'a>(leaders: &'a [LeaderRecord], term: Option<&str>) -> Vec<&'a LeaderRecord> {
    leaders
        .iter()
        .filter(|l| term.map_or(true, |t| store::matches_term(l, t)))
        .collect()
}

fn print_stats(leaders: &[LeaderRecord]) {
    let unknown_company = leaders
        .iter()
        .filter(|l| l.current_role.company == UNKNOWN)
        .count();
    let no_activity = leaders.iter().filter(|l| l.latest_activity.is_empty()).count();

    println!("Leaders:          {}", leaders.len());
    println!("Unknown company:  {}", unknown_company);
    println!("No activity:      {}", no_activity);

    let mut by_company: HashMap<&str, usize> = HashMap::new();
    for l in leaders.iter().filter(|l| l.current_role.company != UNKNOWN) {
        *by_company.entry(l.current_role.company.as_str()).or_default() += 1;
    }
    let mut top: Vec<_> = by_company.into_iter().collect();
    top.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    if !top.is_empty() {
        println!("\n--- Top companies ---");
        for (company, n) in top.iter().take(10) {
            println!("  {:<24} {}", truncate(company, 24), n);
        }
    }
}

fn print_table(rows: &[&LeaderRecord], limit: usize) {
    println!(
        "{:>3} | {:<24} | {:<20} | {:<20} | {:<12} | {:<24}",
        "#", "Name", "Title", "Company", "Region", "Skills"
    );
    println!("{}", "-".repeat(118));

    for (i, l) in rows.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:<24} | {:<20} | {:<20} | {:<12} | {:<24}",
            i + 1,
            truncate(&l.name, 24),
            truncate(&l.current_role.title, 20),
            truncate(&l.current_role.company, 20),
            truncate(&l.region, 12),
            truncate(&l.skills.join(", "), 24),
        );
    }

    if rows.len() > limit {
        println!("\n{} of {} leaders shown", limit, rows.len());
    } else {
        println!("\n{} leaders", rows.len());
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
