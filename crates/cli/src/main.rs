//! Joblens CLI - terminal front end for the Arbeitnow job board
//!
//! Fetches the first page of postings, runs the core filter pipeline
//! client-side and prints tables. Deliberately simpler than the browse
//! session: no cache, no pagination, one fetch per invocation.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use joblens_core::application::{insights, pipeline};
use joblens_core::domain::{FilterState, JobRecord};
use joblens_core::port::JobSource;
use joblens_infra_arbeitnow::{ArbeitnowClient, DEFAULT_API_URL};
use tabled::{Table, Tabled};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "joblens")]
#[command(about = "Browse jobs from the Arbeitnow job board", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Job board API endpoint
    #[arg(long, env = "JOBLENS_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the first page and print matching jobs as a table
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// How many rows to print
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },

    /// Aggregate the first page: top categories, locations and city counts
    Insights {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(Args)]
struct FilterArgs {
    /// Filter jobs by country/location substring (e.g. "germany")
    #[arg(long)]
    country: Option<String>,

    /// Comma-separated keywords matched against title and description
    #[arg(long)]
    keywords: Option<String>,

    /// Filter jobs by type (e.g. "student", "internship")
    #[arg(long)]
    job_type: Option<String>,
}

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "URL")]
    url: String,
}

impl JobRow {
    fn from_record(job: &JobRecord) -> Self {
        Self {
            company: or_na(&job.company_name),
            title: or_na(&job.title),
            location: or_na(job.location.as_deref().unwrap_or_default()),
            url: job.url.clone(),
        }
    }
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Count")]
    count: usize,
}

#[derive(Tabled)]
struct CityRow {
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Lat")]
    lat: f64,
    #[tabled(rename = "Lon")]
    lon: f64,
    #[tabled(rename = "Jobs")]
    count: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let client = ArbeitnowClient::new(cli.api_url.clone())
        .context("Failed to create job board client")?;

    println!("{}", "Fetching latest remote jobs...".blue().bold());
    match cli.command {
        Commands::List { filters, limit } => {
            let jobs = fetch_first_page(&client).await?;
            let visible = apply_filters(&jobs, &filters);

            if visible.is_empty() {
                println!("{}", "No jobs match the given filters.".yellow());
                return Ok(());
            }

            println!("{}", list_heading(limit, &filters).green().bold());
            println!();

            let rows: Vec<JobRow> = visible
                .iter()
                .take(limit)
                .map(|job| JobRow::from_record(job))
                .collect();
            println!("{}", Table::new(rows));
        }

        Commands::Insights { filters } => {
            let jobs = fetch_first_page(&client).await?;
            let visible = apply_filters(&jobs, &filters);

            if visible.is_empty() {
                println!("{}", "No jobs match the given filters.".yellow());
                return Ok(());
            }

            let insights = insights::compute(&visible);

            println!("{}", "Top Job Categories".cyan().bold());
            print_counts(&insights.top_job_types);

            println!("{}", "Top Job Locations".cyan().bold());
            print_counts(&insights.top_locations);

            println!("{}", "Jobs in German Cities".cyan().bold());
            if insights.city_markers.is_empty() {
                println!("{}", "No recognized cities in the current results.".yellow());
            } else {
                let rows: Vec<CityRow> = insights
                    .city_markers
                    .iter()
                    .map(|marker| CityRow {
                        city: title_case(&marker.city),
                        lat: marker.lat,
                        lon: marker.lon,
                        count: marker.count,
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }
    }

    Ok(())
}

async fn fetch_first_page(client: &ArbeitnowClient) -> Result<Vec<JobRecord>> {
    let jobs = client
        .fetch_page(1)
        .await
        .context("Failed to fetch jobs from the job board")?;
    tracing::info!(count = jobs.len(), "first page fetched");
    Ok(jobs)
}

/// Country and keyword filtering reuse the core pipeline. The job-type
/// flag matches against title and description text rather than the
/// job-type list, so loose inputs like "student" still hit Werkstudent
/// postings.
fn apply_filters<'a>(jobs: &'a [JobRecord], args: &FilterArgs) -> Vec<&'a JobRecord> {
    let mut state = FilterState::default();
    if let Some(country) = &args.country {
        state = state.with_location_query(country);
    }
    if let Some(keywords) = &args.keywords {
        state = state.with_keywords(keywords);
    }

    let mut visible = pipeline::apply(jobs, &state);

    if let Some(job_type) = &args.job_type {
        let needle = job_type.to_lowercase();
        visible.retain(|job| {
            job.title.to_lowercase().contains(&needle)
                || job.description_text.to_lowercase().contains(&needle)
        });
    }

    visible
}

fn list_heading(limit: usize, args: &FilterArgs) -> String {
    let mut heading = format!("Top {} Remote Jobs", limit);
    if let Some(country) = &args.country {
        heading.push_str(&format!(" in {}", title_case(country)));
    }
    if let Some(keywords) = &args.keywords {
        let parsed = joblens_core::domain::parse_keywords(keywords);
        if !parsed.is_empty() {
            heading.push_str(&format!(" with keywords: {}", parsed.join(", ")));
        }
    }
    if let Some(job_type) = &args.job_type {
        heading.push_str(&format!(" for {}", title_case(job_type)));
    }
    heading
}

fn print_counts(counts: &[insights::CountedLabel]) {
    if counts.is_empty() {
        println!("{}", "No data to display.".yellow());
        return;
    }
    let rows: Vec<CountRow> = counts
        .iter()
        .map(|entry| CountRow {
            label: entry.label.clone(),
            count: entry.count,
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn init_logging() {
    let log_format = std::env::var("JOBLENS_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("joblens=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}
