//! analytix CLI - Resolve YouTube Analytics requests to report types
//!
//! Usage:
//!   analytix resolve [-d <dimension>]... [-m <metric>]... [-f <key=value>]... [-s <sort>]...
//!   analytix list [--domain <domain>]
//!   analytix show <name>
//!
//! Examples:
//!   analytix resolve -d day -m views -m likes
//!   analytix resolve -d video -s -views --max-results 10
//!   analytix list --domain playlist
//!   analytix show "Top videos by region" --format json

use analytix::catalog;
use analytix::config::Settings;
use analytix::model::{Domain, ReportKind, ReportRequest, ReportType};
use analytix::resolver::ReportTypeResolver;
use analytix::{ResolveError, ValidationError};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "analytix")]
#[command(about = "analytix - Resolve YouTube Analytics requests to report types")]
#[command(version)]
struct Cli {
    /// Path to a settings file (defaults to the usual search locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a request to its report type and validate it
    Resolve {
        /// Dimension to request (repeatable)
        #[arg(short, long = "dimension")]
        dimensions: Vec<String>,

        /// Filter as key=value (repeatable)
        #[arg(short, long = "filter", value_parser = parse_filter)]
        filters: Vec<(String, String)>,

        /// Metric to request (repeatable; none means all)
        #[arg(short, long = "metric")]
        metrics: Vec<String>,

        /// Sort option, prefix with '-' for descending (repeatable)
        #[arg(short, long = "sort", allow_hyphen_values = true)]
        sort: Vec<String>,

        /// Maximum number of rows, 0 for no limit
        #[arg(long)]
        max_results: Option<u32>,

        /// First day of the range (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(long)]
        end_date: Option<NaiveDate>,

        /// ISO 4217 currency code
        #[arg(long)]
        currency: Option<String>,

        /// One-indexed first row
        #[arg(long)]
        start_index: Option<u32>,

        /// Include data from before the channel joined its current owner
        #[arg(long)]
        include_historical_data: bool,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },

    /// List report types in evaluation order
    List {
        /// Only list report types of this domain
        #[arg(long)]
        domain: Option<DomainArg>,
    },

    /// Show a report type's allowed dimensions, filters and metrics
    Show {
        /// Report type name (case-insensitive)
        name: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Clone, ValueEnum)]
enum DomainArg {
    Video,
    Playlist,
    AdPerformance,
}

impl From<DomainArg> for Domain {
    fn from(arg: DomainArg) -> Self {
        match arg {
            DomainArg::Video => Domain::Video,
            DomainArg::Playlist => Domain::Playlist,
            DomainArg::AdPerformance => Domain::AdPerformance,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON
    Json,
}

fn parse_filter(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{}'", s)),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&settings);

    match cli.command {
        Commands::Resolve {
            dimensions,
            filters,
            metrics,
            sort,
            max_results,
            start_date,
            end_date,
            currency,
            start_index,
            include_historical_data,
            format,
        } => {
            let mut request = match settings.request() {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Error applying settings: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            request = request
                .with_dimensions(dimensions)
                .with_metrics(metrics);
            for (key, value) in filters {
                request = request.with_filter(key, value);
            }
            for option in sort {
                request = request.with_sort(option);
            }
            if let Some(n) = max_results {
                request.max_results = Some(n);
            }
            request.start_date = start_date;
            request.end_date = end_date;
            if let Some(currency) = currency {
                request.currency = currency;
            }
            if let Some(index) = start_index {
                request.start_index = index;
            }
            request.include_historical_data |= include_historical_data;

            cmd_resolve(&request, format)
        }
        Commands::List { domain } => cmd_list(domain.map(Domain::from)),
        Commands::Show { name, format } => cmd_show(&name, format),
    }
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_resolve(request: &ReportRequest, format: OutputFormat) -> ExitCode {
    let resolver = ReportTypeResolver::new();

    match (resolver.resolve(request), format) {
        (Ok(report_type), OutputFormat::Text) => {
            println!("{}", report_type.name);
            println!("  metrics: {}", request.effective_metrics(report_type).join(", "));
            if let Some(limit) = report_type.max_results() {
                println!("  max results: {}", request.limit().unwrap_or(limit));
            }
            ExitCode::SUCCESS
        }
        (Ok(report_type), OutputFormat::Json) => {
            let output = serde_json::json!({
                "report_type": report_type.name,
                "metrics": request.effective_metrics(report_type),
                "max_results": report_type.max_results().map(|m| request.limit().unwrap_or(m)),
            });
            print_json(&output)
        }
        (Err(ResolveError::Invalid { report_type, violations }), OutputFormat::Text) => {
            eprintln!("Invalid request for report type '{}':", report_type);
            for violation in &violations {
                eprintln!("  - {}", violation);
            }
            ExitCode::FAILURE
        }
        (Err(ResolveError::Invalid { report_type, violations }), OutputFormat::Json) => {
            let output = violations_json(&report_type, &violations);
            match serde_json::to_string_pretty(&output) {
                Ok(json) => println!("{}", json),
                Err(e) => eprintln!("Error serializing output: {}", e),
            }
            ExitCode::FAILURE
        }
        (Err(e), _) => {
            eprintln!("Resolution error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn violations_json(report_type: &str, violations: &[ValidationError]) -> serde_json::Value {
    serde_json::json!({
        "report_type": report_type,
        "violations": violations.iter().map(ToString::to_string).collect::<Vec<_>>(),
    })
}

fn cmd_list(domain: Option<Domain>) -> ExitCode {
    for (rank, report_type) in catalog::catalog().iter().enumerate() {
        if domain.is_some_and(|d| d != report_type.domain) {
            continue;
        }
        let detail = match report_type.kind {
            ReportKind::General => String::new(),
            ReportKind::Detailed { max_results, .. } => format!(" (detailed, max {})", max_results),
        };
        println!(
            "{:>2}. [{}] {}{}",
            rank + 1,
            report_type.domain,
            report_type.name,
            detail
        );
    }
    ExitCode::SUCCESS
}

fn cmd_show(name: &str, format: OutputFormat) -> ExitCode {
    let Some(report_type) = catalog::find_ignore_case(name) else {
        eprintln!("Report type not found: {}", name);
        return ExitCode::FAILURE;
    };

    match format {
        OutputFormat::Json => print_json(report_type),
        OutputFormat::Text => {
            print_report_type(report_type);
            ExitCode::SUCCESS
        }
    }
}

fn print_report_type(report_type: &ReportType) {
    println!("{}", report_type.name);
    println!("  domain: {}", report_type.domain);
    if let Some(rank) = catalog::rank(report_type) {
        println!("  rank: {}", rank + 1);
    }
    println!("  dimensions: {}", report_type.dimensions.join(", "));
    println!("  filters:");
    for (key, _) in report_type.filters {
        let required = if report_type.required_filters.contains(key) {
            " (required)"
        } else {
            ""
        };
        println!("    - {}{}", key, required);
    }
    println!("  metrics: {}", report_type.metrics.join(", "));
    if let ReportKind::Detailed {
        sort_options,
        max_results,
    } = report_type.kind
    {
        println!("  sort options: {} (descending only)", sort_options.join(", "));
        println!("  max results: {}", max_results);
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> ExitCode {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            ExitCode::FAILURE
        }
    }
}
