//! Command implementations for the diocese importer CLI
//!
//! Contains the command execution logic: configuration layering, input
//! discovery, concurrent parsing with progress reporting, store commits and
//! the final reports.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use colored::Colorize;
use futures::future::join_all;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::app::models::ParsedZone;
use crate::app::services::json_store::{JsonStore, StoredCatalog};
use crate::app::services::record_builder::{CodePrefixes, build_records};
use crate::app::services::zone_parser::{ParseStats, parse_zones_with_stats};
use crate::cli::args::{Args, Commands, ImportArgs, InspectArgs, OutputFormat};
use crate::config::Config;
use crate::constants::TEXT_FILE_EXTENSIONS;
use crate::{Error, Result};

/// Outcome of one import or inspect run, for reporting
#[derive(Debug, Clone, Default)]
pub struct ImportOutcome {
    /// Number of input files parsed
    pub files_processed: usize,
    /// Zones parsed out of this run's input
    pub zones_imported: usize,
    /// Parishes parsed out of this run's input
    pub parishes_imported: usize,
    /// Staff entries parsed out of this run's input
    pub staff_imported: usize,
    /// Zones in the committed snapshot (merge result), when one was committed
    pub catalog_zones: usize,
    /// Parishes in the committed snapshot, when one was committed
    pub catalog_parishes: usize,
    /// Aggregated parser counters across all input files
    pub parse_stats: ParseStats,
    /// Whether the catalog was replaced instead of merged
    pub replace: bool,
    /// Whether this was a dry run
    pub dry_run: bool,
    /// Committed generation id, `None` for dry runs and inspections
    pub generation: Option<String>,
    /// Total processing time
    pub processing_time: Duration,
}

/// Main command runner for the diocese importer
pub async fn run(args: Args) -> Result<ImportOutcome> {
    match args.get_command() {
        Commands::Import(import_args) => run_import(import_args).await,
        Commands::Inspect(inspect_args) => run_inspect(inspect_args).await,
    }
}

/// Execute the import command: parse, build records, commit a generation.
async fn run_import(args: ImportArgs) -> Result<ImportOutcome> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting diocese import");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = load_configuration(&args)?;

    let files = discover_input_files(&args.input)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No directory text files found under '{}'",
            args.input.display()
        )));
    }
    info!(
        "Importing {} file(s) from {}",
        files.len(),
        args.input.display()
    );

    // Set up progress reporting
    let progress = if args.show_progress() {
        Some(make_progress_bar(files.len()))
    } else {
        None
    };

    let (zones, parse_stats) = parse_input_files(&files, progress.clone()).await?;

    if let Some(pb) = &progress {
        pb.finish_with_message("Parsing complete");
    }

    if parse_stats.staff_unresolved > 0 {
        warn!(
            "{} staffing line(s) carried a role keyword but no readable name",
            parse_stats.staff_unresolved
        );
    }

    let prefixes = CodePrefixes {
        zone: config.codes.zone_prefix.clone(),
        parish: config.codes.parish_prefix.clone(),
    };
    let records = build_records(&zones, &prefixes)?;

    let mut outcome = ImportOutcome {
        files_processed: files.len(),
        zones_imported: records.zones.len(),
        parishes_imported: records.parishes.len(),
        staff_imported: records.staff_count(),
        parse_stats,
        replace: args.replace,
        dry_run: args.dry_run,
        ..Default::default()
    };

    if args.dry_run {
        info!("Dry run - nothing will be committed");
    } else {
        config.ensure_store_directory()?;
        let store = JsonStore::open(
            &config.store.root,
            config.store.keep_generations,
            config.store.pretty_json,
        )?;

        let incoming = StoredCatalog::from_records(records);
        let catalog = if args.replace {
            incoming
        } else {
            match store.load_current()? {
                Some(existing) => existing.merged_with(&incoming),
                None => incoming,
            }
        };

        let source_files: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        let manifest = store.commit(&catalog, &source_files, args.replace)?;

        outcome.catalog_zones = manifest.zones;
        outcome.catalog_parishes = manifest.parishes;
        outcome.generation = Some(manifest.generation);
    }

    outcome.processing_time = start_time.elapsed();

    generate_import_report(args.output_format, &outcome)?;

    Ok(outcome)
}

/// Execute the inspect command: parse and report, never write.
async fn run_inspect(args: InspectArgs) -> Result<ImportOutcome> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), false)?;
    args.validate()?;

    let files = discover_input_files(&args.input)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No directory text files found under '{}'",
            args.input.display()
        )));
    }

    let (zones, parse_stats) = parse_input_files(&files, None).await?;

    generate_inspect_report(args.output_format, &zones, &parse_stats, args.detailed)?;

    let outcome = ImportOutcome {
        files_processed: files.len(),
        zones_imported: zones.len(),
        parishes_imported: zones.iter().map(|z| z.parishes.len()).sum(),
        staff_imported: zones.iter().map(|z| z.staff_count()).sum(),
        parse_stats,
        dry_run: true,
        processing_time: start_time.elapsed(),
        ..Default::default()
    };

    Ok(outcome)
}

/// Set up structured logging based on the chosen level
fn setup_logging(level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("diocese_importer={}", level)));

    // try_init: repeated setup (tests, re-entrant runs) keeps the first subscriber
    if quiet {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init();
    }

    debug!("Logging initialized at level: {}", level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> args)
fn load_configuration(args: &ImportArgs) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path()
            .ok()
            .filter(|path| path.exists())
    } else {
        None
    };

    let config_file = args
        .config_file
        .as_deref()
        .or(default_config_path.as_deref());

    match config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults"),
    }

    let mut config = Config::load_layered(config_file)?;

    // Apply CLI argument overrides
    if let Some(store_path) = &args.store_path {
        config.store.root = store_path.clone();
    }
    if let Some(prefix) = &args.zone_prefix {
        config.codes.zone_prefix = prefix.clone();
    }
    if let Some(prefix) = &args.parish_prefix {
        config.codes.parish_prefix = prefix.clone();
    }
    config.logging.level = args.get_log_level().to_string();

    config.validate()?;
    Ok(config)
}

/// Collect the input files to parse: the file itself, or every text file
/// under a directory in path order.
fn discover_input_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(Error::file_not_found(input.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let is_text = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| TEXT_FILE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
            .unwrap_or(false);

        if is_text {
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!("Discovered {} input file(s)", files.len());
    Ok(files)
}

/// Parse input files concurrently, preserving file order in the result.
///
/// The parser is pure, so one task per file is safe; zones are concatenated
/// in the discovered (sorted) order regardless of completion order.
async fn parse_input_files(
    files: &[PathBuf],
    progress: Option<ProgressBar>,
) -> Result<(Vec<ParsedZone>, ParseStats)> {
    let mut handles = Vec::with_capacity(files.len());

    for path in files.iter().cloned() {
        let progress = progress.clone();
        handles.push(tokio::spawn(async move {
            let text = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::io(format!("Failed to read '{}'", path.display()), e))?;

            let result = parse_zones_with_stats(&text);
            debug!(
                "Parsed {}: {} zone(s), {} parish block(s)",
                path.display(),
                result.zones.len(),
                result.stats.parish_blocks
            );

            if let Some(pb) = &progress {
                pb.inc(1);
            }

            Ok::<_, Error>(result)
        }));
    }

    let mut zones = Vec::new();
    let mut stats = ParseStats::new();

    for (handle, path) in join_all(handles).await.into_iter().zip(files) {
        let result = handle.map_err(|e| {
            Error::io_error(format!("Parse task for '{}' failed: {}", path.display(), e))
        })??;

        stats.absorb(&result.stats);
        zones.extend(result.zones);
    }

    Ok((zones, stats))
}

fn make_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Parsing directory text...");
    pb
}

// =============================================================================
// Reports
// =============================================================================

/// Generate the final import report
fn generate_import_report(format: OutputFormat, outcome: &ImportOutcome) -> Result<()> {
    match format {
        OutputFormat::Human => generate_human_report(outcome),
        OutputFormat::Json => generate_json_report(outcome),
        OutputFormat::Csv => generate_csv_report(outcome),
    }
}

/// Generate human-readable import report
fn generate_human_report(outcome: &ImportOutcome) -> Result<()> {
    let duration = HumanDuration(outcome.processing_time);

    println!();
    if outcome.dry_run {
        println!("{}", "Dry run complete - nothing committed".yellow().bold());
    } else {
        println!("{}", "Import complete".green().bold());
    }
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   • Files processed: {}", outcome.files_processed);
    println!("   • Zones parsed: {}", outcome.zones_imported);
    println!("   • Parishes parsed: {}", outcome.parishes_imported);
    println!("   • Staff entries: {}", outcome.staff_imported);

    if let Some(generation) = &outcome.generation {
        let mode = if outcome.replace { "replace" } else { "merge" };
        println!("   • Committed generation: {} ({})", generation.cyan(), mode);
        println!(
            "   • Catalog now holds: {} zones, {} parishes",
            outcome.catalog_zones, outcome.catalog_parishes
        );
    }

    println!("   • Processing time: {}", duration);

    if outcome.parse_stats.staff_unresolved > 0 {
        println!(
            "{}",
            format!(
                "   ! {} staffing line(s) had a role keyword but no readable name",
                outcome.parse_stats.staff_unresolved
            )
            .yellow()
        );
    }

    if outcome.parse_stats.zones_dropped > 0 {
        println!(
            "{}",
            format!(
                "   ! {} zone header(s) had no parishes and were dropped",
                outcome.parse_stats.zones_dropped
            )
            .yellow()
        );
    }

    println!();
    Ok(())
}

/// Generate JSON report for machine consumption
fn generate_json_report(outcome: &ImportOutcome) -> Result<()> {
    let json_stats = serde_json::json!({
        "files_processed": outcome.files_processed,
        "zones_imported": outcome.zones_imported,
        "parishes_imported": outcome.parishes_imported,
        "staff_imported": outcome.staff_imported,
        "catalog_zones": outcome.catalog_zones,
        "catalog_parishes": outcome.catalog_parishes,
        "replace": outcome.replace,
        "dry_run": outcome.dry_run,
        "generation": outcome.generation,
        "processing_time_seconds": outcome.processing_time.as_secs_f64(),
        "parse_stats": serde_json::to_value(&outcome.parse_stats)?,
    });

    println!("{}", serde_json::to_string_pretty(&json_stats)?);
    Ok(())
}

/// Generate CSV report for data analysis
fn generate_csv_report(outcome: &ImportOutcome) -> Result<()> {
    println!("metric,value");
    println!("files_processed,{}", outcome.files_processed);
    println!("zones_imported,{}", outcome.zones_imported);
    println!("parishes_imported,{}", outcome.parishes_imported);
    println!("staff_imported,{}", outcome.staff_imported);
    println!("catalog_zones,{}", outcome.catalog_zones);
    println!("catalog_parishes,{}", outcome.catalog_parishes);
    println!(
        "generation,{}",
        outcome.generation.as_deref().unwrap_or("")
    );
    println!(
        "processing_time_seconds,{}",
        outcome.processing_time.as_secs_f64()
    );
    println!("staff_unresolved,{}", outcome.parse_stats.staff_unresolved);

    Ok(())
}

/// Generate the inspection report
fn generate_inspect_report(
    format: OutputFormat,
    zones: &[ParsedZone],
    stats: &ParseStats,
    detailed: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => generate_inspect_human(zones, stats, detailed),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "zones": serde_json::to_value(zones)?,
                "stats": serde_json::to_value(stats)?,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(())
        }
        OutputFormat::Csv => {
            println!("zone,parishes,staff");
            for zone in zones {
                println!(
                    "{},{},{}",
                    csv_field(&zone.name),
                    zone.parishes.len(),
                    zone.staff_count()
                );
            }
            Ok(())
        }
    }
}

/// Generate human-readable inspection report
fn generate_inspect_human(zones: &[ParsedZone], stats: &ParseStats, detailed: bool) -> Result<()> {
    println!();
    println!("{}", "Directory inspection".bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if zones.is_empty() {
        println!("{}", "No zones recognized in the input".yellow());
    }

    for zone in zones {
        println!(
            "{} - {} parish(es), {} staff",
            zone.name.bold(),
            zone.parishes.len(),
            zone.staff_count()
        );

        if detailed {
            for parish in &zone.parishes {
                match &parish.place {
                    Some(place) => println!("   • {} ({})", parish.name, place),
                    None => println!("   • {}", parish.name),
                }

                for entry in &parish.staff {
                    match &entry.congregation {
                        Some(congregation) => {
                            println!("       {}: {} [{}]", entry.role, entry.name, congregation)
                        }
                        None => println!("       {}: {}", entry.role, entry.name),
                    }
                }
            }
        }
    }

    println!();
    println!(
        "{} line(s) read, {} blank, {} outside any parish block",
        stats.lines_total, stats.lines_blank, stats.lines_discarded
    );
    if stats.staff_lines_seen() > 0 {
        println!(
            "Staffing lines resolved: {}/{} ({:.0}%)",
            stats.staff_found,
            stats.staff_lines_seen(),
            stats.staff_resolution_rate()
        );
    }
    if stats.zones_dropped > 0 {
        println!(
            "{}",
            format!("{} zone header(s) had no parishes", stats.zones_dropped).yellow()
        );
    }
    println!();

    Ok(())
}

/// Quote a CSV field when it carries separators
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
