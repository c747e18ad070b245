use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use rollcall_core::{
    DepartmentCatalog, InstructorClusters, ProfessorPayload, RawCourseRecord, RollcallConfig,
    SubjectCatalogIndex, load_json, load_json_or_default, parse_cutoff_date, save_json,
};
use rollcall_recon::{CourseMatcher, DepartmentMatcher, ReviewPipeline, missing_course_ids};

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "rollcall",
    about = "Reconcile scraped course listings and instructor reviews against official catalogs",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output in JSON format (for scripts).
    /// Also enabled by setting ROLLCALL_JSON=1.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless ROLLCALL_LOG says otherwise.
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Config file to use instead of the standard location.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Recover course ids from raw listing records and merge their staff.
    Courses {
        /// Subject → catalog-number index.
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Raw course records from the listing scraper.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Course ids the scraper already knows it could not fetch.
        #[arg(long)]
        failed: Option<PathBuf>,
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Build instructor records and finalized reviews from professor payloads.
    Reviews {
        /// Keep reviews posted on or after this date (YYYY-MM-DD).
        cutoff: Option<String>,
        #[arg(long)]
        professors: Option<PathBuf>,
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[arg(long)]
        departments: Option<PathBuf>,
        /// Authoritative instructor id clusters.
        #[arg(long)]
        clusters: Option<PathBuf>,
        /// Where to write reviews; printed to stdout when omitted.
        #[arg(long)]
        output: Option<PathBuf>,
        #[arg(long)]
        instructors_output: Option<PathBuf>,
    },

    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

// ─── Config Actions ──────────────────────────────────────────────────────────

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location.
    Path,
    /// Print the effective configuration.
    Show,
    /// Write a default config file unless one exists.
    Init,
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() {
    let start = Instant::now();
    let cli = Cli::parse();

    let json_output = cli.json || std::env::var("ROLLCALL_JSON").as_deref() == Ok("1");
    init_tracing(cli.verbose);

    if let Err(e) = run(cli, json_output, start) {
        if json_output {
            let envelope = serde_json::json!({
                "status": "error",
                "message": format!("{e:#}"),
                "meta": { "duration_ms": start.elapsed().as_millis() }
            });
            println!("{envelope}");
        } else {
            eprintln!("Error: {e:#}");
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli, json_output: bool, start: Instant) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(RollcallConfig::config_path);
    // `config path` must work even when the file itself is broken.
    let load_config = || {
        let loaded = match &cli.config {
            Some(path) => RollcallConfig::load_from(path),
            None => RollcallConfig::load(),
        };
        loaded.with_context(|| format!("loading config {}", config_path.display()))
    };

    match cli.command {
        // ── Courses ────────────────────────────────────────────────────────

        Commands::Courses {
            catalog,
            input,
            failed,
            output,
        } => {
            let config = load_config()?;
            let catalog = catalog.unwrap_or_else(|| config.subject_catalogs_path());
            let input = input.unwrap_or_else(|| config.course_records_path());
            let failed = failed.unwrap_or_else(|| config.failed_ids_path());
            let output = output.unwrap_or_else(|| config.processed_courses_path());

            let index: SubjectCatalogIndex = load_json(&catalog)?;
            let records: Vec<RawCourseRecord> = load_json(&input)?;
            let failed_ids: BTreeSet<String> = load_json_or_default(&failed)?;

            let matcher = CourseMatcher::new()
                .with_prefix_agreement(config.matching.prefix_agreement)
                .with_min_subject_letters(config.matching.min_subject_letters);
            let reconciliation = matcher.reconcile(&records, &index);
            save_json(&output, &reconciliation.courses)?;

            let report = missing_course_ids(&index, &reconciliation.used_ids, &failed_ids);
            if !report.is_complete() {
                warn!(missing = report.missing.len(), "catalog ids were never reconciled");
            }
            info!(output = %output.display(), "wrote processed courses");

            let dur = start.elapsed().as_millis();
            if json_output {
                print_json(&serde_json::json!({
                    "status": "ok",
                    "data": {
                        "records": records.len(),
                        "courses": reconciliation.courses.len(),
                        "output": output,
                        "missing": report.missing,
                    },
                    "meta": { "duration_ms": dur }
                }))?;
            } else {
                println!(
                    "Reconciled {} courses from {} records → {}",
                    reconciliation.courses.len(),
                    records.len(),
                    output.display()
                );
                if report.is_complete() {
                    println!("Every catalog id was reconciled or is a known failure.");
                } else {
                    println!("{} catalog ids never reconciled:", report.missing.len());
                    for id in &report.missing {
                        println!("  {id}");
                    }
                }
            }
        }

        // ── Reviews ────────────────────────────────────────────────────────

        Commands::Reviews {
            cutoff,
            professors,
            catalog,
            departments,
            clusters,
            output,
            instructors_output,
        } => {
            let config = load_config()?;
            let cutoff = match cutoff.or_else(|| config.reviews.cutoff_date.clone()) {
                Some(raw) => parse_cutoff_date(&raw)?,
                None => return Err(anyhow!("no cutoff date given and none configured")),
            };
            let professors = professors.unwrap_or_else(|| config.professor_payloads_path());
            let catalog = catalog.unwrap_or_else(|| config.subject_catalogs_path());
            let departments = departments.unwrap_or_else(|| config.department_catalog_path());
            let clusters = clusters.unwrap_or_else(|| config.instructor_clusters_path());

            let payloads: Vec<ProfessorPayload> = load_json(&professors)?;
            let index: SubjectCatalogIndex = load_json(&catalog)?;
            let department_catalog: DepartmentCatalog = load_json(&departments)?;
            let id_clusters: InstructorClusters = load_json(&clusters)?;

            let pipeline = ReviewPipeline::new()
                .with_department_matcher(
                    DepartmentMatcher::new()
                        .with_overrides(config.departments.extra_overrides.clone()),
                )
                .with_user_id_prefix(config.reviews.user_id_prefix.clone());
            let outcome =
                pipeline.run(&payloads, &index, &department_catalog, &id_clusters, cutoff);

            if let Some(path) = &instructors_output {
                save_json(path, &outcome.instructors)?;
                info!(output = %path.display(), "wrote instructors");
            }
            if let Some(path) = &output {
                save_json(path, &outcome.reviews)?;
                info!(output = %path.display(), "wrote reviews");
            }

            let dur = start.elapsed().as_millis();
            if json_output {
                let mut data = serde_json::json!({
                    "instructors": outcome.instructors.len(),
                    "reviews": outcome.reviews.len(),
                    "diagnostics": outcome.diagnostics,
                });
                if output.is_none() {
                    data["items"] = serde_json::to_value(&outcome.reviews)?;
                }
                print_json(&serde_json::json!({
                    "status": "ok",
                    "data": data,
                    "meta": { "duration_ms": dur }
                }))?;
            } else if output.is_none() {
                println!("{}", serde_json::to_string(&outcome.reviews)?);
            } else {
                println!(
                    "Processed {} instructors, kept {} reviews ({} ambiguous instructor ids)",
                    outcome.instructors.len(),
                    outcome.reviews.len(),
                    outcome.diagnostics.ambiguities.len()
                );
            }
        }

        // ── Config ─────────────────────────────────────────────────────────

        Commands::Config { action } => {
            let dur = start.elapsed().as_millis();
            match action {
                ConfigAction::Path => {
                    if json_output {
                        print_json(&serde_json::json!({"status":"ok","data":{"path":config_path,"exists":config_path.exists()},"meta":{"duration_ms":dur}}))?;
                    } else {
                        println!("{}", config_path.display());
                    }
                }
                ConfigAction::Show => {
                    let config = load_config()?;
                    if json_output {
                        print_json(&serde_json::json!({"status":"ok","data":config,"meta":{"duration_ms":dur}}))?;
                    } else {
                        print!("{}", toml::to_string_pretty(&config)?);
                    }
                }
                ConfigAction::Init => {
                    let created = !config_path.exists();
                    if created {
                        RollcallConfig::default().save_to(&config_path)?;
                    }
                    if json_output {
                        print_json(&serde_json::json!({"status":"ok","data":{"path":config_path,"created":created},"meta":{"duration_ms":dur}}))?;
                    } else if created {
                        println!("Wrote default config to {}", config_path.display());
                    } else {
                        println!("Config already exists at {}", config_path.display());
                    }
                }
            }
        }
    }

    Ok(())
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn print_json(val: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(val)?);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("ROLLCALL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn broken_config() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[matching\nprefix_agreement = ").unwrap();
        (dir, path)
    }

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    #[test]
    fn test_config_path_ignores_broken_file() {
        let (_dir, path) = broken_config();
        let path = path.to_str().unwrap();
        assert!(run(cli(&["rollcall", "--config", path, "config", "path"]), false, Instant::now()).is_ok());
        assert!(run(cli(&["rollcall", "--config", path, "config", "show"]), false, Instant::now()).is_err());
    }

    #[test]
    fn test_config_init_writes_loadable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let arg = path.to_str().unwrap();

        run(cli(&["rollcall", "--config", arg, "config", "init"]), true, Instant::now()).unwrap();
        assert!(path.exists());
        let loaded = RollcallConfig::load_from(&path).unwrap();
        assert_eq!(loaded.matching.prefix_agreement, 4);
    }
}
