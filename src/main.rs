use clap::{Parser, Subcommand};
use date_taken::utils::{analyze_filenames, list_files_walkdir_filtered};
use date_taken::{DateTakenExtractor, analyze_filename};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "date_taken=info";

#[derive(Parser)]
#[command(name = "date-taken", version, about = "Read and write the Date Taken of photos and videos")]
struct Cli {
    /// Path to the exiftool executable (default: search PATH)
    #[arg(long, global = true)]
    exiftool: Option<PathBuf>,

    /// Treat filename timestamps that are not real dates as absent instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse timestamps out of the given strings, without touching the filesystem
    Parse {
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Parse the filenames of every file under a directory and print JSON
    Scan {
        dir: PathBuf,
        /// Include hidden files and directories
        #[arg(long)]
        hidden: bool,
    },
    /// Resolve the Date Taken of files from metadata or filename and print JSON
    Show {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Write the filename timestamp into the metadata of files that lack a Date Taken
    Fix {
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Also replace a Date Taken already present in the metadata
        #[arg(long)]
        overwrite: bool,
        /// Only report what would be written
        #[arg(long)]
        dry_run: bool,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("date_taken=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Parse { names } => {
            for name in names {
                match analyze_filename(&name) {
                    Ok(Some(datetime)) => println!("{name}\t{datetime}"),
                    Ok(None) => println!("{name}\tnone"),
                    Err(e) => println!("{name}\terror: {e}"),
                }
            }
        }
        Command::Scan { dir, hidden } => {
            let files = list_files_walkdir_filtered(&dir, hidden)?;
            info!(count = files.len(), dir = %dir.display(), "scanning filenames");
            let scans: Vec<_> = analyze_filenames(&files)
                .into_iter()
                .map(|scan| match scan.result {
                    Ok(datetime) => json!({ "path": scan.path, "datetime": datetime }),
                    Err(e) => json!({ "path": scan.path, "error": e.to_string() }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&scans)?);
        }
        Command::Show { files } => {
            let mut extractor = DateTakenExtractor::builder()
                .maybe_exiftool_path(cli.exiftool)
                .lenient_filenames(cli.lenient)
                .build()?;
            let mut results = Vec::with_capacity(files.len());
            for path in files {
                let date_taken = extractor.date_taken(&path)?;
                results.push(json!({ "path": path, "dateTaken": date_taken }));
            }
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Fix {
            files,
            overwrite,
            dry_run,
        } => {
            let mut extractor = DateTakenExtractor::builder()
                .maybe_exiftool_path(cli.exiftool)
                .lenient_filenames(cli.lenient)
                .overwrite_existing(overwrite)
                .build()?;
            for path in files {
                let outcome = if dry_run {
                    extractor.planned_update(&path)?
                } else {
                    extractor.update_date_taken(&path)?
                };
                match outcome {
                    Some(datetime) if dry_run => {
                        println!("{}\twould write {datetime}", path.display());
                    }
                    Some(datetime) => println!("{}\twrote {datetime}", path.display()),
                    None => println!("{}\tunchanged", path.display()),
                }
            }
        }
    }

    Ok(())
}
