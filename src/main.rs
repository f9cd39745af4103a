use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::Parser;

use style_scanner::{ScanOptions, StyleScanner, report, utils::file_utils};

#[derive(Parser, Debug)]
#[command(
    name = "style-scanner",
    version,
    about = "Collect CSS class usage from markup files into a text report"
)]
struct Cli {
    /// Root directory to scan; prompted for interactively when omitted
    root: Option<PathBuf>,

    /// Markup extensions to scan (comma separated), replacing the default set
    #[arg(long, value_delimiter = ',')]
    extensions: Vec<String>,

    /// Print the scan result as JSON to stdout instead of writing a report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let root = match cli.root {
        Some(root) => root,
        None => prompt_for_root()?,
    };
    if !root.is_dir() {
        bail!("{} is not a directory", root.display());
    }

    let mut options = ScanOptions::default();
    if !cli.extensions.is_empty() {
        options.extensions = cli.extensions;
    }

    let scanner = StyleScanner::new(options);
    let result = scanner.scan_directory(&root)?;

    if cli.json {
        let json =
            serde_json::to_string_pretty(&result).context("Failed to serialize scan result")?;
        println!("{json}");
        return Ok(());
    }

    let now = Local::now();
    let body = report::render(&result, &root, now);
    let report_path = report::report_path(&root, now)?;
    file_utils::write_string_to_file(&report_path, &body)?;
    println!("Report saved to {}", report_path.display());

    Ok(())
}

fn prompt_for_root() -> Result<PathBuf> {
    print!("Enter the directory to scan: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    Ok(PathBuf::from(input.trim()))
}
