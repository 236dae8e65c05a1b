use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use ledgersift_core::{Ruleset, Transaction};
use ledgersift_ingest::{parse_chequing, parse_csv_export, parse_visa};

mod config;
mod output;

#[derive(Parser, Debug)]
#[command(
    name = "ledgersift",
    version,
    about = "Extract normalized transactions from bank statement text"
)]
struct Cli {
    /// Statement file, or directory of statement files (.txt, .html, .csv)
    path: PathBuf,

    /// Path to the JSON rules config
    #[arg(long, short, default_value = "config.json")]
    config: PathBuf,

    /// Path to the output file
    #[arg(long, short, default_value = "out.txt")]
    out: PathBuf,

    /// Statement start date (YYYY-MM-DD), for documents without a period header
    #[arg(long)]
    start_date: Option<NaiveDate>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let rules = config::load_rules(&cli.config)?;
    let files = collect_files(&cli.path)?;
    if files.is_empty() {
        bail!(
            "no statement files (.txt/.html/.csv) found at {}",
            cli.path.display()
        );
    }

    let mut transactions = Vec::new();
    for file in &files {
        let txns = extract_file(file, cli.start_date, &rules)
            .with_context(|| format!("extracting {}", file.display()))?;
        println!("Parsed {} transaction(s) from {}", txns.len(), file.display());
        transactions.extend(txns);
    }

    // stable, keyed on date only: same-day entries keep file order
    transactions.sort_by_key(|tx| tx.date);

    let mut rows = String::new();
    for tx in &transactions {
        rows.push_str(&output::format_row(tx, false));
        rows.push('\n');
    }
    fs::write(&cli.out, &rows).with_context(|| format!("write {}", cli.out.display()))?;

    println!();
    for tx in &transactions {
        println!("{}", output::format_row(tx, true));
    }
    println!();
    println!(
        "Parsing files > \"{}\"... OK: {} entr(ies) in result",
        cli.out.display(),
        transactions.len()
    );

    Ok(())
}

fn collect_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    if path.is_dir() {
        let mut files = Vec::new();
        for entry in
            fs::read_dir(path).with_context(|| format!("read directory {}", path.display()))?
        {
            let p = entry?.path();
            if p.is_file() && has_statement_extension(&p) {
                files.push(p);
            }
        }
        files.sort();
        return Ok(files);
    }

    bail!("{} is neither a file nor a directory", path.display())
}

fn has_statement_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "txt" | "html" | "csv"))
}

/// Pick the pipeline for a file: CSV exports by extension, chequing
/// statements by file name, everything else goes through the visa parser.
fn extract_file(
    path: &Path,
    start_date: Option<NaiveDate>,
    rules: &Ruleset,
) -> Result<Vec<Transaction>> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;

    if path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"))
    {
        return parse_csv_export(&raw, rules);
    }

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if name.contains("chequing statement") {
        return parse_chequing(&raw, start_date, rules);
    }

    parse_visa(&raw, start_date, rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statement_extensions() {
        assert!(has_statement_extension(Path::new("a/chequing statement.html")));
        assert!(has_statement_extension(Path::new("visa.TXT")));
        assert!(has_statement_extension(Path::new("export.csv")));
        assert!(!has_statement_extension(Path::new("statement.pdf")));
        assert!(!has_statement_extension(Path::new("README")));
    }
}
