// src/cli.rs
use std::{env, path::{Path, PathBuf}};

use crate::aliases::AliasTable;
use crate::config::options::ScanOptions;
use crate::progress::Progress;

/// Prints scan progress to the console.
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        println!("Scanning {} document(s)...", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_started(&mut self, name: &str) {
        println!("Analyzing: {} ...", name);
    }
    fn item_failed(&mut self, name: &str, err: &str) {
        eprintln!("Read error {}: {}", name, err);
    }
    fn finish(&mut self, out: &Path) {
        println!("{}", "-".repeat(30));
        println!("Done. Wrote {}", out.display());
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cli(env::args().skip(1))?;

    let table = match &opts.aliases_file {
        Some(path) => AliasTable::load(path)?,
        None => AliasTable::default(),
    };

    if opts.list_aliases {
        for loc in table.locations() {
            println!("{},{}", loc.name, loc.aliases.join(","));
        }
        return Ok(());
    }

    let summary = crate::runner::run(&opts, &table, Some(&mut ConsoleProgress))?;
    println!(
        "{} document(s) scanned, {} skipped, {} match(es).",
        summary.documents_scanned,
        summary.failed.len(),
        summary.total_matches
    );
    Ok(())
}

pub fn parse_cli<I>(args: I) -> Result<ScanOptions, Box<dyn std::error::Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = ScanOptions::default();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => opts.input_dir = PathBuf::from(args.next().ok_or("Missing input directory")?),
            "-o" | "--out" => opts.out_dir = PathBuf::from(args.next().ok_or("Missing output directory")?),
            "--ext" => {
                let v = args.next().ok_or("Missing value for --ext")?;
                opts.set_ext(&v);
                if opts.ext.is_empty() { return Err("Empty extension".into()); }
            }
            "--aliases" => opts.aliases_file = Some(PathBuf::from(args.next().ok_or("Missing alias file")?)),
            "--list-aliases" => opts.list_aliases = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> { v.iter().map(|s| s!(*s)).collect() }

    #[test]
    fn defaults_without_flags() {
        let o = parse_cli(args(&[])).unwrap();
        assert_eq!(o, ScanOptions::default());
    }

    #[test]
    fn flags_override_defaults() {
        let o = parse_cli(args(&["--input", "texts", "-o", "res", "--ext", ".md", "--list-aliases"])).unwrap();
        assert_eq!(o.input_dir, PathBuf::from("texts"));
        assert_eq!(o.out_dir, PathBuf::from("res"));
        assert_eq!(o.ext, "md");
        assert!(o.list_aliases);
    }

    #[test]
    fn unknown_and_incomplete_flags_fail() {
        assert!(parse_cli(args(&["--bogus"])).is_err());
        assert!(parse_cli(args(&["--input"])).is_err());
        assert!(parse_cli(args(&["--ext", "."])).is_err());
    }
}
