use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use clap::Parser;

use dirscope::cli::Cli;
use dirscope::config::Config;
use dirscope::error::Error;
use dirscope::history::History;
use dirscope::report;
use dirscope::snapshot::{self, Snapshot};

fn main() {
    init_logger();

    let cli = Cli::parse();

    let config = match Config::from_args(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    // The tracked directory must be readable when the process starts;
    // anything that breaks afterwards is handled per capture.
    if let Err(e) = validate_root(&config.root) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    if config.once {
        run_once(&config);
    } else {
        run_session(&config);
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn validate_root(root: &Path) -> Result<(), Error> {
    fs::read_dir(root)
        .map(|_| ())
        .map_err(|source| Error::ScanUnavailable {
            path: root.to_path_buf(),
            source,
        })
}

fn run_once(config: &Config) {
    let capture = snapshot::capture(&config.root, config.skip_hidden);
    report::print_capture(&capture, config);
}

fn run_session(config: &Config) {
    let mut history = History::with_capacity(&config.root, config.capacity);
    let mut lines = io::stdin().lock().lines();

    loop {
        print_menu();
        let Some(line) = read_line(&mut lines) else {
            break;
        };

        match line.trim() {
            "1" => capture_round(&mut history, config),
            "2" => list_entries(&history, &mut lines),
            "3" => show_entry_detail(&history, &mut lines),
            "4" => break,
            "" => {}
            other => println!("unrecognized option: {other}"),
        }
    }
    // dropping the history here releases every retained snapshot
}

fn print_menu() {
    println!();
    println!("Select an operation:");
    println!("  1. capture snapshot");
    println!("  2. list snapshot entries");
    println!("  3. show entry details");
    println!("  4. exit");
    print!("> ");
    io::stdout().flush().ok();
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    lines.next().and_then(|line| line.ok())
}

fn capture_round(history: &mut History, config: &Config) {
    let capture = snapshot::capture(history.root(), config.skip_hidden);

    if capture.unavailable {
        eprintln!("warning: directory unavailable, recording an empty snapshot");
    }
    if config.verbose {
        for diagnostic in &capture.diagnostics {
            println!("[diagnostic] {diagnostic}");
        }
        if capture.skipped > 0 {
            println!("skipped {} entries", capture.skipped);
        }
    }

    println!(
        "captured {} entries ({})",
        capture.snapshot.len(),
        capture.snapshot.captured_label()
    );

    if let Some(evicted) = history.record(capture.snapshot) {
        if config.verbose {
            println!("evicted snapshot from {}", evicted.captured_label());
        }
    }
}

fn list_entries(history: &History, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some(snapshot) = pick_snapshot(history, lines) else {
        return;
    };
    print!("{}", report::table::render_entries(snapshot));
}

fn show_entry_detail(history: &History, lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some(snapshot) = pick_snapshot(history, lines) else {
        return;
    };
    print!("{}", report::table::render_entries(snapshot));

    print!("entry name: ");
    io::stdout().flush().ok();
    let Some(line) = read_line(lines) else {
        return;
    };

    let name = line.trim();
    match snapshot.find_entry(name) {
        Some(entry) => print!("{}", report::table::render_entry_detail(entry)),
        None => println!(
            "{}",
            Error::EntryNotFound {
                name: name.to_string()
            }
        ),
    }
}

/// Prints the history listing and prompts for an index until the input
/// names a retained snapshot. Returns None on an empty history or EOF.
fn pick_snapshot<'a>(
    history: &'a History,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Option<&'a Snapshot> {
    if history.is_empty() {
        println!("no snapshots available");
        return None;
    }

    print!("{}", report::table::render_history(history));

    loop {
        print!("select a snapshot index: ");
        io::stdout().flush().ok();
        let line = read_line(lines)?;

        let index: usize = match line.trim().parse() {
            Ok(index) => index,
            Err(_) => {
                println!("not a number: {}", line.trim());
                continue;
            }
        };

        match history.select(index) {
            Ok(snapshot) => return Some(snapshot),
            Err(e) => println!("{e}"),
        }
    }
}
