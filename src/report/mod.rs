pub mod json;
pub mod table;

use crate::config::Config;
use crate::snapshot::Capture;

pub fn print_capture(capture: &Capture, config: &Config) {
    if config.json_output {
        println!("{}", json::render(capture));
    } else {
        print!("{}", table::render_entries(&capture.snapshot));
        print_scan_info(capture, config.verbose);
        print_diagnostics(capture, config.verbose);
    }
}

fn print_scan_info(capture: &Capture, verbose: bool) {
    println!("\n{}", scan_stats_line(capture.duration_ms));

    if capture.skipped > 0 {
        println!("skipped {} entries", capture.skipped);
    }

    // Peak memory is always tracked, shown only in verbose mode
    if verbose {
        if let Some(peak_bytes) = capture.peak_memory_bytes {
            println!(
                "peak memory: {:.1} MB",
                peak_bytes as f64 / 1_024_f64 / 1_024_f64
            );
        }
    }
}

fn print_diagnostics(capture: &Capture, verbose: bool) {
    if capture.diagnostics.is_empty() {
        return;
    }

    println!();
    if verbose {
        println!("Diagnostics:");
        println!("{}", "-".repeat(40));
        for diagnostic in &capture.diagnostics {
            println!("  {diagnostic}");
        }
    } else {
        for diagnostic in &capture.diagnostics {
            println!("[diagnostic] {diagnostic}");
        }
    }
}

fn scan_stats_line(duration_ms: u128) -> String {
    let duration_sec = duration_ms as f64 / 1000.0;
    format!("scan completed in {duration_sec:.2}s")
}
