//! Output formatting for CLI

use crate::pipeline::Transcript;

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print every board of a recorded game, each followed by a divider
pub fn print_transcript(transcript: &Transcript) {
    for board in &transcript.boards {
        println!("{board}");
        println!("====");
    }
    if let Some(status) = transcript.status {
        println!("Result: {}", status.marker());
    }
}
