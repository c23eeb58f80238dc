// Output formatting helpers for CLI commands

/// Print a status message: "  Status message"
pub fn status(action: &str, message: &str) {
    eprintln!("\x1b[1;36m{:>12}\x1b[0m {}", action, message);
}

/// Print a dim/muted message
pub fn dim(message: &str) {
    eprintln!("\x1b[2m{}\x1b[0m", message);
}

/// Print a card heading: bold name with its id
pub fn card_header(id: u64, name: &str) {
    println!("\x1b[1m#{:<3} {}\x1b[0m", id, name);
}

/// Print one labelled card line, skipping empty values
pub fn card_field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("     \x1b[2m{:<8}\x1b[0m {}", label, value);
    }
}
