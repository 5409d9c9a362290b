use anyhow::{Context, Result};
use colored::*;
use dialoguer::Input;

pub fn print_info(message: &str) {
    eprintln!("{} {}", "[INFO]".blue().bold(), message);
}

pub fn print_success(message: &str) {
    eprintln!("{} {}", "[SUCCESS]".green().bold(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "[WARNING]".yellow().bold(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}

/// Reads one non-empty line from the user.
pub fn prompt(message: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(message)
        .interact_text()
        .with_context(|| format!("Failed to read input for: {message}"))
}
