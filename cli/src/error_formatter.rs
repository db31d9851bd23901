use crossterm::style::Stylize;
use fizzbuzz::FizzBuzzError;

/// Format a FizzBuzzError for the terminal
pub fn format_error(error: &FizzBuzzError) -> String {
    match error {
        FizzBuzzError::InvalidConfiguration { message } => format!(
            "{} {}\n  {}",
            "Invalid configuration:".red().bold(),
            message,
            "help: both bounds must be positive and --from must not exceed --to".dim()
        ),
    }
}
