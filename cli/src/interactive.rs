use crate::GameSettings;
use anyhow::{Context, Result};
use inquire::validator::Validation;
use inquire::{Confirm, CustomUserError, Text};

pub fn run_interactive() -> Result<GameSettings> {
    println!();
    println!("Welcome to FizzBuzz.");

    let from = prompt_range_value("Please enter the number to generate FizzBuzz from:")?;
    let to = prompt_range_value("Please enter the number to generate FizzBuzz to:")?;

    let luck = Confirm::new("Would you like to add the LUCK override rule to the core game?")
        .with_default(false)
        .prompt()
        .context("Failed to get luck rule choice")?;

    let statistics = Confirm::new("Would you like to add FizzBuzz statistics to the output?")
        .with_default(false)
        .prompt()
        .context("Failed to get statistics choice")?;

    Ok(GameSettings {
        from,
        to,
        luck,
        statistics,
    })
}

fn prompt_range_value(message: &str) -> Result<i64> {
    let input = Text::new(message)
        .with_help_message("A positive whole number")
        .with_validator(validate_positive)
        .prompt()
        .context("Failed to get range value")?;

    parse_positive(&input).with_context(|| format!("'{}' is not a positive integer", input))
}

fn validate_positive(input: &str) -> Result<Validation, CustomUserError> {
    match parse_positive(input) {
        Some(_) => Ok(Validation::Valid),
        None => Ok(Validation::Invalid(
            format!("'{}' is not a positive integer", input).into(),
        )),
    }
}

fn parse_positive(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok().filter(|value| *value > 0)
}
