use anyhow::{Result, bail};
use colored::Colorize;
use minicalc_application::calculators::expense::{ExpenseCategory, ExpenseTracker};
use minicalc_application::input::parse_decimal;
use strum::IntoEnumIterator;

/// Splits `DESCRIPTION=AMOUNT[@CATEGORY]`. The last `=` separates the amount.
fn parse_entry(raw: &str) -> Result<(String, f64, ExpenseCategory)> {
    let Some((description, rest)) = raw.rsplit_once('=') else {
        bail!("Expected DESCRIPTION=AMOUNT[@CATEGORY], got '{raw}'");
    };

    let (amount, category) = match rest.split_once('@') {
        Some((amount, category)) => {
            let Ok(category) = category.trim().parse::<ExpenseCategory>() else {
                let known: Vec<String> = ExpenseCategory::iter().map(|c| c.to_string()).collect();
                bail!("Unknown category '{category}' (one of: {})", known.join(", "));
            };
            (amount, category)
        }
        None => (rest, ExpenseCategory::default()),
    };

    Ok((description.to_string(), parse_decimal(amount).unwrap_or(0.0), category))
}

pub fn tally(entries: &[String]) -> Result<()> {
    let mut tracker = ExpenseTracker::new();

    for raw in entries {
        let (description, amount, category) = parse_entry(raw)?;
        if !tracker.add(&description, amount, category) {
            println!("{}", format!("Skipped '{raw}': needs a description and a positive amount.").yellow());
        }
    }

    if tracker.is_empty() {
        println!("{}", "No expenses added yet.".bright_black());
        return Ok(());
    }

    for expense in tracker.list() {
        println!(
            "{:<24} {:>10}  {}",
            expense.description,
            format!("${:.2}", expense.amount),
            format!("{} - {}", expense.category, expense.date).bright_black()
        );
    }
    println!("{}", format!("Total Expenses: ${:.2}", tracker.total()).green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_with_category() {
        let (description, amount, category) = parse_entry("Train = ticket=12.40@transport").unwrap();
        assert_eq!(description, "Train = ticket");
        assert_eq!(amount, 12.4);
        assert_eq!(category, ExpenseCategory::Transport);
    }

    #[test]
    fn test_parse_entry_defaults_to_food() {
        let (_, amount, category) = parse_entry("Lunch=abc").unwrap();
        assert_eq!(amount, 0.0);
        assert_eq!(category, ExpenseCategory::Food);
    }

    #[test]
    fn test_parse_entry_rejects_bad_shapes() {
        assert!(parse_entry("Lunch").is_err());
        assert!(parse_entry("Lunch=5@rent").is_err());
    }
}
