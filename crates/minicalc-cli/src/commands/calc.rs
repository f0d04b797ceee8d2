use anyhow::{Result, anyhow};
use colored::Colorize;
use minicalc_application::calculators::engineering::{CableInput, Material};
use minicalc_application::calculators::tip::TipInput;
use minicalc_application::input::{count_or, number_or_zero};
use minicalc_core::rate::is_supported_currency;

use super::note_unrecorded;
use crate::context::AppContext;

pub fn tip(ctx: &AppContext, user: Option<&str>, bill: &str, percent: &str, people: &str, round_up: bool) {
    let suite = ctx.suite(ctx.identity(user));
    let result = suite.tip(&TipInput::from_text(bill, percent, people, round_up));

    println!("Tip Amount:   ${:.2}", result.tip_amount);
    println!("Total Bill:   ${:.2}", result.total_amount);
    println!("{}", format!("Per Person:   ${:.2}", result.per_person_amount).green().bold());
    note_unrecorded(suite.identity());
}

pub fn split(ctx: &AppContext, user: Option<&str>, bill: &str, people: &str, shares: &[String]) {
    let suite = ctx.suite(ctx.identity(user));

    if shares.is_empty() {
        let per_person = suite.split_equal_from_text(bill, people);
        println!("{}", format!("Each person pays: ${per_person}").green().bold());
        note_unrecorded(suite.identity());
        return;
    }

    let shares: Vec<f64> = shares.iter().map(|s| number_or_zero(s)).collect();
    let remaining = suite.split_remaining(number_or_zero(bill), &shares);
    let line = format!("Remaining to assign: ${remaining:.2}");
    if remaining < 0.0 {
        println!("{}", line.red().bold());
    } else {
        println!("{}", line.green().bold());
    }
}

pub fn tax(ctx: &AppContext, user: Option<&str>, amount: &str, rate: &str) {
    let suite = ctx.suite(ctx.identity(user));
    let result = suite.tax(number_or_zero(amount), number_or_zero(rate));

    println!("Tax Amount:   ${:.2}", result.tax_amount);
    println!("{}", format!("Total Amount: ${:.2}", result.total_amount).green().bold());
    note_unrecorded(suite.identity());
}

pub async fn convert(ctx: &AppContext, user: Option<&str>, amount: &str, from: &str, to: &str) -> Result<()> {
    let from = from.trim().to_uppercase();
    let to = to.trim().to_uppercase();
    for code in [&from, &to] {
        if !is_supported_currency(code) {
            println!("{}", format!("Note: {code} is not in the usual currency list.").yellow());
        }
    }

    let suite = ctx.suite(ctx.identity(user));
    let conversion = suite.convert(amount, &from, &to).await?;

    println!("{}", format!("{} {to}", conversion.converted).green().bold());
    println!("{}", conversion.rate_line(&from, &to).bright_black());
    note_unrecorded(suite.identity());
    Ok(())
}

pub fn transformer(ctx: &AppContext, user: Option<&str>, voltage: &str, frequency: &str) {
    let suite = ctx.suite(ctx.identity(user));
    let area = suite.transformer_core_area(number_or_zero(voltage), number_or_zero(frequency));

    println!("{}", format!("Required Core Area: {area} cm²").green().bold());
    note_unrecorded(suite.identity());
}

pub fn cable(
    ctx: &AppContext,
    user: Option<&str>,
    current: &str,
    length: &str,
    voltage: &str,
    drop: &str,
    material: &str,
) -> Result<()> {
    let material: Material = material
        .trim()
        .parse()
        .map_err(|_| anyhow!("Unknown conductor material '{material}' (expected copper or aluminum)"))?;

    let suite = ctx.suite(ctx.identity(user));
    let size = suite.cable_core_size(&CableInput {
        current: number_or_zero(current),
        length: number_or_zero(length),
        voltage: number_or_zero(voltage),
        drop_percent: number_or_zero(drop),
        material,
    });

    println!("{}", format!("Required Core Size: {size} mm² ({material})").green().bold());
    note_unrecorded(suite.identity());
    Ok(())
}

pub fn cpu(ctx: &AppContext, user: Option<&str>, cores: &str, clock: &str, ipc: &str) {
    let suite = ctx.suite(ctx.identity(user));
    let score = suite.cpu_performance(count_or(cores, 0), number_or_zero(clock), number_or_zero(ipc));

    println!("{}", format!("Relative Performance Score: {score}").green().bold());
    note_unrecorded(suite.identity());
}
