use anyhow::Result;
use colored::Colorize;
use minicalc_application::calculators::example_key::generate_example_key;
use minicalc_infrastructure::storage::SecretStorage;

use crate::context::AppContext;

pub fn example_key(ctx: &AppContext, write_template: bool) -> Result<()> {
    println!("{}", generate_example_key().bold());
    println!(
        "{}",
        "This is a placeholder in the Gemini key format, not a working key.".bright_black()
    );

    let secret_file = ctx.paths.secret_file()?;
    if write_template {
        let storage = SecretStorage::with_path(secret_file);
        let path = storage.ensure_template()?;
        println!("Put your real key in {}", path.display().to_string().cyan());
    } else {
        println!("Real keys go in {}", secret_file.display().to_string().cyan());
    }
    Ok(())
}
