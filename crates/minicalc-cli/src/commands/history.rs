use colored::Colorize;
use minicalc_core::Identity;

use crate::context::AppContext;

fn require_identity(ctx: &AppContext, user: Option<&str>) -> Option<Identity> {
    let identity = ctx.identity(user);
    if identity.is_none() {
        println!("{}", "Sign in (or pass --user) to see your calculation history.".yellow());
    }
    identity
}

pub fn list(ctx: &AppContext, user: Option<&str>) {
    let Some(identity) = require_identity(ctx, user) else {
        return;
    };
    let items = ctx.suite(Some(identity)).history();

    if items.is_empty() {
        println!("{}", "No calculations yet.".bright_black());
        return;
    }

    for item in items {
        println!("{}  {}", item.kind.cyan().bold(), item.date.bright_black());
        println!("  {}", item.result);
        println!("  {}", format!("id: {}", item.id).bright_black());
    }
}

pub fn delete(ctx: &AppContext, user: Option<&str>, id: &str) {
    let Some(identity) = require_identity(ctx, user) else {
        return;
    };
    ctx.suite(Some(identity)).delete_history_item(id);
    println!("{}", format!("Deleted {id} (if it existed).").green());
}

pub fn clear(ctx: &AppContext, user: Option<&str>) {
    let Some(identity) = require_identity(ctx, user) else {
        return;
    };
    ctx.suite(Some(identity)).clear_history();
    println!("{}", "History cleared.".green());
}
