use anyhow::Result;
use colored::Colorize;
use minicalc_core::user::User;
use minicalc_infrastructure::mock_google_user;

use crate::context::AppContext;

pub fn sign_in(ctx: &AppContext, uid: Option<String>, email: Option<String>, name: Option<String>) -> Result<()> {
    let user = match uid {
        Some(uid) => User {
            uid,
            email,
            display_name: name,
            photo_url: None,
        },
        None => {
            let mut user = mock_google_user();
            user.email = email.or(user.email);
            user.display_name = name.or(user.display_name);
            user
        }
    };

    let _watch = ctx.auth.subscribe(|user| {
        if let Some(user) = user {
            tracing::debug!(uid = %user.uid, "auth state changed");
        }
    });

    let user = ctx.auth.sign_in(user)?;
    println!(
        "{}",
        format!("Signed in as {} ({})", user.display_name.as_deref().unwrap_or("-"), user.uid)
            .green()
            .bold()
    );
    Ok(())
}

pub fn sign_out(ctx: &AppContext) -> Result<()> {
    ctx.auth.sign_out()?;
    println!("{}", "Signed out.".green());
    Ok(())
}

pub fn whoami(ctx: &AppContext) {
    match ctx.auth.current_user() {
        Some(user) => {
            println!("{}", user.display_name.as_deref().unwrap_or(&user.uid).bold());
            println!("  uid:   {}", user.uid);
            if let Some(email) = &user.email {
                println!("  email: {email}");
            }
            if let Some(photo) = &user.photo_url {
                println!("  photo: {photo}");
            }
        }
        None => println!("{}", "Not signed in.".bright_black()),
    }
}
