pub mod auth;
pub mod calc;
pub mod expense;
pub mod history;
pub mod keys;

use colored::Colorize;
use minicalc_core::Identity;

/// Reminds the user that nothing was saved when no identity is active.
pub(crate) fn note_unrecorded(identity: Option<&Identity>) {
    if identity.is_none() {
        println!(
            "{}",
            "Not signed in: result not saved to history (see `minicalc auth sign-in`).".bright_black()
        );
    }
}
