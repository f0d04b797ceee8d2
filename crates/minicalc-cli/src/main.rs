use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod context;
mod logging;

use context::AppContext;

#[derive(Parser)]
#[command(name = "minicalc")]
#[command(about = "minicalc - Mini Calculator Suite with local calculation history", long_about = None)]
struct Cli {
    /// Act as this identity instead of the signed-in user
    #[arg(long, global = true)]
    user: Option<String>,

    /// Keep config and data under this directory
    #[arg(long, global = true, env = "MINICALC_HOME")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tip and per-person total
    Tip {
        #[arg(long)]
        bill: String,
        #[arg(long, default_value = "15")]
        percent: String,
        #[arg(long, default_value = "1")]
        people: String,
        /// Round the total up to the next whole unit
        #[arg(long)]
        round_up: bool,
    },
    /// Split a bill equally, or check shares against it with --share
    Split {
        #[arg(long)]
        bill: String,
        #[arg(long, default_value = "2")]
        people: String,
        /// Individual share (repeatable); switches to unequal mode
        #[arg(long = "share")]
        shares: Vec<String>,
    },
    /// Sales tax
    Tax {
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = "5")]
        rate: String,
    },
    /// Currency conversion using a live rate
    Convert {
        #[arg(long)]
        amount: String,
        #[arg(long, default_value = "USD")]
        from: String,
        #[arg(long, default_value = "EUR")]
        to: String,
    },
    /// Transformer core cross-section
    Transformer {
        #[arg(long)]
        voltage: String,
        #[arg(long, default_value = "50")]
        frequency: String,
    },
    /// Cable core size for a voltage-drop limit
    Cable {
        #[arg(long)]
        current: String,
        #[arg(long)]
        length: String,
        #[arg(long, default_value = "230")]
        voltage: String,
        /// Allowed voltage drop in percent
        #[arg(long, default_value = "3")]
        drop: String,
        /// copper or aluminum
        #[arg(long, default_value = "copper")]
        material: String,
    },
    /// Relative CPU performance score
    Cpu {
        #[arg(long)]
        cores: String,
        /// Clock speed in GHz
        #[arg(long)]
        clock: String,
        /// Instructions per cycle
        #[arg(long)]
        ipc: String,
    },
    /// Tally expenses given as DESCRIPTION=AMOUNT[@CATEGORY]
    Expense {
        #[arg(required = true)]
        entries: Vec<String>,
    },
    /// Calculation history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Placeholder sign-in
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Print a placeholder API key in the Gemini format
    ExampleKey {
        /// Also create a secret.json template if none exists
        #[arg(long)]
        write_template: bool,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// Show entries, newest first
    List,
    /// Delete one entry
    Delete { id: String },
    /// Delete every entry
    Clear,
}

#[derive(Subcommand)]
enum AuthAction {
    /// Sign in (a generated placeholder user unless --uid is given)
    SignIn {
        #[arg(long)]
        uid: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
    },
    /// Sign out
    SignOut,
    /// Show the signed-in user
    Whoami,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let ctx = AppContext::load(cli.data_dir)?;
    let _log_guard = logging::init(&ctx.config.logging, &ctx.paths.logs_dir()?)?;
    let user = cli.user.as_deref();

    match cli.command {
        Commands::Tip {
            bill,
            percent,
            people,
            round_up,
        } => commands::calc::tip(&ctx, user, &bill, &percent, &people, round_up),
        Commands::Split {
            bill,
            people,
            shares,
        } => commands::calc::split(&ctx, user, &bill, &people, &shares),
        Commands::Tax { amount, rate } => commands::calc::tax(&ctx, user, &amount, &rate),
        Commands::Convert { amount, from, to } => {
            commands::calc::convert(&ctx, user, &amount, &from, &to).await?
        }
        Commands::Transformer { voltage, frequency } => {
            commands::calc::transformer(&ctx, user, &voltage, &frequency)
        }
        Commands::Cable {
            current,
            length,
            voltage,
            drop,
            material,
        } => commands::calc::cable(&ctx, user, &current, &length, &voltage, &drop, &material)?,
        Commands::Cpu { cores, clock, ipc } => commands::calc::cpu(&ctx, user, &cores, &clock, &ipc),
        Commands::Expense { entries } => commands::expense::tally(&entries)?,
        Commands::History { action } => match action {
            HistoryAction::List => commands::history::list(&ctx, user),
            HistoryAction::Delete { id } => commands::history::delete(&ctx, user, &id),
            HistoryAction::Clear => commands::history::clear(&ctx, user),
        },
        Commands::Auth { action } => match action {
            AuthAction::SignIn { uid, email, name } => commands::auth::sign_in(&ctx, uid, email, name)?,
            AuthAction::SignOut => commands::auth::sign_out(&ctx)?,
            AuthAction::Whoami => commands::auth::whoami(&ctx),
        },
        Commands::ExampleKey { write_template } => commands::keys::example_key(&ctx, write_template)?,
    }

    Ok(())
}
