//! # CLI Argument Definitions

use clap::{Args, Parser, Subcommand};
use signup_kernel::domain::FieldKind;
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "signup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Validate and record user registrations from the terminal")]
pub(crate) struct Cli {
    /// Configuration file (TOML, JSON, ...); defaults apply when omitted
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Directory holding the persisted registry; overrides the config file
    #[arg(long, global = true)]
    pub(crate) data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Fill in the form and submit it
    Register(RegisterArgs),
    /// Validate a single field value
    Check {
        /// Field name: username, email, password or confirmPassword
        field: FieldKind,
        /// Raw field value
        value: String,
        /// Password to compare against when checking confirmPassword
        #[arg(long)]
        password: Option<String>,
    },
    /// Print the last registered username
    Last,
    /// Print every registered username
    List,
}

#[derive(Debug, Args)]
pub(crate) struct RegisterArgs {
    /// Username; the last registered one is pre-filled when omitted
    #[arg(long)]
    pub(crate) username: Option<String>,
    #[arg(long)]
    pub(crate) email: Option<String>,
    #[arg(long)]
    pub(crate) password: Option<String>,
    /// Repeated password
    #[arg(long)]
    pub(crate) confirm: Option<String>,
}

impl RegisterArgs {
    /// Provided values in form order.
    pub(crate) fn values(&self) -> impl Iterator<Item = (FieldKind, &str)> {
        [
            (FieldKind::Identifier, &self.username),
            (FieldKind::Email, &self.email),
            (FieldKind::Secret, &self.password),
            (FieldKind::SecretConfirmation, &self.confirm),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
    }
}
