#![allow(clippy::print_stdout, clippy::print_stderr)]

mod args;

use crate::args::{Cli, Command, RegisterArgs};
use anyhow::{Context, Result};
use clap::Parser;
use signup_kernel::config::load_config;
use signup_kernel::domain::FieldKind;
use signup_kernel::domain::config::SignupConfig;
use signup_logger::{LevelFilter, Logger};
use signup_registration::{
    FormView, InMemoryView, RegistrationForm, Registry, RegistryKeys, SubmitOutcome,
};
use signup_storage::FileStore;
use std::process::ExitCode;

type Form = RegistrationForm<InMemoryView, FileStore>;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        },
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let mut config: SignupConfig = match &cli.config {
        Some(path) => load_config(Some(path))
            .with_context(|| format!("Loading config {}", path.display()))?,
        None => SignupConfig::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let _logger = init_logger(&config, cli.verbose)?;

    let store = FileStore::open(&config.storage.data_dir).context("Opening registry store")?;
    let registry = Registry::load(store, RegistryKeys::from(&config.storage))?;
    let mut form = RegistrationForm::open(InMemoryView::new(), registry, config.policy);

    let code = match cli.command {
        Command::Register(args) => register(&mut form, &args)?,
        Command::Check { field, value, password } => {
            check(&mut form, field, &value, password.as_deref())
        },
        Command::Last => {
            if let Some(last) = form.registry().last_identifier() {
                println!("{last}");
            }
            ExitCode::SUCCESS
        },
        Command::List => {
            for identifier in form.registry().state().identifiers() {
                println!("{identifier}");
            }
            ExitCode::SUCCESS
        },
    };

    Ok(code)
}

fn init_logger(config: &SignupConfig, verbose: u8) -> Result<Logger> {
    let mut builder = Logger::builder().name(env!("CARGO_PKG_NAME")).console(true);

    builder = match verbose {
        0 if std::env::var_os("RUST_LOG").is_some() => builder,
        0 => builder.env_filter(config.logging.level.clone()),
        1 => builder.level(LevelFilter::INFO),
        _ => builder.level(LevelFilter::DEBUG),
    };

    if let Some(dir) = &config.logging.directory {
        builder = builder.path(dir);
        if config.logging.json {
            builder = builder.json();
        }
    }

    Ok(builder.init()?)
}

fn register(form: &mut Form, args: &RegisterArgs) -> Result<ExitCode> {
    for (field, value) in args.values() {
        form.input(field, value);
    }

    match form.submit()? {
        SubmitOutcome::Registered { .. } => {
            for notice in form.view().notices() {
                println!("{notice}");
            }
            Ok(ExitCode::SUCCESS)
        },
        SubmitOutcome::Rejected { focus, .. } => {
            for (field, message) in form.view().errors() {
                println!("{field}: {message}");
            }
            println!("focus: {focus}");
            Ok(ExitCode::FAILURE)
        },
    }
}

fn check(form: &mut Form, field: FieldKind, value: &str, password: Option<&str>) -> ExitCode {
    if let Some(password) = password {
        form.view_mut().set_field_value(FieldKind::Secret, password);
    }

    if form.input(field, value) {
        println!("ok");
        ExitCode::SUCCESS
    } else {
        println!("{}", form.view().error_message(field));
        ExitCode::FAILURE
    }
}
