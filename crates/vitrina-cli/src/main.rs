// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

mod config;
mod runtime;

use anyhow::{Context, Result};
use config::Config;
use runtime::ShelfRuntime;
use std::env;
use std::path::PathBuf;
use tracing::error;
use vitrina_app::Feedback;
use vitrina_catalog::Shelf;
use vitrina_tui::{TerminalShelf, UiOptions};

fn main() {
    if let Err(error) = run() {
        eprintln!("{error:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let options = parse_cli_args(env::args().skip(1), Config::default_path()?)?;
    if options.show_help {
        print_help();
        return Ok(());
    }

    if options.print_config_path {
        println!("{}", options.config_path.display());
        return Ok(());
    }

    if options.print_example {
        print!("{}", Config::example_config(&options.config_path));
        return Ok(());
    }

    let filter = env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load(&options.config_path).with_context(|| {
        format!(
            "load config {}; run `vitrina --print-example-config` to generate a template",
            options.config_path.display()
        )
    })?;

    let endpoint = options
        .endpoint_override
        .clone()
        .unwrap_or_else(|| config.endpoint());
    let client =
        vitrina_api::Client::new(&endpoint, config.timeout()?).with_context(|| {
            format!(
                "invalid [catalog] config in {}; fix endpoint/timeout values",
                options.config_path.display()
            )
        })?;
    if options.check_only {
        return Ok(());
    }

    // The one fetch of the session. A failure leaves the shelf empty; the
    // app still runs.
    let (records, startup_feedback) = if options.demo {
        (vitrina_catalog::demo_catalog(), None)
    } else {
        match client.fetch_catalog() {
            Ok(records) => (records, None),
            Err(fetch_error) => {
                error!("error fetching product data: {fetch_error:#}");
                (
                    Vec::new(),
                    Some(Feedback::error(format!(
                        "Error fetching product data: {fetch_error}"
                    ))),
                )
            }
        }
    };

    let mut shelf = Shelf::new(TerminalShelf::default());
    shelf.initialize(records)?;

    let ui_options = UiOptions {
        show_descriptions: config.show_descriptions(),
    };
    let mut shelf_runtime = ShelfRuntime::new(shelf);
    vitrina_tui::run_app(&mut shelf_runtime, ui_options, startup_feedback)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    config_path: PathBuf,
    endpoint_override: Option<String>,
    demo: bool,
    check_only: bool,
    print_config_path: bool,
    print_example: bool,
    show_help: bool,
}

fn parse_cli_args<I, S>(args: I, default_config_path: PathBuf) -> Result<CliOptions>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut options = CliOptions {
        config_path: default_config_path,
        endpoint_override: None,
        demo: false,
        check_only: false,
        print_config_path: false,
        print_example: false,
        show_help: false,
    };

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_ref() {
            "--config" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--config requires a file path"))?;
                options.config_path = PathBuf::from(value.as_ref());
            }
            "--endpoint" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--endpoint requires a URL"))?;
                options.endpoint_override = Some(value.as_ref().to_owned());
            }
            "--demo" => {
                options.demo = true;
            }
            "--check" => {
                options.check_only = true;
            }
            "--print-config-path" => {
                options.print_config_path = true;
            }
            "--print-example-config" => {
                options.print_example = true;
            }
            "--help" | "-h" => {
                options.show_help = true;
            }
            unknown => {
                return Err(anyhow::anyhow!(
                    "unknown argument {unknown:?}; run with --help to see supported options"
                ));
            }
        }
    }

    Ok(options)
}

fn print_help() {
    println!("vitrina");
    println!("  --config <path>          Use a specific config path");
    println!("  --endpoint <url>         Fetch the catalog from this URL");
    println!("  --demo                   Launch with a seeded catalog (no fetch)");
    println!("  --check                  Validate config + client setup, then exit");
    println!("  --print-config-path      Print resolved config path");
    println!("  --print-example-config   Print a config template");
    println!("  --help                   Show this help");
}
