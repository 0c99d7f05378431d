// SPDX-License-Identifier: MPL-2.0
use ipelfs_dash::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const HELP: &str = "\
ipelfs_dash - desktop dashboard for the ipelfs volume service

USAGE:
    ipelfs_dash [OPTIONS]

OPTIONS:
    --lang <TAG>          Language used until one is picked in the app (en, zh)
    --backend-url <URL>   Backend base URL, overrides settings.toml
    --data-dir <DIR>      Directory holding storage.json
    --config-dir <DIR>    Directory holding settings.toml
    -h, --help            Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        backend_url: args.opt_value_from_str("--backend-url")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "ipelfs_dash=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(error) => {
            eprintln!("error: {error}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    tracing::info!("ipelfs dashboard v{}", env!("CARGO_PKG_VERSION"));
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
