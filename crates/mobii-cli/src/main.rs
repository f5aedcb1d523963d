use anyhow::Context;
use mobii_cli::{command, init_tracing, load_config, log_json_from_env, run, Exit};
use mobii_pages::Storefront;
use std::path::PathBuf;

#[tokio::main]
async fn main() {
    let matches = command().get_matches();

    let config = match load_config(matches.get_one::<PathBuf>("config").map(PathBuf::as_path)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(Exit::Failure.code());
        }
    };

    init_tracing(&config.log_filter, log_json_from_env());

    let store = match Storefront::from_config(config).context("failed to open storefront") {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "startup failed");
            eprintln!("error: {err:#}");
            std::process::exit(Exit::Failure.code());
        }
    };

    let mut stdout = std::io::stdout().lock();
    let exit = match run(&matches, &store, &mut stdout).await {
        Ok(exit) => exit,
        Err(err) => {
            eprintln!("error: {err:#}");
            Exit::Failure
        }
    };

    std::process::exit(exit.code());
}
