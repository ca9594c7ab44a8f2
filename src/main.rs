//! `cmdkit` 바이너리 진입점.

use std::env;
use std::io;

use cmdkit::infrastructure::config::Settings;
use cmdkit::interface::cli::build_app;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let inspection = match Settings::inspect() {
        Ok(inspection) => inspection,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    };

    let app = build_app(inspection);
    let args: Vec<String> = env::args().skip(1).collect();

    if let Err(err) = app.run(&args) {
        err.exit(&mut io::stderr());
    }
}
