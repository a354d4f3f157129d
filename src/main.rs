use std::io;

use filmshelf::{app, config, utils};

fn main() {
    // .env is optional; real environment variables still win
    let _ = dotenvy::dotenv();

    let config = match config::Config::init() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", utils::Error::from(e));
            std::process::exit(1);
        }
    };
    app::common::init_logging(&config);

    let stdin = io::stdin();
    let mut shell = app::shell::Shell::new(config.shell.clone(), io::stdout());
    tracing::info!("Catalog ready, type 'help' for the list of commands");

    if let Err(e) = shell.run(stdin.lock()) {
        tracing::error!("Shell stopped: {e}");
        std::process::exit(1);
    }

    tracing::info!(
        "Leaving with {} movie(s) and {} collection(s)",
        shell.catalog().len(),
        shell.catalog().collection_count()
    );
}
