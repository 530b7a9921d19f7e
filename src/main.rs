use std::path::PathBuf;

use clap::Parser;
use eggy_docs::{config::Config, site::Site};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = ".", help = "The destination directory")]
    dest: PathBuf,
    #[arg(short, long, help = "A YAML config file with `site_url` and `sections`.")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Initialize Logging.
    let log_environ = env_logger::Env::new()
        .filter("EGGY_LOG")
        .write_style("EGGY_LOG_STYLE");
    let mut log_builder = env_logger::Builder::new();

    log_builder.filter_level(log::LevelFilter::Info);
    log_builder.parse_env(log_environ);
    log_builder.init();

    // Parse Arguments.
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            log::info!("Reading config from {:?}", path);
            Config::load(path)?
        }
        None => Config::default(),
    }
    .with_env();

    let site = Site::new(&config)?;

    log::info!("Outputting to {:?}", args.dest);
    site.build(&args.dest)?;

    log::info!("Done.");
    Ok(())
}
