use clap::Parser;
use ogginfo::config::{self, Config};
use ogginfo::report::inspect_file;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ogginfo",
    version,
    about = "Prints the logical streams of Ogg files"
)]
struct Cli {
    /// Ogg files to inspect, processed in order
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_env("OGGINFO_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run(cli: Cli, config: &Config) -> ogginfo::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for path in &cli.files {
        inspect_file(path, config, &mut out).await?;
        out.flush()?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = Config::reload() {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }
    let config = config::get_config();
    init_logging(&config);

    match run(cli, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
