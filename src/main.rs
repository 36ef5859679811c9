use clap::Parser;
use color_eyre::Result;
use pbar::cli::{self, Args};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    pbar::logging::init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = Args::parse();
    cli::run(args, &raw_args).await?;
    Ok(())
}
