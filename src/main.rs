#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;

use siteui::{
    infrastructure::{cli::Cli, config::Config},
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    let args = <Cli as Parser>::parse();

    initialize_logging(args.verbose)?;

    initialize_panic_handler()?;

    let config = Config::load(args.config.as_deref())?;

    let output = args.execute(config).await?;
    println!("{output}");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
