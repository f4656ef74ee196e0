// src/bin/cli.rs
use clap::Parser;
use sot_scrape::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // settings may live in a .env next to the tracker files
    cli::load_env_file(None)?;
    let args = cli::Args::parse();

    // one page at a time; a single-threaded runtime is all the browser needs
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = rt.block_on(cli::run(args));

    println!("Exiting Now...");
    result?;
    Ok(())
}
