mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("doc_similarity=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let report = cli.run()?;
    println!("{}", report);
    Ok(())
}
