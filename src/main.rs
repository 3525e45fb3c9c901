use clap::Parser;
use ipdrift::config::Cli;
use ipdrift::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    println!("ipdrift v{}", ipdrift::VERSION);

    ipdrift::commands::run::run(config).await?;

    Ok(())
}
