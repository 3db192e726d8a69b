use clap::Parser;
use decor::cli::{Cli, Commands};
use decor::output::Printer;
use decor::Config;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Style(args) => {
            let config = Config::discover(cli.config.as_deref())?;
            decor::cli::style::run(args, &config, &printer)?
        }
        Commands::Palette(args) => {
            let config = Config::discover(cli.config.as_deref())?;
            decor::cli::palette::run(args, &config, &printer)?
        }
        Commands::List(args) => decor::cli::list::run(args, &printer)?,
        Commands::Completions(args) => decor::cli::completions::run(args)?,
    }

    Ok(())
}
