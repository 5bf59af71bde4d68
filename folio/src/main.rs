use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use folio::commands;
use folio_models::{contact::ContactFormDraft, i18n::Language};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Command::Completion { shell } = cli.command {
        clap_complete::generate(
            shell,
            &mut Cli::command(),
            env!("CARGO_BIN_NAME"),
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    init_tracing();

    let paths = if cli.config.is_empty() {
        vec![PathBuf::from(folio_config::DEFAULT_CONFIG_PATH)]
    } else {
        cli.config
    };
    let config = folio_config::load(&paths).context("Failed to load config")?;

    match cli.command {
        Command::Form { language } => {
            let language = language.unwrap_or(config.i18n.default_language);
            commands::form::form(config, language).await?;
        }
        Command::Send {
            name,
            email,
            subject,
            message,
            language,
        } => {
            let language = language.unwrap_or(config.i18n.default_language);
            let draft = ContactFormDraft {
                name,
                email,
                subject,
                message,
            };
            commands::send::send(config, draft, language).await?;
        }
        Command::Ping => commands::ping::ping(config).await?,
        Command::CheckConfig { verbose } => {
            verbose.then(|| println!("{config:#?}"));
        }
        Command::Completion { .. } => unreachable!(),
    }

    Ok(())
}

#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Config files to load and merge, later ones overriding earlier ones
    #[arg(
        short,
        long,
        global = true,
        value_name = "PATH",
        env = "FOLIO_CONFIG",
        value_delimiter = ':'
    )]
    config: Vec<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive contact form in the terminal
    #[command(aliases(["f"]))]
    Form {
        /// UI language of the form
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Submit a single contact message
    #[command(aliases(["s"]))]
    Send {
        /// Full name of the sender
        #[arg(long)]
        name: String,
        /// Email address of the sender
        #[arg(long)]
        email: String,
        /// Subject of the message
        #[arg(long)]
        subject: String,
        /// Content of the message
        #[arg(long)]
        message: String,
        /// UI language the alerts are reported in
        #[arg(short, long)]
        language: Option<Language>,
    },
    /// Probe message store connectivity
    Ping,
    /// Validate configuration
    CheckConfig {
        /// Print a debug representation of the config
        #[arg(short, long)]
        verbose: bool,
    },
    /// Generate shell completions
    Completion {
        /// The shell to generate completions for
        #[clap(value_enum)]
        shell: Shell,
    },
}

fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(EnvFilter::from_default_env()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}
