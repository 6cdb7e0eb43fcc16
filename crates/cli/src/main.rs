mod commands;

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portal-kit")]
#[command(version, about = "Static site generator for the job/results portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Initialize new portal directory
    Init {
        /// Path to create portal directory in
        path: PathBuf,

        /// Site title
        #[arg(long)]
        title: Option<String>,

        /// Site domain (e.g. www.example.com)
        #[arg(long)]
        domain: Option<String>,
    },

    /// Validate portal configuration
    Validate {
        /// Path to portal directory
        path: PathBuf,
    },

    /// Preview site locally
    Preview {
        /// Path to portal directory
        path: PathBuf,

        /// Port to serve on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Build site without deploying
    Build {
        /// Path to portal directory
        path: PathBuf,

        /// Output directory for generated site
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init {
            path,
            title,
            domain,
        } => commands::init::run(path, title, domain).await,
        Command::Validate { path } => commands::validate::run(path).await,
        Command::Preview { path, port } => commands::preview::run(path, port).await,
        Command::Build { path, output } => commands::build::run(path, output).await,
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "portal-kit", &mut io::stdout());
            Ok(())
        }
    }
}
