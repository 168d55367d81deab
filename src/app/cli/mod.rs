//! CLI Adapter.

mod interactive;

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use crate::app::api::{self, DownloadOptions, PromptOptions};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "nvp")]
#[command(version)]
#[command(
    about = "Compose the n8n video-workflow AI prompt and copy or save it",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct GlobalArgs {
    /// FFmpeg server URL substituted into the prompt
    #[arg(long, global = true, value_name = "URL")]
    ffmpeg_url: Option<String>,
    /// n8n server URL substituted into the prompt
    #[arg(long, global = true, value_name = "URL")]
    n8n_url: Option<String>,
    /// Config file (defaults to ./nvp.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Edit both URLs interactively before running the command
    #[arg(short, long, global = true)]
    interactive: bool,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl GlobalArgs {
    fn prompt_options(&self) -> PromptOptions {
        PromptOptions {
            ffmpeg_url: self.ffmpeg_url.clone(),
            n8n_url: self.n8n_url.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the composed prompt to stdout
    #[clap(visible_alias = "g")]
    Generate,
    /// Copy the composed prompt to the system clipboard
    ///
    /// On Linux (X11 or Wayland) the copied text is owned by nvp and may be lost
    /// when it exits unless a clipboard manager is running. Use `nvp download`
    /// or `nvp generate` when no clipboard manager is available.
    #[clap(visible_alias = "c")]
    Copy,
    /// Save the composed prompt as a text file
    #[clap(visible_alias = "d")]
    Download {
        /// Directory to save into (defaults to output.directory, then the current directory)
        #[arg(short, long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
        /// File name (defaults to n8n-video-workflow-prompt.txt)
        #[arg(short, long, value_name = "NAME")]
        file_name: Option<String>,
    },
    /// Describe what the prompt does and how to use it
    About,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    setup_logging(cli.global.verbose);

    if let Err(e) = execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let options = cli.global.prompt_options();
    let options = if cli.global.interactive && !matches!(cli.command, Commands::About) {
        match interactive::edit_endpoints(options)? {
            Some(options) => options,
            None => {
                println!("Cancelled.");
                return Ok(());
            }
        }
    } else {
        options
    };

    match cli.command {
        Commands::Generate => {
            let prompt = api::generate(&options)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(prompt.as_bytes())?;
            stdout.flush()?;
        }
        Commands::Copy => {
            let feedback = api::copy_to_clipboard(&options)?;
            println!("{}", feedback.label(Instant::now()));
        }
        Commands::Download { output_dir, file_name } => {
            let path = api::download(&options, &DownloadOptions { output_dir, file_name })?;
            println!("✅ Saved prompt to {}", path.display());
        }
        Commands::About => print!("{}", api::about()),
    }
    Ok(())
}
