//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod chat;
pub mod configure;
pub mod manual;
pub mod query;

use std::error::Error;
use std::ffi::OsString;

use clap::{Parser, Subcommand};

use crate::core::config::ConfigError;
use crate::output::{ArchiveKind, OutputKind, OutputRequest};
use crate::utils::logging::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "seek")]
#[command(version)]
#[command(about = "Send a prompt to a DeepSeek-compatible chat API and save the reply")]
#[command(
    long_about = "Seek sends a prompt to a DeepSeek-compatible chat-completion API, \
prints the reply, and can save it as Markdown, plain text, or one file per fenced \
code block, optionally bundled into a tar.gz or zip archive.\n\n\
Configuration lives in ~/.deepseek/seek.json; run 'seek config --api-key <KEY>' first.\n\
Run 'seek man' for the extended manual."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Prompt to send
    #[arg(short = 'i', long = "input", value_name = "PROMPT")]
    pub input: Option<String>,

    /// Print the reply in the terminal
    #[arg(short = 't', long = "terminal")]
    pub terminal: bool,

    /// Save the reply to file(s)
    #[arg(short = 'o', long = "output")]
    pub output: bool,

    /// Base name for output files
    #[arg(short = 'n', long = "name", value_name = "NAME")]
    pub name: Option<String>,

    /// Save as Markdown (requires -o)
    #[arg(short = 'm', long = "markdown")]
    pub markdown: bool,

    /// Save as a text file (requires -o)
    #[arg(short = 'f', long = "file")]
    pub file: bool,

    /// Extract fenced code blocks to files (requires -o)
    #[arg(short = 'c', long = "code")]
    pub code: bool,

    /// Compress output as tar.gz (requires -o); `-gz` is accepted too
    #[arg(long = "gz")]
    pub gz: bool,

    /// Compress output as zip (requires -o)
    #[arg(short = 'z', long = "zip")]
    pub zip: bool,

    /// Model to use for this query instead of the configured default
    #[arg(long = "model", value_name = "MODEL")]
    pub model: Option<String>,

    /// Show debug diagnostics on stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Store the API key and generation preferences
    Config {
        /// API key sent as a bearer token
        #[arg(long)]
        api_key: Option<String>,
        /// Default model (deepseek-chat, deepseek-coder, ...)
        #[arg(long)]
        model: Option<String>,
        /// Sampling temperature (0.0 to 2.0)
        #[arg(long, value_parser = configure::parse_temperature)]
        temperature: Option<f64>,
        /// Maximum reply length in tokens
        #[arg(long)]
        max_tokens: Option<u32>,
        /// Endpoint root for DeepSeek-compatible APIs
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Start an interactive chat session
    Chat {
        /// Model to use instead of the configured default
        #[arg(long)]
        model: Option<String>,
    },
    /// Show the extended manual
    Man,
}

impl Args {
    /// Destinations asked for on the command line. Format and archive flags
    /// only count when `-o` is present.
    pub fn output_request(&self) -> OutputRequest {
        if !self.output {
            return OutputRequest::default();
        }

        let kinds = [
            (self.markdown, OutputKind::Markdown),
            (self.file, OutputKind::Plaintext),
            (self.code, OutputKind::CodeFiles),
        ]
        .into_iter()
        .filter_map(|(wanted, kind)| wanted.then_some(kind))
        .collect();

        let archives = [(self.gz, ArchiveKind::TarGzip), (self.zip, ArchiveKind::Zip)]
            .into_iter()
            .filter_map(|(wanted, kind)| wanted.then_some(kind))
            .collect();

        OutputRequest {
            kinds,
            archives,
            base_name: self.name.clone(),
        }
    }
}

/// Rewrite the single-dash `-gz` flag into `--gz` so clap can parse it.
pub fn normalize_legacy_flags<I>(argv: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter()
        .map(|arg| {
            if arg == "-gz" {
                OsString::from("--gz")
            } else {
                arg
            }
        })
        .collect()
}

/// Print a configuration error with its quick fixes and exit.
pub(crate) fn exit_with_config_error(err: ConfigError) -> ! {
    eprintln!("❌ {err}");
    let fixes = err.quick_fixes();
    if !fixes.is_empty() {
        eprintln!();
        eprintln!("💡 Quick fixes:");
        for fix in fixes {
            eprintln!("  • {fix}");
        }
    }
    std::process::exit(err.exit_code());
}

pub fn main() -> Result<(), Box<dyn Error>> {
    let argv = normalize_legacy_flags(std::env::args_os());
    if argv.len() <= 1 {
        println!("{}", manual::SHORT_MANUAL);
        return Ok(());
    }

    let args = Args::parse_from(argv);
    init_tracing(args.verbose);

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async_main(args))
}

async fn async_main(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Some(Commands::Config {
            api_key,
            model,
            temperature,
            max_tokens,
            base_url,
        }) => configure::run_config(configure::ConfigUpdate {
            api_key,
            model,
            temperature,
            max_tokens,
            base_url,
        }),
        Some(Commands::Chat { model }) => chat::run_chat(model).await,
        Some(Commands::Man) => {
            println!("{}", manual::EXTENDED_MANUAL);
            Ok(())
        }
        None => query::run_query(&args).await,
    }
}
