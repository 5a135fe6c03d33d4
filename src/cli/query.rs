//! One-shot query mode: send `-i`, echo and/or save the reply.

use std::error::Error;
use std::io::{self, Write};
use std::path::Path;

use crate::cli::{exit_with_config_error, manual, Args};
use crate::core::chat_client::{ChatBackend, ChatClient};
use crate::core::config::data::path_display;
use crate::core::config::Config;
use crate::output::{save_reply, OutputRequest, SaveReport, Saved};

pub const NO_FORMAT_WARNING: &str =
    "⚠️  No output format specified with -o (use -m, -f, or -c)";

pub async fn run_query(args: &Args) -> Result<(), Box<dyn Error>> {
    let Some(prompt) = args.input.as_deref().filter(|p| !p.trim().is_empty()) else {
        eprintln!("❌ Error: input text is required (-i)");
        eprintln!();
        eprintln!("{}", manual::SHORT_MANUAL);
        std::process::exit(1);
    };

    let (config, config_path) = Config::load().unwrap_or_else(|e| exit_with_config_error(e));
    let api_key = config
        .api_key(&config_path)
        .unwrap_or_else(|e| exit_with_config_error(e));

    let client = ChatClient::new(&config, api_key).with_model(args.model.clone());
    let reply = client.complete(prompt).await;

    let dir = std::env::current_dir()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    deliver_reply(
        &mut out,
        &reply,
        args.terminal,
        args.output,
        &args.output_request(),
        &dir,
    )?;
    Ok(())
}

/// Echo the reply when asked and run the output pipeline, reporting every
/// file to `out` as it is written.
pub fn deliver_reply<W: Write>(
    out: &mut W,
    reply: &str,
    terminal: bool,
    output: bool,
    request: &OutputRequest,
    dir: &Path,
) -> Result<Option<SaveReport>, Box<dyn Error>> {
    if terminal {
        writeln!(out, "\nResponse:\n")?;
        writeln!(out, "{reply}")?;
    }

    if !output {
        return Ok(None);
    }

    if request.is_empty() {
        writeln!(out, "{NO_FORMAT_WARNING}")?;
    }

    let mut report_error: Option<io::Error> = None;
    let result = save_reply(reply, request, dir, &mut |saved| {
        if report_error.is_some() {
            return;
        }
        let line = match saved {
            Saved::Artifact(artifact) => writeln!(
                out,
                "✅ Saved {}: {}",
                artifact.kind.label(),
                path_display(&artifact.path)
            ),
            Saved::Archive(path) => writeln!(out, "✅ Archived: {}", path_display(path)),
        };
        report_error = line.err();
    });

    if let Some(e) = report_error {
        return Err(e.into());
    }
    Ok(Some(result?))
}
