//! Line-based interactive chat.

use std::error::Error;
use std::io::{self, Write};

use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::debug;

use crate::cli::exit_with_config_error;
use crate::commands::{process_input, CommandResult};
use crate::core::chat_client::{ChatBackend, ChatClient};
use crate::core::config::Config;
use crate::core::message::Message;
use crate::core::session::ChatSession;

pub const INTERRUPT_NOTICE: &str = "Use /exit to quit or keep typing";

pub async fn run_chat(model: Option<String>) -> Result<(), Box<dyn Error>> {
    let (config, config_path) = Config::load().unwrap_or_else(|e| exit_with_config_error(e));
    let api_key = config
        .api_key(&config_path)
        .unwrap_or_else(|e| exit_with_config_error(e));
    let client = ChatClient::new(&config, api_key).with_model(model);

    let (interrupt_tx, mut interrupt_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if interrupt_tx.send(()).is_err() {
                break;
            }
        }
    });

    let mut session = ChatSession::new(std::env::current_dir()?);
    let mut stdout = io::stdout();
    writeln!(
        stdout,
        "\nSeek interactive chat with {} (type /exit to quit)\n",
        client.model()
    )?;

    run_session(
        &client,
        &mut session,
        BufReader::new(tokio::io::stdin()),
        &mut stdout,
        &mut interrupt_rx,
    )
    .await?;
    Ok(())
}

/// Drive one chat session until `/exit` or end of input.
///
/// Each prompt is sent on its own; the conversation log only feeds `/save`.
/// A message on `interrupts` cancels the pending read or reply and the loop
/// carries on.
pub async fn run_session<B, R, W>(
    backend: &B,
    session: &mut ChatSession,
    reader: R,
    out: &mut W,
    interrupts: &mut mpsc::UnboundedReceiver<()>,
) -> io::Result<()>
where
    B: ChatBackend + ?Sized,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();

    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let line = tokio::select! {
            biased;
            Some(()) = interrupts.recv() => {
                writeln!(out, "\n{INTERRUPT_NOTICE}")?;
                continue;
            }
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            writeln!(out)?;
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match process_input(session, &line) {
            CommandResult::Exit => break,
            CommandResult::Continue => {
                if let Some(status) = session.take_status() {
                    writeln!(out, "{status}")?;
                }
            }
            CommandResult::ProcessAsMessage(prompt) => {
                session.conversation.push(Message::user(prompt.as_str()));
                write!(out, "\nAssistant: ")?;
                out.flush()?;

                let reply = tokio::select! {
                    biased;
                    Some(()) = interrupts.recv() => {
                        debug!("reply discarded after interrupt");
                        writeln!(out, "\n{INTERRUPT_NOTICE}")?;
                        continue;
                    }
                    reply = backend.complete(&prompt) => reply,
                };

                writeln!(out, "{reply}\n")?;
                session.conversation.push(Message::assistant(reply));
            }
        }
    }

    Ok(())
}
