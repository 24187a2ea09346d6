//! Interactive line-oriented session.
//!
//! Reads one command per line, writes the resulting screen.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::{Controller, Event};

const PROMPT: &[u8] = b"> ";

/// Run the browser over a reader/writer pair until EOF or `quit`.
///
/// # Errors
///
/// Returns error only if reading input or writing output fails.
pub async fn run_interactive<R, W>(
    controller: &mut Controller,
    mut reader: R,
    mut writer: W,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();

    writer.write_all(controller.screen().as_bytes()).await?;
    writer.write_all(PROMPT).await?;
    writer.flush().await?;

    tracing::info!("Browser ready, waiting for commands...");

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line).await?;

        if bytes_read == 0 {
            // EOF
            tracing::info!("Input closed, ending session");
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            writer.write_all(PROMPT).await?;
            writer.flush().await?;
            continue;
        }

        let outcome = match Event::parse(trimmed) {
            Ok(event) => controller.handle(event).await,
            Err(hint) => {
                tracing::debug!(input = trimmed, "Unrecognised command");
                writer.write_all(hint.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.write_all(PROMPT).await?;
                writer.flush().await?;
                continue;
            }
        };

        writer.write_all(outcome.output.as_bytes()).await?;
        if outcome.quit {
            writer.flush().await?;
            break;
        }
        writer.write_all(PROMPT).await?;
        writer.flush().await?;
    }

    Ok(())
}
