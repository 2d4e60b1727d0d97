//! Single-threaded event loop driving a [`TodoApp`]

use crate::{InputError, Reply, TodoApp};
use anyhow::{Context as _, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

/// Run a session until `:quit` or end of input
///
/// Renders the initial frame, then handles one input line at a time and
/// writes whatever the app answers. A line that is not valid UTF-8 is
/// answered with an error and the session carries on.
///
/// # Arguments
/// * `app` - App to drive
/// * `reader` - Source of gesture lines
/// * `writer` - Mount target for frames
pub async fn run_session<R, W>(app: &mut TodoApp, mut reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("session started");
    write_frame(&mut writer, &app.render()).await?;

    let mut buf = Vec::new();
    let mut handled = 0usize;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read input")?;
        if read == 0 {
            break;
        }
        handled += 1;

        let reply = match std::str::from_utf8(trim_line_ending(&buf)) {
            Ok(line) => app.handle_line(line),
            Err(e) => {
                debug!(error = %e, "rejected input");
                Reply::Show(format!("{}\n", InputError::InvalidEncoding))
            }
        };
        match reply {
            Reply::Show(text) => write_frame(&mut writer, &text).await?,
            Reply::Quit => break,
        }
    }

    info!(
        gestures = handled,
        items = app.store().len(),
        "session ended"
    );
    Ok(())
}

/// Strip a trailing `\n` or `\r\n`
fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

async fn write_frame<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> Result<()> {
    writer
        .write_all(text.as_bytes())
        .await
        .context("Failed to write frame")?;
    writer.flush().await.context("Failed to write frame")?;
    Ok(())
}
