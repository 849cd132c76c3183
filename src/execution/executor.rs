//! Streaming executor - pumps text from a reader through a cipher into a writer

use crate::core::{StreamCipher, TransformStats};
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// Transform everything `reader` yields and write it to `writer`
///
/// Input is consumed line by line with line terminators preserved, so the
/// output has exactly the input's layout. The key position carries across
/// lines. When a progress bar is given it advances by bytes read.
pub async fn transform_stream<R, W>(
    cipher: &mut StreamCipher,
    mut reader: R,
    mut writer: W,
    progress: Option<&ProgressBar>,
) -> Result<TransformStats>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut line = String::new();
    let mut transformed = String::new();
    let mut lines = 0usize;

    loop {
        line.clear();
        let read = reader
            .read_line(&mut line)
            .await
            .context("Failed to read input (is it valid UTF-8?)")?;
        if read == 0 {
            break;
        }

        transformed.clear();
        cipher.apply_into(&line, &mut transformed);
        writer
            .write_all(transformed.as_bytes())
            .await
            .context("Failed to write output")?;

        lines += 1;
        if let Some(progress) = progress {
            progress.inc(read as u64);
        }
    }

    writer.flush().await.context("Failed to flush output")?;

    debug!("Transformed {} lines", lines);
    Ok(cipher.stats())
}
