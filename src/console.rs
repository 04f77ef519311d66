use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;

use crate::error::{AppError, AppResult};

/// Line-oriented terminal: prompts on `writer`, reads answers from `reader`.
///
/// Every read also watches the interrupt flag, so a Ctrl-C raised at any
/// point surfaces as [`AppError::Interrupted`] at the next prompt.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    interrupt: watch::Receiver<bool>,
}

impl<R, W> Console<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(reader: R, writer: W, interrupt: watch::Receiver<bool>) -> Self {
        Self {
            reader,
            writer,
            interrupt,
        }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line without its terminator.
    pub async fn read_line(&mut self) -> AppResult<String> {
        let mut line = String::new();
        let read = tokio::select! {
            biased;
            _ = interrupted(&mut self.interrupt) => None,
            read = self.reader.read_line(&mut line) => Some(read),
        };

        match read {
            None => Err(AppError::Interrupted),
            Some(Ok(0)) => Err(AppError::InputClosed),
            Some(Ok(_)) => Ok(line.trim_end_matches(['\r', '\n']).to_string()),
            Some(Err(err)) => Err(err.into()),
        }
    }

    /// Print `label` and return the trimmed answer.
    pub async fn prompt(&mut self, label: &str) -> AppResult<String> {
        Ok(self.prompt_raw(label).await?.trim().to_string())
    }

    /// Print `label` and return the answer as typed.
    pub async fn prompt_raw(&mut self, label: &str) -> AppResult<String> {
        write!(self.writer, "{label}")?;
        self.writer.flush()?;
        self.read_line().await
    }

    pub fn line(&mut self, text: impl AsRef<str>) -> AppResult<()> {
        writeln!(self.writer, "{}", text.as_ref())?;
        Ok(())
    }
}

async fn interrupted(flag: &mut watch::Receiver<bool>) {
    // A dropped sender means no signal task exists; never fire.
    if flag.wait_for(|fired| *fired).await.is_err() {
        std::future::pending::<()>().await;
    }
}
