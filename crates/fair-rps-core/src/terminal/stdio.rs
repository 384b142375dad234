//! Terminal backed by byte streams, by default the process's stdin and stdout.

use super::traits::{Terminal, TerminalError};
use async_trait::async_trait;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};

/// Line-based terminal over an async reader and writer.
///
/// Input lines are decoded lossily, so bytes that are not UTF-8 reach the
/// game as ordinary (invalid) input instead of failing the read.
pub struct StdTerminal<R = BufReader<Stdin>, W = Stdout> {
    input: R,
    output: W,
}

impl StdTerminal {
    /// Terminal on the process's stdin and stdout
    pub fn new() -> Self {
        Self::from_streams(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl Default for StdTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> StdTerminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Terminal on arbitrary streams
    pub fn from_streams(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

#[async_trait]
impl<R, W> Terminal for StdTerminal<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn write_line(&mut self, line: &str) -> Result<(), TerminalError> {
        self.output.write_all(line.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await?;
        Ok(())
    }

    async fn prompt(&mut self, prompt: &str) -> Result<String, TerminalError> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Err(TerminalError::Closed);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
