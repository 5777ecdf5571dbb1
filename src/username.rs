use std::io;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt};

pub const MIN_LEN: usize = 6;
pub const MAX_LEN: usize = 19;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UsernameError {
    #[error("the username must have between {MIN_LEN} and {MAX_LEN} characters (got {len})")]
    Length { len: usize },

    #[error("the username can't contain special characters (found {offending:?})")]
    Charset { offending: char },
}

/// Checks the username invariant: 6-19 characters, ASCII letters and
/// digits only. Length is checked before the character set.
pub fn validate(candidate: &str) -> Result<(), UsernameError> {
    let len = candidate.chars().count();
    if !(MIN_LEN..=MAX_LEN).contains(&len) {
        return Err(UsernameError::Length { len });
    }
    if let Some(offending) = candidate.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(UsernameError::Charset { offending });
    }
    Ok(())
}

/// Prompts on stdout and reads attempts from `input` until one passes
/// [`validate`], printing the diagnostic for each rejected attempt to
/// stderr. Returns `None` if `input` reaches end-of-stream first.
///
/// Runs before anything touches the network, so a rejected attempt
/// leaves no state behind beyond the printed diagnostic.
pub async fn prompt<R>(input: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    loop {
        write_prompt("Enter your username").await?;

        line.clear();
        if input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        let candidate = line.trim_end_matches(['\r', '\n']);
        match validate(candidate) {
            Ok(()) => return Ok(Some(candidate.to_string())),
            Err(error) => write_diagnostic(&error.to_string()).await?,
        }
    }
}

async fn write_prompt(line: &str) -> io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}

async fn write_diagnostic(line: &str) -> io::Result<()> {
    let mut stderr = tokio::io::stderr();
    stderr.write_all(line.as_bytes()).await?;
    stderr.write_all(b"\n").await?;
    stderr.flush().await
}
