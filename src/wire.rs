use std::io;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const LINE_ENDINGS: &[char] = &['\n', '\r'];

/// Tag byte of the first outbound line, announcing the username to the
/// server. Written directly before the name, no separator.
pub const HANDSHAKE_TAG: char = 'h';

/// Reads one newline-delimited line with its terminator stripped.
/// Returns `None` when the peer closes the stream.
pub async fn read_line<R>(reader: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    let mut line = String::new();
    let bytes = reader.read_line(&mut line).await?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(LINE_ENDINGS).to_string()))
}

/// Writes `line` with a newline delimiter and flushes so the peer gets
/// timely updates.
pub async fn write_line<W>(writer: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}

/// Drops the server's reserved first character from an inbound line.
/// The tag is server bookkeeping this client never interprets.
pub fn strip_tag(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}

pub fn handshake_line(username: &str) -> String {
    format!("{HANDSHAKE_TAG}{username}")
}

pub fn chat_line(username: &str, text: &str) -> String {
    format!("{username}: {text}")
}

#[cfg(test)]
mod tests {
    use tokio::io::BufReader;

    use super::*;

    #[test]
    fn strip_tag_drops_exactly_one_character() {
        assert_eq!(strip_tag("Xhello"), "hello");
        assert_eq!(strip_tag("m"), "");
        assert_eq!(strip_tag(""), "");
    }

    #[test]
    fn handshake_has_no_separator() {
        assert_eq!(handshake_line("alice1"), "halice1");
    }

    #[test]
    fn chat_line_prefixes_the_username() {
        assert_eq!(chat_line("alice1", "hi there"), "alice1: hi there");
    }

    #[tokio::test]
    async fn roundtrip_over_duplex_pipe() {
        let (mut writer, reader) = tokio::io::duplex(1024);
        let mut reader = BufReader::new(reader);

        write_line(&mut writer, "halice1").await.expect("write line");
        let line = read_line(&mut reader)
            .await
            .expect("read line")
            .expect("expected a line");

        assert_eq!(line, "halice1");
    }

    #[tokio::test]
    async fn read_line_reports_eof_as_none() {
        let (writer, reader) = tokio::io::duplex(64);
        drop(writer);
        let mut reader = BufReader::new(reader);

        let line = read_line(&mut reader).await.expect("read line");
        assert_eq!(line, None);
    }

    #[tokio::test]
    async fn read_line_strips_crlf() {
        let mut reader = BufReader::new(&b"Xhello\r\n"[..]);
        let line = read_line(&mut reader)
            .await
            .expect("read line")
            .expect("expected a line");
        assert_eq!(line, "Xhello");
    }
}
