use anyhow::{Context, Result};
use tokio::{
    io::BufReader,
    net::{lookup_host, TcpStream},
};
use tracing::info;

/// Resolves the endpoint and opens the one TCP connection the session
/// lives on, split into a buffered read half and a write half.
///
/// The two failure classes stay distinct: a host that does not resolve
/// fails with a message naming the host, any other connect failure with
/// a message naming the full endpoint. Both are fatal to the caller.
pub async fn connect(
    host: &str,
    port: u16,
) -> Result<(
    BufReader<tokio::net::tcp::OwnedReadHalf>,
    tokio::net::tcp::OwnedWriteHalf,
)> {
    let mut addrs = lookup_host((host, port))
        .await
        .with_context(|| format!("don't know about host {host}"))?;
    let addr = addrs
        .next()
        .with_context(|| format!("don't know about host {host}"))?;

    let stream = TcpStream::connect(addr)
        .await
        .with_context(|| format!("server probably isn't running on {host}:{port}"))?;

    info!("connected to {addr}");

    let (reader, writer) = stream.into_split();
    Ok((BufReader::new(reader), writer))
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn connects_to_a_listening_server() {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind ephemeral port");
        let port = listener.local_addr().expect("local addr").port();

        let result = connect("127.0.0.1", port).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unresolvable_host_names_the_host() {
        let error = connect("no-such-host.invalid", 6000)
            .await
            .expect_err("resolution should fail");
        assert!(
            format!("{error:#}").contains("no-such-host.invalid"),
            "{error:#}"
        );
    }
}
