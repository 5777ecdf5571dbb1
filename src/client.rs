use anyhow::Result;
use tokio::{
    io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader, Lines},
    net::tcp::{OwnedReadHalf, OwnedWriteHalf},
    select,
};
use tracing::warn;

use crate::{cli::Cli, command::Command, connection, username, wire};

/// Runs one chat session: prompt for a username, connect, handshake,
/// then multiplex server lines and stdin until the user or the server
/// ends it. Nothing touches the network until the username validates.
pub async fn run(cli: Cli) -> Result<()> {
    let mut stdin = BufReader::new(tokio::io::stdin());

    let username = match username::prompt(&mut stdin).await? {
        Some(name) => name,
        // stdin closed before a valid name was supplied; no connection
        // exists yet, so there is nothing to tear down.
        None => return Ok(()),
    };

    let (reader, mut writer) = connection::connect(&cli.host, cli.port).await?;
    wire::write_line(&mut writer, &wire::handshake_line(&username)).await?;

    // Line streams are cancel-safe inside select!, unlike read_line:
    // a partially received line survives another arm completing first.
    let server_lines = reader.lines();
    let input_lines = stdin.lines();

    run_session(server_lines, input_lines, &mut writer, &username, cli.prefix).await?;
    shutdown_connection(&mut writer).await;

    Ok(())
}

async fn run_session(
    mut server_lines: Lines<BufReader<OwnedReadHalf>>,
    mut input_lines: Lines<BufReader<tokio::io::Stdin>>,
    writer: &mut OwnedWriteHalf,
    username: &str,
    prefix: char,
) -> Result<()> {
    // Cleared when the read half fails; the write direction keeps going
    // so the user can still type and /exit.
    let mut receiving = true;

    loop {
        select! {
            server_line = server_lines.next_line(), if receiving => {
                match server_line {
                    Ok(Some(line)) => write_stdout(wire::strip_tag(&line)).await?,
                    Ok(None) => {
                        write_stdout("*** server closed the connection").await?;
                        break;
                    }
                    Err(error) => {
                        warn!(?error, "error reading server response");
                        receiving = false;
                    }
                }
            }
            input_line = input_lines.next_line() => {
                match input_line? {
                    Some(line) => {
                        if !handle_input_line(&line, writer, username, prefix).await? {
                            break;
                        }
                    }
                    None => break,
                }
            }
            ctrl_c = tokio::signal::ctrl_c() => {
                handle_ctrl_c(ctrl_c);
                break;
            }
        }
    }

    Ok(())
}

async fn handle_input_line(
    line: &str,
    writer: &mut OwnedWriteHalf,
    username: &str,
    prefix: char,
) -> Result<bool> {
    if let Some(rest) = line.strip_prefix(prefix) {
        return handle_command(Command::parse(rest)).await;
    }

    wire::write_line(writer, &wire::chat_line(username, line)).await?;
    Ok(true)
}

/// Returns whether the session should keep running.
async fn handle_command(command: Command) -> Result<bool> {
    match command {
        Command::Exit => {
            write_stdout("Connection is being aborted...").await?;
            Ok(false)
        }
        Command::Unknown(cmd) => {
            write_stdout(&format!("Unknown command: \"{cmd}\"")).await?;
            Ok(true)
        }
    }
}

fn handle_ctrl_c(result: io::Result<()>) {
    if let Err(error) = result {
        warn!(?error, "ctrl-c handler failed");
    }
}

async fn shutdown_connection(writer: &mut OwnedWriteHalf) {
    if let Err(error) = writer.shutdown().await {
        warn!(?error, "failed to shutdown client writer cleanly");
    }
}

async fn write_stdout(line: &str) -> io::Result<()> {
    let mut stdout = tokio::io::stdout();
    stdout.write_all(line.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await
}
