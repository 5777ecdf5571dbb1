/// A local command, parsed from the remainder of a stdin line after the
/// reserved prefix has been stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// End the session with a farewell; nothing is sent to the server.
    Exit,
    /// Anything unrecognized, kept verbatim for the error message.
    Unknown(String),
}

impl Command {
    pub fn parse(rest: &str) -> Self {
        match rest {
            "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}
