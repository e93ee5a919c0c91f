use crate::events::AppEvent;
use std::io::Write;
use std::os::unix::net::UnixStream;
use std::path::PathBuf;
use strum::{Display, EnumString};

const SOCKET_NAME: &str = "careerwheel.sock";

/// Line commands accepted on the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ControlCommand {
    Spin,
    Reload,
    Quit,
}

impl From<ControlCommand> for AppEvent {
    fn from(command: ControlCommand) -> Self {
        match command {
            ControlCommand::Spin => AppEvent::Spin,
            ControlCommand::Reload => AppEvent::ConfigReload,
            ControlCommand::Quit => AppEvent::Quit,
        }
    }
}

pub fn socket_path() -> PathBuf {
    std::env::var_os("XDG_RUNTIME_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(std::env::temp_dir)
        .join(SOCKET_NAME)
}

pub fn send_command(command: ControlCommand) -> anyhow::Result<()> {
    let path = socket_path();
    let mut stream = UnixStream::connect(&path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to careerwheel at {}: {}. Is it running?",
            path.display(),
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}
