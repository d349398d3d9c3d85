/// Errors reported while selecting monitors or talking to them.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid monitor specification '{0}'")]
    InvalidSelection(String),

    #[error("invalid monitor index: {index} ({count} monitor(s) found)")]
    IndexOutOfRange { index: i64, count: usize },

    #[error("failed to set VCP feature {code:#04x} on monitor {monitor}: {reason}")]
    DeviceCommandFailed {
        monitor: usize,
        code: u8,
        reason: String,
    },

    #[error("command failed on monitor(s) {}", join(.monitors))]
    ApplyFailed { monitors: Vec<usize> },
}

fn join(monitors: &[usize]) -> String {
    monitors
        .iter()
        .map(|m| m.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
