pub mod cli;
pub mod error;
pub mod registry;
pub mod selection;
pub mod tables;

use clap::CommandFactory;
use log::{debug, warn};

pub use crate::cli::{Args, Cmd};
pub use crate::error::Error;
pub use crate::registry::{Description, Monitor, MonitorRegistry};
pub use crate::tables::{InputSource, PowerState, Setting, VcpCommand};

/// Run `cmd` against the monitors in `registry`.
///
/// Arguments are fully validated before any monitor is written to.
pub fn execute<M: Monitor>(cmd: &Cmd, registry: &mut MonitorRegistry<M>) -> anyhow::Result<()> {
    debug!("Executing {:?}", cmd);

    match cmd {
        Cmd::List => {
            if registry.is_empty() {
                warn!("No DDC/CI capable monitors found");
            }
            let display_info = cli::collect_display_info(registry.describe_all());
            cli::print_table(&display_info);
        }
        Cmd::Power { state, monitors } => do_set(registry, *state, monitors.as_deref())?,
        Cmd::Input { input, monitors } => do_set(registry, *input, monitors.as_deref())?,
        Cmd::Help => {
            Args::command().print_long_help()?;
        }
    }

    Ok(())
}

/// Write `setting` to the monitors named by `monitors`, or to all of them.
pub fn do_set<M: Monitor, S: Setting>(
    registry: &mut MonitorRegistry<M>,
    setting: S,
    monitors: Option<&str>,
) -> Result<(), Error> {
    let selected = registry.select(monitors.unwrap_or(""))?;
    registry.apply(&selected, setting)
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::registry::fake::monitors;

    fn run(args: &[&str], count: usize, failing: &[usize]) -> (anyhow::Result<()>, Vec<(usize, u8, u16)>) {
        let args = Args::try_parse_from(std::iter::once("vcpctl").chain(args.iter().copied()))
            .expect("arguments should parse");
        let (m, log) = monitors(count, failing);
        let mut registry = MonitorRegistry::new(m);

        let res = execute(&args.cmd, &mut registry);
        drop(registry);

        let log = log.borrow();
        assert_eq!(log.dropped, count, "every monitor released once");
        (res, log.writes.clone())
    }

    #[test]
    fn power_offb_all() {
        let (res, writes) = run(&["power", "offb"], 3, &[]);

        assert!(res.is_ok());
        assert_eq!(writes, vec![(1, 0xD6, 0x05), (2, 0xD6, 0x05), (3, 0xD6, 0x05)]);
    }

    #[test]
    fn input_hdmi2_subset() {
        let (res, writes) = run(&["input", "hdmi2", "1,2"], 3, &[]);

        assert!(res.is_ok());
        assert_eq!(writes, vec![(1, 0x60, 0x12), (2, 0x60, 0x12)]);
    }

    #[test]
    fn bad_selection_touches_nothing() {
        let (res, writes) = run(&["power", "standby", "9"], 3, &[]);

        let err = res.unwrap_err();
        assert_eq!(
            err.downcast_ref::<Error>(),
            Some(&Error::IndexOutOfRange { index: 9, count: 3 })
        );
        assert!(writes.is_empty());

        let (res, writes) = run(&["input", "dp1", "1,x"], 3, &[]);
        assert!(res.is_err());
        assert!(writes.is_empty());
    }

    #[test]
    fn partial_failure_is_an_error() {
        let (res, writes) = run(&["input", "analog1"], 3, &[2]);

        assert_eq!(
            res.unwrap_err().downcast_ref::<Error>(),
            Some(&Error::ApplyFailed { monitors: vec![2] })
        );
        assert_eq!(writes.len(), 3);
    }

    #[test]
    fn no_monitors() {
        let (res, writes) = run(&["power", "on"], 0, &[]);
        assert!(res.is_ok());
        assert!(writes.is_empty());

        let (res, _) = run(&["power", "on", "1"], 0, &[]);
        assert!(res.is_err());
    }

    #[test]
    fn list_and_help_write_nothing() {
        let (res, writes) = run(&["list"], 2, &[]);
        assert!(res.is_ok());
        assert!(writes.is_empty());

        let (res, writes) = run(&["help"], 2, &[]);
        assert!(res.is_ok());
        assert!(writes.is_empty());
    }

    #[test]
    fn only_help_skips_enumeration() {
        assert!(!Cmd::Help.needs_monitors());
        assert!(Cmd::List.needs_monitors());
    }
}
