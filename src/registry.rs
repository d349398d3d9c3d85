//! Physical monitors discovered for the current session.

use anyhow::Result;
use ddc_hi::{Ddc, Display};
use log::{debug, error, warn};

use crate::error::Error;
use crate::selection::parse_selection;
use crate::tables::Setting;

/// Human-readable identification of a monitor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description {
    pub backend: String,
    pub id: String,
    pub manufacturer_id: Option<String>,
    pub model_name: Option<String>,
}

/// A physical monitor that accepts MCCS commands.
pub trait Monitor {
    /// Query the monitor for identification data not known at enumeration.
    fn probe(&mut self) -> Result<()> {
        Ok(())
    }

    fn describe(&self) -> Description;

    /// Set VCP feature `code` to `value`.
    fn set_feature(&mut self, code: u8, value: u16) -> Result<()>;
}

impl Monitor for Display {
    fn probe(&mut self) -> Result<()> {
        self.update_capabilities()?;
        Ok(())
    }

    fn describe(&self) -> Description {
        Description {
            backend: format!("{}", self.info.backend),
            id: self.info.id.clone(),
            manufacturer_id: self.info.manufacturer_id.clone(),
            model_name: self.info.model_name.clone(),
        }
    }

    fn set_feature(&mut self, code: u8, value: u16) -> Result<()> {
        self.handle.set_vcp_feature(code, value)?;
        Ok(())
    }
}

/// Ordered set of monitors, populated once and released on drop.
///
/// Positions never change after construction, so the numbers printed by
/// `list` stay valid for `power` and `input`.
pub struct MonitorRegistry<M: Monitor> {
    monitors: Vec<M>,
}

impl MonitorRegistry<Display> {
    /// Enumerate every DDC/CI capable monitor on every backend.
    pub fn enumerate() -> Self {
        let monitors = Display::enumerate();
        debug!("Enumerated {} monitor(s)", monitors.len());
        Self::new(monitors)
    }
}

impl<M: Monitor> MonitorRegistry<M> {
    pub fn new(monitors: Vec<M>) -> Self {
        Self { monitors }
    }

    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }

    /// Resolve a `<MONITORS>` argument against this registry.
    pub fn select(&self, spec: &str) -> Result<Vec<usize>, Error> {
        parse_selection(spec, self.len())
    }

    /// Probe each monitor and return its description, in registry order.
    pub fn describe_all(&mut self) -> Vec<Description> {
        self.monitors
            .iter_mut()
            .enumerate()
            .map(|(i, monitor)| {
                if let Err(e) = monitor.probe() {
                    warn!("Could not query capabilities of monitor {}: {}", i + 1, e);
                }
                monitor.describe()
            })
            .collect()
    }

    /// Send a single VCP write to the monitor at `index`.
    pub fn apply_one(&mut self, index: usize, code: u8, value: u16) -> Result<(), Error> {
        let count = self.len();
        let monitor = self
            .monitors
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange {
                index: index as i64 + 1,
                count,
            })?;

        debug!(
            "Setting VCP feature {:#04x} to {:#04x} on monitor {}",
            code,
            value,
            index + 1
        );
        monitor
            .set_feature(code, value)
            .map_err(|e| Error::DeviceCommandFailed {
                monitor: index + 1,
                code,
                reason: format!("{:#}", e),
            })
    }

    /// Write `setting` to every selected monitor, in order.
    ///
    /// Every monitor is attempted even if an earlier one fails; the error
    /// lists all monitors that did not accept the command.
    pub fn apply<S: Setting>(&mut self, indices: &[usize], setting: S) -> Result<(), Error> {
        debug!("Applying {:?} to {} monitor(s)", setting, indices.len());

        let failed: Vec<usize> = indices
            .iter()
            .filter_map(|&index| match self.apply_one(index, S::COMMAND.code(), setting.value()) {
                Ok(()) => None,
                Err(e) => {
                    error!("{}", e);
                    Some(index + 1)
                }
            })
            .collect();

        if failed.is_empty() {
            Ok(())
        } else {
            Err(Error::ApplyFailed { monitors: failed })
        }
    }
}

impl<M: Monitor> Drop for MonitorRegistry<M> {
    fn drop(&mut self) {
        debug!("Releasing {} monitor handle(s)", self.monitors.len());
    }
}
