//! MCCS feature codes and the values this tool knows how to send.

use clap::ValueEnum;

/// VCP feature codes used by the `power` and `input` commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum VcpCommand {
    /// Feature Code 0x60, Input Select.
    InputSelect = 0x60,
    /// Feature Code 0xD6, Power Mode.
    PowerMode = 0xD6,
}

impl VcpCommand {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A value that can be written to a monitor, along with the feature it
/// belongs to.
pub trait Setting: Copy + std::fmt::Debug {
    const COMMAND: VcpCommand;

    fn value(self) -> u16;
}

/// MCCS power modes- names follow the spec for Feature Code 0xD6.
///
/// `Off` is the DPM "off" state requested by the host, while `OffButton`
/// behaves as if the power button on the monitor was pressed.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum PowerState {
    On = 1,
    Standby,
    Suspend,
    Off,
    #[value(name = "offb")]
    OffButton,
}

impl Setting for PowerState {
    const COMMAND: VcpCommand = VcpCommand::PowerMode;

    fn value(self) -> u16 {
        self as u16
    }
}

/// MCCS input sources- names follow the spec for Feature Code 0x60.
///
/// The familiar connector names are accepted as aliases: VGA for the analog
/// inputs, DVI for the first two digital inputs and HDMI for the last two.
#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
#[value(rename_all = "lower")]
pub enum InputSource {
    #[value(alias = "vga1")]
    Analog1 = 1,
    #[value(alias = "vga2")]
    Analog2,
    #[value(alias = "dvi1")]
    Digital1,
    #[value(alias = "dvi2")]
    Digital2,
    Composite1,
    Composite2,
    SVideo1,
    SVideo2,
    Tuner1,
    Tuner2,
    Tuner3,
    Component1,
    Component2,
    Component3,
    #[value(name = "dp1")]
    DisplayPort1,
    #[value(name = "dp2")]
    DisplayPort2,
    #[value(alias = "hdmi1")]
    Digital3,
    #[value(alias = "hdmi2")]
    Digital4,
}

impl Setting for InputSource {
    const COMMAND: VcpCommand = VcpCommand::InputSelect;

    fn value(self) -> u16 {
        self as u16
    }
}
