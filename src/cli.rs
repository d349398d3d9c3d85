use std::borrow::Cow;

use clap::{Parser, Subcommand};
use tabled::{Style, Table, Tabled};

use crate::registry::Description;
use crate::tables::{InputSource, PowerState};

const AFTER_HELP: &str = "\
Monitors:
  <MONITORS> is a comma-separated list of monitor numbers as shown by 'list'.
  When omitted, the command is sent to every monitor.

Video inputs:
     analog1/2
    digital1/2/3/4
  composite1/2
     svideo1/2
      tuner1/2/3
  component1/2/3
         dp1/2
        vga1/2    (aliases for analog1/2)
        dvi1/2    (aliases for digital1/2)
       hdmi1/2    (aliases for digital3/4)

Examples:
  Change monitors 1 and 2 to HDMI 2
    vcpctl input hdmi2 1,2

  Change all monitors to DisplayPort 1
    vcpctl input dp1

  Put monitors 3 and 4 on standby
    vcpctl power standby 3,4

  Turn off all monitors, as if by button
    vcpctl power offb

Notes:
  - Not all monitors support all power states
  - HDMI on older monitors will be on dvi1/2 (use digital1/2 instead)";

#[derive(Parser, Debug)]
#[command(
    version,
    arg_required_else_help = true,
    disable_help_subcommand = true,
    after_long_help = AFTER_HELP
)]
/// Change power state and input source of monitors over DDC/CI
pub struct Args {
    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Cmd {
    /// Print a list of all physical monitors
    List,
    /// Change power state
    Power {
        #[arg(value_enum)]
        state: PowerState,
        /// Monitor numbers, comma-separated (default: all)
        monitors: Option<String>,
    },
    /// Change video input
    Input {
        #[arg(value_enum)]
        input: InputSource,
        /// Monitor numbers, comma-separated (default: all)
        monitors: Option<String>,
    },
    /// Print usage
    Help,
}

impl Cmd {
    /// Whether this command needs the monitors to be enumerated first.
    pub fn needs_monitors(&self) -> bool {
        !matches!(self, Cmd::Help)
    }
}

pub struct TableDisplayInfo {
    pub number: usize,
    pub info: Description,
}

impl TableDisplayInfo {
    pub fn new(number: usize, info: Description) -> Self {
        Self { number, info }
    }
}

impl Tabled for TableDisplayInfo {
    const LENGTH: usize = 5;

    fn fields(&self) -> Vec<Cow<'static, str>> {
        vec![
            format!("{}", self.number),
            self.info.backend.clone(),
            self.info.id.clone(),
            self.info.manufacturer_id.clone().unwrap_or("?".into()),
            self.info.model_name.clone().unwrap_or("?".into()),
        ]
        .into_iter()
        .map(|s| Cow::<'static, _>::Owned(s))
        .collect()
    }

    fn headers() -> Vec<Cow<'static, str>> {
        vec![
            "No.",
            "Backend",
            "Display ID",
            "Manufacturer ID",
            "Model Name",
        ]
        .into_iter()
        .map(|s| Cow::Borrowed(s))
        .collect()
    }
}

/// Number descriptions from 1, matching what `<MONITORS>` accepts.
pub fn collect_display_info(descriptions: Vec<Description>) -> Vec<TableDisplayInfo> {
    descriptions
        .into_iter()
        .enumerate()
        .map(|(i, info)| TableDisplayInfo::new(i + 1, info))
        .collect()
}

pub fn print_table(display_info: &[TableDisplayInfo]) {
    let mut table = Table::new(display_info);
    println!("{}", table.with(Style::blank()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cmd, clap::Error> {
        Args::try_parse_from(std::iter::once("vcpctl").chain(args.iter().copied()))
            .map(|a| a.cmd)
    }

    #[test]
    fn verify_args() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse(&["list"]).unwrap(), Cmd::List);
        assert_eq!(parse(&["help"]).unwrap(), Cmd::Help);
        assert_eq!(
            parse(&["power", "offb"]).unwrap(),
            Cmd::Power {
                state: PowerState::OffButton,
                monitors: None
            }
        );
        assert_eq!(
            parse(&["input", "hdmi2", "1,2"]).unwrap(),
            Cmd::Input {
                input: InputSource::Digital4,
                monitors: Some("1,2".to_string())
            }
        );
    }

    #[test]
    fn rejects_bad_invocations() {
        use clap::error::ErrorKind;

        assert_eq!(
            parse(&["foo"]).unwrap_err().kind(),
            ErrorKind::InvalidSubcommand
        );
        assert_eq!(
            parse(&["power"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["power", "Off"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            parse(&["input", "hdmi3"]).unwrap_err().kind(),
            ErrorKind::InvalidValue
        );
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn table_numbers_from_one() {
        let rows = collect_display_info(vec![Description::default(), Description::default()]);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[1].number, 2);

        let fields = rows[0].fields();
        assert_eq!(fields.len(), TableDisplayInfo::LENGTH);
        assert_eq!(fields[3], "?");
        assert_eq!(TableDisplayInfo::headers().len(), TableDisplayInfo::LENGTH);
    }
}
