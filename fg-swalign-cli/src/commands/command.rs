use anyhow::Result;
use clap::builder::PossibleValue;
use enum_dispatch::enum_dispatch;
use std::{fmt::Display, str::FromStr};

/// A subcommand of the `swalign` tool.
#[enum_dispatch]
pub trait Command {
    #[allow(clippy::missing_errors_doc)]
    fn execute(&self) -> Result<()>;
}

/// An option type defined outside of this crate whose values are listed in the command line help.
pub trait PossibleValues: Display + FromStr + Sized + 'static {
    fn variants() -> &'static [Self];

    /// One line of help for the given value.
    fn help(&self) -> &'static str;

    fn possible_values() -> Vec<PossibleValue> {
        Self::variants()
            .iter()
            .map(|variant| PossibleValue::new(variant.to_string()).help(variant.help()))
            .collect()
    }
}
