//! CLI command implementations

pub mod analyze;
pub mod play;
pub mod selfplay;

use clap::ValueEnum;

use crate::board::Symbol;

/// Symbol choice on the command line
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum SymbolArg {
    X,
    O,
}

impl From<SymbolArg> for Symbol {
    fn from(arg: SymbolArg) -> Self {
        match arg {
            SymbolArg::X => Symbol::X,
            SymbolArg::O => Symbol::O,
        }
    }
}
