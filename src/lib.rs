pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::ScriptConfig;

pub use crate::core::{run_script, OrderedList, OrderedRecordList, ScriptOp, ScriptReport};
pub use domain::model::Record;
pub use domain::ports::Named;
pub use utils::error::{Result, RosterError};
