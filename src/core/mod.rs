pub mod list;
pub mod script;

pub use crate::domain::model::Record;
pub use crate::domain::ports::Named;
pub use crate::utils::error::Result;
pub use list::{OrderedList, OrderedRecordList};
pub use script::{run_script, ScriptOp, ScriptReport};
