use crate::core::list::OrderedRecordList;
use crate::domain::model::Record;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};

/// One mutation step of a roster script. Mirrors the list API one to one;
/// the TOML form uses `op = "insert-after"` style tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum ScriptOp {
    Prepend { record: Record },
    Append { record: Record },
    InsertAfter { target: String, record: Record },
    InsertBefore { target: String, record: Record },
    Remove { target: String },
}

impl Validate for ScriptOp {
    fn validate(&self) -> Result<()> {
        match self {
            ScriptOp::Prepend { record } | ScriptOp::Append { record } => record.validate(),
            ScriptOp::InsertAfter { target, record }
            | ScriptOp::InsertBefore { target, record } => {
                validate_non_empty_string("step.target", target)?;
                record.validate()
            }
            ScriptOp::Remove { target } => validate_non_empty_string("step.target", target),
        }
    }
}

/// Outcome tally of a script run. A skipped step is a positional operation
/// whose target name was absent; the list is left untouched by it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptReport {
    pub applied: usize,
    pub skipped: usize,
}

/// Applies `steps` to `list` in order. Misses are logged and counted but are
/// never an error; the run always completes.
pub fn run_script(list: &mut OrderedRecordList, steps: &[ScriptOp]) -> ScriptReport {
    let mut report = ScriptReport::default();

    for step in steps {
        let matched = match step {
            ScriptOp::Prepend { record } => {
                tracing::debug!("prepend {}", record.name);
                list.prepend(record.clone());
                true
            }
            ScriptOp::Append { record } => {
                tracing::debug!("append {}", record.name);
                list.append(record.clone());
                true
            }
            ScriptOp::InsertAfter { target, record } => {
                tracing::debug!("insert {} after {}", record.name, target);
                list.insert_after(target, record.clone())
            }
            ScriptOp::InsertBefore { target, record } => {
                tracing::debug!("insert {} before {}", record.name, target);
                list.insert_before(target, record.clone())
            }
            ScriptOp::Remove { target } => {
                tracing::debug!("remove {}", target);
                list.remove_by_name(target).is_some()
            }
        };

        if matched {
            report.applied += 1;
        } else {
            tracing::warn!("no record matched step {:?}, skipping", step);
            report.skipped += 1;
        }
    }

    tracing::info!(
        "script finished: {} applied, {} skipped, {} records",
        report.applied,
        report.skipped,
        list.len()
    );
    report
}

/// Setup phase of the built-in demo: the fixed roster the original program
/// assembles before printing anything.
pub fn demo_setup_steps() -> Vec<ScriptOp> {
    vec![
        ScriptOp::Prepend {
            record: Record::new("Alice", 20, 85.5),
        },
        ScriptOp::Append {
            record: Record::new("Boris", 22, 90.2),
        },
        ScriptOp::InsertAfter {
            target: "Alice".to_string(),
            record: Record::new("Victor", 21, 88.0),
        },
        ScriptOp::InsertBefore {
            target: "Boris".to_string(),
            record: Record::new("Galina", 23, 92.1),
        },
    ]
}

/// Second phase of the built-in demo: drop Victor and show the roster again.
pub fn demo_removal_steps() -> Vec<ScriptOp> {
    vec![ScriptOp::Remove {
        target: "Victor".to_string(),
    }]
}
