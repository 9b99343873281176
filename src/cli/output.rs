//! Output formatting utilities for the CLI.

use std::io::{self, Write};

use serde::Serialize;

use crate::domain::models::{SyncReport, VariableAction};

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput, W: Write>(
    out: &mut W,
    result: &T,
    json_mode: bool,
) -> io::Result<()> {
    if json_mode {
        writeln!(out, "{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default())
    } else {
        writeln!(out, "{}", result.to_human())
    }
}

impl CommandOutput for SyncReport {
    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Workspace {} ({}): {} created, {} updated",
            self.workspace.name,
            self.workspace.id,
            self.count(VariableAction::Created),
            self.count(VariableAction::Updated),
        )];
        for variable in &self.variables {
            lines.push(format!(
                "  {:<8} {} ({})",
                variable.action.as_str(),
                variable.key,
                variable.variable_id
            ));
        }
        lines.join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
