use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use super::{ConstraintDraft, EditDialog, SchemaDraft};

/// Terminal dialog driven by rustyline. Empty input keeps the current
/// value; Ctrl-C / Ctrl-D anywhere backs out of the whole dialog.
pub struct ConsoleEditDialog;

impl ConsoleEditDialog {
    fn prompt(rl: &mut DefaultEditor, label: &str, current: &str) -> Option<String> {
        match rl.readline(&format!("{label} [{current}]: ")) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    Some(current.to_string())
                } else {
                    Some(line.to_string())
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => None,
            Err(_) => None,
        }
    }

    fn prompt_optional(
        rl: &mut DefaultEditor,
        label: &str,
        current: Option<&str>,
    ) -> Option<Option<String>> {
        let value = Self::prompt(rl, label, current.unwrap_or(""))?;
        if value.is_empty() {
            Some(None)
        } else {
            Some(Some(value))
        }
    }

    fn confirm(rl: &mut DefaultEditor, question: &str) -> bool {
        match rl.readline(&format!("{question} [y/N]: ")) {
            Ok(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

impl EditDialog for ConsoleEditDialog {
    fn edit_constraint(&self, draft: ConstraintDraft) -> Option<ConstraintDraft> {
        let mut rl = DefaultEditor::new().ok()?;

        if let Some(parent) = &draft.parent {
            println!("New {} constraint on table '{}'", draft.kind, parent);
        } else {
            println!("New {} constraint", draft.kind);
        }

        let name = Self::prompt(&mut rl, "Constraint name", &draft.name)?;
        let description =
            Self::prompt_optional(&mut rl, "Comment", draft.description.as_deref())?;
        let check_clause = if draft.check_clause_editable {
            Self::prompt_optional(&mut rl, "Check clause", draft.check_clause.as_deref())?
        } else {
            draft.check_clause.clone()
        };

        if !Self::confirm(&mut rl, "Create constraint?") {
            return None;
        }

        Some(ConstraintDraft {
            name,
            description,
            check_clause,
            ..draft
        })
    }

    fn edit_schema(&self, draft: SchemaDraft) -> Option<SchemaDraft> {
        let mut rl = DefaultEditor::new().ok()?;

        println!("New schema");
        let name = Self::prompt(&mut rl, "Schema name", &draft.name)?;
        let owner = Self::prompt(&mut rl, "Owner", &draft.owner)?;

        if !Self::confirm(&mut rl, "Create schema?") {
            return None;
        }

        Some(SchemaDraft { name, owner })
    }
}
