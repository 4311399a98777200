// Module declarations
pub mod console;

use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;
use crate::core::constraint::TableConstraint;
use crate::core::constraint_type::ConstraintKind;
use crate::core::datasource::DataSourceInfo;
use crate::core::error::MetadataError;
use crate::core::schema::Schema;
use crate::runtime::{ProgressMonitor, UiExecutor};

pub use console::ConsoleEditDialog;

/// Opaque editing-transaction context. Carried through the configure call
/// for the surrounding editor framework, never interpreted here.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub id: Uuid,
}

impl CommandContext {
    #[must_use]
    pub fn new() -> Self {
        Self { id: Uuid::new_v4() }
    }
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Interactive edit/confirm cycle for a newly created object.
///
/// `Ok(Some(object))` - confirmed, edited fields applied.
/// `Ok(None)` - the user cancelled; callers must not proceed, this is not
/// an error. `Err` is reserved for collaborator failures.
pub trait ObjectConfigurator<T> {
    fn configure_object(
        &self,
        monitor: &ProgressMonitor,
        context: Option<&CommandContext>,
        parent: Option<&str>,
        object: T,
        options: &HashMap<String, String>,
    ) -> Result<Option<T>, MetadataError>;
}

/// Editable fields of a constraint as presented to the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintDraft {
    pub parent: Option<String>,
    pub name: String,
    pub kind: ConstraintKind,
    pub description: Option<String>,
    pub check_clause: Option<String>,
    /// Gated on the connection capability, the dialog must not offer the
    /// field when false
    pub check_clause_editable: bool,
}

/// Editable fields of a schema as presented to the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDraft {
    pub name: String,
    pub owner: String,
}

/// Dialog surface. Implementations return the edited draft on confirmation
/// and None when the user backs out.
pub trait EditDialog: Send + Sync {
    fn edit_constraint(&self, draft: ConstraintDraft) -> Option<ConstraintDraft>;
    fn edit_schema(&self, draft: SchemaDraft) -> Option<SchemaDraft>;
}

pub struct ConstraintConfigurator {
    ui: Arc<UiExecutor>,
    dialog: Arc<dyn EditDialog>,
    datasource: DataSourceInfo,
}

impl ConstraintConfigurator {
    #[must_use]
    pub fn new(ui: Arc<UiExecutor>, dialog: Arc<dyn EditDialog>, datasource: DataSourceInfo) -> Self {
        Self {
            ui,
            dialog,
            datasource,
        }
    }
}

impl ObjectConfigurator<TableConstraint> for ConstraintConfigurator {
    fn configure_object(
        &self,
        monitor: &ProgressMonitor,
        _context: Option<&CommandContext>,
        parent: Option<&str>,
        mut object: TableConstraint,
        _options: &HashMap<String, String>,
    ) -> Result<Option<TableConstraint>, MetadataError> {
        monitor.check_cancelled()?;

        let clause_editable =
            object.kind.is_check() && self.datasource.supports_check_constraints();
        let draft = ConstraintDraft {
            parent: parent.map(ToString::to_string),
            name: object.name.clone(),
            kind: object.kind,
            description: object.description.clone(),
            check_clause: object.check_clause().map(ToString::to_string),
            check_clause_editable: clause_editable,
        };

        let dialog = Arc::clone(&self.dialog);
        let edited = self.ui.run_task(move || dialog.edit_constraint(draft))?;

        match edited {
            Some(draft) => {
                object.name = draft.name;
                object.description = draft.description;
                if clause_editable {
                    object.set_check_clause(draft.check_clause);
                }
                Ok(Some(object))
            }
            None => Ok(None),
        }
    }
}

pub struct SchemaConfigurator {
    ui: Arc<UiExecutor>,
    dialog: Arc<dyn EditDialog>,
}

impl SchemaConfigurator {
    #[must_use]
    pub fn new(ui: Arc<UiExecutor>, dialog: Arc<dyn EditDialog>) -> Self {
        Self { ui, dialog }
    }
}

impl ObjectConfigurator<Schema> for SchemaConfigurator {
    fn configure_object(
        &self,
        monitor: &ProgressMonitor,
        _context: Option<&CommandContext>,
        _parent: Option<&str>,
        mut object: Schema,
        _options: &HashMap<String, String>,
    ) -> Result<Option<Schema>, MetadataError> {
        monitor.check_cancelled()?;

        let draft = SchemaDraft {
            name: object.name.clone(),
            owner: object.owner.clone(),
        };

        let dialog = Arc::clone(&self.dialog);
        let edited = self.ui.run_task(move || dialog.edit_schema(draft))?;

        match edited {
            Some(draft) => {
                object.name = draft.name;
                object.owner = draft.owner;
                Ok(Some(object))
            }
            None => Ok(None),
        }
    }
}
