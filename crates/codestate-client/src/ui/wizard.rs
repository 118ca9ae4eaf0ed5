//! Multi-step session-creation wizard.

use chrono::Utc;
use codestate_core::error::{CodeStateError, Result};
use codestate_core::session::{Session, SessionPrefill, SessionUpdates};

/// Wizard pages, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Basic,
    Scripts,
    TerminalCollections,
    Review,
}

/// Form state for creating or editing a session.
///
/// The captured workspace data (files, git, terminals) comes from the host
/// prefill and is never edited here; the wizard only collects the
/// user-owned fields and the script/collection selections. Submission is
/// only possible from the final step.
#[derive(Debug, Default)]
pub struct SessionWizard {
    step: WizardStep,
    pub name: String,
    pub project_root: String,
    pub tags: Vec<String>,
    pub notes: Option<String>,
    pub selected_scripts: Vec<String>,
    pub selected_terminal_collections: Vec<String>,
    prefill: SessionPrefill,
    editing_id: Option<String>,
}

impl SessionWizard {
    /// Starts a creation wizard from the host prefill. The project root
    /// falls back to the active root when the host did not capture one.
    pub fn new(prefill: SessionPrefill, fallback_root: Option<&str>) -> Self {
        let name = prefill.name.clone().unwrap_or_default();
        let project_root = prefill
            .project_root
            .clone()
            .or_else(|| fallback_root.map(str::to_string))
            .unwrap_or_default();
        Self {
            name,
            project_root,
            prefill,
            ..Self::default()
        }
    }

    /// Starts an edit wizard seeded from an existing session.
    pub fn for_edit(session: &Session) -> Self {
        Self {
            name: session.name.clone(),
            project_root: session.project_root.clone(),
            tags: session.tags.clone(),
            notes: session.notes.clone(),
            selected_scripts: session.scripts.clone(),
            selected_terminal_collections: session.terminal_collections.clone(),
            editing_id: Some(session.id.clone()),
            ..Self::default()
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn is_review(&self) -> bool {
        self.step == WizardStep::Review
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Whether the current step's required fields are filled.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::Basic => {
                !self.name.trim().is_empty() && !self.project_root.trim().is_empty()
            }
            _ => true,
        }
    }

    /// Advances one step; refused when the current step is incomplete or
    /// already at review.
    pub fn next(&mut self) -> bool {
        if !self.can_proceed() {
            return false;
        }
        let advanced = match self.step {
            WizardStep::Basic => Some(WizardStep::Scripts),
            WizardStep::Scripts => Some(WizardStep::TerminalCollections),
            WizardStep::TerminalCollections => Some(WizardStep::Review),
            WizardStep::Review => None,
        };
        match advanced {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    /// Goes back one step; refused at the first.
    pub fn back(&mut self) -> bool {
        let previous = match self.step {
            WizardStep::Basic => None,
            WizardStep::Scripts => Some(WizardStep::Basic),
            WizardStep::TerminalCollections => Some(WizardStep::Scripts),
            WizardStep::Review => Some(WizardStep::TerminalCollections),
        };
        match previous {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn toggle_script(&mut self, id: &str) {
        toggle(&mut self.selected_scripts, id);
    }

    pub fn toggle_terminal_collection(&mut self, id: &str) {
        toggle(&mut self.selected_terminal_collections, id);
    }

    /// Builds the provisional session to submit from the review step.
    ///
    /// The id is left empty: the host assigns it on confirmation.
    pub fn build_session(&self) -> Result<Session> {
        if !self.is_review() {
            return Err(CodeStateError::validation(
                "session can only be submitted from the review step",
            ));
        }
        let now = Utc::now();
        let session = Session {
            id: String::new(),
            name: self.name.trim().to_string(),
            project_root: self.project_root.trim().to_string(),
            created_at: now,
            updated_at: now,
            tags: self.tags.clone(),
            notes: self.notes.clone(),
            files: self.prefill.files.clone(),
            git: self.prefill.git.clone().unwrap_or_default(),
            extensions: self.prefill.extensions.clone(),
            terminal_commands: self.prefill.terminal_commands.clone(),
            terminal_collections: self.selected_terminal_collections.clone(),
            scripts: self.selected_scripts.clone(),
        };
        session.validate()?;
        Ok(session)
    }

    /// The changed-fields document for an edit submission, only available
    /// from the review step.
    pub fn build_updates(&self) -> Result<SessionUpdates> {
        if !self.is_review() {
            return Err(CodeStateError::validation(
                "session can only be submitted from the review step",
            ));
        }
        Ok(SessionUpdates {
            name: Some(self.name.trim().to_string()),
            tags: Some(self.tags.clone()),
            notes: self.notes.clone(),
            scripts: Some(self.selected_scripts.clone()),
            terminal_collections: Some(self.selected_terminal_collections.clone()),
        })
    }
}

fn toggle(selection: &mut Vec<String>, id: &str) {
    match selection.iter().position(|existing| existing == id) {
        Some(index) => {
            selection.remove(index);
        }
        None => selection.push(id.to_string()),
    }
}
