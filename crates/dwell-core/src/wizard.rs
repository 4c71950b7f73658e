//! Form state container for a single wizard instance.
//!
//! A [`Wizard`] owns the current step, the accumulated [`WizardRecord`], and
//! the submission [`Phase`]. Forward movement is gated by
//! [`crate::validate::is_valid`]; backward movement is not.

use serde::Serialize;

use crate::catalog::WizardKind;
use crate::record::{FieldValue, WizardRecord};
use crate::validate::is_valid;
use crate::WizardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Wizard {
    kind: WizardKind,
    step: usize,
    phase: Phase,
    record: WizardRecord,
}

impl Wizard {
    #[must_use]
    pub fn new(kind: WizardKind) -> Self {
        Self {
            kind,
            step: 0,
            phase: Phase::Editing,
            record: WizardRecord::empty(kind),
        }
    }

    #[must_use]
    pub fn kind(&self) -> WizardKind {
        self.kind
    }

    #[must_use]
    pub fn step(&self) -> usize {
        self.step
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn record(&self) -> &WizardRecord {
        &self.record
    }

    #[must_use]
    pub fn is_last_step(&self) -> bool {
        self.step == self.kind.last_step()
    }

    /// Whether the current step passes validation.
    #[must_use]
    pub fn current_step_valid(&self) -> bool {
        is_valid(self.kind, self.step, &self.record)
    }

    /// Progress bar fill, 0 on the first step and 100 on the last.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        let last = self.kind.last_step();
        if last == 0 {
            return 100;
        }
        self.step * 100 / last
    }

    /// Overwrite a field. Validation only happens on [`Wizard::advance`].
    ///
    /// # Errors
    ///
    /// Propagates schema errors from [`WizardRecord::set`].
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Result<(), WizardError> {
        self.record.set(name, value.into())
    }

    /// Toggle one item of a multi-select field.
    ///
    /// # Errors
    ///
    /// Propagates schema errors from [`WizardRecord::toggle`].
    pub fn toggle_item(&mut self, name: &str, item: &str) -> Result<(), WizardError> {
        self.record.toggle(name, item)
    }

    /// Move to the next step if the current one validates and is not last.
    ///
    /// Returns `true` when the step changed.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Editing || self.is_last_step() || !self.current_step_valid() {
            return false;
        }
        self.step += 1;
        true
    }

    /// Move to the previous step. No validation; no-op on the first step.
    ///
    /// Returns `true` when the step changed.
    pub fn retreat(&mut self) -> bool {
        if self.phase != Phase::Editing || self.step == 0 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// Jump back to an already-reached step.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotEditing`] while a submission is in flight
    /// or done, and [`WizardError::JumpAhead`] when `index` is past the
    /// current step. The step is left unchanged either way.
    pub fn jump_to(&mut self, index: usize) -> Result<(), WizardError> {
        if self.phase != Phase::Editing {
            return Err(WizardError::NotEditing);
        }
        if index > self.step {
            return Err(WizardError::JumpAhead {
                current: self.step,
                requested: index,
            });
        }
        self.step = index;
        Ok(())
    }

    /// Start submission from a valid final step.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotReadyToSubmit`] if not on the last step,
    /// the step is invalid, or a submission already started.
    pub fn begin_submit(&mut self) -> Result<(), WizardError> {
        if self.phase != Phase::Editing || !self.is_last_step() || !self.current_step_valid() {
            return Err(WizardError::NotReadyToSubmit);
        }
        self.phase = Phase::Submitting;
        Ok(())
    }

    /// Mark an in-flight submission as done.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotSubmitting`] unless the phase is
    /// [`Phase::Submitting`].
    pub fn finish_submit(&mut self) -> Result<(), WizardError> {
        if self.phase != Phase::Submitting {
            return Err(WizardError::NotSubmitting);
        }
        self.phase = Phase::Submitted;
        Ok(())
    }

    /// Return an in-flight submission to editing on the last step, keeping
    /// every entered value.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::NotSubmitting`] unless the phase is
    /// [`Phase::Submitting`].
    pub fn abort_submit(&mut self) -> Result<(), WizardError> {
        if self.phase != Phase::Submitting {
            return Err(WizardError::NotSubmitting);
        }
        self.phase = Phase::Editing;
        Ok(())
    }

    /// Back to step 0 with an empty record.
    pub fn reset(&mut self) {
        self.step = 0;
        self.phase = Phase::Editing;
        self.record = WizardRecord::empty(self.kind);
    }
}

#[cfg(test)]
#[path = "wizard_test.rs"]
mod tests;
