//! Idle/Pending state for user-triggered actions.
//!
//! Each action maps to one [`Control`]: it goes Pending when a request
//! starts and returns to Idle once the request settles, success or failure,
//! so a control is never left permanently disabled. A control allows at most
//! one outstanding request; distinct controls are independent.

use std::future::Future;

use crate::error::{Result, SrfError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    Idle,
    Pending,
}

#[derive(Debug)]
pub struct Control {
    idle_label: &'static str,
    pending_label: &'static str,
    state: ControlState,
}

impl Control {
    pub fn new(idle_label: &'static str, pending_label: &'static str) -> Self {
        Self {
            idle_label,
            pending_label,
            state: ControlState::Idle,
        }
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == ControlState::Pending
    }

    /// Label for the control's current state.
    pub fn label(&self) -> &'static str {
        match self.state {
            ControlState::Idle => self.idle_label,
            ControlState::Pending => self.pending_label,
        }
    }

    pub fn pending_label(&self) -> &'static str {
        self.pending_label
    }

    /// Run one request through the control.
    ///
    /// Refuses to start while a request is outstanding; otherwise goes
    /// Pending, awaits the future, and returns to Idle before surfacing the
    /// outcome on every path.
    pub async fn run<T, F>(&mut self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if self.is_pending() {
            return Err(SrfError::validation(format!(
                "'{}' is already in progress",
                self.idle_label
            )));
        }

        self.state = ControlState::Pending;
        let outcome = fut.await;
        self.state = ControlState::Idle;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn control_returns_to_idle_after_success() {
        let mut control = Control::new("Find Recipes", "Finding\u{2026}");
        assert_eq!(control.state(), ControlState::Idle);
        assert_eq!(control.label(), "Find Recipes");

        let out = control.run(async { Ok(42) }).await.unwrap();
        assert_eq!(out, 42);
        assert_eq!(control.state(), ControlState::Idle);
    }

    #[tokio::test]
    async fn control_returns_to_idle_after_failure() {
        let mut control = Control::new("Detect Ingredients", "Detecting\u{2026}");

        let out: Result<()> = control
            .run(async { Err(SrfError::validation("boom")) })
            .await;
        assert!(out.is_err());
        assert_eq!(control.state(), ControlState::Idle);
    }

    #[tokio::test]
    async fn label_follows_state() {
        let mut control = Control::new("Substitutions", "Looking up\u{2026}");
        assert_eq!(control.label(), "Substitutions");

        control
            .run(async {
                // The pending label is what a UI would show while disabled.
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(control.label(), "Substitutions");
        assert_eq!(control.pending_label(), "Looking up\u{2026}");
    }
}
