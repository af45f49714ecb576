//! Depth-one toast notifier with a cancellable auto-dismiss.
//!
//! Showing a toast while another is visible replaces its text and supersedes
//! the pending dismiss. Each dismiss is identified by a [`TimerToken`]; a
//! timer that fires with a stale token does nothing, so at most one dismiss is
//! ever effective.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Generation number identifying one armed dismiss timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(pub u64);

/// The dismiss currently armed for the visible toast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingDismiss {
    pub token: TimerToken,
    pub expires_at_ms: f64,
}

/// Toast message, visibility, and its pending dismiss.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Toast {
    message: String,
    visible: bool,
    pending: Option<PendingDismiss>,
    next_token: u64,
}

impl Toast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingDismiss> {
        self.pending
    }

    /// Deadline of the pending dismiss, if one is armed.
    #[must_use]
    pub fn expires_at(&self) -> Option<f64> {
        self.pending.map(|p| p.expires_at_ms)
    }

    /// Show `message` and arm a fresh dismiss `dismiss_after_ms` after `now_ms`.
    ///
    /// Any earlier pending dismiss is superseded. Returns the token the host
    /// must hand back to [`Toast::dismiss`] when its timer fires.
    pub fn show(&mut self, message: &str, now_ms: f64, dismiss_after_ms: u32) -> TimerToken {
        if let Some(prev) = self.pending.take() {
            log::debug!("toast: superseding dismiss {:?}", prev.token);
        }
        message.clone_into(&mut self.message);
        self.visible = true;
        self.next_token += 1;
        let token = TimerToken(self.next_token);
        self.pending = Some(PendingDismiss { token, expires_at_ms: now_ms + f64::from(dismiss_after_ms) });
        token
    }

    /// Timer callback: hide the toast if `token` is the pending dismiss.
    ///
    /// The message text is kept. Returns `true` when the toast was hidden.
    pub fn dismiss(&mut self, token: TimerToken) -> bool {
        match self.pending {
            Some(pending) if pending.token == token => {
                self.pending = None;
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    /// Fire the pending dismiss if its deadline is at or before `now_ms`.
    pub fn advance_to(&mut self, now_ms: f64) -> bool {
        match self.pending {
            Some(pending) if pending.expires_at_ms <= now_ms => self.dismiss(pending.token),
            _ => false,
        }
    }
}
