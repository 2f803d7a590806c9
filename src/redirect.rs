//! Single-flight unauthorized-redirect guard.
//!
//! When a session expires, every request in flight comes back 401 at
//! once; navigating to the login page once is wanted, navigating once
//! per failed request is not. [`RedirectGuard`] makes that decision for
//! the host's HTTP layer: at most one granted redirect per flight, with
//! the flight explicitly settled by the host once the navigation has
//! run its course.
//!
//! The guard never performs I/O; the host owns the transport and the
//! navigation side effect.

use std::cell::Cell;

/// Decision for one observed response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectOutcome {
    /// Not an authorization failure; handle the response normally.
    Passthrough,
    /// Session expired away from the login page: navigate to login now.
    /// The flight stays open until [`RedirectGuard::settle`].
    Redirect,
    /// Session expired while already on the login page; propagate the
    /// error, nothing to navigate to.
    AlreadyAtLogin,
    /// A redirect is already in flight; this duplicate is suppressed.
    InFlight,
}

/// Single-flight state for 401-driven login redirects.
///
/// # Usage
///
/// ```
/// use timegrid_select::redirect::{RedirectGuard, RedirectOutcome};
///
/// let guard = RedirectGuard::new("/login");
/// assert_eq!(guard.on_status(401, "/schedule"), RedirectOutcome::Redirect);
/// // Burst of failing requests behind the first one:
/// assert_eq!(guard.on_status(401, "/schedule"), RedirectOutcome::InFlight);
///
/// // Host finished (or abandoned) the navigation:
/// guard.settle();
/// assert!(!guard.is_in_flight());
/// ```
#[derive(Debug)]
pub struct RedirectGuard {
    login_path: String,
    in_flight: Cell<bool>,
}

impl RedirectGuard {
    /// Creates a guard redirecting to `login_path`, initially settled.
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
            in_flight: Cell::new(false),
        }
    }

    /// The configured login path.
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Whether a granted redirect has not settled yet.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.get()
    }

    /// Decides what to do with a response of the given status observed
    /// at `current_path`.
    pub fn on_status(&self, status: u16, current_path: &str) -> RedirectOutcome {
        if status != 401 {
            if status >= 400 {
                tracing::error!(status, path = current_path, "request failed");
            }
            return RedirectOutcome::Passthrough;
        }

        if self.in_flight.get() {
            tracing::debug!(path = current_path, "redirect already in flight");
            return RedirectOutcome::InFlight;
        }

        if current_path == self.login_path {
            // Nothing to navigate to; the flight settles immediately.
            return RedirectOutcome::AlreadyAtLogin;
        }

        self.in_flight.set(true);
        tracing::warn!(path = current_path, "unauthorized, redirecting to login");
        RedirectOutcome::Redirect
    }

    /// Settles the current flight, re-arming the guard.
    ///
    /// Called by the host when the navigation completed or failed.
    pub fn settle(&self) {
        self.in_flight.set(false);
    }
}
