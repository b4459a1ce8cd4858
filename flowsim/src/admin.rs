//! PIN gate in front of the content editors.
//!
//! This is a UI convenience, **not** a security boundary: the PIN is a
//! compiled-in constant, the comparison is a plain string equality and
//! the authenticated flag lives only in memory for the session. Anyone
//! with access to the process can edit the content regardless; the gate
//! merely keeps casual visitors out of the editing surface.

/// The fixed editor PIN.
const ADMIN_PIN: &str = "19901991";

/// Session-scoped gate state.
///
/// # Example
///
/// ```
/// use flowsim::admin::AdminGate;
///
/// let mut gate = AdminGate::new();
/// assert!(!gate.is_authenticated());
/// assert!(!gate.login("0000"));
/// assert!(gate.login("19901991"));
/// assert!(gate.is_authenticated());
/// ```
#[derive(Debug, Default)]
pub struct AdminGate {
    authenticated: bool,
}

impl AdminGate {
    /// A fresh, unauthenticated session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare `pin` against the fixed constant; on a match the session
    /// stays authenticated until [`logout`](AdminGate::logout).
    ///
    /// Returns whether **this attempt** matched, so a front-end can
    /// report the outcome directly. A failed attempt never changes the
    /// session state; check [`is_authenticated`](AdminGate::is_authenticated)
    /// for that.
    pub fn login(&mut self, pin: &str) -> bool {
        let matched = pin == ADMIN_PIN;
        if matched {
            self.authenticated = true;
        }
        matched
    }

    /// Drop the session's authentication.
    pub fn logout(&mut self) {
        self.authenticated = false;
    }

    #[inline]
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}
