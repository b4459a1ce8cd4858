use std::sync::atomic::AtomicBool;

/// One-way shutdown latch shared between the [`SimDriver`] handle and
/// its ticker thread.
///
/// [`SimDriver`]: super::SimDriver
#[derive(Debug)]
pub(crate) struct Stop(AtomicBool);

/// use total ordering for the atomic operations to prevent
/// the operations to be reordered by the compiler or the CPU.
const ORDERING: std::sync::atomic::Ordering = std::sync::atomic::Ordering::SeqCst;

/// The Atomic ordering used for `load` like operations
const FETCH_ORDERING: std::sync::atomic::Ordering = ORDERING;

/// The Atomic ordering used for `store` like operations
const STORE_ORDERING: std::sync::atomic::Ordering = ORDERING;

impl Stop {
    pub(crate) fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    #[inline]
    pub(crate) fn get(&self) -> bool {
        self.0.load(FETCH_ORDERING)
    }

    /// set the stop signal; there is no way back
    #[inline]
    pub(crate) fn toggle(&self) {
        self.0.store(true, STORE_ORDERING)
    }
}

impl Default for Stop {
    fn default() -> Self {
        Self::new()
    }
}
