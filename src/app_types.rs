use std::sync::atomic::{AtomicBool, Ordering};

/// Cross-cutting shell flags, managed as Tauri state. All flags are only
/// ever flipped from event handlers, never polled in loops.
#[derive(Debug, Default)]
pub(crate) struct ShellState {
    /// Held while the connectivity recovery dialog is on screen so a second
    /// failure report cannot stack a second dialog on top of it.
    pub(crate) connectivity_dialog_open: AtomicBool,
    /// The auto-update check runs at most once per process.
    pub(crate) update_check_started: AtomicBool,
}

/// RAII guard over an atomic flag. `try_set` fails while another guard is
/// alive, which is exactly the "at most one dialog" rule.
pub(crate) struct FlagGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> FlagGuard<'a> {
    pub(crate) fn try_set(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(Self { flag })
    }
}

impl Drop for FlagGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::FlagGuard;

    #[test]
    fn flag_guard_resets_flag_on_drop() {
        let flag = AtomicBool::new(false);
        {
            let _guard = FlagGuard::try_set(&flag).expect("first set should succeed");
            assert!(flag.load(Ordering::Relaxed));
        }
        assert!(!flag.load(Ordering::Relaxed));
    }

    #[test]
    fn flag_guard_rejects_double_set_until_drop() {
        let flag = AtomicBool::new(false);

        let guard = FlagGuard::try_set(&flag).expect("first set should succeed");
        assert!(FlagGuard::try_set(&flag).is_none());

        drop(guard);
        assert!(FlagGuard::try_set(&flag).is_some());
    }
}
