use std::cell::Cell;

/// Decide whether a `pagehide` should shut the page down.
///
/// A hide into the back/forward cache (`persisted`) keeps the loop and audio so
/// the page resumes where it was. Otherwise only the first hide claims the
/// shutdown and clears `running`.
pub fn claim_shutdown(persisted: bool, running: &Cell<bool>) -> bool {
    if persisted {
        return false;
    }
    running.replace(false)
}
