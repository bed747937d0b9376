//! Global keyboard shortcuts.

/// Actions reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd + Enter
    Submit,
    /// Ctrl/Cmd + K
    Copy,
}

/// Map a `keydown` (DOM `key` value plus modifier state) to a shortcut.
pub fn shortcut_for(key: &str, ctrl: bool, meta: bool) -> Option<Shortcut> {
    if !(ctrl || meta) {
        return None;
    }
    match key {
        "Enter" => Some(Shortcut::Submit),
        k if k.eq_ignore_ascii_case("k") => Some(Shortcut::Copy),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_ctrl_or_cmd() {
        assert_eq!(shortcut_for("Enter", false, false), None);
        assert_eq!(shortcut_for("k", false, false), None);
    }

    #[test]
    fn test_submit_and_copy() {
        assert_eq!(shortcut_for("Enter", true, false), Some(Shortcut::Submit));
        assert_eq!(shortcut_for("Enter", false, true), Some(Shortcut::Submit));
        assert_eq!(shortcut_for("k", true, false), Some(Shortcut::Copy));
        assert_eq!(shortcut_for("K", false, true), Some(Shortcut::Copy));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(shortcut_for("c", true, false), None);
        assert_eq!(shortcut_for("Escape", true, true), None);
    }
}
