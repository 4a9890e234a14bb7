use web_sys::KeyboardEvent;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Tab,
    Enter,
    Space,
    Escape,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_event_key(key: &str) -> Self {
        match key {
            "Tab" => Key::Tab,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            "Escape" | "Esc" => Key::Escape,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Home" => Key::Home,
            "End" => Key::End,
            _ => Key::Other,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    fn next_key(self) -> Key {
        match self {
            Orientation::Vertical => Key::ArrowDown,
            Orientation::Horizontal => Key::ArrowRight,
        }
    }

    fn previous_key(self) -> Key {
        match self {
            Orientation::Vertical => Key::ArrowUp,
            Orientation::Horizontal => Key::ArrowLeft,
        }
    }
}

/// Whether list navigation acts on `key` (and so must cancel the default scroll).
pub fn handles_key(key: Key, orientation: Orientation) -> bool {
    key == orientation.next_key()
        || key == orientation.previous_key()
        || key == Key::Home
        || key == Key::End
}

/// New selected index after a navigation key. Clamps at both ends, no wraparound.
/// An empty list keeps `current_index`.
pub fn compute_next_index(
    key: Key,
    item_count: usize,
    current_index: usize,
    orientation: Orientation,
) -> usize {
    if item_count == 0 {
        return current_index;
    }
    let last = item_count - 1;
    if key == orientation.next_key() {
        (current_index + 1).min(last)
    } else if key == orientation.previous_key() {
        current_index.saturating_sub(1)
    } else if key == Key::Home {
        0
    } else if key == Key::End {
        last
    } else {
        current_index
    }
}

/// DOM wrapper around [`compute_next_index`] that suppresses scrolling for the keys
/// it handles.
pub fn handle_arrow_keys(
    event: &KeyboardEvent,
    item_count: usize,
    current_index: usize,
    orientation: Orientation,
) -> usize {
    let key = Key::from_event_key(&event.key());
    if handles_key(key, orientation) {
        event.prevent_default();
    }
    compute_next_index(key, item_count, current_index, orientation)
}

pub fn is_activation_key(key: Key) -> bool {
    matches!(key, Key::Enter | Key::Space)
}

/// Runs `callback` on Enter or Space. Returns whether it ran.
pub fn handle_activation<F: FnOnce()>(key: Key, callback: F) -> bool {
    if is_activation_key(key) {
        callback();
        true
    } else {
        false
    }
}

pub fn handle_activation_event<F: FnOnce()>(event: &KeyboardEvent, callback: F) {
    if handle_activation(Key::from_event_key(&event.key()), callback) {
        event.prevent_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_jumps_to_last() {
        assert_eq!(compute_next_index(Key::End, 5, 0, Orientation::Vertical), 4);
    }

    #[test]
    fn arrows_clamp_without_wrapping() {
        assert_eq!(compute_next_index(Key::ArrowDown, 5, 4, Orientation::Vertical), 4);
        assert_eq!(compute_next_index(Key::ArrowUp, 5, 0, Orientation::Vertical), 0);
        assert_eq!(compute_next_index(Key::ArrowDown, 5, 2, Orientation::Vertical), 3);
        assert_eq!(compute_next_index(Key::Home, 5, 3, Orientation::Vertical), 0);
    }

    #[test]
    fn orientation_picks_the_arrow_pair() {
        assert_eq!(compute_next_index(Key::ArrowRight, 4, 1, Orientation::Horizontal), 2);
        assert_eq!(compute_next_index(Key::ArrowLeft, 4, 1, Orientation::Horizontal), 0);
        // cross-axis arrows are ignored
        assert_eq!(compute_next_index(Key::ArrowDown, 4, 1, Orientation::Horizontal), 1);
        assert_eq!(compute_next_index(Key::ArrowRight, 4, 1, Orientation::Vertical), 1);
        assert!(!handles_key(Key::ArrowDown, Orientation::Horizontal));
        assert!(handles_key(Key::End, Orientation::Horizontal));
    }

    #[test]
    fn other_keys_and_empty_lists_keep_index() {
        assert_eq!(compute_next_index(Key::Other, 5, 2, Orientation::Vertical), 2);
        assert_eq!(compute_next_index(Key::End, 0, 0, Orientation::Vertical), 0);
    }

    #[test]
    fn activation_runs_on_enter_and_space_only() {
        let mut hits = 0;
        assert!(handle_activation(Key::Enter, || hits += 1));
        assert!(handle_activation(Key::from_event_key(" "), || hits += 1));
        assert!(!handle_activation(Key::Tab, || hits += 1));
        assert_eq!(hits, 2);
    }
}
