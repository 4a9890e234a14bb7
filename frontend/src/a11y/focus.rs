//! Focus trapping for modal surfaces (mobile menu, dialogs).
//!
//! The Tab-wrapping rule lives in [`FocusTrap`] and only needs [`FocusTarget`], so it
//! runs against fakes in tests. [`trap_focus`] wires it to a real container.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, KeyboardEvent};

use super::keyboard::Key;

/// Elements that take part in sequential keyboard navigation.
pub const FOCUSABLE_SELECTOR: &str =
    "button, [href], input, select, textarea, [tabindex]:not([tabindex=\"-1\"])";

pub trait FocusTarget: PartialEq {
    fn focus(&self);
    fn is_focusable(&self) -> bool;
}

impl FocusTarget for HtmlElement {
    fn focus(&self) {
        let _ = HtmlElement::focus(self);
    }

    fn is_focusable(&self) -> bool {
        self.is_connected()
    }
}

pub struct FocusTrap<T> {
    first: Option<T>,
    last: Option<T>,
}

impl<T: FocusTarget + Clone> FocusTrap<T> {
    /// `focusables` in document order.
    pub fn new(focusables: &[T]) -> Self {
        Self {
            first: focusables.first().cloned(),
            last: focusables.last().cloned(),
        }
    }

    /// Builds the trap and moves focus into it.
    pub fn engage(focusables: &[T]) -> Self {
        let trap = Self::new(focusables);
        trap.focus_first();
        trap
    }

    pub fn focus_first(&self) {
        if let Some(first) = &self.first {
            first.focus();
        }
    }

    /// Handles a key press inside the trap. Returns true when focus was moved and the
    /// browser's default action must be suppressed.
    pub fn handle_key(&self, key: Key, shift: bool, active: Option<&T>) -> bool {
        if key != Key::Tab {
            return false;
        }
        let (Some(first), Some(last)) = (&self.first, &self.last) else {
            return false;
        };
        let Some(active) = active else {
            return false;
        };
        if shift && active == first {
            last.focus();
            true
        } else if !shift && active == last {
            first.focus();
            true
        } else {
            false
        }
    }
}

/// Keeps the keydown listener installed on the container. Dropping the guard (or
/// calling [`FocusTrapGuard::release`]) removes it.
pub struct FocusTrapGuard {
    container: HtmlElement,
    listener: Option<Closure<dyn FnMut(KeyboardEvent)>>,
}

impl FocusTrapGuard {
    pub fn release(mut self) {
        self.detach();
    }

    fn detach(&mut self) {
        if let Some(listener) = self.listener.take() {
            let _ = self
                .container
                .remove_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref());
        }
    }
}

impl Drop for FocusTrapGuard {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Scopes Tab navigation to the focusable descendants of `container` and moves focus
/// to the first of them.
pub fn trap_focus(container: &HtmlElement) -> FocusTrapGuard {
    let trap = FocusTrap::engage(&focusable_descendants(container));

    let listener = Closure::<dyn FnMut(KeyboardEvent)>::new(move |e: KeyboardEvent| {
        let active = get_current_focus();
        if trap.handle_key(Key::from_event_key(&e.key()), e.shift_key(), active.as_ref()) {
            e.prevent_default();
        }
    });
    let attached = container
        .add_event_listener_with_callback("keydown", listener.as_ref().unchecked_ref())
        .is_ok();
    if !attached {
        log::warn!("could not attach focus trap listener");
    }

    FocusTrapGuard {
        container: container.clone(),
        listener: attached.then_some(listener),
    }
}

fn focusable_descendants(container: &HtmlElement) -> Vec<HtmlElement> {
    let Ok(nodes) = container.query_selector_all(FOCUSABLE_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Moves focus back to a previously saved element. Missing or detached elements are
/// ignored.
pub fn restore_focus<T: FocusTarget>(previous: Option<&T>) {
    if let Some(el) = previous {
        if el.is_focusable() {
            el.focus();
        }
    }
}

pub fn get_current_focus() -> Option<HtmlElement> {
    window()?
        .document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeElement {
        name: &'static str,
        attached: bool,
        focused: Rc<RefCell<Option<&'static str>>>,
    }

    impl PartialEq for FakeElement {
        fn eq(&self, other: &Self) -> bool {
            self.name == other.name
        }
    }

    impl FocusTarget for FakeElement {
        fn focus(&self) {
            *self.focused.borrow_mut() = Some(self.name);
        }

        fn is_focusable(&self) -> bool {
            self.attached
        }
    }

    fn elements(names: &[&'static str]) -> (Vec<FakeElement>, Rc<RefCell<Option<&'static str>>>) {
        let focused = Rc::new(RefCell::new(None));
        let els = names
            .iter()
            .map(|&name| FakeElement {
                name,
                attached: true,
                focused: focused.clone(),
            })
            .collect();
        (els, focused)
    }

    #[test]
    fn shift_tab_on_first_wraps_to_last() {
        let (els, focused) = elements(&["a", "b", "c"]);
        let trap = FocusTrap::new(&els);
        assert!(trap.handle_key(Key::Tab, true, Some(&els[0])));
        assert_eq!(*focused.borrow(), Some("c"));
    }

    #[test]
    fn tab_on_last_wraps_to_first() {
        let (els, focused) = elements(&["a", "b", "c"]);
        let trap = FocusTrap::new(&els);
        assert!(trap.handle_key(Key::Tab, false, Some(&els[2])));
        assert_eq!(*focused.borrow(), Some("a"));
    }

    #[test]
    fn tab_in_the_middle_is_left_to_the_browser() {
        let (els, focused) = elements(&["a", "b", "c"]);
        let trap = FocusTrap::new(&els);
        assert!(!trap.handle_key(Key::Tab, false, Some(&els[1])));
        assert!(!trap.handle_key(Key::Tab, true, Some(&els[1])));
        assert!(!trap.handle_key(Key::Enter, false, Some(&els[2])));
        assert_eq!(*focused.borrow(), None);
    }

    #[test]
    fn empty_container_never_wraps() {
        let trap: FocusTrap<FakeElement> = FocusTrap::new(&[]);
        let (els, _) = elements(&["outside"]);
        assert!(!trap.handle_key(Key::Tab, false, Some(&els[0])));
        trap.focus_first();
    }

    #[test]
    fn focus_first_moves_to_first_element() {
        let (els, focused) = elements(&["a", "b"]);
        FocusTrap::new(&els).focus_first();
        assert_eq!(*focused.borrow(), Some("a"));
    }

    #[test]
    fn engaging_focuses_the_first_element_then_wraps() {
        let (els, focused) = elements(&["close", "link", "submit"]);
        let trap = FocusTrap::engage(&els);
        assert_eq!(*focused.borrow(), Some("close"));
        assert!(trap.handle_key(Key::Tab, false, Some(&els[2])));
        assert_eq!(*focused.borrow(), Some("close"));

        let empty: FocusTrap<FakeElement> = FocusTrap::engage(&[]);
        assert!(!empty.handle_key(Key::Tab, true, Some(&els[0])));
    }

    #[test]
    fn restore_focus_skips_detached_and_missing() {
        let (mut els, focused) = elements(&["a"]);
        restore_focus::<FakeElement>(None);
        assert_eq!(*focused.borrow(), None);

        els[0].attached = false;
        restore_focus(Some(&els[0]));
        assert_eq!(*focused.borrow(), None);

        els[0].attached = true;
        restore_focus(Some(&els[0]));
        assert_eq!(*focused.borrow(), Some("a"));
    }
}
