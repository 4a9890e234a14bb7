use gloo_timers::callback::Timeout;
use rand::Rng;
use web_sys::{window, Element};

pub const ANNOUNCEMENT_TTL_MS: u32 = 1_000;
const ID_SUFFIX_LEN: usize = 9;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// `<prefix>-<9 random base36 chars>` for aria-labelledby/-describedby/-controls
/// wiring. Unique enough for one page render, not for anything security related.
pub fn generate_id(prefix: &str) -> String {
    generate_id_with(prefix, &mut rand::thread_rng())
}

pub fn generate_id_with<R: Rng + ?Sized>(prefix: &str, rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("{}-{}", prefix, suffix)
}

pub trait AttributeTarget {
    fn set_attr(&self, name: &str, value: &str);
    fn remove_attr(&self, name: &str);
}

impl AttributeTarget for Element {
    fn set_attr(&self, name: &str, value: &str) {
        let _ = self.set_attribute(name, value);
    }

    fn remove_attr(&self, name: &str) {
        let _ = self.remove_attribute(name);
    }
}

/// Sets `aria-invalid` and points `aria-describedby` at the element holding the
/// error text. Without an id the attribute is removed so it never names an
/// element that is no longer rendered.
pub fn set_validation_attributes<T: AttributeTarget + ?Sized>(
    element: &T,
    is_valid: bool,
    description_id: Option<&str>,
) {
    element.set_attr("aria-invalid", if is_valid { "false" } else { "true" });
    match description_id {
        Some(id) => element.set_attr("aria-describedby", id),
        None => element.remove_attr("aria-describedby"),
    }
}

pub fn hide<T: AttributeTarget + ?Sized>(element: &T) {
    element.set_attr("aria-hidden", "true");
}

pub fn show<T: AttributeTarget + ?Sized>(element: &T) {
    element.remove_attr("aria-hidden");
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Politeness {
    /// Waits until the reader finishes what it is saying.
    #[default]
    Polite,
    /// Interrupts immediately.
    Assertive,
}

impl Politeness {
    pub fn as_str(self) -> &'static str {
        match self {
            Politeness::Polite => "polite",
            Politeness::Assertive => "assertive",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveRegion {
    pub message: String,
    pub politeness: Politeness,
}

impl LiveRegion {
    pub fn new(message: impl Into<String>, politeness: Politeness) -> Self {
        Self {
            message: message.into(),
            politeness,
        }
    }

    pub fn attributes(&self) -> [(&'static str, &'static str); 3] {
        [
            ("aria-live", self.politeness.as_str()),
            ("aria-atomic", "true"),
            ("class", "sr-only"),
        ]
    }

    fn apply<T: AttributeTarget + ?Sized>(&self, element: &T) {
        for (name, value) in self.attributes() {
            element.set_attr(name, value);
        }
    }
}

/// Drops a visually hidden live region into the body so screen readers speak
/// `message`, then removes it after [`ANNOUNCEMENT_TTL_MS`].
pub fn announce(message: &str, politeness: Politeness) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(region) = document.create_element("div") else {
        return;
    };
    LiveRegion::new(message, politeness).apply(&region);
    region.set_text_content(Some(message));
    if body.append_child(&region).is_err() {
        log::warn!("could not mount live region");
        return;
    }
    Timeout::new(ANNOUNCEMENT_TTL_MS, move || region.remove()).forget();
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    #[derive(Default)]
    struct FakeNode {
        attrs: RefCell<BTreeMap<String, String>>,
    }

    impl FakeNode {
        fn get(&self, name: &str) -> Option<String> {
            self.attrs.borrow().get(name).cloned()
        }
    }

    impl AttributeTarget for FakeNode {
        fn set_attr(&self, name: &str, value: &str) {
            self.attrs.borrow_mut().insert(name.to_string(), value.to_string());
        }

        fn remove_attr(&self, name: &str) {
            self.attrs.borrow_mut().remove(name);
        }
    }

    #[test]
    fn ids_carry_prefix_and_base36_suffix() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_id_with("field", &mut rng);
        let suffix = id.strip_prefix("field-").unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
        assert_ne!(generate_id("faq"), generate_id("faq"));
    }

    #[test]
    fn validation_attributes_follow_field_state() {
        let node = FakeNode::default();
        set_validation_attributes(&node, false, Some("email-error"));
        assert_eq!(node.get("aria-invalid").as_deref(), Some("true"));
        assert_eq!(node.get("aria-describedby").as_deref(), Some("email-error"));

        set_validation_attributes(&node, true, None);
        assert_eq!(node.get("aria-invalid").as_deref(), Some("false"));
        assert_eq!(node.get("aria-describedby"), None);
    }

    #[test]
    fn hide_and_show_toggle_aria_hidden() {
        let node = FakeNode::default();
        hide(&node);
        assert_eq!(node.get("aria-hidden").as_deref(), Some("true"));
        show(&node);
        assert_eq!(node.get("aria-hidden"), None);
    }

    #[test]
    fn live_region_attributes_follow_politeness() {
        let node = FakeNode::default();
        LiveRegion::new("Message envoyé", Politeness::Assertive).apply(&node);
        assert_eq!(node.get("aria-live").as_deref(), Some("assertive"));
        assert_eq!(node.get("aria-atomic").as_deref(), Some("true"));
        assert_eq!(node.get("class").as_deref(), Some("sr-only"));
        assert_eq!(Politeness::default().as_str(), "polite");
    }
}
