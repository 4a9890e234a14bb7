use web_sys::window;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Answers CSS media queries. The browser implementation goes through `matchMedia`.
pub trait PreferenceQuery {
    fn matches(&self, media_query: &str) -> bool;
}

pub struct WindowPreferences;

impl PreferenceQuery for WindowPreferences {
    fn matches(&self, media_query: &str) -> bool {
        window()
            .and_then(|w| w.match_media(media_query).ok().flatten())
            .map(|list| list.matches())
            .unwrap_or(false)
    }
}

pub fn prefers_reduced_motion<Q: PreferenceQuery + ?Sized>(query: &Q) -> bool {
    query.matches(REDUCED_MOTION_QUERY)
}

pub fn respects_motion_preference<Q: PreferenceQuery + ?Sized>(query: &Q) -> bool {
    !prefers_reduced_motion(query)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static [&'static str]);

    impl PreferenceQuery for Fixed {
        fn matches(&self, media_query: &str) -> bool {
            self.0.iter().any(|q| *q == media_query)
        }
    }

    #[test]
    fn reduced_motion_reads_the_media_query() {
        let reduced = Fixed(&[REDUCED_MOTION_QUERY]);
        assert!(prefers_reduced_motion(&reduced));
        assert!(!respects_motion_preference(&reduced));

        let default = Fixed(&[]);
        assert!(!prefers_reduced_motion(&default));
        assert!(respects_motion_preference(&default));
    }
}
