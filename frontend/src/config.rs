use crate::a11y::contrast::{best_text_color, contrast_ratio, meets_wcag, Rgb, WcagLevel};

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3001"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub fn contact_endpoint() -> String {
    format!("{}/api/contact", get_backend_url())
}

pub const BRAND_NAME: &str = "ReVOLT";
pub const BRAND_TAGLINE: &str = "Revolt : La révoltion commence ici";
pub const CONTACT_EMAIL: &str = "contact@revolt.com";
pub const SUPPORT_EMAIL: &str = "support@revolt.com";
pub const CONTACT_PHONE: &str = "+33 1 23 45 67 89";
pub const APP_STORE_URL: &str = "https://apps.apple.com/";
pub const PLAY_STORE_URL: &str = "https://play.google.com/store/apps";

/// Foreground/background pairs the stylesheet relies on for body text.
pub const TEXT_PALETTE: &[(&str, &str, &str)] = &[
    ("body text", "#0f172a", "#ffffff"),
    ("muted text", "#64748b", "#ffffff"),
    ("primary button", "#ffffff", "#15803d"),
    ("active link", "#15803d", "#ffffff"),
    ("footer text", "#e2e8f0", "#0f172a"),
];

/// Logs every palette pair that falls under WCAG AA, and at debug level the ones
/// short of AAA. Only run in debug builds.
pub fn audit_palette() {
    for (name, fg, bg) in TEXT_PALETTE {
        match (Rgb::from_hex(fg), Rgb::from_hex(bg)) {
            (Ok(fg), Ok(bg)) => {
                let ratio = contrast_ratio(fg, bg);
                if !meets_wcag(ratio, WcagLevel::AA) {
                    log::warn!(
                        "{} contrast {:.2}:1 is below AA, {} would read better on {}",
                        name,
                        ratio,
                        best_text_color(bg),
                        bg
                    );
                } else if !meets_wcag(ratio, WcagLevel::AAA) {
                    log::debug!("{} contrast {:.2}:1 passes AA but not AAA", name, ratio);
                }
            }
            (Err(e), _) | (_, Err(e)) => log::error!("bad palette color for {}: {}", name, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_palette_meets_aa() {
        for (name, fg, bg) in TEXT_PALETTE {
            let ratio = contrast_ratio(Rgb::from_hex(fg).unwrap(), Rgb::from_hex(bg).unwrap());
            assert!(meets_wcag(ratio, WcagLevel::AA), "{} is {:.2}:1", name, ratio);
        }
    }

    #[test]
    fn contact_endpoint_is_under_api() {
        assert!(contact_endpoint().ends_with("/api/contact"));
    }
}
