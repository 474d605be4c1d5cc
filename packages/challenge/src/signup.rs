//! Link to the key registration page

use recaptcha_common::DEFAULT_SIGNUP_SERVER;

/// Registration URL pre-filled with the site's domain and application name
#[must_use]
pub fn signup_url(domain: &str, app_name: &str) -> String {
    format!(
        "{DEFAULT_SIGNUP_SERVER}?domains={}&app={}",
        urlencoding::encode(domain),
        urlencoding::encode(app_name)
    )
}
