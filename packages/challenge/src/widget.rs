//! Challenge widget markup
//!
//! Emits the `<script>` include for the challenge, an optional
//! `RecaptchaOptions` configuration block, and a `<noscript>` fallback with an
//! iframe and the manual-entry form fields.

use crate::error::Result;
use recaptcha_common::{ServiceConfig, DEFAULT_API_SECURE_SERVER, DEFAULT_API_SERVER};
use serde::{Deserialize, Serialize};

/// Form field carrying the challenge token
pub const CHALLENGE_FIELD: &str = "recaptcha_challenge_field";
/// Form field carrying the end user's answer
pub const RESPONSE_FIELD: &str = "recaptcha_response_field";

/// Free-form widget options, serialized verbatim into `RecaptchaOptions`
pub type WidgetOptions = serde_json::Map<String, serde_json::Value>;

/// Built-in widget themes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default theme
    Red,
    /// Light theme
    White,
    /// Dark theme
    BlackGlass,
    /// Minimal theme
    Clean,
    /// Page supplies its own widget markup
    Custom,
}

/// Typed subset of the widget options understood by the challenge script
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecaptchaOptions {
    /// Visual theme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Interface language code, e.g. `en` or `fr`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// Tab index of the response field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tabindex: Option<i32>,
    /// Element id hosting a custom theme
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme_widget: Option<String>,
}

impl RecaptchaOptions {
    /// Convert to the free-form option map
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChallengeError::Options`] if serialization fails.
    pub fn into_map(self) -> Result<WidgetOptions> {
        match serde_json::to_value(self)? {
            serde_json::Value::Object(map) => Ok(map),
            other => Err(crate::ChallengeError::Options(format!(
                "expected an object, got {other}"
            ))),
        }
    }
}

/// Widget markup builder bound to one site's public key
#[derive(Clone, Debug)]
pub struct Widget {
    public_key: String,
    api_server: String,
    api_secure_server: String,
    use_ssl: bool,
}

impl Widget {
    /// Build from a service configuration, inheriting its SSL flag
    #[must_use]
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            public_key: config.credentials.public_key().to_string(),
            api_server: config.api_server(false).trim_end_matches('/').to_string(),
            api_secure_server: config.api_server(true).trim_end_matches('/').to_string(),
            use_ssl: config.use_ssl,
        }
    }

    /// Override the SSL flag
    #[must_use]
    pub fn with_ssl(mut self, use_ssl: bool) -> Self {
        self.use_ssl = use_ssl;
        self
    }

    /// Render the widget fragment
    ///
    /// The public key is URL-escaped like `error`. `error` is the code returned by a previous failed verification; it is
    /// URL-escaped and appended to both endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChallengeError::Options`] if `options` cannot be
    /// serialized.
    pub fn render(&self, error: Option<&str>, options: Option<&WidgetOptions>) -> Result<String> {
        let server = if self.use_ssl {
            &self.api_secure_server
        } else {
            &self.api_server
        };
        render_markup(server, &self.public_key, error, options)
    }
}

/// Render the widget fragment against the public service endpoints
///
/// # Errors
///
/// Returns [`crate::ChallengeError::Options`] if `options` cannot be
/// serialized.
pub fn widget_markup(
    public_key: &str,
    error: Option<&str>,
    use_ssl: bool,
    options: Option<&WidgetOptions>,
) -> Result<String> {
    let server = if use_ssl {
        DEFAULT_API_SECURE_SERVER
    } else {
        DEFAULT_API_SERVER
    };
    render_markup(server, public_key, error, options)
}

fn render_markup(
    server: &str,
    public_key: &str,
    error: Option<&str>,
    options: Option<&WidgetOptions>,
) -> Result<String> {
    let error_param = error
        .filter(|code| !code.is_empty())
        .map(|code| format!("&error={}", urlencoding::encode(code)))
        .unwrap_or_default();

    let key = urlencoding::encode(public_key);
    let mut html = String::new();

    if let Some(options) = options {
        // keep "</script>" inside a string value from closing the block
        let json = serde_json::to_string(options)?.replace("</", "<\\/");
        html.push_str(&format!(
            "<script type=\"text/javascript\">var RecaptchaOptions = {json};</script>\n"
        ));
    }

    html.push_str(&format!(
        "<script type=\"text/javascript\" src=\"{server}/challenge?k={key}{error_param}\"></script>\n\
         \n\
         <noscript>\n  \
         <iframe src=\"{server}/noscript?k={key}{error_param}\" height=\"300\" width=\"500\" frameborder=\"0\"></iframe><br/>\n  \
         <textarea name=\"{CHALLENGE_FIELD}\" rows=\"3\" cols=\"40\"></textarea>\n  \
         <input type=\"hidden\" name=\"{RESPONSE_FIELD}\" value=\"manual_challenge\"/>\n\
         </noscript>"
    ));

    tracing::debug!(
        public_key,
        with_error = error.is_some(),
        with_options = options.is_some(),
        "Widget markup rendered"
    );
    Ok(html)
}
