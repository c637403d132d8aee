// Environment-driven configuration for the suite
//
// TODO_APP_URL   URL of a live todo application to drive; when unset the
//                scenarios run against the bundled fixture
// TODO_BROWSER   chromium (default), firefox, or webkit
// TODO_HEADLESS  set to 0/false/no/off to watch the browser

use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Environment variable naming a live application instance to drive.
pub const APP_URL_ENV: &str = "TODO_APP_URL";
/// Environment variable selecting the browser engine.
pub const BROWSER_ENV: &str = "TODO_BROWSER";
/// Environment variable toggling headless mode.
pub const HEADLESS_ENV: &str = "TODO_HEADLESS";

/// Browser engines Playwright can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrowserKind {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    /// Parses an engine name as spelled in TODO_BROWSER (case-insensitive).
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "chromium" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" => Ok(BrowserKind::Webkit),
            _ => Err(Error::UnknownBrowser {
                value: name.to_string(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run configuration resolved from the environment.
#[derive(Debug, Clone)]
pub struct TodoAppConfig {
    /// Live application to drive; `None` means the bundled fixture.
    pub app_url: Option<Url>,
    pub browser: BrowserKind,
    pub headless: bool,
}

impl Default for TodoAppConfig {
    fn default() -> Self {
        Self {
            app_url: None,
            browser: BrowserKind::default(),
            headless: true,
        }
    }
}

impl TodoAppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        let app_url = std::env::var(APP_URL_ENV).ok();
        let browser = std::env::var(BROWSER_ENV).ok();
        let headless = std::env::var(HEADLESS_ENV).ok();
        Self::from_values(app_url.as_deref(), browser.as_deref(), headless.as_deref())
    }

    /// Builds configuration from raw variable values.
    ///
    /// Empty and whitespace-only values are treated as unset, so a CI job
    /// exporting `TODO_APP_URL=""` still runs against the fixture.
    pub fn from_values(
        app_url: Option<&str>,
        browser: Option<&str>,
        headless: Option<&str>,
    ) -> Result<Self> {
        let app_url = match app_url.map(str::trim).filter(|value| !value.is_empty()) {
            Some(raw) => Some(parse_app_url(raw)?),
            None => None,
        };
        let browser = match browser.map(str::trim).filter(|value| !value.is_empty()) {
            Some(name) => BrowserKind::parse(name)?,
            None => BrowserKind::default(),
        };
        let headless = match headless.map(str::trim).filter(|value| !value.is_empty()) {
            Some(flag) => parse_headless(flag),
            None => true,
        };

        Ok(Self {
            app_url,
            browser,
            headless,
        })
    }

    /// URL the suite should drive: the configured live instance when set,
    /// otherwise the locally served fixture.
    pub fn resolve_app_url(&self, fixture_url: &str) -> String {
        match &self.app_url {
            Some(url) => url.as_str().to_string(),
            None => fixture_url.to_string(),
        }
    }
}

fn parse_app_url(raw: &str) -> Result<Url> {
    Url::parse(raw).map_err(|source| Error::InvalidAppUrl {
        value: raw.to_string(),
        source,
    })
}

fn parse_headless(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
