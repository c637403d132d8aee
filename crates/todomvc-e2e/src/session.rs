// Browser session bootstrap

use playwright_rs::{Browser, LaunchOptions, Page, Playwright};

use crate::config::{BrowserKind, TodoAppConfig};
use crate::error::Result;

/// One browser session driving one todo application instance.
///
/// Every scenario owns its session. Nothing is shared between tests, so
/// the default test parallelism needs no coordination.
pub struct TodoSession {
    playwright: Playwright,
    browser: Browser,
    page: Page,
    app_url: String,
}

impl TodoSession {
    /// Launches the driver and the configured browser, and opens a page.
    pub async fn launch(config: &TodoAppConfig, app_url: &str) -> Result<Self> {
        tracing::info!(
            browser = %config.browser,
            headless = config.headless,
            "launching browser session"
        );
        let playwright = Playwright::launch().await?;
        let browser_type = match config.browser {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        };
        let browser = browser_type
            .launch_with_options(LaunchOptions::new().headless(config.headless))
            .await?;
        let page = browser.new_page().await?;

        Ok(Self {
            playwright,
            browser,
            page,
            app_url: app_url.to_string(),
        })
    }

    /// Navigates to the application root.
    ///
    /// With a fresh browser profile this yields the empty-list start state
    /// every scenario begins from.
    pub async fn goto_app(&self) -> Result<()> {
        tracing::info!(url = %self.app_url, "navigating to the todo application");
        self.page.goto(&self.app_url, None).await?;
        Ok(())
    }

    /// Page handle the interaction helpers operate on.
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// URL of the application under test.
    pub fn app_url(&self) -> &str {
        &self.app_url
    }

    /// Closes the browser and shuts the driver down.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        self.playwright.shutdown().await?;
        Ok(())
    }
}
