//! DOM side of the logout action

use web_sys::{Document, Window};

use crate::config::PageConfig;
use crate::logout::LogoutPage;

/// Id of the hidden element holding the logout CSRF token
pub const CSRF_CONTAINER_ID: &str = "csrf-token-container-logout";

/// Ids of the buttons that trigger a logout
pub const LOGOUT_BUTTON_IDS: [&str; 2] = ["logout-button-desktop", "logout-button-mobile"];

pub struct DomLogoutPage {
    window: Window,
    document: Document,
    home_url: String,
}

impl DomLogoutPage {
    pub fn new(window: Window, document: Document, config: &PageConfig) -> Self {
        Self {
            window,
            document,
            home_url: config.home_url.clone(),
        }
    }
}

impl LogoutPage for DomLogoutPage {
    fn take_csrf_token(&self) -> Option<String> {
        let container = self.document.get_element_by_id(CSRF_CONTAINER_ID)?;
        let token = container.get_attribute("data-csrf")?;
        // One-shot token holder
        container.remove();
        Some(token)
    }

    fn navigate_home(&self) {
        if let Err(err) = self.window.location().set_href(&self.home_url) {
            log::error!("Navigation to {} failed: {:?}", self.home_url, err);
        }
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert failed: {:?}", err);
        }
    }
}
