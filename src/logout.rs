//! Logout action
//!
//! Posts the CSRF token to the logout endpoint and sends the browser home.

use crate::error::UiError;

/// Message shown when the logout request could not be sent
pub const LOGOUT_FAILED_ALERT: &str = "Logout failed. Please try again.";

/// Page side of the logout flow
pub trait LogoutPage {
    /// Read the CSRF token and remove its holder from the page.
    /// `None` when the holder or its token is missing; the page is untouched.
    fn take_csrf_token(&self) -> Option<String>;

    fn navigate_home(&self);

    fn alert(&self, message: &str);
}

/// Network side of the logout flow
#[allow(async_fn_in_trait)]
pub trait LogoutTransport {
    /// Send the logout request. Any response, redirects included, counts as
    /// completion; only a transport failure is an error.
    async fn post_logout(&self, csrf_token: &str) -> Result<(), UiError>;
}

/// Run one logout attempt. Nothing is retried.
pub async fn perform_logout<P: LogoutPage, T: LogoutTransport>(
    page: &P,
    transport: &T,
) -> Result<(), UiError> {
    let token = match page.take_csrf_token() {
        Some(token) => token,
        None => {
            log::error!("{}", UiError::MissingCsrfToken);
            return Err(UiError::MissingCsrfToken);
        }
    };

    match transport.post_logout(&token).await {
        Ok(()) => {
            page.navigate_home();
            Ok(())
        }
        Err(err) => {
            log::error!("Error during logout: {}", err);
            page.alert(LOGOUT_FAILED_ALERT);
            Err(err)
        }
    }
}
