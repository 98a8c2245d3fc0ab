// Logout action: CSRF guard, navigation and failure alert

use std::cell::{Cell, RefCell};

use student_page_wasm::logout::{perform_logout, LogoutPage, LogoutTransport, LOGOUT_FAILED_ALERT};
use student_page_wasm::UiError;

struct FakePage {
    token: RefCell<Option<String>>,
    navigated: Cell<bool>,
    alerts: RefCell<Vec<String>>,
}

impl FakePage {
    fn new(token: Option<&str>) -> Self {
        Self {
            token: RefCell::new(token.map(str::to_string)),
            navigated: Cell::new(false),
            alerts: RefCell::new(Vec::new()),
        }
    }
}

impl LogoutPage for FakePage {
    fn take_csrf_token(&self) -> Option<String> {
        self.token.borrow_mut().take()
    }

    fn navigate_home(&self) {
        self.navigated.set(true);
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
struct FakeTransport {
    offline: bool,
    posted: RefCell<Vec<String>>,
}

impl LogoutTransport for FakeTransport {
    async fn post_logout(&self, csrf_token: &str) -> Result<(), UiError> {
        self.posted.borrow_mut().push(csrf_token.to_string());
        if self.offline {
            Err(UiError::Network("Failed to fetch".to_string()))
        } else {
            Ok(())
        }
    }
}

#[tokio::test]
async fn test_missing_token_sends_nothing() {
    let page = FakePage::new(None);
    let transport = FakeTransport::default();

    let result = perform_logout(&page, &transport).await;

    assert_eq!(result, Err(UiError::MissingCsrfToken));
    assert!(transport.posted.borrow().is_empty());
    assert!(!page.navigated.get());
    assert!(page.alerts.borrow().is_empty());
}

#[tokio::test]
async fn test_logout_posts_token_and_goes_home() {
    let page = FakePage::new(Some("s3cr3t"));
    let transport = FakeTransport::default();

    perform_logout(&page, &transport).await.unwrap();

    assert_eq!(*transport.posted.borrow(), vec!["s3cr3t".to_string()]);
    assert!(page.navigated.get());
    assert!(page.alerts.borrow().is_empty());
    // The token holder is consumed
    assert!(page.token.borrow().is_none());
}

#[tokio::test]
async fn test_network_failure_alerts_without_navigating() {
    let page = FakePage::new(Some("s3cr3t"));
    let transport = FakeTransport {
        offline: true,
        ..FakeTransport::default()
    };

    let result = perform_logout(&page, &transport).await;

    assert!(matches!(result, Err(UiError::Network(_))));
    assert_eq!(transport.posted.borrow().len(), 1);
    assert!(!page.navigated.get());
    assert_eq!(*page.alerts.borrow(), vec![LOGOUT_FAILED_ALERT.to_string()]);
}

#[tokio::test]
async fn test_second_click_after_success_has_no_token() {
    let page = FakePage::new(Some("once"));
    let transport = FakeTransport::default();

    perform_logout(&page, &transport).await.unwrap();
    let again = perform_logout(&page, &transport).await;

    assert_eq!(again, Err(UiError::MissingCsrfToken));
    assert_eq!(transport.posted.borrow().len(), 1);
}
