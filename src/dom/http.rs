//! Fetch-backed student source and logout transport

use gloo_net::http::Request;
use web_sys::RequestRedirect;

use crate::config::PageConfig;
use crate::error::UiError;
use crate::loader::StudentSource;
use crate::logout::LogoutTransport;
use crate::models::{StudentRecord, StudentsResponse};

/// Header carrying the CSRF token on the logout request
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Reads student lists from `/api/school/{id}/students/`
#[derive(Debug, Clone)]
pub struct HttpStudentSource {
    config: PageConfig,
}

impl HttpStudentSource {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }
}

impl StudentSource for HttpStudentSource {
    async fn fetch_students(&self, school_id: &str) -> Result<Vec<StudentRecord>, UiError> {
        let url = self.config.students_url(school_id);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| UiError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(UiError::HttpStatus(response.status()));
        }

        let body: StudentsResponse = response
            .json()
            .await
            .map_err(|e| UiError::Decode(e.to_string()))?;
        Ok(body.students)
    }
}

/// Posts to the logout endpoint without following the redirect
#[derive(Debug, Clone)]
pub struct HttpLogoutTransport {
    endpoint: String,
}

impl HttpLogoutTransport {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            endpoint: config.logout_endpoint.clone(),
        }
    }
}

impl LogoutTransport for HttpLogoutTransport {
    async fn post_logout(&self, csrf_token: &str) -> Result<(), UiError> {
        let response = Request::post(&self.endpoint)
            .header(CSRF_HEADER, csrf_token)
            .redirect(RequestRedirect::Manual)
            .send()
            .await
            .map_err(|e| UiError::Network(e.to_string()))?;

        // A manual redirect comes back as an opaque response with status 0
        log::debug!("Logout answered with status {}", response.status());
        Ok(())
    }
}
