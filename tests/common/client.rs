//! HTTP client for end-to-end tests
//!
//! Wraps reqwest with one method per course-catalog endpoint.
//! When API routes or request formats change, update only this file.

use super::constants::*;
use reqwest::Response;
use serde_json::{json, Value};
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    // ========================================================================
    // Server
    // ========================================================================

    /// GET /
    #[allow(dead_code)]
    pub async fn get_stats(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("Stats request failed")
    }

    // ========================================================================
    // Courses
    // ========================================================================

    /// POST /courses with an arbitrary JSON body
    pub async fn post_course_json(&self, body: &Value) -> Response {
        self.client
            .post(format!("{}/courses", self.base_url))
            .json(body)
            .send()
            .await
            .expect("Create course request failed")
    }

    /// POST /courses with a raw body sent as JSON
    #[allow(dead_code)]
    pub async fn post_course_raw(&self, body: &str) -> Response {
        self.client
            .post(format!("{}/courses", self.base_url))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Create course request failed")
    }

    /// POST /courses
    pub async fn create_course(
        &self,
        title: &str,
        category: Option<&str>,
        duration_hours: i64,
    ) -> Response {
        self.post_course_json(&json!({
            "title": title,
            "category": category,
            "durationHours": duration_hours,
        }))
        .await
    }

    /// GET /courses
    #[allow(dead_code)]
    pub async fn list_courses(&self) -> Response {
        self.client
            .get(format!("{}/courses", self.base_url))
            .send()
            .await
            .expect("List courses request failed")
    }

    /// GET /courses?q={term}
    #[allow(dead_code)]
    pub async fn search_courses(&self, term: &str) -> Response {
        self.client
            .get(format!("{}/courses", self.base_url))
            .query(&[("q", term)])
            .send()
            .await
            .expect("Search courses request failed")
    }

    /// GET /courses/{id}
    #[allow(dead_code)]
    pub async fn get_course(&self, id: i64) -> Response {
        self.get_course_raw(&id.to_string()).await
    }

    /// GET /courses/{id} with an id that might not be an integer
    #[allow(dead_code)]
    pub async fn get_course_raw(&self, id: &str) -> Response {
        self.client
            .get(format!("{}/courses/{}", self.base_url, id))
            .send()
            .await
            .expect("Get course request failed")
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// GET /events
    #[allow(dead_code)]
    pub async fn list_events(&self) -> Response {
        self.client
            .get(format!("{}/events", self.base_url))
            .send()
            .await
            .expect("List events request failed")
    }
}
