//! Job listing and posting integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use serial_test::serial;

use crate::common::{fixtures, TestApp};

// ============================================================================
// Posting
// ============================================================================
mod test_job_posting {
    use super::*;

    /// Post a job -- 201 with message, positive job_id and statusCode
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_post_job_returns_201_with_id() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app
            .send(Method::POST, "/api/job/post", Some(fixtures::engineer()))
            .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Job post created successfully!");
        assert_eq!(body["statusCode"], 201);
        assert!(body["job_id"].as_i64().unwrap() > 0);

        app.cleanup().await.unwrap();
    }

    /// Posted job resolves through get-by-id with the submitted fields
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_posted_job_resolves_by_id() {
        let app = TestApp::new().await.unwrap();
        let job_id = app.post_job(fixtures::engineer()).await;

        let (status, body) = app
            .send(Method::GET, &format!("/api/jobs/{}", job_id), None)
            .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], job_id);
        assert_eq!(body["title"], "Engineer");
        assert_eq!(body["description"], "Build things");
        assert_eq!(body["location"], "Remote");
        assert_eq!(body["salary"], 90000.0);
        assert!(body["company"].is_null());

        app.cleanup().await.unwrap();
    }

    /// Company is stored when supplied
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_post_job_with_company() {
        let app = TestApp::new().await.unwrap();
        let job_id = app.post_job(fixtures::designer()).await;

        let job = app.repos.jobs.find(job_id as i32).await.unwrap().unwrap();
        assert_eq!(job.company.as_deref(), Some("Acme"));
        assert_eq!(job.salary, 65000.5);

        app.cleanup().await.unwrap();
    }

    /// Missing field -- 400, nothing written
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_post_job_missing_field_is_client_error() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app
            .send(
                Method::POST,
                "/api/job/post",
                Some(json!({"title": "Engineer", "salary": 1})),
            )
            .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(app.repos.jobs.list().await.unwrap().is_empty());

        app.cleanup().await.unwrap();
    }

    /// NUL byte in a text field -- 400, nothing written
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_post_job_nul_byte_is_client_error() {
        let app = TestApp::new().await.unwrap();

        let mut job = fixtures::engineer();
        job["title"] = json!("Eng\u{0}ineer");
        let (status, body) = app.send(Method::POST, "/api/job/post", Some(job)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(app.repos.jobs.list().await.unwrap().is_empty());

        app.cleanup().await.unwrap();
    }
}

// ============================================================================
// Queries
// ============================================================================
mod test_job_queries {
    use super::*;

    /// Listing after N posts returns exactly those N jobs in creation order
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_list_jobs_in_creation_order() {
        let app = TestApp::new().await.unwrap();

        let titles = ["First", "Second", "Third"];
        let mut ids = Vec::new();
        for title in titles {
            let mut job = fixtures::engineer();
            job["title"] = json!(title);
            ids.push(app.post_job(job).await);
        }

        let (status, body) = app.send(Method::GET, "/api/jobs", None).await;
        assert_eq!(status, StatusCode::OK);

        let jobs = body.as_array().unwrap();
        assert_eq!(jobs.len(), titles.len());
        for ((job, id), title) in jobs.iter().zip(&ids).zip(titles) {
            assert_eq!(job["id"], *id);
            assert_eq!(job["title"], title);
            assert_eq!(job["location"], "Remote");
        }

        app.cleanup().await.unwrap();
    }

    /// Empty table lists as an empty array
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_list_jobs_empty() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app.send(Method::GET, "/api/jobs", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        app.cleanup().await.unwrap();
    }

    /// Id beyond the SERIAL range -- 404, not a parse error
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_get_job_id_out_of_range_is_not_found() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app.send(Method::GET, "/api/jobs/2147483648", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["message"], "Job not found");

        app.cleanup().await.unwrap();
    }

    /// Unknown id -- 404 with an error message
    #[tokio::test]
    #[serial]
    #[ignore] // Requires PostgreSQL at TEST_DATABASE_URL
    async fn test_get_missing_job_is_not_found() {
        let app = TestApp::new().await.unwrap();

        let (status, body) = app.send(Method::GET, "/api/jobs/999999", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
        assert_eq!(body["error"]["message"], "Job not found");

        app.cleanup().await.unwrap();
    }
}
