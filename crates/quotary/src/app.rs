use std::time::Duration;

use axum::{
    http::{header, Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        authors::{create_author, delete_author, get_author, list_authors, update_author},
        health::{healthz, livez},
        quotes::{create_quote, delete_quote, get_quote, list_author_quotes, list_quotes, update_quote},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    // CORS configuration for API endpoints
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        // Health probes
        .route("/livez", get(livez))
        .route("/healthz", get(healthz))
        // Author routes
        .route("/authors", get(list_authors).post(create_author))
        .route(
            "/authors/{id}",
            get(get_author).put(update_author).delete(delete_author),
        )
        // Quote routes
        .route("/quotes", get(list_quotes))
        .route(
            "/authors/{author_id}/quotes",
            get(list_author_quotes).post(create_quote),
        )
        .route(
            "/authors/{author_id}/quotes/{quote_id}",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let state = AppState::in_memory().await.unwrap();
        create_app(state, Duration::from_secs(10))
    }

    fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn body_text(response: axum::response::Response) -> String {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(body.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_livez() {
        let app = test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/livez").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_healthz_reports_ok() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/healthz")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn test_list_authors_empty() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_author() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let author = body_json(response).await;
        assert_eq!(author["id"], 1);
        assert_eq!(author["name"], "Mark");
        assert_eq!(author["surname"], "Twain");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let fetched = body_json(response).await;
        assert_eq!(fetched["name"], "Mark");
        assert_eq!(fetched["surname"], "Twain");
    }

    #[tokio::test]
    async fn test_create_author_missing_field() {
        let app = test_app().await;

        let response = app
            .oneshot(form_request("POST", "/authors", "name=Mark"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_duplicate_author() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let text = body_text(response).await;
        assert!(text.contains("Mark Twain"));
    }

    #[tokio::test]
    async fn test_duplicate_surname_conflicts_and_leaves_data_unchanged() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        // Different name, same surname: caught by the UNIQUE(surname) constraint
        let response = app
            .clone()
            .oneshot(form_request("POST", "/authors", "name=Shania&surname=Twain"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_get_nonexistent_author() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_partial_update_keeps_blank_fields() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        // Blank name field: only the surname changes
        let response = app
            .clone()
            .oneshot(form_request("PUT", "/authors/1", "name=&surname=Clemens"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let author = body_json(response).await;
        assert_eq!(author["name"], "Mark");
        assert_eq!(author["surname"], "Clemens");
    }

    #[tokio::test]
    async fn test_noop_update_is_rejected() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        let response = app
            .oneshot(form_request("PUT", "/authors/1", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_nonexistent_author() {
        let app = test_app().await;

        let response = app
            .oneshot(form_request("PUT", "/authors/42", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_author() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/authors/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("deleted"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_author_cascades_to_quotes() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();
        app.clone()
            .oneshot(form_request(
                "POST",
                "/authors/1/quotes",
                "quote=Never+put+off+till+tomorrow",
            ))
            .await
            .unwrap();

        app.clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/authors/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/quotes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_and_get_quote() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(form_request(
                "POST",
                "/authors/1/quotes",
                "quote=The+secret+of+getting+ahead+is+getting+started",
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let quote = body_json(response).await;
        assert_eq!(quote["author_id"], 1);
        let quote_id = quote["id"].as_i64().unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri(format!("/authors/1/quotes/{quote_id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let fetched = body_json(response).await;
        assert_eq!(
            fetched["quote"],
            "The secret of getting ahead is getting started"
        );

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/1/quotes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let json = body_json(response).await;
        assert_eq!(json.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_quote_for_unknown_author() {
        let app = test_app().await;

        let response = app
            .oneshot(form_request("POST", "/authors/42/quotes", "quote=Hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_quotes_of_unknown_author() {
        let app = test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/42/quotes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_list_quotes_of_author_without_quotes() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        // Author exists but has no quotes: empty list, not 404
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/1/quotes")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert!(json.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_quote() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();
        app.clone()
            .oneshot(form_request("POST", "/authors/1/quotes", "quote=Original"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(form_request("PUT", "/authors/1/quotes/1", "quote=Revised"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let quote = body_json(response).await;
        assert_eq!(quote["quote"], "Revised");

        // Blank text keeps the stored value
        let response = app
            .oneshot(form_request("PUT", "/authors/1/quotes/1", "quote="))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let quote = body_json(response).await;
        assert_eq!(quote["quote"], "Revised");
    }

    #[tokio::test]
    async fn test_delete_quote() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();
        app.clone()
            .oneshot(form_request("POST", "/authors/1/quotes", "quote=Hello"))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/authors/1/quotes/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("deleted"));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/authors/1/quotes/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_nonexistent_quote() {
        let app = test_app().await;

        app.clone()
            .oneshot(form_request("POST", "/authors", "name=Mark&surname=Twain"))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/authors/1/quotes/42")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
