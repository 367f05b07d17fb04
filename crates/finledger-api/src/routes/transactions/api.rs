//! Transactions API endpoints - JSON CRUD over the file store
//!
//! Endpoints:
//! - api_transactions: full transaction list (JSON)
//! - api_transaction_detail: single transaction by id (JSON)
//! - api_transaction_create: append a new record
//! - api_transaction_update: replace the first record matching id
//! - api_transaction_delete: drop every record matching id

use crate::error::ApiError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use finledger_core::Transaction;
use serde::Serialize;

/// Acknowledgment body returned by the mutating endpoints
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Get the full transaction list (JSON API)
pub async fn api_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let store = state.store.read().await;
    let transactions = store.load()?;
    Ok(Json(transactions))
}

/// Get a single transaction by id (JSON API)
pub async fn api_transaction_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Transaction>, ApiError> {
    let store = state.store.read().await;
    let transactions = store.load()?;

    transactions
        .into_iter()
        .find(|tx| tx.id == id)
        .map(Json)
        .ok_or(ApiError::NotFound {
            resource: format!("transaction {}", id),
        })
}

/// Append a new transaction to the store
pub async fn api_transaction_create(
    State(state): State<AppState>,
    Json(transaction): Json<Transaction>,
) -> Result<Json<Message>, ApiError> {
    let store = state.store.write().await;
    store.append(transaction)?;
    Ok(Json(Message::new("Transaction added successfully!")))
}

/// Replace the first transaction matching the path id
///
/// A missing id is reported in the message body with a success status;
/// the stored collection is left unchanged.
pub async fn api_transaction_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(transaction): Json<Transaction>,
) -> Result<Json<Message>, ApiError> {
    let store = state.store.write().await;
    if store.replace(id, transaction)? {
        Ok(Json(Message::new("Transaction updated successfully!")))
    } else {
        Ok(Json(Message::new("Transaction not found.")))
    }
}

/// Remove every transaction matching the path id
///
/// Deleting an id with no matches is a no-op success.
pub async fn api_transaction_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, ApiError> {
    let store = state.store.write().await;
    store.remove(id)?;
    Ok(Json(Message::new("Transaction deleted successfully!")))
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use crate::{create_router, AppState};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use finledger_config::Config;
    use finledger_core::Store;
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::sync::RwLock;
    use tower::ServiceExt;

    const SALARY: &str =
        r#"{"id":1,"date":"2024-01-01","type":"income","category":"salary","amount":1000.0}"#;
    const RENT: &str =
        r#"{"id":2,"date":"2024-01-02","type":"expense","category":"rent","amount":800.0,"note":"january"}"#;

    fn test_router() -> (TempDir, Router) {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("transactions.json"));
        let state = AppState {
            store: Arc::new(RwLock::new(store)),
            config: Config::default(),
        };
        (dir, create_router(state))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let (_dir, router) = test_router();
        let response = router.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let (_dir, router) = test_router();
        let response = router.oneshot(get_request("/transactions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!([]));
    }

    #[tokio::test]
    async fn test_create_then_list() {
        let (_dir, router) = test_router();

        let response = router
            .clone()
            .oneshot(json_request("POST", "/transactions", SALARY))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Transaction added successfully!"
        );

        let response = router.oneshot(get_request("/transactions")).await.unwrap();
        assert_eq!(
            body_json(response).await,
            json!([{
                "id": 1,
                "date": "2024-01-01",
                "type": "income",
                "category": "salary",
                "amount": 1000.0,
                "note": ""
            }])
        );
    }

    #[tokio::test]
    async fn test_create_appends_after_prior_entries() {
        let (_dir, router) = test_router();

        for body in [SALARY, RENT] {
            router
                .clone()
                .oneshot(json_request("POST", "/transactions", body))
                .await
                .unwrap();
        }

        let listed = body_json(router.oneshot(get_request("/transactions")).await.unwrap()).await;
        assert_eq!(listed[0]["id"], 1);
        assert_eq!(listed[1]["id"], 2);
        assert_eq!(listed[1]["note"], "january");
    }

    #[tokio::test]
    async fn test_create_malformed_body_rejected() {
        let (_dir, router) = test_router();

        // category is missing
        let body = r#"{"id":1,"date":"2024-01-01","type":"income","amount":1000.0}"#;
        let response = router
            .clone()
            .oneshot(json_request("POST", "/transactions", body))
            .await
            .unwrap();
        assert!(response.status().is_client_error());

        let listed = body_json(router.oneshot(get_request("/transactions")).await.unwrap()).await;
        assert_eq!(listed, json!([]));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let (_dir, router) = test_router();

        for body in [SALARY, RENT] {
            router
                .clone()
                .oneshot(json_request("POST", "/transactions", body))
                .await
                .unwrap();
        }

        let replacement =
            r#"{"id":1,"date":"2024-01-15","type":"income","category":"bonus","amount":250.0}"#;
        let response = router
            .clone()
            .oneshot(json_request("PUT", "/transactions/1", replacement))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Transaction updated successfully!"
        );

        let listed = body_json(router.oneshot(get_request("/transactions")).await.unwrap()).await;
        assert_eq!(listed[0]["category"], "bonus");
        assert_eq!(listed[0]["note"], "");
        assert_eq!(listed[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_update_missing_id_reports_not_found() {
        let (_dir, router) = test_router();

        router
            .clone()
            .oneshot(json_request("POST", "/transactions", SALARY))
            .await
            .unwrap();

        let replacement =
            r#"{"id":99,"date":"2024-01-15","type":"income","category":"bonus","amount":250.0}"#;
        let response = router
            .clone()
            .oneshot(json_request("PUT", "/transactions/99", replacement))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["message"], "Transaction not found.");

        let listed = body_json(router.oneshot(get_request("/transactions")).await.unwrap()).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], 1);
    }

    #[tokio::test]
    async fn test_delete_removes_all_matches() {
        let (_dir, router) = test_router();

        for body in [SALARY, RENT] {
            router
                .clone()
                .oneshot(json_request("POST", "/transactions", body))
                .await
                .unwrap();
        }

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/transactions/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Transaction deleted successfully!"
        );

        let listed = body_json(router.oneshot(get_request("/transactions")).await.unwrap()).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], 2);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop_success() {
        let (_dir, router) = test_router();

        router
            .clone()
            .oneshot(json_request("POST", "/transactions", SALARY))
            .await
            .unwrap();

        let response = router
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/transactions/99")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await["message"],
            "Transaction deleted successfully!"
        );

        let listed = body_json(router.oneshot(get_request("/transactions")).await.unwrap()).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_detail_returns_transaction() {
        let (_dir, router) = test_router();

        router
            .clone()
            .oneshot(json_request("POST", "/transactions", RENT))
            .await
            .unwrap();

        let response = router.oneshot(get_request("/transactions/2")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let detail = body_json(response).await;
        assert_eq!(detail["category"], "rent");
        assert_eq!(detail["note"], "january");
    }

    #[tokio::test]
    async fn test_detail_missing_id_is_404() {
        let (_dir, router) = test_router();
        let response = router.oneshot(get_request("/transactions/99")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_json(response).await["error"]
            .as_str()
            .unwrap()
            .contains("transaction 99"));
    }

    #[tokio::test]
    async fn test_corrupt_store_is_server_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.json");
        std::fs::write(&path, "{not json").unwrap();

        let state = AppState {
            store: Arc::new(RwLock::new(Store::new(path))),
            config: Config::default(),
        };
        let router = create_router(state);

        let response = router.oneshot(get_request("/transactions")).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_cross_origin_requests_allowed() {
        let (_dir, router) = test_router();

        let request = Request::builder()
            .uri("/transactions")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "*"
        );
    }
}
