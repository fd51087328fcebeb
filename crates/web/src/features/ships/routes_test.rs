//! HTTP tests for the ship catalog endpoints, run against the in-memory store.

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        Router,
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
    };
    use serde_json::{Value, json};
    use storage::{repository::InMemoryShipRepository, services::ShipCatalog};
    use tower::ServiceExt;

    use crate::routes::router;

    const YEAR_3000_MILLIS: i64 = 32_503_680_000_000;

    /// Helper to create a router backed by an empty in-memory store
    fn create_test_router() -> Router {
        router(ShipCatalog::new(Arc::new(InMemoryShipRepository::new())))
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            app,
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
        send(
            app,
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    fn zeta() -> Value {
        json!({
            "name": "Zeta",
            "planet": "Earth",
            "shipType": "TRANSPORT",
            "prodDate": YEAR_3000_MILLIS,
            "isUsed": false,
            "speed": 0.5,
            "crewSize": 100
        })
    }

    async fn seed(app: &Router, count: usize) {
        for i in 0..count {
            let mut ship = zeta();
            ship["name"] = json!(format!("Ship {}", i));
            ship["speed"] = json!((90 - i as i64 * 10) as f64 / 100.0);
            ship["isUsed"] = json!(i % 2 == 1);
            let (status, _) = post(app, "/rest/ships", ship).await;
            assert_eq!(status, StatusCode::OK);
        }
    }

    fn ids(body: &Value) -> Vec<i64> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|ship| ship["id"].as_i64().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_create_ship() {
        let app = create_test_router();

        let (status, body) = post(&app, "/rest/ships", zeta()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "id": 1,
                "name": "Zeta",
                "planet": "Earth",
                "shipType": "TRANSPORT",
                "prodDate": YEAR_3000_MILLIS,
                "isUsed": false,
                "speed": 0.5,
                "crewSize": 100,
                "rating": 2.0
            })
        );
    }

    #[tokio::test]
    async fn test_collection_accepts_trailing_slash() {
        let app = create_test_router();

        let (status, body) = post(&app, "/rest/ships/", zeta()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(1));

        let (status, _) = post(&app, "/rest/ships", zeta()).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get(&app, "/rest/ships/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1, 2]);

        let (status, body) = get(&app, "/rest/ships/?pageSize=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1]);
    }

    #[tokio::test]
    async fn test_ship_fields_are_serialized_in_order() {
        let app = create_test_router();
        post(&app, "/rest/ships", zeta()).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/rest/ships/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();

        let positions: Vec<usize> = [
            "\"id\"",
            "\"name\"",
            "\"planet\"",
            "\"shipType\"",
            "\"prodDate\"",
            "\"isUsed\"",
            "\"speed\"",
            "\"crewSize\"",
            "\"rating\"",
        ]
        .iter()
        .map(|key| text.find(key).unwrap())
        .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn test_create_without_is_used() {
        let app = create_test_router();
        let mut ship = zeta();
        ship.as_object_mut().unwrap().remove("isUsed");

        let (status, body) = post(&app, "/rest/ships", ship).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isUsed"], json!(false));
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_fields() {
        let app = create_test_router();

        let mut ship = zeta();
        ship["speed"] = json!(1.5);
        let (status, body) = post(&app, "/rest/ships", ship).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Validation failed"));

        let mut ship = zeta();
        ship.as_object_mut().unwrap().remove("planet");
        let (status, _) = post(&app, "/rest/ships", ship).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let mut ship = zeta();
        ship["prodDate"] = json!(0);
        let (status, _) = post(&app, "/rest/ships", ship).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, count) = get(&app, "/rest/ships/count").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count, json!(0));
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_body() {
        let app = create_test_router();

        let (status, body) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/rest/ships")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());

        let mut ship = zeta();
        ship["shipType"] = json!("YACHT");
        let (status, _) = post(&app, "/rest/ships", ship).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_ship_ids() {
        let app = create_test_router();
        seed(&app, 5).await;

        let (status, body) = get(&app, "/rest/ships/5.0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], json!(5));

        for id in ["abc", "-5", "3.5", "0"] {
            let (status, _) = get(&app, &format!("/rest/ships/{}", id)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "id {}", id);
        }

        let (status, _) = get(&app, "/rest/ships/6").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_ship() {
        let app = create_test_router();
        post(&app, "/rest/ships", zeta()).await;

        let (status, body) = post(&app, "/rest/ships/1", json!({ "speed": 0.9 })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["speed"], json!(0.9));
        assert_eq!(body["rating"], json!(3.6));
        assert_eq!(body["name"], json!("Zeta"));
        assert_eq!(body["crewSize"], json!(100));

        let (_, fetched) = get(&app, "/rest/ships/1").await;
        assert_eq!(fetched, body);
    }

    #[tokio::test]
    async fn test_update_errors() {
        let app = create_test_router();
        post(&app, "/rest/ships", zeta()).await;

        let (status, _) = post(&app, "/rest/ships/2", json!({ "name": "Ghost" })).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = post(&app, "/rest/ships/1.5", json!({ "name": "Ghost" })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post(&app, "/rest/ships/1", json!({ "crewSize": 10000 })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"].as_array().unwrap().len(), 1);

        let (_, fetched) = get(&app, "/rest/ships/1").await;
        assert_eq!(fetched["crewSize"], json!(100));
    }

    #[tokio::test]
    async fn test_delete_ship() {
        let app = create_test_router();
        post(&app, "/rest/ships", zeta()).await;

        let (status, body) = delete(&app, "/rest/ships/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, Value::Null);

        let (status, _) = delete(&app, "/rest/ships/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = delete(&app, "/rest/ships/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_list_default_page() {
        let app = create_test_router();
        seed(&app, 7).await;

        let (status, body) = get(&app, "/rest/ships").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![1, 2, 3]);

        let (_, body) = get(&app, "/rest/ships?pageNumber=2").await;
        assert_eq!(ids(&body), vec![7]);

        let (status, body) = get(&app, "/rest/ships?pageNumber=3").await;
        assert_eq!(status, StatusCode::OK);
        assert!(ids(&body).is_empty());
    }

    #[tokio::test]
    async fn test_list_with_filters_and_order() {
        let app = create_test_router();
        seed(&app, 7).await;

        let (status, body) = get(
            &app,
            "/rest/ships?isUsed=false&maxSpeed=0.7&order=SPEED&pageSize=10",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), vec![7, 5, 3]);

        let (_, body) = get(&app, "/rest/ships?name=Ship%201&shipType=TRANSPORT").await;
        assert_eq!(ids(&body), vec![2]);

        let (_, body) = get(&app, "/rest/ships?order=RATING&pageSize=2").await;
        assert_eq!(ids(&body), vec![6, 4]);
    }

    #[tokio::test]
    async fn test_count_with_filters() {
        let app = create_test_router();
        seed(&app, 7).await;

        let (status, body) = get(&app, "/rest/ships/count").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(7));

        let (_, body) = get(&app, "/rest/ships/count?isUsed=true&pageSize=1").await;
        assert_eq!(body, json!(3));

        let (_, body) = get(&app, "/rest/ships/count?minCrewSize=101").await;
        assert_eq!(body, json!(0));
    }

    #[tokio::test]
    async fn test_malformed_query_is_rejected() {
        let app = create_test_router();

        for uri in [
            "/rest/ships?pageNumber=-1",
            "/rest/ships?order=NAME",
            "/rest/ships/count?minSpeed=fast",
        ] {
            let (status, _) = get(&app, uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        }
    }
}
