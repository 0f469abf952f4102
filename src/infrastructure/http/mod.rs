//! HTTP routes: server-rendered pages and the JSON API

mod content_routes;
mod ghost_routes;
mod hero_routes;
mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

/// Create all page and API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Pages
        .route("/", get(pages::home_page))
        .route("/about", get(pages::about_page))
        .route("/health", get(health_check))
        // Hero card
        .route("/api/hero/transform", get(hero_routes::get_transform))
        .route("/api/hero/flip", post(hero_routes::flip))
        // Content
        .route("/api/projects", get(content_routes::list_projects))
        .route("/api/projects/{slug}", get(content_routes::get_project))
        .route("/api/tools", get(content_routes::list_tools))
        .route("/api/landmarks", get(content_routes::list_landmarks))
        .route("/api/profile", get(content_routes::get_profile))
        .route("/api/content/export", get(content_routes::export_content))
        // Ghost
        .route("/api/ghost/respond", post(ghost_routes::respond))
        .route("/api/ghost/sessions", post(ghost_routes::open_session))
        .route(
            "/api/ghost/sessions/{id}",
            get(ghost_routes::get_session).delete(ghost_routes::close_session),
        )
        .route(
            "/api/ghost/sessions/{id}/messages",
            post(ghost_routes::post_message),
        )
        .fallback(pages::not_found_page)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::application::services::ghost_service::{GHOST_GREETING, OFFLINE_REPLY};
    use crate::infrastructure::config::AppConfig;

    fn app() -> Router {
        let state = AppState::new(AppConfig::default()).unwrap();
        create_routes().with_state(Arc::new(state))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get_json(app: &Router, uri: &str) -> Value {
        let (status, body) = send(app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::OK, "GET {} returned {}", uri, body);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_pages_render() {
        let app = app();

        let (status, html) = send(&app, Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Selected Works"));
        assert!(html.contains("Eco Branding 2024"));
        assert!(!html.contains("role=\"dialog\""));

        let (status, html) = send(&app, Method::GET, "/about", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("The Arsenal"));
        assert!(html.contains("--linger:2000ms"));

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, html) = send(&app(), Method::GET, "/work/elsewhere", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(html.contains("404"));
    }

    #[tokio::test]
    async fn test_home_overlay_and_filter() {
        let app = app();

        let (_, html) = send(&app, Method::GET, "/?project=cyberpunk-type", None).await;
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("A study in fluid legibility"));

        let (_, html) = send(&app, Method::GET, "/?project=no-such-thing", None).await;
        assert!(!html.contains("role=\"dialog\""));

        let (status, html) = send(&app, Method::GET, "/?category=illustration", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Entry Pending..."));

        let (status, _) = send(&app, Method::GET, "/?category=PAINTING", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_content_api() {
        let app = app();

        let projects = get_json(&app, "/api/projects").await;
        let projects = projects.as_array().unwrap();
        assert_eq!(projects.len(), 4);
        assert_eq!(projects[0]["index"], "01");
        assert_eq!(projects[0]["slug"], "eco-branding-2024");

        let web = get_json(&app, "/api/projects?category=WEB").await;
        assert_eq!(web.as_array().unwrap().len(), 1);
        assert_eq!(web[0]["title"], "Neon Interface");

        let detail = get_json(&app, "/api/projects/kinetic-motion").await;
        assert_eq!(detail["initial"], "M");
        assert!(detail["narrative"]
            .as_str()
            .unwrap()
            .starts_with("This series serves"));

        let (status, _) = send(&app, Method::GET, "/api/projects/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let tools = get_json(&app, "/api/tools").await;
        assert_eq!(tools.as_array().unwrap().len(), 8);
        assert_eq!(tools[7]["index"], "08");

        assert_eq!(get_json(&app, "/api/landmarks").await, json!([]));
        assert_eq!(get_json(&app, "/api/profile").await["initials"], "NG");
    }

    #[tokio::test]
    async fn test_export_is_pretty_and_rereadable() {
        let (status, body) = send(&app(), Method::GET, "/api/content/export", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\n  \"profile\""));

        let catalog: crate::domain::entities::ContentCatalog = serde_json::from_str(&body).unwrap();
        assert_eq!(catalog.projects.len(), 4);
    }

    #[tokio::test]
    async fn test_hero_api() {
        let app = app();

        let t = get_json(&app, "/api/hero/transform?x=1000&y=0&width=1000&height=800").await;
        assert_eq!(t["rotate_x"], -6.0);
        assert_eq!(t["rotate_y"], -6.0);
        assert_eq!(t["gloss_x"], 100.0);

        let t = get_json(&app, "/api/hero/transform?x=1000&y=0&width=1000&height=800&flipped=true").await;
        assert_eq!(t["flip_offset"], 180.0);
        assert_eq!(t["transform"], "rotateX(0.000deg) rotateY(180.000deg)");

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/hero/flip",
            Some(json!({"flipped": false, "origin": "card"})),
        )
        .await;
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["flipped"], true);

        let (_, body) = send(
            &app,
            Method::POST,
            "/api/hero/flip",
            Some(json!({"flipped": false, "origin": "control"})),
        )
        .await;
        assert_eq!(serde_json::from_str::<Value>(&body).unwrap()["flipped"], false);
    }

    #[tokio::test]
    async fn test_ghost_respond_offline() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/api/ghost/respond",
            Some(json!({"message": "who are you?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let reply: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(reply, json!({"role": "ghost", "text": OFFLINE_REPLY}));

        let (status, _) = send(
            &app,
            Method::POST,
            "/api/ghost/respond",
            Some(json!({"message": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_ghost_session_lifecycle() {
        let app = app();

        let (status, body) = send(&app, Method::POST, "/api/ghost/sessions", None).await;
        assert_eq!(status, StatusCode::CREATED);
        let transcript: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(transcript["messages"][0]["text"], GHOST_GREETING);
        let id = transcript["id"].as_str().unwrap().to_string();
        let uri = format!("/api/ghost/sessions/{}", id);

        let (status, body) = send(
            &app,
            Method::POST,
            &format!("{}/messages", uri),
            Some(json!({"message": "hi"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let outcome: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(outcome["superseded"], false);
        assert_eq!(outcome["transcript"]["messages"].as_array().unwrap().len(), 3);
        assert_eq!(outcome["transcript"]["loading"], false);

        let (status, _) = send(
            &app,
            Method::POST,
            &format!("{}/messages", uri),
            Some(json!({"message": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::GET, "/api/ghost/sessions/not-a-uuid", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
