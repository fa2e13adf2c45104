/* src/editor/rust/tests/save.rs */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use deco_editor::{EDITOR_API_PATH, EditorClient, EditorForm, PageComponentData, Props};
use serde_json::{Value, json};

#[derive(Clone)]
struct Recorder {
  status: Option<StatusCode>,
  bodies: Arc<Mutex<Vec<Value>>>,
  followed: Arc<AtomicUsize>,
}

async fn save_handler(State(rec): State<Recorder>, Json(body): Json<Value>) -> Response {
  rec.bodies.lock().unwrap().push(body);
  match rec.status {
    Some(status) => (status, "save failed").into_response(),
    None => Redirect::to("/after-save").into_response(),
  }
}

async fn after_save(State(rec): State<Recorder>) -> &'static str {
  rec.followed.fetch_add(1, Ordering::SeqCst);
  "landed"
}

/// Serve the editor endpoint on an ephemeral port. With `status`, the endpoint
/// answers with that status instead of redirecting.
async fn spawn_server(status: Option<StatusCode>) -> (String, Recorder) {
  let rec = Recorder {
    status,
    bodies: Arc::new(Mutex::new(Vec::new())),
    followed: Arc::new(AtomicUsize::new(0)),
  };
  let app = Router::new()
    .route(EDITOR_API_PATH, post(save_handler))
    .route("/after-save", get(after_save))
    .with_state(rec.clone());

  let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
  let addr = listener.local_addr().unwrap();
  tokio::spawn(async move {
    axum::serve(listener, app).await.unwrap();
  });
  (format!("http://{addr}"), rec)
}

fn props(value: Value) -> Props {
  match value {
    Value::Object(map) => map,
    other => panic!("expected object, got {other}"),
  }
}

fn hero_and_footer() -> EditorForm {
  EditorForm::new(vec![
    PageComponentData::with_props("Hero", props(json!({ "title": "Hi" }))),
    PageComponentData::new("Footer"),
  ])
}

#[tokio::test]
async fn posts_payload_and_reloads_once() {
  let (base_url, rec) = spawn_server(None).await;
  let client = EditorClient::new(&base_url).unwrap();
  let reloads = AtomicUsize::new(0);

  client
    .save(&hero_and_footer(), "<t>", &|| {
      reloads.fetch_add(1, Ordering::SeqCst);
    })
    .await
    .unwrap();

  let bodies = rec.bodies.lock().unwrap().clone();
  assert_eq!(
    bodies,
    vec![json!({
      "components": [
        { "component": "Hero", "props": { "title": "Hi" } },
        { "component": "Footer" }
      ],
      "template": "<t>"
    })]
  );
  assert_eq!(reloads.load(Ordering::SeqCst), 1);
  assert_eq!(rec.followed.load(Ordering::SeqCst), 0, "redirect must not be followed");
}

#[tokio::test]
async fn edited_form_is_sent_in_current_order() {
  let (base_url, rec) = spawn_server(None).await;
  let client = EditorClient::new(&format!("{base_url}/")).unwrap();
  assert_eq!(client.endpoint(), format!("{base_url}{EDITOR_API_PATH}"));

  let mut form = hero_and_footer();
  form.add("Banner");
  assert!(form.set_field(2, "image", json!("/b.png")));
  assert!(form.reorder(deco_editor::Direction::Prev, 2));
  client.save(&form, "pages/home", &|| {}).await.unwrap();

  let body = rec.bodies.lock().unwrap()[0].clone();
  let names: Vec<&str> = body["components"]
    .as_array()
    .unwrap()
    .iter()
    .map(|c| c["component"].as_str().unwrap())
    .collect();
  assert_eq!(names, ["Hero", "Banner", "Footer"]);
  assert_eq!(body["components"][1]["props"], json!({ "image": "/b.png" }));
}

#[tokio::test]
async fn server_error_still_reloads() {
  let (base_url, rec) = spawn_server(Some(StatusCode::INTERNAL_SERVER_ERROR)).await;
  let client = EditorClient::new(&base_url).unwrap();
  let reloads = AtomicUsize::new(0);

  let result = client
    .save(&hero_and_footer(), "<t>", &|| {
      reloads.fetch_add(1, Ordering::SeqCst);
    })
    .await;

  assert!(result.is_ok());
  assert_eq!(rec.bodies.lock().unwrap().len(), 1);
  assert_eq!(reloads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn transport_error_reloads_then_fails() {
  let client = EditorClient::new("http://127.0.0.1:1").unwrap();
  let reloads = AtomicUsize::new(0);

  let err = client
    .save(&hero_and_footer(), "<t>", &|| {
      reloads.fetch_add(1, Ordering::SeqCst);
    })
    .await
    .unwrap_err();

  assert!(err.to_string().contains("/live/api/editor"), "got: {err}");
  assert_eq!(reloads.load(Ordering::SeqCst), 1);
}
