use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use triage::{ApiConfig, Classifier, Submission};

use super::*;

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

/// Echoes what arrived back inside a classification body.
async fn echo(request: Request) -> Json<Value> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"));

    if is_multipart {
        let mut multipart = Multipart::from_request(request, &()).await.expect("multipart");
        let field = multipart.next_field().await.expect("next field").expect("one field");
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let content_type = field.content_type().unwrap_or_default().to_owned();
        let bytes = field.bytes().await.expect("bytes");
        Json(json!({
            "categoria": "multipart",
            "explicacao": format!("{name}|{file_name}|{content_type}|{}", bytes.len()),
            "resposta": String::from_utf8_lossy(&bytes),
        }))
    } else {
        let Json(body) = Json::<Value>::from_request(request, &()).await.expect("json");
        Json(json!({
            "categoria": "json",
            "explicacao": body["texto"],
            "resposta": "",
        }))
    }
}

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(Duration::from_secs(5), Duration::from_secs(2)).expect("client")
}

fn echo_app() -> Router {
    Router::new()
        .route("/processar-email", post(echo))
        .route("/validate", post(echo_validate))
}

async fn echo_validate(mut multipart: Multipart) -> (StatusCode, Json<Value>) {
    match multipart.next_field().await.expect("next field") {
        Some(field) if field.name() == Some("file") => {
            (StatusCode::OK, Json(json!({ "status": "ok" })))
        }
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Nenhum arquivo enviado" })),
        ),
    }
}

#[tokio::test]
async fn text_goes_out_as_json() {
    let base = spawn_backend(echo_app()).await;
    let classifier = Classifier::new(transport(), ApiConfig::new(&base));

    let result = classifier.submit("  Reunião amanhã às 10h  ", None).await.expect("ok");
    assert_eq!(result.category, "json");
    assert_eq!(result.explanation, "Reunião amanhã às 10h");
}

#[tokio::test]
async fn file_goes_out_as_multipart_even_with_text() {
    let base = spawn_backend(echo_app()).await;
    let classifier = Classifier::new(transport(), ApiConfig::new(&base));

    let upload = FileUpload::new("mail.txt", b"hello there".to_vec());
    let result = classifier.submit("ignored", Some(upload)).await.expect("ok");
    assert_eq!(result.category, "multipart");
    assert_eq!(result.explanation, "file|mail.txt|text/plain|11");
    assert_eq!(result.suggested_reply, "hello there");
}

#[tokio::test]
async fn validate_sends_the_file_field() {
    let base = spawn_backend(echo_app()).await;
    let classifier = Classifier::new(transport(), ApiConfig::new(&base));

    let report = classifier
        .validate(&FileUpload::new("mail.pdf", b"%PDF".to_vec()))
        .await
        .expect("ok");
    assert_eq!(report.status, "ok");
}

#[tokio::test]
async fn error_status_is_returned_not_raised() {
    let app = Router::new().route(
        "/processar-email",
        post(|| async { (StatusCode::BAD_REQUEST, Json(json!({ "error": "bad input" }))) }),
    );
    let base = spawn_backend(app).await;

    let raw = transport()
        .post(
            &format!("{base}/processar-email"),
            triage::build_request(&Submission::<FileUpload>::Text("x".to_owned())),
        )
        .await
        .expect("response");
    assert_eq!(raw.status, 400);

    let classifier = Classifier::new(transport(), ApiConfig::new(&base));
    let err = classifier.submit("x", None).await.expect_err("error");
    assert_eq!(err.to_string(), "bad input");
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let classifier = Classifier::new(transport(), ApiConfig::new(&format!("http://{addr}")));
    let err = classifier.submit("hello", None).await.expect_err("refused");
    assert!(matches!(err, SubmitError::Transport(_)));
}
