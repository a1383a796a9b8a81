use super::*;

fn spam_body() -> String {
    serde_json::json!({
        "categoria": "Spam",
        "explicacao": "X",
        "resposta": "Y"
    })
    .to_string()
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn ok_response_decodes_all_fields() {
    let result = interpret_response(200, &spam_body()).expect("ok");
    assert_eq!(
        result,
        Classification {
            category: "Spam".to_owned(),
            explanation: "X".to_owned(),
            suggested_reply: "Y".to_owned(),
        }
    );
}

#[test]
fn ok_response_defaults_missing_reply() {
    let body =
        serde_json::json!({ "categoria": "Produtivo", "explicacao": "pede status" }).to_string();
    let result = interpret_response(201, &body).expect("ok");
    assert_eq!(result.category, "Produtivo");
    assert_eq!(result.suggested_reply, "");
}

#[test]
fn error_status_uses_error_field_verbatim() {
    let body = serde_json::json!({ "error": "bad input" }).to_string();
    let err = interpret_response(400, &body).expect_err("error");
    assert_eq!(
        err,
        SubmitError::Server {
            status: 400,
            message: "bad input".to_owned(),
        }
    );
}

#[test]
fn error_status_without_error_field_uses_fallback() {
    let err = interpret_response(500, "{}").expect_err("error");
    assert_eq!(err.to_string(), PROCESS_FALLBACK_MESSAGE);
}

#[test]
fn error_status_with_html_body_uses_fallback() {
    let err = interpret_response(502, "<html>Bad Gateway</html>").expect_err("error");
    assert_eq!(
        err,
        SubmitError::Server {
            status: 502,
            message: PROCESS_FALLBACK_MESSAGE.to_owned()
        }
    );
}

#[test]
fn error_status_with_blank_error_field_uses_fallback() {
    let err = interpret_response(400, r#"{"error":"  "}"#).expect_err("error");
    assert_eq!(err.to_string(), PROCESS_FALLBACK_MESSAGE);
}

#[test]
fn ok_status_with_garbage_body_is_decode_error() {
    let err = interpret_response(200, "not json").expect_err("error");
    assert!(matches!(err, SubmitError::Decode(_)));
}

#[test]
fn ok_status_missing_category_is_decode_error() {
    let err = interpret_response(200, r#"{"explicacao":"x"}"#).expect_err("error");
    assert!(matches!(err, SubmitError::Decode(_)));
}

#[test]
fn in_band_backend_error_becomes_server_error() {
    let body = serde_json::json!({
        "categoria": "Erro",
        "explicacao": "Formato inesperado",
        "resposta": ""
    })
    .to_string();
    let err = interpret_response(200, &body).expect_err("error");
    assert_eq!(
        err,
        SubmitError::Server {
            status: 200,
            message: "Formato inesperado".to_owned()
        }
    );
}

// =============================================================
// interpret_validation
// =============================================================

#[test]
fn validation_ok_decodes_status() {
    let report = interpret_validation(200, r#"{"status":"ok"}"#).expect("ok");
    assert!(report.is_ok());
}

#[test]
fn validation_error_uses_error_field() {
    let err =
        interpret_validation(400, r#"{"error":"Nenhum arquivo enviado"}"#).expect_err("error");
    assert_eq!(err.to_string(), "Nenhum arquivo enviado");
}

#[test]
fn validation_error_without_field_uses_validation_fallback() {
    let err = interpret_validation(422, "{}").expect_err("error");
    assert_eq!(err.to_string(), VALIDATE_FALLBACK_MESSAGE);
}

#[test]
fn validation_ok_status_with_other_report_is_rejected() {
    let err = interpret_validation(200, r#"{"status":"quarantined"}"#).expect_err("error");
    assert_eq!(
        err,
        SubmitError::Server {
            status: 200,
            message: VALIDATE_FALLBACK_MESSAGE.to_owned()
        }
    );
}
