use super::*;

fn upload() -> FileUpload {
    FileUpload::new("mail.txt", b"hello".to_vec())
}

// =============================================================
// Submission::from_inputs
// =============================================================

#[test]
fn from_inputs_rejects_blank_text_without_file() {
    let err = Submission::<FileUpload>::from_inputs("   \n", None).expect_err("blank");
    assert_eq!(err, SubmitError::EmptyInput);
}

#[test]
fn from_inputs_trims_text() {
    let sub = Submission::<FileUpload>::from_inputs("  Meeting at 3pm \n", None).expect("text");
    assert_eq!(sub, Submission::Text("Meeting at 3pm".to_owned()));
    assert!(!sub.is_file());
}

#[test]
fn from_inputs_prefers_file_over_text() {
    let sub = Submission::from_inputs("some text", Some(upload())).expect("file");
    assert_eq!(sub, Submission::File(upload()));
}

#[test]
fn from_inputs_accepts_file_with_blank_text() {
    let sub = Submission::from_inputs("", Some(upload())).expect("file");
    assert!(sub.is_file());
}

// =============================================================
// build_request
// =============================================================

#[test]
fn build_request_text_is_json_with_exact_text() {
    let sub = Submission::<FileUpload>::Text("Please review the invoice".to_owned());
    let body = build_request(&sub);
    assert_eq!(body.kind(), "json");
    let RequestBody::Json(payload) = body else {
        panic!("expected json body");
    };
    assert_eq!(
        serde_json::to_value(&payload).expect("serialize"),
        serde_json::json!({ "texto": "Please review the invoice" })
    );
}

#[test]
fn build_request_file_is_multipart_under_file_field() {
    let sub = Submission::File(upload());
    let body = build_request(&sub);
    assert_eq!(body.kind(), "multipart");
    assert_eq!(
        body,
        RequestBody::Multipart {
            field: "file",
            file: &upload()
        }
    );
}

// =============================================================
// FileUpload
// =============================================================

#[test]
fn content_type_follows_extension() {
    assert_eq!(content_type_for("a.txt"), "text/plain");
    assert_eq!(content_type_for("REPORT.PDF"), "application/pdf");
    assert_eq!(content_type_for("notes.docx"), "application/octet-stream");
    assert_eq!(content_type_for("no_extension"), "application/octet-stream");
}

#[test]
fn from_path_reads_bytes_and_file_name() {
    let dir = std::env::temp_dir().join(format!("triage-upload-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("mkdir");
    let path = dir.join("inbox.txt");
    std::fs::write(&path, "Olá, tudo bem?").expect("write");

    let file = FileUpload::from_path(&path).expect("read");
    assert_eq!(file.name, "inbox.txt");
    assert_eq!(file.content_type, "text/plain");
    assert_eq!(file.bytes, "Olá, tudo bem?".as_bytes());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn from_path_missing_file_errors() {
    let path = std::env::temp_dir().join("triage-definitely-missing.txt");
    assert!(FileUpload::from_path(&path).is_err());
}
