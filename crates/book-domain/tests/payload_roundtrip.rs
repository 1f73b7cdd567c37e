use book_domain::{TaskDetailPayload, TaskSnapshot};

// Payload realista de `GET /tasks/{id}` a mitad de pipeline.
const MID_PIPELINE: &str = r##"{
  "submission": {
    "id": "665f1c2ab9d1e80012aa7001",
    "title": "The Name of the Rose",
    "author_name": "Umberto Eco",
    "status": "context_generation",
    "current_step": "context_generation",
    "other_links": ["https://example.com/interview"],
    "created_at": "2026-05-01T10:00:00Z",
    "updated_at": "2026-05-01T10:22:41Z"
  },
  "book": {
    "id": "665f1c2ab9d1e80012aa7002",
    "extracted": {"title": "The Name of the Rose", "isbn": "9780156001311"}
  },
  "summaries": [
    {"url": "https://example.com/interview", "content": "Entrevista resumida."}
  ],
  "knowledge_base": {"markdown_content": "# Notas\nContexto parcial."},
  "progress": {"current_stage": "context_generation", "steps": []}
}"##;

#[test]
fn decodes_mid_pipeline_payload() {
    let payload = TaskDetailPayload::from_json(MID_PIPELINE).expect("decode");
    let snap = TaskSnapshot::from_payload(&payload);

    assert_eq!(snap.submission_id.as_deref(), Some("665f1c2ab9d1e80012aa7001"));
    assert_eq!(snap.status, "context_generation");
    assert_eq!(snap.current_step.as_deref(), Some("context_generation"));
    assert_eq!(snap.other_links.len(), 1);
    assert_eq!(snap.additional_links_processed, 1);
    assert!(snap.has_book_extracted);
    assert!(snap.has_link_candidates);
    assert!(snap.has_context_markdown);
    assert!(!snap.has_web_research);
    assert!(!snap.has_article);
    // Campos extra del backend (progress) se ignoran sin error.
    assert!(snap.pipeline_steps.is_empty());
}

#[test]
fn malformed_json_reports_decode_error() {
    let err = TaskDetailPayload::from_json("{not json").unwrap_err();
    assert!(err.to_string().contains("payload decode"));
}

#[test]
fn snapshot_is_reproducible_from_same_payload() {
    let payload = TaskDetailPayload::from_json(MID_PIPELINE).expect("decode");
    let a = TaskSnapshot::from_payload(&payload);
    let b = TaskSnapshot::from_payload(&payload);
    assert_eq!(serde_json::to_value(&a).unwrap(), serde_json::to_value(&b).unwrap());
}
