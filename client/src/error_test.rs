use super::*;

#[test]
fn server_message_is_shown_verbatim() {
    let err = ClientError::Server("File type not allowed".into());
    assert_eq!(upload_alert(&err), "Error processing image: File type not allowed");
}

#[test]
fn http_status_is_named() {
    assert_eq!(ClientError::Http { status: 413 }.to_string(), "server responded with HTTP 413");
}

#[test]
fn raster_errors_become_export_errors() {
    let err = ClientError::from(RasterError::EmptyPlan);
    assert!(matches!(err, ClientError::Export(_)));
}

#[test]
fn json_errors_become_decode_errors() {
    let Err(json) = serde_json::from_str::<serde_json::Value>("{") else {
        panic!("expected a parse error");
    };
    assert!(matches!(ClientError::from(json), ClientError::Decode(_)));
}
