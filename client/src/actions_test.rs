use futures::executor::block_on;
use viewport::geom::Size;

use super::*;
use crate::net::mock::{ScriptedService, image_file, upload_ok};
use crate::state::params::{FilterParameter, FilterParameters};

// =============================================================
// Helpers
// =============================================================

fn loaded(service: &ScriptedService) -> ViewerState {
    let mut viewer = ViewerState::new();
    viewer.set_container(Size::new(400.0, 300.0));
    service.push_upload(Ok(upload_ok(&[("original", "A"), ("sepia", "B")], 800, 600)));
    let outcome = block_on(process_image(&mut viewer, service, image_file("cat.png")));
    assert_eq!(outcome, UploadOutcome::Applied);
    viewer
}

// =============================================================
// process_image
// =============================================================

#[test]
fn process_image_uploads_without_parameters() {
    let service = ScriptedService::default();
    let viewer = loaded(&service);
    let calls = service.upload_calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].parameters, None);
    assert_eq!(viewer.render().tiles.len(), 2);
    assert_eq!(viewer.main_image(), "A");
}

#[test]
fn invalid_file_is_never_sent() {
    let service = ScriptedService::default();
    let mut viewer = ViewerState::new();
    let file = SourceFile::new("notes.txt", "text/plain", vec![1]);
    let outcome = block_on(process_image(&mut viewer, &service, file));
    assert!(matches!(outcome, UploadOutcome::Failed(ClientError::NotAnImage { .. })));
    assert!(service.upload_calls.borrow().is_empty());
    assert!(viewer.alert.is_some());
}

// =============================================================
// update_filter_parameters
// =============================================================

#[test]
fn parameter_update_sends_panel_values() {
    let service = ScriptedService::default();
    let mut viewer = loaded(&service);
    viewer.parameters.set(FilterParameter::EdgeThreshold1, 50.0).unwrap();
    service.push_upload(Ok(upload_ok(&[("original", "A2"), ("edges", "E")], 800, 600)));

    let outcome = block_on(update_filter_parameters(&mut viewer, &service));
    assert_eq!(outcome, Some(UploadOutcome::Applied));
    let calls = service.upload_calls.borrow();
    let sent = calls[1].parameters.unwrap();
    assert_eq!(sent.get(FilterParameter::EdgeThreshold1).to_bits(), 50.0_f64.to_bits());
    assert_eq!(calls[1].file_name, "cat.png");
    assert_eq!(viewer.main_image(), "A2");
}

#[test]
fn parameter_update_without_image_is_a_no_op() {
    let service = ScriptedService::default();
    let mut viewer = ViewerState::new();
    assert_eq!(block_on(update_filter_parameters(&mut viewer, &service)), None);
    assert!(service.upload_calls.borrow().is_empty());
    assert_eq!(viewer.parameters, FilterParameters::default());
}

// =============================================================
// Downloads
// =============================================================

#[test]
fn download_variant_posts_image_data() {
    let service = ScriptedService::default();
    let viewer = loaded(&service);
    service.push_download(Ok(vec![0xFF, 0xD8]));

    let saved = block_on(download_variant(&viewer, &service, "sepia")).unwrap();
    assert_eq!(saved, SavedImage { file_name: "filtered_image_sepia.jpg".into(), bytes: vec![0xFF, 0xD8] });
    let calls = service.download_calls.borrow();
    assert_eq!(calls[0].endpoint, "/download/sepia");
    assert_eq!(calls[0].image_data, "B");
}

#[test]
fn download_failure_is_returned() {
    let service = ScriptedService::default();
    let viewer = loaded(&service);
    service.push_download(Err(ClientError::Http { status: 500 }));
    let err = block_on(download_variant(&viewer, &service, "sepia")).unwrap_err();
    assert_eq!(err, ClientError::Http { status: 500 });
}

#[test]
fn export_without_image_makes_no_request() {
    let service = ScriptedService::default();
    let viewer = ViewerState::new();
    assert_eq!(block_on(save_zoomed_image(&viewer, &service)), Ok(None));
    assert!(service.download_calls.borrow().is_empty());
}

#[test]
fn export_failure_makes_no_request() {
    let service = ScriptedService::default();
    let viewer = loaded(&service);
    // "A" is not a decodable image.
    assert!(block_on(save_zoomed_image(&viewer, &service)).is_err());
    assert!(service.download_calls.borrow().is_empty());
}
