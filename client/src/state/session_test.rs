use super::*;
use crate::state::gallery::{FilterVariant, ORIGINAL};
use crate::state::params::FilterParameter;

fn payload(original: &str) -> UploadPayload {
    UploadPayload {
        metadata: ImageMetadata { format: Some("PNG".into()), width: 4, height: 3, color_mode: "RGB".into() },
        variants: vec![FilterVariant::new("original", original), FilterVariant::new("sepia", "s")],
    }
}

fn session() -> ImageSession {
    let source = Arc::new(SourceFile::new("cat.png", "image/png", vec![1]));
    ImageSession::new(source, payload("o1"), FilterParameters::default()).unwrap()
}

#[test]
fn new_session_exposes_file_and_metadata() {
    let session = session();
    assert_eq!(session.file_name(), "cat.png");
    assert_eq!(session.metadata().size_text(), "4x3");
}

#[test]
fn regenerate_resets_to_original_and_stores_parameters() {
    let mut session = session();
    session.gallery.select_variant("sepia").unwrap();
    let mut params = FilterParameters::default();
    params.set(FilterParameter::SepiaIntensity, 0.9).unwrap();

    session.regenerate(payload("o2"), params).unwrap();
    assert_eq!(session.gallery.active_name(), ORIGINAL);
    assert_eq!(session.gallery.main_display(), "o2");
    assert_eq!(session.parameters, params);
}

#[test]
fn failed_regenerate_keeps_previous_gallery() {
    let mut session = session();
    let bad = UploadPayload { variants: vec![FilterVariant::new("sepia", "s")], ..payload("x") };
    assert!(session.regenerate(bad, FilterParameters::default()).is_err());
    assert_eq!(session.gallery.main_display(), "o1");
}
