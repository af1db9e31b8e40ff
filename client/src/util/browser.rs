//! DOM helpers: file reading, blob downloads, alerts.

use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::actions::SavedImage;
use crate::error::ClientError;
use crate::net::types::SourceFile;

fn js_error(value: JsValue) -> ClientError {
    ClientError::Network(format!("{value:?}"))
}

/// Collect a `FileList` into owned handles, preserving selection order.
pub fn files_from_list(list: &web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Read a picked or dropped file into memory.
///
/// # Errors
///
/// Returns [`ClientError::Network`] when the browser fails to read the file.
pub async fn read_file(file: &web_sys::File) -> Result<SourceFile, ClientError> {
    let buffer = JsFuture::from(file.array_buffer()).await.map_err(js_error)?;
    let bytes = Uint8Array::new(&buffer).to_vec();
    Ok(SourceFile::new(file.name(), file.type_(), bytes))
}

/// Hand `image` to the browser as a download via a temporary object URL.
///
/// # Errors
///
/// Returns [`ClientError::Unavailable`] without a document, or the DOM error.
pub fn save_image(image: &SavedImage) -> Result<(), ClientError> {
    let document = web_sys::window().and_then(|w| w.document()).ok_or(ClientError::Unavailable)?;
    let body = document.body().ok_or(ClientError::Unavailable)?;

    let parts = Array::of1(&Uint8Array::from(image.bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/jpeg");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|el| js_error(el.into()))?;
    anchor.set_href(&url);
    anchor.set_download(&image.file_name);
    body.append_child(&anchor).map_err(js_error)?;
    anchor.click();
    anchor.remove();
    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(())
}

/// Show a blocking alert, as the page does for upload failures.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(message).is_err() {
            log::error!("{message}");
        }
    }
}
