//! Image Ingest
//!
//! Validates a picked file and encodes it into a self-contained `data:` URL
//! that can be embedded in the list and persisted as-is. The FileReader read
//! is the single async step in the app. A separate object-URL preview path
//! gives the form an immediate thumbnail without waiting for the encode; the
//! caller must release superseded preview URLs.

use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// The only accepted media type
pub const PNG_MIME: &str = "image/png";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("Only PNG files are allowed.")]
    NotPng,
    #[error("Could not read the selected file.")]
    Unreadable,
}

/// Exact media-type check; anything other than `image/png` is rejected.
pub fn is_png(mime: &str) -> bool {
    mime == PNG_MIME
}

pub fn validate(file: &web_sys::File) -> Result<(), IngestError> {
    if is_png(&file.type_()) {
        Ok(())
    } else {
        Err(IngestError::NotPng)
    }
}

/// Validate the file and read it into a `data:` URL. Suspends until the
/// browser finishes (or fails) the read.
pub async fn validate_and_encode(file: &web_sys::File) -> Result<String, IngestError> {
    validate(file)?;

    let reader = web_sys::FileReader::new().map_err(|_| IngestError::Unreadable)?;
    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let r = reader.clone();
        let rej = reject.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            match r.result() {
                Ok(value) => {
                    let _ = resolve.call1(&JsValue::NULL, &value);
                }
                Err(err) => {
                    let _ = rej.call1(&JsValue::NULL, &err);
                }
            }
        });
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let onerror = Closure::<dyn FnMut()>::new(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read error"));
        });
        reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
    });

    reader
        .read_as_data_url(file)
        .map_err(|_| IngestError::Unreadable)?;

    JsFuture::from(promise)
        .await
        .map_err(|_| IngestError::Unreadable)?
        .as_string()
        .ok_or(IngestError::Unreadable)
}

/// Transient local URL for immediate display while (or instead of) encoding.
pub fn preview_url(file: &web_sys::File) -> Option<String> {
    web_sys::Url::create_object_url_with_blob(file).ok()
}

/// Release a preview URL once it is superseded or the form is reset.
pub fn release_preview(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
