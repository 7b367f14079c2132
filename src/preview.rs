//! Image Preview
//!
//! Reads a picked file into a data URL the `<img>` tag can show directly.

use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("File could not be read: {0}")]
    Reader(String),
    #[error("Selected file is not an image")]
    NotAnImage,
}

fn js_err(value: JsValue) -> PreviewError {
    PreviewError::Reader(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

pub fn is_image_data_url(url: &str) -> bool {
    url.starts_with("data:image/")
}

/// First file of an `<input type="file">` change event
pub fn first_selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}

/// Read `file` with a `FileReader` and resolve to its data URL
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, PreviewError> {
    let reader = web_sys::FileReader::new().map_err(js_err)?;

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let done = reader.clone();
        let onload = Closure::once_into_js(move || {
            let result = done.result().unwrap_or(JsValue::NULL);
            let _ = resolve.call1(&JsValue::NULL, &result);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("read failed"));
        });
        reader.set_onload(Some(onload.unchecked_ref()));
        reader.set_onerror(Some(onerror.unchecked_ref()));
    });

    reader.read_as_data_url(file).map_err(js_err)?;
    let value = JsFuture::from(promise).await.map_err(js_err)?;
    let url = value.as_string().ok_or(PreviewError::NotAnImage)?;
    if !is_image_data_url(&url) {
        return Err(PreviewError::NotAnImage);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_data_url() {
        assert!(is_image_data_url("data:image/png;base64,iVBORw0KGgo="));
        assert!(is_image_data_url("data:image/jpeg;base64,/9j/"));
        assert!(!is_image_data_url("data:text/plain;base64,aGk="));
        assert!(!is_image_data_url("https://example.com/cat.png"));
    }
}
