//! CSV Export Download
//!
//! Offers the exported CSV to the browser as a file download.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// What `encodeURI` leaves alone, minus `#` which would cut a data URL short
const DATA_URL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, PartialEq)]
pub struct CsvDownload {
    pub filename: String,
    pub content: String,
}

impl CsvDownload {
    pub const MIME: &'static str = "text/csv";

    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    pub fn data_url(&self) -> String {
        format!(
            "data:{};charset=utf-8,{}",
            Self::MIME,
            utf8_percent_encode(&self.content, DATA_URL)
        )
    }
}

/// Click a detached `<a download>` pointing at the data URL
#[cfg(target_arch = "wasm32")]
pub fn trigger_download(file: &CsvDownload) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document available".to_string())?;
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "created element is not an anchor".to_string())?;
    anchor.set_href(&file.data_url());
    anchor.set_target("_blank");
    anchor.set_download(&file.filename);
    anchor.click();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn trigger_download(file: &CsvDownload) -> Result<(), String> {
    log::info!("Download of {} skipped outside the browser", file.filename);
    Ok(())
}
