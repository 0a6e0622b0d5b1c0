//! Thin wrappers over browser APIs used by the components.
//!
//! Native builds get no-op or logging fallbacks so component code compiles
//! and unit tests run without a DOM.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

/// Handle to a user-selected file.
#[cfg(feature = "csr")]
pub type FileHandle = web_sys::File;

/// Stand-in for a browser `File` outside the browser.
#[cfg(not(feature = "csr"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
}

/// Show a blocking `window.alert`; logged instead outside the browser.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::info!("alert: {message}");
    }
}

/// All files currently selected in a file input, in selection order.
#[cfg(feature = "csr")]
pub fn selected_files(input: &web_sys::HtmlInputElement) -> Vec<FileHandle> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Clear a file input's visible selection.
#[cfg(feature = "csr")]
pub fn clear_file_input(input: &web_sys::HtmlInputElement) {
    input.set_value("");
}
