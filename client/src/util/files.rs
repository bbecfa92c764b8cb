//! Browser file selection for CSV uploads and response attachments.
//!
//! DESIGN
//! ======
//! `web_sys::File` handles are not `Send`, so they live in local (browser
//! thread) storage while their metadata lives in an ordinary signal that
//! components can render. Both lists stay index-aligned. The SSR build never
//! sees real files and carries only the (always empty) metadata list.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use leptos::prelude::*;

/// Display metadata for one selected file.
#[derive(Clone, Debug, PartialEq)]
pub struct FileMeta {
    pub name: String,
    pub size: f64,
    pub mime: String,
}

impl FileMeta {
    /// Whether the browser reported this file as CSV.
    ///
    /// Some platforms leave the MIME type blank or report the spreadsheet type
    /// for `.csv` files, so the extension is accepted as well.
    pub fn is_csv(&self) -> bool {
        self.mime == "text/csv" || self.name.to_ascii_lowercase().ends_with(".csv")
    }

    /// Size label such as `"12.3 KB"`.
    pub fn size_label(&self) -> String {
        format_kb(self.size)
    }
}

/// Format a byte count in kilobytes with one decimal.
pub fn format_kb(bytes: f64) -> String {
    format!("{:.1} KB", bytes / 1024.0)
}

/// Remove the item at `index`, ignoring out-of-range indices.
pub fn remove_at<T>(items: &mut Vec<T>, index: usize) {
    if index < items.len() {
        items.remove(index);
    }
}

/// Reactive list of selected files.
#[derive(Clone, Copy)]
pub struct FileSelection {
    meta: RwSignal<Vec<FileMeta>>,
    #[cfg(feature = "hydrate")]
    handles: StoredValue<Vec<web_sys::File>, LocalStorage>,
}

impl Default for FileSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSelection {
    pub fn new() -> Self {
        Self {
            meta: RwSignal::new(Vec::new()),
            #[cfg(feature = "hydrate")]
            handles: StoredValue::new_local(Vec::new()),
        }
    }

    /// Tracked read of the selected files' metadata.
    pub fn metas(&self) -> Vec<FileMeta> {
        self.meta.get()
    }

    /// Untracked read, for event handlers.
    pub fn metas_untracked(&self) -> Vec<FileMeta> {
        self.meta.get_untracked()
    }

    pub fn is_empty(&self) -> bool {
        self.meta.with(Vec::is_empty)
    }

    pub fn remove(&self, index: usize) {
        self.meta.update(|items| remove_at(items, index));
        #[cfg(feature = "hydrate")]
        self.handles.update_value(|items| remove_at(items, index));
    }

    pub fn clear(&self) {
        self.meta.set(Vec::new());
        #[cfg(feature = "hydrate")]
        self.handles.set_value(Vec::new());
    }

    /// Replace the selection with the files chosen in an `<input type="file">`.
    #[cfg(feature = "hydrate")]
    pub fn replace_from_input(&self, input: &web_sys::HtmlInputElement) {
        let mut handles = Vec::new();
        if let Some(list) = input.files() {
            for i in 0..list.length() {
                if let Some(file) = list.get(i) {
                    handles.push(file);
                }
            }
        }
        self.replace(handles);
    }

    #[cfg(feature = "hydrate")]
    pub fn replace(&self, handles: Vec<web_sys::File>) {
        let meta = handles
            .iter()
            .map(|file| FileMeta { name: file.name(), size: file.size(), mime: file.type_() })
            .collect();
        self.meta.set(meta);
        self.handles.set_value(handles);
    }

    /// Clone of the underlying browser handles, in display order.
    #[cfg(feature = "hydrate")]
    pub fn handles(&self) -> Vec<web_sys::File> {
        self.handles.get_value()
    }
}
