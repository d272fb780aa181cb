use scaleline::{EngineError, SnapshotSink};
use wasm_bindgen::JsCast;
use web_sys::{HtmlAnchorElement, HtmlCanvasElement};

/// Saves the canvas as a PNG download.
///
/// Browsers only let a page choose the file name, so the configured path
/// is reduced to its last segment.
pub struct CanvasSnapshot {
    canvas: HtmlCanvasElement,
}

impl CanvasSnapshot {
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas }
    }
}

impl SnapshotSink for CanvasSnapshot {
    fn save(&mut self, path: &str) -> Result<(), EngineError> {
        let name = download_name(path)
            .ok_or_else(|| EngineError::Snapshot(format!("no file name in {:?}", path)))?;
        let url = self
            .canvas
            .to_data_url_with_type("image/png")
            .map_err(|e| EngineError::Snapshot(format!("{:?}", e)))?;
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| EngineError::Snapshot("no document".into()))?;
        let anchor = document
            .create_element("a")
            .map_err(|e| EngineError::Snapshot(format!("{:?}", e)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| EngineError::Snapshot("anchor element unavailable".into()))?;
        anchor.set_href(&url);
        anchor.set_download(name);
        anchor.click();
        Ok(())
    }
}

/// Last segment of a `/` or `\` separated path, if non-empty.
pub fn download_name(path: &str) -> Option<&str> {
    path.rsplit(['/', '\\'])
        .next()
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_file_name_is_kept() {
        assert_eq!(download_name("solar_system_snapshot.png"), Some("solar_system_snapshot.png"));
    }

    #[test]
    fn directories_are_stripped() {
        assert_eq!(download_name("shots/today/frame.png"), Some("frame.png"));
        assert_eq!(download_name(r"C:\Users\me\Desktop\frame.png"), Some("frame.png"));
    }

    #[test]
    fn empty_names_are_rejected() {
        assert_eq!(download_name(""), None);
        assert_eq!(download_name("shots/"), None);
    }
}
