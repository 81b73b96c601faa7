use std::fs;
use std::path::{Path, PathBuf};

use iced::widget::svg;
use image::{ImageError, ImageFormat};

pub(crate) const WINDOW_MINIMIZE: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M3 8.5h10" stroke="currentColor" stroke-width="1.2"/></svg>"#;
pub(crate) const WINDOW_MAXIMIZE: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><rect x="3.5" y="3.5" width="9" height="9" fill="none" stroke="currentColor" stroke-width="1.2"/></svg>"#;
pub(crate) const WINDOW_RESTORE: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><rect x="3.5" y="5.5" width="7" height="7" fill="none" stroke="currentColor" stroke-width="1.2"/><path d="M5.5 5.5v-2h7v7h-2" fill="none" stroke="currentColor" stroke-width="1.2"/></svg>"#;
pub(crate) const WINDOW_FULLSCREEN: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M3 6V3h3M10 3h3v3M13 10v3h-3M6 13H3v-3" fill="none" stroke="currentColor" stroke-width="1.2"/></svg>"#;
pub(crate) const WINDOW_CLOSE: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><path d="M4 4l8 8M12 4l-8 8" stroke="currentColor" stroke-width="1.2"/></svg>"#;
pub(crate) const LOGO_SMALL: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16"><rect x="1" y="1" width="14" height="14" rx="3" fill="#4FA6ED"/><path d="M4.5 5.5l3 2.5-3 2.5M8.5 11h3" fill="none" stroke="#0F1115" stroke-width="1.4"/></svg>"##;

pub(crate) const APP_ICON_DATA: &[u8] =
    include_bytes!("../../assets/logo/logo-small.png");

/// Where the window icon was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum IconSource {
    Custom(PathBuf),
    Fallback,
}

/// Title bar icon resource with its origin.
#[derive(Debug, Clone)]
pub(crate) struct WindowIcon {
    handle: svg::Handle,
    source: IconSource,
}

impl WindowIcon {
    /// Load the icon at `path`, substituting the embedded logo when the
    /// file is absent, unreadable or not an SVG document.
    pub(crate) fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::fallback();
        };

        match read_svg(path) {
            Some(bytes) => Self {
                handle: svg::Handle::from_memory(bytes),
                source: IconSource::Custom(path.to_path_buf()),
            },
            None => Self::fallback(),
        }
    }

    pub(crate) fn fallback() -> Self {
        Self {
            handle: svg::Handle::from_memory(LOGO_SMALL),
            source: IconSource::Fallback,
        }
    }

    pub(crate) fn handle(&self) -> &svg::Handle {
        &self.handle
    }

    pub(crate) fn source(&self) -> &IconSource {
        &self.source
    }
}

fn read_svg(path: &Path) -> Option<Vec<u8>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::warn!("window icon {} unreadable: {err}", path.display());
            return None;
        },
    };

    if !String::from_utf8_lossy(&bytes).contains("<svg") {
        log::warn!("window icon {} is not an SVG document", path.display());
        return None;
    }

    Some(bytes)
}

/// Decode the embedded PNG logo into RGBA pixels for the OS-level
/// window icon.
pub(crate) fn app_icon_rgba() -> Result<(Vec<u8>, u32, u32), ImageError> {
    let image =
        image::load_from_memory_with_format(APP_ICON_DATA, ImageFormat::Png)?
            .to_rgba8();
    let (width, height) = image.dimensions();
    Ok((image.into_raw(), width, height))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{IconSource, WindowIcon, app_icon_rgba};

    #[test]
    fn given_no_path_when_loading_icon_then_fallback_is_used() {
        let icon = WindowIcon::load(None);

        assert_eq!(icon.source(), &IconSource::Fallback);
    }

    #[test]
    fn given_missing_file_when_loading_icon_then_fallback_is_used() {
        let root = test_temp_dir("missing_icon");
        let path = root.join("nope.svg");

        let icon = WindowIcon::load(Some(&path));

        assert_eq!(icon.source(), &IconSource::Fallback);
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_non_svg_file_when_loading_icon_then_fallback_is_used() {
        let root = test_temp_dir("png_icon");
        let path = root.join("icon.svg");
        fs::write(&path, [0x89, b'P', b'N', b'G'])
            .expect("icon payload should be written");

        let icon = WindowIcon::load(Some(&path));

        assert_eq!(icon.source(), &IconSource::Fallback);
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_svg_file_when_loading_icon_then_custom_icon_is_used() {
        let root = test_temp_dir("svg_icon");
        let path = root.join("icon.svg");
        fs::write(&path, super::WINDOW_CLOSE)
            .expect("icon payload should be written");

        let icon = WindowIcon::load(Some(&path));

        assert_eq!(icon.source(), &IconSource::Custom(path));
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_svg_after_long_prolog_when_loading_icon_then_custom_icon_is_used()
    {
        let root = test_temp_dir("prolog_icon");
        let path = root.join("icon.svg");
        let mut payload = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!--",
        );
        payload.push_str(&"license header ".repeat(80));
        payload.push_str("-->\n");
        payload.push_str(&String::from_utf8_lossy(super::WINDOW_CLOSE));
        fs::write(&path, payload).expect("icon payload should be written");

        let icon = WindowIcon::load(Some(&path));

        assert_eq!(icon.source(), &IconSource::Custom(path));
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_embedded_logo_when_decoded_then_corners_are_transparent() {
        let (pixels, width, height) =
            app_icon_rgba().expect("embedded logo should decode");

        assert_eq!((width, height), (32, 32));
        assert_eq!(pixels.len(), (width * height * 4) as usize);
        assert_eq!(pixels[3], 0);
        let center = ((height / 2 * width + width / 2) * 4) as usize;
        assert_eq!(pixels[center + 3], 0xFF);
    }

    fn test_temp_dir(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be after unix epoch")
            .as_nanos();
        let dir = std::env::temp_dir()
            .join(format!("otty-chrome-icons-{label}-{nanos}"));
        fs::create_dir_all(&dir).expect("temp dir should be created");
        dir
    }
}
