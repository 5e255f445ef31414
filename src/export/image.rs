use std::{
    io::Cursor,
    path::PathBuf,
};

use anyhow::Context;
use image::RgbaImage;

use crate::{
    export::document::{DocumentFactory, ElementId},
    foundation::error::{InkwireError, InkwireResult},
};

/// `<image>` tag name.
pub const IMAGE_TAG: &str = "image";

/// Attribute receiving the exported asset URL.
pub const ATTR_XLINK_HREF: &str = "xlink:href";

/// Capability that materializes a raster image for an `<image>` element.
///
/// Implementations own file naming, encoding, and attribute wiring; the
/// pixel codec itself is an external concern.
pub trait ImageHandler {
    /// Export `img` and point `element` at the result.
    fn handle_image(
        &mut self,
        img: &RgbaImage,
        element: ElementId,
        doc: &mut dyn DocumentFactory,
    ) -> InkwireResult<()>;
}

#[derive(Debug)]
/// Image handler that writes PNG files into an image directory and points
/// `xlink:href` at them.
///
/// File names are session-unique (`pngImage<N>.png`). The element is wired
/// up only after the file is fully written, so generated markup never
/// references a partial asset. Writes are synchronous and block until the
/// file is flushed; a failure is fatal for that export operation.
pub struct PngImageHandler {
    image_dir: PathBuf,
    url_root: String,
    counter: u64,
}

impl PngImageHandler {
    /// File name prefix used by this encoder.
    pub const PREFIX: &'static str = "pngImage";
    /// File name suffix used by this encoder.
    pub const SUFFIX: &'static str = ".png";

    /// New handler writing into `image_dir`.
    ///
    /// `url_root` overrides the URL prefix written into `xlink:href` and
    /// defaults to the image directory path. The directory must already
    /// exist; a missing directory is an
    /// [`InkwireError::InvalidConfiguration`].
    pub fn new(image_dir: impl Into<PathBuf>, url_root: Option<String>) -> InkwireResult<Self> {
        let image_dir = image_dir.into();
        if !image_dir.is_dir() {
            return Err(InkwireError::configuration(format!(
                "image directory '{}' does not exist",
                image_dir.display()
            )));
        }
        let url_root = url_root.unwrap_or_else(|| image_dir.display().to_string());
        Ok(Self {
            image_dir,
            url_root,
            counter: 0,
        })
    }

    /// URL root written in front of generated file names.
    pub fn url_root(&self) -> &str {
        &self.url_root
    }

    fn next_file_name(&mut self) -> String {
        self.counter += 1;
        format!("{}{}{}", Self::PREFIX, self.counter, Self::SUFFIX)
    }
}

impl ImageHandler for PngImageHandler {
    #[tracing::instrument(skip_all, fields(width = img.width(), height = img.height()))]
    fn handle_image(
        &mut self,
        img: &RgbaImage,
        element: ElementId,
        doc: &mut dyn DocumentFactory,
    ) -> InkwireResult<()> {
        let file_name = self.next_file_name();
        let path = self.image_dir.join(&file_name);

        let mut encoded = Vec::new();
        img.write_to(&mut Cursor::new(&mut encoded), image::ImageFormat::Png)
            .with_context(|| format!("encode png for '{file_name}'"))?;

        if let Err(source) = std::fs::write(&path, &encoded) {
            // Never leave a partial file behind a failed write.
            let _ = std::fs::remove_file(&path);
            return Err(InkwireError::ImageWrite {
                file: file_name,
                source,
            });
        }

        doc.set_attribute(element, "width", &img.width().to_string());
        doc.set_attribute(element, "height", &img.height().to_string());
        doc.set_attribute(
            element,
            ATTR_XLINK_HREF,
            &format!("{}/{}", self.url_root, file_name),
        );

        tracing::debug!(file = %path.display(), "wrote png asset");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/image.rs"]
mod tests;
