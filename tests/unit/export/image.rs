use super::*;

use image::Rgba;

use crate::export::document::MemoryDocument;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("inkwire-image-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn test_image() -> RgbaImage {
    let mut img = RgbaImage::from_pixel(4, 2, Rgba([0, 200, 0, 255]));
    img.put_pixel(3, 1, Rgba([200, 0, 0, 255]));
    img
}

#[test]
fn missing_image_dir_is_an_invalid_configuration() {
    let missing = std::env::temp_dir().join("inkwire-no-such-dir");
    let err = PngImageHandler::new(&missing, None).unwrap_err();
    assert!(matches!(err, InkwireError::InvalidConfiguration(_)));
}

#[test]
fn handle_image_writes_file_and_wires_attributes() {
    let dir = scratch_dir("wires");
    let mut handler = PngImageHandler::new(&dir, Some("assets".to_owned())).unwrap();
    let mut doc = MemoryDocument::new();
    let element = doc.create_element(IMAGE_TAG);

    let img = test_image();
    handler.handle_image(&img, element, &mut doc).unwrap();

    let el = doc.element(element).unwrap();
    assert_eq!(el.attributes.get("width").map(String::as_str), Some("4"));
    assert_eq!(el.attributes.get("height").map(String::as_str), Some("2"));
    assert_eq!(
        el.attributes.get(ATTR_XLINK_HREF).map(String::as_str),
        Some("assets/pngImage1.png")
    );

    let written = image::open(dir.join("pngImage1.png")).unwrap().to_rgba8();
    assert_eq!(written, img);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn url_root_defaults_to_the_image_dir() {
    let dir = scratch_dir("urlroot");
    let handler = PngImageHandler::new(&dir, None).unwrap();
    assert_eq!(handler.url_root(), dir.display().to_string());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn file_names_are_session_unique() {
    let dir = scratch_dir("unique");
    let mut handler = PngImageHandler::new(&dir, None).unwrap();
    let mut doc = MemoryDocument::new();
    let img = test_image();

    let first = doc.create_element(IMAGE_TAG);
    let second = doc.create_element(IMAGE_TAG);
    handler.handle_image(&img, first, &mut doc).unwrap();
    handler.handle_image(&img, second, &mut doc).unwrap();

    assert!(dir.join("pngImage1.png").is_file());
    assert!(dir.join("pngImage2.png").is_file());
    assert_ne!(
        doc.element(first).unwrap().attributes.get(ATTR_XLINK_HREF),
        doc.element(second).unwrap().attributes.get(ATTR_XLINK_HREF)
    );

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn failed_write_names_the_file_and_leaves_no_reference() {
    let dir = scratch_dir("failure");
    let mut handler = PngImageHandler::new(&dir, None).unwrap();
    let mut doc = MemoryDocument::new();
    let element = doc.create_element(IMAGE_TAG);

    // Unwritable target: the directory disappears after construction.
    std::fs::remove_dir_all(&dir).unwrap();

    let err = handler
        .handle_image(&test_image(), element, &mut doc)
        .unwrap_err();
    assert!(err.to_string().contains("pngImage1.png"));
    assert!(matches!(err, InkwireError::ImageWrite { .. }));

    let el = doc.element(element).unwrap();
    assert!(el.attributes.is_empty());
    assert!(!dir.join("pngImage1.png").exists());
}
