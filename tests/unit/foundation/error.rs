use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        InkwireError::unsupported("x")
            .to_string()
            .contains("unsupported operation:")
    );
    assert!(
        InkwireError::configuration("x")
            .to_string()
            .contains("invalid configuration:")
    );
    assert!(
        InkwireError::validation("x")
            .to_string()
            .contains("validation error:")
    );
}

#[test]
fn image_write_names_target_file() {
    let err = InkwireError::ImageWrite {
        file: "pngImage1.png".into(),
        source: std::io::Error::other("disk full"),
    };
    assert!(err.to_string().contains("pngImage1.png"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = InkwireError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
