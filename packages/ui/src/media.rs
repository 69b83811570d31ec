use gazeta_api::normalize_external_url;

/// Neutral 16:9 picture shown when an article or issue has no usable image.
pub const FALLBACK_IMAGE_SRC: &str = concat!(
    "data:image/svg+xml;utf8,",
    "%3Csvg%20xmlns%3D%22http%3A%2F%2Fwww.w3.org%2F2000%2Fsvg%22%20width%3D%221200%22%20",
    "height%3D%22675%22%20viewBox%3D%220%200%201200%20675%22%3E",
    "%3Crect%20width%3D%221200%22%20height%3D%22675%22%20fill%3D%22%23e5e7eb%22%2F%3E",
    "%3Cpath%20d%3D%22M438%20448l120-140%20116%20136%2076-86%20172%20200H438z%22%20",
    "fill%3D%22%23cbd5e1%22%2F%3E",
    "%3Ccircle%20cx%3D%22520%22%20cy%3D%22260%22%20r%3D%2244%22%20fill%3D%22%23cbd5e1%22%2F%3E",
    "%3C%2Fsvg%3E",
);

/// `src` for an image tag: the repaired URL, or the placeholder picture.
pub fn image_src(raw: Option<&str>) -> String {
    normalize_external_url(raw).unwrap_or_else(|| FALLBACK_IMAGE_SRC.to_string())
}

/// Letter shown in place of a missing avatar.
pub fn avatar_initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "U".to_string())
}
