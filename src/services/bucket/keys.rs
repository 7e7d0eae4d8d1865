//! Object key and public URL construction.

/// Join an optional folder and a file name into an object key.
///
/// An empty folder is treated the same as no folder.
pub fn build_key(folder: Option<&str>, name: &str) -> String {
    match folder {
        Some(folder) if !folder.is_empty() => format!("{}/{}", folder, name),
        _ => name.to_string(),
    }
}

/// Key of the JSON metadata document `name` inside `folder`.
pub fn build_json_key(folder: Option<&str>, name: &str) -> String {
    build_key(folder, &format!("{}.json", name))
}

/// Listing prefix for the contents of a folder (`"summer"` -> `"summer/"`).
pub fn folder_prefix(folder: Option<&str>) -> Option<String> {
    match folder {
        Some(folder) if !folder.is_empty() => Some(format!("{}/", folder)),
        _ => None,
    }
}

/// Public, virtual-hosted style URL of an object.
///
/// Stored links depend on this exact shape, so it does not follow custom
/// endpoints.
pub fn build_public_url(bucket: &str, key: &str) -> String {
    format!("https://{}.s3.amazonaws.com/{}", bucket, key)
}
