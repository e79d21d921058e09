use sessionfeed_types::ArtifactPayload;

use super::number::file_size;

const IMAGE_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".gif", ".webp", ".svg"];

/// Whether the artifact can be previewed as an image
pub fn is_image_artifact(payload: &ArtifactPayload) -> bool {
    if payload.kind.as_deref() == Some("image") {
        return true;
    }
    if payload
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("image/"))
    {
        return true;
    }

    let uri = payload.uri.as_deref().unwrap_or_default().to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| uri.ends_with(ext))
}

/// Link text: name, else uri, else "Artifact"
pub fn artifact_label(payload: &ArtifactPayload) -> String {
    payload
        .name
        .clone()
        .or_else(|| payload.uri.clone())
        .unwrap_or_else(|| "Artifact".to_string())
}

/// "image - 2.0 KB"; empty when neither kind nor size is known
pub fn artifact_detail(payload: &ArtifactPayload) -> String {
    let mut parts = Vec::new();
    if let Some(kind) = &payload.kind {
        parts.push(kind.clone());
    }
    if let Some(size) = payload.size_bytes.map(file_size)
        && !size.is_empty()
    {
        parts.push(size);
    }
    parts.join(" - ")
}
