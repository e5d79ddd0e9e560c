use std::path::Path;

/// Decide whether a custom reply exists for `message` and an optional uploaded image.
///
/// `None` means there is no custom reply and the caller should fall back to
/// its own default. No resolution rules exist yet, so every input defers.
pub fn handle_chat_request(_message: &str, _image_path: Option<&Path>) -> Option<String> {
    None
}
