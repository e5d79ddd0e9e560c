use std::path::Path;

use tholini_chat::services::fallback::{FallbackReplies, ReplySource, resolve_reply};
use tholini_chat::services::resolver::handle_chat_request;

#[test]
fn test_every_input_defers() {
    let long = "a very long message ".repeat(500);
    let cases: &[(&str, Option<&str>)] = &[
        ("hello", None),
        ("", None),
        ("describe this photo", Some("photo.jpg")),
        ("   ", Some("")),
        ("ünïcödé ✨", Some("../../etc/passwd")),
        (long.as_str(), Some("/tmp/x.png")),
    ];
    for &(message, image) in cases {
        assert_eq!(handle_chat_request(message, image.map(Path::new)), None);
    }
}

#[test]
fn test_repeated_calls_agree() {
    let image = Path::new("photo.jpg");
    let first = handle_chat_request("describe this photo", Some(image));
    for _ in 0..10 {
        assert_eq!(handle_chat_request("describe this photo", Some(image)), first);
    }
}

#[tokio::test]
async fn test_concurrent_callers() {
    let handles: Vec<_> = (0..16)
        .map(|i| tokio::spawn(async move { handle_chat_request(&format!("message {i}"), None) }))
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap(), None);
    }
}

#[test]
fn test_deferral_falls_back_to_canned_reply() {
    let fallback = FallbackReplies::new(["Try a gentle moisturiser."]);
    let (reply, source) = resolve_reply("hello", None, &fallback);
    assert_eq!(source, ReplySource::Fallback);
    assert_eq!(reply, "Try a gentle moisturiser.");
}
