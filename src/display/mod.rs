use async_trait::async_trait;

/// Sender attribution used when no name could be resolved for a content
/// string.
pub const UNKNOWN_SENDER: &str = "未知玩家";

/// Where finished translations go. Implementations are responsible for any
/// thread or context marshaling their presentation layer requires; the
/// dispatcher treats delivery as a hand-off.
#[async_trait]
pub trait DisplaySink: Send + Sync {
    async fn deliver(&self, sender: &str, original: &str, translated: &str, show_original: bool);
}

/// Renders a delivery the way the chat presents it. The `[原文]`/`[译文]`/
/// `[译]` tags double as the classifier's self-output markers, so delivered
/// lines never re-enter the pipeline.
pub fn format_delivery(
    sender: &str,
    original: &str,
    translated: &str,
    show_original: bool,
) -> Vec<String> {
    if show_original {
        vec![
            format!("<{sender}> [原文] {original}"),
            format!("<{sender}> [译文] {translated}"),
        ]
    } else {
        vec![format!("<{sender}> [译] {translated}")]
    }
}

/// Prints deliveries to stdout. Used by the demo binary.
pub struct StdoutSink;

#[async_trait]
impl DisplaySink for StdoutSink {
    async fn deliver(&self, sender: &str, original: &str, translated: &str, show_original: bool) {
        for line in format_delivery(sender, original, translated, show_original) {
            println!("{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::is_own_output;

    #[test]
    fn formats_with_original() {
        let lines = format_delivery("Bob", "hola", "你好", true);
        assert_eq!(lines, vec!["<Bob> [原文] hola", "<Bob> [译文] 你好"]);
    }

    #[test]
    fn formats_translation_only() {
        let lines = format_delivery("Bob", "hola", "你好", false);
        assert_eq!(lines, vec!["<Bob> [译] 你好"]);
    }

    #[test]
    fn delivered_lines_are_filtered_on_reingestion() {
        for line in format_delivery("Bob", "hola", "你好", true) {
            assert!(is_own_output(&line));
        }
        for line in format_delivery("Bob", "hola", "你好", false) {
            assert!(is_own_output(&line));
        }
    }
}
