use once_cell::sync::Lazy;
use regex::Regex;

/// Markers the pipeline itself stamps on delivered messages. Lines carrying
/// any of these are our own output and must never re-enter the pipeline.
pub const SELF_MARKERS: [&str; 3] = ["[原文]", "[译文]", "[译]"];

/// System notices, join/leave announcements and our own tagged output.
static SYSTEM_MESSAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^\\[系统\\]|^\\[译|^\\[原文]|\\[(.+)加入了游戏\\]|\\[(.+)离开了游戏\\]")
        .expect("system message pattern")
});

/// Standard player chat: `<name> message`.
static PLAYER_MESSAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new("<([^>]+)>\\s+(.+)").expect("player message pattern"));

/// Bracket-prefixed variant some sources emit: `[CHAT] <name> message`.
static ALT_PLAYER_MESSAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new("\\[CHAT\\]\\s+<([^>]+)>\\s+(.+)").expect("alt player message pattern"));

/// Permissive fallback: last angle-bracket group as the sender, remainder as
/// content. Only consulted when the line contains both `<` and `>`.
static LOOSE_PLAYER_MESSAGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(".*<([^>]+)>\\s*(.+)").expect("loose player message pattern"));

pub fn is_own_output(line: &str) -> bool {
    SELF_MARKERS.iter().any(|marker| line.contains(marker))
}

pub fn is_command(line: &str) -> bool {
    line.starts_with('/')
}

pub fn is_system_message(line: &str) -> bool {
    SYSTEM_MESSAGE.is_match(line)
}

/// Tries the primary, bracket-prefixed, then permissive patterns in order.
/// Returns `(sender, trimmed content)` on the first hit.
pub fn extract_utterance(line: &str) -> Option<(String, String)> {
    let captures = PLAYER_MESSAGE
        .captures(line)
        .or_else(|| ALT_PLAYER_MESSAGE.captures(line))
        .or_else(|| {
            if line.contains('<') && line.contains('>') {
                LOOSE_PLAYER_MESSAGE.captures(line)
            } else {
                None
            }
        })?;

    let sender = captures.get(1)?.as_str().to_string();
    let content = captures.get(2)?.as_str().trim().to_string();
    Some((sender, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_standard_format() {
        let (sender, content) = extract_utterance("<Bob> hello world").unwrap();
        assert_eq!(sender, "Bob");
        assert_eq!(content, "hello world");
    }

    #[test]
    fn extracts_bracket_prefixed_format() {
        let (sender, content) = extract_utterance("[CHAT] <Eve> good morning").unwrap();
        assert_eq!(sender, "Eve");
        assert_eq!(content, "good morning");
    }

    #[test]
    fn falls_back_to_loose_extraction() {
        // No whitespace after the closing bracket, so the strict patterns miss.
        let (sender, content) = extract_utterance("<Bob>hola amigo").unwrap();
        assert_eq!(sender, "Bob");
        assert_eq!(content, "hola amigo");
    }

    #[test]
    fn no_extraction_without_brackets() {
        assert!(extract_utterance("just plain text").is_none());
    }

    #[test]
    fn recognizes_system_lines() {
        assert!(is_system_message("[系统] 服务器维护"));
        assert!(is_system_message("[Steve加入了游戏]"));
        assert!(is_system_message("[Steve离开了游戏]"));
        assert!(!is_system_message("<Steve> hello"));
    }

    #[test]
    fn recognizes_own_output() {
        assert!(is_own_output("<Bob> [译] 你好"));
        assert!(is_own_output("<Bob> [原文] hi"));
        assert!(!is_own_output("<Bob> hi"));
    }
}
