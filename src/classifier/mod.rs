pub mod language;
pub mod patterns;

pub use language::{contains_cjk, is_common_abbreviation, should_skip_translation};
pub use patterns::{extract_utterance, is_command, is_own_output, is_system_message};

/// A player chat line worth considering for translation. `sender` is absent
/// on the best-effort path where no name could be extracted; delivery
/// substitutes a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerUtterance {
    pub sender: Option<String>,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Ignore,
    Utterance(PlayerUtterance),
}

/// Classifies one raw chat line. Rules apply in order; the first match wins.
/// `local_player` is the display name of the local participant, whose own
/// messages are never translated.
pub fn classify(line: &str, local_player: Option<&str>) -> Classification {
    if patterns::is_own_output(line) {
        return Classification::Ignore;
    }
    if patterns::is_command(line) {
        return Classification::Ignore;
    }
    if patterns::is_system_message(line) {
        return Classification::Ignore;
    }

    let (sender, content) = match patterns::extract_utterance(line) {
        Some((sender, content)) => (Some(sender), content),
        None => {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Classification::Ignore;
            }
            // Unattributed best-effort path: the raw line is the content.
            (None, trimmed.to_string())
        }
    };

    // Extraction can surface a command as the message body; re-check.
    if patterns::is_command(&content) {
        return Classification::Ignore;
    }

    if let (Some(sender), Some(local)) = (sender.as_deref(), local_player) {
        if sender.to_lowercase() == local.to_lowercase() {
            return Classification::Ignore;
        }
    }

    if language::should_skip_translation(&content) {
        return Classification::Ignore;
    }

    Classification::Utterance(PlayerUtterance { sender, content })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utterance(line: &str) -> PlayerUtterance {
        match classify(line, None) {
            Classification::Utterance(u) => u,
            Classification::Ignore => panic!("expected utterance for {line:?}"),
        }
    }

    #[test]
    fn ignores_own_translated_output() {
        assert_eq!(classify("<Alice> [译] hola", None), Classification::Ignore);
        assert_eq!(classify("<Alice> [原文] hola", None), Classification::Ignore);
    }

    #[test]
    fn ignores_commands() {
        assert_eq!(classify("/help", None), Classification::Ignore);
        assert_eq!(classify("/translator status", None), Classification::Ignore);
    }

    #[test]
    fn ignores_command_quoted_in_player_message() {
        assert_eq!(classify("<Bob> /help", None), Classification::Ignore);
        assert_eq!(classify("<Bob> /tp spawn", None), Classification::Ignore);
        assert!(matches!(
            classify("<Bob> use /help for commands", None),
            Classification::Utterance(_)
        ));
    }

    #[test]
    fn ignores_system_announcements() {
        assert_eq!(classify("[系统] 服务器公告", None), Classification::Ignore);
        assert_eq!(classify("[Steve加入了游戏]", None), Classification::Ignore);
    }

    #[test]
    fn extracts_standard_player_message() {
        let u = utterance("<Bob> hello world");
        assert_eq!(u.sender.as_deref(), Some("Bob"));
        assert_eq!(u.content, "hello world");
    }

    #[test]
    fn ignores_cjk_content() {
        assert_eq!(classify("<Carol> 你好", None), Classification::Ignore);
    }

    #[test]
    fn ignores_abbreviation_content() {
        assert_eq!(classify("<Carol> gg", None), Classification::Ignore);
    }

    #[test]
    fn ignores_local_player_case_insensitively() {
        assert_eq!(classify("<Dave> test", Some("Dave")), Classification::Ignore);
        assert_eq!(classify("<Dave> test", Some("dave")), Classification::Ignore);
        assert!(matches!(
            classify("<Dave> test", Some("Eve")),
            Classification::Utterance(_)
        ));
    }

    #[test]
    fn local_player_comparison_folds_non_ascii_case() {
        assert_eq!(
            classify("<MÜLLER> test", Some("müller")),
            Classification::Ignore
        );
        assert_eq!(
            classify("<Ösgür> test", Some("ÖSGÜR")),
            Classification::Ignore
        );
    }

    #[test]
    fn unattributed_line_passes_through() {
        let u = utterance("hola amigo sin nombre");
        assert_eq!(u.sender, None);
        assert_eq!(u.content, "hola amigo sin nombre");
    }

    #[test]
    fn ignores_empty_lines() {
        assert_eq!(classify("", None), Classification::Ignore);
        assert_eq!(classify("   ", None), Classification::Ignore);
    }
}
