/// Feedback for the visitor, rendered by the notification banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    MailClientOpening,
    CopyFailed { url: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::MailClientOpening => {
                "Votre messagerie va s'ouvrir pour envoyer le message. Merci !".to_string()
            }
            Notice::CopyFailed { url } => format!(
                "Impossible de copier le lien. Veuillez le copier manuellement : {}",
                url
            ),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::CopyFailed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_failure_carries_the_url() {
        let notice = Notice::CopyFailed {
            url: "https://yoga.example/#contact".to_string(),
        };
        assert!(notice.is_error());
        assert!(notice.message().ends_with(": https://yoga.example/#contact"));
    }

    #[test]
    fn mail_notice_is_informational() {
        assert!(!Notice::MailClientOpening.is_error());
        assert!(Notice::MailClientOpening.message().contains("messagerie"));
    }
}
