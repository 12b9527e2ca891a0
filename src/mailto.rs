use urlencoding::encode;

const MISSING_PHONE: &str = "Non renseigné";

/// Contents of the contact form at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub session_type: String,
    pub message: String,
}

impl ContactRequest {
    pub fn subject(&self) -> String {
        format!("Demande de {} - {}", self.session_type, self.name)
    }

    pub fn body(&self) -> String {
        let phone = match self.phone.as_str() {
            "" => MISSING_PHONE,
            phone => phone,
        };
        format!(
            "Nom: {}\nEmail: {}\nTéléphone: {}\nType de séance: {}\n\nMessage:\n{}",
            self.name, self.email, phone, self.session_type, self.message
        )
    }

    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode(&self.subject()),
            encode(&self.body())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use urlencoding::decode;

    fn alice() -> ContactRequest {
        ContactRequest {
            name: "Alice".to_string(),
            email: "a@example.com".to_string(),
            phone: String::new(),
            session_type: "Hatha".to_string(),
            message: "Hi".to_string(),
        }
    }

    fn query_param<'a>(uri: &'a str, key: &str) -> &'a str {
        let query = uri.split_once('?').map(|(_, q)| q).unwrap_or_default();
        query
            .split('&')
            .find_map(|pair| pair.strip_prefix(key).and_then(|rest| rest.strip_prefix('=')))
            .unwrap_or_default()
    }

    #[test]
    fn empty_phone_uses_placeholder() {
        let uri = alice().mailto("follederire@yahoo.com");
        assert!(uri.starts_with("mailto:follederire@yahoo.com?subject="));

        let body = decode(query_param(&uri, "body")).unwrap();
        assert!(body.contains("Téléphone: Non renseigné"));
        assert!(body.contains("Type de séance: Hatha"));
        assert!(body.ends_with("Message:\nHi"));
    }

    #[test]
    fn only_an_empty_phone_gets_the_placeholder() {
        let request = ContactRequest {
            phone: "  ".to_string(),
            ..alice()
        };
        let body = request.body();
        assert!(body.contains("Téléphone:   \n"));
        assert!(!body.contains("Non renseigné"));
    }

    #[test]
    fn subject_names_session_and_sender() {
        let uri = alice().mailto("x@example.com");
        let subject = decode(query_param(&uri, "subject")).unwrap();
        assert_eq!(subject, "Demande de Hatha - Alice");
    }

    #[test]
    fn reserved_characters_are_encoded() {
        let request = ContactRequest {
            message: "Tarifs & horaires ? 100% motivée".to_string(),
            phone: "06 12 34 56 78".to_string(),
            ..alice()
        };
        let uri = request.mailto("x@example.com");
        let body = query_param(&uri, "body");
        assert!(!body.contains('&'));
        assert!(!body.contains(' '));
        let decoded = decode(body).unwrap();
        assert!(decoded.contains("Téléphone: 06 12 34 56 78"));
        assert!(decoded.contains("Tarifs & horaires ? 100% motivée"));
    }
}
