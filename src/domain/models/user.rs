use serde::{Deserialize, Serialize};

/// Identity shown in the user dropdown.
///
/// The header has no session backend of its own; `Default` is the fixed
/// administrator identity displayed when the host supplies nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub display_name: String,
    pub email: String,
}

impl Default for UserIdentity {
    fn default() -> Self {
        Self {
            display_name: "Admin User".to_string(),
            email: "admin@company.com".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_identity() {
        let user = UserIdentity::default();
        assert_eq!(user.display_name, "Admin User");
        assert_eq!(user.email, "admin@company.com");
    }

    #[test]
    fn test_deserialize_from_session_payload() {
        let user: UserIdentity = serde_json::from_str(
            r#"{"display_name":"Dana Analyst","email":"dana@company.com"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name, "Dana Analyst");
        assert_eq!(user.email, "dana@company.com");
    }
}
