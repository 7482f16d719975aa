use serde::{Deserialize, Serialize};

/// Ask the identity service to send a one-time code to a phone or email
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeRequest {
    pub identity: String,
}

/// Sign in (or register) with a phone/email and the one-time code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeLoginRequest {
    pub identity: String,
    pub code: String,
}

/// Sign in with an email and password
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PasswordLoginRequest {
    pub identity: String,
    pub password: String,
}

/// Acknowledgement that a code was dispatched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeSentResponse {
    pub message: String,
    /// Seconds until the service accepts another request for the same identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after_secs: Option<u64>,
}

/// Authentication response (any successful sign-in)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
    pub message: String,
}

/// User information (public, safe to send to client)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_login_request_wire_shape() {
        let request = CodeLoginRequest {
            identity: "13800138000".to_string(),
            code: "123456".to_string(),
        };
        let json = serde_json::to_value(&request).expect("serialize in test");
        assert_eq!(json, serde_json::json!({ "identity": "13800138000", "code": "123456" }));
    }

    #[test]
    fn test_code_sent_response_without_retry_after() {
        let response: CodeSentResponse =
            serde_json::from_str(r#"{"message":"sent"}"#).expect("deserialize in test");
        assert_eq!(response.message, "sent");
        assert!(response.retry_after_secs.is_none());
    }

    #[test]
    fn test_user_info_omits_missing_contact_fields() {
        let user = UserInfo {
            id: "7".to_string(),
            username: "alice".to_string(),
            email: Some("alice@example.com".to_string()),
            phone: None,
        };
        let json = serde_json::to_string(&user).expect("serialize in test");
        assert!(json.contains("\"email\""));
        assert!(!json.contains("\"phone\""));
    }
}
