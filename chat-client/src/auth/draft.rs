//! # Credential Drafts
//!
//! What the user has typed into a sub-form so far. Drafts start empty when a
//! sub-form mounts and are thrown away with it; switching modes never carries
//! input across.
//!
//! Values go to the identity service exactly as typed. A field that holds
//! only whitespace still counts as missing.

use shared::{CodeLoginRequest, CodeRequest, PasswordLoginRequest};

use crate::core::error::Result;
use crate::utils::validation::validate_required;

/// Phone/email + one-time code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeDraft {
    pub identity: String,
    pub code: String,
}

impl CodeDraft {
    /// Request body for "get code". Only the identity is required.
    pub fn code_request(&self) -> Result<CodeRequest> {
        validate_required("Phone / Email", &self.identity).into_result()?;
        Ok(CodeRequest {
            identity: self.identity.clone(),
        })
    }

    pub fn login_request(&self) -> Result<CodeLoginRequest> {
        validate_required("Phone / Email", &self.identity).into_result()?;
        validate_required("Code", &self.code).into_result()?;
        Ok(CodeLoginRequest {
            identity: self.identity.clone(),
            code: self.code.clone(),
        })
    }
}

/// Email + password
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordDraft {
    pub identity: String,
    pub password: String,
}

impl PasswordDraft {
    pub fn login_request(&self) -> Result<PasswordLoginRequest> {
        validate_required("Email", &self.identity).into_result()?;
        validate_required("Password", &self.password).into_result()?;
        Ok(PasswordLoginRequest {
            identity: self.identity.clone(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;

    #[test]
    fn test_code_request_needs_identity_only() {
        let draft = CodeDraft {
            identity: "13800138000".to_string(),
            code: String::new(),
        };
        assert_eq!(
            draft.code_request(),
            Ok(CodeRequest {
                identity: "13800138000".to_string()
            })
        );
    }

    #[test]
    fn test_identity_is_sent_as_typed() {
        let draft = CodeDraft {
            identity: " alice@example.com ".to_string(),
            code: " 123456".to_string(),
        };
        let request = draft.login_request().expect("valid draft");
        assert_eq!(request.identity, " alice@example.com ");
        assert_eq!(request.code, " 123456");

        let draft = PasswordDraft {
            identity: " alice@example.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(draft.login_request().expect("valid draft").identity, " alice@example.com");
    }

    #[test]
    fn test_code_login_requires_code() {
        let draft = CodeDraft {
            identity: "alice@example.com".to_string(),
            code: String::new(),
        };
        assert_eq!(
            draft.login_request(),
            Err(AppError::Validation("Code is required".to_string()))
        );
    }

    #[test]
    fn test_empty_draft_reports_identity_first() {
        assert_eq!(
            CodeDraft::default().login_request(),
            Err(AppError::Validation("Phone / Email is required".to_string()))
        );
    }

    #[test]
    fn test_password_is_not_trimmed() {
        let draft = PasswordDraft {
            identity: "alice@example.com".to_string(),
            password: " secret ".to_string(),
        };
        let request = draft.login_request().expect("valid draft");
        assert_eq!(request.password, " secret ");
    }

    #[test]
    fn test_password_login_requires_password() {
        let draft = PasswordDraft {
            identity: "alice@example.com".to_string(),
            password: String::new(),
        };
        assert!(matches!(draft.login_request(), Err(AppError::Validation(_))));
    }
}
