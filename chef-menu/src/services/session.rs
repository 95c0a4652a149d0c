//! Login session

use menu_shared::{AppError, AppResult, ErrorCode};

/// Who is using the app
#[derive(Debug, Clone, Default)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log in with the given name
    ///
    /// Blank input is rejected; otherwise the name is kept exactly as typed.
    pub fn login(&mut self, input: &str) -> AppResult<()> {
        if input.trim().is_empty() {
            return Err(AppError::new(ErrorCode::UsernameRequired));
        }
        tracing::info!(username = %input, "User logged in");
        self.username = Some(input.to_string());
        Ok(())
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_logged_in(&self) -> bool {
        self.username.is_some()
    }

    /// Username, or `NotAuthenticated` when nobody has logged in
    pub fn require_user(&self) -> AppResult<&str> {
        self.username().ok_or_else(AppError::not_authenticated)
    }

    /// Home screen greeting
    pub fn greeting(&self) -> Option<String> {
        self.username().map(|name| format!("Hello, {name}!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_keeps_input_verbatim() {
        let mut session = Session::new();
        assert!(!session.is_logged_in());
        session.login(" Chef Sam ").unwrap();
        assert_eq!(session.username(), Some(" Chef Sam "));
        assert_eq!(session.greeting().unwrap(), "Hello,  Chef Sam !");
    }

    #[test]
    fn test_login_rejects_blank() {
        let mut session = Session::new();
        let err = session.login("   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::UsernameRequired);
        assert_eq!(err.message, "Please enter a username");
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_login_accepts_long_names() {
        let mut session = Session::new();
        let name = "Chef ".repeat(60);
        session.login(&name).unwrap();
        assert_eq!(session.username(), Some(name.as_str()));
    }

    #[test]
    fn test_require_user() {
        let mut session = Session::new();
        assert_eq!(
            session.require_user().unwrap_err().code,
            ErrorCode::NotAuthenticated
        );
        session.login("sam").unwrap();
        assert_eq!(session.require_user().unwrap(), "sam");
    }
}
