//! Authentication primitives: credentials, registration profiles and tokens.
//!
//! Keep form parsing outside the domain by exposing constructors that
//! validate raw string inputs before a page controller talks to a gateway.

use std::fmt;

use zeroize::Zeroizing;

/// Validation failures for login and registration input.
///
/// The display text is shown verbatim next to the offending form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthValidationError {
    /// A required field was missing or blank.
    MissingFields,
    /// The email does not look like `local@domain.tld`.
    InvalidEmail,
    /// A bearer token was blank.
    BlankToken,
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "Please fill in all fields"),
            Self::InvalidEmail => write!(f, "Please enter a valid email address"),
            Self::BlankToken => write!(f, "access token must not be empty"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

/// Return whether `email` has the shape `local@domain.tld`.
///
/// Both sides of the `@` must be free of whitespace and further `@` signs, and
/// the domain must contain a dot with text on either side.
///
/// # Examples
/// ```
/// use frontend::domain::is_valid_email;
///
/// assert!(is_valid_email("guest@hbnb.io"));
/// assert!(!is_valid_email("guest@localhost"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let clean = |part: &str| {
        !part.is_empty() && !part.contains('@') && !part.contains(char::is_whitespace)
    };
    if !clean(local) || !clean(domain) {
        return false;
    }
    domain
        .char_indices()
        .any(|(idx, ch)| ch == '.' && idx > 0 && idx + 1 < domain.len())
}

fn require(value: &str) -> Result<&str, AuthValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AuthValidationError::MissingFields)
    } else {
        Ok(trimmed)
    }
}

fn require_email(value: &str) -> Result<String, AuthValidationError> {
    let email = require(value)?;
    if is_valid_email(email) {
        Ok(email.to_owned())
    } else {
        Err(AuthValidationError::InvalidEmail)
    }
}

fn require_password(value: &str) -> Result<Zeroizing<String>, AuthValidationError> {
    if value.is_empty() {
        return Err(AuthValidationError::MissingFields);
    }
    Ok(Zeroizing::new(value.to_owned()))
}

/// Validated login credentials sent to the authentication gateway.
///
/// ## Invariants
/// - `email` is trimmed and shaped like `local@domain.tld`.
/// - `password` is non-empty and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use frontend::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" guest@hbnb.io ", "hunter2").unwrap();
/// assert_eq!(creds.email(), "guest@hbnb.io");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw form inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthValidationError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthValidationError::MissingFields);
        }
        Ok(Self {
            email: require_email(email)?,
            password: require_password(password)?,
        })
    }

    /// Email used as the login identifier.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the user.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Validated sign-up form.
#[derive(Clone, PartialEq, Eq)]
pub struct RegistrationProfile {
    first_name: String,
    last_name: String,
    email: String,
    password: Zeroizing<String>,
}

impl RegistrationProfile {
    /// Construct a profile, requiring every field.
    ///
    /// # Examples
    /// ```
    /// use frontend::domain::{AuthValidationError, RegistrationProfile};
    ///
    /// let err = RegistrationProfile::try_new("Ada", "", "ada@hbnb.io", "pw").unwrap_err();
    /// assert_eq!(err, AuthValidationError::MissingFields);
    /// ```
    pub fn try_new(
        first_name: &str,
        last_name: &str,
        email: &str,
        password: &str,
    ) -> Result<Self, AuthValidationError> {
        let first_name = require(first_name)?.to_owned();
        let last_name = require(last_name)?.to_owned();
        require(email)?;
        let password = require_password(password)?;
        Ok(Self {
            first_name,
            last_name,
            email: require_email(email)?,
            password,
        })
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Email address, also the login identifier.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Chosen password.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Credentials for the follow-up login after registration.
    pub fn credentials(&self) -> LoginCredentials {
        LoginCredentials {
            email: self.email.clone(),
            password: self.password.clone(),
        }
    }
}

impl fmt::Debug for RegistrationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationProfile")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Opaque bearer token issued by the HBnB API.
///
/// The token is wiped from memory on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(Zeroizing<String>);

impl AccessToken {
    /// Wrap a raw token, rejecting blank values.
    pub fn new(raw: impl Into<String>) -> Result<Self, AuthValidationError> {
        let raw = Zeroizing::new(raw.into());
        if raw.trim().is_empty() {
            return Err(AuthValidationError::BlankToken);
        }
        Ok(Self(raw))
    }

    /// Raw token for the `Authorization` header.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Result of a successful login: the token plus whatever identity the API
/// returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginGrant {
    /// Bearer token for subsequent calls.
    pub token: AccessToken,
    /// Email of the authenticated user.
    pub email: Option<String>,
    /// API user identifier, when returned.
    pub user_id: Option<String>,
}

impl LoginGrant {
    /// Grant carrying only a token.
    pub fn new(token: AccessToken) -> Self {
        Self {
            token,
            email: None,
            user_id: None,
        }
    }

    /// Attach the user's email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Attach the API user identifier.
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}
