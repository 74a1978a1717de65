use crate::jwt::TokenValidator;

const BEARER_PREFIX: &str = "Bearer ";

/// Outcome of an authorization check. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// The protected action may run on behalf of `subject`.
    Allow { subject: String },
    /// The request stops here.
    Deny,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow { .. })
    }
}

/// What a gate looks at when deciding.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessRequest<'a> {
    /// Presented token with any `Bearer ` prefix removed.
    pub token: Option<&'a str>,
    /// Subject named by the route, for subject-scoped actions.
    pub target_subject: Option<&'a str>,
}

impl<'a> AccessRequest<'a> {
    /// Build a request from a raw `authorization` header value.
    pub fn from_header(authorization: Option<&'a str>) -> Self {
        Self {
            token: bearer_token(authorization),
            target_subject: None,
        }
    }

    pub fn with_target(mut self, target_subject: Option<&'a str>) -> Self {
        self.target_subject = target_subject;
        self
    }
}

/// Extract the token from an `authorization` header value.
///
/// A leading `Bearer ` is stripped. A value without the prefix is taken as the
/// raw token. Blank values count as no token.
pub fn bearer_token(header_value: Option<&str>) -> Option<&str> {
    let value = header_value?;
    let token = value.strip_prefix(BEARER_PREFIX).unwrap_or(value).trim();

    (!token.is_empty()).then_some(token)
}

/// Request-time authorization policy for a protected route.
pub trait Gate: Send + Sync + 'static {
    fn check(&self, request: &AccessRequest<'_>) -> Decision;
}

/// Allows any caller holding a valid token.
#[derive(Clone)]
pub struct AuthenticatedGate {
    validator: TokenValidator,
}

impl AuthenticatedGate {
    pub fn new(validator: TokenValidator) -> Self {
        Self { validator }
    }

    pub fn authorize(&self, token: Option<&str>) -> Decision {
        match self.validator.validate(token) {
            Some(subject) => Decision::Allow { subject },
            None => Decision::Deny,
        }
    }
}

impl Gate for AuthenticatedGate {
    fn check(&self, request: &AccessRequest<'_>) -> Decision {
        self.authorize(request.token)
    }
}

/// Allows a caller only when the token names the route's target subject.
///
/// "Not authenticated" and "authenticated as someone else" are the same
/// `Deny`.
#[derive(Clone)]
pub struct SubjectGate {
    validator: TokenValidator,
}

impl SubjectGate {
    pub fn new(validator: TokenValidator) -> Self {
        Self { validator }
    }

    pub fn authorize_subject(&self, target_subject: &str, token: Option<&str>) -> Decision {
        match self.validator.validate(token) {
            Some(subject) if subject == target_subject => Decision::Allow { subject },
            Some(subject) => {
                tracing::debug!(
                    token_subject = %subject,
                    target_subject = %target_subject,
                    "Token subject does not match target"
                );
                Decision::Deny
            }
            None => Decision::Deny,
        }
    }
}

impl Gate for SubjectGate {
    fn check(&self, request: &AccessRequest<'_>) -> Decision {
        match request.target_subject {
            Some(target) => self.authorize_subject(target, request.token),
            None => {
                tracing::warn!("Subject-scoped gate used without a target subject");
                Decision::Deny
            }
        }
    }
}
