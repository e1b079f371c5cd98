/// Read-only view of the current request, supplied fresh by the host on every
/// invocation. Not owned or mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Whether the current user is registered (logged in).
    pub is_registered: bool,
    /// Remote client address, or empty when the host cannot determine it.
    pub client_ip: String,
}

impl RequestContext {
    /// Create a request context.
    pub fn new(is_registered: bool, client_ip: impl Into<String>) -> RequestContext {
        RequestContext {
            is_registered,
            client_ip: client_ip.into(),
        }
    }
}
