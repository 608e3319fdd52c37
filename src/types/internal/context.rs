use uuid::Uuid;

/// Request context that flows from the API layer into coordinators
///
/// Carries what activity logging and tracing need about the caller.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// IP address of the client making the request
    pub ip_address: Option<String>,

    /// Unique identifier for this request (for tracing across layers)
    pub request_id: String,
}

impl RequestContext {
    pub fn new() -> Self {
        Self {
            ip_address: None,
            request_id: Uuid::new_v4().to_string(),
        }
    }

    pub fn with_ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
