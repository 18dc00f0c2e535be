/// Identity of the caller, threaded explicitly through service calls.
///
/// There is deliberately no ambient request-scoped lookup; handlers bind the
/// caller once and pass it down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: i64,
}

impl UserContext {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}
