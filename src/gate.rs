//! Request gate fed by validation outcomes.
//!
//! The serving process asks the orchestrator for an outcome once per
//! request and applies the decision returned here: forward the request
//! unchanged, or answer with the blocked page. Only this boundary turns
//! an invalid outcome into an HTTP error; nothing below it does.

use crate::protocol::models::ValidationOutcome;

/// Status code returned with the blocked page.
pub const BLOCKED_STATUS: u16 = 403;

/// Content type of the blocked page.
pub const BLOCKED_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Fixed page shown when a deployment fails validation.
pub const BLOCKED_PAGE_HTML: &str = "<!DOCTYPE html>\n\
<html>\n\
<head><title>License Required</title></head>\n\
<body style=\"padding:50px;text-align:center;font-family:sans-serif\">\n\
<h1>License Required</h1>\n\
<p>Please contact your administrator</p>\n\
</body>\n\
</html>\n";

/// Decision for one incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// Let the request continue down the handler chain.
    Forward,

    /// Stop the request and answer with the blocked page.
    Block(BlockedPage),
}

/// Response material for a blocked request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockedPage {
    /// HTTP status to answer with.
    pub status: u16,

    /// Content type of `body`.
    pub content_type: &'static str,

    /// HTML body.
    pub body: &'static str,
}

/// Convert a validation outcome into a gate decision.
///
/// Grace-period outcomes are valid outcomes and forward like any other;
/// the reason for a block is logged here since the page itself is fixed.
pub fn gate_request(outcome: &ValidationOutcome) -> GateDecision {
    if outcome.valid {
        return GateDecision::Forward;
    }

    tracing::warn!(
        reason = outcome.message.as_deref().unwrap_or("unspecified"),
        "blocking request, license invalid"
    );

    GateDecision::Block(BlockedPage {
        status: BLOCKED_STATUS,
        content_type: BLOCKED_CONTENT_TYPE,
        body: BLOCKED_PAGE_HTML,
    })
}
