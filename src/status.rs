use crate::event::EventContext;
use crate::model::status::CanonicalStatus;

/// Pick the status a pull request event moves its tasks to.
///
/// Allow-listed authors always go straight to ready for QA. Otherwise an
/// opened/reopened pull request means code review and an approving review
/// means ready for QA. Anything else is `None`.
pub fn resolve_status(ctx: &EventContext, allow_list: &[String]) -> Option<CanonicalStatus> {
    if allow_list.iter().any(|user| *user == ctx.author_login) {
        return Some(CanonicalStatus::ReadyForQa);
    }

    match (ctx.event_name.as_str(), ctx.action.as_deref(), ctx.review_state.as_deref()) {
        ("pull_request", Some("opened" | "reopened"), _) => Some(CanonicalStatus::CodeReview),
        ("pull_request_review", _, Some("approved")) => Some(CanonicalStatus::ReadyForQa),
        _ => None,
    }
}
