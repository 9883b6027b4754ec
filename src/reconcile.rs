use std::collections::HashMap;

use crate::error::SyncError;
use crate::model::status::{CanonicalStatus, StatusField};
use crate::model::task::CustomField;

const STATUS_FIELD_NAMES: &[&str] = &["STATUS", "DEV STATUS"];

/// Map a decorated option label ("🍕 Code Review", "Ready for QA ✅") to the
/// canonical status it names, if any.
pub fn normalize_label(label: &str) -> Option<CanonicalStatus> {
    let upper = label.to_uppercase();
    CanonicalStatus::ALL
        .into_iter()
        .find(|status| upper.contains(status.as_str()))
}

/// Find the status field among a task's custom fields and resolve the option
/// ids for both canonical statuses.
pub fn reconcile(fields: Option<&[CustomField]>) -> Result<StatusField, SyncError> {
    let fields = match fields {
        Some(fields) if !fields.is_empty() => fields,
        _ => return Err(SyncError::NoCustomFields),
    };

    let field = fields
        .iter()
        .find(|f| STATUS_FIELD_NAMES.contains(&f.name.to_uppercase().as_str()))
        .ok_or(SyncError::FieldNotFound)?;

    // Later options win when two labels normalize to the same status.
    let options: HashMap<CanonicalStatus, &str> = field
        .options()
        .iter()
        .filter_map(|o| normalize_label(&o.name).map(|status| (status, o.gid.as_str())))
        .collect();

    match (
        options.get(&CanonicalStatus::CodeReview),
        options.get(&CanonicalStatus::ReadyForQa),
    ) {
        (Some(code_review), Some(ready_for_qa)) => Ok(StatusField {
            field_id: field.gid.clone(),
            code_review_option: code_review.to_string(),
            ready_for_qa_option: ready_for_qa.to_string(),
        }),
        _ => Err(SyncError::MissingOptions {
            missing: [CanonicalStatus::CodeReview, CanonicalStatus::ReadyForQa]
                .into_iter()
                .filter(|s| !options.contains_key(s))
                .collect(),
        }),
    }
}
