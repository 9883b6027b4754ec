use std::sync::LazyLock;

use regex::Regex;

// https://app.asana.com/1/<workspace>/project/<project>/task/<task>
static TASK_LINK_PROJECT_TASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)https://app\.asana\.com/[0-9]+/[0-9]+/project/(?P<project>[0-9]+)/task/(?P<task_id>[0-9]+).*",
    )
    .expect("task link regex")
});

// https://app.asana.com/0/<project>/<task>/f
static TASK_LINK_FOCUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)https://app\.asana\.com/0/(?P<project>[0-9]+)/(?P<task_id>[0-9]+)/f.*")
        .expect("task link regex")
});

/// Collect task ids linked from `text`.
///
/// Every link in the project/task shape comes first, then every link in the
/// `/0/<project>/<task>/f` shape, each group in document order. Duplicates are
/// kept. A match swallows the rest of its line, so only the first link of a
/// given shape on one line is seen.
pub fn extract_task_ids(text: &str) -> Vec<String> {
    [&*TASK_LINK_PROJECT_TASK, &*TASK_LINK_FOCUS]
        .into_iter()
        .flat_map(|re| re.captures_iter(text))
        .filter_map(|cap| cap.name("task_id").map(|m| m.as_str().to_string()))
        .collect()
}
