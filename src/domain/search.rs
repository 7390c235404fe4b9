use serde::Deserialize;

/// Body of a Jira search response, reduced to what the skill speaks.
///
/// Issue fields are all optional: unprioritized issues, anonymous reporters
/// and trimmed field sets must not fail a search that only needs `total`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub total: u64,
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl SearchResult {
    pub fn first_issue(&self) -> Option<&IssueFields> {
        self.issues.first().map(|issue| &issue.fields)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Issue {
    #[serde(default)]
    pub fields: IssueFields,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub priority: Option<Named>,
    #[serde(default)]
    pub reporter: Option<Named>,
    #[serde(default)]
    pub issuetype: Option<Named>,
    #[serde(default)]
    pub status: Option<Named>,
}

impl IssueFields {
    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref().filter(|value| !value.is_empty())
    }

    pub fn priority(&self) -> Option<&str> {
        Named::name_of(&self.priority)
    }

    pub fn reporter(&self) -> Option<&str> {
        Named::name_of(&self.reporter)
    }

    pub fn issue_type(&self) -> Option<&str> {
        Named::name_of(&self.issuetype)
    }

    pub fn status(&self) -> Option<&str> {
        Named::name_of(&self.status)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Named {
    #[serde(default)]
    pub name: Option<String>,
}

impl Named {
    fn name_of(named: &Option<Named>) -> Option<&str> {
        named
            .as_ref()
            .and_then(|named| named.name.as_deref())
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_issue_fields() {
        let result: SearchResult = serde_json::from_value(json!({
            "startAt": 0,
            "maxResults": 50,
            "total": 1,
            "issues": [{
                "key": "CAM-42",
                "fields": {
                    "summary": "Fix bug",
                    "priority": {"name": "High", "id": "2"},
                    "reporter": {"name": "Alice", "displayName": "Alice A."},
                    "issuetype": {"name": "Bug"},
                    "status": {"name": "Open"}
                }
            }]
        }))
        .unwrap();

        let fields = result.first_issue().unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(fields.summary(), Some("Fix bug"));
        assert_eq!(fields.reporter(), Some("Alice"));
        assert_eq!(fields.status(), Some("Open"));
    }

    #[test]
    fn count_only_body_has_no_issues() {
        let result: SearchResult = serde_json::from_value(json!({"total": 5})).unwrap();
        assert_eq!(result.total, 5);
        assert!(result.first_issue().is_none());
    }

    #[test]
    fn null_and_missing_fields_are_absent() {
        let result: SearchResult = serde_json::from_value(json!({
            "total": 3,
            "issues": [
                {"fields": {
                    "summary": "Untriaged",
                    "priority": null,
                    "reporter": {"displayName": "Former user"},
                    "issuetype": {"name": "Task"},
                    "status": {"name": "Open"}
                }},
                {"key": "CAM-2"},
                {"fields": {"summary": null}}
            ]
        }))
        .unwrap();

        let fields = result.first_issue().unwrap();
        assert_eq!(result.issues.len(), 3);
        assert_eq!(fields.summary(), Some("Untriaged"));
        assert_eq!(fields.priority(), None);
        assert_eq!(fields.reporter(), None);
        assert_eq!(fields.issue_type(), Some("Task"));
        assert_eq!(result.issues[1].fields.status(), None);
    }
}
