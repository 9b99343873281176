use serde::Serialize;

/// A workspace name resolved to its opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceRef {
    pub name: String,
    pub id: String,
}

/// One entry of a workspace's variable catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariableRecord {
    /// Variable key, e.g. `AWS_ACCESS_KEY_ID`
    pub name: String,
    /// Remote identifier, e.g. `var-EavQ1LztoRTQHSNT`
    pub id: String,
}

impl VariableRecord {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Identifier of the first variable named exactly `name`.
///
/// A linear scan; catalogs are small and this runs once per credential.
pub fn find_variable_id<'a>(variables: &'a [VariableRecord], name: &str) -> Option<&'a str> {
    variables
        .iter()
        .find(|variable| variable.name == name)
        .map(|variable| variable.id.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<VariableRecord> {
        vec![
            VariableRecord::new("GOOGLE_CREDENTIALS", "var-1"),
            VariableRecord::new("AWS_ACCESS_KEY_ID", "var-2"),
            VariableRecord::new("AWS_ACCESS_KEY_ID", "var-3"),
        ]
    }

    #[test]
    fn test_find_returns_matching_id() {
        assert_eq!(find_variable_id(&catalog(), "GOOGLE_CREDENTIALS"), Some("var-1"));
    }

    #[test]
    fn test_find_returns_first_match() {
        assert_eq!(find_variable_id(&catalog(), "AWS_ACCESS_KEY_ID"), Some("var-2"));
    }

    #[test]
    fn test_find_is_exact_and_case_sensitive() {
        assert_eq!(find_variable_id(&catalog(), "aws_access_key_id"), None);
        assert_eq!(find_variable_id(&catalog(), "AWS_ACCESS_KEY"), None);
        assert_eq!(find_variable_id(&[], "TFE_TOKEN"), None);
    }
}
