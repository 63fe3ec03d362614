#![allow(clippy::expect_used)]

/// Rule test data loader
///
/// Each entry is either a comment string or an object naming the rule it
/// exercises, the raw input and the expected normalized components.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// A rule test case
    RuleTest {
        #[serde(default)]
        rule: Option<String>,
        input: String,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        path: Option<String>,
        #[serde(default)]
        failure: Option<bool>,
    },
    /// A comment line (string)
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct RuleFailure {
    pub test_num: usize,
    pub rule: Option<String>,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Clone, Default)]
pub struct RuleTestResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<RuleFailure>,
}

impl RuleTestResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }

    /// One line per failure, for assertion messages
    pub fn report(&self) -> String {
        self.failures
            .iter()
            .map(|f| {
                format!(
                    "#{} [{}] {:?}: {} expected {:?}, got {:?}",
                    f.test_num,
                    f.rule.as_deref().unwrap_or("-"),
                    f.input,
                    f.field,
                    f.expected,
                    f.actual
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Load the JSON rule test data
pub fn load_rule_tests() -> Vec<TestCase> {
    let test_data = include_str!("./ruletestdata.json");
    serde_json::from_str(test_data).expect("Failed to parse rule test data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_rule_tests() {
        let tests = load_rule_tests();
        let cases = tests
            .iter()
            .filter(|t| matches!(t, TestCase::RuleTest { .. }))
            .count();
        assert!(cases >= 20);
        assert!(tests.iter().any(|t| matches!(t, TestCase::Comment(_))));
    }

    #[test]
    fn test_result_report() {
        let mut result = RuleTestResult::new();
        result.passed = 3;
        result.failed = 1;
        result.failures.push(RuleFailure {
            test_num: 4,
            rule: Some("Trim".to_string()),
            input: " x".to_string(),
            field: "href".to_string(),
            expected: "x".to_string(),
            actual: " x".to_string(),
        });

        assert_eq!(result.summary(), "Passed: 3, Failed: 1");
        assert!(result.report().starts_with("#4 [Trim]"));
    }
}
