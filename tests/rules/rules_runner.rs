#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::rules_loader::{RuleFailure, RuleTestResult, TestCase, load_rule_tests};
/// Rule test runner
///
/// Runs rule test data against a `UriParser`
use mimic_uri::{MimicBrowser, Normalizer, UriParser};

/// The test case being checked, for failure reports
struct Current<'a> {
    test_num: usize,
    rule: Option<&'a str>,
    input: &'a str,
}

impl RuleTestResult {
    fn check(&mut self, case: &Current<'_>, field: &str, expected: &str, actual: &str) -> bool {
        if expected == actual {
            return true;
        }
        self.failures.push(RuleFailure {
            test_num: case.test_num,
            rule: case.rule.map(str::to_string),
            input: case.input.to_string(),
            field: field.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
        false
    }
}

/// Run rule tests and return results
pub fn run_rule_tests(parser: &UriParser, tests: Vec<TestCase>) -> RuleTestResult {
    let mut result = RuleTestResult::new();
    let mut test_num = 0;

    for test in tests {
        let TestCase::RuleTest {
            rule,
            input,
            href,
            host,
            path,
            failure,
        } = test
        else {
            continue;
        };
        test_num += 1;

        let case = Current {
            test_num,
            rule: rule.as_deref(),
            input: &input,
        };
        let parsed = parser.parse(&input);

        // Check if test expects failure
        if failure == Some(true) {
            match parsed {
                Ok(uri) => {
                    result.check(&case, "parsing", "failure", uri.as_str());
                    result.failed += 1;
                }
                Err(_) => result.passed += 1,
            }
            continue;
        }

        let uri = match parsed {
            Ok(uri) => uri,
            Err(e) => {
                result.check(&case, "parsing", "success", &e.to_string());
                result.failed += 1;
                continue;
            }
        };

        let mut test_passed = true;
        if let Some(expected) = &href {
            test_passed &= result.check(&case, "href", expected, uri.as_str());
        }
        if let Some(expected) = &host {
            let actual = uri.host().unwrap_or("<none>");
            test_passed &= result.check(&case, "host", expected, actual);
        }
        if let Some(expected) = &path {
            test_passed &= result.check(&case, "path", expected, uri.path());
        }

        if test_passed {
            result.passed += 1;
        } else {
            result.failed += 1;
        }
    }

    result
}

#[test]
fn test_rule_test_data() {
    let result = run_rule_tests(&UriParser::default(), load_rule_tests());
    assert_eq!(result.failed, 0, "{}\n{}", result.summary(), result.report());
    assert!(result.passed > 0);
}

#[test]
fn test_documented_examples() {
    let tests = MimicBrowser
        .descriptions()
        .iter()
        .flat_map(|rule| {
            rule.examples.iter().map(|example| TestCase::RuleTest {
                rule: Some(rule.name.to_string()),
                input: example.uri.to_string(),
                href: Some(example.normalized_uri.to_string()),
                host: None,
                path: None,
                failure: None,
            })
        })
        .collect::<Vec<_>>();
    assert_eq!(tests.len(), 8);

    let result = run_rule_tests(&UriParser::default(), tests);
    assert_eq!(result.failed, 0, "{}\n{}", result.summary(), result.report());
    assert_eq!(result.passed, 8);
}

#[test]
fn test_documented_examples_are_in_test_data() {
    let inputs: Vec<String> = load_rule_tests()
        .into_iter()
        .filter_map(|t| match t {
            TestCase::RuleTest { input, .. } => Some(input),
            TestCase::Comment(_) => None,
        })
        .collect();

    for rule in MimicBrowser.descriptions() {
        for example in rule.examples {
            assert!(
                inputs.iter().any(|input| input == example.uri),
                "{:?} missing from rule test data",
                example.uri
            );
        }
    }
}

#[test]
fn test_without_normalizers_differs() {
    // Guard against the data passing without any rule applied
    let result = run_rule_tests(&UriParser::new(), load_rule_tests());
    assert!(result.failed > 0);
}
