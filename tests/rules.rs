/// Rule example tests
///
/// Runs the documented example pairs of every normalization rule, plus the
/// edge cases collected in `rules/ruletestdata.json`.
#[path = "rules/rules_loader.rs"]
mod rules_loader;

#[path = "rules/rules_runner.rs"]
mod rules_runner;
