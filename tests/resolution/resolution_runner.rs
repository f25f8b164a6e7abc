#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

use super::resolution_loader::{SuiteFailure, SuiteResult, TestCase};
/// Runner for the data-driven resolution suite
///
/// Each case gets a fresh resolver seeded with the shared port table, so
/// cases cannot interfere with each other through cached resolutions.
use skema::{PortSchemeMap, SchemeResolver};

/// Run resolution cases against a port table and return results
pub fn run_resolution_tests(tests: Vec<TestCase>, ports: &PortSchemeMap) -> SuiteResult {
    let mut result = SuiteResult::new();
    let mut test_num = 0;

    for test in tests {
        match test {
            TestCase::Comment(_) => result.skipped += 1,
            TestCase::Resolution {
                input,
                default_scheme,
                force_default_scheme,
                scheme,
                normalized,
                web,
            } => {
                test_num += 1;

                let mut resolver = SchemeResolver::with_port_map(ports.clone());
                if let Some(default_scheme) = &default_scheme {
                    resolver.set_default_scheme(default_scheme);
                }
                if let Some(force) = force_default_scheme {
                    resolver.set_force_default_scheme(force);
                }
                resolver.register(&input);

                let mut test_passed = true;

                if let Some(expected) = &scheme {
                    let actual = resolver.scheme(None).unwrap().to_string();
                    if &actual != expected {
                        result.failures.push(SuiteFailure {
                            test_num,
                            input: input.clone(),
                            field: "scheme".to_string(),
                            expected: expected.clone(),
                            actual,
                        });
                        test_passed = false;
                    }
                }

                if let Some(expected) = &normalized {
                    let actual = resolver.normalized_url(None).unwrap().to_string();
                    if &actual != expected {
                        result.failures.push(SuiteFailure {
                            test_num,
                            input: input.clone(),
                            field: "normalized".to_string(),
                            expected: expected.clone(),
                            actual,
                        });
                        test_passed = false;
                    }
                }

                if let Some(expected) = web {
                    let actual = resolver.is_web_scheme(None).unwrap();
                    if actual != expected {
                        result.failures.push(SuiteFailure {
                            test_num,
                            input: input.clone(),
                            field: "web".to_string(),
                            expected: expected.to_string(),
                            actual: actual.to_string(),
                        });
                        test_passed = false;
                    }
                }

                if test_passed {
                    result.passed += 1;
                } else {
                    result.failed += 1;
                }
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::super::resolution_loader::{get_inline_tests, load_cases, load_port_database};
    use super::*;

    fn report_failures(result: &SuiteResult) {
        println!("\n{}", result.summary());

        for failure in &result.failures {
            println!("\nCase #{} ({} mismatch)", failure.test_num, failure.field);
            println!("   input:    {:?}", failure.input);
            println!("   expected: {}", failure.expected);
            println!("   actual:   {}", failure.actual);
        }
    }

    #[test]
    fn test_run_inline_tests() {
        let tests = get_inline_tests();
        let result = run_resolution_tests(tests, &PortSchemeMap::defaults());

        report_failures(&result);

        assert_eq!(result.failed, 0, "Inline cases must all pass");
        assert!(result.passed > 0, "No cases ran!");
    }

    #[test]
    fn test_full_resolution_suite() {
        let ports = load_port_database();
        let tests = load_cases();

        println!("\nRunning {} resolution cases...", tests.len());

        let result = run_resolution_tests(tests, &ports);

        report_failures(&result);

        assert_eq!(
            result.failed,
            0,
            "\n\nResolution suite failed: {} passed, {} failed ({:.2}% pass rate).\n\
             Run with `cargo test test_full_resolution_suite -- --nocapture` for details.\n",
            result.passed,
            result.failed,
            result.pass_rate()
        );

        // Also verify the fixture hasn't shrunk unexpectedly
        let total = result.passed + result.failed + result.skipped;
        assert!(total >= 45, "Expected at least 45 cases in the fixture, found {total}");
    }
}
