use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use serde_json::{json, Value};

#[derive(Debug, clap::Args)]
pub struct SmokeOptions {
    /// Base URL of a running server
    #[arg(long, env = "BFHL_URL", default_value = "http://localhost:3000")]
    url: String,
}

/// Request data and the classification fields it must produce.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub data: &'static [&'static str],
    pub odd_numbers: &'static [&'static str],
    pub even_numbers: &'static [&'static str],
    pub alphabets: &'static [&'static str],
    pub special_characters: &'static [&'static str],
    pub sum: &'static str,
}

pub const SCENARIOS: &[Scenario] = &[
    Scenario {
        name: "Example A",
        data: &["a", "1", "334", "4", "R", "$"],
        odd_numbers: &["1"],
        even_numbers: &["334", "4"],
        alphabets: &["A", "R"],
        special_characters: &["$"],
        sum: "339",
    },
    Scenario {
        name: "Example B",
        data: &["2", "a", "y", "4", "&", "-", "*", "5", "92", "b"],
        odd_numbers: &["5"],
        even_numbers: &["2", "4", "92"],
        alphabets: &["A", "Y", "B"],
        special_characters: &["&", "-", "*"],
        sum: "103",
    },
    Scenario {
        name: "Example C",
        data: &["A", "ABcD", "DOE"],
        odd_numbers: &[],
        even_numbers: &[],
        alphabets: &["A", "ABCD", "DOE"],
        special_characters: &[],
        sum: "0",
    },
];

pub async fn run(options: SmokeOptions, global: crate::Global) -> Result<()> {
    let base = options.url.trim_end_matches('/').to_string();
    let client = reqwest::Client::new();

    eprintln!("{}", "Checking if server is running...".cyan());

    let health = client.get(format!("{base}/")).send().await;
    if !matches!(&health, Ok(response) if response.status().is_success()) {
        eprintln!("{}", "Server is not running. Start it first with:".red());
        eprintln!("   bfhl serve");
        return Err(Error::ServerUnavailable(base).into());
    }

    eprintln!("{}", "Server is running. Starting scenarios...".green());
    eprintln!();

    let mut failed = 0;

    for scenario in SCENARIOS {
        println!("{}: {}", "Scenario".bold(), scenario.name);
        println!("Input: {}", json!(scenario.data));

        let response = client
            .post(format!("{base}/bfhl"))
            .json(&json!({ "data": scenario.data }))
            .send()
            .await
            .with_context(|| format!("Request for '{}' failed", scenario.name))?;
        let status = response.status().as_u16();
        let body: Value = response
            .json()
            .await
            .with_context(|| format!("Failed to parse response for '{}'", scenario.name))?;

        let mismatches = check(scenario, status, &body);

        if mismatches.is_empty() {
            println!("{}", "PASS".green().bold());
            println!("User ID: {}", body["user_id"]);
            println!("Sum: {}", body["sum"]);
            println!("Concat String: {}", body["concat_string"]);
        } else {
            failed += 1;
            println!("{}", "FAIL".red().bold());
            for mismatch in &mismatches {
                println!("  - {mismatch}");
            }
        }

        if global.verbose {
            println!("Response: {}", serde_json::to_string_pretty(&body)?);
        }

        println!("{}", "-".repeat(50));
    }

    if failed > 0 {
        return Err(Error::SmokeFailed {
            failed,
            total: SCENARIOS.len(),
        }
        .into());
    }

    println!("{}", "All scenarios passed".green().bold());

    Ok(())
}

/// Compare a `/bfhl` response against a scenario. Empty means it passed.
pub fn check(scenario: &Scenario, status: u16, body: &Value) -> Vec<String> {
    let mut mismatches = Vec::new();

    if status != 200 {
        mismatches.push(format!("status: expected 200, got {status}"));
    }

    if body["is_success"] != true {
        mismatches.push(format!("is_success: expected true, got {}", body["is_success"]));
    }

    let expected_lists = [
        ("odd_numbers", scenario.odd_numbers),
        ("even_numbers", scenario.even_numbers),
        ("alphabets", scenario.alphabets),
        ("special_characters", scenario.special_characters),
    ];

    for (field, expected) in expected_lists {
        let expected = json!(expected);
        if body[field] != expected {
            mismatches.push(format!("{field}: expected {expected}, got {}", body[field]));
        }
    }

    if body["sum"] != scenario.sum {
        mismatches.push(format!("sum: expected \"{}\", got {}", scenario.sum, body["sum"]));
    }

    mismatches
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfhl_core::identity::{FixedClock, IdentityRecord};
    use bfhl_core::record::Processor;
    use chrono::NaiveDate;

    fn processor() -> Processor<FixedClock> {
        Processor::new(
            IdentityRecord::new("john_doe", "john@xyz.com", "ABCD123"),
            FixedClock(NaiveDate::from_ymd_opt(2024, 9, 5).unwrap()),
        )
    }

    #[test]
    fn test_scenarios_pass_against_processor() {
        for scenario in SCENARIOS {
            let body = serde_json::to_value(processor().process_tokens(scenario.data)).unwrap();
            assert_eq!(check(scenario, 200, &body), Vec::<String>::new(), "{}", scenario.name);
        }
    }

    #[test]
    fn test_check_reports_mismatches() {
        let body = json!({
            "is_success": true,
            "odd_numbers": ["1"],
            "even_numbers": ["334"],
            "alphabets": ["A", "R"],
            "special_characters": ["$"],
            "sum": "335"
        });
        let mismatches = check(&SCENARIOS[0], 200, &body);

        assert_eq!(mismatches.len(), 2);
        assert!(mismatches[0].starts_with("even_numbers"));
        assert!(mismatches[1].starts_with("sum"));
    }

    #[test]
    fn test_check_reports_failure_record() {
        let body = json!({
            "is_success": false,
            "error": "Error processing data",
            "message": "boom"
        });
        let mismatches = check(&SCENARIOS[2], 400, &body);

        assert!(mismatches.iter().any(|m| m.starts_with("status")));
        assert!(mismatches.iter().any(|m| m.starts_with("is_success")));
    }
}
