use crate::prelude::{println, *};
use bfhl_core::record::{Outcome, ResultRecord};

#[derive(Debug, clap::Args)]
pub struct ProcessOptions {
    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Tokens to classify. Flags must come before the first token.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    tokens: Vec<String>,
}

pub fn run(options: ProcessOptions, global: crate::Global) -> Result<()> {
    let outcome = global.processor().process_tokens(options.tokens.as_slice());

    println!("{}", render(outcome, options.json)?);

    Ok(())
}

/// Text written to stdout for an outcome.
///
/// JSON output carries failures in the record itself. Table output has no
/// place for them, so a failure becomes an error.
fn render(outcome: Outcome, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(&outcome)?);
    }

    let record = match outcome {
        Outcome::Success(record) => record,
        Outcome::Failure(err) => {
            return Err(Error::ProcessingFailed {
                error: err.error,
                message: err.message,
            }
            .into())
        }
    };

    let mut table = new_table();
    for (label, value) in record_rows(&record) {
        table.add_row(prettytable::row![label, value]);
    }

    Ok(table.to_string())
}

/// Label/value pairs shown in the table output.
fn record_rows(record: &ResultRecord) -> Vec<(&'static str, String)> {
    vec![
        ("User ID", record.user_id.clone()),
        ("Email", record.email.clone()),
        ("Roll Number", record.roll_number.clone()),
        ("Odd Numbers", record.odd_numbers.join(", ")),
        ("Even Numbers", record.even_numbers.join(", ")),
        ("Alphabets", record.alphabets.join(", ")),
        ("Special Characters", record.special_characters.join(", ")),
        ("Sum", record.sum.clone()),
        ("Concat String", record.concat_string.clone()),
    ]
}
