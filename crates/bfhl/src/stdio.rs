use crate::prelude::{eprintln, *};
use bfhl_core::api::{self, ApiResponse, BFHL_PATH};
use bfhl_core::identity::Clock;
use bfhl_core::record::Processor;
use serde::Deserialize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// One request per input line.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default = "default_method")]
    method: String,
    #[serde(default = "default_path")]
    path: String,
    body: Option<serde_json::Value>,
}

fn default_method() -> String {
    "POST".to_string()
}

fn default_path() -> String {
    BFHL_PATH.to_string()
}

pub async fn run(global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting bfhl with stdio transport...");
        eprintln!();
    }

    let processor = global.processor();
    let reader = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();

    serve_lines(reader, stdout, &processor, global.verbose).await
}

/// Answer every non-empty line of `reader` with one JSON line on `writer`.
async fn serve_lines<R, W, C>(
    mut reader: R,
    mut writer: W,
    processor: &Processor<C>,
    verbose: bool,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    C: Clock,
{
    let mut line = String::new();

    loop {
        line.clear();
        let bytes_read = reader
            .read_line(&mut line)
            .await
            .context("Failed to read request line")?;

        if bytes_read == 0 {
            break; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if verbose {
            eprintln!("Received: {trimmed}");
        }

        let response = handle_line(processor, trimmed);
        let response_json = serde_json::to_string(&response)?;

        if verbose {
            eprintln!("Sending: {response_json}");
        }

        writer.write_all(response_json.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}

fn handle_line<C: Clock>(processor: &Processor<C>, line: &str) -> ApiResponse {
    let envelope: Envelope = match serde_json::from_str(line) {
        Ok(envelope) => envelope,
        Err(e) => return api::invalid_json(&e.to_string()),
    };

    let body = match envelope.body {
        Some(body) => match serde_json::to_vec(&body) {
            Ok(bytes) => bytes,
            Err(e) => return api::invalid_json(&e.to_string()),
        },
        None => Vec::new(),
    };

    api::handle(processor, &envelope.method, &envelope.path, &body)
}
