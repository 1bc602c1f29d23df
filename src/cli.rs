// command line interface

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{Gemini, Moderation, Outcome, Output, Relay};

#[derive(Parser)]
#[command(name = "gemchat", about = "Moderated chat with Gemini from your terminal")]
struct Cli {
    /// api key for the gemini api
    #[arg(long, short = 'k', env = "GEMINI_API_KEY")]
    api_key: Option<String>,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    print!("Enter your prompt: ");
    std::io::stdout().flush().into_diagnostic()?;

    let mut line = String::new();
    let mut stdin = BufReader::new(tokio::io::stdin());

    // ctrl-c during the read cancels the session cleanly
    tokio::select! {
        read = stdin.read_line(&mut line) => {
            // eof, nothing to do
            if read.into_diagnostic()? == 0 {
                println!("\n{}", Output::CANCELLED);
                return Ok(());
            }
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n{}", Output::CANCELLED);
            return Ok(());
        }
    }

    chat(line.trim(), cli.api_key).await
}

/// One chat turn: screen the input, call gemini, screen the output, print.
async fn chat(prompt: &str, api_key: Option<String>) -> Result<()> {
    let relay = Relay::new(Moderation::default());

    // fail closed before touching the network
    if !relay.input_allowed(prompt) {
        println!("{}", Output::REJECTED);
        return Ok(());
    }

    // a missing key is fatal, main reports it and exits non-zero
    let gemini = Gemini::new(api_key)?;

    match relay.exchange(&gemini, prompt).await {
        Ok(Outcome::Rejected) => println!("{}", Output::REJECTED),
        Ok(Outcome::Reply(reply)) => {
            if reply.redacted {
                println!("{}\n", Output::REDACTION_NOTICE);
            }
            println!("\n{}", Output::reply(&reply.text));
        }
        // a failed request abandons the turn but is not fatal
        Err(e) => eprintln!("API call failed: {e}"),
    }

    Ok(())
}
