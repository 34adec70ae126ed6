//! Interactive chat with Lydia
//!
//! Creates a session, prints its metadata and then relays every line typed on
//! stdin to the AI until EOF or `/quit`.
//!
//! The access key is read from COFFEEHOUSE_ACCESS_KEY, or prompted for.
//!
//! Usage:
//!   COFFEEHOUSE_ACCESS_KEY="your_key" cargo run --example lydia_chat -- [language]

use coffeehouse::prelude::*;
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let access_key = match std::env::var("COFFEEHOUSE_ACCESS_KEY") {
        Ok(key) => key,
        Err(_) => read_line("API Key: ")?.unwrap_or_default(),
    };
    let language = std::env::args().nth(1).unwrap_or_else(|| "en".to_string());

    let mut lydia = LydiaAi::new(access_key)?;

    {
        let session = match lydia.create_session_with_language(&language).await {
            Ok(session) => session,
            Err(e) if e.kind() == Some(ApiErrorKind::InvalidApiKey) => {
                anyhow::bail!("the access key was rejected: {e}");
            }
            Err(e) => return Err(e.into()),
        };
        println!("Session ID: {}", session.id());
        println!("Session Available: {}", session.available());
        println!("Session Language: {}", session.language());
        println!("Session Expires: {}", session.expires());

        while let Some(input) = read_line("Input: ")? {
            if input == "/quit" {
                break;
            }
            if input.is_empty() {
                continue;
            }
            match session.think_thought(&input).await {
                Ok(output) => println!("Output: {output}"),
                Err(e) if e.kind().is_some_and(|k| k.is_session_error()) => {
                    eprintln!("Session ended: {e}");
                    break;
                }
                Err(e) => eprintln!("Error: {e}"),
            }
        }
    }

    lydia.close();
    Ok(())
}
