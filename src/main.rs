//! CLI harness for the broker: translate one text from the command line
//! and print the result as JSON.
//!
//! Usage: lingua-broker <target-lang> <text> [source-lang]

use std::sync::Arc;

use lingua_broker::{GoogleProvider, LanguageTable, Translator, TranslatorConfig};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lingua_broker=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let mut args = std::env::args().skip(1);
    let (target, text) = match (args.next(), args.next()) {
        (Some(target), Some(text)) => (target, text),
        _ => {
            eprintln!("usage: lingua-broker <target-lang> <text> [source-lang]");
            std::process::exit(2);
        }
    };
    let source = args.next();

    let provider = match GoogleProvider::new() {
        Ok(provider) => Arc::new(provider),
        Err(e) => {
            eprintln!("provider init failed: {e}");
            std::process::exit(1);
        }
    };

    let translator = Translator::new(
        provider,
        LanguageTable::builtin(),
        TranslatorConfig::default(),
    );

    let result = translator.translate(&text, &target, source.as_deref()).await;
    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("serialization failed: {e}"),
    }
    if !result.success {
        std::process::exit(1);
    }
}
