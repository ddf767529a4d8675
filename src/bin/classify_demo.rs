//! Run replies through the classifier and print one JSON line each.
//!
//! With no arguments a built-in sample set is used; otherwise each
//! argument is classified. Set RUST_LOG=debug to see the per-reply
//! classification events.

use anyhow::Result;
use avatar_signals::Message;
use tracing_subscriber::EnvFilter;

const SAMPLES: &[&str] = &[
    "That’s a great idea! Let’s try it.",
    "Two steps: first install dependencies, second run the server.",
    "I’m not sure; do you mean local or production?",
    "Sorry, I can't do that right now.",
    "No, that's incorrect.",
    "Click the button to continue.",
];

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let texts: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    for text in texts {
        let mut message = Message::new(text);
        message.attach_cues();
        println!("{}", serde_json::to_string(&message)?);
    }
    Ok(())
}
