use std::io::IsTerminal;

use clap::ValueEnum;
use ledpipe::Snapshot;

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    /// Text for interactive terminals, JSON lines when piped.
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    }
}

pub fn print_snapshot(snapshot: &Snapshot, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let bg = snapshot.background;
            println!(
                "target={:#05x} background=#{:02x}{:02x}{:02x} lit={} excluded={}",
                snapshot.target.bits(),
                bg.r,
                bg.g,
                bg.b,
                snapshot.colors.len(),
                snapshot.excluded.len(),
            );
        }
        OutputFormat::Json => match serde_json::to_string(snapshot) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("error: snapshot serialization failed: {err}"),
        },
    }
}
