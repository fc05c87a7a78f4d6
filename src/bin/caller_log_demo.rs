// caller_log/src/bin/caller_log_demo.rs
//
// Demonstrates the caller-aware logging functions on top of env_logger.
// Run with RUST_LOG=trace to see every level.

use std::io;

use anyhow::Result;
use caller_log::logging::{self, Tag};
use caller_log::{log_info, log_warn, Level};

struct Downloader {
    url: String,
}

impl Downloader {
    fn fetch(&self) -> Result<(), io::Error> {
        // Tag derived from the type: "Downloader"
        logging::debug(Tag::of_val(self), format!("fetching {}", self.url));
        Err(io::Error::new(io::ErrorKind::TimedOut, "connection timed out"))
    }
}

fn main() -> Result<()> {
    logging::try_init()?;

    logging::info("Demo", "   starting up   ");
    logging::verbose("Demo", &Level::Verbose);

    let downloader = Downloader {
        url: "https://example.com/index.html".to_string(),
    };
    if let Err(err) = downloader.fetch() {
        logging::error_with(Tag::of::<Downloader>(), "download failed", &err);
    }

    let retries = 3;
    log_warn!("Demo", "giving up after {} retries", retries);

    // Neither of these reaches the sink
    logging::info(None::<&str>, "no tag");
    logging::info("Demo", None::<&str>);

    let level: Level = "wtf".parse()?;
    logging::log(level, "Demo", "reached a state that should not exist");
    log_info!("Demo", "done");

    Ok(())
}
