//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;
use voc_streaming_core::ConferenceSlug;

/// Report whether a conference is running.
#[derive(Debug, Parser)]
#[command(name = "voc-streaming-status", version, about, long_about = None)]
pub struct Args {
    /// Conference configuration file (format taken from the extension).
    #[arg(short, long)]
    pub config: PathBuf,

    /// Slug of the conference described by the file.
    #[arg(short, long)]
    pub slug: ConferenceSlug,

    /// Evaluate at this Unix timestamp instead of now.
    #[arg(long)]
    pub at: Option<i64>,

    /// Request host, matched against the deployment's preview hosts.
    #[arg(long)]
    pub host: Option<String>,

    /// Force the conference open regardless of configuration.
    #[arg(long)]
    pub forced_open: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_arguments() {
        let args = Args::try_parse_from(["voc-streaming-status", "-c", "36c3.toml", "-s", "36c3"])
            .expect("parse");
        assert_eq!(args.config, PathBuf::from("36c3.toml"));
        assert_eq!(args.slug.as_str(), "36c3");
        assert!(args.at.is_none());
        assert!(args.host.is_none());
        assert!(!args.forced_open);
    }

    #[test]
    fn parses_optional_arguments() {
        let args = Args::try_parse_from([
            "voc-streaming-status",
            "--config",
            "camp.yaml",
            "--slug",
            "camp2023",
            "--at",
            "1692000000",
            "--host",
            "preview.example.org",
            "--forced-open",
        ])
        .expect("parse");
        assert_eq!(args.at, Some(1_692_000_000));
        assert_eq!(args.host.as_deref(), Some("preview.example.org"));
        assert!(args.forced_open);
    }

    #[test]
    fn rejects_invalid_slug() {
        let result =
            Args::try_parse_from(["voc-streaming-status", "-c", "x.toml", "-s", "../etc"]);
        assert!(result.is_err());
    }

    #[test]
    fn requires_config_and_slug() {
        assert!(Args::try_parse_from(["voc-streaming-status", "-s", "36c3"]).is_err());
        assert!(Args::try_parse_from(["voc-streaming-status", "-c", "36c3.toml"]).is_err());
    }
}
