use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "tagesschau",
    version,
    about = "Find today's tagesschau 20:00 episode and play it with mpv",
    after_help = "If an url is given, the linked video will be played. Any date options will be ignored."
)]
pub struct Cli {
    /// Target date of the video (DD.MM.YYYY or D.M.YYYY), defaults to today
    #[arg(short = 'd', value_name = "DATE")]
    pub date: Option<String>,

    /// Date offset in days
    #[arg(
        short = 'o',
        value_name = "DAYS",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    pub offset: i64,

    /// Video url to play directly, skipping the playlist lookup
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_offset() {
        let cli = Cli::try_parse_from(["tagesschau", "-o", "-1"]).expect("should parse");
        assert_eq!(cli.offset, -1);
        assert!(cli.date.is_none());
        assert!(cli.url.is_none());
    }

    #[test]
    fn url_and_date_can_be_combined() {
        let cli = Cli::try_parse_from([
            "tagesschau",
            "-d",
            "garbage",
            "https://example/watch?v=XYZ",
        ])
        .expect("should parse");
        assert_eq!(cli.date.as_deref(), Some("garbage"));
        assert_eq!(cli.url.as_deref(), Some("https://example/watch?v=XYZ"));
        assert_eq!(cli.offset, 0);
    }

    #[test]
    fn rejects_non_numeric_offset() {
        assert!(Cli::try_parse_from(["tagesschau", "-o", "yesterday"]).is_err());
    }
}
