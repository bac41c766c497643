use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NFL Survivor Pool Engine
///
/// Runs a survivor pick'em contest from a JSON snapshot file: validate
/// and record weekly picks, pull game results from a scoreboard feed,
/// score eliminations and print standings.
///
/// Typical week:
///   survivor_pool --submit KC --entry e1 --week 3
///   survivor_pool --fetch-week --week 3
///   survivor_pool --apply-results --week 3
///   survivor_pool --standings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Contest snapshot file to operate on.
    #[arg(short = 'f', long = "file", default_value = "contest.json")]
    pub file: String,

    /// Print current standings for every entry and exit.
    #[arg(short = 's', long = "standings", help_heading = "Contest")]
    pub standings: bool,

    /// Submit picks for an entry: comma-separated team ids (e.g. "KC" or
    /// "KC,DET" from week 12 on). Requires --entry and --week.
    #[arg(long = "submit", value_name = "TEAMS", help_heading = "Contest")]
    pub submit: Option<String>,

    /// Entry id the submission belongs to.
    #[arg(short = 'e', long = "entry", help_heading = "Contest")]
    pub entry: Option<String>,

    /// Week number (1-18) for --submit, --fetch-week and --apply-results.
    #[arg(short = 'w', long = "week", help_heading = "Contest")]
    pub week: Option<u8>,

    /// Fetch a week's games from the scoreboard feed into the snapshot.
    /// Requires --week and a configured API domain.
    #[arg(long = "fetch-week", help_heading = "Contest")]
    pub fetch_week: bool,

    /// Score a week's finalized games and apply eliminations. Requires --week.
    #[arg(long = "apply-results", help_heading = "Contest")]
    pub apply_results: bool,

    /// Update the scoreboard API domain in config.
    #[arg(long = "config", value_name = "API_DOMAIN", help_heading = "Configuration")]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config, reverting to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings.
    #[arg(short = 'l', long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode: info logs are mirrored to stdout as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// True when the invocation only touches configuration.
    pub fn is_config_operation(&self) -> bool {
        self.new_api_domain.is_some()
            || self.new_log_file_path.is_some()
            || self.clear_log_file_path
            || self.list_config
    }
}
