use crate::config::ProjectConfig;
use crate::output::{Line, Style};

pub const USAGE_HINT: &str = "Use --help to see available commands";

/// Banner, project description and a pointer at `--help`.
pub fn lines(config: &ProjectConfig) -> Vec<Line> {
    vec![
        Line::styled(format!("🔨 {}", config.name), Style::Banner),
        Line::plain(config.description),
        Line::blank(),
        Line::plain(USAGE_HINT),
    ]
}
