use crate::config::ProjectConfig;
use crate::output::{Line, Style};

/// Returns the greeting line for `name`.
pub fn lines(name: &str, config: &ProjectConfig) -> Vec<Line> {
    vec![Line::styled(
        format!("Hello, {name}! Welcome to {}", config.name),
        Style::Success,
    )]
}
