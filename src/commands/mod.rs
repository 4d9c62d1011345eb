pub mod greet;
pub mod hello;
pub mod repeat;

use crate::cli::Command;
use crate::config::ProjectConfig;
use crate::output::Line;

/// Lines produced by a command, consumed as they are written.
pub type Lines<'a> = Box<dyn Iterator<Item = Line> + 'a>;

/// Dispatches execution to the appropriate command handler.
pub fn execute<'a>(command: &'a Command, config: &ProjectConfig) -> Lines<'a> {
    tracing::debug!(
        target: "eyecore_test_app::commands",
        command = command.name(),
        "dispatching command"
    );

    match command {
        Command::Hello => Box::new(hello::lines(config).into_iter()),
        Command::Greet { name } => Box::new(greet::lines(name, config).into_iter()),
        Command::Repeat { message, count } => Box::new(repeat::lines(message, *count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_each_command_to_its_handler() {
        let config = ProjectConfig::default();
        let greet = Command::Greet {
            name: "Ada".to_string(),
        };
        let repeat = Command::Repeat {
            message: "hi".to_string(),
            count: 2,
        };

        assert_eq!(
            execute(&Command::Hello, &config).collect::<Vec<_>>(),
            hello::lines(&config)
        );
        assert_eq!(
            execute(&greet, &config).collect::<Vec<_>>(),
            greet::lines("Ada", &config)
        );
        assert_eq!(
            execute(&repeat, &config).collect::<Vec<_>>(),
            repeat::lines("hi", 2).collect::<Vec<_>>()
        );
    }

    #[test]
    fn repeat_dispatch_does_not_materialize_lines() {
        let config = ProjectConfig::default();
        let repeat = Command::Repeat {
            message: "hi".to_string(),
            count: i64::MAX,
        };

        let first = execute(&repeat, &config).next();
        assert_eq!(first, Some(Line::plain("1. hi")));
    }
}
