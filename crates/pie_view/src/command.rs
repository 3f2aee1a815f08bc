//! One-line commands understood by the control socket.
//!
//! ```text
//! set <passed> <total> [animated]
//! step <delta>
//! colors <fill> <stroke>
//! reload
//! quit
//! ```

use crate::events::AppEvent;
use pie_progress::color::{Color, ColorParseError};
use pie_progress::ColorPair;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
enum Verb {
    Set,
    Step,
    Colors,
    Reload,
    Quit,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command '{0}'")]
    Unknown(String),
    #[error("Missing argument <{0}>")]
    MissingArgument(&'static str),
    #[error("Invalid number for <{name}>: {source}")]
    Number {
        name: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error(transparent)]
    Color(#[from] ColorParseError),
    #[error("Unexpected argument '{0}'")]
    Unexpected(String),
}

struct Args<'a> {
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn next(&mut self, name: &'static str) -> Result<&'a str, CommandError> {
        self.words.next().ok_or(CommandError::MissingArgument(name))
    }

    fn number(&mut self, name: &'static str) -> Result<i64, CommandError> {
        self.next(name)?
            .parse()
            .map_err(|source| CommandError::Number { name, source })
    }

    fn color(&mut self, name: &'static str) -> Result<Color, CommandError> {
        Ok(self.next(name)?.parse()?)
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.words.next() {
            Some(extra) => Err(CommandError::Unexpected(extra.to_string())),
            None => Ok(()),
        }
    }
}

impl FromStr for AppEvent {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words.next().ok_or(CommandError::Empty)?;
        let verb: Verb = verb
            .parse()
            .map_err(|_| CommandError::Unknown(verb.to_string()))?;
        let mut args = Args { words };

        let event = match verb {
            Verb::Set => {
                let passed = args.number("passed")?;
                let total = args.number("total")?;
                let animated = match args.words.next() {
                    Some("animated") => true,
                    Some(other) => return Err(CommandError::Unexpected(other.to_string())),
                    None => false,
                };
                AppEvent::SetProgress {
                    passed,
                    total,
                    animated,
                }
            }
            Verb::Step => AppEvent::Step(args.number("delta")?),
            Verb::Colors => {
                let fill = args.color("fill")?;
                let stroke = args.color("stroke")?;
                AppEvent::SetActiveColors(ColorPair::new(fill, stroke))
            }
            Verb::Reload => AppEvent::ConfigReload,
            Verb::Quit => AppEvent::Quit,
        };

        args.finish()?;
        Ok(event)
    }
}

impl fmt::Display for AppEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppEvent::SetProgress {
                passed,
                total,
                animated,
            } => {
                write!(f, "{} {} {}", Verb::Set, passed, total)?;
                if *animated {
                    write!(f, " animated")?;
                }
                Ok(())
            }
            AppEvent::Step(delta) => write!(f, "{} {}", Verb::Step, delta),
            AppEvent::SetActiveColors(pair) => {
                write!(f, "{} {} {}", Verb::Colors, pair.fill, pair.stroke)
            }
            AppEvent::ConfigReload => write!(f, "{}", Verb::Reload),
            AppEvent::Quit => write!(f, "{}", Verb::Quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        let red = Color::new(1.0, 0.0, 0.0, 1.0);
        let cases = vec![
            (
                "set 3 5",
                AppEvent::SetProgress {
                    passed: 3,
                    total: 5,
                    animated: false,
                },
            ),
            (
                "  SET -1 0 animated ",
                AppEvent::SetProgress {
                    passed: -1,
                    total: 0,
                    animated: true,
                },
            ),
            ("step -2", AppEvent::Step(-2)),
            ("step +1", AppEvent::Step(1)),
            (
                "colors #ff0000 #f00",
                AppEvent::SetActiveColors(ColorPair::new(red, red)),
            ),
            ("reload", AppEvent::ConfigReload),
            ("Quit", AppEvent::Quit),
        ];

        for (line, expected) in cases {
            let parsed: AppEvent = line.parse().unwrap();
            assert_eq!(parsed, expected, "{line}");
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<AppEvent>(), Err(CommandError::Empty)));
        assert!(matches!(
            "show".parse::<AppEvent>(),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(
            "set 3".parse::<AppEvent>(),
            Err(CommandError::MissingArgument("total"))
        ));
        assert!(matches!(
            "set three 5".parse::<AppEvent>(),
            Err(CommandError::Number { name: "passed", .. })
        ));
        assert!(matches!(
            "set 1 2 slowly".parse::<AppEvent>(),
            Err(CommandError::Unexpected(_))
        ));
        assert!(matches!(
            "quit now".parse::<AppEvent>(),
            Err(CommandError::Unexpected(_))
        ));
        assert!(matches!(
            "colors #ff0000 nope".parse::<AppEvent>(),
            Err(CommandError::Color(_))
        ));
    }

    #[test]
    fn test_display_is_parseable() {
        let events = vec![
            AppEvent::SetProgress {
                passed: 2,
                total: 7,
                animated: true,
            },
            AppEvent::Step(-3),
            AppEvent::SetActiveColors(ColorPair::new(
                "#10203040".parse().unwrap(),
                "#ffffff".parse().unwrap(),
            )),
            AppEvent::ConfigReload,
            AppEvent::Quit,
        ];

        for event in events {
            let line = event.to_string();
            assert_eq!(line.parse::<AppEvent>().unwrap(), event, "{line}");
        }
    }
}
