//! Game description file loading.
//!
//! ## Format
//!
//! ```text
//! 4
//! property
//! service 500
//! luck 300
//! property
//! 3
//! Anna greedy
//! Bela careful
//! Cili tactician
//! 1 1 1 1 1 1
//! ```
//!
//! The field count is followed by one field per line, then the player
//! count and one `Name style` line per player. An optional last line
//! lists scripted die rolls; without it the game rolls randomly from the
//! seed passed by the caller. Blank lines are ignored.

use std::path::Path;

use tracing::debug;

use crate::core::{FieldSpec, GameConfig, DIE_FACES};
use crate::error::{ConfigError, ConfigResult};
use crate::game::MIN_PLAYERS;
use crate::strategy::StrategyKind;

/// Non-blank lines with their 1-based line numbers.
struct Lines<'a> {
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last_line: usize,
}

impl<'a> Lines<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            inner: input.lines().enumerate(),
            last_line: 0,
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        for (i, text) in self.inner.by_ref() {
            self.last_line = i + 1;
            let text = text.trim();
            if !text.is_empty() {
                return Some((i + 1, text));
            }
        }
        None
    }

    fn expect(&mut self, expected: &'static str) -> ConfigResult<(usize, &'a str)> {
        self.next_line().ok_or(ConfigError::UnexpectedEof {
            line: self.last_line + 1,
            expected,
        })
    }
}

/// Parse a game description. `seed` drives the dice when the
/// description has no roll line.
///
/// # Errors
///
/// Returns the first [`ConfigError`] found, with its line number.
pub fn parse_config(input: &str, seed: u64) -> ConfigResult<GameConfig> {
    if input.trim().is_empty() {
        return Err(ConfigError::Empty);
    }

    let mut lines = Lines::new(input);
    let mut config = GameConfig::new(seed);

    let (line, text) = lines.expect("the number of fields")?;
    let field_count = parse_count(line, text)?;
    if field_count < 1 {
        return Err(ConfigError::TooFewFields { line });
    }
    for _ in 0..field_count {
        let (line, text) = lines.expect("a field")?;
        config.fields.push(parse_field(line, text)?);
    }

    let (line, text) = lines.expect("the number of players")?;
    let player_count = parse_count(line, text)?;
    if player_count < MIN_PLAYERS {
        return Err(ConfigError::TooFewPlayers {
            line,
            found: player_count,
        });
    }
    for _ in 0..player_count {
        let (line, text) = lines.expect("a player")?;
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let [name, style] = tokens[..] else {
            return Err(ConfigError::MalformedPlayer { line });
        };
        let strategy = style
            .parse::<StrategyKind>()
            .map_err(|source| ConfigError::UnknownStrategy { line, source })?;
        config = config.with_player(name, strategy);
    }

    if let Some((line, text)) = lines.next_line() {
        let rolls = text
            .split_whitespace()
            .map(|token| parse_roll(line, token))
            .collect::<ConfigResult<Vec<_>>>()?;
        config = config.with_rolls(rolls);
    }

    debug!(
        fields = config.fields.len(),
        players = config.players.len(),
        dice = ?config.dice,
        "parsed game description"
    );
    Ok(config)
}

/// Read and parse a game description file.
///
/// # Errors
///
/// [`ConfigError::Io`] if the file cannot be read, otherwise as
/// [`parse_config`].
pub fn load_config(path: impl AsRef<Path>, seed: u64) -> ConfigResult<GameConfig> {
    let path = path.as_ref();
    let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_config(&input, seed)
}

fn parse_count(line: usize, text: &str) -> ConfigResult<usize> {
    let count: i64 = text.parse().map_err(|_| ConfigError::InvalidNumber {
        line,
        token: text.to_string(),
    })?;
    Ok(usize::try_from(count).unwrap_or(0))
}

fn parse_amount(line: usize, token: &str) -> ConfigResult<i64> {
    token
        .parse::<u32>()
        .map(i64::from)
        .map_err(|_| ConfigError::InvalidNumber {
            line,
            token: token.to_string(),
        })
}

fn parse_field(line: usize, text: &str) -> ConfigResult<FieldSpec> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    match tokens[..] {
        ["property"] => Ok(FieldSpec::Property),
        ["property", ..] => Err(ConfigError::UnexpectedValue { line }),
        ["service"] => Err(ConfigError::MissingValue { line, kind: "service" }),
        ["luck"] => Err(ConfigError::MissingValue { line, kind: "luck" }),
        ["service", value] => Ok(FieldSpec::Service {
            cost: parse_amount(line, value)?,
        }),
        ["luck", value] => Ok(FieldSpec::Luck {
            payout: parse_amount(line, value)?,
        }),
        ["service" | "luck", _, ..] => Err(ConfigError::InvalidNumber {
            line,
            token: tokens[1..].join(" "),
        }),
        _ => Err(ConfigError::UnknownField {
            line,
            kind: tokens.first().copied().unwrap_or_default().to_string(),
        }),
    }
}

fn parse_roll(line: usize, token: &str) -> ConfigResult<u8> {
    match token.parse::<u8>() {
        Ok(roll) if (1..=DIE_FACES).contains(&roll) => Ok(roll),
        _ => Err(ConfigError::InvalidRoll {
            line,
            value: token.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dice, PlayerSpec};

    const SAMPLE: &str = "4
property
service 500
luck 300
property
3
Anna greedy
Bela careful
Cili tactician
1 1 1 1 1 1
";

    #[test]
    fn test_parse_sample() {
        let config = parse_config(SAMPLE, 0).unwrap();

        assert_eq!(
            config.fields,
            vec![
                FieldSpec::Property,
                FieldSpec::Service { cost: 500 },
                FieldSpec::Luck { payout: 300 },
                FieldSpec::Property,
            ]
        );
        assert_eq!(
            config.players,
            vec![
                PlayerSpec::new("Anna", StrategyKind::Greedy),
                PlayerSpec::new("Bela", StrategyKind::Careful),
                PlayerSpec::new("Cili", StrategyKind::Tactician),
            ]
        );
        assert_eq!(config.dice, Dice::Scripted(vec![1; 6]));
    }

    #[test]
    fn test_without_rolls_uses_seed() {
        let input = "1\nluck 10\n3\nA greedy\nB greedy\nC greedy\n\n\n";
        let config = parse_config(input, 77).unwrap();

        assert_eq!(config.dice, Dice::Random { seed: 77 });
    }

    #[test]
    fn test_empty_input() {
        assert!(matches!(parse_config("  \n\n", 0), Err(ConfigError::Empty)));
    }

    #[test]
    fn test_field_count_must_be_number() {
        assert!(matches!(
            parse_config("four\nproperty\n", 0),
            Err(ConfigError::InvalidNumber { line: 1, .. })
        ));
        assert!(matches!(
            parse_config("0\n3\n", 0),
            Err(ConfigError::TooFewFields { line: 1 })
        ));
    }

    #[test]
    fn test_field_errors() {
        let err = |field: &str| {
            parse_config(&format!("1\n{field}\n3\nA greedy\nB greedy\nC greedy\n"), 0)
        };

        assert!(matches!(
            err("service"),
            Err(ConfigError::MissingValue { line: 2, kind: "service" })
        ));
        assert!(matches!(
            err("luck"),
            Err(ConfigError::MissingValue { line: 2, kind: "luck" })
        ));
        assert!(matches!(
            err("property 100"),
            Err(ConfigError::UnexpectedValue { line: 2 })
        ));
        assert!(matches!(
            err("jail"),
            Err(ConfigError::UnknownField { line: 2, .. })
        ));
        assert!(matches!(
            err("luck -300"),
            Err(ConfigError::InvalidNumber { line: 2, .. })
        ));
        assert!(matches!(
            err("service 1 2"),
            Err(ConfigError::InvalidNumber { line: 2, .. })
        ));
    }

    #[test]
    fn test_player_errors() {
        assert!(matches!(
            parse_config("1\nproperty\n2\nA greedy\nB greedy\n", 0),
            Err(ConfigError::TooFewPlayers { line: 3, found: 2 })
        ));
        assert!(matches!(
            parse_config("1\nproperty\n3\nA greedy\nB\nC greedy\n", 0),
            Err(ConfigError::MalformedPlayer { line: 5 })
        ));
        assert!(matches!(
            parse_config("1\nproperty\n3\nA greedy\nB greedy\nC lucky\n", 0),
            Err(ConfigError::UnknownStrategy { line: 6, .. })
        ));
    }

    #[test]
    fn test_truncated_input() {
        assert!(matches!(
            parse_config("2\nproperty\n", 0),
            Err(ConfigError::UnexpectedEof { line: 3, expected: "a field" })
        ));
        assert!(matches!(
            parse_config("1\nproperty\n3\nA greedy\n", 0),
            Err(ConfigError::UnexpectedEof { expected: "a player", .. })
        ));
    }

    #[test]
    fn test_roll_errors() {
        let base = "1\nproperty\n3\nA greedy\nB greedy\nC greedy\n";

        assert!(matches!(
            parse_config(&format!("{base}1 7 2\n"), 0),
            Err(ConfigError::InvalidRoll { line: 7, ref value }) if value == "7"
        ));
        assert!(matches!(
            parse_config(&format!("{base}1 x\n"), 0),
            Err(ConfigError::InvalidRoll { line: 7, .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config("/definitely/not/here.txt", 0).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }
}
