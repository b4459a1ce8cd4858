use anyhow::{Result, anyhow, bail, ensure};
use core::fmt;
use logos::{Lexer, Logos};
use std::{str::FromStr, time};

/// The cadence at which a driver invokes [`Simulation::tick`].
///
/// The simulation itself is frame-rate independent — one call to `tick`
/// is one fixed step — so this type belongs entirely to the scheduling
/// layer: it only decides how often the step function runs in real
/// time, never how large the step is.
///
/// Parses from human-readable durations (`"16ms"`, `"1s 500ms"`) or a
/// frequency (`"60hz"`). The default matches a typical display refresh.
///
/// ```
/// use flowsim_core::TickInterval;
/// use std::time::Duration;
///
/// let interval: TickInterval = "20ms".parse().unwrap();
/// assert_eq!(interval.into_duration(), Duration::from_millis(20));
///
/// let interval: TickInterval = "50hz".parse().unwrap();
/// assert_eq!(interval.into_duration(), Duration::from_millis(20));
/// ```
///
/// [`Simulation::tick`]: crate::Simulation::tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TickInterval(time::Duration);

impl TickInterval {
    /// 16ms per tick, close to a 60Hz animation frame.
    pub const DEFAULT: Self = Self(time::Duration::from_millis(16));

    pub const fn new(interval: time::Duration) -> Self {
        Self(interval)
    }

    /// Tick interval for the given ticks-per-second frequency.
    pub fn from_frequency(hz: u64) -> Result<Self> {
        ensure!(hz != 0, "tick frequency must be non-zero");
        Ok(Self(time::Duration::from_nanos(1_000_000_000 / hz)))
    }

    #[inline]
    pub fn into_duration(self) -> time::Duration {
        self.0
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for TickInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        <time::Duration as fmt::Debug>::fmt(&self.0, f)
    }
}

impl FromStr for TickInterval {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lex = Lexer::new(s);

        let mut durations = Vec::new();

        while let Some(next) = lex.next() {
            let number: Token = next.map_err(|()| anyhow!("Failed to parse: {s}"))?;

            ensure!(
                number == Token::Value,
                "Expecting tick interval to start with a number. Cannot parse {s}"
            );
            let number: u64 = lex.slice().parse()?;

            let Some(Ok(measure)) = lex.next() else {
                bail!("Expecting a unit, failed to parse: {s}")
            };
            let duration = match measure {
                Token::NanoSeconds => time::Duration::from_nanos(number),
                Token::MicroSeconds => time::Duration::from_micros(number),
                Token::MilliSeconds => time::Duration::from_millis(number),
                Token::Seconds => time::Duration::from_secs(number),
                Token::Hertz => {
                    ensure!(
                        durations.is_empty() && lex.next().is_none(),
                        "A frequency cannot be combined with other components: {s}"
                    );
                    return Self::from_frequency(number);
                }
                Token::Value => bail!("Failed to parse `{s}', expecting a unit."),
            };
            durations.push(duration);
        }

        Ok(Self(durations.into_iter().sum()))
    }
}

#[derive(Logos, Debug, PartialEq)]
#[logos(skip r"[ \t\n\f]+")] // Ignore this regex pattern between tokens
enum Token {
    #[token("ns")]
    NanoSeconds,
    #[regex("us|μs")]
    MicroSeconds,
    #[token("ms")]
    MilliSeconds,
    #[token("s")]
    Seconds,
    #[regex("hz|Hz")]
    Hertz,

    #[regex("[0-9]+")]
    Value,
}
