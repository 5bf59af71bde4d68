use std::ops::Deref;

use serde::Deserialize;

/// Human-readable duration, e.g. `"5s"`, `"2m"`, `"1d 2h 3m 4s"`. A bare
/// number counts as seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let mut out = std::time::Duration::default();
        for part in s.split_whitespace() {
            let seconds = parse_part(part)
                .ok_or_else(|| serde::de::Error::custom(format!("Invalid duration `{part}`")))?;
            out += std::time::Duration::from_secs(seconds);
        }
        Ok(Self(out))
    }
}

fn parse_part(part: &str) -> Option<u64> {
    let (number, factor) = if let Some(number) = part.strip_suffix('s') {
        (number, 1)
    } else if let Some(number) = part.strip_suffix('m') {
        (number, 60)
    } else if let Some(number) = part.strip_suffix('h') {
        (number, 3600)
    } else if let Some(number) = part.strip_suffix('d') {
        (number, 24 * 3600)
    } else {
        (part, 1)
    };
    number.parse::<u64>().ok().map(|value| value * factor)
}
