use std::fs;
use std::io;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use log::trace;
use rust_decimal::Decimal;
use rust_embed::RustEmbed;
use serde::de::{self, DeserializeOwned};
use serde::Deserialize;

#[derive(RustEmbed)]
#[folder = "resources/"]
pub struct Resources;

pub fn toml_from_reader<R, T>(reader: R) -> anyhow::Result<T>
where
    R: Read,
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(reader);
    let mut data = String::with_capacity(16 * 1024);
    reader.read_to_string(&mut data)?;
    Ok(toml::from_str(&data)?)
}

/// TOML has no decimal type, so hours may be written as integers, floats or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDecimal {
    Integer(i64),
    Float(f64),
    String(String),
}

/// Deserializes a decimal from its shortest textual form, so `3.6` stays `3.6`
/// instead of picking up the binary representation error of the float.
pub fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: de::Deserializer<'de>,
{
    match RawDecimal::deserialize(deserializer)? {
        RawDecimal::Integer(value) => Ok(Decimal::from(value)),
        RawDecimal::Float(value) if value.is_finite() => {
            Decimal::from_str(&value.to_string()).map_err(de::Error::custom)
        }
        RawDecimal::Float(value) => Err(de::Error::custom(format!(
            "`{}` is not a valid number of hours",
            value
        ))),
        RawDecimal::String(value) => Decimal::from_str(value.trim()).map_err(de::Error::custom),
    }
}

pub fn read(path: impl AsRef<Path>) -> io::Result<Vec<u8>> {
    trace!("reading from: {}", path.as_ref().display());
    fs::read(path)
}

pub fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> io::Result<()> {
    trace!("writing to: {}", path.as_ref().display());
    fs::write(path, contents)
}

pub fn create_dir_all(path: impl AsRef<Path>) -> io::Result<()> {
    trace!("creating directory: {}", path.as_ref().display());
    fs::create_dir_all(path)
}

pub trait StrExt {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N];
}

impl StrExt for str {
    fn split_exact<const N: usize>(&self, pat: &str) -> [Option<&str>; N] {
        let mut split = self.splitn(N, pat);
        [(); N].map(|_| split.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        #[serde(deserialize_with = "deserialize_decimal")]
        value: Decimal,
    }

    fn parse(input: &str) -> Result<Decimal, toml::de::Error> {
        toml::from_str::<Wrapper>(input).map(|wrapper| wrapper.value)
    }

    #[test]
    fn test_deserialize_decimal() {
        assert_eq!(parse("value = 3.6").unwrap(), dec!(3.6));
        assert_eq!(parse("value = 4").unwrap(), dec!(4));
        assert_eq!(parse("value = \"5.4\"").unwrap(), dec!(5.4));
        assert_eq!(parse("value = 0.1").unwrap().to_string(), "0.1");
        assert!(parse("value = \"many\"").is_err());
        assert!(parse("value = nan").is_err());
    }

    #[test]
    fn test_split_exact() {
        assert_eq!(
            "2025-03-07".split_exact::<3>("-"),
            [Some("2025"), Some("03"), Some("07")]
        );
        assert_eq!("2025-03".split_exact::<3>("-"), [Some("2025"), Some("03"), None]);
    }
}
