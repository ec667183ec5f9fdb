//! Settings for the `procscale` demonstration binary.
//!
//! Sources are layered, later ones overriding earlier ones:
//! 1. the defaults from [`Settings::default`],
//! 2. a settings file, by default `procscale.{json,toml,yaml,...}` in the
//!    working directory (optional),
//! 3. environment variables prefixed with `PROCSCALE_`, e.g.
//!    `PROCSCALE_BATCH=1,2,3` or `PROCSCALE_PROCESSOR=advanced`.
//!
//! The container threshold and the processor labels are fixed and are not
//! part of the settings.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;

use config::{Config, Environment, File};
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use crate::error::{ProcscaleError, Result};
use crate::pipeline::ProcessorType;

pub const CONFIG_BASE_NAME: &str = "procscale";
pub const ENV_PREFIX: &str = "PROCSCALE";
/// Largest accepted `fibonacci` setting. The recursion is exponential and
/// anything much larger takes minutes; past 93 the result overflows a `u64`.
pub const MAX_FIBONACCI: u32 = 40;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Values pushed into the scaling container.
    #[serde(deserialize_with = "int_list")]
    pub seed: Vec<i64>,
    /// Batch handed to the processor.
    #[serde(deserialize_with = "int_list")]
    pub batch: Vec<i32>,
    pub processor: ProcessorType,
    pub print_stats: bool,
    pub print_samples: bool,
    /// Prints `fibonacci(n)`, at most [`MAX_FIBONACCI`].
    pub fibonacci: Option<u32>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: String::from("procscale=info"),
            seed: vec![42],
            batch: vec![1, 2, 3, 4, 5],
            processor: ProcessorType::Basic,
            print_stats: false,
            print_samples: false,
            fibonacci: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::load_with(None, None)
    }
    /// Loads from an explicit file (which then must exist) and, when given,
    /// from a map standing in for the process environment.
    pub fn load_with(file: Option<&Path>, env: Option<HashMap<String, String>>) -> Result<Self> {
        let file_source = match file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_BASE_NAME).required(false),
        };
        // lists arrive from the environment as "1,2,3" and are split by int_list
        let env_source = Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env.map(|vars| vars.into_iter().collect::<config::Map<_, _>>()));
        let settings = Config::builder()
            .add_source(file_source)
            .add_source(env_source)
            .build()?
            .try_deserialize::<Settings>()?;
        settings.validate()?;
        Ok(settings)
    }
    pub fn validate(&self) -> Result<()> {
        if let Some(n) = self.fibonacci {
            if n > MAX_FIBONACCI {
                return Err(ProcscaleError::Config(format!(
                    "fibonacci must be at most {}, got {}",
                    MAX_FIBONACCI, n
                )));
            }
        }
        Ok(())
    }
    /// Parses a comma separated list of integers such as `"1, 2,3"`.
    /// Empty entries are skipped.
    pub fn parse_batch(text: &str) -> Result<Vec<i32>> {
        parse_list(text).map_err(|message| ProcscaleError::Parse { message })
    }
}

fn parse_list<T>(text: &str) -> std::result::Result<Vec<T>, String>
where
    T: FromStr,
    T::Err: Display,
{
    text.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<T>()
                .map_err(|e| format!("'{}' is not a valid list item: {}", token, e))
        })
        .collect()
}

// Accepts a sequence, a single integer or a comma separated string, since
// files give sequences while environment variables give scalars and text.
fn int_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr + TryFrom<i64>,
    <T as FromStr>::Err: Display,
    <T as TryFrom<i64>>::Error: Display,
{
    struct IntListVisitor<T>(PhantomData<T>);

    impl<'de, T> Visitor<'de> for IntListVisitor<T>
    where
        T: Deserialize<'de> + FromStr + TryFrom<i64>,
        <T as FromStr>::Err: Display,
        <T as TryFrom<i64>>::Error: Display,
    {
        type Value = Vec<T>;

        fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
            formatter.write_str("a list of integers, an integer or a comma separated string")
        }

        fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            T::try_from(value).map(|v| vec![v]).map_err(de::Error::custom)
        }

        fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            let value = i64::try_from(value).map_err(de::Error::custom)?;
            self.visit_i64(value)
        }

        fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_list(value).map_err(de::Error::custom)
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut values = Vec::new();
            while let Some(value) = seq.next_element()? {
                values.push(value);
            }
            Ok(values)
        }
    }

    deserializer.deserialize_any(IntListVisitor(PhantomData))
}
