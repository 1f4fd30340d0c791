//! `serde` support, behind the `serde` feature.
//!
//! Validated values serialize as their string form. Deserializing re-runs the
//! native platform's factory, so an invalid string fails to deserialize
//! rather than producing an unchecked value. Existence-gated paths serialize
//! only: existence cannot be carried through a document.

use std::fmt;
use std::marker::PhantomData;

use ::serde::de::{self, Deserialize, Deserializer, Visitor};
use ::serde::ser::{Serialize, Serializer};

use crate::error::PathError;
use crate::path::{
    AbsoluteDirectoryPath, AbsoluteFilePath, AbsolutePath, ExistingDirectoryPath,
    ExistingFilePath, FileName, RelativeDirectoryPath, RelativeFilePath, RelativePath,
};
use crate::platform::Platform;
use crate::string::{NonEmptyString, SomeString, WhitespaceString};

struct ValidatingVisitor<T> {
    expecting: &'static str,
    marker: PhantomData<T>,
}

impl<'de, T> Visitor<'de> for ValidatingVisitor<T>
where
    T: TryFrom<String, Error = PathError>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::try_from(v.to_string()).map_err(E::custom)
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<T, E> {
        T::try_from(v).map_err(E::custom)
    }
}

macro_rules! serde_string {
    ($($ty:ty => $expecting:literal),+ $(,)?) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_string(ValidatingVisitor {
                    expecting: $expecting,
                    marker: PhantomData,
                })
            }
        }
    )+};
}

serde_string!(
    NonEmptyString => "a non-empty string",
    SomeString => "a string with a non-whitespace character",
    WhitespaceString => "a whitespace-only string",
    FileName => "a file name",
    AbsolutePath => "an absolute path",
    AbsoluteDirectoryPath => "an absolute directory path",
    AbsoluteFilePath => "an absolute file path",
    RelativePath => "a relative path",
    RelativeDirectoryPath => "a relative directory path",
    RelativeFilePath => "a relative file path",
);

impl Serialize for ExistingDirectoryPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for ExistingFilePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
