use std::collections::HashSet;
use std::fmt;

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::value::RawValue;

use super::Mode;
use crate::types::{Kind, Type};

/// Walks one JSON value against one schema node as the decoder produces it.
///
/// Container nodes are visited token by token. A scalar node reads its value
/// as raw text, which is one JSON scalar unless the document disagrees with
/// the schema at that point. Failures surface as `custom` errors of the
/// underlying decoder, which aborts the walk at the first mismatch.
#[derive(Clone, Copy)]
pub(crate) struct TypeSeed<'s> {
    schema: &'s Type,
    mode: Mode,
}

impl<'s> TypeSeed<'s> {
    pub(crate) fn new(schema: &'s Type, mode: Mode) -> Self {
        Self { schema, mode }
    }

    fn child(&self, schema: &'s Type) -> Self {
        Self::new(schema, self.mode)
    }

    fn expect_kind<E: de::Error>(&self, found: Kind) -> Result<(), E> {
        if self.schema.kind == found {
            Ok(())
        } else {
            Err(self.mismatch(found))
        }
    }

    fn mismatch<E: de::Error>(&self, found: impl fmt::Display) -> E {
        E::custom(format_args!("expected {}, found {found}", self.schema.kind))
    }

    fn expect_null<E: de::Error>(&self) -> Result<(), E> {
        match self.schema.kind {
            Kind::Null => Ok(()),
            Kind::String | Kind::Number | Kind::Boolean if self.schema.optional => Ok(()),
            Kind::String | Kind::Number | Kind::Boolean => Err(E::custom(format_args!(
                "required {} is null",
                self.schema.kind
            ))),
            Kind::Object | Kind::Array | Kind::Any => Err(self.mismatch("null")),
        }
    }

    /// Checks a scalar node against the raw text of one JSON value.
    ///
    /// The decoder has already checked the syntax, so the first byte is enough
    /// to tell the kind. Numbers are never converted, so any exponent or digit
    /// count the grammar allows is accepted.
    fn expect_raw<E: de::Error>(&self, raw: &RawValue) -> Result<(), E> {
        match raw.get().as_bytes().first() {
            Some(b'n') => self.expect_null(),
            Some(b'"') => self.expect_kind(Kind::String),
            Some(b't' | b'f') => self.expect_kind(Kind::Boolean),
            Some(b'[') => Err(self.mismatch(Kind::Array)),
            Some(b'{') => Err(self.mismatch(Kind::Object)),
            _ => self.expect_kind(Kind::Number),
        }
    }
}

impl<'de> DeserializeSeed<'de> for TypeSeed<'_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        match self.schema.kind {
            Kind::Any if self.mode == Mode::Strict => Err(de::Error::custom(
                "`any` values are not accepted in strict mode",
            )),
            Kind::Any => IgnoredAny::deserialize(deserializer).map(|_| ()),
            Kind::String | Kind::Number | Kind::Boolean | Kind::Null => {
                let raw = Box::<RawValue>::deserialize(deserializer)?;
                self.expect_raw(&raw)
            }
            Kind::Object | Kind::Array => deserializer.deserialize_any(self),
        }
    }
}

impl<'de> Visitor<'de> for TypeSeed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.schema.optional {
            write!(f, "an optional {}", self.schema.kind)
        } else {
            write!(f, "a {}", self.schema.kind)
        }
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<(), E> {
        self.expect_kind(Kind::Boolean)
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<(), E> {
        self.expect_kind(Kind::Number)
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<(), E> {
        self.expect_kind(Kind::Number)
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<(), E> {
        self.expect_kind(Kind::Number)
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<(), E> {
        self.expect_kind(Kind::String)
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        self.expect_null()
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        self.expect_kind(Kind::Array)?;

        match self.schema.items.as_deref() {
            Some(items) => {
                let seed = self.child(items);
                while seq.next_element_seed(seed)?.is_some() {}
            }
            None => {
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::custom(
                        "array has no declared item type and must be empty",
                    ));
                }
            }
        }

        Ok(())
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        self.expect_kind(Kind::Object)?;

        let properties = &self.schema.properties;
        let mut seen: HashSet<&str> = HashSet::with_capacity(properties.len());

        while let Some(key) = map.next_key::<String>()? {
            match properties.get_key_value(key.as_str()) {
                Some((name, child)) => {
                    map.next_value_seed(self.child(child))?;
                    seen.insert(name.as_str());
                }
                None if self.mode == Mode::Strict => {
                    return Err(de::Error::custom(format_args!(
                        "undeclared property `{key}`"
                    )));
                }
                None => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        if let Some(missing) = self
            .schema
            .required_properties()
            .find(|name| !seen.contains(name))
        {
            return Err(de::Error::custom(format_args!(
                "missing required property `{missing}`"
            )));
        }

        Ok(())
    }
}
