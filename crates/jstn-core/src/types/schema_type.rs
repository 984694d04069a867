use std::collections::BTreeMap;

use super::kind::Kind;

/// A node of the schema tree.
///
/// `properties` is only meaningful for [`Kind::Object`] and `items` only for
/// [`Kind::Array`]. Trees built by the parser always respect this; hand-built
/// trees are the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Type {
    pub kind: Kind,
    /// The value may be absent, or JSON `null` for scalar kinds.
    pub optional: bool,
    pub properties: BTreeMap<String, Type>,
    /// Element type of an array. `None` means the array must be empty.
    pub items: Option<Box<Type>>,
}

impl Type {
    fn scalar(kind: Kind) -> Self {
        Self {
            kind,
            optional: false,
            properties: BTreeMap::new(),
            items: None,
        }
    }

    pub fn string() -> Self {
        Self::scalar(Kind::String)
    }

    pub fn number() -> Self {
        Self::scalar(Kind::Number)
    }

    pub fn boolean() -> Self {
        Self::scalar(Kind::Boolean)
    }

    pub fn null() -> Self {
        Self::scalar(Kind::Null)
    }

    pub fn any() -> Self {
        Self::scalar(Kind::Any)
    }

    /// Creates an array whose elements must all match `items`.
    pub fn array(items: Type) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::scalar(Kind::Array)
        }
    }

    /// Creates an array with no declared element type, which only accepts `[]`.
    pub fn empty_array() -> Self {
        Self::scalar(Kind::Array)
    }

    /// Creates an object from `(name, type)` pairs. Later duplicates replace
    /// earlier ones.
    pub fn object<I, K>(properties: I) -> Self
    where
        I: IntoIterator<Item = (K, Type)>,
        K: Into<String>,
    {
        Self {
            properties: properties
                .into_iter()
                .map(|(name, ty)| (name.into(), ty))
                .collect(),
            ..Self::scalar(Kind::Object)
        }
    }

    /// Marks this node as optional.
    pub fn into_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Looks up a declared property of an object node.
    pub fn property(&self, name: &str) -> Option<&Type> {
        self.properties.get(name)
    }

    pub fn is_object(&self) -> bool {
        self.kind == Kind::Object
    }

    pub fn is_array(&self) -> bool {
        self.kind == Kind::Array
    }

    /// Returns the names of the properties that must be present.
    pub fn required_properties(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .filter(|(_, ty)| !ty.optional)
            .map(|(name, _)| name.as_str())
    }
}
