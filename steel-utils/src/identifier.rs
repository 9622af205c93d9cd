use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A namespaced resource key such as `minecraft:slime`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier {
    /// The namespace, `minecraft` for vanilla content.
    pub namespace: Cow<'static, str>,
    /// The path within the namespace.
    pub path: Cow<'static, str>,
}

impl Identifier {
    /// The namespace used by all vanilla content.
    pub const VANILLA_NAMESPACE: &'static str = "minecraft";

    /// Creates an identifier from owned or borrowed parts.
    #[must_use]
    pub fn new(namespace: impl Into<Cow<'static, str>>, path: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Creates a vanilla identifier usable in `const`/`static` context.
    #[must_use]
    pub const fn vanilla_static(path: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(Self::VANILLA_NAMESPACE),
            path: Cow::Borrowed(path),
        }
    }

    /// Parses `namespace:path`, defaulting the namespace to `minecraft`.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.split_once(':') {
            Some((namespace, path)) => Self::new(namespace.to_owned(), path.to_owned()),
            None => Self::new(Self::VANILLA_NAMESPACE, value.to_owned()),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_namespace() {
        assert_eq!(Identifier::parse("slime"), Identifier::vanilla_static("slime"));
        assert_eq!(
            Identifier::parse("steel:arena").to_string(),
            "steel:arena".to_string()
        );
    }
}
