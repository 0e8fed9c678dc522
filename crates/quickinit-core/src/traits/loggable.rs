//! Explicit field enumeration for method-argument logging.
//!
//! Types that can appear as arguments of an intercepted service operation
//! implement [`Loggable`] and push their fields into a [`LogFields`]
//! collector. Absent (`None`) values are skipped, so the collector only
//! ever holds the non-null fields.

use std::fmt;

/// Ordered `name = value` pairs collected from one argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFields {
    entries: Vec<(&'static str, String)>,
}

impl LogFields {
    /// An empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a present field.
    pub fn field(&mut self, name: &'static str, value: &dyn fmt::Display) -> &mut Self {
        self.entries.push((name, value.to_string()));
        self
    }

    /// Record a field only when it holds a value.
    pub fn optional<T: fmt::Display>(&mut self, name: &'static str, value: Option<&T>) -> &mut Self {
        if let Some(value) = value {
            self.field(name, value);
        }
        self
    }

    /// Iterate over the collected pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(name, value)| (*name, value.as_str()))
    }

    /// Look up a field value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.iter().find(|(n, _)| *n == name).map(|(_, v)| v)
    }

    /// Number of collected fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for LogFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        Ok(())
    }
}

/// A value whose fields can be dumped by the logging interceptor.
pub trait Loggable: Send + Sync {
    /// Push every field of `self` into `fields`, shared fields first.
    fn log_fields(&self, fields: &mut LogFields);

    /// Collect the fields into a fresh [`LogFields`].
    fn to_log_fields(&self) -> LogFields {
        let mut fields = LogFields::new();
        self.log_fields(&mut fields);
        fields
    }

    /// Type name shown next to the argument index.
    fn type_label(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! loggable_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                fn log_fields(&self, fields: &mut LogFields) {
                    fields.field("value", &self);
                }
            }
        )*
    };
}

loggable_scalar!(i32, i64, u32, u64, bool, String, str);

impl<T: Loggable> Loggable for Option<T> {
    fn log_fields(&self, fields: &mut LogFields) {
        if let Some(inner) = self {
            inner.log_fields(fields);
        }
    }

    fn type_label(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Article {
        id: i64,
        title: String,
        summary: Option<String>,
    }

    impl Loggable for Article {
        fn log_fields(&self, fields: &mut LogFields) {
            fields
                .field("id", &self.id)
                .field("title", &self.title)
                .optional("summary", self.summary.as_ref());
        }
    }

    #[test]
    fn test_none_fields_are_skipped() {
        let article = Article {
            id: 7,
            title: "Hello".to_string(),
            summary: None,
        };
        let fields = article.to_log_fields();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("title"), Some("Hello"));
        assert_eq!(fields.get("summary"), None);
        assert_eq!(fields.to_string(), "id=7, title=Hello");
    }

    #[test]
    fn test_scalar_and_option() {
        assert_eq!(42i64.to_log_fields().get("value"), Some("42"));
        assert!(None::<i64>.to_log_fields().is_empty());
        assert_eq!(Some(5u64).to_log_fields().to_string(), "value=5");
    }
}
