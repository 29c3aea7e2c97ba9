//! # Bean Introspection Module
//!
//! Beans describe their readable properties once, through [`Bean::describe`], instead of
//! being discovered by runtime reflection. Each registered property carries its declared
//! Rust type and an accessor that reads the property from any instance of the bean.
use crate::database::value::Value;
use crate::error::AccessError;
use chrono::DateTime;
use chrono::FixedOffset;
use chrono::Local;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::TimeZone;
use chrono::Utc;
use std::any::type_name;
use std::any::TypeId;
use std::hash::Hash;
use std::hash::Hasher;

#[cfg(test)]
pub(crate) mod test_bean;

/// A structured record that can be projected as a table row.
pub trait Bean: Sized + 'static {
    /// Registers the readable properties of this bean, in column order.
    fn describe(properties: &mut Properties<Self>);

    /// Simple name of the bean type, used as default table name and in error messages.
    fn type_name() -> &'static str {
        simple_name(type_name::<Self>())
    }
}

/// Strips module path and generic arguments from a fully qualified type name.
pub(crate) fn simple_name(name: &'static str) -> &'static str {
    let name = name.split('<').next().unwrap_or(name);
    name.rsplit("::").next().unwrap_or(name)
}

/// A type that can be exposed as a property value.
pub trait Property: Into<Value> + 'static {
    /// Type identity used for semantic type resolution.
    /// Nullable wrappers report the type they wrap.
    fn base_type_id() -> TypeId {
        TypeId::of::<Self>()
    }
}

macro_rules! impl_property {
    ($($kind:ty => $variant:ident),* $(,)?) => {
        $(
            impl Property for $kind {}

            impl From<$kind> for Value {
                fn from(value: $kind) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_property! {
    bool => Boolean,
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Int,
    i64 => BigInt,
    i128 => HugeInt,
    u8 => UTinyInt,
    u16 => USmallInt,
    u32 => UInt,
    u64 => UBigInt,
    f32 => Float,
    f64 => Double,
    String => Text,
    Vec<u8> => Blob,
    NaiveDate => Date,
    NaiveTime => Time,
    NaiveDateTime => Timestamp,
}

impl Property for Box<[u8]> {}

impl From<Box<[u8]>> for Value {
    fn from(value: Box<[u8]>) -> Self {
        Value::Blob(value.into_vec())
    }
}

impl Property for DateTime<Utc> {}
impl Property for DateTime<Local> {}
impl Property for DateTime<FixedOffset> {}

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        Value::Timestamp(value.naive_utc())
    }
}

impl<T: Property> Property for Option<T> {
    fn base_type_id() -> TypeId {
        T::base_type_id()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

/// Declared type of a property.
///
/// Two property types are equal when they name the exact same Rust type,
/// so `bool` and `Option<bool>` are distinct.
#[derive(Copy, Clone, Debug)]
pub struct PropertyType {
    id: TypeId,
    base: TypeId,
    name: &'static str,
}

impl PropertyType {
    /// Returns the property type of `V`.
    pub fn of<V: Property>() -> Self {
        Self {
            id: TypeId::of::<V>(),
            base: V::base_type_id(),
            name: type_name::<V>(),
        }
    }

    /// Fully qualified name of the declared type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if the declared type, ignoring a nullable wrapper, is `V`.
    pub(crate) fn is_base<V: 'static>(&self) -> bool {
        self.base == TypeId::of::<V>()
    }
}

impl PartialEq for PropertyType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PropertyType {}

impl Hash for PropertyType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Collects the properties described by `B`.
pub(crate) fn describe<B: Bean>() -> Properties<B> {
    let mut properties = Properties::new();
    B::describe(&mut properties);
    properties
}

pub(crate) type Getter<T> = Box<dyn Fn(&T) -> Result<Value, AccessError> + Send + Sync>;

/// A property registered by a bean: name, declared type and optional read accessor.
pub struct PropertyDescriptor<T> {
    name: String,
    property_type: PropertyType,
    getter: Option<Getter<T>>,
}

impl<T> PropertyDescriptor<T> {
    /// Property name as registered by the bean.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared type of the property.
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Returns true if the property has a read accessor.
    pub fn is_readable(&self) -> bool {
        self.getter.is_some()
    }

    pub(crate) fn into_getter(self) -> Option<Getter<T>> {
        self.getter
    }
}

impl<T> std::fmt::Debug for PropertyDescriptor<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("property_type", &self.property_type.name())
            .field("readable", &self.is_readable())
            .finish()
    }
}

/// Ordered registry of the properties of a bean type.
pub struct Properties<T> {
    descriptors: Vec<PropertyDescriptor<T>>,
}

impl<T: 'static> Properties<T> {
    pub(crate) fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Registers a property read by an infallible getter.
    pub fn property<V, F>(&mut self, name: &str, getter: F) -> &mut Self
    where
        V: Property,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.push::<V>(
            name,
            Some(Box::new(move |bean: &T| -> Result<Value, AccessError> {
                Ok(getter(bean).into())
            })),
        )
    }

    /// Registers a property read by a getter that may fail.
    pub fn try_property<V, F>(&mut self, name: &str, getter: F) -> &mut Self
    where
        V: Property,
        F: Fn(&T) -> Result<V, AccessError> + Send + Sync + 'static,
    {
        self.push::<V>(
            name,
            Some(Box::new(move |bean: &T| -> Result<Value, AccessError> {
                getter(bean).map(|value| value.into())
            })),
        )
    }

    /// Registers a property without read accessor. It never becomes a column.
    pub fn write_only<V>(&mut self, name: &str) -> &mut Self
    where
        V: Property,
    {
        self.push::<V>(name, None)
    }

    fn push<V: Property>(&mut self, name: &str, getter: Option<Getter<T>>) -> &mut Self {
        self.descriptors.push(PropertyDescriptor {
            name: name.to_owned(),
            property_type: PropertyType::of::<V>(),
            getter,
        });
        self
    }

    /// Number of registered properties.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates the registered properties in registration order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &PropertyDescriptor<T>> + '_ {
        self.descriptors.iter()
    }
}

impl<T> IntoIterator for Properties<T> {
    type Item = PropertyDescriptor<T>;
    type IntoIter = std::vec::IntoIter<PropertyDescriptor<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::test_bean::TestBean;
    use super::*;

    struct Empty;

    impl Bean for Empty {
        fn describe(_: &mut Properties<Self>) {}
    }

    #[test]
    fn empty_bean_has_no_properties() {
        let properties = describe::<Empty>();
        assert!(properties.is_empty());
        assert_eq!(properties.len(), 0);
    }

    #[test]
    fn simple_names() {
        assert_eq!(simple_name("bean_table::bean::test_bean::TestBean"), "TestBean");
        assert_eq!(simple_name("alloc::vec::Vec<u8>"), "Vec");
        assert_eq!(simple_name("Cat"), "Cat");
        assert_eq!(TestBean::type_name(), "TestBean");
    }

    #[test]
    fn property_type_identity() {
        assert_eq!(PropertyType::of::<bool>(), PropertyType::of::<bool>());
        assert_ne!(PropertyType::of::<bool>(), PropertyType::of::<Option<bool>>());
        assert!(PropertyType::of::<Option<bool>>().is_base::<bool>());
        assert!(PropertyType::of::<Option<Option<i32>>>().is_base::<i32>());
        assert!(!PropertyType::of::<Vec<u8>>().is_base::<bool>());
        assert_eq!(PropertyType::of::<i32>().name(), "i32");
    }

    #[test]
    fn option_values() {
        assert_eq!(Value::from(Some(3i32)), Value::Int(3));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn zoned_timestamps_normalize_to_utc() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2018, 3, 1, 9, 0, 0).unwrap();
        let expected = NaiveDate::from_ymd_opt(2018, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(Value::from(local), Value::Timestamp(expected));
    }

    #[test]
    fn describe_keeps_registration_order() {
        let properties = describe::<TestBean>();
        assert_eq!(properties.len(), 22);
        assert!(!properties.is_empty());
        let names: Vec<&str> = properties.iter().map(|it| it.name()).collect();
        assert_eq!(names.first(), Some(&"pByte"));
        assert_eq!(names.last(), Some(&"secret"));
        assert!(!properties.iter().last().unwrap().is_readable());
        assert!(properties.iter().next().unwrap().is_readable());
    }
}
