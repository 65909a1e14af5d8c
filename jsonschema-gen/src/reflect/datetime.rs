use crate::reflect::{Reflect, TypeInfo, TypeName, Value};
use chrono::{DateTime, TimeZone};

/// Timestamps are records whose members aren't exposed. They're only given a
/// meaningful schema through the well-known type table.
impl<Tz: TimeZone> Reflect for DateTime<Tz> {
    fn type_info() -> TypeInfo {
        TypeInfo::record::<Self>(TypeName::new("chrono", "DateTime"), Vec::new())
    }

    fn reflect_type(&self) -> TypeInfo {
        Self::type_info()
    }

    fn reflect(&self) -> Value<'_> {
        Value::Struct(Vec::new())
    }
}
