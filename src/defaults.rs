//! defaults
//!
//! Fill absent optional fields from a defaults value.
//!
//! Types opt in by implementing [`WithDefaults`], usually through
//! [`impl_with_defaults!`](crate::impl_with_defaults) which generates the
//! field-by-field merge at compile time. Present fields are never
//! overwritten.
//!
//! # Example
//!
//! ```
//! use pippi::defaults::WithDefaults;
//! use pippi::impl_with_defaults;
//!
//! #[derive(Debug, Clone, Default)]
//! struct Person {
//!     name: Option<String>,
//!     age: Option<u32>,
//! }
//!
//! impl_with_defaults!(Person { name, age });
//!
//! let mut person = Person { name: Some("Zhang".into()), age: None };
//! let fallback = Person { name: Some("Li".into()), age: Some(18) };
//! person.fill_absent_from(&fallback);
//!
//! assert_eq!(person.name.as_deref(), Some("Zhang"));
//! assert_eq!(person.age, Some(18));
//! ```

/// Types whose absent fields can be filled from another instance.
pub trait WithDefaults {
    /// Copy every field that is absent on `self` and present on `defaults`.
    fn fill_absent_from(&mut self, defaults: &Self);
}

/// Fill one optional slot from `default` when it is empty.
pub fn fill_absent<T: Clone>(target: &mut Option<T>, default: &Option<T>) {
    if target.is_none() {
        target.clone_from(default);
    }
}

/// Consume `target`, fill it from `defaults`, and return it.
pub fn with_defaults<T: WithDefaults>(mut target: T, defaults: &T) -> T {
    target.fill_absent_from(defaults);
    target
}

impl<T: Clone> WithDefaults for Option<T> {
    fn fill_absent_from(&mut self, defaults: &Self) {
        fill_absent(self, defaults);
    }
}

/// Implement [`WithDefaults`] for a struct by listing its optional fields.
///
/// Every listed field must itself implement [`WithDefaults`]; `Option<T>`
/// does, and so do nested structs that used this macro.
#[macro_export]
macro_rules! impl_with_defaults {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::defaults::WithDefaults for $ty {
            fn fill_absent_from(&mut self, defaults: &Self) {
                $(
                    $crate::defaults::WithDefaults::fill_absent_from(
                        &mut self.$field,
                        &defaults.$field,
                    );
                )*
            }
        }
    };
}
