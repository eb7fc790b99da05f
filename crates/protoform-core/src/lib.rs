//! Object factories for protoform.
//!
//! `factory::create` captures a prototype, a spec and optional extra
//! properties, and returns a [`factory::Maker`] that produces one fresh
//! record per call. The `blueprint` module loads named makers from TOML.
//! Depends only on `protoform-types` for the data model.

pub mod blueprint;
pub mod builder;
pub mod factory;

pub use protoform_types as types;

pub use builder::FactoryBuilder;
pub use factory::{Maker, create, create_with_props};

/// Call a maker with any number of positional values.
///
/// ```
/// use protoform_core::{create, make};
/// use protoform_core::types::FactorySpec;
///
/// let point = create(None, FactorySpec::from_keys(["x", "y"]));
/// let p = make!(point, 1, 2);
/// assert_eq!(p.len(), 2);
/// let empty = make!(point);
/// assert!(empty.get_own(&"x".into()).unwrap().is_undefined());
/// ```
#[macro_export]
macro_rules! make {
    ($maker:expr $(,)?) => {
        $maker.make_empty()
    };
    ($maker:expr, $($value:expr),+ $(,)?) => {
        $maker.make([$($crate::types::Value::from($value)),+])
    };
}
