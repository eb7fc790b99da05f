//! Maker creation and invocation.
//!
//! Assignment order for a produced record:
//! - spec entries in declaration order (keys take the next positional value,
//!   presets take their captured value)
//! - extra properties last
//!
//! A later write to an existing key replaces the value but keeps the key's
//! enumeration position, so extra properties win any name collision.

use std::sync::Arc;

use protoform_types::{FactorySpec, Properties, Record, SpecEntry, Value};
use tracing::{debug, trace};

/// Everything a maker captured at creation time. Never mutated afterwards.
#[derive(Debug)]
pub struct MakerConfig {
    prototype: Record,
    spec: FactorySpec,
    props: Properties,
}

/// A reusable record factory returned by [`create`].
///
/// Cheap to clone; clones share the same captured configuration and
/// prototype. Safe to call from multiple threads.
#[derive(Debug, Clone)]
pub struct Maker {
    config: Arc<MakerConfig>,
}

/// Create a maker from a prototype and a spec.
///
/// `None` selects the base object as prototype.
pub fn create(proto: Option<&Record>, spec: impl Into<FactorySpec>) -> Maker {
    create_with_props(proto, spec, Properties::new())
}

/// Create a maker that additionally copies `props` onto every record.
pub fn create_with_props(
    proto: Option<&Record>,
    spec: impl Into<FactorySpec>,
    props: Properties,
) -> Maker {
    let prototype = proto.cloned().unwrap_or_else(Record::base);
    let spec = spec.into();

    debug!(
        arity = spec.arity(),
        presets = spec.presets().count(),
        props = props.len(),
        default_prototype = proto.is_none(),
        "Created maker"
    );

    Maker {
        config: Arc::new(MakerConfig {
            prototype,
            spec,
            props,
        }),
    }
}

impl Maker {
    /// Produce a new record, binding `values` to the spec's keys left to right.
    ///
    /// Missing values become `Value::Undefined`; surplus values are ignored.
    pub fn make<I>(&self, values: I) -> Record
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let mut values = values.into_iter().map(Into::into);
        let mut properties = Properties::new();
        let mut supplied = 0usize;

        for entry in self.config.spec.entries() {
            match entry {
                SpecEntry::Key(key) => {
                    let value = match values.next() {
                        Some(value) => {
                            supplied += 1;
                            value
                        }
                        None => Value::Undefined,
                    };
                    properties.insert(key.clone(), value);
                }
                SpecEntry::Preset(key, value) => {
                    properties.insert(key.clone(), value.clone());
                }
            }
        }

        if values.next().is_some() {
            trace!(arity = self.arity(), "Ignoring surplus positional values");
        }

        properties.extend_from(&self.config.props);
        trace!(supplied, own = properties.len(), "Made record");

        Record::from_properties(Some(self.config.prototype.clone()), properties)
    }

    /// Produce a record without positional values.
    pub fn make_empty(&self) -> Record {
        self.make(std::iter::empty::<Value>())
    }

    /// Turn the maker into a plain closure.
    pub fn into_fn(self) -> impl Fn(Vec<Value>) -> Record + Clone + Send + Sync {
        move |values: Vec<Value>| self.make(values)
    }

    /// The prototype shared by every record this maker produces.
    pub fn prototype(&self) -> &Record {
        &self.config.prototype
    }

    pub fn spec(&self) -> &FactorySpec {
        &self.config.spec
    }

    pub fn props(&self) -> &Properties {
        &self.config.props
    }

    /// Number of positional values consumed per call.
    pub fn arity(&self) -> usize {
        self.config.spec.arity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::make;
    use protoform_types::{PropertyKey, Symbol};

    fn keys(names: &[&str]) -> Vec<PropertyKey> {
        names.iter().map(|n| PropertyKey::from(*n)).collect()
    }

    #[test]
    fn assigns_given_prototype() {
        let proto = Record::inheriting(None);
        let obj = create(Some(&proto), FactorySpec::new()).make_empty();

        assert!(obj.prototype().unwrap().ptr_eq(&proto));
        assert!(obj.is_empty());
    }

    #[test]
    fn missing_prototype_defaults_to_base() {
        let obj = create(None, FactorySpec::new()).make_empty();

        assert!(obj.prototype().unwrap().ptr_eq(&Record::base()));
        assert_eq!(obj.len(), 0);
    }

    #[test]
    fn binds_single_key() {
        let proto = Record::inheriting(None);
        let obj = make!(create(Some(&proto), ["key"]), "value");

        assert_eq!(obj.get_own(&"key".into()), Some(Value::from("value")));
        assert_eq!(obj.own_keys(), keys(&["key"]));
    }

    #[test]
    fn missing_values_are_undefined_own_properties() {
        let obj = create(Some(&Record::inheriting(None)), ["key1", "key2"]).make_empty();

        assert_eq!(obj.own_keys(), keys(&["key1", "key2"]));
        assert!(obj.has_own(&"key1".into()));
        assert_eq!(obj.get_own(&"key2".into()), Some(Value::Undefined));
    }

    #[test]
    fn partial_values_fill_leading_keys() {
        let obj = make!(create(None, ["a", "b", "c"]), 1);

        assert_eq!(obj.get_own(&"a".into()), Some(Value::Number(1.0)));
        assert_eq!(obj.get_own(&"b".into()), Some(Value::Undefined));
        assert_eq!(obj.get_own(&"c".into()), Some(Value::Undefined));
    }

    #[test]
    fn surplus_values_are_ignored() {
        let obj = make!(create(Some(&Record::inheriting(None)), ["a", "b"]), 1, 2, 3);

        assert_eq!(obj.own_keys(), keys(&["a", "b"]));
        assert_eq!(obj.get_own(&"a".into()), Some(Value::Number(1.0)));
        assert_eq!(obj.get_own(&"b".into()), Some(Value::Number(2.0)));
    }

    #[test]
    fn surplus_from_unbounded_iterator_terminates() {
        let obj = create(None, ["a"]).make(std::iter::repeat(7));
        assert_eq!(obj.get_own(&"a".into()), Some(Value::Number(7.0)));
    }

    #[test]
    fn props_with_default_prototype() {
        let props = Properties::new().with("a", 1).with("b", 2);
        let obj = create_with_props(None, FactorySpec::new(), props.clone()).make_empty();

        assert!(obj.prototype().unwrap().ptr_eq(&Record::base()));
        assert_eq!(obj.entries(), props);
    }

    #[test]
    fn props_win_over_bound_keys() {
        let props = Properties::new().with("a", "fixed");
        let maker = create_with_props(None, ["a", "b"], props);
        let obj = make!(maker, "given", "other");

        assert_eq!(obj.get_own(&"a".into()), Some(Value::from("fixed")));
        assert_eq!(obj.own_keys(), keys(&["a", "b"]));
    }

    #[test]
    fn repeated_keys_and_collisions_follow_write_order() {
        let spec = FactorySpec::new()
            .key("a")
            .preset("a", "p")
            .key("a")
            .key("b");
        let maker = create_with_props(None, spec, Properties::new().with("b", "prop"));
        let obj = make!(maker, 1, 2, 3);

        assert_eq!(obj.own_keys(), keys(&["a", "b"]));
        assert_eq!(obj.get_own(&"a".into()), Some(Value::Number(2.0)));
        assert_eq!(obj.get_own(&"b".into()), Some(Value::from("prop")));
    }

    #[test]
    fn props_win_over_presets() {
        let spec = FactorySpec::new().preset("role", "member").key("name");
        let maker = create_with_props(None, spec, Properties::new().with("role", "admin"));
        let obj = make!(maker, "Ada");

        assert_eq!(obj.own_keys(), keys(&["role", "name"]));
        assert_eq!(obj.get_own(&"role".into()), Some(Value::from("admin")));
    }

    #[test]
    fn explicit_undefined_consumes_a_position() {
        let maker = create(None, ["a", "b"]);
        let obj = maker.make([Value::Undefined, Value::from(2)]);

        assert_eq!(obj.get_own(&"a".into()), Some(Value::Undefined));
        assert_eq!(obj.get_own(&"b".into()), Some(Value::Number(2.0)));
    }

    #[test]
    fn presets_apply_without_arguments() {
        let spec = FactorySpec::new().key("name").preset("role", "member");
        let obj = create(None, spec).make_empty();

        assert_eq!(obj.get_own(&"role".into()), Some(Value::from("member")));
        assert_eq!(obj.get_own(&"name".into()), Some(Value::Undefined));
    }

    #[test]
    fn presets_do_not_consume_positional_values() {
        let spec = FactorySpec::new()
            .key("a")
            .preset("kind", "point")
            .key("b");
        let obj = make!(create(None, spec), 1, 2);

        assert_eq!(obj.own_keys(), keys(&["a", "kind", "b"]));
        assert_eq!(obj.get_own(&"a".into()), Some(Value::Number(1.0)));
        assert_eq!(obj.get_own(&"kind".into()), Some(Value::from("point")));
        assert_eq!(obj.get_own(&"b".into()), Some(Value::Number(2.0)));
    }

    #[test]
    fn symbol_keys_bind_positionally() {
        let id = Symbol::with_description("id");
        let spec = FactorySpec::new().key(&id).key("name");
        let obj = make!(create(None, spec), 10, "ten");

        assert_eq!(obj.get_own(&id.clone().into()), Some(Value::Number(10.0)));
        assert_eq!(obj.get_own(&"name".into()), Some(Value::from("ten")));
    }

    #[test]
    fn repeated_calls_produce_distinct_equal_records() {
        let maker = create(Some(&Record::new(None)), ["a"]);
        let first = make!(maker, 1);
        let second = make!(maker, 1);

        assert!(first.content_eq(&second));
        assert!(!first.ptr_eq(&second));
    }

    #[test]
    fn produced_records_share_prototype_identity() {
        let proto = Record::new(None);
        proto.set("greet", "hi");
        let maker = create(Some(&proto), ["name"]);
        let a = make!(maker, "a");
        let b = make!(maker, "b");

        assert!(a.prototype().unwrap().ptr_eq(b.prototype().unwrap()));
        assert_eq!(a.get(&"greet".into()), Some(Value::from("hi")));
        assert!(maker.prototype().ptr_eq(&proto));
    }

    #[test]
    fn making_does_not_touch_prototype_or_earlier_records() {
        let proto = Record::new(None);
        let maker = create_with_props(Some(&proto), ["a"], Properties::new().with("p", 1));
        let first = make!(maker, 1);
        first.set("a", 99);
        let second = make!(maker, 2);

        assert!(proto.is_empty());
        assert_eq!(second.get_own(&"a".into()), Some(Value::Number(2.0)));
        assert_eq!(first.get_own(&"a".into()), Some(Value::Number(99.0)));
    }

    #[test]
    fn create_leaves_spec_unchanged() {
        let spec = FactorySpec::from_keys(["a", "b"]);
        let maker = create(None, spec.clone());
        make!(maker, 1, 2, 3);
        assert_eq!(maker.spec(), &spec);
        assert_eq!(maker.arity(), 2);
        assert!(maker.props().is_empty());
    }

    #[test]
    fn into_fn_behaves_like_make() {
        let make_point = create(None, ["x", "y"]).into_fn();
        let p = make_point(vec![Value::from(1), Value::from(2)]);

        assert_eq!(p.get_own(&"y".into()), Some(Value::Number(2.0)));
    }

    #[test]
    fn maker_is_shareable_across_threads() {
        let maker = create(None, ["n"]);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let maker = maker.clone();
                std::thread::spawn(move || make!(maker, i))
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let record = handle.join().unwrap();
            assert_eq!(record.get_own(&"n".into()), Some(Value::from(i as i64)));
        }
    }
}
