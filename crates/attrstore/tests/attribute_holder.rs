//! Owner-level behavior of the attribute API: plain storage, setter and
//! getter overrides, held names, and per-instance accessor sets.

use attrstore::{
    AttrError, AttrValue, Accessors, AttributeStore, Getter, HasAttributes, Result, Setter,
    ValueKind,
};
use once_cell::sync::Lazy;

// --- Owner with a setter/getter pair for `baz` ---

#[derive(Default)]
struct ExampleForSetAttributes {
    attrs: AttributeStore,
    baz: String,
}

impl ExampleForSetAttributes {
    fn set_baz(&mut self, value: AttrValue) -> Result<()> {
        let text = value
            .as_str()
            .ok_or_else(|| AttrError::type_mismatch("baz", ValueKind::Str, value.kind()))?;
        self.baz = text.to_uppercase();
        Ok(())
    }

    fn get_baz(&self) -> Result<Option<AttrValue>> {
        Ok(Some(AttrValue::from(self.baz.as_str())))
    }
}

impl HasAttributes for ExampleForSetAttributes {
    fn attributes(&self) -> &AttributeStore {
        &self.attrs
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attrs
    }

    fn getter(&self, name: &str) -> Option<Getter<Self>> {
        match name {
            "baz" => Some(Self::get_baz),
            _ => None,
        }
    }

    fn setter(&self, name: &str) -> Option<Setter<Self>> {
        match name {
            "baz" => Some(Self::set_baz),
            _ => None,
        }
    }
}

// --- Owner that declares `foo` at construction ---

struct ExampleForHoldAttributes {
    attrs: AttributeStore,
}

impl ExampleForHoldAttributes {
    fn new() -> Self {
        let mut example = Self {
            attrs: AttributeStore::new(),
        };
        example.hold("foo");
        example
    }
}

impl HasAttributes for ExampleForHoldAttributes {
    fn attributes(&self) -> &AttributeStore {
        &self.attrs
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attrs
    }
}

#[test]
fn set_attributes() {
    let mut example = ExampleForSetAttributes::default();
    example.set("foo", "bar").unwrap();
    example.set("bar", "baz").unwrap();

    assert_eq!(example.get("foo").unwrap(), Some(AttrValue::from("bar")));
    assert_eq!(example.get("bar").unwrap(), Some(AttrValue::from("baz")));
}

#[test]
fn set_attributes_by_setter_method() {
    let mut example = ExampleForSetAttributes::default();
    example.set("baz", "qux").unwrap();

    assert_eq!(example.get("baz").unwrap(), Some(AttrValue::from("QUX")));
}

#[test]
fn setter_bypasses_generic_store() {
    let mut example = ExampleForSetAttributes::default();
    example.set("baz", "qux").unwrap();

    assert!(!example.has("baz"));
    assert_eq!(example.get_attribute("baz"), None);
}

#[test]
fn setter_error_reaches_caller_unchanged() {
    let mut example = ExampleForSetAttributes::default();
    let err = example.set("baz", 42_i64).unwrap_err();

    match err {
        AttrError::TypeMismatch {
            name,
            expected,
            found,
        } => {
            assert_eq!(name, "baz");
            assert_eq!(expected, ValueKind::Str);
            assert_eq!(found, ValueKind::Int);
        }
        other => panic!("Expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn hold_attribute_names() {
    let mut example = ExampleForHoldAttributes::new();

    assert!(example.has("foo"));
    assert_eq!(example.get("foo").unwrap(), Some(AttrValue::Null));

    assert!(!example.has("bar"));

    example.set("bar", "bar").unwrap();

    assert!(example.has("bar"));
    assert_eq!(example.get("bar").unwrap(), Some(AttrValue::from("bar")));

    example.hold("bar");

    assert!(example.has("bar"));
    assert_eq!(example.get("bar").unwrap(), Some(AttrValue::from("bar")));
}

#[test]
fn delete_then_has_is_false() {
    let mut example = ExampleForHoldAttributes::new();
    example.delete("foo");
    example.delete("never-set");

    assert!(!example.has("foo"));
    assert!(!example.has("never-set"));
}

#[test]
fn clear_forgets_held_and_set_names() {
    let mut example = ExampleForHoldAttributes::new();
    example.set("bar", "bar").unwrap();
    example.clear_attributes();

    assert!(!example.has("foo"));
    assert!(!example.has("bar"));
}

// --- Owner backed by a static registry ---

#[derive(Default)]
struct Profile {
    attrs: AttributeStore,
    email: Option<String>,
}

static PROFILE_ACCESSORS: Lazy<Accessors<Profile>> = Lazy::new(|| {
    Accessors::<Profile>::new()
        .getter("email", Profile::get_email)
        .setter("email", Profile::set_email)
});

impl Profile {
    fn get_email(&self) -> Result<Option<AttrValue>> {
        Ok(self.email.clone().map(AttrValue::from))
    }

    fn set_email(&mut self, value: AttrValue) -> Result<()> {
        let text = value.as_str().unwrap_or_default().trim().to_lowercase();
        if !text.contains('@') {
            return Err(AttrError::rejected("email", "missing `@`"));
        }
        self.email = Some(text);
        Ok(())
    }
}

impl HasAttributes for Profile {
    fn attributes(&self) -> &AttributeStore {
        &self.attrs
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attrs
    }

    fn getter(&self, name: &str) -> Option<Getter<Self>> {
        PROFILE_ACCESSORS.get(name)
    }

    fn setter(&self, name: &str) -> Option<Setter<Self>> {
        PROFILE_ACCESSORS.set(name)
    }
}

#[test]
fn registry_accessors_handle_their_names() {
    let mut profile = Profile::default();
    profile.set("email", "  Ada@Example.COM ").unwrap();
    profile.set("nickname", "ada").unwrap();

    assert_eq!(
        profile.get("email").unwrap(),
        Some(AttrValue::from("ada@example.com"))
    );
    assert_eq!(profile.get("nickname").unwrap(), Some(AttrValue::from("ada")));
    assert!(!profile.has("email"));
    assert!(profile.has("nickname"));
}

#[test]
fn registry_setter_rejection_leaves_state_alone() {
    let mut profile = Profile::default();
    let err = profile.set("email", "nope").unwrap_err();

    assert!(matches!(err, AttrError::Rejected { ref name, .. } if name == "email"));
    assert_eq!(profile.get("email").unwrap(), None);
}

#[test]
fn held_name_with_getter_is_present_but_getter_still_reads() {
    let mut profile = Profile::default();
    profile.hold("email");

    assert!(profile.has("email"));
    assert_eq!(profile.get("email").unwrap(), None);
    assert_eq!(profile.get_attribute("email"), Some(&AttrValue::Null));
}

// --- Accessor set chosen per instance ---

#[derive(Clone, Copy, PartialEq, Eq)]
enum Shape {
    Circle,
    Square,
}

struct Figure {
    shape: Shape,
    attrs: AttributeStore,
}

impl Figure {
    fn new(shape: Shape) -> Self {
        Self {
            shape,
            attrs: AttributeStore::new(),
        }
    }

    fn circle_area(&self) -> Result<Option<AttrValue>> {
        let r = self.get_attribute("size").and_then(AttrValue::as_float);
        Ok(r.map(|r| AttrValue::Float(std::f64::consts::PI * r * r)))
    }
}

impl HasAttributes for Figure {
    fn attributes(&self) -> &AttributeStore {
        &self.attrs
    }

    fn attributes_mut(&mut self) -> &mut AttributeStore {
        &mut self.attrs
    }

    fn getter(&self, name: &str) -> Option<Getter<Self>> {
        match (self.shape, name) {
            (Shape::Circle, "area") => Some(Self::circle_area),
            _ => None,
        }
    }
}

#[test]
fn accessor_set_can_differ_per_instance() {
    let mut circle = Figure::new(Shape::Circle);
    circle.set("size", 1.0).unwrap();

    let mut square = Figure::new(Shape::Square);
    square.set("size", 2.0).unwrap();
    square.set("area", 4.0).unwrap();

    let area = circle.get("area").unwrap().and_then(|v| v.as_float()).unwrap();
    assert!((area - std::f64::consts::PI).abs() < 1e-9);

    assert_eq!(square.get("area").unwrap(), Some(AttrValue::Float(4.0)));
}

#[test]
fn index_sugar_reads_store() {
    let mut example = ExampleForHoldAttributes::new();
    example.set("bar", "bar").unwrap();

    let store = example.attributes();
    assert_eq!(store["bar"], AttrValue::from("bar"));
    assert!(store["foo"].is_null());
    assert!(store["missing"].is_null());
}
