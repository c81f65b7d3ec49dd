//! Declarative model mappers and the generic serialization engine.
//!
//! Every wire model is described by a [`Mapper`]: a table of
//! [`FieldDescriptor`]s keyed by local field name. One pair of functions,
//! [`serialize`] and [`deserialize`], walks any model against its mapper,
//! resolving composite references through a [`Registry`] by name. No model
//! carries bespoke serialization code of its own.

use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use log::debug;
use serde_json::Value as Json;
use std::collections::{BTreeMap, HashMap};

/// Primitive wire kinds a field can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    String,
    Number,
    Boolean,
    /// ISO-8601 string on the wire, UTC timestamp in the model.
    Date,
}

/// The declared type of a mapped field.
#[derive(Debug, Clone)]
pub enum FieldType {
    Primitive(PrimitiveKind),
    /// A nested model, referenced by class name and resolved through the
    /// registry when the field is reached.
    Composite(&'static str),
    /// An ordered list of elements, each conforming to the boxed
    /// descriptor.
    Sequence(Box<FieldDescriptor>),
    /// A string constrained to a set of known values. Checked strictly on
    /// serialize, accepted verbatim on deserialize.
    Enum(&'static [&'static str]),
}

/// Describes one field of a model: wire key, requiredness, and type.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    serialized_name: &'static str,
    required: bool,
    field_type: FieldType,
}

impl FieldDescriptor {
    /// Create an optional field descriptor with the given wire key.
    pub fn new(serialized_name: &'static str, field_type: FieldType) -> Self {
        Self {
            serialized_name,
            required: false,
            field_type,
        }
    }

    /// Create a descriptor for a sequence element. Elements have no wire
    /// key of their own.
    pub fn element(field_type: FieldType) -> Self {
        Self::new("", field_type)
    }

    /// Mark the field as required on both serialize and deserialize.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn serialized_name(&self) -> &str {
        self.serialized_name
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn field_type(&self) -> &FieldType {
        &self.field_type
    }
}

/// Declarative description of one model type's wire shape.
///
/// # Examples
/// ```
/// use mailsink_client::{FieldDescriptor, FieldType, Mapper, PrimitiveKind};
///
/// let mapper = Mapper::new("Link")
///     .field("href", FieldDescriptor::new("href", FieldType::Primitive(PrimitiveKind::String)))
///     .field("text", FieldDescriptor::new("text", FieldType::Primitive(PrimitiveKind::String)));
/// assert_eq!(mapper.class_name(), "Link");
/// ```
#[derive(Debug, Clone)]
pub struct Mapper {
    class_name: &'static str,
    properties: Vec<(&'static str, FieldDescriptor)>,
}

impl Mapper {
    /// Create an empty mapper for the given class name.
    pub fn new(class_name: &'static str) -> Self {
        Self {
            class_name,
            properties: Vec::new(),
        }
    }

    /// Append a field. Serialization walks fields in insertion order.
    ///
    /// # Panics
    /// Panics if the local name or the wire key duplicates an existing
    /// property; mapper tables are static configuration and duplicates in
    /// them are bugs.
    pub fn field(mut self, name: &'static str, descriptor: FieldDescriptor) -> Self {
        for (existing, existing_descriptor) in &self.properties {
            assert!(
                *existing != name,
                "mapper `{}` declares field `{name}` twice",
                self.class_name
            );
            assert!(
                existing_descriptor.serialized_name != descriptor.serialized_name,
                "mapper `{}` reuses wire key `{}`",
                self.class_name,
                descriptor.serialized_name
            );
        }
        self.properties.push((name, descriptor));
        self
    }

    pub fn class_name(&self) -> &str {
        self.class_name
    }

    /// Iterate over `(local_name, descriptor)` pairs in declaration order.
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, &FieldDescriptor)> {
        self.properties
            .iter()
            .map(|(name, descriptor)| (*name, descriptor))
    }
}

/// A dynamic value held by a model field.
///
/// `Null` represents an explicit wire `null`, which is distinct from a
/// field that is absent from the model altogether.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Date(DateTime<Utc>),
    Sequence(Vec<Value>),
    Model(Model),
}

impl Value {
    fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::Sequence(_) => "sequence",
            Value::Model(_) => "model",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Sequence(value)
    }
}

impl From<Model> for Value {
    fn from(value: Model) -> Self {
        Value::Model(value)
    }
}

/// An immutable model instance: a class name plus a set of field values.
///
/// Instances come out of [`deserialize`] or are assembled with
/// [`Model::with`] before a [`serialize`] call; the engine never mutates
/// one. Equality is field-by-field value equality.
///
/// # Examples
/// ```
/// use mailsink_client::Model;
///
/// let rule = Model::new("ForwardingRule")
///     .with("field", "subject")
///     .with("operator", "contains");
/// assert_eq!(rule.str("field"), Some("subject"));
/// assert_eq!(rule.get("value"), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    class_name: &'static str,
    fields: BTreeMap<&'static str, Value>,
}

impl Model {
    /// Create an empty model of the given class.
    pub fn new(class_name: &'static str) -> Self {
        Self {
            class_name,
            fields: BTreeMap::new(),
        }
    }

    /// Set a field by local name, consuming and returning the model.
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Self {
        self.fields.insert(name, value.into());
        self
    }

    pub fn class_name(&self) -> &str {
        self.class_name
    }

    /// Raw field lookup. `None` means the field is unset; an explicit wire
    /// `null` comes back as `Some(&Value::Null)`.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Whether the field is set at all, including set to null.
    pub fn is_set(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// String accessor; `None` if unset or of another kind.
    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(Value::String(value)) => Some(value),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(Value::Number(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.get(name) {
            Some(Value::Bool(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn date(&self, name: &str) -> Option<DateTime<Utc>> {
        match self.get(name) {
            Some(Value::Date(value)) => Some(*value),
            _ => None,
        }
    }

    pub fn sequence(&self, name: &str) -> Option<&[Value]> {
        match self.get(name) {
            Some(Value::Sequence(values)) => Some(values),
            _ => None,
        }
    }

    /// Nested model accessor; `None` if unset or of another kind.
    pub fn model(&self, name: &str) -> Option<&Model> {
        match self.get(name) {
            Some(Value::Model(value)) => Some(value),
            _ => None,
        }
    }
}

/// Lookup from class name to mapper.
///
/// Populated once at startup and read-only afterwards; composite fields
/// resolve their referenced mappers through it lazily, so mutually
/// recursive model graphs register in any order. The built-in model set
/// lives in [`registry()`](crate::registry), initialized behind a
/// `OnceLock`; tests and embedders can build standalone registries.
#[derive(Debug, Default)]
pub struct Registry {
    mappers: HashMap<&'static str, Mapper>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mapper under its class name.
    ///
    /// # Panics
    /// Panics if the class name is already registered; the registry is
    /// startup configuration and double registration is a bug.
    pub fn register(&mut self, mapper: Mapper) {
        let previous = self.mappers.insert(mapper.class_name, mapper);
        if let Some(previous) = previous {
            panic!("model type `{}` registered twice", previous.class_name);
        }
    }

    /// Look up a mapper by class name.
    pub fn resolve(&self, class_name: &str) -> Result<&Mapper> {
        self.mappers
            .get(class_name)
            .ok_or_else(|| Error::UnknownType(class_name.to_string()))
    }
}

/// Serialize a model to its wire payload.
///
/// Walks the model's mapper in declaration order: unset optional fields are
/// omitted from the output entirely, unset required fields are a
/// [`Error::Validation`], and composite references resolve through the
/// registry. Pure function; neither input is touched.
pub fn serialize(model: &Model, registry: &Registry) -> Result<Json> {
    let mapper = registry.resolve(model.class_name())?;
    serialize_model(model, mapper, registry)
}

fn serialize_model(model: &Model, mapper: &Mapper, registry: &Registry) -> Result<Json> {
    let mut out = serde_json::Map::new();
    for (name, descriptor) in mapper.properties() {
        match model.get(name) {
            None if descriptor.is_required() => return Err(Error::missing_field(name)),
            None => {}
            Some(value) => {
                let raw = serialize_value(name, value, descriptor.field_type(), registry)?;
                out.insert(descriptor.serialized_name().to_string(), raw);
            }
        }
    }
    Ok(Json::Object(out))
}

fn serialize_value(
    field: &str,
    value: &Value,
    field_type: &FieldType,
    registry: &Registry,
) -> Result<Json> {
    if let Value::Null = value {
        return Ok(Json::Null);
    }
    match field_type {
        FieldType::Primitive(kind) => serialize_primitive(field, value, *kind),
        FieldType::Enum(allowed) => match value {
            Value::String(text) if allowed.contains(&text.as_str()) => {
                Ok(Json::String(text.clone()))
            }
            Value::String(text) => Err(Error::validation(
                field,
                format!("value `{text}` is not one of {allowed:?}"),
            )),
            other => Err(type_mismatch(field, "string", other)),
        },
        FieldType::Composite(class_name) => match value {
            Value::Model(inner) => {
                let mapper = registry.resolve(class_name)?;
                serialize_model(inner, mapper, registry)
            }
            other => Err(type_mismatch(field, "model", other)),
        },
        FieldType::Sequence(element) => match value {
            Value::Sequence(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(serialize_value(field, item, element.field_type(), registry)?);
                }
                Ok(Json::Array(out))
            }
            other => Err(type_mismatch(field, "sequence", other)),
        },
    }
}

fn serialize_primitive(field: &str, value: &Value, kind: PrimitiveKind) -> Result<Json> {
    match (kind, value) {
        (PrimitiveKind::String, Value::String(text)) => Ok(Json::String(text.clone())),
        (PrimitiveKind::Boolean, Value::Bool(flag)) => Ok(Json::Bool(*flag)),
        (PrimitiveKind::Number, Value::Number(number)) => serde_json::Number::from_f64(*number)
            .map(Json::Number)
            .ok_or_else(|| Error::validation(field, format!("non-finite number {number}"))),
        (PrimitiveKind::Date, Value::Date(date)) => Ok(Json::String(
            date.to_rfc3339_opts(SecondsFormat::Millis, true),
        )),
        (_, other) => Err(type_mismatch(field, kind_label(kind), other)),
    }
}

/// Deserialize a raw wire payload into a model of the named class.
///
/// Wire keys missing from the mapper are ignored, so newer server fields
/// never break older clients. A wire `null` is kept as an explicit
/// [`Value::Null`]; an absent optional key leaves the field unset.
pub fn deserialize(class_name: &str, payload: &Json, registry: &Registry) -> Result<Model> {
    let mapper = registry.resolve(class_name)?;
    deserialize_model(mapper, payload, registry)
}

fn deserialize_model(mapper: &Mapper, payload: &Json, registry: &Registry) -> Result<Model> {
    let object = payload.as_object().ok_or_else(|| {
        Error::validation(
            mapper.class_name,
            format!("expected a JSON object, got {}", json_kind(payload)),
        )
    })?;

    let mut model = Model::new(mapper.class_name);
    for (name, descriptor) in mapper.properties() {
        match object.get(descriptor.serialized_name()) {
            None if descriptor.is_required() => return Err(Error::missing_field(name)),
            None => {}
            Some(raw) => {
                let value = deserialize_value(name, raw, descriptor.field_type(), registry)?;
                model = model.with(name, value);
            }
        }
    }
    Ok(model)
}

fn deserialize_value(
    field: &str,
    raw: &Json,
    field_type: &FieldType,
    registry: &Registry,
) -> Result<Value> {
    if raw.is_null() {
        return Ok(Value::Null);
    }
    match field_type {
        FieldType::Primitive(kind) => deserialize_primitive(field, raw, *kind),
        FieldType::Enum(allowed) => match raw.as_str() {
            Some(text) => {
                // Advisory only: the server may introduce values this
                // client has never heard of.
                if !allowed.contains(&text) {
                    debug!("enum field `{field}` carries unrecognized value `{text}`");
                }
                Ok(Value::String(text.to_string()))
            }
            None => Err(wire_mismatch(field, "string", raw)),
        },
        FieldType::Composite(class_name) => {
            let mapper = registry.resolve(class_name)?;
            deserialize_model(mapper, raw, registry).map(Value::Model)
        }
        FieldType::Sequence(element) => match raw.as_array() {
            Some(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(deserialize_value(field, item, element.field_type(), registry)?);
                }
                Ok(Value::Sequence(out))
            }
            None => Err(wire_mismatch(field, "array", raw)),
        },
    }
}

fn deserialize_primitive(field: &str, raw: &Json, kind: PrimitiveKind) -> Result<Value> {
    match kind {
        PrimitiveKind::String => raw
            .as_str()
            .map(|text| Value::String(text.to_string()))
            .ok_or_else(|| wire_mismatch(field, "string", raw)),
        PrimitiveKind::Number => raw
            .as_f64()
            .map(Value::Number)
            .ok_or_else(|| wire_mismatch(field, "number", raw)),
        PrimitiveKind::Boolean => raw
            .as_bool()
            .map(Value::Bool)
            .ok_or_else(|| wire_mismatch(field, "boolean", raw)),
        PrimitiveKind::Date => {
            let text = raw
                .as_str()
                .ok_or_else(|| wire_mismatch(field, "ISO-8601 string", raw))?;
            DateTime::parse_from_rfc3339(text)
                .map(|date| Value::Date(date.with_timezone(&Utc)))
                .map_err(|err| Error::validation(field, format!("malformed date `{text}`: {err}")))
        }
    }
}

fn type_mismatch(field: &str, expected: &str, got: &Value) -> Error {
    Error::validation(
        field,
        format!("expected {expected}, got {}", got.kind_name()),
    )
}

fn wire_mismatch(field: &str, expected: &str, got: &Json) -> Error {
    Error::validation(field, format!("expected {expected}, got {}", json_kind(got)))
}

fn kind_label(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::String => "string",
        PrimitiveKind::Number => "number",
        PrimitiveKind::Boolean => "boolean",
        PrimitiveKind::Date => "date",
    }
}

fn json_kind(value: &Json) -> &'static str {
    match value {
        Json::Null => "null",
        Json::Bool(_) => "boolean",
        Json::Number(_) => "number",
        Json::String(_) => "string",
        Json::Array(_) => "array",
        Json::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn string(name: &'static str) -> FieldDescriptor {
        FieldDescriptor::new(name, FieldType::Primitive(PrimitiveKind::String))
    }

    fn test_registry() -> Registry {
        let mut registry = Registry::new();
        registry.register(
            Mapper::new("Ticket")
                .field(
                    "id",
                    FieldDescriptor::new("id", FieldType::Primitive(PrimitiveKind::String))
                        .required(),
                )
                .field("subject", string("subject"))
                .field(
                    "opened",
                    FieldDescriptor::new("opened", FieldType::Primitive(PrimitiveKind::Date)),
                )
                .field(
                    "priority",
                    FieldDescriptor::new("priority", FieldType::Enum(&["low", "normal", "high"])),
                )
                .field(
                    "score",
                    FieldDescriptor::new("score", FieldType::Primitive(PrimitiveKind::Number)),
                )
                .field(
                    "reporter",
                    FieldDescriptor::new("reporter", FieldType::Composite("Contact")),
                )
                .field(
                    "tags",
                    FieldDescriptor::new(
                        "tags",
                        FieldType::Sequence(Box::new(FieldDescriptor::element(
                            FieldType::Primitive(PrimitiveKind::String),
                        ))),
                    ),
                ),
        );
        registry.register(
            Mapper::new("Contact")
                .field("name", string("name"))
                .field("email", string("emailAddress")),
        );
        registry
    }

    fn full_ticket() -> Model {
        Model::new("Ticket")
            .with("id", "t-1")
            .with("subject", "printer on fire")
            .with("opened", Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap())
            .with("priority", "high")
            .with("score", 4.5)
            .with(
                "reporter",
                Model::new("Contact")
                    .with("name", "Sam")
                    .with("email", "sam@example.com"),
            )
            .with(
                "tags",
                vec![Value::from("hardware"), Value::from("urgent")],
            )
    }

    #[test]
    fn round_trips_a_fully_populated_model() {
        let registry = test_registry();
        let ticket = full_ticket();
        let wire = serialize(&ticket, &registry).unwrap();
        let back = deserialize("Ticket", &wire, &registry).unwrap();
        assert_eq!(back, ticket);
    }

    #[test]
    fn serialized_keys_use_wire_names() {
        let registry = test_registry();
        let wire = serialize(&full_ticket(), &registry).unwrap();
        assert_eq!(
            wire["reporter"]["emailAddress"],
            json!("sam@example.com")
        );
        assert!(wire["reporter"].get("email").is_none());
    }

    #[test]
    fn unset_optional_fields_are_omitted_not_null() {
        let registry = test_registry();
        let ticket = Model::new("Ticket").with("id", "t-2");
        let wire = serialize(&ticket, &registry).unwrap();
        let object = wire.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(!object.contains_key("subject"));
    }

    #[test]
    fn explicit_null_is_kept_distinct_from_unset() {
        let registry = test_registry();
        let wire = json!({ "id": "t-3", "subject": null });
        let ticket = deserialize("Ticket", &wire, &registry).unwrap();
        assert_eq!(ticket.get("subject"), Some(&Value::Null));
        assert!(!ticket.is_set("opened"));

        let back = serialize(&ticket, &registry).unwrap();
        assert_eq!(back["subject"], Json::Null);
        assert!(back.get("opened").is_none());
    }

    #[test]
    fn missing_required_field_names_the_field_on_serialize() {
        let registry = test_registry();
        let ticket = Model::new("Ticket").with("subject", "no id");
        match serialize(&ticket, &registry) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "id"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_required_field_names_the_field_on_deserialize() {
        let registry = test_registry();
        let wire = json!({ "subject": "no id" });
        match deserialize("Ticket", &wire, &registry) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "id"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn unregistered_composite_fails_with_unknown_type() {
        let mut registry = Registry::new();
        registry.register(
            Mapper::new("Orphan")
                .field("child", FieldDescriptor::new("child", FieldType::Composite("Nowhere"))),
        );
        let wire = json!({ "child": {} });
        match deserialize("Orphan", &wire, &registry) {
            Err(Error::UnknownType(name)) => assert_eq!(name, "Nowhere"),
            other => panic!("expected unknown type error, got {other:?}"),
        }
    }

    #[test]
    fn unknown_wire_keys_are_ignored() {
        let registry = test_registry();
        let wire = json!({ "id": "t-4", "brandNewServerField": 42 });
        let ticket = deserialize("Ticket", &wire, &registry).unwrap();
        assert_eq!(ticket.str("id"), Some("t-4"));
        assert!(!ticket.is_set("brandNewServerField"));
    }

    #[test]
    fn sequences_preserve_order_and_empty_stays_present() {
        let registry = test_registry();
        let wire = json!({ "id": "t-5", "tags": ["a", "b", "c"] });
        let ticket = deserialize("Ticket", &wire, &registry).unwrap();
        let tags = ticket.sequence("tags").unwrap();
        assert_eq!(
            tags,
            &[Value::from("a"), Value::from("b"), Value::from("c")]
        );

        let wire = json!({ "id": "t-6", "tags": [] });
        let ticket = deserialize("Ticket", &wire, &registry).unwrap();
        assert_eq!(ticket.sequence("tags"), Some(&[][..]));
        let back = serialize(&ticket, &registry).unwrap();
        assert_eq!(back["tags"], json!([]));
    }

    #[test]
    fn enum_values_are_strict_on_serialize() {
        let registry = test_registry();
        let ticket = Model::new("Ticket").with("id", "t-7").with("priority", "blazing");
        match serialize(&ticket, &registry) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "priority"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn enum_values_are_advisory_on_deserialize() {
        let registry = test_registry();
        let wire = json!({ "id": "t-8", "priority": "blazing" });
        let ticket = deserialize("Ticket", &wire, &registry).unwrap();
        assert_eq!(ticket.str("priority"), Some("blazing"));
    }

    #[test]
    fn dates_parse_from_iso8601_and_reject_garbage() {
        let registry = test_registry();
        let wire = json!({ "id": "t-9", "opened": "2026-03-14T09:26:53.589Z" });
        let ticket = deserialize("Ticket", &wire, &registry).unwrap();
        let opened = ticket.date("opened").unwrap();
        assert_eq!(opened.timestamp(), 1773480413);

        let wire = json!({ "id": "t-9", "opened": "yesterday-ish" });
        match deserialize("Ticket", &wire, &registry) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "opened"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn primitive_kind_mismatches_are_validation_errors() {
        let registry = test_registry();
        let wire = json!({ "id": "t-10", "score": "very high" });
        match deserialize("Ticket", &wire, &registry) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "score"),
            other => panic!("expected validation error, got {other:?}"),
        }

        let ticket = Model::new("Ticket").with("id", "t-10").with("score", "very high");
        assert!(matches!(
            serialize(&ticket, &registry),
            Err(Error::Validation { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn double_registration_panics() {
        let mut registry = Registry::new();
        registry.register(Mapper::new("Dup"));
        registry.register(Mapper::new("Dup"));
    }

    #[test]
    #[should_panic(expected = "declares field `href` twice")]
    fn duplicate_field_names_panic() {
        let _ = Mapper::new("Link")
            .field("href", string("href"))
            .field("href", string("hrefAgain"));
    }
}
