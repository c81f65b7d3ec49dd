//! Mapper tables for every wire model the service exposes.
//!
//! Each function below is a declarative table describing one resource's
//! wire shape; the generic engine in [`crate::mapper`] does all the actual
//! (de)serialization work. Wire keys are camelCase, local names snake_case.

use crate::mapper::{FieldDescriptor, FieldType, Mapper, Model, PrimitiveKind, Registry};
use std::sync::OnceLock;

fn string(name: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldType::Primitive(PrimitiveKind::String))
}

fn number(name: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldType::Primitive(PrimitiveKind::Number))
}

fn date(name: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldType::Primitive(PrimitiveKind::Date))
}

fn enumeration(name: &'static str, allowed: &'static [&'static str]) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldType::Enum(allowed))
}

fn composite(name: &'static str, class_name: &'static str) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldType::Composite(class_name))
}

fn sequence_of(name: &'static str, element: FieldDescriptor) -> FieldDescriptor {
    FieldDescriptor::new(name, FieldType::Sequence(Box::new(element)))
}

fn composite_element(class_name: &'static str) -> FieldDescriptor {
    FieldDescriptor::element(FieldType::Composite(class_name))
}

fn string_element() -> FieldDescriptor {
    FieldDescriptor::element(FieldType::Primitive(PrimitiveKind::String))
}

fn email_address() -> Mapper {
    Mapper::new("EmailAddress")
        .field("name", string("name"))
        .field("email", string("email"))
}

fn message_header() -> Mapper {
    Mapper::new("MessageHeader")
        .field("field", string("field"))
        .field("value", string("value"))
}

fn message_metadata() -> Mapper {
    Mapper::new("MessageMetadata").field(
        "headers",
        sequence_of("headers", composite_element("MessageHeader")),
    )
}

fn link() -> Mapper {
    Mapper::new("Link")
        .field("href", string("href"))
        .field("text", string("text"))
}

fn image() -> Mapper {
    Mapper::new("Image")
        .field("src", string("src"))
        .field("alt", string("alt"))
}

fn message_content() -> Mapper {
    Mapper::new("MessageContent")
        .field("body", string("body"))
        .field("links", sequence_of("links", composite_element("Link")))
        .field("images", sequence_of("images", composite_element("Image")))
}

fn attachment() -> Mapper {
    Mapper::new("Attachment")
        .field("id", string("id").required())
        .field("content_type", string("contentType"))
        .field("file_name", string("fileName"))
        .field("length", number("length"))
        .field("url", string("url"))
}

fn message() -> Mapper {
    Mapper::new("Message")
        .field("id", string("id").required())
        .field("server", string("server"))
        .field("received", date("received"))
        .field("subject", string("subject"))
        .field("from", sequence_of("from", composite_element("EmailAddress")))
        .field("to", sequence_of("to", composite_element("EmailAddress")))
        .field("cc", sequence_of("cc", composite_element("EmailAddress")))
        .field("bcc", sequence_of("bcc", composite_element("EmailAddress")))
        .field("html", composite("html", "MessageContent"))
        .field("text", composite("text", "MessageContent"))
        .field(
            "attachments",
            sequence_of("attachments", composite_element("Attachment")),
        )
        .field("metadata", composite("metadata", "MessageMetadata"))
}

// Summaries carry an attachment count where the full message carries the
// attachments themselves.
fn message_summary() -> Mapper {
    Mapper::new("MessageSummary")
        .field("id", string("id").required())
        .field("server", string("server"))
        .field("received", date("received"))
        .field("subject", string("subject"))
        .field("summary", string("summary"))
        .field("from", sequence_of("from", composite_element("EmailAddress")))
        .field("to", sequence_of("to", composite_element("EmailAddress")))
        .field("cc", sequence_of("cc", composite_element("EmailAddress")))
        .field("bcc", sequence_of("bcc", composite_element("EmailAddress")))
        .field("attachments", number("attachments"))
}

fn message_list_result() -> Mapper {
    Mapper::new("MessageListResult").field(
        "items",
        sequence_of("items", composite_element("MessageSummary")),
    )
}

fn search_criteria() -> Mapper {
    Mapper::new("SearchCriteria")
        .field("sent_to", string("sentTo"))
        .field("subject", string("subject"))
        .field("body", string("body"))
}

fn forwarding_rule() -> Mapper {
    Mapper::new("ForwardingRule")
        .field("field", enumeration("field", &["from", "to", "subject"]))
        .field(
            "operator",
            enumeration("operator", &["endsWith", "startsWith", "contains"]),
        )
        .field("value", string("value"))
        .field("forward_to", string("forwardTo"))
}

fn server() -> Mapper {
    Mapper::new("Server")
        .field("id", string("id"))
        .field("password", string("password"))
        .field("name", string("name"))
        .field("users", sequence_of("users", string_element()))
        .field("messages", number("messages"))
        .field(
            "forwarding_rules",
            sequence_of("forwardingRules", composite_element("ForwardingRule")),
        )
}

fn server_list_result() -> Mapper {
    Mapper::new("ServerListResult").field(
        "items",
        sequence_of("items", composite_element("Server")),
    )
}

fn spam_assassin_rule() -> Mapper {
    Mapper::new("SpamAssassinRule")
        .field("score", number("score"))
        .field("rule", string("rule"))
        .field("description", string("description"))
}

fn spam_filter_results() -> Mapper {
    Mapper::new("SpamFilterResults").field(
        "spam_assassin",
        sequence_of("spamAssassin", composite_element("SpamAssassinRule")),
    )
}

fn spam_analysis_result() -> Mapper {
    Mapper::new("SpamAnalysisResult")
        .field(
            "spam_filter_results",
            composite("spamFilterResults", "SpamFilterResults"),
        )
        .field("score", number("score"))
}

/// Process-wide registry holding every built-in model mapper.
///
/// Populated on first use and read-only afterwards, so serialize and
/// deserialize calls from any task share it without coordination.
pub fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = Registry::new();
        for mapper in [
            email_address(),
            message_header(),
            message_metadata(),
            link(),
            image(),
            message_content(),
            attachment(),
            message(),
            message_summary(),
            message_list_result(),
            search_criteria(),
            forwarding_rule(),
            server(),
            server_list_result(),
            spam_assassin_rule(),
            spam_filter_results(),
            spam_analysis_result(),
        ] {
            registry.register(mapper);
        }
        registry
    })
}

/// Criteria for filtering messages on the server.
///
/// At least one of the fields must be set; the service rejects an empty
/// search.
///
/// # Examples
/// ```
/// use mailsink_client::SearchCriteria;
///
/// let criteria = SearchCriteria::new()
///     .sent_to("build-7.abcd1234@mailsink.net")
///     .subject("Your invoice");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    sent_to: Option<String>,
    subject: Option<String>,
    body: Option<String>,
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match messages sent to this address or phone number.
    pub fn sent_to(mut self, value: impl Into<String>) -> Self {
        self.sent_to = Some(value.into());
        self
    }

    /// Match messages whose subject contains this text.
    pub fn subject(mut self, value: impl Into<String>) -> Self {
        self.subject = Some(value.into());
        self
    }

    /// Match messages whose body contains this text.
    pub fn body(mut self, value: impl Into<String>) -> Self {
        self.body = Some(value.into());
        self
    }

    pub(crate) fn to_model(&self) -> Model {
        let mut model = Model::new("SearchCriteria");
        if let Some(sent_to) = &self.sent_to {
            model = model.with("sent_to", sent_to.clone());
        }
        if let Some(subject) = &self.subject {
            model = model.with("subject", subject.clone());
        }
        if let Some(body) = &self.body {
            model = model.with("body", body.clone());
        }
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::{deserialize, serialize};
    use serde_json::json;

    #[test]
    fn registry_resolves_every_builtin_model() {
        for class_name in [
            "EmailAddress",
            "MessageHeader",
            "MessageMetadata",
            "Link",
            "Image",
            "MessageContent",
            "Attachment",
            "Message",
            "MessageSummary",
            "MessageListResult",
            "SearchCriteria",
            "ForwardingRule",
            "Server",
            "ServerListResult",
            "SpamAssassinRule",
            "SpamFilterResults",
            "SpamAnalysisResult",
        ] {
            assert!(registry().resolve(class_name).is_ok(), "{class_name}");
        }
    }

    #[test]
    fn forwarding_rule_round_trips_with_unset_field_omitted() {
        let wire = json!({
            "field": "subject",
            "operator": "contains",
            "value": "invoice"
        });
        let rule = deserialize("ForwardingRule", &wire, registry()).unwrap();
        assert_eq!(rule.str("field"), Some("subject"));
        assert_eq!(rule.str("operator"), Some("contains"));
        assert_eq!(rule.str("value"), Some("invoice"));
        assert!(!rule.is_set("forward_to"));

        let back = serialize(&rule, registry()).unwrap();
        assert_eq!(back, wire);
    }

    #[test]
    fn search_criteria_serializes_only_set_fields() {
        let criteria = SearchCriteria::new().sent_to("someone@example.com");
        let wire = serialize(&criteria.to_model(), registry()).unwrap();
        assert_eq!(wire, json!({ "sentTo": "someone@example.com" }));
    }

    #[test]
    fn nested_message_payload_deserializes() {
        let wire = json!({
            "id": "msg-1",
            "server": "abcd1234",
            "received": "2026-08-06T10:15:00.000Z",
            "subject": "test subject",
            "from": [{ "name": "Sender", "email": "sender@example.com" }],
            "to": [{ "name": "Receiver", "email": "receiver@example.com" }],
            "html": {
                "body": "<div dir=\"ltr\">hello</div>",
                "links": [{ "href": "https://example.com/", "text": "example" }],
                "images": [{ "src": "cid:ii_abc", "alt": "Inline image 1" }]
            },
            "attachments": [{
                "id": "att-1",
                "contentType": "image/png",
                "fileName": "cat.png",
                "length": 82138,
                "url": "https://mailsink.io/api/files/att-1"
            }],
            "metadata": {
                "headers": [{ "field": "From", "value": "Sender <sender@example.com>" }]
            }
        });
        let message = deserialize("Message", &wire, registry()).unwrap();
        assert_eq!(message.str("subject"), Some("test subject"));

        let html = message.model("html").unwrap();
        assert_eq!(html.sequence("links").unwrap().len(), 1);

        let attachments = message.sequence("attachments").unwrap();
        match &attachments[0] {
            crate::Value::Model(file) => {
                assert_eq!(file.str("file_name"), Some("cat.png"));
                assert_eq!(file.number("length"), Some(82138.0));
            }
            other => panic!("expected attachment model, got {other:?}"),
        }
    }
}
