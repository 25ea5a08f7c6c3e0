//! Schema fragment export
//!
//! Renders an [`XmlType`] as an `xs:simpleType` restriction, the form a
//! schema generator inlines for a constrained accessor.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};
use crate::namespaces::{default_prefix, XSD_NAMESPACE};
use crate::types::XmlType;

/// Prefix bound to the base type's namespace when it has no conventional one
pub const TARGET_PREFIX: &str = "tns";

/// Indentation width of rendered fragments
pub const INDENT: usize = 2;

/// Render `xml_type` as an `xs:simpleType` with one `xs:restriction`
///
/// All facets along the restriction chain are flattened into the single
/// restriction, innermost first. An unrestricted type renders as an empty
/// restriction of itself. `name` sets the `name` attribute; without it the
/// fragment is anonymous.
pub fn write_simple_type(xml_type: &XmlType, name: Option<&str>) -> Result<String> {
    if !xml_type.is_simple() {
        return Err(Error::Type(format!(
            "{} is not a simple type and cannot be restricted",
            xml_type.qname()
        )));
    }

    let qname = xml_type.qname();
    let base = if qname.is_unqualified() {
        qname.local_name.clone()
    } else {
        qname
            .prefixed()
            .unwrap_or_else(|| format!("{}:{}", TARGET_PREFIX, qname.local_name))
    };

    let mut root = BytesStart::new("xs:simpleType");
    root.push_attribute(("xmlns:xs", XSD_NAMESPACE));
    if !qname.is_unqualified() && qname.namespace != XSD_NAMESPACE {
        let prefix = default_prefix(&qname.namespace).unwrap_or(TARGET_PREFIX);
        root.push_attribute((format!("xmlns:{}", prefix).as_str(), qname.namespace.as_str()));
    }
    if let Some(name) = name {
        root.push_attribute(("name", name));
    }

    let restriction = BytesStart::new("xs:restriction").with_attributes([("base", base.as_str())]);
    let restrictions = xml_type.all_restrictions();

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', INDENT);
    writer.write_event(Event::Start(root))?;
    if restrictions.is_empty() {
        writer.write_event(Event::Empty(restriction))?;
    } else {
        writer.write_event(Event::Start(restriction))?;
        for entry in restrictions {
            let tag = format!("xs:{}", entry.name());
            let facet = BytesStart::new(tag.as_str()).with_attributes([("value", entry.value.as_str())]);
            writer.write_event(Event::Empty(facet))?;
        }
        writer.write_event(Event::End(BytesEnd::new("xs:restriction")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("xs:simpleType")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| Error::Xml(e.to_string()))
}
