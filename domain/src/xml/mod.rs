//! XML wire formats.
//!
//! - [`catalog`] — baseline and overlay catalog documents
//! - [`org_settings`] — live settings blob and the `<orgSettings>` update payload

pub mod catalog;
pub mod error;
pub mod org_settings;

use quick_xml::events::BytesStart;
use std::collections::HashMap;

/// Whether `name` can be written as an element tag name.
///
/// Setting names become tag names of the update payload, so names with
/// spaces, markup characters or a leading digit are unusable.
pub fn is_element_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Local (prefix-free) element name.
pub(crate) fn element_name(element: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(element.local_name().as_ref()).into_owned()
}

/// Unescaped attributes of an element, keyed by local name.
pub(crate) fn attribute_map(
    element: &BytesStart<'_>,
) -> Result<HashMap<String, String>, error::XmlError> {
    let mut attributes = HashMap::new();
    for attr in element.attributes() {
        let attr = attr.map_err(error::XmlError::malformed)?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(error::XmlError::malformed)?
            .into_owned();
        attributes.insert(key, value);
    }
    Ok(attributes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_element_name() {
        assert!(is_element_name("MaxFolderDepth"));
        assert!(is_element_name("_legacy.Setting-2"));
        assert!(!is_element_name(""));
        assert!(!is_element_name("Bad Name"));
        assert!(!is_element_name("A<B"));
        assert!(!is_element_name("A&B"));
        assert!(!is_element_name("2Fast"));
    }
}
