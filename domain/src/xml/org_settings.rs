//! The organization settings blob.
//!
//! The remote system stores its settings as a small XML document whose root
//! children are one element per setting:
//!
//! ```xml
//! <OrgSettings><MaxFolderDepth>3</MaxFolderDepth><EnableFoo>true</EnableFoo></OrgSettings>
//! ```
//!
//! Updates use the same shape under an `<orgSettings>` root.

use crate::setting::live_value::LiveValue;
use crate::xml::element_name;
use crate::xml::error::XmlError;
use quick_xml::escape::escape;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::collections::HashMap;

/// Root element of the update payload
pub const UPDATE_ROOT: &str = "orgSettings";

/// Parse the live settings blob into `name -> value` pairs.
///
/// The tag name of each root child is the setting name and its text content
/// (including nested text) the value. A repeated tag name overwrites the
/// earlier value in place. A blank blob yields no values.
pub fn parse_settings_blob(xml: &str) -> Result<Vec<LiveValue>, XmlError> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut found_root = false;
    let mut current: Option<LiveValue> = None;

    let mut values: Vec<LiveValue> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut record = |value: LiveValue| match positions.get(&value.name) {
        Some(&i) => values[i] = value,
        None => {
            positions.insert(value.name.clone(), values.len());
            values.push(value);
        }
    };

    loop {
        match reader.read_event().map_err(XmlError::malformed)? {
            Event::Start(element) => {
                depth += 1;
                match depth {
                    1 => found_root = true,
                    2 => current = Some(LiveValue::new(element_name(&element), String::new())),
                    _ => {}
                }
            }
            Event::Empty(element) => match depth {
                0 => found_root = true,
                1 => record(LiveValue::new(element_name(&element), String::new())),
                _ => {}
            },
            Event::Text(text) => {
                if let Some(value) = current.as_mut() {
                    let text = text.unescape().map_err(XmlError::malformed)?;
                    value.current_value.push_str(&text);
                }
            }
            Event::CData(data) => {
                if let Some(value) = current.as_mut() {
                    value
                        .current_value
                        .push_str(&String::from_utf8_lossy(data.as_ref()));
                }
            }
            Event::End(_) => {
                if depth == 2
                    && let Some(value) = current.take()
                {
                    record(value);
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !found_root {
        return Err(XmlError::MissingRoot("document element".to_string()));
    }
    Ok(values)
}

/// Serialize `(name, value)` pairs as an `<orgSettings>` update payload.
pub fn write_update_payload(entries: &[(String, String)]) -> String {
    let mut payload = format!("<{}>", UPDATE_ROOT);
    for (name, value) in entries {
        let name = name.trim();
        payload.push('<');
        payload.push_str(name);
        payload.push('>');
        payload.push_str(&escape(value.as_str()));
        payload.push_str("</");
        payload.push_str(name);
        payload.push('>');
    }
    payload.push_str(&format!("</{}>", UPDATE_ROOT));
    payload
}
