//! Catalog document parsing.
//!
//! Baseline catalog shape:
//!
//! ```xml
//! <orgSettings>
//!   <defaultOrgSettings>
//!     <orgSetting name="..." description="..." settingType="Number" min="0" max="10"
//!                 minSupportedVersion="..." maxSupportedVersion="..." defaultValue="..."
//!                 supportUrl="..." urlTitle="..." isOrganizationAttribute="false" />
//!   </defaultOrgSettings>
//! </orgSettings>
//! ```
//!
//! Overlay catalog shape: any number of `<orgSetting name url description />`
//! elements anywhere in the document.

use crate::setting::descriptor::{SettingDescriptor, ValueType};
use crate::setting::overlay::OverlayEntry;
use crate::setting::value_policy::NumericBounds;
use crate::xml::error::XmlError;
use crate::xml::{attribute_map, element_name, is_element_name};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::collections::{HashMap, HashSet};

/// Element holding the baseline descriptor list
pub const BASELINE_ROOT: &str = "defaultOrgSettings";

/// Element name of one setting entry, in both catalogs
pub const SETTING_ELEMENT: &str = "orgSetting";

/// Parse the baseline catalog.
///
/// Keeps only direct `orgSetting` children of the first `defaultOrgSettings`
/// element that are marked `isOrganizationAttribute="false"`. Entries whose
/// name is blank or not a valid tag name are skipped; duplicate names keep the
/// first entry.
pub fn parse_baseline_catalog(xml: &str) -> Result<Vec<SettingDescriptor>, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut root_depth: Option<usize> = None;
    let mut found_root = false;

    let mut seen = HashSet::new();
    let mut descriptors = Vec::new();
    let mut accept = |attributes: HashMap<String, String>| {
        if let Some(descriptor) = descriptor_from_attributes(&attributes)
            && seen.insert(descriptor.key())
        {
            descriptors.push(descriptor);
        }
    };

    loop {
        match reader.read_event().map_err(XmlError::malformed)? {
            Event::Start(element) => {
                depth += 1;
                let name = element_name(&element);
                if !found_root && name == BASELINE_ROOT {
                    found_root = true;
                    root_depth = Some(depth);
                } else if root_depth.is_some_and(|root| depth == root + 1)
                    && name == SETTING_ELEMENT
                {
                    accept(attribute_map(&element)?);
                }
            }
            Event::Empty(element) => {
                let name = element_name(&element);
                if !found_root && name == BASELINE_ROOT {
                    found_root = true;
                } else if root_depth == Some(depth) && name == SETTING_ELEMENT {
                    accept(attribute_map(&element)?);
                }
            }
            Event::End(_) => {
                if root_depth == Some(depth) {
                    root_depth = None;
                }
                depth = depth.saturating_sub(1);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !found_root {
        return Err(XmlError::MissingRoot(BASELINE_ROOT.to_string()));
    }
    Ok(descriptors)
}

/// Parse the overlay catalog into raw entries.
pub fn parse_overlay_catalog(xml: &str) -> Result<Vec<OverlayEntry>, XmlError> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();

    loop {
        match reader.read_event().map_err(XmlError::malformed)? {
            Event::Start(element) | Event::Empty(element) => {
                if element_name(&element) != SETTING_ELEMENT {
                    continue;
                }
                let mut attributes = attribute_map(&element)?;
                let mut take = |key: &str| attributes.remove(key).unwrap_or_default();
                let name = take("name").trim().to_string();
                if name.is_empty() {
                    continue;
                }
                entries.push(OverlayEntry {
                    name,
                    url: take("url"),
                    description: take("description"),
                });
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(entries)
}

fn descriptor_from_attributes(attributes: &HashMap<String, String>) -> Option<SettingDescriptor> {
    let get = |key: &str| attributes.get(key).map(String::as_str).unwrap_or_default();
    let optional = |key: &str| {
        let value = get(key).trim();
        (!value.is_empty()).then(|| value.to_string())
    };

    if !get("isOrganizationAttribute").trim().eq_ignore_ascii_case("false") {
        return None;
    }
    let name = get("name").trim();
    if !is_element_name(name) {
        return None;
    }

    Some(SettingDescriptor {
        name: name.to_string(),
        description: get("description").to_string(),
        value_type: ValueType::from_catalog(get("settingType")),
        bounds: NumericBounds::from_attributes(get("min"), get("max")),
        min_supported_version: optional("minSupportedVersion"),
        max_supported_version: optional("maxSupportedVersion"),
        default_value: get("defaultValue").to_string(),
        support_url: optional("supportUrl"),
        support_url_title: optional("urlTitle"),
        overlay_url: None,
        overlay_description: None,
    })
}
