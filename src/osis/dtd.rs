use std::collections::HashMap;

use lazy_static::lazy_static;
use quick_xml::escape::{resolve_predefined_entity, unescape};
use regex::Regex;

lazy_static! {
    // General entities with a quoted literal value; parameter (`%`) and
    // external (SYSTEM/PUBLIC) entities do not match.
    static ref ENTITY_DECL: Regex =
        Regex::new(r#"<!ENTITY\s+([^\s%"'>]+)\s+(?:"([^"]*)"|'([^']*)')\s*>"#).unwrap();
}

/// Internal general entities declared in a DOCTYPE body, e.g.
/// `osis [<!ENTITY lord "LORD">]`. The first declaration of a name wins.
pub fn internal_entities(doctype: &str) -> HashMap<String, String> {
    let mut entities = HashMap::new();
    for caps in ENTITY_DECL.captures_iter(doctype) {
        let (Some(name), Some(raw)) = (caps.get(1), caps.get(2).or_else(|| caps.get(3))) else {
            continue;
        };
        let raw = raw.as_str();
        // Character references in the literal are expanded; anything else is kept verbatim.
        let value = unescape(raw)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        entities.entry(name.as_str().to_string()).or_insert(value);
    }
    entities
}

/// Resolves `name` against declared entities, then the five XML built-ins.
pub fn resolve_entity<'e>(
    entities: &'e HashMap<String, String>,
    name: &str,
) -> Option<&'e str> {
    entities
        .get(name)
        .map(String::as_str)
        .or_else(|| resolve_predefined_entity(name))
}
