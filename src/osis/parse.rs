use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::NsReader;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, QName, ResolveResult};
use tracing::{debug, warn};

use crate::constants::OSIS_NAMESPACE;
use crate::error::{ConvertError, ConvertResult};
use crate::osis::books::BookNames;
use crate::osis::dtd;
use crate::osis::types::{BibleDocument, VerseId};

/// Parser switches beyond plain container verses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Treat empty `<verse sID=".." osisID=".."/>` … `<verse eID=".."/>`
    /// pairs as spanning the text between them. When off, an empty verse
    /// element has no text of its own and is stored as `""`.
    pub milestones: bool,
}

/// Reads the OSIS module at `path` into a [`BibleDocument`].
pub fn parse_module(
    path: &Path,
    books: &BookNames,
) -> ConvertResult<BibleDocument> {
    parse_module_with(path, books, ParseOptions::default())
}

pub fn parse_module_with(
    path: &Path,
    books: &BookNames,
    options: ParseOptions,
) -> ConvertResult<BibleDocument> {
    let file = File::open(path).map_err(|e| ConvertError::io(path, e))?;
    parse_reader(BufReader::new(file), path, books, options)
}

/// Same as [`parse_module`] for a document already in memory.
pub fn parse_str(
    xml: &str,
    books: &BookNames,
) -> ConvertResult<BibleDocument> {
    parse_str_with(xml, books, ParseOptions::default())
}

pub fn parse_str_with(
    xml: &str,
    books: &BookNames,
    options: ParseOptions,
) -> ConvertResult<BibleDocument> {
    parse_reader(xml.as_bytes(), Path::new("<string>"), books, options)
}

fn parse_reader<R: BufRead>(
    source: R,
    path: &Path,
    books: &BookNames,
    options: ParseOptions,
) -> ConvertResult<BibleDocument> {
    let xml_err = |source: quick_xml::Error| ConvertError::Xml {
        path: path.to_path_buf(),
        source,
    };
    let malformed = |reason: &str| ConvertError::Malformed {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };

    // The declared encoding is picked up from the XML declaration.
    let mut reader = NsReader::from_reader(source);
    let mut collector = VerseCollector::default();
    let mut entities: HashMap<String, String> = HashMap::new();
    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(xml_err)?;
        match event {
            Event::Start(e) => {
                if depth == 0 && seen_root {
                    return Err(malformed("content after the root element"));
                }
                seen_root = true;
                depth += 1;
                if is_osis_verse(&reader, e.name()) {
                    let osis_id =
                        attr(&e, "osisID", reader.decoder(), &entities).map_err(xml_err)?;
                    collector.open(osis_id.as_deref());
                }
            }
            Event::Empty(e) => {
                if depth == 0 && seen_root {
                    return Err(malformed("content after the root element"));
                }
                seen_root = true;
                if is_osis_verse(&reader, e.name()) {
                    let decoder = reader.decoder();
                    let osis_id = attr(&e, "osisID", decoder, &entities).map_err(xml_err)?;
                    if !options.milestones {
                        collector.record(osis_id.as_deref());
                    } else if let Some(sid) = attr(&e, "sID", decoder, &entities).map_err(xml_err)? {
                        collector.start_milestone(sid, osis_id.as_deref());
                    } else if let Some(eid) = attr(&e, "eID", decoder, &entities).map_err(xml_err)? {
                        collector.end_milestone(&eid);
                    } else {
                        collector.record(osis_id.as_deref());
                    }
                }
            }
            Event::End(e) => {
                if depth == 0 {
                    return Err(malformed("end tag without a matching start tag"));
                }
                depth -= 1;
                if is_osis_verse(&reader, e.name()) {
                    collector.close();
                }
            }
            Event::Text(e) => {
                let text = e
                    .unescape_with(|name| dtd::resolve_entity(&entities, name))
                    .map_err(xml_err)?;
                if depth > 0 {
                    collector.push_text(&text);
                } else if !text.trim().is_empty() {
                    return Err(malformed("text outside the root element"));
                }
            }
            Event::CData(e) => {
                if depth == 0 {
                    return Err(malformed("CDATA outside the root element"));
                }
                let text = reader
                    .decoder()
                    .decode(&e)
                    .map_err(|err| xml_err(err.into()))?;
                collector.push_text(&text);
            }
            Event::DocType(e) => {
                let doctype = reader
                    .decoder()
                    .decode(&e)
                    .map_err(|err| xml_err(err.into()))?;
                entities.extend(dtd::internal_entities(&doctype));
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth > 0 {
        return Err(malformed("document ended with unclosed elements"));
    }
    if !seen_root {
        return Err(malformed("no root element found"));
    }
    Ok(collector.finish(path, books))
}

fn is_osis_verse<R>(
    reader: &NsReader<R>,
    name: QName,
) -> bool {
    let (ns, local_name) = reader.resolve_element(name);
    local_name.as_ref() == b"verse"
        && matches!(ns, ResolveResult::Bound(Namespace(uri)) if uri == OSIS_NAMESPACE.as_bytes())
}

fn attr(
    e: &BytesStart,
    name: &str,
    decoder: Decoder,
    entities: &HashMap<String, String>,
) -> quick_xml::Result<Option<String>> {
    match e.try_get_attribute(name)? {
        Some(a) => {
            let value = a.decode_and_unescape_value_with(decoder, |entity| {
                dtd::resolve_entity(entities, entity)
            })?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

/// Accumulates verse text in document order of the verse start tags.
#[derive(Default)]
struct VerseCollector {
    verses: Vec<(VerseId, String)>,
    // One slot per open container verse; `None` for skipped ones.
    open: Vec<Option<usize>>,
    // sID → slot
    milestones: HashMap<String, usize>,
}

impl VerseCollector {
    fn record(
        &mut self,
        osis_id: Option<&str>,
    ) -> Option<usize> {
        let osis_id = osis_id?;
        let Some(id) = VerseId::parse(osis_id) else {
            debug!("skipping verse with identifier {osis_id:?}");
            return None;
        };
        self.verses.push((id, String::new()));
        Some(self.verses.len() - 1)
    }

    fn open(
        &mut self,
        osis_id: Option<&str>,
    ) {
        let slot = self.record(osis_id);
        self.open.push(slot);
    }

    fn close(&mut self) {
        self.open.pop();
    }

    fn start_milestone(
        &mut self,
        sid: String,
        osis_id: Option<&str>,
    ) {
        if let Some(slot) = self.record(osis_id) {
            self.milestones.insert(sid, slot);
        }
    }

    fn end_milestone(
        &mut self,
        eid: &str,
    ) {
        if self.milestones.remove(eid).is_none() {
            debug!("verse end marker {eid:?} has no open start marker");
        }
    }

    fn push_text(
        &mut self,
        text: &str,
    ) {
        for slot in self.open.iter().flatten().chain(self.milestones.values()) {
            self.verses[*slot].1.push_str(text);
        }
    }

    fn finish(
        self,
        path: &Path,
        books: &BookNames,
    ) -> BibleDocument {
        if !self.milestones.is_empty() {
            let mut unclosed: Vec<_> = self.milestones.keys().map(String::as_str).collect();
            unclosed.sort_unstable();
            warn!(
                "{}: verse markers never closed: {}",
                path.display(),
                unclosed.join(", ")
            );
        }
        let mut doc = BibleDocument::new();
        for (id, text) in self.verses {
            doc.insert_verse(
                books.display_name(&id.book),
                &id.chapter,
                &id.verse,
                text.trim(),
            );
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collector_orders_nested_verses_by_start_tag() {
        let mut c = VerseCollector::default();
        c.open(Some("Gen.1.1"));
        c.push_text("outer ");
        c.open(Some("Gen.1.1"));
        c.push_text("inner");
        c.close();
        c.close();
        let doc = c.finish(Path::new("t.xml"), &BookNames::empty());
        // Inner start tag comes later, so it wins.
        assert_eq!(doc.verse("Gen", "1", "1"), Some("inner"));
    }

    #[test]
    fn collector_skips_missing_and_bad_ids() {
        let mut c = VerseCollector::default();
        c.open(None);
        c.push_text("ignored");
        c.close();
        c.open(Some("Gen.1"));
        c.push_text("ignored");
        c.close();
        let doc = c.finish(Path::new("t.xml"), &BookNames::empty());
        assert!(doc.is_empty());
    }

    #[test]
    fn milestone_collects_until_matching_end() {
        let mut c = VerseCollector::default();
        c.start_milestone("a".into(), Some("Gen.1.1"));
        c.push_text(" In the ");
        c.push_text("beginning ");
        c.end_milestone("a");
        c.push_text("tail");
        let doc = c.finish(Path::new("t.xml"), &BookNames::default());
        assert_eq!(doc.verse("Genesis", "1", "1"), Some("In the beginning"));
    }
}
