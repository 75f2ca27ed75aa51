#![allow(dead_code)]
use assert_fs::{TempDir, prelude::*};

pub const OSIS_NS: &str = "http://www.bibletechnologies.net/2003/OSIS/namespace";

/// Wraps `body` in an `<osis>` root bound to the OSIS namespace.
pub fn osis(body: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <osis xmlns=\"{OSIS_NS}\">\n<osisText osisIDWork=\"TEST\">\n{body}\n</osisText>\n</osis>\n"
    )
}

pub const GENESIS_1_1: &str = r#"<div type="book" osisID="Gen">
  <chapter osisID="Gen.1">
    <verse osisID="Gen.1.1">In the beginning...</verse>
  </chapter>
</div>"#;

pub const GENESIS_1_1_JSON: &str = "{\n  \"Genesis\": {\n    \"1\": {\n      \"1\": \"In the beginning...\"\n    }\n  }\n}";

/// Builds a fixture tree:
/// root/
///   modules/en_kjv.xml   (Genesis 1:1)
/// Output is expected under root/bibles.
pub fn modules_fs() -> TempDir {
    let td = TempDir::new().unwrap();
    td.child("modules")
        .child("en_kjv.xml")
        .write_str(&osis(GENESIS_1_1))
        .unwrap();
    td
}
