//! Path data from SVG documents.
//!
//! Lets a whole `.svg` file be given as input rather than a bare `d`
//! attribute value.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use tracing::debug;

use crate::errors::{Error, Result};

/// Return the `d` attribute of every `<path>` element, in document order.
pub fn path_data(svg: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(svg);
    let mut paths = Vec::new();

    loop {
        let ev = reader.read_event().map_err(|e| {
            Error::Document(format!(
                "XML error near offset {}: {e:?}",
                reader.error_position()
            ))
        })?;
        match ev {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"path" => {
                for a in e.attributes() {
                    let aa = a.map_err(Error::from_err)?;
                    if aa.key.local_name().as_ref() == b"d" {
                        let value = aa.unescape_value().map_err(Error::from_err)?.into_owned();
                        paths.push(value);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    debug!(count = paths.len(), "found path data in document");
    if paths.is_empty() {
        return Err(Error::Document(
            "no <path> elements with a 'd' attribute found".to_string(),
        ));
    }
    Ok(paths)
}
