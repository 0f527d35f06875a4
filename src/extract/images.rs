//! Image XObject enumeration for PDF pages.

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId, Stream};

use crate::assemble::Extracted;
use crate::error::{Error, Result};
use crate::model::{detect_mime_type, EmbeddedImage};

use super::ExtractOptions;

/// Resources may be inherited from ancestor page-tree nodes; stop walking
/// up after this many levels so a cyclic /Parent chain terminates.
const MAX_INHERITANCE_DEPTH: usize = 32;

/// Extract the images referenced by one page's resources.
///
/// Any failure while reading the page's resources or one of its images
/// degrades the whole list for that page.
pub(super) fn page_images(
    doc: &LopdfDocument,
    page_id: ObjectId,
    options: &ExtractOptions,
) -> Extracted<Vec<EmbeddedImage>> {
    collect_page_images(doc, page_id, options.sniff_image_mime).into()
}

fn collect_page_images(
    doc: &LopdfDocument,
    page_id: ObjectId,
    sniff: bool,
) -> Result<Vec<EmbeddedImage>> {
    let Some(resources) = page_resources(doc, page_id)? else {
        return Ok(Vec::new());
    };

    let xobjects = match resources.get(b"XObject") {
        Ok(obj) => resolve_dictionary(doc, obj)?,
        Err(_) => return Ok(Vec::new()),
    };

    let mut images = Vec::new();
    for (key, obj) in xobjects.iter() {
        let stream = resolve_stream(doc, obj)?;
        if !is_image(stream) {
            continue;
        }

        let name =
            stored_name(stream).unwrap_or_else(|| String::from_utf8_lossy(key).into_owned());
        let mut image = EmbeddedImage::from_stored_name(stream.content.clone(), Some(&name));

        if sniff {
            if let Some(mime_type) = detect_mime_type(&image.data) {
                image.mime_type = mime_type.to_string();
            }
        }

        log::debug!("Image {} ({}, {} bytes)", name, image.mime_type, image.size());
        images.push(image);
    }

    Ok(images)
}

/// Find the resource dictionary of a page, following /Parent inheritance.
fn page_resources(doc: &LopdfDocument, page_id: ObjectId) -> Result<Option<&Dictionary>> {
    let mut node = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_INHERITANCE_DEPTH {
        if let Ok(resources) = node.get(b"Resources") {
            return resolve_dictionary(doc, resources).map(Some);
        }

        match node.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => node = doc.get_dictionary(parent_id)?,
            Err(_) => return Ok(None),
        }
    }

    Ok(None)
}

fn resolve_dictionary<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Result<&'a Dictionary> {
    match obj {
        Object::Reference(id) => Ok(doc.get_dictionary(*id)?),
        Object::Dictionary(dict) => Ok(dict),
        _ => Err(Error::PdfParse("Expected a dictionary".to_string())),
    }
}

fn resolve_stream<'a>(doc: &'a LopdfDocument, obj: &'a Object) -> Result<&'a Stream> {
    let obj = match obj {
        Object::Reference(id) => doc.get_object(*id)?,
        other => other,
    };

    match obj {
        Object::Stream(stream) => Ok(stream),
        _ => Err(Error::PdfParse("XObject is not a stream".to_string())),
    }
}

fn is_image(stream: &Stream) -> bool {
    stream
        .dict
        .get(b"Subtype")
        .and_then(Object::as_name_str)
        .is_ok_and(|subtype| subtype == "Image")
}

/// The legacy /Name entry of an image XObject, if present.
fn stored_name(stream: &Stream) -> Option<String> {
    match stream.dict.get(b"Name").ok()? {
        Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}
