//! Synthetic PDF builder shared by the integration tests.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, Stream};

/// An image XObject to place on a test page.
pub struct TestImage {
    /// Key in the page's XObject dictionary
    pub key: &'static str,
    /// Optional legacy /Name entry
    pub name: Option<&'static str>,
    pub data: Vec<u8>,
}

impl TestImage {
    pub fn keyed(key: &'static str, data: &[u8]) -> Self {
        Self {
            key,
            name: None,
            data: data.to_vec(),
        }
    }

    pub fn named(key: &'static str, name: &'static str, data: &[u8]) -> Self {
        Self {
            key,
            name: Some(name),
            data: data.to_vec(),
        }
    }
}

/// Content of one test page.
pub enum TestPage {
    Text(&'static str),
    WithImages(&'static str, Vec<TestImage>),
    /// Content stream lopdf rejects (`Tf` without operands)
    Corrupted,
    /// Content stream that claims Flate compression but holds junk;
    /// lopdf falls back to the raw bytes and reads no operations
    Garbled,
}

/// Build a PDF with the given pages, in order.
pub fn build_pdf(pages: Vec<TestPage>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });

    let mut kids = Vec::new();
    for page in pages {
        let (content, images) = match page {
            TestPage::Text(text) => (Ok(text), Vec::new()),
            TestPage::WithImages(text, images) => (Ok(text), images),
            TestPage::Corrupted => (
                Err(Stream::new(dictionary! {}, b"BT Tf (x) Tj ET".to_vec())),
                Vec::new(),
            ),
            TestPage::Garbled => (
                Err(Stream::new(
                    dictionary! { "Filter" => "FlateDecode" },
                    vec![0x13, 0x37, 0x00, 0xFF, 0x42, 0x7B, 0x5D, 0x28, 0x29],
                )),
                Vec::new(),
            ),
        };

        let content_id = match content {
            Ok(text) => {
                let content = Content {
                    operations: vec![
                        Operation::new("BT", vec![]),
                        Operation::new("Tf", vec!["F1".into(), 12.into()]),
                        Operation::new("Td", vec![72.into(), 720.into()]),
                        Operation::new("Tj", vec![Object::string_literal(text)]),
                        Operation::new("ET", vec![]),
                    ],
                };
                doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()))
            }
            Err(raw) => doc.add_object(raw),
        };

        let mut xobjects = Dictionary::new();
        for image in images {
            let mut dict = dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => 1,
                "Height" => 1,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            };
            if let Some(name) = image.name {
                dict.set("Name", Object::Name(name.as_bytes().to_vec()));
            }
            let image_id = doc.add_object(Stream::new(dict, image.data));
            xobjects.set(image.key, image_id);
        }

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
                "XObject" => xobjects,
            },
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    bytes
}

/// Build a PDF with one text page per entry.
pub fn text_pdf(texts: &[&'static str]) -> Vec<u8> {
    build_pdf(texts.iter().map(|t| TestPage::Text(*t)).collect())
}
