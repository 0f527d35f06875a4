//! Property tests for plain-text extraction and position tokens.

use folio::{extract, Error, PagePosition};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_utf8_text_round_trips(text in any::<String>()) {
        let result = extract(text.as_bytes(), "txt").unwrap();

        prop_assert_eq!(result.pages.len(), 1);
        prop_assert_eq!(result.pages[0].index, 1);
        prop_assert_eq!(&result.pages[0].text, &text);
        prop_assert!(result.pages[0].images.is_empty());
    }

    #[test]
    fn prop_txt_always_one_page(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let result = extract(&bytes, "txt").unwrap();

        prop_assert_eq!(result.pages.len(), 1);
        prop_assert!(result.faults.is_empty());
        if std::str::from_utf8(&bytes).is_err() {
            // Latin-1 maps every byte to exactly one char.
            prop_assert_eq!(result.pages[0].text.chars().count(), bytes.len());
        }
    }

    #[test]
    fn prop_latin1_fallback(
        prefix in "[a-z ]{0,16}",
        high in 0xC0u8..=0xFF,
        suffix in "[a-z ]{0,16}",
    ) {
        // A lone lead byte followed by ASCII is never valid UTF-8.
        let mut bytes = prefix.clone().into_bytes();
        bytes.push(high);
        bytes.push(b'!');
        bytes.extend_from_slice(suffix.as_bytes());

        let result = extract(&bytes, "txt").unwrap();
        let expected = format!("{}{}!{}", prefix, char::from(high), suffix);
        prop_assert_eq!(&result.pages[0].text, &expected);
    }

    #[test]
    fn prop_unknown_tag_rejected(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert!(matches!(extract(&bytes, "docx"), Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn prop_position_round_trip(page in 1u32..=u32::MAX, offset in any::<u32>()) {
        let token = PagePosition::new(page, offset).unwrap().encode();
        let decoded = PagePosition::decode(&token).unwrap();

        prop_assert_eq!(decoded.page(), page);
        prop_assert_eq!(decoded.offset(), offset);
        prop_assert_eq!(token, format!("{}:{}", page, offset));
    }

    #[test]
    fn prop_page_zero_malformed(offset in any::<u32>()) {
        let token = format!("0:{}", offset);
        prop_assert!(matches!(
            PagePosition::decode(&token),
            Err(Error::MalformedPosition(_))
        ));
    }

    #[test]
    fn prop_tokens_without_separator_malformed(token in "[^:]*") {
        prop_assert!(matches!(
            PagePosition::decode(&token),
            Err(Error::MalformedPosition(_))
        ));
    }
}

#[test]
fn test_empty_blob_is_one_empty_page() {
    let result = extract(b"", "txt").unwrap();
    assert_eq!(result.pages.len(), 1);
    assert_eq!(result.pages[0].text, "");
}

#[test]
fn test_documented_malformed_tokens() {
    for token in ["0:5", "abc"] {
        assert!(matches!(
            PagePosition::decode(token),
            Err(Error::MalformedPosition(_))
        ));
    }
}
