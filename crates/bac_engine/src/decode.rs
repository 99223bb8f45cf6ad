use bac_logging::bac_warn;
use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("failed to decode bytes with {encoding}: {message}")]
    DecodeFailure { encoding: String, message: String },
}

/// Decode raw bytes into UTF-8 using: BOM -> Content-Type charset -> chardetng fallback.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> Result<DecodedHtml, DecodeError> {
    let encoding = pick_encoding(bytes, content_type);
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(DecodeError::DecodeFailure {
            encoding: encoding.name().to_string(),
            message: "decoding error".into(),
        });
    }
    Ok(DecodedHtml {
        html: text.into_owned(),
        encoding_label: encoding.name().to_string(),
    })
}

/// Like [`decode_html`], but malformed sequences become U+FFFD instead of
/// failing. Pages are still worth scanning when a few bytes are broken.
pub fn decode_html_lossy(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    match decode_html(bytes, content_type) {
        Ok(decoded) => decoded,
        Err(err) => {
            bac_warn!("{}; continuing with replacement characters", err);
            let encoding = pick_encoding(bytes, content_type);
            let (text, _, _) = encoding.decode(bytes);
            DecodedHtml {
                html: text.into_owned(),
                encoding_label: encoding.name().to_string(),
            }
        }
    }
}

fn pick_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return enc;
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type
        .split(';')
        .filter_map(|part| {
            let part = part.trim();
            part.get(..8)
                .filter(|prefix| prefix.eq_ignore_ascii_case("charset="))
                .map(|_| part[8..].trim_matches([' ', '"', '\''].as_ref()))
        })
        .next()
        .map(|s| s.to_string())
}
