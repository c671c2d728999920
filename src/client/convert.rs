//! Conversions from raw wire types to domain types

use crate::error::{Error, Result};
use crate::types::{Document, DocumentBody, ExportedReaction, ExportedUnfurl, Folder};

use super::types::{EmojiReaction, RawBodyType, RawDocument, RawDocumentBody, RawSubfolder, UnfurlDetails};

impl From<EmojiReaction> for ExportedReaction {
    fn from(reaction: EmojiReaction) -> Self {
        ExportedReaction {
            emoji: reaction.emoji,
            count: reaction.count,
        }
    }
}

impl From<UnfurlDetails> for ExportedUnfurl {
    fn from(unfurl: UnfurlDetails) -> Self {
        ExportedUnfurl {
            text: unfurl.text,
            link: unfurl.link,
            image: unfurl.image,
        }
    }
}

impl From<RawSubfolder> for Folder {
    fn from(folder: RawSubfolder) -> Self {
        Folder {
            id: folder.id,
            name: folder.name,
        }
    }
}

/// Collapse a document's declared body type and its payload into one
/// [`DocumentBody`] variant.
///
/// A document declaring a text body must carry the text payload; anything
/// else is a malformed listing entry.
pub fn document_from_raw(raw: RawDocument) -> Result<Document> {
    let body = match raw.body_type {
        Some(RawBodyType::File) => DocumentBody::File,
        Some(RawBodyType::Text) => match raw.document_body {
            Some(RawDocumentBody::TextDocument { text }) => DocumentBody::Text { text },
            _ => {
                return Err(Error::MissingDocumentBody { title: raw.title });
            }
        },
        Some(RawBodyType::Checklist) => DocumentBody::Checklist,
        None => DocumentBody::None,
    };

    Ok(Document {
        id: raw.id,
        title: raw.title,
        body,
    })
}
