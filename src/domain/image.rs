use crate::domain::card::{Card, ImageSize};

/// Picks a displayable image URL for a resolved card.
///
/// Direct image URIs win. Cards without them (double-faced layouts) use the
/// first face only. Within a mapping the requested size falls back to the
/// normal size; nothing is ever synthesised.
#[must_use]
pub fn image_url(card: Option<&Card>, size: ImageSize) -> Option<&str> {
    let card = card?;

    if let Some(uris) = &card.image_uris {
        return uris.select(size);
    }

    card.faces().first()?.image_url(size)
}
