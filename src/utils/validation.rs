//! Caller-side validation
//!
//! Checks applied before a request is built; failures never reach the network.

use crate::models::{ListingCreate, MessageCreate, RequestCreate};
use crate::utils::error::{helpers::validation_error, AppResult};

/// Maximum number of images a listing may carry
pub const MAX_LISTING_IMAGES: usize = 3;

/// Validate a new listing's images
pub fn validate_listing(listing: &ListingCreate) -> AppResult<()> {
    validate_images(&listing.images)
}

/// Validate an image set: at least one, at most [`MAX_LISTING_IMAGES`]
pub fn validate_images(images: &[String]) -> AppResult<()> {
    if images.is_empty() {
        return Err(validation_error("at least one image is required"));
    }
    if images.len() > MAX_LISTING_IMAGES {
        return Err(validation_error(format!(
            "at most {} images are allowed, got {}",
            MAX_LISTING_IMAGES,
            images.len()
        )));
    }
    Ok(())
}

/// Validate an outgoing chat message.
///
/// Media messages may omit text; every other message needs non-blank text.
pub fn validate_message(message: &MessageCreate) -> AppResult<()> {
    let has_text = message
        .text
        .as_deref()
        .map(|t| !t.trim().is_empty())
        .unwrap_or(false);

    if has_text || message.media_url.is_some() {
        Ok(())
    } else {
        Err(validation_error("message text cannot be empty"))
    }
}

/// Validate a new request
pub fn validate_request(request: &RequestCreate) -> AppResult<()> {
    if request.listing_id.trim().is_empty() {
        return Err(validation_error("listing_id cannot be empty"));
    }
    Ok(())
}
