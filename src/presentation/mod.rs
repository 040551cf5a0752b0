// Presentation helpers shared by the listing cards and search header.

pub mod format;
pub mod tag;

pub use format::{format_location, format_price, LocationParts, PriceType};
pub use tag::{BadgeVariant, ListingTag, TagStyle};
