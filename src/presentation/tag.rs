use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Primary,
    Secondary,
    Success,
    Warning,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagStyle {
    pub label: &'static str,
    pub variant: BadgeVariant,
}

/// Badge shown on a listing card. Unrecognised labels map to [`ListingTag::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListingTag {
    ForSale,
    ForRent,
    Featured,
    Premium,
    New,
    Other,
}

impl ListingTag {
    pub fn from_label(label: &str) -> Self {
        let normalized: String = label
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "sale" | "forsale" | "buy" => ListingTag::ForSale,
            "rent" | "forrent" | "rental" => ListingTag::ForRent,
            "featured" => ListingTag::Featured,
            "premium" => ListingTag::Premium,
            "new" | "newlisting" => ListingTag::New,
            _ => ListingTag::Other,
        }
    }

    pub fn style(self) -> TagStyle {
        match self {
            ListingTag::ForSale => TagStyle {
                label: "For Sale",
                variant: BadgeVariant::Primary,
            },
            ListingTag::ForRent => TagStyle {
                label: "For Rent",
                variant: BadgeVariant::Secondary,
            },
            ListingTag::Featured => TagStyle {
                label: "Featured",
                variant: BadgeVariant::Warning,
            },
            ListingTag::Premium => TagStyle {
                label: "Premium",
                variant: BadgeVariant::Success,
            },
            ListingTag::New => TagStyle {
                label: "New",
                variant: BadgeVariant::Success,
            },
            ListingTag::Other => TagStyle {
                label: "Listing",
                variant: BadgeVariant::Outline,
            },
        }
    }
}
