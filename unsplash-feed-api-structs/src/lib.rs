//! Wire structs for the Unsplash `GET /photos` listing.
//!
//! Every field the upstream contract does not guarantee is an `Option`. A field that is missing
//! from the payload decodes to `None` and is left out again when encoding, so a decoded record
//! never confuses "omitted" with an empty string or a zero.
//!
//! Object-typed fields the listing carries but this crate does not model (`breadcrumbs`,
//! `current_user_collections`, `topic_submissions`, `sponsorship.impression_urls`) are ignored.

use time::OffsetDateTime;
use url::Url;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Photo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternative_slugs: Option<AlternativeSlugs>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub promoted_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<ImageUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<u64>,
    /// Whether the user the access key belongs to has liked the photo. Always sent upstream.
    pub liked_by_user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsorship: Option<Sponsorship>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Localised variants of a photo's slug.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct AlternativeSlugs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub es: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ja: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub it: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ko: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub de: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl AlternativeSlugs {
    /// Looks up the slug for a locale code such as `"ja"`.
    pub fn get(&self, locale: &str) -> Option<&str> {
        let slug = match locale {
            "en" => &self.en,
            "es" => &self.es,
            "ja" => &self.ja,
            "fr" => &self.fr,
            "it" => &self.it,
            "ko" => &self.ko,
            "de" => &self.de,
            "pt" => &self.pt,
            "id" => &self.id,
            _ => return None,
        };
        slug.as_deref()
    }
}

/// Rendition URLs. Photos carry `raw` through `thumb`, profile images carry `small`, `medium`
/// and `large`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ImageUrls {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_s3: Option<Url>,
}

/// Relation URLs pointing at related resources and actions.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Links {
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_location: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photos: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<Url>,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Sponsorship {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor: Option<User>,
}

/// A user profile, used both for a photo's author and for a sponsorship's sponsor.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<ImageUrls>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_collections: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_likes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_photos: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_promoted_photos: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_illustrations: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_promoted_illustrations: Option<u64>,
    pub accepted_tos: bool,
    pub for_hire: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<Social>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_url: Option<Url>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal_email: Option<String>,
}
