use serde::{Deserialize, Serialize};
use std::fmt;

/// Category tags that have their own filter button. Everything else falls under "More".
///
/// "Accomodation" is spelled the way the upstream data spells it.
pub const CORE_CATEGORIES: [&str; 3] = ["Accomodation", "Attraction", "Services"];

/// A geographic coordinate in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Both components are finite and inside the WGS84 ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// A point of interest as the rest of the application sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    pub category: String,
    pub location: GeoPoint,
    pub description: String,
    pub image: Option<String>,
}

impl Resource {
    /// Whether this resource belongs to one of the named core categories.
    pub fn has_core_category(&self) -> bool {
        CORE_CATEGORIES.contains(&self.category.as_str())
    }

    /// Resolve the image reference against a media download endpoint.
    pub fn image_url(&self, media_base_url: &str) -> Option<String> {
        self.image
            .as_deref()
            .filter(|image| !image.is_empty())
            .map(|image| format!("{}{}", media_base_url, image))
    }
}

/// The four filter buttons of the category bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CategoryFilter {
    Accomodation,
    Attraction,
    Services,
    /// Everything not in [`CORE_CATEGORIES`].
    More,
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 4] = [
        CategoryFilter::Accomodation,
        CategoryFilter::Attraction,
        CategoryFilter::Services,
        CategoryFilter::More,
    ];

    /// The category tag this filter is bound to.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::Accomodation => "Accomodation",
            CategoryFilter::Attraction => "Attraction",
            CategoryFilter::Services => "Services",
            CategoryFilter::More => "More",
        }
    }

    /// Button caption shown in the category bar.
    pub fn title(&self) -> &'static str {
        match self {
            CategoryFilter::Accomodation => "Stays",
            CategoryFilter::Attraction => "Attractions",
            CategoryFilter::Services => "Services",
            CategoryFilter::More => "More",
        }
    }

    /// Parse a filter from its label. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|filter| filter.label() == label)
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        match self {
            CategoryFilter::More => !resource.has_core_category(),
            core => resource.category == core.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(category: &str) -> Resource {
        Resource {
            id: "1".to_string(),
            name: "Somewhere".to_string(),
            category: category.to_string(),
            location: GeoPoint::new(17.88, -77.76),
            description: String::new(),
            image: None,
        }
    }

    #[test]
    fn test_more_matches_only_non_core_categories() {
        assert!(CategoryFilter::More.matches(&resource("Culture")));
        assert!(CategoryFilter::More.matches(&resource("")));
        assert!(!CategoryFilter::More.matches(&resource("Services")));
    }

    #[test]
    fn test_category_match_is_exact() {
        assert!(CategoryFilter::Attraction.matches(&resource("Attraction")));
        assert!(!CategoryFilter::Attraction.matches(&resource("attraction")));
    }

    #[test]
    fn test_image_url_joins_base_and_reference() {
        let mut res = resource("Services");
        assert_eq!(res.image_url("http://media/"), None);

        res.image = Some("abc123".to_string());
        assert_eq!(res.image_url("http://media/"), Some("http://media/abc123".to_string()));
    }

    #[test]
    fn test_geo_point_validation() {
        assert!(GeoPoint::new(17.88, -77.76).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
    }
}
