// Listing Catalog
// Property records and the ordered, read-only collection the UI browses

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use crate::error::CatalogError;

/// Category of a media asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaCategory {
    Main,
    Gallery,
    Drone,
    FloorPlan,
}

/// A single image attached to a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaAsset {
    pub url: String,
    #[serde(default)]
    pub alt_text: String,
    pub category: MediaCategory,
}

impl MediaAsset {
    pub fn new(url: &str, alt_text: &str, category: MediaCategory) -> Self {
        Self {
            url: url.to_string(),
            alt_text: alt_text.to_string(),
            category,
        }
    }
}

/// A catalog entry. Never mutated after the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub location: String,
    pub price: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub bedrooms: Option<u32>,
    #[serde(default)]
    pub bathrooms: Option<u32>,
    /// Display order matters
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub images: Vec<MediaAsset>,
    #[serde(default)]
    pub virtual_tour_ref: Option<String>,
    #[serde(default)]
    pub drone_footage_ref: Option<String>,
    #[serde(default)]
    pub floor_plan_ref: Option<String>,
}

/// Treat blank references the same as missing ones
fn present(reference: &Option<String>) -> Option<&str> {
    reference
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
}

impl PropertyRecord {
    pub fn virtual_tour(&self) -> Option<&str> {
        present(&self.virtual_tour_ref)
    }

    pub fn drone_footage(&self) -> Option<&str> {
        present(&self.drone_footage_ref)
    }

    pub fn floor_plan(&self) -> Option<&str> {
        present(&self.floor_plan_ref)
    }

    /// First `main` image, or the first image of any kind
    pub fn cover_image(&self) -> Option<&MediaAsset> {
        self.images
            .iter()
            .find(|img| img.category == MediaCategory::Main)
            .or_else(|| self.images.first())
    }

    /// "3 bd · 2 ba" style summary, empty when neither is known
    pub fn rooms_summary(&self) -> String {
        let mut parts = Vec::new();
        if let Some(bedrooms) = self.bedrooms {
            parts.push(format!("{} bd", bedrooms));
        }
        if let Some(bathrooms) = self.bathrooms {
            parts.push(format!("{} ba", bathrooms));
        }
        parts.join(" · ")
    }
}

/// Ordered collection of listings
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Arc<PropertyRecord>>,
}

#[derive(Deserialize)]
struct CatalogFile {
    properties: Vec<PropertyRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate ids and empty titles
    pub fn new(properties: Vec<PropertyRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for (position, property) in properties.iter().enumerate() {
            if property.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(position));
            }
            if !seen.insert(property.id.as_str()) {
                return Err(CatalogError::DuplicateId(property.id.clone()));
            }
            if property.title.trim().is_empty() {
                return Err(CatalogError::EmptyTitle(property.id.clone()));
            }
        }

        Ok(Self {
            properties: properties.into_iter().map(Arc::new).collect(),
        })
    }

    /// Parse a catalog from YAML with a top-level `properties` list
    pub fn from_yaml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(content)?;
        Self::new(file.properties)
    }

    /// Load a catalog file from disk
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_yaml_str(&content)?;
        tracing::info!(path = %path.display(), listings = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Arc<PropertyRecord>> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn get_index(&self, index: usize) -> Option<&Arc<PropertyRecord>> {
        self.properties.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<PropertyRecord>> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// The listings that ship with the application
    pub fn builtin() -> Self {
        Self {
            properties: builtin_properties().into_iter().map(Arc::new).collect(),
        }
    }
}

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn builtin_properties() -> Vec<PropertyRecord> {
    use MediaCategory::*;

    vec![
        PropertyRecord {
            id: "prop-001".to_string(),
            title: "Modern Family Home".to_string(),
            property_type: "House and Lot".to_string(),
            location: "Vigan City, Ilocos Sur".to_string(),
            price: "₱8,500,000".to_string(),
            area: "250 sqm".to_string(),
            description: "Two-storey home a few minutes from Calle Crisologo, \
                with a landscaped garden and a covered two-car garage."
                .to_string(),
            bedrooms: Some(4),
            bathrooms: Some(3),
            features: features(&[
                "Two-car garage",
                "Landscaped garden",
                "Modern kitchen",
                "Solar water heater",
                "Gated subdivision",
            ]),
            images: vec![
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-001/front.jpg",
                    "Front facade at dusk",
                    Main,
                ),
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-001/living.jpg",
                    "Living room with high ceiling",
                    Gallery,
                ),
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-001/kitchen.jpg",
                    "Kitchen and dining area",
                    Gallery,
                ),
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-001/aerial.jpg",
                    "Aerial view of the lot",
                    Drone,
                ),
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-001/bedroom.jpg",
                    "Master bedroom",
                    Gallery,
                ),
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-001/garden.jpg",
                    "Back garden",
                    Gallery,
                ),
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-001/floor-plan.png",
                    "Ground and second floor plan",
                    FloorPlan,
                ),
            ],
            virtual_tour_ref: Some("https://tours.listing-gallery.example/prop-001".to_string()),
            drone_footage_ref: Some("https://video.listing-gallery.example/prop-001/drone".to_string()),
            floor_plan_ref: Some("https://images.listing-gallery.example/prop-001/floor-plan.pdf".to_string()),
        },
        PropertyRecord {
            id: "prop-002".to_string(),
            title: "Prime Agricultural Land".to_string(),
            property_type: "Agricultural Lot".to_string(),
            location: "Bantay, Ilocos Sur".to_string(),
            price: "₱3,200,000".to_string(),
            area: "2 hectares".to_string(),
            description: "Irrigated farmland with road access, currently planted \
                with rice and tobacco."
                .to_string(),
            bedrooms: None,
            bathrooms: None,
            features: features(&[
                "Irrigation canal",
                "Road frontage",
                "Clean title",
                "Flat terrain",
            ]),
            images: vec![
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-002/field.jpg",
                    "Rice field facing the mountains",
                    Main,
                ),
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-002/canal.jpg",
                    "Irrigation canal along the boundary",
                    Gallery,
                ),
                MediaAsset::new(
                    "https://images.listing-gallery.example/prop-002/aerial.jpg",
                    "Aerial view of the parcel",
                    Drone,
                ),
            ],
            virtual_tour_ref: None,
            drone_footage_ref: Some("https://video.listing-gallery.example/prop-002/drone".to_string()),
            floor_plan_ref: None,
        },
        PropertyRecord {
            id: "prop-003".to_string(),
            title: "Heritage Townhouse".to_string(),
            property_type: "Townhouse".to_string(),
            location: "Vigan City, Ilocos Sur".to_string(),
            price: "₱12,000,000".to_string(),
            area: "180 sqm".to_string(),
            description: "Restored Spanish-era townhouse with original narra \
                floors and capiz windows."
                .to_string(),
            bedrooms: Some(3),
            bathrooms: Some(2),
            features: features(&["Capiz windows", "Narra floors", "Interior courtyard"]),
            images: vec![MediaAsset::new(
                "assets/prop-003/facade.jpg",
                "Street facade",
                Main,
            )],
            virtual_tour_ref: Some("https://tours.listing-gallery.example/prop-003".to_string()),
            drone_footage_ref: None,
            floor_plan_ref: Some(String::new()),
        },
        PropertyRecord {
            id: "prop-004".to_string(),
            title: "Beachfront Commercial Lot".to_string(),
            property_type: "Commercial Lot".to_string(),
            location: "Santa Catalina, Ilocos Sur".to_string(),
            price: "₱6,750,000".to_string(),
            area: "1,200 sqm".to_string(),
            description: "Corner lot along the coastal road, zoned for resort \
                or retail use."
                .to_string(),
            bedrooms: None,
            bathrooms: None,
            features: features(&["Beach access", "Corner lot", "Commercial zoning"]),
            images: Vec::new(),
            virtual_tour_ref: None,
            drone_footage_ref: None,
            floor_plan_ref: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
properties:
  - id: lot-1
    title: Hillside Lot
    type: Residential Lot
    location: Caoayan, Ilocos Sur
    price: "₱900,000"
    images:
      - url: https://img.example/lot-1.jpg
        alt_text: View from the road
        category: main
      - url: https://img.example/lot-1-plan.png
        category: floor_plan
    floor_plan_ref: https://img.example/lot-1-plan.pdf
"#;

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        let records: Vec<PropertyRecord> = builtin.iter().map(|p| (**p).clone()).collect();
        assert!(Catalog::new(records).is_ok());
        assert_eq!(builtin.len(), 4);
    }

    #[test]
    fn test_builtin_lookup_by_id() {
        let catalog = Catalog::builtin();
        let land = catalog.get("prop-002").unwrap();
        assert_eq!(land.title, "Prime Agricultural Land");
        assert_eq!(land.location, "Bantay, Ilocos Sur");
        assert!(land.virtual_tour().is_none());
        assert!(catalog.get("prop-999").is_none());
    }

    #[test]
    fn test_blank_reference_is_absent() {
        let catalog = Catalog::builtin();
        let townhouse = catalog.get("prop-003").unwrap();
        assert_eq!(townhouse.floor_plan_ref.as_deref(), Some(""));
        assert!(townhouse.floor_plan().is_none());
    }

    #[test]
    fn test_from_yaml() {
        let catalog = Catalog::from_yaml_str(SAMPLE).unwrap();
        let lot = catalog.get_index(0).unwrap();
        assert_eq!(lot.property_type, "Residential Lot");
        assert_eq!(lot.images.len(), 2);
        assert_eq!(lot.images[1].category, MediaCategory::FloorPlan);
        assert_eq!(lot.images[1].alt_text, "");
        assert!(lot.features.is_empty());
        assert_eq!(lot.floor_plan(), Some("https://img.example/lot-1-plan.pdf"));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = Catalog::builtin();
        let first = (**catalog.get_index(0).unwrap()).clone();
        let err = Catalog::new(vec![first.clone(), first]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "prop-001"));
    }

    #[test]
    fn test_empty_title_rejected() {
        let mut record = (**Catalog::builtin().get_index(1).unwrap()).clone();
        record.title = "  ".to_string();
        let err = Catalog::new(vec![record]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyTitle(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.yaml");
        fs::write(&path, SAMPLE).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 1);

        let missing = Catalog::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(missing, CatalogError::Read { .. }));
    }

    #[test]
    fn test_rooms_summary() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("prop-001").unwrap().rooms_summary(), "4 bd · 3 ba");
        assert_eq!(catalog.get("prop-002").unwrap().rooms_summary(), "");
    }

    #[test]
    fn test_cover_image() {
        let catalog = Catalog::builtin();
        let home = catalog.get("prop-001").unwrap();
        assert_eq!(home.cover_image().unwrap().category, MediaCategory::Main);
        assert!(catalog.get("prop-004").unwrap().cover_image().is_none());

        // Falls back to the first image when no main image exists
        let lot = Catalog::from_yaml_str(SAMPLE).unwrap();
        let mut record = (**lot.get_index(0).unwrap()).clone();
        record.images.remove(0);
        assert_eq!(record.cover_image().unwrap().category, MediaCategory::FloorPlan);
    }
}
