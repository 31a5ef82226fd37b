// Media Modes
// Which kind of visual content the detail modal shows, and the filtered image set per mode

use std::fmt;

use super::catalog::{MediaAsset, MediaCategory, PropertyRecord};

/// Media mode of the detail modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MediaMode {
    #[default]
    Gallery,
    Virtual,
    Drone,
    Floor,
}

impl MediaMode {
    /// All modes in tab order
    pub const ALL: [MediaMode; 4] = [
        MediaMode::Gallery,
        MediaMode::Virtual,
        MediaMode::Drone,
        MediaMode::Floor,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MediaMode::Gallery => "Photo Gallery",
            MediaMode::Virtual => "Virtual Tour",
            MediaMode::Drone => "Drone Footage",
            MediaMode::Floor => "Floor Plan",
        }
    }

    /// Whether the property has what this mode needs.
    /// Gallery is always available, even with no photos.
    pub fn is_available_for(self, property: &PropertyRecord) -> bool {
        match self {
            MediaMode::Gallery => true,
            MediaMode::Virtual => property.virtual_tour().is_some(),
            MediaMode::Drone => property.drone_footage().is_some(),
            MediaMode::Floor => property.floor_plan().is_some(),
        }
    }

    /// Whether an asset category belongs to this mode's image set
    fn includes(self, category: MediaCategory) -> bool {
        match self {
            MediaMode::Gallery => matches!(category, MediaCategory::Main | MediaCategory::Gallery),
            MediaMode::Drone => category == MediaCategory::Drone,
            MediaMode::Floor => category == MediaCategory::FloorPlan,
            // Virtual mode shows a static panel instead of images
            MediaMode::Virtual => false,
        }
    }
}

impl fmt::Display for MediaMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Images shown for `mode`, in catalog order
pub fn filtered_set(property: &PropertyRecord, mode: MediaMode) -> Vec<&MediaAsset> {
    property
        .images
        .iter()
        .filter(|asset| mode.includes(asset.category))
        .collect()
}

/// Modes the UI may offer for `property`, in tab order
pub fn available_modes(property: &PropertyRecord) -> Vec<MediaMode> {
    MediaMode::ALL
        .into_iter()
        .filter(|mode| mode.is_available_for(property))
        .collect()
}
