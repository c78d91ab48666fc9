//! Naming contract for the showroom glTF asset.
//!
//! The classifier matches these strings against authored node names.
//! They mirror the asset exactly and must not be edited without
//! re-exporting the model.

/// Room scene binary, relative to the asset root.
pub const ROOM_SCENE_PATH: &str = "MukiErdhLunLol02.glb";

/// Interactive picture frames, bound positionally to the sponsor catalog.
pub const FRAME_NAMES: [&str; 5] = ["Frame1", "Frame2", "Frame3", "Frame4", "Frame5"];

/// Publication display slots present in the asset. Only the first two
/// are interactive; slots 3 and 4 are force-hidden when present.
pub const PUBLICATION_NAMES: [&str; 4] = [
    "Publishing1",
    "Publishing2",
    "Publishing3",
    "Publishing4",
];

/// Number of interactive publication displays.
pub const INTERACTIVE_PUBLICATION_COUNT: usize = 2;

/// Per-frame sponsor artwork, index-aligned with `FRAME_NAMES`.
pub const FRAME_TEXTURE_PATHS: [&str; 5] = [
    "sponsors/Frame11.jpg",
    "sponsors/Frame22.jpg",
    "sponsors/Frame33.jpg",
    "sponsors/Frame44.jpg",
    "sponsors/Frame55.JPG",
];

/// Publication cover artwork, index-aligned with the interactive slots.
pub const PUBLICATION_TEXTURE_PATHS: [&str; 2] = [
    "publications/immomedien/Publishing1_Material.png",
    "publications/panoptikum/Publishing2_Material.png",
];

/// Sponsor metadata catalog consumed by the frame modal.
pub const SPONSOR_CATALOG_PATH: &str = "data/catalog.sponsors.json";

/// Publication metadata catalog consumed by the flipbook viewer.
pub const PUBLICATION_CATALOG_PATH: &str = "data/catalog.publications.json";

/// Clutter objects hidden by name, matched case-insensitively as substrings.
pub const HIDE_NAME_DENYLIST: &[&str] = &[
    "carpet",
    "bag",
    "rug",
    "mat",
    "taschen",
    "tasche",
    "backpack",
    "rucksack",
    "sack",
    "pouch",
    "handbag",
    "purse",
    "briefcase",
    "luggage",
    "suitcase",
];

/// Names that rescue an object from the positional clutter heuristic.
pub const KEEP_NAME_ALLOWLIST: &[&str] = &[
    "frame",
    "publishing",
    "tv",
    "laptop",
    "chair",
    "table",
    "wall",
    "floor",
    "ceiling",
];

/// Positional clutter heuristic: meshes below this height, further than
/// `CLUTTER_CENTER_MARGIN` from the room centre on both horizontal axes
/// and matching nothing in the allowlist, are hidden.
pub const CLUTTER_FLOOR_HEIGHT: f32 = 0.5;
pub const CLUTTER_CENTER_MARGIN: f32 = 1.0;

/// TV screen node candidates, tried in order.
pub const TV_SCREEN_CANDIDATES: &[&str] = &[
    "Televizija",
    "tvScreen",
    "TVScreen",
    "TV",
    "Screen",
    "tv",
    "screen",
    "monitor",
    "display",
];

/// Laptop screen node candidates, tried in order.
pub const LAPTOP_SCREEN_CANDIDATES: &[&str] = &[
    "laptopScreen",
    "laptop",
    "Laptop",
    "computer",
    "Computer",
    "screen",
    "Screen",
    "display",
    "Display",
];

/// Target opened when the TV redirect flight completes.
pub const EXTERNAL_REDIRECT_URL: &str = "https://revide.at";
