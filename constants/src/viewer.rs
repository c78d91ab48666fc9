use bevy::color::Color;

/// Publication page bitmaps render at this scale in the spread view.
pub const FLIPBOOK_DISPLAY_SCALE: f32 = 1.2;

/// Scale applied to the single-page zoom view.
pub const FLIPBOOK_ZOOM_SCALE: f32 = 2.5;

/// Unscaled page width in logical pixels; height follows the bitmap.
pub const PAGE_BASE_WIDTH: f32 = 420.0;

/// A page still loading after this long is treated as blocked and the
/// viewer offers the external fallback.
pub const PAGE_LOAD_TIMEOUT_SECS: f32 = 6.0;

/// Showroom accent gold, shared by guides, labels, and overlay chrome.
pub const ACCENT_COLOR: Color = Color::srgb(0.737, 0.639, 0.459);

/// Frame caption placement below the frame centre.
pub const FRAME_LABEL_DROP: f32 = 0.15;
pub const FRAME_LABEL_FONT_SIZE: f32 = 14.0;
