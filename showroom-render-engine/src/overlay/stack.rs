use bevy::prelude::*;

/// One open flipbook viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct FlipbookSession {
    pub publication: usize,
    /// Index of the left page of the current two-page spread.
    pub spread: usize,
    /// Set once a page fails or times out; switches the viewer to the
    /// external fallback panel.
    pub error: Option<String>,
    pub load_elapsed: f32,
}

impl FlipbookSession {
    pub fn new(publication: usize) -> Self {
        Self {
            publication,
            spread: 0,
            error: None,
            load_elapsed: 0.0,
        }
    }
}

/// The overlay layers, in closing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayLayer {
    FrameModal,
    Flipbook,
    ZoomedPage,
}

/// Which overlay surfaces are open. The zoomed page exists only inside
/// an open flipbook; closing follows strict top-down order so escape
/// always peels one layer.
#[derive(Resource, Default)]
pub struct OverlayStack {
    frame_modal: Option<usize>,
    flipbook: Option<FlipbookSession>,
    zoomed_page: Option<usize>,
}

impl OverlayStack {
    pub fn open_frame_modal(&mut self, sponsor: usize) {
        self.close_all();
        self.frame_modal = Some(sponsor);
    }

    pub fn open_flipbook(&mut self, publication: usize) {
        self.close_all();
        self.flipbook = Some(FlipbookSession::new(publication));
    }

    pub fn zoom_page(&mut self, page: usize) {
        if self.flipbook.is_some() {
            self.zoomed_page = Some(page);
        }
    }

    pub fn frame_modal(&self) -> Option<usize> {
        self.frame_modal
    }

    pub fn flipbook(&self) -> Option<&FlipbookSession> {
        self.flipbook.as_ref()
    }

    pub fn flipbook_mut(&mut self) -> Option<&mut FlipbookSession> {
        self.flipbook.as_mut()
    }

    pub fn zoomed_page(&self) -> Option<usize> {
        self.zoomed_page
    }

    pub fn topmost(&self) -> Option<OverlayLayer> {
        if self.zoomed_page.is_some() {
            Some(OverlayLayer::ZoomedPage)
        } else if self.flipbook.is_some() {
            Some(OverlayLayer::Flipbook)
        } else if self.frame_modal.is_some() {
            Some(OverlayLayer::FrameModal)
        } else {
            None
        }
    }

    /// Closes one layer; returns what was closed.
    pub fn close_topmost(&mut self) -> Option<OverlayLayer> {
        let top = self.topmost()?;
        match top {
            OverlayLayer::ZoomedPage => self.zoomed_page = None,
            OverlayLayer::Flipbook => self.flipbook = None,
            OverlayLayer::FrameModal => self.frame_modal = None,
        }
        Some(top)
    }

    pub fn close_all(&mut self) {
        self.zoomed_page = None;
        self.flipbook = None;
        self.frame_modal = None;
    }

    pub fn is_empty(&self) -> bool {
        self.topmost().is_none()
    }
}

pub fn close_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut overlays: ResMut<OverlayStack>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        overlays.close_topmost();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_peels_layers_top_down() {
        let mut stack = OverlayStack::default();
        stack.open_flipbook(1);
        stack.zoom_page(3);

        assert_eq!(stack.close_topmost(), Some(OverlayLayer::ZoomedPage));
        assert!(stack.flipbook().is_some());
        assert_eq!(stack.close_topmost(), Some(OverlayLayer::Flipbook));
        assert_eq!(stack.close_topmost(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn zoom_requires_an_open_flipbook() {
        let mut stack = OverlayStack::default();
        stack.zoom_page(0);
        assert_eq!(stack.zoomed_page(), None);

        stack.open_flipbook(0);
        stack.zoom_page(2);
        assert_eq!(stack.zoomed_page(), Some(2));
    }

    #[test]
    fn closing_the_flipbook_drops_its_zoom() {
        let mut stack = OverlayStack::default();
        stack.open_flipbook(0);
        stack.zoom_page(1);
        stack.close_all();
        assert_eq!(stack.zoomed_page(), None);
    }

    #[test]
    fn opening_one_surface_closes_the_other() {
        let mut stack = OverlayStack::default();
        stack.open_frame_modal(2);
        stack.open_flipbook(0);
        assert_eq!(stack.frame_modal(), None);
        assert_eq!(stack.topmost(), Some(OverlayLayer::Flipbook));
    }
}
