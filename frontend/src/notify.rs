// frontend/src/notify.rs

use suraksha_shared::LatLng;

/// Container id of the map embedded in the modal.
pub const MODAL_MAP_CONTAINER: &str = "sosMap";

/// The modal map is built while its container is still hidden, so it has to be
/// re-measured once the modal is on screen.
pub const MAP_RELAYOUT_DELAY_MS: u64 = 100;

pub trait NotificationSurface {
    /// Show `title` with plain text, hiding the map view.
    fn notify(&self, title: &str, body: &str);

    /// Show `title` with the map view, hiding the text view.
    fn notify_with_map(&self, title: &str, center: LatLng);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ModalView {
    #[default]
    Text,
    Map(LatLng),
}

/// What the modal currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ModalState {
    pub visible: bool,
    pub title: String,
    pub text: String,
    pub view: ModalView,
}

impl ModalState {
    pub fn show_text(&mut self, title: &str, body: &str) {
        self.title = title.to_string();
        self.text = body.to_string();
        self.view = ModalView::Text;
        self.visible = true;
    }

    pub fn show_map(&mut self, title: &str, center: LatLng) {
        self.title = title.to_string();
        self.view = ModalView::Map(center);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn map_visible(&self) -> bool {
        self.visible && matches!(self.view, ModalView::Map(_))
    }

    pub fn text_visible(&self) -> bool {
        self.visible && self.view == ModalView::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_hides_map_and_back() {
        let mut modal = ModalState::default();
        modal.show_map("SOS Alert: Your Location", LatLng::new(1.0, 2.0));
        assert!(modal.map_visible());
        assert!(!modal.text_visible());

        modal.show_text("Journey Ended", "stopped");
        assert!(modal.text_visible());
        assert!(!modal.map_visible());
        assert_eq!(modal.title, "Journey Ended");
    }

    #[test]
    fn close_is_idempotent() {
        let mut modal = ModalState::default();
        modal.show_text("t", "b");
        modal.close();
        let after_first = modal.clone();
        modal.close();
        assert_eq!(modal, after_first);
        assert!(!modal.visible);
    }
}
