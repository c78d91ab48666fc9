use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use constants::camera_poses::{self, MOBILE_BREAKPOINT, ViewPose};

/// Named views the navigation bar can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Home,
    Sponsorships,
    Publishing,
}

/// UI-level view state. `None` until the initial reveal lands on home.
/// `home_arrivals` counts every arrival at home, including the reveal,
/// so the TV redirect only fires on an explicit second-or-later visit.
#[derive(Resource, Default)]
pub struct CurrentView {
    pub view: Option<ViewKind>,
    pub home_arrivals: u32,
}

impl CurrentView {
    /// Records an arrival at home and reports whether this one should
    /// trigger the TV redirect flight.
    pub fn record_home_arrival(&mut self) -> bool {
        self.view = Some(ViewKind::Home);
        self.home_arrivals += 1;
        self.home_arrivals >= 2
    }

    pub fn set(&mut self, view: ViewKind) {
        self.view = Some(view);
    }

    pub fn is(&self, view: ViewKind) -> bool {
        self.view == Some(view)
    }
}

/// Pose-table profile, switched on window width.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeviceProfile {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceProfile {
    pub fn from_width(width: f32) -> Self {
        if width <= MOBILE_BREAKPOINT {
            DeviceProfile::Mobile
        } else {
            DeviceProfile::Desktop
        }
    }

    /// Canonical pose for a view under this profile.
    pub fn pose_for(self, view: ViewKind) -> ViewPose {
        match (self, view) {
            (DeviceProfile::Desktop, ViewKind::Home) => camera_poses::DESKTOP_HOME,
            (DeviceProfile::Desktop, ViewKind::Sponsorships) => camera_poses::DESKTOP_SPONSORSHIPS,
            (DeviceProfile::Desktop, ViewKind::Publishing) => camera_poses::DESKTOP_PUBLISHING,
            (DeviceProfile::Mobile, ViewKind::Home) => camera_poses::MOBILE_HOME,
            (DeviceProfile::Mobile, ViewKind::Sponsorships) => camera_poses::MOBILE_SPONSORSHIPS,
            (DeviceProfile::Mobile, ViewKind::Publishing) => camera_poses::MOBILE_PUBLISHING,
        }
    }
}

/// Re-evaluates the device profile when the window resizes.
pub fn update_device_profile(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut profile: ResMut<DeviceProfile>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let next = DeviceProfile::from_width(window.width());
    if *profile != next {
        *profile = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_profile_selects_mobile_publishing_pose() {
        let profile = DeviceProfile::from_width(600.0);
        assert_eq!(profile, DeviceProfile::Mobile);
        assert_eq!(
            profile.pose_for(ViewKind::Publishing),
            camera_poses::MOBILE_PUBLISHING
        );
        assert_ne!(
            profile.pose_for(ViewKind::Publishing),
            camera_poses::DESKTOP_PUBLISHING
        );
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert_eq!(DeviceProfile::from_width(768.0), DeviceProfile::Mobile);
        assert_eq!(DeviceProfile::from_width(769.0), DeviceProfile::Desktop);
    }

    #[test]
    fn second_home_arrival_triggers_redirect() {
        let mut view = CurrentView::default();
        assert!(!view.record_home_arrival());
        assert!(view.record_home_arrival());
        assert!(view.record_home_arrival());
    }
}
