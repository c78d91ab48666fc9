use bevy::math::Vec3;

/// One canonical camera pose: eye position plus orbit target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl ViewPose {
    pub const fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }
}

/// Windows at or below this logical width use the mobile pose table.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

pub const DESKTOP_HOME: ViewPose =
    ViewPose::new(Vec3::new(2.2, 1.8, 4.8), Vec3::new(0.0, 1.0, 0.0));
pub const DESKTOP_SPONSORSHIPS: ViewPose =
    ViewPose::new(Vec3::new(0.5, 1.5, 1.2), Vec3::new(0.0, 1.5, 0.0));
pub const DESKTOP_PUBLISHING: ViewPose =
    ViewPose::new(Vec3::new(0.0, 2.0, 1.2), Vec3::new(0.0, 1.0, 0.0));

pub const MOBILE_HOME: ViewPose =
    ViewPose::new(Vec3::new(1.8, 1.5, 3.5), Vec3::new(0.0, 1.0, 0.0));
pub const MOBILE_SPONSORSHIPS: ViewPose =
    ViewPose::new(Vec3::new(0.5, 1.2, 1.0), Vec3::new(0.5, 1.2, 0.0));
pub const MOBILE_PUBLISHING: ViewPose =
    ViewPose::new(Vec3::new(0.0, 1.8, 1.0), Vec3::new(0.0, 1.0, 0.0));

/// Initial reveal: start far and high, settle on the home pose.
pub const REVEAL_START_POSITION: Vec3 = Vec3::new(0.0, 25.0, 30.0);
pub const REVEAL_DURATION_SECS: f32 = 3.0;
/// Delay between scene readiness and the reveal, covering the loader fade.
pub const REVEAL_DELAY_SECS: f32 = 0.8;

/// View-switch glide: exponential approach, restartable, no fixed duration.
pub const GLIDE_LERP_FACTOR: f32 = 0.03;
pub const GLIDE_ARRIVE_EPSILON: f32 = 0.1;

/// Focus-on-object flight.
pub const FOCUS_DURATION_SECS: f32 = 1.0;
pub const FRAME_FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 2.0);
pub const PUBLICATION_FOCUS_OFFSET: Vec3 = Vec3::new(0.0, 2.0, 1.0);
/// Pause between focus arrival and the intent callback firing.
pub const INTENT_DELAY_SECS: f32 = 0.5;

/// TV screen redirect flight. The TV hangs on the left wall, so the
/// approach offset is lateral rather than frontal.
pub const REDIRECT_DURATION_SECS: f32 = 2.0;
pub const TV_REDIRECT_OFFSET: Vec3 = Vec3::new(2.0, 0.0, 0.0);

/// Publishing guide lifetime before auto-expiry.
pub const GUIDE_LIFETIME_SECS: f32 = 8.0;
