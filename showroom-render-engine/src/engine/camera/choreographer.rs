use bevy::prelude::*;

use constants::camera_poses::{
    GLIDE_ARRIVE_EPSILON, GLIDE_LERP_FACTOR, INTENT_DELAY_SECS, REVEAL_DELAY_SECS,
    REVEAL_DURATION_SECS, REVEAL_START_POSITION,
};
use constants::naming::EXTERNAL_REDIRECT_URL;

use crate::engine::camera::easing::{ease_out_cubic, ease_out_quart};
use crate::engine::camera::orbit::{ControlGates, OrbitState};
use crate::engine::core::view_state::{CurrentView, DeviceProfile, ViewKind};
use crate::engine::loading::progress::LoadingProgress;
use crate::interaction::intent::InteractionIntent;
use crate::rpc::host_bridge::ExternalRedirectRequest;

/// An eye/look-at pair, the unit every flight interpolates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    fn lerp(&self, other: &CameraPose, s: f32) -> CameraPose {
        CameraPose {
            position: self.position.lerp(other.position, s),
            target: self.target.lerp(other.target, s),
        }
    }

    fn close_to(&self, other: &CameraPose, epsilon: f32) -> bool {
        self.position.distance(other.position) < epsilon
            && self.target.distance(other.target) < epsilon
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingKind {
    QuartOut,
    CubicOut,
}

impl EasingKind {
    fn apply(self, t: f32) -> f32 {
        match self {
            EasingKind::QuartOut => ease_out_quart(t),
            EasingKind::CubicOut => ease_out_cubic(t),
        }
    }
}

/// How one flight moves the camera.
///
/// `Timed` interpolates both endpoints over a fixed duration. `Glide`
/// chases its destination with a constant-factor lerp per tick and
/// finishes on proximity, so its duration depends on frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPlan {
    Timed {
        from: CameraPose,
        to: CameraPose,
        duration: f32,
        easing: EasingKind,
    },
    Glide {
        to: CameraPose,
    },
}

/// What happens when a flight lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightOutcome {
    /// Hand control back to the orbit controller.
    Settle,
    /// Deliver an interaction intent after the settle delay.
    ResolveIntent(InteractionIntent),
    /// Open the external showroom site.
    ExternalRedirect,
}

#[derive(Debug, Clone, Copy)]
struct ActiveFlight {
    plan: FlightPlan,
    elapsed: f32,
    outcome: FlightOutcome,
    saved_gates: ControlGates,
}

/// The single owner of scripted camera motion.
///
/// At most one flight is active; a new request cancels the current one
/// and restores its gate snapshot before taking a fresh one, so gate
/// state never leaks across flights. Pending intents are cancellable
/// until their settle delay runs out.
#[derive(Resource, Default)]
pub struct CameraChoreographer {
    active: Option<ActiveFlight>,
    pending: Option<(InteractionIntent, f32)>,
}

impl CameraChoreographer {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Starts a flight, replacing any active one.
    pub fn request(&mut self, plan: FlightPlan, outcome: FlightOutcome, gates: &mut ControlGates) {
        if let Some(previous) = self.active.take() {
            *gates = previous.saved_gates;
        }
        self.pending = None;

        let saved_gates = *gates;
        *gates = ControlGates::closed();
        self.active = Some(ActiveFlight {
            plan,
            elapsed: 0.0,
            outcome,
            saved_gates,
        });
    }

    /// Aborts the active flight and any pending intent, restoring the
    /// gates to their pre-flight state.
    pub fn cancel(&mut self, gates: &mut ControlGates) {
        if let Some(flight) = self.active.take() {
            *gates = flight.saved_gates;
        }
        self.pending = None;
    }

    /// Advances the active flight. Returns the outcome on the tick the
    /// flight lands, with the gates already restored.
    pub fn tick(
        &mut self,
        delta: f32,
        pose: &mut CameraPose,
        gates: &mut ControlGates,
    ) -> Option<FlightOutcome> {
        let flight = self.active.as_mut()?;
        flight.elapsed += delta;

        let landed = match flight.plan {
            FlightPlan::Timed {
                from,
                to,
                duration,
                easing,
            } => {
                let s = easing.apply(flight.elapsed / duration);
                *pose = from.lerp(&to, s);
                if flight.elapsed >= duration {
                    *pose = to;
                    true
                } else {
                    false
                }
            }
            FlightPlan::Glide { to } => {
                *pose = pose.lerp(&to, GLIDE_LERP_FACTOR);
                if pose.close_to(&to, GLIDE_ARRIVE_EPSILON) {
                    *pose = to;
                    true
                } else {
                    false
                }
            }
        };

        if landed {
            let flight = self.active.take()?;
            *gates = flight.saved_gates;
            Some(flight.outcome)
        } else {
            None
        }
    }

    pub fn schedule_intent(&mut self, intent: InteractionIntent) {
        self.pending = Some((intent, INTENT_DELAY_SECS));
    }

    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Counts down the settle delay; yields the intent exactly once.
    pub fn tick_pending(&mut self, delta: f32) -> Option<InteractionIntent> {
        let (intent, remaining) = self.pending.as_mut()?;
        *remaining -= delta;
        if *remaining <= 0.0 {
            let intent = *intent;
            self.pending = None;
            Some(intent)
        } else {
            None
        }
    }
}

// Apply the active flight to the real camera every frame
pub fn drive_camera_flights(
    time: Res<Time>,
    mut choreographer: ResMut<CameraChoreographer>,
    mut gates: ResMut<ControlGates>,
    mut orbit: ResMut<OrbitState>,
    mut cameras: Query<&mut Transform, With<Camera3d>>,
    mut redirects: EventWriter<ExternalRedirectRequest>,
) {
    if !choreographer.is_active() {
        return;
    }
    let Ok(mut transform) = cameras.single_mut() else {
        return;
    };

    let mut pose = CameraPose::new(transform.translation, orbit.target);
    let outcome = choreographer.tick(time.delta_secs(), &mut pose, &mut gates);

    transform.translation = pose.position;
    transform.look_at(pose.target, Vec3::Y);
    orbit.target = pose.target;

    if let Some(outcome) = outcome {
        orbit.sync_from(pose.position, pose.target);
        match outcome {
            FlightOutcome::Settle => {}
            FlightOutcome::ResolveIntent(intent) => choreographer.schedule_intent(intent),
            FlightOutcome::ExternalRedirect => {
                redirects.write(ExternalRedirectRequest {
                    url: EXTERNAL_REDIRECT_URL.to_string(),
                });
            }
        }
    }
}

// Fire settled intents after their delay
pub fn deliver_pending_intents(
    time: Res<Time>,
    mut choreographer: ResMut<CameraChoreographer>,
    mut intents: EventWriter<InteractionIntent>,
) {
    if let Some(intent) = choreographer.tick_pending(time.delta_secs()) {
        intents.write(intent);
    }
}

// One-shot reveal: high above the room down to the device home pose
pub fn trigger_initial_reveal(
    time: Res<Time>,
    mut delay: Local<Option<Timer>>,
    mut progress: ResMut<LoadingProgress>,
    mut choreographer: ResMut<CameraChoreographer>,
    mut gates: ResMut<ControlGates>,
    mut view: ResMut<CurrentView>,
    profile: Res<DeviceProfile>,
) {
    if progress.reveal_played {
        return;
    }

    let timer = delay
        .get_or_insert_with(|| Timer::from_seconds(REVEAL_DELAY_SECS, TimerMode::Once));
    if !timer.tick(time.delta()).just_finished() {
        return;
    }

    let home = profile.pose_for(ViewKind::Home);
    let to = CameraPose::new(home.position, home.target);
    let from = CameraPose::new(REVEAL_START_POSITION, home.target);
    choreographer.request(
        FlightPlan::Timed {
            from,
            to,
            duration: REVEAL_DURATION_SECS,
            easing: EasingKind::QuartOut,
        },
        FlightOutcome::Settle,
        &mut gates,
    );

    // The reveal counts as the first home arrival.
    let _ = view.record_home_arrival();
    progress.reveal_played = true;
    println!("→ Playing reveal flight");
}

#[cfg(test)]
mod tests {
    use super::*;
    use constants::camera_poses::FRAME_FOCUS_OFFSET;

    fn home_pose() -> CameraPose {
        CameraPose::new(Vec3::new(2.2, 1.8, 4.8), Vec3::new(0.0, 1.0, 0.0))
    }

    #[test]
    fn focus_flight_lands_and_delivers_one_intent() {
        let mut choreographer = CameraChoreographer::default();
        let mut gates = ControlGates::default();
        let mut pose = home_pose();

        let frame_pos = Vec3::new(-1.0, 1.6, -2.0);
        let to = CameraPose::new(frame_pos + FRAME_FOCUS_OFFSET, frame_pos);
        choreographer.request(
            FlightPlan::Timed {
                from: pose,
                to,
                duration: 1.0,
                easing: EasingKind::CubicOut,
            },
            FlightOutcome::ResolveIntent(InteractionIntent::Frame(3)),
            &mut gates,
        );
        assert_eq!(gates, ControlGates::closed());

        assert_eq!(choreographer.tick(0.5, &mut pose, &mut gates), None);
        let outcome = choreographer.tick(0.6, &mut pose, &mut gates);
        assert_eq!(
            outcome,
            Some(FlightOutcome::ResolveIntent(InteractionIntent::Frame(3)))
        );
        assert!(pose.position.distance(to.position) < 1e-4);
        assert_eq!(gates, ControlGates::default());

        // The intent waits out the settle delay and fires exactly once.
        choreographer.schedule_intent(InteractionIntent::Frame(3));
        assert_eq!(choreographer.tick_pending(0.3), None);
        assert_eq!(
            choreographer.tick_pending(0.3),
            Some(InteractionIntent::Frame(3))
        );
        assert_eq!(choreographer.tick_pending(10.0), None);
    }

    #[test]
    fn replacement_restores_the_original_gate_snapshot() {
        let mut choreographer = CameraChoreographer::default();
        let mut gates = ControlGates::default();
        let mut pose = home_pose();
        let to = CameraPose::new(Vec3::new(0.5, 1.5, 1.2), Vec3::ZERO);

        choreographer.request(
            FlightPlan::Timed {
                from: pose,
                to,
                duration: 1.0,
                easing: EasingKind::CubicOut,
            },
            FlightOutcome::Settle,
            &mut gates,
        );
        // Mid-flight replacement must not snapshot the closed gates.
        choreographer.request(FlightPlan::Glide { to }, FlightOutcome::Settle, &mut gates);
        assert_eq!(gates, ControlGates::closed());

        while choreographer.tick(0.016, &mut pose, &mut gates).is_none() {}
        assert_eq!(gates, ControlGates::default());
    }

    #[test]
    fn cancel_restores_gates_and_drops_pending_intent() {
        let mut choreographer = CameraChoreographer::default();
        let mut gates = ControlGates::default();
        let to = CameraPose::new(Vec3::ONE, Vec3::ZERO);

        choreographer.request(FlightPlan::Glide { to }, FlightOutcome::Settle, &mut gates);
        choreographer.schedule_intent(InteractionIntent::Publication(1));
        choreographer.cancel(&mut gates);

        assert!(!choreographer.is_active());
        assert_eq!(gates, ControlGates::default());
        assert_eq!(choreographer.tick_pending(10.0), None);
    }

    #[test]
    fn glide_converges_to_its_destination() {
        let mut choreographer = CameraChoreographer::default();
        let mut gates = ControlGates::default();
        let mut pose = home_pose();
        let to = CameraPose::new(Vec3::new(0.5, 1.5, 1.2), Vec3::new(0.0, 1.5, 0.0));

        choreographer.request(FlightPlan::Glide { to }, FlightOutcome::Settle, &mut gates);

        let mut ticks = 0;
        loop {
            ticks += 1;
            assert!(ticks < 10_000, "glide never arrived");
            if let Some(outcome) = choreographer.tick(0.016, &mut pose, &mut gates) {
                assert_eq!(outcome, FlightOutcome::Settle);
                break;
            }
        }
        assert_eq!(pose, to);
    }
}
