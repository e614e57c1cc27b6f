//! Property tests for the rotation algebra and rover bounds.

use glam::IVec2;
use proptest::prelude::*;
use rover_telemetry::{Heading, Receiver, Rotation, Rover, Transmitter};

fn any_heading() -> impl Strategy<Value = Heading> {
    prop::sample::select(Heading::ALL.to_vec())
}

fn any_rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![Just(Rotation::Clockwise), Just(Rotation::Counterclockwise)]
}

proptest! {
    /// n clockwise turns followed by n counterclockwise turns is the identity.
    #[test]
    fn turn_round_trip(start in any_heading(), n in 0usize..64) {
        let mut h = start;
        for _ in 0..n {
            h = h.turn(Rotation::Clockwise);
        }
        for _ in 0..n {
            h = h.turn(Rotation::Counterclockwise);
        }
        prop_assert_eq!(h, start);
    }

    /// A rotation followed by its inverse is the identity.
    #[test]
    fn inverse_undoes_turn(start in any_heading(), rotation in any_rotation()) {
        prop_assert_eq!(start.turn(rotation).turn(rotation.inverse()), start);
    }

    /// Any valid plateau text yields a single baseline record at (1, 1) facing North.
    #[test]
    fn baseline_for_any_plateau(w in 1i32..=500, h in 1i32..=500) {
        let mut transmitter = Transmitter::new(Rover::new());
        transmitter.init(&format!("{w}x{h}")).unwrap();

        let log = transmitter.receiver_mut().state();
        prop_assert_eq!(log.len(), 1);
        prop_assert_eq!(log[0].position, IVec2::ONE);
        prop_assert_eq!(log[0].heading, Heading::North);
        let plateau = log[0].plateau.unwrap();
        prop_assert_eq!((plateau.width(), plateau.height()), (w, h));
    }

    /// Whatever the command text, the rover never leaves the plateau.
    #[test]
    fn rover_stays_on_plateau(
        w in 1i32..=8,
        h in 1i32..=8,
        commands in "[FLRflr]{1,100}",
    ) {
        let mut transmitter = Transmitter::new(Rover::new());
        transmitter.init(&format!("{w}x{h}")).unwrap();
        let _ = transmitter.send(&commands);

        for snapshot in transmitter.receiver().telemetry() {
            prop_assert!((1..=w).contains(&snapshot.position.x));
            prop_assert!((1..=h).contains(&snapshot.position.y));
        }
        let position = transmitter.receiver().position();
        prop_assert!((1..=w).contains(&position.x) && (1..=h).contains(&position.y));
    }
}
