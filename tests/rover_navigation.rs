// tests/rover_navigation.rs
use glam::IVec2;
use rover_telemetry::{
    Command, CommandReceiver, Heading, Plateau, Receiver, Rotation, Rover, RoverError, Telemetry,
};

fn setup(width: i32, height: i32) -> Rover {
    let mut rover = Rover::new();
    rover.init(Plateau::new(width, height).unwrap());
    rover
}

#[test]
fn test_turn_clockwise_sequence() {
    let expected = [Heading::East, Heading::South, Heading::West, Heading::North];
    for (turns, heading) in (1..=4).zip(expected) {
        let mut rover = setup(1, 1);
        for _ in 0..turns {
            rover.turn(Rotation::Clockwise);
        }
        assert_eq!(rover.heading(), heading, "after {turns} clockwise turns");
    }
}

#[test]
fn test_turn_counterclockwise_sequence() {
    let expected = [Heading::West, Heading::South, Heading::East, Heading::North];
    for (turns, heading) in (1..=4).zip(expected) {
        let mut rover = setup(1, 1);
        for _ in 0..turns {
            rover.turn(Rotation::Counterclockwise);
        }
        assert_eq!(rover.heading(), heading, "after {turns} counterclockwise turns");
    }
}

#[test]
fn test_mixed_turns() {
    let mut rover = setup(1, 1);
    rover.turn(Rotation::Clockwise);
    rover.turn(Rotation::Counterclockwise);
    rover.turn(Rotation::Clockwise);
    assert_eq!(rover.heading(), Heading::East);
}

#[test]
fn test_out_of_bounds_every_edge() {
    // Rover sits at (1, 1) on a 1x1 plateau; every direction leaves it.
    let cases = [
        (Heading::North, IVec2::new(1, 2)),
        (Heading::East, IVec2::new(2, 1)),
        (Heading::South, IVec2::new(1, 0)),
        (Heading::West, IVec2::new(0, 1)),
    ];
    for (heading, target) in cases {
        let mut rover = setup(1, 1);
        while rover.heading() != heading {
            rover.turn(Rotation::Clockwise);
        }

        let err = rover.move_by(1).unwrap_err();
        match err {
            RoverError::OutOfBounds {
                target: t,
                plateau,
            } => {
                assert_eq!(t.as_ivec2(), target, "{heading}");
                assert_eq!(plateau, Some(Plateau::new(1, 1).unwrap()));
            }
            other => panic!("expected OutOfBounds, got {other:?}"),
        }
        assert_eq!(rover.position(), IVec2::new(1, 1), "{heading}");
    }
}

#[test]
fn test_execute_requires_init() {
    let mut rover = Rover::new();
    assert_eq!(
        rover.execute(&[Command::TurnLeft]),
        Err(RoverError::NotInitialized)
    );
    assert_eq!(rover.heading(), Heading::North);
    assert!(rover.telemetry().is_empty());
}

#[test]
fn test_execute_records_one_snapshot_per_command() {
    let mut rover = setup(5, 5);
    rover
        .execute(&[Command::Forward, Command::TurnRight, Command::Forward])
        .unwrap();

    let plateau = Some(Plateau::new(5, 5).unwrap());
    assert_eq!(
        rover.telemetry(),
        [
            Telemetry::new(plateau, IVec2::new(1, 2), Heading::North),
            Telemetry::new(plateau, IVec2::new(1, 2), Heading::East),
            Telemetry::new(plateau, IVec2::new(2, 2), Heading::East),
        ]
    );
}

#[test]
fn test_failure_mid_batch_keeps_earlier_telemetry() {
    let mut rover = setup(2, 2);
    let batch = [
        Command::Forward,
        Command::Forward, // off the top edge
        Command::TurnRight,
    ];

    let err = rover.execute(&batch).unwrap_err();
    assert!(matches!(err, RoverError::OutOfBounds { .. }));

    // The first move landed, the failing move and everything after it did not.
    assert_eq!(rover.telemetry().len(), 1);
    assert_eq!(rover.position(), IVec2::new(1, 2));
    assert_eq!(rover.heading(), Heading::North);
}

#[test]
fn test_state_seeds_baseline_once() {
    let mut rover = setup(4, 6);

    let first = rover.state().to_vec();
    assert_eq!(
        first,
        [Telemetry::new(
            Some(Plateau::new(4, 6).unwrap()),
            IVec2::new(1, 1),
            Heading::North
        )]
    );

    assert_eq!(rover.state(), first.as_slice());
    assert_eq!(rover.telemetry().len(), 1);
}

#[test]
fn test_state_before_init_has_no_plateau() {
    let mut rover = Rover::new();
    let log = rover.state();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].plateau, None);
    assert_eq!(log[0].position, IVec2::ONE);
}

#[test]
fn test_baseline_precedes_later_batches() {
    let mut rover = setup(3, 3);
    rover.state();
    rover.execute(&[Command::Forward]).unwrap();

    let log = rover.state();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].position, IVec2::new(1, 1));
    assert_eq!(log[1].position, IVec2::new(1, 2));
}
