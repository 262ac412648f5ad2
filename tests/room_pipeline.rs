#![allow(
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use std::fmt::Write as _;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use roombox::io::{load_ordered, order_points, StartPolicy};
use roombox::math::Point3;
use roombox::operations::{EstimateRoom, EstimatorParams};
use roombox::segmentation::segment_curves;

const WIDTH: f64 = 8.0;
const DEPTH: f64 = 5.0;
const CEILING: f64 = 2.5;
const SPACING: f64 = 0.2;

/// Wall samples of a `WIDTH` x `DEPTH` room, a third at the floor, a third
/// at the ceiling and a third at mid height, in shuffled order.
fn scanned_room(seed: u64) -> Vec<Point3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let walls = [
        ((0.0, 0.0), (WIDTH, 0.0)),
        ((WIDTH, 0.0), (WIDTH, DEPTH)),
        ((WIDTH, DEPTH), (0.0, DEPTH)),
        ((0.0, DEPTH), (0.0, 0.0)),
    ];
    let mut points = Vec::new();
    for ((ax, ay), (bx, by)) in walls {
        let len: f64 = (bx - ax).hypot(by - ay);
        let steps = (len / SPACING).round() as usize;
        for s in 0..steps {
            let t = s as f64 * SPACING / len;
            let x = ax + (bx - ax) * t + rng.random_range(-0.01..0.01);
            let y = ay + (by - ay) * t + rng.random_range(-0.01..0.01);
            let z = match points.len() % 3 {
                0 => rng.random_range(-0.02..0.02),
                1 => CEILING + rng.random_range(-0.02..0.02),
                _ => rng.random_range(0.8..1.7),
            };
            points.push(Point3::new(x, y, z));
        }
    }
    points.shuffle(&mut rng);
    points
}

fn assert_room(points: &[Point3], seed: u64) {
    let room = EstimateRoom::new(EstimatorParams::default())
        .execute(points, &mut StdRng::seed_from_u64(seed))
        .unwrap();

    let [ll, lr, ur, ul] = room.bounding_box.footprint();
    for (got, want) in [(ll.x, 0.0), (ll.y, 0.0), (ur.x, WIDTH), (ur.y, DEPTH)] {
        assert!((got - want).abs() < 0.3, "footprint {:?}", room.bounding_box);
    }
    assert_eq!(ll.x, ul.x);
    assert_eq!(lr.x, ur.x);

    assert!(room.floor.z.abs() < 0.05, "floor {:?}", room.floor);
    assert!((room.ceiling.z - CEILING).abs() < 0.05, "ceiling {:?}", room.ceiling);
    assert!(room.bounding_box.floor().iter().all(|v| v.z == room.floor.z));
    assert!(room.bounding_box.ceiling().iter().all(|v| v.z == room.ceiling.z));

    assert_eq!(room.path.segment_count(), 4);
    assert_eq!(room.signal.len(), points.len());
}

#[test]
fn recovers_rectangular_room() {
    for seed in [1, 2, 3] {
        let ordered = order_points(&scanned_room(seed), StartPolicy::FarthestFromCentroid);
        assert_room(&ordered, seed);
    }
}

#[test]
fn recovers_room_from_csv() {
    let mut csv = String::from("X\n");
    for p in scanned_room(7) {
        writeln!(csv, "\"{} {} {}\"", p.x, p.y, p.z).unwrap();
    }
    let path = std::env::temp_dir().join(format!("roombox-room-{}.csv", std::process::id()));
    std::fs::write(&path, csv).unwrap();
    let ordered = load_ordered(&path, StartPolicy::default());
    std::fs::remove_file(&path).unwrap();
    assert_room(&ordered.unwrap(), 7);
}

#[test]
fn curves_cover_every_wall() {
    let ordered = order_points(&scanned_room(4), StartPolicy::default());
    let room = EstimateRoom::new(EstimatorParams::default())
        .execute(&ordered, &mut StdRng::seed_from_u64(4))
        .unwrap();
    let curves = segment_curves(room.signal.values(), &room.path).unwrap();
    assert_eq!(curves.len(), 4);
    for curve in &curves {
        let worst = curve
            .samples
            .iter()
            .map(|&(i, fitted)| (room.signal.values()[i] - fitted).abs())
            .fold(0.0, f64::max);
        assert!(worst < 0.5, "segment {:?} deviates by {worst}", curve.range);
    }
}
