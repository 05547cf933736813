use std::f32::consts::PI;

use glam::Vec2;

use super::Vertex;

/// Triangle fan of a circle around the local origin.
/// The first vertex is the center, the last one repeats the first rim vertex to close the fan.
pub fn circle_fan(r: f32, segments: usize) -> Vec<Vertex> {
    let mut shape = Vec::with_capacity(segments + 2);
    let a = 2.0 * PI / segments as f32;

    shape.push(Vertex {
        position: [0.0, 0.0],
    });

    for i in 0..=segments {
        let i = i as f32;
        shape.push(Vertex {
            position: [r * f32::cos(a * i), r * f32::sin(a * i)],
        });
    }

    shape
}

pub fn line(p1: Vec2, p2: Vec2) -> Vec<Vertex> {
    vec![
        Vertex {
            position: p1.to_array(),
        },
        Vertex {
            position: p2.to_array(),
        },
    ]
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_circle_fan() {
        let segments = 25;
        let r = 0.15;
        let fan = circle_fan(r, segments);

        assert_eq!(fan.len(), segments + 2);
        assert_eq!(fan[0].position, [0.0, 0.0]);
        assert_eq!(fan[1].position, [r, 0.0]);

        // Closed
        let first = fan[1].position;
        let last = fan[segments + 1].position;
        assert!((first[0] - last[0]).abs() < EPSILON);
        assert!((first[1] - last[1]).abs() < EPSILON);

        for v in &fan[1..] {
            let len = Vec2::from(v.position).length();
            assert!((len - r).abs() < EPSILON);
        }

        // Quarter turn
        let quarter = circle_fan(1.0, 4);
        assert!((quarter[2].position[0]).abs() < EPSILON);
        assert!((quarter[2].position[1] - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_line() {
        let l = line(Vec2::new(0.1, 0.2), Vec2::new(-0.3, 0.4));
        assert_eq!(l.len(), 2);
        assert_eq!(l[0].position, [0.1, 0.2]);
        assert_eq!(l[1].position, [-0.3, 0.4]);
    }
}
