/*
 * Copyright 2019 Boyd Johnson
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

/// Rough conversion between a radar range in km and degrees of arc on the
/// map.
pub const KM_PER_DEGREE: f64 = 111.1;

/// Arc sample spacing in degrees.
const RESOLUTION: f64 = 1.0;

/// Build a closed pie-slice ring for a radar coverage area: center,
/// samples along the arc from `start` to `start + spread` (trigonometric
/// degrees), back to center. First and last ring coordinates are equal.
///
/// Returns `None` when the wedge is degenerate: zero spread, non-positive
/// radius, or non-finite inputs. `|spread| >= 360` covers the whole circle,
/// so the ring is just the sampled circle without the center vertex.
pub fn wedge_ring(
    center: (f64, f64),
    radius: f64,
    start: f64,
    spread: f64,
) -> Option<Vec<Vec<f64>>> {
    let (cx, cy) = center;
    if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) {
        return None;
    }
    if !(start.is_finite() && spread.is_finite()) {
        return None;
    }
    if radius <= 0.0 || spread == 0.0 {
        return None;
    }

    let arc_point = |angle_deg: f64| {
        let theta = angle_deg.to_radians();
        vec![cx + radius * theta.cos(), cy + radius * theta.sin()]
    };

    if spread.abs() >= 360.0 {
        let steps = (360.0 / RESOLUTION) as usize;
        let mut ring = Vec::with_capacity(steps + 1);
        for i in 0..steps {
            ring.push(arc_point(start + 360.0 * i as f64 / steps as f64));
        }
        let first = ring[0].clone();
        ring.push(first);
        return Some(ring);
    }

    let steps = (spread.abs() / RESOLUTION).ceil().max(1.0) as usize;
    let mut ring = Vec::with_capacity(steps + 3);
    ring.push(vec![cx, cy]);
    for i in 0..=steps {
        ring.push(arc_point(start + spread * i as f64 / steps as f64));
    }
    ring.push(vec![cx, cy]);
    Some(ring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wedge_ring_is_closed() {
        let ring = wedge_ring((-80.0, 32.0), 1.5, 30.0, 120.0).unwrap();

        assert!(ring.len() >= 3);
        assert_eq!(ring.first(), ring.last());
        // Apex is the radar site.
        assert_eq!(ring[0], vec![-80.0, 32.0]);
    }

    #[test]
    fn test_arc_points_sit_on_the_radius() {
        let ring = wedge_ring((10.0, 20.0), 2.0, -45.0, 90.0).unwrap();

        for point in &ring[1..ring.len() - 1] {
            let dx = point[0] - 10.0;
            let dy = point[1] - 20.0;
            assert!((dx.hypot(dy) - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_one_sample_per_degree_of_spread() {
        let ring = wedge_ring((0.0, 0.0), 1.0, 0.0, 90.0).unwrap();
        // center + 91 arc samples + center
        assert_eq!(ring.len(), 93);
    }

    #[test]
    fn test_zero_spread_is_degenerate() {
        assert!(wedge_ring((0.0, 0.0), 1.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_bad_radius_is_degenerate() {
        assert!(wedge_ring((0.0, 0.0), 0.0, 0.0, 90.0).is_none());
        assert!(wedge_ring((0.0, 0.0), -1.0, 0.0, 90.0).is_none());
    }

    #[test]
    fn test_non_finite_inputs_are_degenerate() {
        assert!(wedge_ring((0.0, 0.0), 1.0, f64::NAN, 90.0).is_none());
        assert!(wedge_ring((0.0, 0.0), 1.0, 0.0, f64::INFINITY).is_none());
        assert!(wedge_ring((f64::NAN, 0.0), 1.0, 0.0, 90.0).is_none());
    }

    #[test]
    fn test_full_circle_has_no_center_vertex() {
        let ring = wedge_ring((5.0, 5.0), 1.0, 0.0, 360.0).unwrap();

        assert_eq!(ring.first(), ring.last());
        for point in &ring {
            let dx = point[0] - 5.0;
            let dy = point[1] - 5.0;
            assert!((dx.hypot(dy) - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_negative_spread_sweeps_clockwise() {
        let ring = wedge_ring((0.0, 0.0), 1.0, 90.0, -90.0).unwrap();

        // First arc sample at 90 degrees, last at 0 degrees.
        let first_arc = &ring[1];
        let last_arc = &ring[ring.len() - 2];
        assert!((first_arc[0] - 0.0).abs() < 1e-9 && (first_arc[1] - 1.0).abs() < 1e-9);
        assert!((last_arc[0] - 1.0).abs() < 1e-9 && (last_arc[1] - 0.0).abs() < 1e-9);
    }
}
