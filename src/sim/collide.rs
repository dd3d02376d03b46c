use eframe::egui::{Vec2, vec2};

use super::Node;

pub(super) const COLLIDE_GAP: f32 = 1.0;

fn fallback_direction(i: usize, j: usize) -> Vec2 {
    let angle = ((i as f32) * 0.618_034 + (j as f32) * 0.414_214) * std::f32::consts::TAU;
    vec2(angle.cos(), angle.sin())
}

/// Pushes overlapping pairs apart along their center line until every pair
/// keeps `gap` clearance or the iteration budget runs out. The correction is
/// split by squared radius so smaller circles yield more; pinned nodes do not
/// move and hand their share to the free partner.
pub(super) fn resolve(nodes: &mut [Node], iterations: usize, gap: f32) {
    for _ in 0..iterations {
        let mut any_overlap = false;
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let min_distance = nodes[i].radius + nodes[j].radius + gap;
                let delta = nodes[j].pos - nodes[i].pos;
                let distance_sq = delta.length_sq();
                if distance_sq >= min_distance * min_distance {
                    continue;
                }

                let distance = distance_sq.sqrt();
                let direction = if distance > 1e-4 {
                    delta / distance
                } else {
                    fallback_direction(i, j)
                };
                let overlap = min_distance - distance;

                let weight_i = nodes[j].radius * nodes[j].radius;
                let weight_j = nodes[i].radius * nodes[i].radius;
                let (share_i, share_j) = match (nodes[i].pin.is_some(), nodes[j].pin.is_some()) {
                    (true, true) => continue,
                    (true, false) => (0.0, 1.0),
                    (false, true) => (1.0, 0.0),
                    (false, false) => {
                        let total = weight_i + weight_j;
                        (weight_i / total, weight_j / total)
                    }
                };

                nodes[i].pos -= direction * (overlap * share_i);
                nodes[j].pos += direction * (overlap * share_j);
                any_overlap = true;
            }
        }
        if !any_overlap {
            break;
        }
    }
}
