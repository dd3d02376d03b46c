use eframe::egui::{Pos2, Vec2, vec2};

use super::{Link, Node};

// Negative strength makes the many-body force a net repulsion.
const MANY_BODY_STRENGTH: f32 = -50.0;
const CENTER_STRENGTH: f32 = 0.1;
const LINK_DISTANCE: f32 = 10.0;
const LINK_STRENGTH: f32 = 0.3;

// Deterministic stand-in direction for coincident points.
fn jiggle(i: usize, j: usize) -> Vec2 {
    let angle = ((i as f32) * 0.618_034 + (j as f32) * 0.414_214) * std::f32::consts::TAU;
    vec2(angle.cos(), angle.sin()) * 1e-3
}

pub(super) fn apply_many_body(nodes: &mut [Node], alpha: f32) {
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let mut delta = nodes[j].pos - nodes[i].pos;
            if delta.length_sq() < 1e-8 {
                delta = jiggle(i, j);
            }
            let weight = MANY_BODY_STRENGTH * alpha / delta.length_sq();
            nodes[i].vel += delta * weight;
            nodes[j].vel -= delta * weight;
        }
    }
}

// Spring toward LINK_DISTANCE between linked pairs, split between the
// endpoints by link degree so well-connected nodes move less.
pub(super) fn apply_links(nodes: &mut [Node], links: &[Link], degree: &[u32], alpha: f32) {
    for link in links {
        let (s, t) = (link.source, link.target);
        let mut delta = (nodes[t].pos + nodes[t].vel) - (nodes[s].pos + nodes[s].vel);
        if delta.length_sq() < 1e-8 {
            delta = jiggle(s, t);
        }
        let length = delta.length();
        let pull = delta * ((length - LINK_DISTANCE) / length * alpha * LINK_STRENGTH);
        let bias = degree[s] as f32 / (degree[s] + degree[t]) as f32;
        nodes[t].vel -= pull * bias;
        nodes[s].vel += pull * (1.0 - bias);
    }
}

// Shifts every position so the mean moves a fraction of the way toward the
// center point. Acts on positions directly rather than velocities.
pub(super) fn apply_center(nodes: &mut [Node], center: Pos2) {
    if nodes.is_empty() {
        return;
    }

    let mut sum = Vec2::ZERO;
    for node in nodes.iter() {
        sum += node.pos.to_vec2();
    }
    let shift = (sum / nodes.len() as f32 - center.to_vec2()) * CENTER_STRENGTH;
    for node in nodes.iter_mut() {
        node.pos -= shift;
    }
}
