//! The fixed sample dataset: four labelled circles linked all-pairs.

use anyhow::Result;
use eframe::egui::{Vec2, pos2};

use crate::pack;
use crate::sim::{LinkSpec, Node, Simulation};

pub const SURFACE_WIDTH: f32 = 600.0;
pub const SURFACE_HEIGHT: f32 = 400.0;

const PACK_PADDING: f32 = 5.0;

struct NodeSpec {
    id: u32,
    label: &'static str,
    radius: f32,
}

const SAMPLE_NODES: [NodeSpec; 4] = [
    NodeSpec {
        id: 1,
        label: "A",
        radius: 40.0,
    },
    NodeSpec {
        id: 2,
        label: "B",
        radius: 25.0,
    },
    NodeSpec {
        id: 3,
        label: "C",
        radius: 60.0,
    },
    NodeSpec {
        id: 4,
        label: "D",
        radius: 45.0,
    },
];

fn all_pair_links(specs: &[NodeSpec]) -> Vec<LinkSpec> {
    let mut links = Vec::new();
    for (i, a) in specs.iter().enumerate() {
        for b in &specs[i + 1..] {
            links.push(LinkSpec {
                source: a.id,
                target: b.id,
            });
        }
    }
    links
}

/// Builds the demo simulation: positions seeded by circle packing so the
/// layout starts collision-free, centered on the drawing surface.
pub fn sample_simulation() -> Result<Simulation> {
    let radii = SAMPLE_NODES
        .iter()
        .map(|spec| spec.radius)
        .collect::<Vec<_>>();
    let positions = pack::pack_positions(&radii, SURFACE_WIDTH, SURFACE_HEIGHT, PACK_PADDING);

    let nodes = SAMPLE_NODES
        .iter()
        .zip(positions)
        .map(|(spec, pos)| Node {
            id: spec.id,
            label: spec.label.to_owned(),
            radius: spec.radius,
            pos,
            vel: Vec2::ZERO,
            pin: None,
        })
        .collect();

    Simulation::new(
        nodes,
        &all_pair_links(&SAMPLE_NODES),
        pos2(SURFACE_WIDTH * 0.5, SURFACE_HEIGHT * 0.5),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    #[test]
    fn sample_links_cover_all_pairs() {
        let links = all_pair_links(&SAMPLE_NODES);
        assert_eq!(links.len(), 6);
    }

    #[test]
    fn sample_simulation_settles_without_overlap() {
        let mut sim = sample_simulation().unwrap();

        let mut ticks = 0;
        while sim.tick() {
            // Mirror the frame handler's extra collision passes.
            sim.resolve_overlaps(6);
            ticks += 1;
            assert!(ticks < 2000, "simulation never settled");
        }
        assert!(sim.settled());

        let nodes = sim.nodes();
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                let distance = nodes[i].pos.distance(nodes[j].pos);
                let required = nodes[i].radius + nodes[j].radius;
                assert!(
                    distance >= required - 0.5,
                    "nodes {} and {} overlap: {distance} < {required}",
                    nodes[i].label,
                    nodes[j].label
                );
            }
        }

        for link in sim.links() {
            assert!(link.source < nodes.len());
            assert!(link.target < nodes.len());
            assert_ne!(link.source, link.target);
        }
    }

    #[test]
    fn dragging_node_c_pins_it_then_frees_it() {
        let mut sim = sample_simulation().unwrap();
        let index = sim
            .nodes()
            .iter()
            .position(|node| node.label == "C")
            .unwrap();

        // Drag start: pin at the current position, re-energize.
        let current = sim.nodes()[index].pos;
        sim.set_pin(index, current);
        sim.set_alpha_target(0.3);
        sim.restart();
        sim.tick();

        // Drag move: the pin follows the pointer.
        sim.set_pin(index, pos2(100.0, 100.0));
        sim.tick();
        assert_eq!(sim.nodes()[index].pos, pos2(100.0, 100.0));

        // Drag end: the node resumes free simulation.
        sim.clear_pin(index);
        sim.set_alpha_target(0.0);
        let released = sim.nodes()[index].pos;
        sim.tick();
        assert_ne!(sim.nodes()[index].pos, released);
    }
}
