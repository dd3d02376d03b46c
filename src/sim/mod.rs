//! Force simulation engine: energy (alpha) bookkeeping, force application,
//! collision resolution, and semi-implicit Euler integration per tick.

use anyhow::{Result, bail};
use eframe::egui::{Pos2, Vec2};

mod collide;
mod forces;

const ALPHA_MIN: f32 = 0.001;
// 1 - ALPHA_MIN^(1/300): decays to the minimum in roughly 300 ticks.
const ALPHA_DECAY: f32 = 0.022_8;
const VELOCITY_DECAY: f32 = 0.6;
const COLLIDE_ITERATIONS: usize = 4;

pub struct Node {
    pub id: u32,
    pub label: String,
    pub radius: f32,
    pub pos: Pos2,
    pub vel: Vec2,
    /// While set, integration is skipped and `pos` is forced to this point
    /// every tick. Used by the drag controller.
    pub pin: Option<Pos2>,
}

/// A link as declared in the input data, endpoints named by node id.
pub struct LinkSpec {
    pub source: u32,
    pub target: u32,
}

/// A link resolved to node indices at simulation construction.
pub struct Link {
    pub source: usize,
    pub target: usize,
}

pub struct Simulation {
    nodes: Vec<Node>,
    links: Vec<Link>,
    degree: Vec<u32>,
    center: Pos2,
    alpha: f32,
    alpha_target: f32,
    stopped: bool,
}

impl Simulation {
    /// Fails fast if a link references a node id that is not present.
    pub fn new(nodes: Vec<Node>, link_specs: &[LinkSpec], center: Pos2) -> Result<Self> {
        let mut links = Vec::with_capacity(link_specs.len());
        let mut degree = vec![0u32; nodes.len()];
        for spec in link_specs {
            let source = resolve_id(&nodes, spec.source)?;
            let target = resolve_id(&nodes, spec.target)?;
            degree[source] += 1;
            degree[target] += 1;
            links.push(Link { source, target });
        }

        Ok(Self {
            nodes,
            links,
            degree,
            center,
            alpha: 1.0,
            alpha_target: 0.0,
            stopped: false,
        })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Whether alpha has decayed below the convergence threshold.
    pub fn settled(&self) -> bool {
        self.alpha < ALPHA_MIN
    }

    /// Whether a call to [`Simulation::tick`] would advance the layout.
    pub fn active(&self) -> bool {
        !self.stopped && (!self.settled() || self.alpha_target >= ALPHA_MIN)
    }

    /// One simulation step: decay alpha, apply the registered forces to
    /// velocities, resolve collisions, then integrate velocities into
    /// positions. Pinned nodes are forced to their pin instead. Returns
    /// whether the simulation is still active afterwards.
    pub fn tick(&mut self) -> bool {
        if !self.active() {
            return false;
        }

        self.alpha += (self.alpha_target - self.alpha) * ALPHA_DECAY;

        forces::apply_many_body(&mut self.nodes, self.alpha);
        forces::apply_links(&mut self.nodes, &self.links, &self.degree, self.alpha);
        forces::apply_center(&mut self.nodes, self.center);
        collide::resolve(&mut self.nodes, COLLIDE_ITERATIONS, collide::COLLIDE_GAP);

        for node in &mut self.nodes {
            if let Some(pin) = node.pin {
                node.pos = pin;
                node.vel = Vec2::ZERO;
            } else {
                node.vel *= VELOCITY_DECAY;
                node.pos += node.vel;
            }
            debug_assert!(node.pos.x.is_finite() && node.pos.y.is_finite());
        }

        self.active()
    }

    /// Extra positional collision passes on top of the ones inside
    /// [`Simulation::tick`]; reduces visible overlap at added per-tick cost.
    pub fn resolve_overlaps(&mut self, iterations: usize) {
        collide::resolve(&mut self.nodes, iterations, collide::COLLIDE_GAP);
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    pub fn set_alpha_target(&mut self, target: f32) {
        self.alpha_target = target;
    }

    pub fn restart(&mut self) {
        self.stopped = false;
    }

    /// Idempotent: after the first call every further tick is a no-op until
    /// [`Simulation::restart`].
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn set_pin(&mut self, index: usize, pos: Pos2) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.pin = Some(pos);
        }
    }

    pub fn clear_pin(&mut self, index: usize) {
        if let Some(node) = self.nodes.get_mut(index) {
            node.pin = None;
        }
    }
}

fn resolve_id(nodes: &[Node], id: u32) -> Result<usize> {
    match nodes.iter().position(|node| node.id == id) {
        Some(index) => Ok(index),
        None => bail!("link references unknown node id {id}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::pos2;

    fn node(id: u32, x: f32, y: f32, radius: f32) -> Node {
        Node {
            id,
            label: format!("n{id}"),
            radius,
            pos: pos2(x, y),
            vel: Vec2::ZERO,
            pin: None,
        }
    }

    fn pair() -> Simulation {
        Simulation::new(
            vec![node(1, 120.0, 100.0, 10.0), node(2, 180.0, 100.0, 10.0)],
            &[LinkSpec {
                source: 1,
                target: 2,
            }],
            pos2(300.0, 200.0),
        )
        .unwrap()
    }

    #[test]
    fn unknown_link_id_is_rejected() {
        let result = Simulation::new(
            vec![node(1, 0.0, 0.0, 10.0)],
            &[LinkSpec {
                source: 1,
                target: 9,
            }],
            pos2(0.0, 0.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn pinned_node_tracks_its_pin_every_tick() {
        let mut sim = pair();
        sim.set_pin(0, pos2(100.0, 100.0));
        for _ in 0..50 {
            sim.tick();
            assert_eq!(sim.nodes()[0].pos, pos2(100.0, 100.0));
        }
    }

    #[test]
    fn alpha_decays_until_the_engine_settles() {
        let mut sim = pair();
        let mut ticks = 0;
        while sim.tick() {
            ticks += 1;
            assert!(ticks < 2000, "simulation never settled");
        }
        assert!(sim.settled());
        assert!(!sim.active());
    }

    #[test]
    fn raising_the_alpha_target_resumes_a_settled_engine() {
        let mut sim = pair();
        while sim.tick() {}
        assert!(!sim.active());

        sim.set_alpha_target(0.3);
        sim.restart();
        assert!(sim.active());
        assert!(sim.tick());
        assert!(!sim.settled());
    }

    #[test]
    fn stop_is_idempotent_and_halts_ticking() {
        let mut sim = pair();
        sim.stop();
        sim.stop();

        let before = (sim.nodes()[0].pos, sim.nodes()[1].pos);
        assert!(!sim.tick());
        assert_eq!((sim.nodes()[0].pos, sim.nodes()[1].pos), before);
    }
}
