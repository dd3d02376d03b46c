//! Front-chain circle packing, used to seed node positions so the
//! simulation starts close to equilibrium instead of from random scatter.

use eframe::egui::{Pos2, pos2};

#[derive(Clone, Copy)]
struct Circle {
    x: f32,
    y: f32,
    r: f32,
}

/// Computes a position for every radius such that no two circles overlap and
/// each pair keeps at least `padding` between its boundaries, with the packed
/// cluster centered on the midpoint of the `width` x `height` surface.
pub fn pack_positions(radii: &[f32], width: f32, height: f32, padding: f32) -> Vec<Pos2> {
    let center = pos2(width * 0.5, height * 0.5);
    if radii.is_empty() {
        return Vec::new();
    }

    // Inflating every radius by half the padding turns tangency between
    // inflated circles into exactly `padding` worth of clearance.
    let mut circles = radii
        .iter()
        .map(|&r| Circle {
            x: 0.0,
            y: 0.0,
            r: r + padding * 0.5,
        })
        .collect::<Vec<_>>();

    pack_chain(&mut circles);

    let mut min_x = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_y = f32::NEG_INFINITY;
    for circle in &circles {
        min_x = min_x.min(circle.x - circle.r);
        max_x = max_x.max(circle.x + circle.r);
        min_y = min_y.min(circle.y - circle.r);
        max_y = max_y.max(circle.y + circle.r);
    }

    let offset_x = center.x - (min_x + max_x) * 0.5;
    let offset_y = center.y - (min_y + max_y) * 0.5;
    circles
        .iter()
        .map(|circle| pos2(circle.x + offset_x, circle.y + offset_y))
        .collect()
}

// Packs circles around the origin by growing a front chain of boundary
// circles, each new circle placed tangent to the pair whose shared edge sits
// closest to the origin.
fn pack_chain(circles: &mut [Circle]) {
    let n = circles.len();

    circles[0].x = 0.0;
    circles[0].y = 0.0;
    if n < 2 {
        return;
    }

    circles[0].x = -circles[1].r;
    circles[1].x = circles[0].r;
    circles[1].y = 0.0;
    if n < 3 {
        return;
    }

    {
        let (head, tail) = circles.split_at_mut(2);
        place(head[1], head[0], &mut tail[0]);
    }

    // Doubly linked front chain over circle indices, initially 0 -> 1 -> 2.
    let mut next = vec![0usize; n];
    let mut prev = vec![0usize; n];
    next[0] = 1;
    next[1] = 2;
    next[2] = 0;
    prev[0] = 2;
    prev[1] = 0;
    prev[2] = 1;

    let mut a = 0usize;
    let mut b = 1usize;
    let mut i = 3usize;
    'pack: while i < n {
        {
            let (ca, cb) = (circles[a], circles[b]);
            place(ca, cb, &mut circles[i]);
        }

        // Walk outward from the insertion point in both directions; if the
        // candidate intersects the front, shrink the front past the
        // offending circle and try the same candidate again.
        let mut j = next[b];
        let mut k = prev[a];
        let mut sj = circles[b].r;
        let mut sk = circles[a].r;
        loop {
            if sj <= sk {
                if intersects(circles[j], circles[i]) {
                    b = j;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sj += circles[j].r;
                j = next[j];
            } else {
                if intersects(circles[k], circles[i]) {
                    a = k;
                    next[a] = b;
                    prev[b] = a;
                    continue 'pack;
                }
                sk += circles[k].r;
                k = prev[k];
            }
            if j == next[k] {
                break;
            }
        }

        prev[i] = a;
        next[i] = b;
        next[a] = i;
        prev[b] = i;
        b = i;

        // Move the insertion point to the front edge nearest the origin.
        let mut best = front_score(circles, &next, a);
        let mut c = next[b];
        while c != b {
            let score = front_score(circles, &next, c);
            if score < best {
                a = c;
                best = score;
            }
            c = next[c];
        }
        b = next[a];

        i += 1;
    }
}

// Positions `c` tangent to both `a` and `b`.
fn place(a: Circle, b: Circle, c: &mut Circle) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let d2 = dx * dx + dy * dy;
    if d2 > 1e-6 {
        let a2 = (a.r + c.r) * (a.r + c.r);
        let b2 = (b.r + c.r) * (b.r + c.r);
        if a2 > b2 {
            let x = (d2 + b2 - a2) / (2.0 * d2);
            let y = (b2 / d2 - x * x).max(0.0).sqrt();
            c.x = b.x - x * dx - y * dy;
            c.y = b.y - x * dy + y * dx;
        } else {
            let x = (d2 + a2 - b2) / (2.0 * d2);
            let y = (a2 / d2 - x * x).max(0.0).sqrt();
            c.x = a.x + x * dx - y * dy;
            c.y = a.y + x * dy + y * dx;
        }
    } else {
        c.x = a.x + a.r + c.r;
        c.y = a.y;
    }
}

fn intersects(a: Circle, b: Circle) -> bool {
    let dr = a.r + b.r - 1e-3;
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dr > 0.0 && dr * dr > dx * dx + dy * dy
}

// Squared distance from the origin to the radius-weighted midpoint of the
// front edge starting at `node`.
fn front_score(circles: &[Circle], next: &[usize], node: usize) -> f32 {
    let a = circles[node];
    let b = circles[next[node]];
    let ab = a.r + b.r;
    let dx = (a.x * b.r + b.x * a.r) / ab;
    let dy = (a.y * b.r + b.y * a.r) / ab;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_packed(radii: &[f32], padding: f32, positions: &[Pos2]) {
        for i in 0..radii.len() {
            for j in (i + 1)..radii.len() {
                let distance = positions[i].distance(positions[j]);
                let required = radii[i] + radii[j] + padding;
                assert!(
                    distance >= required - 0.1,
                    "circles {i} and {j} are {distance} apart, need {required}"
                );
            }
        }
    }

    #[test]
    fn sample_radii_pack_without_overlap() {
        let radii = [40.0, 25.0, 60.0, 45.0];
        let positions = pack_positions(&radii, 600.0, 400.0, 5.0);
        assert_eq!(positions.len(), radii.len());
        assert_packed(&radii, 5.0, &positions);
    }

    #[test]
    fn larger_varied_sets_pack_without_overlap() {
        let radii = (1..=14)
            .map(|i| 4.0 + ((i as f32) * 3.7) % 25.0)
            .collect::<Vec<_>>();
        let positions = pack_positions(&radii, 600.0, 400.0, 2.0);
        assert_packed(&radii, 2.0, &positions);
    }

    #[test]
    fn single_circle_lands_at_the_center() {
        let positions = pack_positions(&[12.0], 600.0, 400.0, 5.0);
        assert_eq!(positions, vec![pos2(300.0, 200.0)]);
    }

    #[test]
    fn empty_input_yields_no_positions() {
        assert!(pack_positions(&[], 600.0, 400.0, 5.0).is_empty());
    }
}
