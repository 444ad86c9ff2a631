//! Kochanek-Bartels spline through a list of control nodes.

use crate::core::types::DVec3;

/// Control point with its shape parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub position: DVec3,
    pub tension: f64,
    pub bias: f64,
    pub continuity: f64,
}

impl Node {
    pub fn new(position: DVec3) -> Self {
        Self {
            position,
            tension: 0.0,
            bias: 0.0,
            continuity: 0.0,
        }
    }
}

/// Piecewise cubic interpolation over `[0, 1]`.
#[derive(Clone, Debug)]
pub struct KochanekBartels {
    nodes: Vec<Node>,
    coeff_a: Vec<DVec3>,
    coeff_b: Vec<DVec3>,
    coeff_c: Vec<DVec3>,
    coeff_d: Vec<DVec3>,
    scaling: f64,
}

impl KochanekBartels {
    pub fn new(nodes: Vec<Node>) -> Self {
        let mut spline = Self {
            nodes,
            coeff_a: Vec::new(),
            coeff_b: Vec::new(),
            coeff_c: Vec::new(),
            coeff_d: Vec::new(),
            scaling: 0.0,
        };
        spline.recalc();
        spline
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    fn recalc(&mut self) {
        let n = self.nodes.len();
        if n == 0 {
            return;
        }

        let mut node_b = self.nodes[0];
        for i in 0..n {
            let node_a = node_b;
            if i + 1 < n {
                node_b = self.nodes[i + 1];
            }

            // Tangent factors either side of nodes i and i+1
            let ta = (1.0 - node_a.tension) * (1.0 + node_a.bias) * (1.0 + node_a.continuity) / 2.0;
            let tb = (1.0 - node_a.tension) * (1.0 - node_a.bias) * (1.0 - node_a.continuity) / 2.0;
            let tc = (1.0 - node_b.tension) * (1.0 + node_b.bias) * (1.0 - node_b.continuity) / 2.0;
            let td = (1.0 - node_b.tension) * (1.0 - node_b.bias) * (1.0 + node_b.continuity) / 2.0;

            let i = i as isize;
            self.coeff_a.push(self.combine(i, -ta, ta - tb - tc + 2.0, tb + tc - td - 2.0, td));
            self.coeff_b.push(self.combine(
                i,
                2.0 * ta,
                -2.0 * ta + 2.0 * tb + tc - 3.0,
                -2.0 * tb - tc + td + 3.0,
                -td,
            ));
            self.coeff_c.push(self.combine(i, -ta, ta - tb, tb, 0.0));
            self.coeff_d.push(self.retrieve(i));
        }

        self.scaling = (n - 1) as f64;
    }

    fn combine(&self, base: isize, f1: f64, f2: f64, f3: f64, f4: f64) -> DVec3 {
        self.retrieve(base - 1) * f1
            + self.retrieve(base) * f2
            + self.retrieve(base + 1) * f3
            + self.retrieve(base + 2) * f4
    }

    fn retrieve(&self, index: isize) -> DVec3 {
        let last = self.nodes.len() as isize - 1;
        self.nodes[index.clamp(0, last) as usize].position
    }

    fn segment(&self, t: f64) -> (usize, f64) {
        let scaled = t * self.scaling;
        let index = scaled.floor().max(0.0) as usize;
        let index = index.min(self.coeff_a.len().saturating_sub(1));
        (index, scaled - index as f64)
    }

    /// Position at parameter `t`, or `None` outside `[0, 1]` or without nodes.
    pub fn position(&self, t: f64) -> Option<DVec3> {
        if self.nodes.is_empty() || !(0.0..=1.0).contains(&t) {
            return None;
        }

        let (i, r) = self.segment(t);
        Some(((self.coeff_a[i] * r + self.coeff_b[i]) * r + self.coeff_c[i]) * r + self.coeff_d[i])
    }

    /// Approximate arc length between two parameters.
    pub fn arc_length(&self, a: f64, b: f64) -> f64 {
        if self.nodes.len() < 2 {
            return 0.0;
        }
        if a > b {
            return self.arc_length(b, a);
        }

        let (ia, ra) = self.segment(a);
        let (ib, rb) = self.segment(b);

        if ia == ib {
            return self.segment_length(ia, ra, rb);
        }

        let mut total = self.segment_length(ia, ra, 1.0);
        for i in ia + 1..ib {
            total += self.segment_length(i, 0.0, 1.0);
        }
        total + self.segment_length(ib, 0.0, rb)
    }

    /// Trapezoid integration of the first derivative over one segment.
    fn segment_length(&self, index: usize, left: f64, right: f64) -> f64 {
        const POINTS: usize = 8;

        let a = self.coeff_a[index] * 3.0;
        let b = self.coeff_b[index] * 2.0;
        let c = self.coeff_c[index];
        let speed = |t: f64| ((a * t + b) * t + c).length();

        let mut accum = speed(left) / 2.0;
        for i in 1..POINTS - 1 {
            let t = (right - left) * (i as f64 / POINTS as f64) + left;
            accum += speed(t);
        }
        accum += speed(right) / 2.0;

        accum * (right - left) / POINTS as f64
    }
}
