use crate::layer::ShapeLayer;
use crate::surface::{DrawingSurface, Transaction};
use cairo::Context;
use derive_more::{Display, From, Into};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct LayerHandle(u64);

#[derive(Debug, Clone)]
struct Tween {
    from: ShapeLayer,
    started: Instant,
    transaction: Transaction,
}

#[derive(Debug, Clone, Default)]
struct Node {
    model: Option<ShapeLayer>,
    tween: Option<Tween>,
}

impl Node {
    fn presentation(&self, now: Instant) -> Option<ShapeLayer> {
        let model = self.model.as_ref()?;
        match &self.tween {
            Some(tween) => {
                let elapsed = now.saturating_duration_since(tween.started);
                let t = tween.transaction.progress(elapsed);
                Some(tween.from.interpolate(model, t))
            }
            None => Some(model.clone()),
        }
    }

    fn is_animating(&self, now: Instant) -> bool {
        self.tween
            .as_ref()
            .is_some_and(|t| now.saturating_duration_since(t.started) < t.transaction.duration)
    }
}

pub struct LayerTree {
    nodes: Vec<(LayerHandle, Node)>,
    next_handle: u64,
    now: Instant,
    open: Vec<Transaction>,
}

impl Default for LayerTree {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl LayerTree {
    pub fn new(now: Instant) -> Self {
        Self {
            nodes: Vec::new(),
            next_handle: 0,
            now,
            open: Vec::new(),
        }
    }

    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn advance_to(&mut self, now: Instant) {
        self.now = now.max(self.now);
        for (_, node) in &mut self.nodes {
            if !node.is_animating(self.now) {
                node.tween = None;
            }
        }
    }

    pub fn advance_by(&mut self, elapsed: Duration) {
        self.advance_to(self.now + elapsed);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.nodes.iter().any(|(_, node)| node.is_animating(self.now))
    }

    pub fn presentation(&self) -> Vec<ShapeLayer> {
        self.nodes
            .iter()
            .filter_map(|(_, node)| node.presentation(self.now))
            .collect()
    }

    pub fn paint(&self, cr: &Context) -> Result<(), cairo::Error> {
        for layer in self.presentation() {
            cr.save()?;
            cr.translate(layer.frame.origin.x, layer.frame.origin.y);
            layer.path.trace(cr);

            let (r, g, b, a) = layer.fill.into_components();
            cr.set_source_rgba(r, g, b, a);
            cr.fill_preserve()?;

            let (r, g, b, a) = layer.stroke.into_components();
            cr.set_source_rgba(r, g, b, a);
            cr.set_line_width(layer.line_width);
            cr.set_line_cap(layer.line_cap.into());
            cr.set_line_join(layer.line_join.into());
            cr.stroke()?;
            cr.restore()?;
        }
        Ok(())
    }

    fn node_mut(&mut self, handle: &LayerHandle) -> Option<&mut Node> {
        self.nodes
            .iter_mut()
            .find(|(h, _)| h == handle)
            .map(|(_, node)| node)
    }
}

impl DrawingSurface for LayerTree {
    type Layer = LayerHandle;

    fn create_layer(&mut self) -> LayerHandle {
        let handle = LayerHandle(self.next_handle);
        self.next_handle += 1;
        self.nodes.push((handle, Node::default()));
        handle
    }

    fn remove_layer(&mut self, layer: LayerHandle) {
        self.nodes.retain(|(h, _)| *h != layer);
    }

    fn apply(&mut self, layer: &LayerHandle, command: &ShapeLayer) {
        let now = self.now;
        let transaction = self
            .open
            .last()
            .copied()
            .filter(|t| !t.duration.is_zero());

        let Some(node) = self.node_mut(layer) else {
            log::warn!("Command for unknown layer {}", layer);
            return;
        };

        // a layer that never showed anything appears without animating
        node.tween = match (transaction, node.presentation(now)) {
            (Some(transaction), Some(from)) => Some(Tween {
                from,
                started: now,
                transaction,
            }),
            _ => None,
        };
        node.model = Some(command.clone());
    }

    fn begin_transaction(&mut self, transaction: &Transaction) {
        self.open.push(*transaction);
    }

    fn commit_transaction(&mut self) {
        if self.open.pop().is_none() {
            log::warn!("Commit without an open transaction");
        }
    }

    fn flush(&mut self) {
        let now = self.now;
        self.advance_to(now);
    }
}
