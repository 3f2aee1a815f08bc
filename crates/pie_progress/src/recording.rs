use crate::layer::ShapeLayer;
use crate::surface::{DrawingSurface, Transaction};
use derive_more::{Display, From, Into};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, From, Into)]
pub struct LayerId(usize);

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Created(LayerId),
    Removed(LayerId),
    Applied(LayerId),
    Begin(Transaction),
    Commit,
    Flush,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    layers: Vec<(LayerId, Option<ShapeLayer>)>,
    events: Vec<SurfaceEvent>,
    next_id: usize,
}

impl RecordingSurface {
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    pub fn layer_ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(|(id, _)| *id).collect()
    }

    /// Last command applied to each layer. Layers never drawn are skipped.
    pub fn commands(&self) -> Vec<ShapeLayer> {
        self.layers
            .iter()
            .filter_map(|(_, command)| command.clone())
            .collect()
    }

    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    pub fn clear_events(&mut self) {
        self.events.clear();
    }
}

impl DrawingSurface for RecordingSurface {
    type Layer = LayerId;

    fn create_layer(&mut self) -> LayerId {
        let id = LayerId(self.next_id);
        self.next_id += 1;
        self.layers.push((id, None));
        self.events.push(SurfaceEvent::Created(id));
        id
    }

    fn remove_layer(&mut self, layer: LayerId) {
        self.layers.retain(|(id, _)| *id != layer);
        self.events.push(SurfaceEvent::Removed(layer));
    }

    fn apply(&mut self, layer: &LayerId, command: &ShapeLayer) {
        if let Some((_, slot)) = self.layers.iter_mut().find(|(id, _)| id == layer) {
            *slot = Some(command.clone());
            self.events.push(SurfaceEvent::Applied(*layer));
        } else {
            log::warn!("Command for unknown layer {}", layer);
        }
    }

    fn begin_transaction(&mut self, transaction: &Transaction) {
        self.events.push(SurfaceEvent::Begin(*transaction));
    }

    fn commit_transaction(&mut self) {
        self.events.push(SurfaceEvent::Commit);
    }

    fn flush(&mut self) {
        self.events.push(SurfaceEvent::Flush);
    }
}
