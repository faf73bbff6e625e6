//! Brand × size variations.

use std::sync::Arc;

use modegrid_domain::{LegacyLayout, LegacyRequest, NodeId};

use super::{rollback, selected_base, GenerateError};
use crate::infrastructure::ports::ScenePort;

/// Repeats the selected node on a plain brand × size grid.
pub struct CreateVariations {
    scene: Arc<dyn ScenePort>,
    layout: LegacyLayout,
}

impl CreateVariations {
    pub fn new(scene: Arc<dyn ScenePort>, layout: LegacyLayout) -> Self {
        Self { scene, layout }
    }

    /// Clone the first selected node once per placement and select the
    /// clones. Returns their ids in brand-major order.
    pub fn execute(&self, request: LegacyRequest) -> Result<Vec<NodeId>, GenerateError> {
        let base = selected_base(self.scene.as_ref())?;
        let placements = self.layout.plan(request, base.frame);
        let (brands, sizes) = self.layout.dimensions(request);
        tracing::info!(
            base_id = %base.id,
            brands = brands,
            sizes = sizes,
            "Creating brand × size variations"
        );

        let mut created = Vec::with_capacity(placements.len());
        for placement in &placements {
            let result = self.scene.clone_node(base.id).and_then(|clone| {
                created.push(clone);
                self.scene.move_node(clone, placement.position)
            });
            if let Err(e) = result {
                tracing::error!(
                    brand = placement.brand_index,
                    size = placement.size_index,
                    error = %e,
                    "Host failed while creating variations"
                );
                rollback(self.scene.as_ref(), &created);
                return Err(e.into());
            }
        }

        self.scene.set_selection(&created);
        self.scene
            .notify(&format!("Created {} variations.", created.len()));
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{HostError, MockScenePort, SceneNode};
    use mockall::predicate::*;
    use modegrid_domain::{NodeKind, Point, Rect};
    use std::sync::Mutex;

    fn selecting(scene: &mut MockScenePort, base: &SceneNode) {
        let base_id = base.id;
        let base = base.clone();
        scene.expect_selection().returning(move || vec![base_id]);
        scene
            .expect_node()
            .with(eq(base_id))
            .returning(move |_| Ok(Some(base.clone())));
    }

    #[test]
    fn requires_a_selection() {
        let mut scene = MockScenePort::new();
        scene.expect_selection().returning(Vec::new);
        scene.expect_notify().never();

        let use_case = CreateVariations::new(Arc::new(scene), LegacyLayout::default());
        let err = use_case.execute(LegacyRequest::default()).unwrap_err();

        assert!(matches!(err, GenerateError::NothingSelected));
        assert_eq!(
            err.to_string(),
            "Please select a frame or component to generate variations."
        );
    }

    #[test]
    fn theme_only_lays_brands_along_x() {
        let base = SceneNode::new("Card", NodeKind::Frame, Rect::new(0.0, 0.0, 100.0, 60.0));
        let mut scene = MockScenePort::new();
        selecting(&mut scene, &base);

        scene
            .expect_clone_node()
            .with(eq(base.id))
            .times(7)
            .returning(|_| Ok(NodeId::new()));
        let moves: Arc<Mutex<Vec<Point>>> = Arc::default();
        let m = moves.clone();
        scene.expect_move_node().times(7).returning(move |_, p| {
            m.lock().unwrap().push(p);
            Ok(())
        });
        scene
            .expect_set_selection()
            .withf(|ids| ids.len() == 7)
            .times(1)
            .return_const(());
        scene
            .expect_notify()
            .withf(|msg| msg == "Created 7 variations.")
            .times(1)
            .return_const(());

        let use_case = CreateVariations::new(Arc::new(scene), LegacyLayout::default());
        let clones = use_case
            .execute(LegacyRequest {
                theme: true,
                dynamic: false,
            })
            .unwrap();

        assert_eq!(clones.len(), 7);
        let moves = moves.lock().unwrap();
        assert_eq!(moves[1], Point::new(140.0, 0.0));
        assert!(moves.iter().all(|p| p.y == 0.0));
    }

    #[test]
    fn failure_removes_earlier_clones() {
        let base = SceneNode::new("Card", NodeKind::Frame, Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut scene = MockScenePort::new();
        selecting(&mut scene, &base);

        let first = NodeId::new();
        let second = NodeId::new();
        let mut ids = vec![second, first];
        scene
            .expect_clone_node()
            .times(2)
            .returning(move |_| Ok(ids.pop().unwrap()));
        scene.expect_move_node().returning(move |id, _| {
            if id == second {
                Err(HostError::NodeNotFound(id))
            } else {
                Ok(())
            }
        });
        let removed: Arc<Mutex<Vec<NodeId>>> = Arc::default();
        let r = removed.clone();
        scene.expect_remove_node().returning(move |id| {
            r.lock().unwrap().push(id);
            Ok(())
        });
        scene.expect_notify().never();

        let use_case = CreateVariations::new(Arc::new(scene), LegacyLayout::default());
        let err = use_case
            .execute(LegacyRequest {
                theme: false,
                dynamic: true,
            })
            .unwrap_err();

        assert!(matches!(err, GenerateError::Host(HostError::NodeNotFound(_))));
        assert_eq!(*removed.lock().unwrap(), vec![second, first]);
    }

    #[test]
    fn rollback_continues_past_nodes_already_gone() {
        let base = SceneNode::new("Card", NodeKind::Frame, Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut scene = MockScenePort::new();
        selecting(&mut scene, &base);

        let first = NodeId::new();
        let second = NodeId::new();
        let third = NodeId::new();
        let mut ids = vec![third, second, first];
        scene
            .expect_clone_node()
            .times(3)
            .returning(move |_| Ok(ids.pop().unwrap()));
        scene.expect_move_node().returning(move |id, _| {
            if id == third {
                Err(HostError::operation("move", "offline"))
            } else {
                Ok(())
            }
        });
        let attempted: Arc<Mutex<Vec<NodeId>>> = Arc::default();
        let a = attempted.clone();
        scene.expect_remove_node().returning(move |id| {
            a.lock().unwrap().push(id);
            if id == second {
                Err(HostError::NodeNotFound(id))
            } else {
                Ok(())
            }
        });
        scene.expect_notify().never();

        let use_case = CreateVariations::new(Arc::new(scene), LegacyLayout::default());
        let err = use_case
            .execute(LegacyRequest {
                theme: false,
                dynamic: true,
            })
            .unwrap_err();

        assert!(matches!(err, GenerateError::Host(HostError::Operation { .. })));
        assert_eq!(*attempted.lock().unwrap(), vec![third, second, first]);
    }
}
