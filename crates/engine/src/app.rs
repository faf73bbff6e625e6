//! Application state and composition.

use std::sync::Arc;

use modegrid_domain::CombinationGridBuilder;

use crate::config::GridConfig;
use crate::infrastructure::ports::{ScenePort, VariableStore};
use crate::use_cases::{
    CreateVariations, DetectCollections, GenerateModeGrid, GenerationUseCases, ResolveAxes,
};

/// Main application state.
///
/// Holds the scene port, settings and every use case wired against them. Handed to
/// the [`UiBridge`](crate::api::UiBridge).
pub struct App {
    pub scene: Arc<dyn ScenePort>,
    pub config: GridConfig,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub detection: Arc<DetectCollections>,
    pub generation: GenerationUseCases,
}

impl App {
    pub fn new(
        scene: Arc<dyn ScenePort>,
        variables: Arc<dyn VariableStore>,
        config: GridConfig,
    ) -> Self {
        let builder =
            CombinationGridBuilder::new(config.layout).with_label_style(config.label_style);

        let axes = Arc::new(ResolveAxes::new(variables.clone()));
        let generation = GenerationUseCases::new(
            Arc::new(GenerateModeGrid::new(scene.clone(), axes, builder)),
            Arc::new(CreateVariations::new(scene.clone(), config.legacy)),
        );
        let detection = Arc::new(DetectCollections::new(scene.clone(), variables));

        Self {
            scene,
            config,
            use_cases: UseCases {
                detection,
                generation,
            },
        }
    }
}
