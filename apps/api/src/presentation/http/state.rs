use crate::{
    application::{
        create_composite::use_case::CreateCompositeUseCase,
        verify_phone::use_case::VerifyPhoneUseCase,
    },
    config::Config,
    infrastructure::{
        assets::traits::OverlayAssetProvider, imaging::compositor::Compositor,
        storage::traits::StorageService, verification::traits::VerificationService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub assets: Arc<dyn OverlayAssetProvider>,
    pub storage: Arc<dyn StorageService>,
    pub verification: Arc<dyn VerificationService>,
    pub composites: Arc<CreateCompositeUseCase>,
    pub phone_verification: Arc<VerifyPhoneUseCase>,
}

impl AppState {
    pub fn new(
        config: Config,
        assets: Arc<dyn OverlayAssetProvider>,
        storage: Arc<dyn StorageService>,
        verification: Arc<dyn VerificationService>,
    ) -> Self {
        let composites = Arc::new(CreateCompositeUseCase::new(
            assets.clone(),
            storage.clone(),
            Compositor::new(config.jpeg_quality),
        ));
        let phone_verification = Arc::new(VerifyPhoneUseCase::new(verification.clone()));
        Self {
            config,
            assets,
            storage,
            verification,
            composites,
            phone_verification,
        }
    }
}
