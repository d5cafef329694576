use std::sync::Arc;

use audit_trail_service::bootstrap::application::command_services::schema_bootstrap_service_impl::SchemaBootstrapServiceImpl;

use super::{
    fakes::{FakeDatabaseAdministrationRepository, FakeSchemaRepository},
    fixtures::ALL_MIGRATIONS,
};

pub struct BootstrapTestHarness {
    pub administration_repository: Arc<FakeDatabaseAdministrationRepository>,
    pub schema_repository: Arc<FakeSchemaRepository>,
    pub service: SchemaBootstrapServiceImpl,
}

impl BootstrapTestHarness {
    /// A second service instance over the same database, as a restarted or
    /// concurrently starting process would see it.
    pub fn another_process(&self) -> SchemaBootstrapServiceImpl {
        SchemaBootstrapServiceImpl::new(
            self.administration_repository.clone(),
            self.schema_repository.clone(),
        )
    }
}

pub fn create_harness() -> BootstrapTestHarness {
    create_harness_with(
        FakeDatabaseAdministrationRepository::new(&[]),
        FakeSchemaRepository::new(ALL_MIGRATIONS),
    )
}

pub fn create_harness_with(
    administration_repository: FakeDatabaseAdministrationRepository,
    schema_repository: FakeSchemaRepository,
) -> BootstrapTestHarness {
    let administration_repository = Arc::new(administration_repository);
    let schema_repository = Arc::new(schema_repository);

    let service = SchemaBootstrapServiceImpl::new(
        administration_repository.clone(),
        schema_repository.clone(),
    );

    BootstrapTestHarness {
        administration_repository,
        schema_repository,
        service,
    }
}
