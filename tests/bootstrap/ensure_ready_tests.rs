use audit_trail_service::bootstrap::domain::{
    model::{
        commands::ensure_ready_command::EnsureReadyCommand,
        enums::{
            bootstrap_domain_error::BootstrapDomainError, bootstrap_status::BootstrapStatus,
            database_creation_outcome::DatabaseCreationOutcome, schema_plan::SchemaPlan,
        },
    },
    services::schema_bootstrap_service::SchemaBootstrapService,
};

use crate::support::{
    ALL_MIGRATIONS, FakeDatabaseAdministrationRepository, FakeSchemaRepository, create_harness,
    create_harness_with, ensure_ready_command,
};

#[tokio::test]
async fn handle_ensure_ready_creates_database_and_schema_on_fresh_server() {
    let harness = create_harness();

    let run = harness
        .service
        .handle_ensure_ready(ensure_ready_command())
        .await
        .expect("bootstrap should succeed");

    assert_eq!(run.status(), BootstrapStatus::Ready);
    assert_eq!(run.database_outcome(), Some(DatabaseCreationOutcome::Created));
    assert_eq!(run.schema_plan(), Some(SchemaPlan::FreshSchema));
    assert_eq!(run.migrations_applied(), 3);
    assert_eq!(harness.administration_repository.stats(), (1, 1));
    assert_eq!(harness.schema_repository.stats(), (1, 1));
    assert_eq!(
        harness.schema_repository.tables(),
        vec!["audit_events".to_string(), "request_records".to_string()]
    );
    assert_eq!(harness.schema_repository.applied_versions(), vec![1, 2, 3]);
}

#[tokio::test]
async fn handle_ensure_ready_twice_converges_to_a_single_schema() {
    let harness = create_harness();

    harness
        .service
        .handle_ensure_ready(ensure_ready_command())
        .await
        .expect("first bootstrap should succeed");
    let second = harness
        .another_process()
        .handle_ensure_ready(ensure_ready_command())
        .await
        .expect("second bootstrap should succeed");

    assert_eq!(second.status(), BootstrapStatus::Ready);
    assert_eq!(
        second.database_outcome(),
        Some(DatabaseCreationOutcome::AlreadyExisted)
    );
    assert_eq!(
        second.schema_plan(),
        Some(SchemaPlan::ExistingSchemaNeedsMigration)
    );
    assert_eq!(second.migrations_applied(), 0);
    assert_eq!(harness.administration_repository.stats(), (2, 1));
    assert_eq!(harness.schema_repository.stats(), (1, 2));
    assert_eq!(
        harness.schema_repository.table_creations(),
        vec!["audit_events".to_string(), "request_records".to_string()]
    );
    assert_eq!(harness.schema_repository.applied_versions(), vec![1, 2, 3]);
}

#[tokio::test]
async fn handle_ensure_ready_migrates_existing_schema_without_recreating_it() {
    let harness = create_harness_with(
        FakeDatabaseAdministrationRepository::new(&["audit_logs_db"]),
        FakeSchemaRepository::with_applied(ALL_MIGRATIONS, &[1]),
    );

    let run = harness
        .service
        .handle_ensure_ready(ensure_ready_command())
        .await
        .expect("bootstrap should succeed");

    assert_eq!(run.status(), BootstrapStatus::Ready);
    assert_eq!(
        run.schema_plan(),
        Some(SchemaPlan::ExistingSchemaNeedsMigration)
    );
    assert_eq!(run.migrations_applied(), 2);
    assert_eq!(harness.schema_repository.stats(), (0, 1));
    assert_eq!(
        harness.schema_repository.table_creations(),
        vec!["request_records".to_string()]
    );
    assert_eq!(harness.schema_repository.applied_versions(), vec![1, 2, 3]);
}

#[tokio::test]
async fn handle_ensure_ready_treats_lost_creation_race_as_success() {
    let harness = create_harness_with(
        FakeDatabaseAdministrationRepository::losing_creation_race(),
        FakeSchemaRepository::new(ALL_MIGRATIONS),
    );

    let run = harness
        .service
        .handle_ensure_ready(ensure_ready_command())
        .await
        .expect("bootstrap should succeed");

    assert_eq!(run.status(), BootstrapStatus::Ready);
    assert_eq!(
        run.database_outcome(),
        Some(DatabaseCreationOutcome::AlreadyExisted)
    );
    assert_eq!(harness.administration_repository.stats(), (1, 0));
}

#[tokio::test]
async fn handle_ensure_ready_from_concurrent_processes_creates_each_table_once() {
    let harness = create_harness();
    let other = harness.another_process();

    let (first, second) = tokio::join!(
        harness.service.handle_ensure_ready(ensure_ready_command()),
        other.handle_ensure_ready(ensure_ready_command()),
    );

    let first = first.expect("first bootstrap should succeed");
    let second = second.expect("second bootstrap should succeed");
    assert_eq!(first.status(), BootstrapStatus::Ready);
    assert_eq!(second.status(), BootstrapStatus::Ready);
    assert_eq!(first.migrations_applied() + second.migrations_applied(), 3);
    assert_eq!(harness.administration_repository.stats(), (2, 1));
    assert_eq!(
        harness.schema_repository.table_creations(),
        vec!["audit_events".to_string(), "request_records".to_string()]
    );
    assert_eq!(harness.schema_repository.applied_versions(), vec![1, 2, 3]);
}

#[tokio::test]
async fn handle_ensure_ready_aborts_when_database_cannot_be_created() {
    let harness = create_harness_with(
        FakeDatabaseAdministrationRepository::failing(),
        FakeSchemaRepository::new(ALL_MIGRATIONS),
    );

    let result = harness
        .service
        .handle_ensure_ready(ensure_ready_command())
        .await;

    assert!(matches!(
        result,
        Err(BootstrapDomainError::DatabaseCreationFailed(_))
    ));
    assert_eq!(harness.schema_repository.stats(), (0, 0));
    assert!(harness.schema_repository.tables().is_empty());
}

#[tokio::test]
async fn handle_ensure_ready_aborts_when_target_database_is_unreachable() {
    let harness = create_harness_with(
        FakeDatabaseAdministrationRepository::new(&[]),
        FakeSchemaRepository::new(ALL_MIGRATIONS).with_connection_failure(),
    );

    let result = harness
        .service
        .handle_ensure_ready(ensure_ready_command())
        .await;

    assert!(matches!(
        result,
        Err(BootstrapDomainError::ConnectionFailed(_))
    ));
    assert_eq!(harness.schema_repository.stats(), (0, 0));
}

#[tokio::test]
async fn handle_ensure_ready_aborts_when_migrations_fail() {
    let harness = create_harness_with(
        FakeDatabaseAdministrationRepository::new(&["audit_logs_db"]),
        FakeSchemaRepository::with_applied(ALL_MIGRATIONS, &[1, 2]).with_migration_failure(),
    );

    let result = harness
        .service
        .handle_ensure_ready(ensure_ready_command())
        .await;

    assert!(matches!(
        result,
        Err(BootstrapDomainError::MigrationFailed(message)) if message.contains("modified")
    ));
    assert_eq!(harness.schema_repository.applied_versions(), vec![1, 2]);
}

#[test]
fn ensure_ready_command_rejects_blank_database_name() {
    let result = EnsureReadyCommand::new("   ".to_string());

    assert!(matches!(
        result,
        Err(BootstrapDomainError::InvalidDatabaseName)
    ));
}

#[test]
fn ensure_ready_command_rejects_overlong_database_name() {
    let result = EnsureReadyCommand::new("a".repeat(64));

    assert!(matches!(
        result,
        Err(BootstrapDomainError::InvalidDatabaseName)
    ));
}
