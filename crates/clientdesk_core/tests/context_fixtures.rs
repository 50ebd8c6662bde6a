use clientdesk_core::{
    AppContext, CoreConfig, DashboardMetrics, FixtureSource, NewClient, ProjectPatch,
    ProjectQuery, ProjectStatus, RecordId, SeedSet,
};

fn id(value: u64) -> RecordId {
    RecordId::new(value).unwrap()
}

fn bundled() -> AppContext {
    AppContext::from_config(&CoreConfig::instant(FixtureSource::Bundled)).unwrap()
}

#[tokio::test]
async fn bundled_fixtures_seed_every_store_in_order() {
    let context = bundled();
    let seeds = SeedSet::bundled().unwrap();

    assert_eq!(context.clients().get_all().await, seeds.clients);
    assert_eq!(context.projects().get_all().await, seeds.projects);
    assert_eq!(context.tasks().get_all().await, seeds.tasks);
    assert_eq!(context.notifications().get_all().await, seeds.notifications);
}

#[tokio::test]
async fn new_records_continue_after_seeded_ids() {
    let context = bundled();
    let created = context
        .clients()
        .create(NewClient::new("Acme", "Acme Co", "a@acme.com"))
        .await
        .unwrap();
    assert_eq!(created.id, id(6));
}

#[tokio::test]
async fn dashboard_metrics_match_bundled_seeds() {
    let context = bundled();
    let metrics = DashboardMetrics::collect(&context).await;

    assert_eq!(metrics.total_clients, 5);
    assert_eq!(metrics.active_projects, 2);
    assert_eq!(metrics.completed_projects, 3);
    assert_eq!(metrics.pending_tasks, 4);
    assert_eq!(metrics.unread_notifications, 2);
}

#[tokio::test]
async fn completing_seeded_project_updates_metrics() {
    let context = bundled();
    context
        .projects()
        .update(id(4), ProjectPatch::status(ProjectStatus::Completed))
        .await
        .unwrap();

    let metrics = DashboardMetrics::collect(&context).await;
    assert_eq!(metrics.active_projects, 1);
    assert_eq!(metrics.completed_projects, 4);
    assert_eq!(metrics.unread_notifications, 3);

    let notifications = context.notifications().get_all().await;
    assert_eq!(notifications[0].id, id(4));
    assert_eq!(notifications[0].project_id, Some(id(4)));
}

#[tokio::test]
async fn project_search_combines_text_and_status() {
    let context = bundled();
    let hits = context
        .projects()
        .search(&ProjectQuery {
            text: Some("design".to_string()),
            status: Some(ProjectStatus::Completed),
        })
        .await;
    let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Brand Identity Design"]);

    let reviews = context
        .projects()
        .search(&ProjectQuery {
            status: Some(ProjectStatus::Review),
            ..ProjectQuery::default()
        })
        .await;
    assert_eq!(reviews.len(), 1);
}

#[tokio::test]
async fn directory_fixtures_are_loaded_from_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("projects.json"),
        r#"[{"Id": 10, "title": "Audit", "clientId": 2, "deadline": "2024-07-01", "status": "In Progress", "progress": 20}]"#,
    )
    .unwrap();

    let config = CoreConfig::instant(FixtureSource::Directory(dir.path().to_path_buf()));
    let context = AppContext::from_config(&config).unwrap();

    let projects = context.projects().get_all().await;
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, id(10));
    assert!(context.clients().get_all().await.is_empty());
}

#[tokio::test]
async fn broken_fixture_directory_fails_context_build() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("clients.json"), "[{]").unwrap();

    let config = CoreConfig::instant(FixtureSource::Directory(dir.path().to_path_buf()));
    assert!(AppContext::from_config(&config).is_err());
}
