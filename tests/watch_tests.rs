use std::time::Duration;

use tailwind_playground::watch::{self, SourceWatcher, WatchEvent};
use tailwind_playground::{BufferId, DocumentTemplate, Playground, PreviewSink, Workspace};

#[derive(Default)]
struct Recorder {
    documents: Vec<String>,
}

impl PreviewSink for Recorder {
    fn render(&mut self, document: &str) {
        self.documents.push(document.to_string());
    }
}

async fn initialised_workspace() -> (tempfile::TempDir, Workspace) {
    let dir = tempfile::tempdir().unwrap();
    let workspace = Workspace::new(dir.path());
    workspace.init().await.unwrap();
    (dir, workspace)
}

#[tokio::test]
async fn test_only_source_files_produce_events() {
    let (_dir, workspace) = initialised_workspace().await;
    let mut watcher = SourceWatcher::start(&workspace).unwrap();

    tokio::fs::write(workspace.dir().join("preview.html"), "<html></html>")
        .await
        .unwrap();
    tokio::fs::write(workspace.path_for(BufferId::Stylesheet), "p { color: red }")
        .await
        .unwrap();

    let event = tokio::time::timeout(Duration::from_secs(5), watcher.events().recv())
        .await
        .expect("No event within 5 seconds");

    match event {
        Some(WatchEvent::SourceChanged(id)) => assert_eq!(id, BufferId::Stylesheet),
        other => panic!("Expected a stylesheet change, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unrelated_file_is_ignored() {
    let (_dir, workspace) = initialised_workspace().await;
    let mut watcher = SourceWatcher::start(&workspace).unwrap();

    tokio::fs::write(workspace.dir().join("notes.txt"), "scratch")
        .await
        .unwrap();

    let event = tokio::time::timeout(Duration::from_millis(1500), watcher.events().recv()).await;
    assert!(event.is_err(), "Unexpected event: {:?}", event);
}

#[tokio::test]
async fn test_edited_file_reaches_playground() {
    let (_dir, workspace) = initialised_workspace().await;
    let mut watcher = SourceWatcher::start(&workspace).unwrap();
    let mut playground = Playground::new(DocumentTemplate::default(), Recorder::default());

    tokio::fs::write(workspace.path_for(BufferId::Markup), "<h1>live</h1>")
        .await
        .unwrap();

    // Stop once the file has had time to be picked up
    watch::run(
        &mut playground,
        &workspace,
        watcher.events(),
        tokio::time::sleep(Duration::from_millis(1500)),
    )
    .await;

    assert_eq!(playground.get_buffer(BufferId::Markup), "<h1>live</h1>");
    assert!(
        playground
            .sink()
            .documents
            .last()
            .is_some_and(|document| document.contains("<h1>live</h1>"))
    );
}
