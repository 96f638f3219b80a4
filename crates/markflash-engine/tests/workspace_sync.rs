//! End-to-end behaviour of the workspace: both editing surfaces, the
//! document store, imports and generation.

use markflash_engine::generation::{GenerationError, GenerationRequest, MarkdownGenerator};
use markflash_engine::{BlockCmd, BlockKind, CodeLanguage, Direction, ViewMode, Workspace};
use pretty_assertions::assert_eq;
use std::cell::Cell;

struct CannedGenerator(&'static str);

impl MarkdownGenerator for CannedGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Ok(self.0.to_string())
    }
}

struct FailingGenerator {
    calls: Cell<usize>,
}

impl MarkdownGenerator for FailingGenerator {
    fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        self.calls.set(self.calls.get() + 1);
        Err(GenerationError::Api {
            status: 503,
            message: "unavailable".to_string(),
        })
    }
}

fn request(topic: &str) -> GenerationRequest {
    GenerationRequest {
        doc_type: "Guide".to_string(),
        topic: topic.to_string(),
        context: String::new(),
        tone: "Neutral".to_string(),
        sections: vec!["Overview".to_string()],
        include_table_of_contents: false,
        include_code: true,
    }
}

#[test]
fn test_building_a_document_from_blocks() {
    let mut ws = Workspace::empty();
    ws.new_document();

    let heading = ws
        .apply(BlockCmd::Insert {
            kind: BlockKind::Heading1,
            content: None,
        })
        .unwrap()
        .inserted
        .unwrap();
    ws.apply(BlockCmd::Update {
        id: heading,
        content: "Hello".to_string(),
    })
    .unwrap();
    ws.apply(BlockCmd::Insert {
        kind: BlockKind::Separator,
        content: None,
    })
    .unwrap();
    ws.apply(BlockCmd::Insert {
        kind: BlockKind::Code(CodeLanguage::JavaScript),
        content: Some("console.log(1)".to_string()),
    })
    .unwrap();
    ws.apply(BlockCmd::Insert {
        kind: BlockKind::Image,
        content: None,
    })
    .unwrap();

    assert_eq!(
        ws.markdown(),
        "# Hello\n\n---\n\n```javascript\nconsole.log(1)\n```\n\n![Alt text](https://via.placeholder.com/150)"
    );

    ws.apply(BlockCmd::Move {
        index: 3,
        direction: Direction::Up,
    })
    .unwrap();
    ws.apply(BlockCmd::Delete { id: heading }).unwrap();

    assert_eq!(
        ws.markdown(),
        "---\n\n![Alt text](https://via.placeholder.com/150)\n\n```javascript\nconsole.log(1)\n```"
    );
    assert_eq!(ws.current_document().unwrap().content, ws.markdown());
}

#[test]
fn test_block_ids_are_stable_across_edits_until_the_next_sync_point() {
    let mut ws = Workspace::new();
    ws.set_view_mode(ViewMode::Block);
    let ids: Vec<_> = ws.blocks().unwrap().iter().map(|b| b.id).collect();

    let target = ids[1];
    ws.apply(BlockCmd::Update {
        id: target,
        content: "Edited".to_string(),
    })
    .unwrap();
    ws.apply(BlockCmd::Move {
        index: 0,
        direction: Direction::Down,
    })
    .unwrap();

    let mut after: Vec<_> = ws.blocks().unwrap().iter().map(|b| b.id).collect();
    after.swap(0, 1);
    assert_eq!(after, ids);

    ws.set_view_mode(ViewMode::Raw);
    ws.set_view_mode(ViewMode::Block);
    let rederived: Vec<_> = ws.blocks().unwrap().iter().map(|b| b.id).collect();
    assert!(rederived.iter().all(|id| !ids.contains(id)));
}

#[test]
fn test_first_block_edit_normalizes_the_whole_document() {
    let mut ws = Workspace::empty();
    ws.new_document();
    ws.set_view_mode(ViewMode::Raw);
    ws.edit_raw("# Title\nline one\nline two\n\n\n1. ordered");
    ws.set_view_mode(ViewMode::Block);

    let last = ws.blocks().unwrap().blocks().last().unwrap().id;
    ws.apply(BlockCmd::Update {
        id: last,
        content: "1. still ordered".to_string(),
    })
    .unwrap();

    assert_eq!(
        ws.markdown(),
        "# Title\n\nline one\n\nline two\n\n1. still ordered"
    );
}

#[test]
fn test_generated_document_is_created_and_opened() {
    let mut ws = Workspace::new();
    ws.set_view_mode(ViewMode::Block);

    let id = ws
        .import_generated(&CannedGenerator("# Rust Guide\n\nIntro"), &request("Rust"))
        .unwrap();

    assert_eq!(ws.current_id(), Some(id));
    assert_eq!(ws.title(), "Rust");
    assert_eq!(ws.markdown(), "# Rust Guide\n\nIntro");
    assert_eq!(ws.blocks().unwrap().len(), 2);
    assert_eq!(ws.store().len(), 2);
}

#[test]
fn test_generated_document_without_topic_is_untitled() {
    let mut ws = Workspace::empty();
    ws.import_generated(&CannedGenerator(""), &request("   "))
        .unwrap();
    assert_eq!(ws.title(), "Untitled Document");
    assert_eq!(ws.markdown(), "");
}

#[test]
fn test_generation_failure_propagates_and_leaves_state_alone() {
    let mut ws = Workspace::new();
    let before = ws.current_id();
    let generator = FailingGenerator { calls: Cell::new(0) };

    let err = ws.import_generated(&generator, &request("Rust")).unwrap_err();

    assert!(matches!(err, GenerationError::Api { status: 503, .. }));
    assert_eq!(generator.calls.get(), 1);
    assert_eq!(ws.current_id(), before);
    assert_eq!(ws.store().len(), 1);

    // Editing still works after a failed generation
    ws.edit_raw("# Still editable");
    assert_eq!(ws.current_document().unwrap().content, "# Still editable");
}

#[test]
fn test_notes_directory_is_imported() {
    // Given a notes directory with nested markdown and a stray non-markdown file
    let notes = tempfile::tempdir().unwrap();
    std::fs::create_dir(notes.path().join("journal")).unwrap();
    std::fs::write(notes.path().join("todo.md"), "- milk").unwrap();
    std::fs::write(notes.path().join("journal/monday.md"), "# Monday").unwrap();
    std::fs::write(notes.path().join("ignored.txt"), "nope").unwrap();

    // When importing it
    let mut ws = Workspace::empty();
    let count = ws.import_notes(notes.path()).unwrap();

    // Then each markdown file becomes a document titled by its stem
    assert_eq!(count, 2);
    let mut titles: Vec<_> = ws.store().list().map(|d| d.title.clone()).collect();
    titles.sort();
    assert_eq!(titles, vec!["monday", "todo"]);
    assert!(ws.current_id().is_some());
}

#[test]
fn test_importing_into_an_open_workspace_keeps_the_open_document() {
    let notes = tempfile::tempdir().unwrap();
    std::fs::write(notes.path().join("extra.md"), "extra").unwrap();

    let mut ws = Workspace::new();
    let open = ws.current_id();
    ws.import_notes(notes.path()).unwrap();

    assert_eq!(ws.current_id(), open);
    assert_eq!(ws.store().len(), 2);
}

#[test]
fn test_block_edits_to_an_imported_note_are_exported_back_to_its_file() {
    // Given an imported note opened in the block editor
    let notes = tempfile::tempdir().unwrap();
    std::fs::write(notes.path().join("todo.md"), "# Todo\n- milk").unwrap();
    let mut ws = Workspace::empty();
    ws.import_notes(notes.path()).unwrap();
    ws.set_view_mode(ViewMode::Block);

    // When a bullet is added and the document exported
    ws.apply(BlockCmd::Insert {
        kind: BlockKind::BulletItem,
        content: Some("eggs".to_string()),
    })
    .unwrap();
    let path = ws.export_current(notes.path()).unwrap().unwrap();

    // Then the source file holds the reserialized markdown
    assert_eq!(path.as_str(), "todo.md");
    let written = std::fs::read_to_string(notes.path().join("todo.md")).unwrap();
    assert_eq!(written, "# Todo\n\n- milk\n\n- eggs");
}

#[test]
fn test_missing_notes_directory_is_an_error() {
    let mut ws = Workspace::empty();
    assert!(
        ws.import_notes(std::path::Path::new("/no/such/notes"))
            .is_err()
    );
}
