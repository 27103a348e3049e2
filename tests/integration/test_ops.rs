//! Integration tests for directory lifecycle operations

use crate::fixtures::{audit_store, log_lines, write_file_sync};
use downman::Error;
use downman::services::ops;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_create_directory() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let created = ops::create_directory(&store, temp.path(), "invoices").unwrap();

    assert!(created.is_dir());
    assert_eq!(created, temp.path().join("invoices"));
}

#[test]
fn test_create_directory_twice_is_one_directory_and_two_log_entries() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    ops::create_directory(&store, temp.path(), "invoices").unwrap();
    let second = ops::create_directory(&store, temp.path(), "invoices");

    assert!(matches!(second, Err(Error::AlreadyExists(_))));
    assert!(temp.path().join("invoices").is_dir());

    let contents = store.read_log().unwrap();
    let lines = log_lines(&contents);
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("already exists"), "{}", lines[0]);
    assert!(lines[1].contains("has been created"), "{}", lines[1]);
}

#[test]
fn test_create_directory_makes_intermediate_parents() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let created = ops::create_directory(&store, &temp.path().join("a/b"), "c").unwrap();

    assert!(created.is_dir());
    assert_eq!(created, temp.path().join("a/b/c"));
}

#[test]
fn test_trash_refuses_missing_directory() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let result = ops::move_directory_to_trash(&store, &temp.path().join("ghost"));

    assert!(matches!(result, Err(Error::NotFound(_))));
    assert!(store.read_log().unwrap().contains("doesn't exist"));
}

#[test]
fn test_trash_refuses_non_empty_directory_and_leaves_it_untouched() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let target = temp.path().join("keep");
    fs::create_dir(&target).unwrap();
    write_file_sync(target.join("precious.txt"), b"do not lose").unwrap();

    let result = ops::move_directory_to_trash(&store, &target);

    assert!(matches!(result, Err(Error::NotEmpty(_))));
    assert!(target.is_dir());
    assert_eq!(fs::read(target.join("precious.txt")).unwrap(), b"do not lose");
    assert!(store.read_log().unwrap().contains("still contains files"));
}

#[test]
fn test_remove_directory_refuses_non_empty() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let target = temp.path().join("full");
    fs::create_dir(&target).unwrap();
    write_file_sync(target.join("file.txt"), b"content").unwrap();

    let result = ops::remove_directory(&store, &target);

    assert!(matches!(result, Err(Error::NotEmpty(_))));
    assert!(target.join("file.txt").exists());
}

#[test]
fn test_remove_directory_removes_empty() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let target = temp.path().join("empty");
    fs::create_dir(&target).unwrap();

    ops::remove_directory(&store, &target).unwrap();

    assert!(!target.exists());
    assert!(store.read_log().unwrap().contains("has been removed"));
}

#[test]
fn test_remove_directory_all_deletes_recursively() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let target = temp.path().join("tree");
    fs::create_dir_all(target.join("nested/deeper")).unwrap();
    write_file_sync(target.join("nested/file.bin"), vec![0u8; 64]).unwrap();

    ops::remove_directory_all(&store, &target).unwrap();

    assert!(!target.exists());
    assert!(store.read_log().unwrap().contains("all its contents"));
}

#[test]
fn test_remove_directory_all_requires_existing_directory() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let result = ops::remove_directory_all(&store, &temp.path().join("ghost"));

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_rename_directory() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let old = temp.path().join("drafts");
    fs::create_dir(&old).unwrap();

    let renamed = ops::rename_directory(&store, &old, "final").unwrap();

    assert_eq!(renamed, temp.path().join("final"));
    assert!(renamed.is_dir());
    assert!(!old.exists());
}

#[test]
fn test_rename_to_same_name_is_a_logged_noop() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let dir = temp.path().join("stable");
    fs::create_dir(&dir).unwrap();

    let result = ops::rename_directory(&store, &dir, "stable").unwrap();

    assert_eq!(result, dir);
    assert!(dir.is_dir());

    let contents = store.read_log().unwrap();
    let lines = log_lines(&contents);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Nothing happened"), "{}", lines[0]);
}

#[test]
fn test_move_directory() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let source = temp.path().join("source");
    fs::create_dir(&source).unwrap();
    write_file_sync(source.join("payload.txt"), b"cargo").unwrap();

    let dest = temp.path().join("sorted/source");
    fs::create_dir_all(temp.path().join("sorted")).unwrap();

    ops::move_directory(&store, &source, &dest).unwrap();

    assert!(!source.exists());
    assert_eq!(fs::read(dest.join("payload.txt")).unwrap(), b"cargo");
}

#[test]
fn test_move_directory_refuses_missing_source() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let result = ops::move_directory(
        &store,
        &temp.path().join("ghost"),
        &temp.path().join("anywhere"),
    );

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_move_directory_refuses_occupied_destination() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let source = temp.path().join("source");
    let dest = temp.path().join("occupied");
    fs::create_dir(&source).unwrap();
    fs::create_dir(&dest).unwrap();
    write_file_sync(source.join("file.txt"), b"stays put").unwrap();

    let result = ops::move_directory(&store, &source, &dest);

    assert!(matches!(result, Err(Error::AlreadyExists(_))));
    assert!(source.join("file.txt").exists());
    assert!(store.read_log().unwrap().contains("already occupied"));
}

#[test]
fn test_failed_operation_writes_a_debug_error_record() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    // a file in the parent position forces create_dir_all to fail
    let bogus_parent = temp.path().join("not_a_dir");
    write_file_sync(&bogus_parent, b"flat file").unwrap();

    let result = ops::create_directory(&store, &bogus_parent, "child");

    assert!(matches!(result, Err(Error::Io(_))));

    let debug = store.read_debug().unwrap();
    assert!(debug.starts_with("ERROR ["), "{debug}");
    assert!(debug.contains("\tFunction name: create_directory\n"));

    let human = store.read_log().unwrap();
    assert!(human.contains("Error occurred while creating directory"));
}

#[test]
fn test_set_folder_icon_rejects_non_ico_files() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let dir = temp.path().join("pretty");
    fs::create_dir(&dir).unwrap();
    let not_an_icon = temp.path().join("image.png");
    write_file_sync(&not_an_icon, b"png bytes").unwrap();

    let result = ops::set_folder_icon(&store, &dir, &not_an_icon);

    assert!(matches!(result, Err(Error::InvalidInput(_))));
    assert!(!dir.join(ops::ICON_DESCRIPTOR).exists());
    assert!(store.read_log().unwrap().contains("not an icon file"));
}

#[test]
fn test_set_folder_icon_rejects_missing_icon() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let dir = temp.path().join("pretty");
    fs::create_dir(&dir).unwrap();

    let result = ops::set_folder_icon(&store, &dir, &temp.path().join("ghost.ico"));

    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[test]
fn test_folder_icon_descriptor_lifecycle() {
    let temp = TempDir::new().unwrap();
    let store = audit_store(temp.path());

    let dir = temp.path().join("pretty");
    fs::create_dir(&dir).unwrap();
    let icon = temp.path().join("folder.ico");
    write_file_sync(&icon, b"ico bytes").unwrap();

    ops::set_folder_icon(&store, &dir, &icon).unwrap();

    let descriptor = dir.join(ops::ICON_DESCRIPTOR);
    let contents = fs::read_to_string(&descriptor).unwrap();
    assert!(contents.starts_with("[.ShellClassInfo]"));
    assert!(contents.contains("IconResource="));
    assert!(contents.contains("folder.ico,0"));

    ops::reset_folder_icon(&store, &dir).unwrap();
    assert!(!descriptor.exists());

    // resetting an already-default folder is a logged notice, not an error
    ops::reset_folder_icon(&store, &dir).unwrap();
    assert!(store.read_log().unwrap().contains("already has the default icon"));
}
