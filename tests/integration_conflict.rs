// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for conflict highlighting through the manager.

use std::path::PathBuf;

use openmwmm::config::Config;
use openmwmm::conflict::{ConflictIndex, ScanOptions, Selection};
use openmwmm::manager::ModManager;
use openmwmm::model::{ModEntry, NodeId};
use openmwmm::persist::{DATA_KEY, GameConfigStore, JsonModList, ModListStore, OpenMwConfig};
use tempfile::TempDir;

fn make_folder(temp: &TempDir, name: &str, files: &[&str]) -> PathBuf {
    let root = temp.path().join(name);
    std::fs::create_dir_all(&root).unwrap();
    for file in files {
        let path = root.join(file);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "").unwrap();
    }
    root
}

fn load(temp: &TempDir, options: ScanOptions, entries: &[ModEntry]) -> ModManager {
    let mut store = JsonModList::open(temp.path().join("mods.json")).unwrap();
    store.save(entries).unwrap();
    let mut manager = ModManager::new(options);
    manager.load(&store).unwrap();
    manager
}

fn top(manager: &ModManager, position: usize) -> NodeId {
    manager.tree().child(manager.tree().root(), position).unwrap()
}

#[test]
fn conflict_select_remove_and_export() {
    let temp = tempfile::tempdir().unwrap();
    let a = make_folder(&temp, "a", &["textures/x.dds", "meshes/y.nif"]);
    let b = make_folder(&temp, "b", &["textures/x.dds"]);
    let mut manager = load(
        &temp,
        ScanOptions::default(),
        &[ModEntry::new("M1", &a, true), ModEntry::new("M2", &b, false)],
    );
    let (m1, m2) = (top(&manager, 0), top(&manager, 1));

    let update = manager.update_conflict_selection(&Selection::row(m1)).unwrap();
    assert_eq!(update.flagged, [m2]);

    let mut cfg = OpenMwConfig::from_text(temp.path().join("openmw.cfg"), "");
    manager.export_data(&mut cfg);
    assert_eq!(cfg.values(DATA_KEY), [a.display().to_string()]);

    let root = manager.tree().root();
    manager.remove_rows(root, 1, 1).unwrap();
    let update = manager.update_conflict_selection(&Selection::row(m1)).unwrap();
    assert!(update.flagged.is_empty());
    assert!(!manager.is_conflicting(m2));
}

#[test]
fn conflict_nested_group_highlighted() {
    let temp = tempfile::tempdir().unwrap();
    let a = make_folder(&temp, "a", &["Data Files/foo.esp"]);
    let b = make_folder(&temp, "b", &["Data Files/foo.esp"]);
    let c = make_folder(&temp, "c", &["bar.esp"]);
    let group = make_folder(&temp, "group", &[]);
    let mut manager = load(
        &temp,
        ScanOptions::default(),
        &[
            ModEntry::new("A", &a, true),
            ModEntry::new("Group", &group, true).with_mods(vec![
                ModEntry::new("C", &c, true),
                ModEntry::new("B", &b, true),
            ]),
        ],
    );
    let group_id = top(&manager, 1);
    let b_id = manager.tree().child(group_id, 1).unwrap();
    let c_id = manager.tree().child(group_id, 0).unwrap();

    manager
        .update_conflict_selection(&Selection::row(top(&manager, 0)))
        .unwrap();
    assert!(manager.is_conflicting(group_id));
    assert!(manager.is_conflicting(b_id));
    assert!(!manager.is_conflicting(c_id));

    manager.update_conflict_selection(&Selection::row(b_id)).unwrap();
    assert!(manager.is_conflicting(top(&manager, 0)));
    assert!(!manager.is_conflicting(group_id));
}

#[test]
fn conflict_options_from_config() {
    let temp = tempfile::tempdir().unwrap();
    let a = make_folder(&temp, "a", &["Textures/X.dds", "readme.txt", ".hidden/h.esp"]);
    let b = make_folder(&temp, "b", &["textures/x.dds", "readme.txt", ".hidden/h.esp"]);

    let strict = Config::parse("[conflicts]\nignore = [\"*.txt\"]\n").unwrap();
    let index = ConflictIndex::build([a.as_path(), b.as_path()], &strict.conflicts.scan_options())
        .unwrap();
    assert!(index.shared_paths(&a, &b).is_empty());

    let relaxed = Config::parse(
        "[conflicts]\ncase_sensitive = false\ninclude_hidden = true\nignore = [\"*.txt\"]\n",
    )
    .unwrap();
    let index =
        ConflictIndex::build([a.as_path(), b.as_path()], &relaxed.conflicts.scan_options())
            .unwrap();
    assert_eq!(
        index.shared_paths(&a, &b),
        [".hidden/h.esp", "textures/x.dds"]
    );
}

#[test]
fn conflict_reused_index_sees_same_result() {
    let temp = tempfile::tempdir().unwrap();
    let a = make_folder(&temp, "a", &["x.esp"]);
    let b = make_folder(&temp, "b", &["x.esp"]);
    let c = make_folder(&temp, "c", &["y.esp"]);
    let entries = [
        ModEntry::new("A", &a, true),
        ModEntry::new("B", &b, true),
        ModEntry::new("C", &c, true),
    ];

    let reuse = ScanOptions::builder().with_reuse_index(true).build();
    let mut cached = load(&temp, reuse, &entries);
    let mut fresh = load(&temp, ScanOptions::default(), &entries);

    for position in [0, 2, 1, 0] {
        let id = top(&cached, position);
        let cached_update = cached.update_conflict_selection(&Selection::row(id)).unwrap();
        let fresh_update = fresh
            .update_conflict_selection(&Selection::row(top(&fresh, position)))
            .unwrap();
        assert_eq!(cached_update.flagged.len(), fresh_update.flagged.len());
    }
    assert!(cached.is_conflicting(top(&cached, 1)));
}
