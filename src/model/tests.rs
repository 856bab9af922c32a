// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use super::{Column, FieldValue, ItemFlags, ModEntry, ModTree, NodeId, NodePath};
use crate::error::TreeError;

fn sample_tree() -> ModTree {
    ModTree::from_entries(&[
        ModEntry::new("Graphics", "/mods/graphics", true).with_mods(vec![
            ModEntry::new("Tex", "/mods/graphics/tex", true),
            ModEntry::new("Meshes", "/mods/graphics/mesh", false),
            ModEntry::new("Sky", "/mods/graphics/sky", true),
        ]),
        ModEntry::new("Quests", "/mods/quests", true),
        ModEntry::new("Patch", "/mods/patch", false),
    ])
    .unwrap()
}

fn assert_indexes(tree: &ModTree, parent: NodeId) {
    for (position, child) in tree.children(parent).iter().enumerate() {
        assert_eq!(tree.node(*child).unwrap().index(), position);
        assert_indexes(tree, *child);
    }
}

fn names(tree: &ModTree, parent: NodeId) -> Vec<String> {
    tree.children(parent)
        .iter()
        .map(|id| tree.node(*id).unwrap().name().to_string())
        .collect()
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn test_new_tree_is_empty() {
    let tree = ModTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.child_count(tree.root()), 0);
    assert!(tree.node(tree.root()).unwrap().is_root());
}

#[test]
fn test_from_entries_builds_depth_first() {
    let tree = sample_tree();
    assert_eq!(tree.len(), 6);
    assert_eq!(names(&tree, tree.root()), ["Graphics", "Quests", "Patch"]);

    let graphics = tree.child(tree.root(), 0).unwrap();
    assert!(tree.node(graphics).unwrap().is_group());
    assert_eq!(names(&tree, graphics), ["Tex", "Meshes", "Sky"]);
    assert_indexes(&tree, tree.root());
}

#[test]
fn test_entries_round_trip_to_detached_form() {
    let tree = sample_tree();
    let rebuilt = ModTree::from_entries(&tree.entries()).unwrap();
    assert_eq!(rebuilt.entries(), tree.entries());
}

// =============================================================================
// Insert / remove
// =============================================================================

#[test]
fn test_insert_into_middle_of_group() {
    let mut tree = sample_tree();
    let graphics = tree.child(tree.root(), 0).unwrap();

    let ids = tree.insert_children(graphics, 1, 1).unwrap();
    tree.set_field(ids[0], FieldValue::Name("New".into()))
        .unwrap();

    assert_eq!(names(&tree, graphics), ["Tex", "New", "Meshes", "Sky"]);
    let indexes: Vec<usize> = tree
        .children(graphics)
        .iter()
        .map(|id| tree.node(*id).unwrap().index())
        .collect();
    assert_eq!(indexes, [0, 1, 2, 3]);
}

#[test]
fn test_insert_new_nodes_are_blank() {
    let mut tree = ModTree::new();
    let ids = tree.insert_children(tree.root(), 0, 2).unwrap();
    let node = tree.node(ids[1]).unwrap();
    assert_eq!(node.name(), "");
    assert_eq!(node.folder(), Path::new(""));
    assert!(!node.enabled());
    assert_eq!(node.index(), 1);
    assert_eq!(tree.parent(ids[1]), Some(tree.root()));
}

#[test]
fn test_insert_out_of_bounds_rejected() {
    let mut tree = sample_tree();
    let revision = tree.revision();
    let err = tree.insert_children(tree.root(), 4, 1).unwrap_err();
    assert_eq!(
        err,
        TreeError::OutOfBounds {
            position: 4,
            count: 1,
            child_count: 3,
        }
    );
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.revision(), revision);
}

#[test]
fn test_insert_at_end_allowed() {
    let mut tree = sample_tree();
    let ids = tree.insert_children(tree.root(), 3, 2).unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(tree.child_count(tree.root()), 5);
    assert_indexes(&tree, tree.root());
}

#[test]
fn test_remove_destroys_subtree() {
    let mut tree = sample_tree();
    let graphics = tree.child(tree.root(), 0).unwrap();
    let tex = tree.child(graphics, 0).unwrap();

    tree.remove_children(tree.root(), 0, 1).unwrap();

    assert_eq!(tree.len(), 2);
    assert!(!tree.contains(graphics));
    assert!(!tree.contains(tex));
    assert_eq!(names(&tree, tree.root()), ["Quests", "Patch"]);
    assert_indexes(&tree, tree.root());
}

#[test]
fn test_remove_out_of_bounds_rejected() {
    let mut tree = sample_tree();
    let err = tree.remove_children(tree.root(), 2, 2).unwrap_err();
    assert!(matches!(err, TreeError::OutOfBounds { .. }));
    assert_eq!(tree.len(), 6);

    assert!(tree.remove_children(tree.root(), usize::MAX, 2).is_err());
}

#[test]
fn test_stale_handle_not_resolved_after_slot_reuse() {
    let mut tree = sample_tree();
    let patch = tree.child(tree.root(), 2).unwrap();
    tree.remove_children(tree.root(), 2, 1).unwrap();

    let fresh = tree.insert_children(tree.root(), 0, 1).unwrap()[0];
    assert_ne!(fresh, patch);
    assert!(tree.get(patch).is_none());
    assert!(matches!(tree.node(patch), Err(TreeError::StaleNode(_))));
}

#[test]
fn test_revision_tracks_structure_only() {
    let mut tree = sample_tree();
    let before = tree.revision();
    let quests = tree.child(tree.root(), 1).unwrap();

    tree.set_field(quests, FieldValue::Enabled(false)).unwrap();
    assert_eq!(tree.revision(), before);

    tree.insert_children(tree.root(), 0, 1).unwrap();
    assert_eq!(tree.revision(), before + 1);
}

// =============================================================================
// Fields
// =============================================================================

#[test]
fn test_set_field_index_uses_position() {
    let mut tree = sample_tree();
    let quests = tree.child(tree.root(), 1).unwrap();
    tree.set_field(quests, FieldValue::Index(42)).unwrap();
    assert_eq!(tree.node(quests).unwrap().index(), 1);
}

#[test]
fn test_set_field_on_root_rejected() {
    let mut tree = sample_tree();
    let err = tree
        .set_field(tree.root(), FieldValue::Name("x".into()))
        .unwrap_err();
    assert_eq!(err, TreeError::RootNotEditable);
}

#[test]
fn test_set_field_updates_value() {
    let mut tree = sample_tree();
    let patch = tree.child(tree.root(), 2).unwrap();
    tree.set_field(patch, FieldValue::Folder(PathBuf::from("/elsewhere")))
        .unwrap();
    assert_eq!(
        tree.node(patch).unwrap().value(Column::Folder),
        FieldValue::Folder(PathBuf::from("/elsewhere"))
    );
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_depth_first_order() {
    let tree = sample_tree();
    let visited: Vec<(String, usize)> = tree
        .depth_first()
        .map(|(id, depth)| (tree.node(id).unwrap().name().to_string(), depth))
        .collect();
    assert_eq!(
        visited,
        [
            ("Graphics".to_string(), 0),
            ("Tex".to_string(), 1),
            ("Meshes".to_string(), 1),
            ("Sky".to_string(), 1),
            ("Quests".to_string(), 0),
            ("Patch".to_string(), 0),
        ]
    );
}

#[test]
fn test_ancestors_end_at_root() {
    let tree = sample_tree();
    let graphics = tree.child(tree.root(), 0).unwrap();
    let sky = tree.child(graphics, 2).unwrap();

    let chain: Vec<NodeId> = tree.ancestors(sky).collect();
    assert_eq!(chain, [graphics, tree.root()]);
    assert!(tree.is_ancestor_of(graphics, sky));
    assert!(!tree.is_ancestor_of(sky, graphics));
}

#[test]
fn test_find_by_folder() {
    let tree = sample_tree();
    let found = tree.find_by_folder(Path::new("/mods/graphics/sky")).unwrap();
    assert_eq!(tree.node(found).unwrap().name(), "Sky");
    assert!(tree.find_by_folder(Path::new("/mods/none")).is_none());
}

#[test]
fn test_enabled_folders_gated_by_ancestors() {
    let mut tree = sample_tree();
    let folders: Vec<PathBuf> = tree
        .enabled_folders()
        .into_iter()
        .map(Path::to_path_buf)
        .collect();
    assert_eq!(
        folders,
        [
            PathBuf::from("/mods/graphics"),
            PathBuf::from("/mods/graphics/tex"),
            PathBuf::from("/mods/graphics/sky"),
            PathBuf::from("/mods/quests"),
        ]
    );

    let graphics = tree.child(tree.root(), 0).unwrap();
    tree.set_field(graphics, FieldValue::Enabled(false)).unwrap();
    assert_eq!(tree.enabled_folders(), [Path::new("/mods/quests")]);
}

// =============================================================================
// Paths and flags
// =============================================================================

#[test]
fn test_node_path_parse_and_display() {
    let path: NodePath = "0/2".parse().unwrap();
    assert_eq!(path.positions(), [0, 2]);
    insta::assert_snapshot!(path.to_string(), @"0/2");

    let root: NodePath = "root".parse().unwrap();
    assert!(root.is_root());
    insta::assert_snapshot!(root.to_string(), @"root");

    assert!(matches!(
        "1/x".parse::<NodePath>(),
        Err(TreeError::InvalidPath(_))
    ));
}

#[test]
fn test_resolve_and_path_of() {
    let tree = sample_tree();
    let path: NodePath = "0/2".parse().unwrap();
    let sky = tree.resolve(&path).unwrap();
    assert_eq!(tree.node(sky).unwrap().name(), "Sky");
    assert_eq!(tree.path_of(sky).unwrap(), path);
    assert_eq!(tree.path_of(tree.root()).unwrap(), NodePath::root());

    let missing: NodePath = "5".parse().unwrap();
    assert!(tree.resolve(&missing).is_err());
}

#[test]
fn test_item_flags() {
    let tree = sample_tree();
    let quests = tree.child(tree.root(), 1).unwrap();

    assert_eq!(
        tree.flags(quests, Column::Index),
        ItemFlags::SELECTABLE | ItemFlags::DRAG_ENABLED
    );
    assert!(tree.flags(quests, Column::Name).contains(ItemFlags::EDITABLE));
    assert!(
        tree.flags(quests, Column::Enabled)
            .contains(ItemFlags::USER_CHECKABLE)
    );
    assert_eq!(tree.flags(tree.root(), Column::Name), ItemFlags::DROP_ENABLED);
}

#[test]
fn test_mod_entry_json_shape() {
    let entry = ModEntry::new("Group", "/g", true)
        .with_mods(vec![ModEntry::new("Leaf", "/g/leaf", false)]);
    insta::assert_snapshot!(
        serde_json::to_string(&entry).unwrap(),
        @r#"{"name":"Group","folder":"/g","enabled":true,"mods":[{"name":"Leaf","folder":"/g/leaf","enabled":false}]}"#
    );

    let partial: ModEntry = serde_json::from_str(r#"{"name":"Only"}"#).unwrap();
    assert_eq!(partial, ModEntry::new("Only", "", false));
    assert_eq!(entry.node_count(), 2);
}
