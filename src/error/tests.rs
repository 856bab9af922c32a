// openmwmm: OpenMW Mod Manager
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, ConflictError, ModError, ModResult, TransferError, TreeError};

#[test]
fn test_tree_error_display() {
    let err = TreeError::OutOfBounds {
        position: 4,
        count: 1,
        child_count: 3,
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"position 4 (count 1) is out of bounds for a parent with 3 children"
    );
}

#[test]
fn test_transfer_error_display() {
    let err = TransferError::UnexpectedTag {
        column: "name",
        tag: 0x01,
        offset: 13,
    };
    insta::assert_snapshot!(err.to_string(), @"unexpected tag 0x01 for column 'name' at byte 13");
}

#[test]
fn test_boxed_conversion() {
    let err: ModError = ConflictError::NoFolderColumn.into();
    assert!(matches!(err, ModError::Conflict(_)));
    insta::assert_snapshot!(err.to_string(), @"conflict error: selection has no folder column");
}

#[test]
fn test_mod_error_size() {
    // Box<str> variant (Other) is a fat pointer: 16 bytes + discriminant
    let size = std::mem::size_of::<ModError>();
    assert!(size <= 24, "ModError is {size} bytes, expected <= 24");
}

#[test]
fn test_mod_result_size() {
    let size = std::mem::size_of::<ModResult<()>>();
    assert!(size <= 24, "ModResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_config_error_boxed_display() {
    let err: ModError = ConfigError::InvalidValue {
        section: "paths".to_string(),
        key: "mod_list".to_string(),
        message: "must not be empty".to_string(),
    }
    .into();
    assert!(matches!(err, ModError::Config(_)));
    insta::assert_snapshot!(
        err.to_string(),
        @"config error: invalid value for 'mod_list' in section '[paths]': must not be empty"
    );
}
