//! Property-based tests for core domain types.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated inputs.

use std::path::{Component, Path};

use proptest::prelude::*;

use opensem::core::paths::WorkspacePaths;
use opensem::core::project::{create_project, delete_project};
use opensem::core::types::{ClassPath, ProjectName, MAX_PROJECT_NAME_LEN};

/// Strategy for generating valid project name characters.
fn project_name_char() -> impl Strategy<Value = char> {
    prop_oneof![
        prop::char::range('a', 'z'),
        prop::char::range('A', 'Z'),
        prop::char::range('0', '9'),
        Just('-'),
        Just('_'),
        Just('.'),
    ]
}

/// Strategy for generating valid project names.
fn valid_project_name() -> impl Strategy<Value = String> {
    prop::collection::vec(project_name_char(), 1..64).prop_filter_map(
        "must not start with '.' or '-'",
        |chars| {
            let name: String = chars.into_iter().collect();
            if name.starts_with('.') || name.starts_with('-') {
                None
            } else {
                Some(name)
            }
        },
    )
}

/// Strategy for a dotted identifier segment.
fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z_][A-Za-z0-9_]{0,12}"
}

proptest! {
    #[test]
    fn valid_names_accepted(name in valid_project_name()) {
        let parsed = ProjectName::new(name.clone());
        prop_assert!(parsed.is_ok());
        let parsed = parsed.unwrap();
        prop_assert_eq!(parsed.as_str(), name.as_str());
    }

    #[test]
    fn accepted_names_are_single_normal_components(name in "\\PC{0,40}") {
        if let Ok(project) = ProjectName::new(name) {
            let mut components = Path::new(project.as_str()).components();
            prop_assert!(matches!(components.next(), Some(Component::Normal(_))));
            prop_assert!(components.next().is_none());
        }
    }

    #[test]
    fn names_with_separators_rejected(
        prefix in valid_project_name(),
        sep in prop_oneof![Just('/'), Just('\\'), Just(' '), Just(':')],
        suffix in "[a-z]{0,8}",
    ) {
        let name = format!("{prefix}{sep}{suffix}");
        prop_assert!(ProjectName::new(name).is_err());
    }

    #[test]
    fn overlong_names_rejected(extra in 1usize..32) {
        let name = "a".repeat(MAX_PROJECT_NAME_LEN + extra);
        prop_assert!(ProjectName::new(name).is_err());
    }

    #[test]
    fn class_path_splits_on_last_dot(
        modules in prop::collection::vec(segment(), 1..4),
        class in segment(),
    ) {
        let module = modules.join(".");
        let full = format!("{module}.{class}");
        let path = ClassPath::parse(&full).unwrap();
        prop_assert_eq!(path.module(), module.as_str());
        prop_assert_eq!(path.class(), class.as_str());
        prop_assert_eq!(path.to_string(), full);
    }

    #[test]
    fn class_path_without_dot_rejected(name in segment()) {
        prop_assert!(ClassPath::parse(&name).is_err());
    }

    #[test]
    fn project_paths_stay_inside_root(name in valid_project_name()) {
        let paths = WorkspacePaths::new("/ws");
        let project = ProjectName::new(name).unwrap();
        for path in paths.project_skeleton(&project).into_iter().chain(paths.project_subtrees(&project)) {
            prop_assert!(path.starts_with("/ws"));
            prop_assert!(!path.components().any(|c| c == Component::ParentDir));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn create_then_delete_leaves_nothing(name in valid_project_name()) {
        let dir = tempfile::TempDir::new().unwrap();
        let paths = WorkspacePaths::new(dir.path());
        let project = ProjectName::new(name).unwrap();

        create_project(&paths, &project).unwrap();
        let report = delete_project(&paths, &project).unwrap();
        prop_assert_eq!(report.removed.len(), 3);
        for subtree in paths.project_subtrees(&project) {
            prop_assert!(!subtree.exists());
        }
    }
}
