mod common;

use bridgegen::{generate_from_config, BridgeConfig, Error, HeaderSpec};
use common::{single_target, TestTree};
use std::fs;

#[test]
fn test_quoted_imports_in_sorted_order() {
    let tree = TestTree::new();
    tree.mkdir("out")
        .touch("headers/B.h")
        .touch("headers/A.h")
        .touch("headers/notes.txt");

    let config = single_target("App.h", HeaderSpec::new("headers"));
    generate_from_config(tree.path(), &config).unwrap();

    let expected = "//  App.h\n\
                    //\n\
                    //  This bridging header has been automatically generated by bridgegen\n\
                    //  DO NOT EDIT MANUALLY.\n\
                    //  USE THE TOOL TO REGENERATE IF YOU NEED TO ADD/REMOVE HEADERS.\n\
                    //\n\
                    \n\
                    #import \"A.h\"\n\
                    #import \"B.h\"\n";
    assert_eq!(tree.read("out/App.h"), expected);
}

#[test]
fn test_framework_qualified_imports() {
    let tree = TestTree::new();
    tree.mkdir("out").touch("headers/A.h");

    let config = single_target(
        "Bridge.h",
        HeaderSpec {
            framework_name: Some("MyFW".to_string()),
            ..HeaderSpec::new("headers")
        },
    );
    generate_from_config(tree.path(), &config).unwrap();

    let content = tree.read("out/Bridge.h");
    assert!(content.contains("#import <MyFW/A.h>"));
    assert!(!content.contains("#import \"A.h\""));
}

#[test]
fn test_generated_header_never_imports_itself() {
    let tree = TestTree::new();
    tree.touch("headers/Umbrella.h").touch("headers/A.h");

    // Output lands in the scanned directory, as it does in a real project
    // where the previous run's file is picked up by the next scan.
    let mut config = BridgeConfig {
        output_dir: "headers".to_string(),
        ..Default::default()
    };
    config
        .headers
        .insert("Umbrella.h".to_string(), HeaderSpec::new("headers"));

    generate_from_config(tree.path(), &config).unwrap();

    let content = tree.read("headers/Umbrella.h");
    assert!(!content.contains("#import \"Umbrella.h\""));
    assert!(content.contains("#import \"A.h\""));
}

#[test]
fn test_ignored_names_pattern_from_config() {
    let tree = TestTree::new();
    tree.mkdir("out")
        .touch("headers/Foo.h")
        .touch("headers/FooPrivate.h");

    let config = single_target(
        "App.h",
        HeaderSpec {
            ignored_names: Some("Private".to_string()),
            ..HeaderSpec::new("headers")
        },
    );
    generate_from_config(tree.path(), &config).unwrap();

    let content = tree.read("out/App.h");
    assert!(content.contains("#import \"Foo.h\""));
    assert!(!content.contains("FooPrivate.h"));
}

#[test]
fn test_recursive_flag_from_config() {
    let tree = TestTree::new();
    tree.mkdir("out")
        .touch("headers/x.h")
        .touch("headers/sub/y.h");

    let shallow = single_target("Shallow.h", HeaderSpec::new("headers"));
    generate_from_config(tree.path(), &shallow).unwrap();
    let content = tree.read("out/Shallow.h");
    assert!(content.contains("#import \"x.h\""));
    assert!(!content.contains("y.h"));

    let deep = single_target(
        "Deep.h",
        HeaderSpec {
            recursive: true,
            ..HeaderSpec::new("headers")
        },
    );
    generate_from_config(tree.path(), &deep).unwrap();
    let content = tree.read("out/Deep.h");
    assert!(content.contains("#import \"x.h\""));
    assert!(content.contains("#import \"y.h\""));
}

#[test]
fn test_multiple_targets_generated_in_one_run() {
    let tree = TestTree::new();
    tree.mkdir("out")
        .touch("first/A.h")
        .touch("second/B.h");

    let mut config = BridgeConfig {
        output_dir: "out".to_string(),
        ..Default::default()
    };
    config
        .headers
        .insert("First.h".to_string(), HeaderSpec::new("first"));
    config
        .headers
        .insert("Second.h".to_string(), HeaderSpec::new("second"));

    let written = generate_from_config(tree.path(), &config).unwrap();
    assert_eq!(written.len(), 2);
    assert!(tree.read("out/First.h").contains("#import \"A.h\""));
    assert!(tree.read("out/Second.h").contains("#import \"B.h\""));
}

#[test]
fn test_failing_target_prevents_all_writes() {
    let tree = TestTree::new();
    tree.mkdir("out").touch("good/A.h");

    let mut config = BridgeConfig {
        output_dir: "out".to_string(),
        ..Default::default()
    };
    config
        .headers
        .insert("Good.h".to_string(), HeaderSpec::new("good"));
    config
        .headers
        .insert("Missing.h".to_string(), HeaderSpec::new("does-not-exist"));

    let result = generate_from_config(tree.path(), &config);
    assert!(matches!(result, Err(Error::PathResolution { .. })));
    assert!(!tree.exists("out/Good.h"));
}

#[test]
fn test_invalid_ignore_pattern_aborts_run() {
    let tree = TestTree::new();
    tree.mkdir("out").touch("good/A.h").touch("bad/B.h");

    let mut config = BridgeConfig {
        output_dir: "out".to_string(),
        ..Default::default()
    };
    config
        .headers
        .insert("Good.h".to_string(), HeaderSpec::new("good"));
    config.headers.insert(
        "Bad.h".to_string(),
        HeaderSpec {
            ignored_names: Some("(unbalanced".to_string()),
            ..HeaderSpec::new("bad")
        },
    );

    let result = generate_from_config(tree.path(), &config);
    assert!(matches!(result, Err(Error::InvalidPattern { .. })));
    assert!(!tree.exists("out/Good.h"));
    assert!(!tree.exists("out/Bad.h"));
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let tree = TestTree::new();
    tree.mkdir("out")
        .touch("headers/C.h")
        .touch("headers/A.h")
        .touch("headers/B.h");

    let config = single_target(
        "App.h",
        HeaderSpec {
            recursive: true,
            ..HeaderSpec::new("headers")
        },
    );

    generate_from_config(tree.path(), &config).unwrap();
    let first = tree.read("out/App.h");

    generate_from_config(tree.path(), &config).unwrap();
    let second = tree.read("out/App.h");

    assert_eq!(first, second);
}

#[test]
fn test_existing_output_file_overwritten() {
    let tree = TestTree::new();
    tree.mkdir("out").touch("headers/A.h");
    fs::write(tree.path().join("out/App.h"), "stale content").unwrap();

    let config = single_target("App.h", HeaderSpec::new("headers"));
    generate_from_config(tree.path(), &config).unwrap();

    let content = tree.read("out/App.h");
    assert!(!content.contains("stale content"));
    assert!(content.contains("#import \"A.h\""));
}

#[test]
fn test_write_failure_names_target_and_stops() {
    let tree = TestTree::new();
    tree.touch("headers/X.h");
    // A directory squatting on the first target's output path makes its
    // write fail after the generation phase already succeeded.
    tree.mkdir("out/Blocked.h");

    let mut config = BridgeConfig {
        output_dir: "out".to_string(),
        ..Default::default()
    };
    config
        .headers
        .insert("Blocked.h".to_string(), HeaderSpec::new("headers"));
    config
        .headers
        .insert("Later.h".to_string(), HeaderSpec::new("headers"));

    let result = generate_from_config(tree.path(), &config);
    match result {
        Err(Error::Write { target, .. }) => assert_eq!(target, "Blocked.h"),
        other => panic!("expected write error, got {:?}", other.map(|_| ())),
    }
    assert!(!tree.exists("out/Later.h"));
}

#[test]
fn test_empty_configuration_rejected() {
    let tree = TestTree::new();

    let result = generate_from_config(tree.path(), &BridgeConfig::default());
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_empty_scan_produces_banner_only_file() {
    let tree = TestTree::new();
    tree.mkdir("out").mkdir("headers");

    let config = single_target("App.h", HeaderSpec::new("headers"));
    generate_from_config(tree.path(), &config).unwrap();

    let content = tree.read("out/App.h");
    assert!(content.starts_with("//  App.h\n"));
    assert!(!content.contains("#import"));
}
