//! CLI command tests over temporary description files.

use std::io::Write;

use incidence_graph::cli::commands;
use incidence_graph::GraphError;
use tempfile::NamedTempFile;

const TRIANGLE: &str = "\
size = 4
0 = a
1 = b
2 = c
3 = d
;
(0, 1, 1) = ab
(1, 2, 2)
(0, 2, 5)
;
";

fn description(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_commands_text_and_json() {
    let file = description(TRIANGLE);
    let path = file.path();
    for directed in [true, false] {
        for json in [true, false] {
            commands::cmd_info(path, directed, json).unwrap();
            commands::cmd_bfs(path, directed, json).unwrap();
            commands::cmd_dfs(path, directed, json).unwrap();
            commands::cmd_path(path, directed, 0, 2, json).unwrap();
            commands::cmd_path(path, directed, 0, 3, json).unwrap();
            commands::cmd_closure(path, directed, json).unwrap();
        }
        commands::cmd_report(path, directed).unwrap();
        commands::cmd_export(path, directed, true).unwrap();
        commands::cmd_export(path, directed, false).unwrap();
    }
}

#[test]
fn test_path_index_out_of_range() {
    let file = description(TRIANGLE);
    assert!(matches!(
        commands::cmd_path(file.path(), true, 0, 9, false),
        Err(GraphError::IndexOutOfRange { index: 9, size: 4 })
    ));
}

#[test]
fn test_command_errors() {
    let missing = std::path::Path::new("/nonexistent/graph.txt");
    assert!(matches!(
        commands::cmd_info(missing, false, false),
        Err(GraphError::Io(_))
    ));

    let broken = description("size = 1\n0 = a\n");
    assert!(matches!(
        commands::cmd_bfs(broken.path(), false, false),
        Err(GraphError::Format { .. })
    ));
}

#[test]
fn test_logging_levels() {
    assert_eq!(commands::log_filter(true), log::LevelFilter::Debug);
    assert_eq!(commands::log_filter(false), log::LevelFilter::Warn);
    // A second install is tolerated.
    commands::init_logging(true);
    commands::init_logging(false);
    assert!(log::max_level() >= log::LevelFilter::Warn);
}
