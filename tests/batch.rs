use hotkey_migrate::{
    convert_directory, convert_directory_with, ConvertOptions, FailurePolicy, ParseMode,
};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const VIEWER_FUNC: &str = "\
HotKeyOne StartHotKeyOne
    Description Zoom In
    Category Viewer
    FuncIndex Zoom
    Key1 KEY_Z
    Key2 KEY_NONE
    Key3 KEY_NONE
    Key4 KEY_NONE
EndHotKeyOne
HotKeyOne StartHotKeyOne
    Description Pan
    Category Viewer
    FuncIndex Pan
    Key1 KEY_CTL
    Key2 KEY_P
    Key3 KEY_NONE
    Key4 KEY_NONE
EndHotKeyOne
";

const LOCAL_BUTT: &str = "\
HotKeyOne StartHotKeyOne
    Description Gain Up
    Category Local
    ItemIndex Gain
    ValueType Float
    ValueIncrement 0.1
    ItemFuncParam 0
    Key1 KEY_ALT
    Key2 KEY_UP
    Key3 KEY_NONE
    Key4 KEY_NONE
EndHotKeyOne
";

const ACTION_BUTT: &str = "\
HotKeyOne StartHotKeyOne
    Description Render
    Category Action
    ItemIndex Render
    ValueType Int
    ItemFuncParam 1
    Key1 KEY_R
    Key2 KEY_NONE
    Key3 KEY_NONE
    Key4 KEY_NONE
EndHotKeyOne
";

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write fixture");
}

fn read_json(path: &Path) -> Value {
    let text = fs::read_to_string(path).expect("read output");
    serde_json::from_str(&text).expect("output is valid json")
}

#[test]
fn converts_function_and_button_files() {
    let tmp = TempDir::new().expect("create temp dir");
    write(tmp.path(), "current.Viewer.func.hotkey.user", VIEWER_FUNC);
    write(tmp.path(), "current.Action.butt.hotkey.user", ACTION_BUTT);
    write(tmp.path(), "notes.txt", "HotKeyOne StartHotKeyOne EndHotKeyOne");

    let report = convert_directory(&ConvertOptions::new(tmp.path())).expect("batch runs");

    let viewer_out = tmp.path().join("user.shortcuts.viewer.json");
    let action_out = tmp.path().join("user.shortcuts.action.buttons.json");
    assert!(report.is_success());
    assert_eq!(
        report.outputs(),
        vec![(viewer_out.as_path(), 2), (action_out.as_path(), 1)]
    );
    assert_eq!(report.total_records(), 3);

    let viewer = read_json(&viewer_out);
    assert_eq!(viewer["Version"], "2025");
    let shortcuts = viewer["viewerShortcuts"].as_array().expect("array");
    assert_eq!(shortcuts.len(), 2);
    assert_eq!(shortcuts[0]["FunctionName"], "Zoom");
    assert!(shortcuts[0].get("Key2").is_none());
    assert_eq!(shortcuts[1]["Key1"], "KEY_CTL_L");

    let action = read_json(&action_out);
    let button = &action["actionShortcuts"][0];
    assert_eq!(button["ButtonName"], "Render");
    assert_eq!(button["ItemFuncParam"], "1");
    assert!(button.get("ValueType").is_none());
}

#[test]
fn local_buttons_keep_value_fields_in_order() {
    let tmp = TempDir::new().expect("create temp dir");
    write(tmp.path(), "current.Local.butt.hotkey.user", LOCAL_BUTT);

    convert_directory(&ConvertOptions::new(tmp.path())).expect("batch runs");

    let output = tmp.path().join("user.shortcuts.local.buttons.json");
    let text = fs::read_to_string(&output).expect("read output");
    let order: Vec<usize> = [
        "\"Description\"",
        "\"Category\"",
        "\"ButtonName\"",
        "\"ValueType\"",
        "\"ValueIncrement\"",
        "\"ItemFuncParam\"",
        "\"Key1\"",
        "\"Key2\"",
    ]
    .iter()
    .map(|key| text.find(key).expect("key present"))
    .collect();
    assert!(order.windows(2).all(|w| w[0] < w[1]), "{}", text);

    let json = read_json(&output);
    let local = &json["localShortcuts"][0];
    assert_eq!(local["ValueIncrement"], "0.1");
    assert_eq!(local["Key1"], "KEY_ALT_L");
    assert_eq!(local.as_object().map(|o| o.len()), Some(8));
}

#[test]
fn renamed_categories_route_to_new_files() {
    let tmp = TempDir::new().expect("create temp dir");
    write(tmp.path(), "current.PaintNode.func.hotkey.user", VIEWER_FUNC);
    write(tmp.path(), "current.Paint.butt.hotkey.user", ACTION_BUTT);

    convert_directory(&ConvertOptions::new(tmp.path())).expect("batch runs");

    let batch = read_json(&tmp.path().join("user.shortcuts.paint_batch.json"));
    assert_eq!(batch["paint_batchShortcuts"].as_array().map(Vec::len), Some(2));

    let tools = read_json(&tmp.path().join("user.shortcuts.paint_tools.buttons.json"));
    assert_eq!(tools["paint_toolsShortcuts"].as_array().map(Vec::len), Some(1));
}

#[test]
fn empty_input_writes_empty_document() {
    let tmp = TempDir::new().expect("create temp dir");
    write(tmp.path(), "current.Timeline.func.hotkey.user", "");

    let report = convert_directory(&ConvertOptions::new(tmp.path())).expect("batch runs");
    assert_eq!(report.total_records(), 0);

    let json = read_json(&tmp.path().join("user.shortcuts.timeline.json"));
    assert_eq!(json["timelineShortcuts"], serde_json::json!([]));
}

#[test]
fn writes_into_separate_output_dir() {
    let tmp = TempDir::new().expect("create temp dir");
    write(tmp.path(), "current.Viewer.func.hotkey.user", VIEWER_FUNC);
    let out = tmp.path().join("converted");

    let options = ConvertOptions::new(tmp.path()).output_dir(&out);
    convert_directory(&options).expect("batch runs");

    assert!(out.join("user.shortcuts.viewer.json").is_file());
    assert!(!tmp.path().join("user.shortcuts.viewer.json").exists());
}

#[test]
fn function_files_convert_before_button_files() {
    let tmp = TempDir::new().expect("create temp dir");
    write(tmp.path(), "current.Action.butt.hotkey.user", ACTION_BUTT);
    write(tmp.path(), "current.Viewer.func.hotkey.user", VIEWER_FUNC);
    write(tmp.path(), "current.Batch.func.hotkey.user", VIEWER_FUNC);

    let mut seen = Vec::new();
    convert_directory_with(&ConvertOptions::new(tmp.path()), |c| {
        seen.push(c.output.file_name().unwrap().to_string_lossy().into_owned())
    })
    .expect("batch runs");

    assert_eq!(
        seen,
        vec![
            "user.shortcuts.batch.json",
            "user.shortcuts.viewer.json",
            "user.shortcuts.action.buttons.json",
        ]
    );
}

#[test]
fn failures_are_isolated_per_file() {
    let tmp = TempDir::new().expect("create temp dir");
    let broken = format!("{}HotKeyOne StartHotKeyOne\n    Key1 KEY_A\n", VIEWER_FUNC);
    write(tmp.path(), "current.Broken.func.hotkey.user", &broken);
    write(tmp.path(), "current.Viewer.func.hotkey.user", VIEWER_FUNC);

    let options = ConvertOptions::new(tmp.path()).mode(ParseMode::Strict);
    let report = convert_directory(&options).expect("batch runs");

    assert!(!report.is_success());
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0]
        .input
        .ends_with("current.Broken.func.hotkey.user"));
    assert!(format!("{:#}", report.failures[0].error).contains("Unterminated"));
    assert!(!tmp.path().join("user.shortcuts.broken.json").exists());

    assert_eq!(report.conversions.len(), 1);
    assert!(tmp.path().join("user.shortcuts.viewer.json").is_file());
}

#[test]
fn unreadable_file_does_not_stop_the_batch() {
    let tmp = TempDir::new().expect("create temp dir");
    fs::write(
        tmp.path().join("current.Binary.func.hotkey.user"),
        [0xFF, 0xFE, b'K', b'e', b'y', 0x80],
    )
    .expect("write fixture");
    write(tmp.path(), "current.Viewer.func.hotkey.user", VIEWER_FUNC);

    let report = convert_directory(&ConvertOptions::new(tmp.path())).expect("batch runs");

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0]
        .input
        .ends_with("current.Binary.func.hotkey.user"));
    assert!(format!("{:#}", report.failures[0].error).contains("Failed to read"));
    assert!(!tmp.path().join("user.shortcuts.binary.json").exists());

    assert_eq!(report.conversions.len(), 1);
    assert_eq!(report.total_records(), 2);
    assert!(tmp.path().join("user.shortcuts.viewer.json").is_file());
}

#[test]
fn abort_policy_stops_at_first_failure() {
    let tmp = TempDir::new().expect("create temp dir");
    write(
        tmp.path(),
        "current.Broken.func.hotkey.user",
        "HotKeyOne StartHotKeyOne\n ?? \nEndHotKeyOne\n",
    );
    write(tmp.path(), "current.Viewer.func.hotkey.user", VIEWER_FUNC);

    let options = ConvertOptions::new(tmp.path())
        .mode(ParseMode::Strict)
        .failure_policy(FailurePolicy::Abort);
    let err = convert_directory(&options).unwrap_err();

    assert!(format!("{:#}", err).contains("Malformed line 2"));
    assert!(!tmp.path().join("user.shortcuts.viewer.json").exists());
}

#[test]
fn lenient_mode_converts_malformed_files() {
    let tmp = TempDir::new().expect("create temp dir");
    write(
        tmp.path(),
        "current.Broken.func.hotkey.user",
        "HotKeyOne StartHotKeyOne\n ?? \n Key1 KEY_B\nEndHotKeyOne\nHotKeyOne StartHotKeyOne\n",
    );

    let report = convert_directory(&ConvertOptions::new(tmp.path())).expect("batch runs");

    assert!(report.is_success());
    assert_eq!(report.total_records(), 1);
}

#[test]
fn missing_directory_is_an_error() {
    let tmp = TempDir::new().expect("create temp dir");
    let missing = tmp.path().join("nope");

    assert!(convert_directory(&ConvertOptions::new(missing)).is_err());
}

#[cfg(unix)]
#[test]
fn non_utf8_names_are_skipped() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = TempDir::new().expect("create temp dir");
    let name = OsStr::from_bytes(b"current.\xFFView.func.hotkey.user");
    fs::write(tmp.path().join(name), VIEWER_FUNC).expect("write fixture");
    write(tmp.path(), "current.Viewer.func.hotkey.user", VIEWER_FUNC);

    let report = convert_directory(&ConvertOptions::new(tmp.path())).expect("batch runs");

    assert!(report.is_success());
    assert_eq!(report.conversions.len(), 1);
    assert!(report.conversions[0]
        .input
        .ends_with("current.Viewer.func.hotkey.user"));
}
