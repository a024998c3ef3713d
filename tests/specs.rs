//! End-to-end inspection specs
//!
//! Drive the full pipeline against a stub `htar` script on disk: registry
//! lookup, argument validation, real child-process execution through
//! `SystemRunner`, output parsing, and the handoff into `MemoryStore`.

use chrono::NaiveDate;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use obsinv_core::Clock;
use obsinv_core::SystemClock;
use obsinv_hpss::{
    CommandOutput, HpssCommandHandler, HpssCommandRegistry, HpssConfig, HpssError, SystemRunner,
    CMD_INSPECT_TARBALL,
};
use obsinv_storage::{
    cmd_result_from_response, inventory_items_from_contents, InventoryStore, MemoryStore,
};

const TARBALL: &str = "/NCEPPROD/obs/2023050100.tar";

const LISTING: &str = "\
HTAR: Listing of tarball /NCEPPROD/obs/2023050100.tar, 3 entries
HTAR: -rw-r--r-- nwprod/prod 1024 2023-05-01 12:30 gdas.t00z.1bamua.tm00.bufr_d
HTAR: -rw-r--r-- nwprod/prod 2048 2023-05-01 12:45 gdas.t00z.1bamub.tm00.bufr_d
HTAR: HTAR SUCCESSFUL
";

/// Write an executable stub standing in for the htar binary.
fn stub_htar(dir: &Path, body: &str) -> String {
    let path = dir.join("htar");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "#!/bin/sh").unwrap();
    file.write_all(body.as_bytes()).unwrap();
    drop(file);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_string_lossy().to_string()
}

fn listing_stub(dir: &Path) -> String {
    stub_htar(
        dir,
        &format!("cat <<'EOF'\n{LISTING}EOF\n"),
    )
}

fn obs_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 5, 1).unwrap()
}

#[test]
fn inspect_tarball_end_to_end() {
    let temp = tempfile::tempdir().unwrap();
    let config = HpssConfig::with_program(listing_stub(temp.path()));
    let registry = HpssCommandRegistry::new(&config);

    let mut handler =
        HpssCommandHandler::new(&registry, CMD_INSPECT_TARBALL, vec![TARBALL.to_string()])
            .unwrap();
    assert!(handler.send(&SystemRunner).unwrap());

    let response = handler.raw_response().unwrap().clone();
    assert!(response.success);
    assert_eq!(response.arg0, TARBALL);
    assert!(response.latency >= 0.0);

    let CommandOutput::TarballContents(contents) = handler.parse_response(obs_day()).unwrap();
    assert_eq!(contents.parent_dir, TARBALL);
    assert_eq!(contents.expected_count, 3);
    assert_eq!(contents.inspected_files.len(), 2);
    assert_eq!(
        contents.inspected_files[0].name,
        "gdas.t00z.1bamua.tm00.bufr_d"
    );
    assert_eq!(
        contents.inspected_files[1].name,
        "gdas.t00z.1bamub.tm00.bufr_d"
    );
    assert_eq!(contents.submitted_at, response.submitted_at);

    // Handoff to the storage collaborator.
    let mut store = MemoryStore::new();
    let inserted_at = SystemClock.now_utc();
    let id = store
        .insert_cmd_result(cmd_result_from_response(&response, obs_day(), inserted_at))
        .unwrap();
    store
        .insert_obs_inventory_items(inventory_items_from_contents(&contents, id, inserted_at))
        .unwrap();

    assert_eq!(store.cmd_results().len(), 1);
    assert_eq!(store.obs_inventory().len(), 2);
    assert!(store.obs_inventory().iter().all(|i| i.cmd_result_id == id));
}

#[test]
fn nonzero_exit_surfaces_as_unsuccessful_response() {
    let temp = tempfile::tempdir().unwrap();
    let program = stub_htar(temp.path(), "echo 'no such tarball' >&2\nexit 72\n");
    let registry = HpssCommandRegistry::new(&HpssConfig::with_program(program));

    let mut handler =
        HpssCommandHandler::new(&registry, CMD_INSPECT_TARBALL, vec![TARBALL.to_string()])
            .unwrap();
    assert!(!handler.send(&SystemRunner).unwrap());

    let response = handler.raw_response().unwrap();
    assert!(!response.success);
    assert_eq!(response.return_code, 72);
    assert_eq!(response.error, "no such tarball\n");
}

#[test]
fn missing_tool_is_fatal_with_remediation_guidance() {
    let temp = tempfile::tempdir().unwrap();
    let program = temp.path().join("htar-not-installed");
    let registry =
        HpssCommandRegistry::new(&HpssConfig::with_program(program.to_string_lossy().to_string()));

    let mut handler =
        HpssCommandHandler::new(&registry, CMD_INSPECT_TARBALL, vec![TARBALL.to_string()])
            .unwrap();
    match handler.send(&SystemRunner) {
        Err(err @ HpssError::ToolNotAvailable { .. }) => {
            assert!(err.to_string().contains("module load hpss"));
        }
        other => panic!("expected ToolNotAvailable, got {other:?}"),
    }
}

#[test]
fn hostile_arguments_never_reach_the_tool() {
    let temp = tempfile::tempdir().unwrap();
    // Stub that would leave a marker file if it ever ran.
    let marker = temp.path().join("ran");
    let program = stub_htar(
        temp.path(),
        &format!("touch {}\n", marker.to_string_lossy()),
    );
    let registry = HpssCommandRegistry::new(&HpssConfig::with_program(program));

    let result = HpssCommandHandler::new(
        &registry,
        CMD_INSPECT_TARBALL,
        vec!["/obs/2023050100.tar; rm -rf /".to_string()],
    );
    assert!(matches!(
        result,
        Err(HpssError::InvalidArgumentContent { .. })
    ));
    assert!(!marker.exists());
}
