// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;
use obsinv_core::HpssFileMeta;

fn sample_response() -> HpssCommandRawResponse {
    HpssCommandRawResponse {
        command: "htar -tvf /NCEPPROD/obs/2023050100.tar".to_string(),
        return_code: 0,
        error: String::new(),
        output: "listing text".to_string(),
        success: true,
        arg0: "/NCEPPROD/obs/2023050100.tar".to_string(),
        submitted_at: Utc.with_ymd_and_hms(2023, 5, 1, 6, 0, 0).unwrap(),
        latency: 1.25,
    }
}

fn sample_contents() -> HpssTarballContents {
    HpssTarballContents {
        parent_dir: "/NCEPPROD/obs/2023050100.tar".to_string(),
        expected_count: 2,
        inspected_files: vec![
            HpssFileMeta {
                name: "gdas.t00z.1bamua.tm00.bufr_d".to_string(),
                permissions: "-rw-r--r--".to_string(),
                last_modified: Utc.with_ymd_and_hms(2023, 5, 1, 12, 30, 0).unwrap(),
                size: 1024,
            },
            HpssFileMeta {
                name: "gdas.t00z.1bamub.tm00.bufr_d".to_string(),
                permissions: "-rw-r--r--".to_string(),
                last_modified: Utc.with_ymd_and_hms(2023, 5, 1, 12, 45, 0).unwrap(),
                size: 2048,
            },
        ],
        observation_day: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        submitted_at: Utc.with_ymd_and_hms(2023, 5, 1, 6, 0, 0).unwrap(),
        latency: 1.25,
    }
}

#[test]
fn cmd_result_copies_response_fields() {
    let response = sample_response();
    let obs_day = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
    let inserted_at = Utc.with_ymd_and_hms(2023, 5, 1, 6, 0, 5).unwrap();

    let record = cmd_result_from_response(&response, obs_day, inserted_at);

    assert_eq!(record.command, response.command);
    assert_eq!(record.arg0, response.arg0);
    assert_eq!(record.raw_output, "listing text");
    assert_eq!(record.raw_error, "");
    assert_eq!(record.error_code, 0);
    assert_eq!(record.obs_day, obs_day);
    assert_eq!(record.submitted_at, response.submitted_at);
    assert_eq!(record.latency, 1.25);
    assert_eq!(record.inserted_at, inserted_at);
}

#[test]
fn inventory_items_map_each_file_in_listing_order() {
    let contents = sample_contents();
    let inserted_at = Utc.with_ymd_and_hms(2023, 5, 1, 6, 0, 5).unwrap();

    let items = inventory_items_from_contents(&contents, 7, inserted_at);

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].cmd_result_id, 7);
    assert_eq!(items[0].filename, "gdas.t00z.1bamua.tm00.bufr_d");
    assert_eq!(items[0].parent_dir, contents.parent_dir);
    assert_eq!(items[0].file_size, 1024);
    assert_eq!(items[0].permissions, "-rw-r--r--");
    assert_eq!(items[0].obs_day, contents.observation_day);
    assert_eq!(items[0].inserted_at, inserted_at);
    assert_eq!(items[1].filename, "gdas.t00z.1bamub.tm00.bufr_d");
    assert_eq!(items[1].file_size, 2048);
}

#[test]
fn empty_contents_yield_no_items() {
    let mut contents = sample_contents();
    contents.inspected_files.clear();
    let inserted_at = Utc.with_ymd_and_hms(2023, 5, 1, 6, 0, 5).unwrap();
    assert!(inventory_items_from_contents(&contents, 1, inserted_at).is_empty());
}
