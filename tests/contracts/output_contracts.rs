use filecat::tooling::cli::Commands;
use filecat::views::{GroupKey, SortKey};

use crate::contracts::support::{context_with, sample_context, scenario_context};

fn json(output: &str) -> serde_json::Value {
    serde_json::from_str(output).unwrap()
}

#[test]
fn list_json_contract_has_required_fields() {
    let mut ctx = sample_context();
    let parsed = json(
        &ctx.execute(&Commands::List {
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(parsed.get("total").and_then(|v| v.as_u64()), Some(8));
    let records = parsed
        .get("records")
        .and_then(|v| v.as_array())
        .expect("records array should exist");
    assert_eq!(records.len(), 8);
    let first = &records[0];
    assert_eq!(first.get("name").and_then(|v| v.as_str()), Some("Document1"));
    assert_eq!(first.get("extension").and_then(|v| v.as_str()), Some("pdf"));
    assert_eq!(first.get("size_kb").and_then(|v| v.as_u64()), Some(2048));
    assert_eq!(first.get("path").and_then(|v| v.as_str()), Some("/documents/"));
    assert!(first.get("created").is_none());
}

#[test]
fn sort_json_contract_orders_records() {
    let mut ctx = scenario_context();
    let parsed = json(
        &ctx.execute(&Commands::Sort {
            by: SortKey::Size,
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(parsed.get("key").and_then(|v| v.as_str()), Some("size"));
    let names: Vec<&str> = parsed["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}

#[test]
fn group_json_contract_lists_groups_in_key_order() {
    let mut ctx = scenario_context();
    let parsed = json(
        &ctx.execute(&Commands::Group {
            by: GroupKey::Extension,
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(parsed.get("key").and_then(|v| v.as_str()), Some("extension"));
    let groups = parsed["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["key"], "pdf");
    assert_eq!(groups[0]["count"], 1);
    assert_eq!(groups[1]["key"], "txt");
    let txt: Vec<&str> = groups[1]["records"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(txt, vec!["A", "B"]);
}

#[test]
fn find_json_contract_reports_hit_and_miss() {
    let mut ctx = scenario_context();
    let hit = json(
        &ctx.execute(&Commands::Find {
            name: "B".to_string(),
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(hit["found"], true);
    assert_eq!(hit["record"]["path"], "/y");

    let miss = json(
        &ctx.execute(&Commands::Find {
            name: "Z".to_string(),
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(miss["found"], false);
    assert!(miss.get("record").is_none());
}

#[test]
fn stats_json_contract_has_required_fields() {
    let mut ctx = context_with(&[("s", "x", 10, "/"), ("m", "x", 20, "/"), ("l", "x", 30, "/")]);
    let parsed = json(
        &ctx.execute(&Commands::Stats {
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(parsed["empty"], false);
    let stats = &parsed["statistics"];
    assert_eq!(stats["count"], 3);
    assert_eq!(stats["total_size"], 60);
    assert_eq!(stats["average_size"], 20);
    assert_eq!(stats["largest"]["name"], "l");
    assert_eq!(stats["smallest"]["name"], "s");
}

#[test]
fn stats_json_contract_on_empty_catalog() {
    let mut ctx = context_with(&[]);
    let parsed = json(
        &ctx.execute(&Commands::Stats {
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(parsed["empty"], true);
    assert!(parsed.get("statistics").is_none());
}

#[test]
fn delete_json_contract_reports_remaining() {
    let mut ctx = scenario_context();
    let parsed = json(
        &ctx.execute(&Commands::Delete {
            name: "A".to_string(),
            format: "json".to_string(),
        })
        .unwrap(),
    );
    assert_eq!(parsed["deleted"], true);
    assert_eq!(parsed["remaining"], 2);
    assert_eq!(parsed["record"]["name"], "A");
}

#[test]
fn text_outputs_are_human_readable() {
    let mut ctx = sample_context();
    let list = ctx
        .execute(&Commands::List {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(list.contains("Total files: 8"));
    assert!(list.contains("Document1.pdf"));

    let stats = ctx
        .execute(&Commands::Stats {
            format: "text".to_string(),
        })
        .unwrap();
    assert!(stats.contains("15584 KB"));
    assert!(stats.contains("1948 KB"));
    assert!(stats.contains("Video1.mp4 (5120 KB)"));
    assert!(stats.contains("Code2.py (96 KB)"));
}

#[test]
fn unknown_format_is_rejected() {
    let mut ctx = sample_context();
    let result = ctx.execute(&Commands::List {
        format: "xml".to_string(),
    });
    assert!(result.is_err());
}
