use clap::{CommandFactory, Parser};
use filecat::tooling::cli::{Cli, Commands};
use filecat::views::{GroupKey, SortKey};

use crate::contracts::support::{context_from_args, names};

#[test]
fn parse_valid_command_matrix() {
    let cases: Vec<Vec<&str>> = vec![
        vec!["filecat"],
        vec!["filecat", "menu"],
        vec!["filecat", "list", "--format", "json"],
        vec!["filecat", "sort", "--by", "name"],
        vec!["filecat", "sort", "--by", "path", "--format", "json"],
        vec!["filecat", "group"],
        vec!["filecat", "group", "--by", "path"],
        vec!["filecat", "find", "Document1"],
        vec!["filecat", "stats"],
        vec!["filecat", "delete", "Code1"],
        vec!["filecat", "config"],
        vec!["filecat", "--no-samples", "--add", "a,txt,1,/", "list"],
        vec!["filecat", "list", "--log-level", "debug", "--log-output", "stdout"],
    ];

    for args in cases {
        let parsed = Cli::try_parse_from(args.clone());
        assert!(parsed.is_ok(), "expected valid parse for args: {args:?}");
    }
}

#[test]
fn parse_rejects_invalid_values() {
    assert!(Cli::try_parse_from(["filecat", "sort", "--by", "date"]).is_err());
    assert!(Cli::try_parse_from(["filecat", "group", "--by", "size"]).is_err());
    assert!(Cli::try_parse_from(["filecat", "find"]).is_err());
    assert!(Cli::try_parse_from(["filecat", "--add", "a,txt,big,/"]).is_err());
    assert!(Cli::try_parse_from(["filecat", "--add", "a,txt"]).is_err());
    assert!(Cli::try_parse_from(["filecat", "shuffle"]).is_err());
}

#[test]
fn parse_defaults() {
    let cli = Cli::try_parse_from(["filecat", "sort"]).unwrap();
    match cli.command_or_default() {
        Commands::Sort { by, format } => {
            assert_eq!(by, SortKey::Size);
            assert_eq!(format, "text");
        }
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["filecat", "group"]).unwrap();
    assert!(matches!(
        cli.command_or_default(),
        Commands::Group {
            by: GroupKey::Extension,
            ..
        }
    ));
}

#[test]
fn repeated_add_flags_keep_order() {
    let cli = Cli::try_parse_from([
        "filecat",
        "--add",
        "first,txt,1,/a",
        "--add",
        "second,md,2,/b",
    ])
    .unwrap();
    let names: Vec<_> = cli.add.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn help_lists_every_subcommand() {
    let help = Cli::command().render_long_help().to_string();
    for name in ["menu", "list", "sort", "group", "find", "stats", "delete", "config"] {
        assert!(help.contains(name), "help should mention {name}");
    }
}

#[test]
fn catalog_flags_shape_the_seeded_store() {
    let (_, ctx) = context_from_args(&["filecat", "--no-samples", "--add", "a,txt,1,/", "list"]);
    assert_eq!(names(ctx.store().list()), vec!["a"]);

    let (cli, ctx) = context_from_args(&["filecat", "find", "Video1"]);
    assert!(matches!(cli.command_or_default(), Commands::Find { .. }));
    assert_eq!(ctx.store().len(), 8);
}
