use crate::dump::*;
use crate::parse::LineLimit;
use pretty_assertions::assert_eq;
use std::path::Path;

#[test]
fn file_names_use_limit_in_thousands() {
    let limit = LineLimit(100_000);
    assert_eq!(dump_file_name(DumpKind::Diff, limit), "log_clients_diff_100k.json");
    assert_eq!(dump_file_name(DumpKind::Mean, limit), "log_clients_mean_100k.json");
    assert_eq!(
        dump_file_name(DumpKind::Deviation, limit),
        "log_clients_deviation_100k.json"
    );
}

#[test]
fn limit_is_floored_to_whole_thousands() {
    assert_eq!(
        dump_file_name(DumpKind::Diff, LineLimit(2_500)),
        "log_clients_diff_2k.json"
    );
    assert_eq!(
        dump_file_name(DumpKind::Diff, LineLimit(999)),
        "log_clients_diff_0k.json"
    );
}

#[test]
fn unlimited_run_is_named_zero_k() {
    assert_eq!(
        dump_file_name(DumpKind::Mean, LineLimit::UNLIMITED),
        "log_clients_mean_0k.json"
    );
}

#[test]
fn dump_path_joins_directory() {
    let path = dump_path(Path::new("dumps"), DumpKind::Deviation, LineLimit(5_000));
    assert_eq!(path, Path::new("dumps/log_clients_deviation_5k.json"));
}
