use console::style;
use itertools::{EitherOrBoth, Itertools};
use tabled::{builder::Builder, settings::Style};
use zsnap_library::snapshot::QualifiedSnapshot;

const INDENT: &str = "   ";

/// Side by side listing of both datasets, one row per index.
pub fn snapshot_table(data: &[QualifiedSnapshot], backup: &[QualifiedSnapshot]) -> String {
    let header = ["Data Dataset", "Backup Dataset"]
        .iter()
        .map(|s| style(s).green().bold().to_string())
        .collect::<Vec<String>>();

    let mut builder = Builder::default();
    builder.push_record(header);

    for row in data.iter().zip_longest(backup.iter()) {
        let record = match row {
            EitherOrBoth::Both(left, right) => [left.to_string(), right.to_string()],
            EitherOrBoth::Left(left) => [left.to_string(), String::new()],
            EitherOrBoth::Right(right) => [String::new(), right.to_string()],
        };

        builder.push_record(record);
    }

    let mut table = builder.build();
    table.with(Style::blank());

    table
        .to_string()
        .lines()
        .map(|line| format!("{}{}", INDENT, line.trim_end()))
        .join("\n")
}
