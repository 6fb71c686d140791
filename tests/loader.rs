use cupchart::data::loader::{coerce_number, load_records, Coercion, LoadError};
use std::io::Write;

fn dataset_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/fifa-world-cup.csv")
}

#[test]
fn bundled_dataset_loads_sorted() {
    let records = load_records(dataset_path(), Coercion::Strict).unwrap();
    assert_eq!(records.len(), 21);
    assert!(records.windows(2).all(|w| w[0].year < w[1].year));
    assert_eq!(records.first().unwrap().year, 1930);
    assert_eq!(records.last().unwrap().year, 2018);
    assert_eq!(records[4].edition, "1954 FIFA World Cup Switzerland");
}

#[test]
fn unsorted_file_is_sorted_with_one_record_per_row() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "YEAR,EDITION,LOCATION,WINNER,TEAMS,MATCHES,GOALS,AVERAGE_GOALS,AVERAGE_ATTENDANCE"
    )
    .unwrap();
    writeln!(file, "2018,2018 FIFA World Cup Russia,Russia,France,32,64,169,2.6,47371").unwrap();
    writeln!(file, "1930,1930 FIFA World Cup Uruguay,Uruguay,Uruguay,13,18,70,3.9,32808").unwrap();
    writeln!(file, "1970, 1970 FIFA World Cup Mexico ,Mexico,Brazil, 16 ,32,95,3,50124").unwrap();
    file.flush().unwrap();

    let records = load_records(file.path(), Coercion::Lenient).unwrap();
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    assert_eq!(years, vec![1930, 1970, 2018]);
    assert_eq!(records[1].edition, "1970 FIFA World Cup Mexico");
    assert_eq!(records[1].teams, 16.0);
}

#[test]
fn missing_column_is_a_csv_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "YEAR,EDITION,LOCATION,WINNER").unwrap();
    writeln!(file, "1930,1930 FIFA World Cup Uruguay,Uruguay,Uruguay").unwrap();
    file.flush().unwrap();
    assert!(matches!(
        load_records(file.path(), Coercion::Lenient),
        Err(LoadError::Csv(_))
    ));
}

#[test]
fn coercion_follows_browser_rules() {
    assert_eq!(coerce_number(""), Some(0.0));
    assert_eq!(coerce_number("4.7"), Some(4.7));
    assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
    assert_eq!(coerce_number("12abc"), None);
}
