use std::io::Write;
use tabstat_studio::parser::{
    load_census, load_medical, load_page_views, load_sea_level, SalaryBracket, Sex,
};
use tabstat_studio::utils::config::CENSUS_COLUMNS;
use tabstat_studio::utils::error::LoadError;
use tempfile::NamedTempFile;

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const CENSUS: &str = "\
39, State-gov, 77516, Bachelors, 13, Never-married, Adm-clerical, Not-in-family, White, Male, 2174, 0, 40, United-States, <=50K
50, Self-emp-not-inc, 83311, Bachelors, 13, Married-civ-spouse, Exec-managerial, Husband, White, Male, 0, 0, 13, United-States, <=50K
31, Private, 45781, Masters, 14, Never-married, Prof-specialty, Not-in-family, White, Female, 14084, 0, 50, United-States, >50K
";

#[test]
fn test_load_census_file() {
    let file = write_temp(CENSUS);
    let table = load_census(file.path()).unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table[1].hours_per_week, 13);
    assert_eq!(table[2].sex, Sex::Female);
    assert_eq!(table[2].salary, SalaryBracket::Above50K);
    assert_eq!(table[2].occupation, "Prof-specialty");
}

#[test]
fn test_census_rows_have_every_column() {
    let first_row = CENSUS.lines().next().unwrap();
    assert_eq!(first_row.split(',').count(), CENSUS_COLUMNS.len());
}

#[test]
fn test_census_rejects_non_numeric_age() {
    let bad = CENSUS.replacen("50, Self-emp", "fifty, Self-emp", 1);
    let file = write_temp(&bad);

    match load_census(file.path()) {
        Err(LoadError::MalformedRow { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MalformedRow, got {:?}", other),
    }
}

#[test]
fn test_census_rejects_missing_column() {
    let bad = format!("{}41, Private\n", CENSUS);
    let file = write_temp(&bad);

    assert!(matches!(
        load_census(file.path()),
        Err(LoadError::MalformedRow { line: 4, .. })
    ));
}

#[test]
fn test_load_medical_file() {
    let file = write_temp(
        "id,age,sex,height,weight,ap_hi,ap_lo,cholesterol,gluc,smoke,alco,active,cardio\n\
         0,18393,2,168,62.0,110,80,1,1,0,0,1,0\n\
         1,20228,1,156,85.0,140,90,3,1,0,0,1,1\n",
    );
    let records = load_medical(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].cholesterol, 3);
    assert_eq!(records[1].weight, 85.0);
    assert_eq!(records[0].height, 168.0);
}

#[test]
fn test_load_sea_level_ignores_extra_columns() {
    let file = write_temp(
        "Year,CSIRO Adjusted Sea Level,Lower Error Bound,Upper Error Bound,NOAA Adjusted Sea Level\n\
         1880,0.0,-0.952755905,0.952755905,\n\
         1881,0.220472441,-0.732283464,1.173228345,\n",
    );
    let records = load_sea_level(file.path()).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].year, 1881);
    assert!((records[1].csiro_adjusted_sea_level - 0.220472441).abs() < 1e-12);
}

#[test]
fn test_load_page_views_file() {
    let file = write_temp("date,value\n2016-05-09,1201\n2016-05-10,2329\n2016-05-11,1716\n");
    let records = load_page_views(file.path()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[2].value, 1716);
}

#[test]
fn test_missing_file_is_io_error() {
    assert!(matches!(
        load_page_views("/no/such/pageviews.csv"),
        Err(LoadError::Io(_))
    ));
}
