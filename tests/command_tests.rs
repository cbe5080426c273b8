use std::io::Write;
use tabstat_studio::commands::{execute_analyze, validate_args, AnalyzeArgs};
use tabstat_studio::output::read_report;
use tabstat_studio::parser::schema::{
    DatasetKind, MedicalReport, PageViewReport, ReportEnvelope, SeaLevelReport, StatisticReport,
};
use tempfile::{NamedTempFile, TempDir};

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn args_for(dataset: DatasetKind, input: &NamedTempFile, out: &TempDir) -> AnalyzeArgs {
    AnalyzeArgs {
        output_json: out.path().join("report.json"),
        ..AnalyzeArgs::new(dataset, input.path())
    }
}

#[test]
fn test_analyze_demographic() {
    let input = write_temp(
        "30, Private, 1, Bachelors, 13, Never-married, Sales, Own-child, White, Male, 0, 0, 40, India, >50K\n\
         40, Private, 1, HS-grad, 9, Never-married, Sales, Own-child, White, Male, 0, 0, 40, India, <=50K\n\
         25, Private, 1, HS-grad, 9, Never-married, Sales, Own-child, Black, Female, 0, 0, 20, Cuba, <=50K\n\
         50, Private, 1, HS-grad, 9, Never-married, Sales, Own-child, White, Female, 0, 0, 60, Cuba, <=50K\n",
    );
    let out = tempfile::tempdir().unwrap();
    let args = args_for(DatasetKind::Demographic, &input, &out);

    validate_args(&args).unwrap();
    execute_analyze(args.clone()).unwrap();

    let report: ReportEnvelope<StatisticReport> = read_report(&args.output_json).unwrap();
    assert_eq!(report.record_count, 4);
    assert_eq!(report.body.average_age_men, 35.0);
    assert_eq!(report.body.percentage_bachelors, 25.0);
    assert_eq!(report.body.min_work_hours, 20);
    assert_eq!(report.body.highest_earning_country, "India");
    assert_eq!(report.body.highest_earning_country_percentage, 50.0);
    assert_eq!(report.body.top_in_occupation, "Sales");
}

#[test]
fn test_analyze_rejects_malformed_input() {
    let input = write_temp("thirty, Private, 1, Bachelors, 13, Never-married, Sales, Own-child, White, Male, 0, 0, 40, India, >50K\n");
    let out = tempfile::tempdir().unwrap();
    let args = args_for(DatasetKind::Demographic, &input, &out);

    let err = execute_analyze(args.clone()).unwrap_err();
    assert!(format!("{:#}", err).contains("line 1"));
    assert!(!args.output_json.exists());
}

#[test]
fn test_analyze_medical() {
    let mut csv = String::from("id,age,sex,height,weight,ap_hi,ap_lo,cholesterol,gluc,smoke,alco,active,cardio\n");
    for i in 0..40 {
        csv.push_str(&format!(
            "{},{},{},{},{}.0,{},{},{},1,0,0,1,{}\n",
            i,
            15_000 + i * 100,
            1 + i % 2,
            150 + i,
            50 + i,
            110 + i,
            70,
            1 + i % 3,
            i % 2
        ));
    }
    let input = write_temp(&csv);
    let out = tempfile::tempdir().unwrap();
    let args = args_for(DatasetKind::Medical, &input, &out);

    execute_analyze(args.clone()).unwrap();

    let report: ReportEnvelope<MedicalReport> = read_report(&args.output_json).unwrap();
    assert_eq!(report.record_count, 40);
    assert_eq!(report.body.columns.len(), 14);
    assert_eq!(report.body.correlations.len(), 91);
    // Extreme heights/weights trimmed
    assert!(report.body.cleaned_count < 40);
    let total: u64 = report.body.categorical_counts.iter().map(|c| c.total).sum();
    assert_eq!(total, 40 * 6);
}

#[test]
fn test_analyze_sea_level() {
    let mut csv = String::from("Year,CSIRO Adjusted Sea Level\n");
    for year in 1990..2010 {
        csv.push_str(&format!("{},{}\n", year, (year - 1990) as f64 * 0.5));
    }
    let input = write_temp(&csv);
    let out = tempfile::tempdir().unwrap();
    let args = args_for(DatasetKind::SeaLevel, &input, &out);

    execute_analyze(args.clone()).unwrap();

    let report: ReportEnvelope<SeaLevelReport> = read_report(&args.output_json).unwrap();
    let all = report.body.all_data.unwrap();
    let recent = report.body.recent.unwrap();

    assert!((all.fit.slope - 0.5).abs() < 1e-9);
    assert!((recent.fit.slope - 0.5).abs() < 1e-9);
    assert_eq!(all.projection.first().unwrap().year, 1880);
    assert_eq!(recent.projection.first().unwrap().year, 2000);
    assert!((recent.projection.last().unwrap().level - 30.0).abs() < 1e-6);
}

#[test]
fn test_analyze_page_views() {
    let mut csv = String::from("date,value\n");
    for day in 1..=28 {
        csv.push_str(&format!("2017-02-{:02},{}\n", day, 1000 + day * 10));
    }
    for day in 1..=28 {
        csv.push_str(&format!("2018-03-{:02},{}\n", day, 2000 + day * 10));
    }
    let input = write_temp(&csv);
    let out = tempfile::tempdir().unwrap();
    let args = args_for(DatasetKind::PageViews, &input, &out);

    execute_analyze(args.clone()).unwrap();

    let report: ReportEnvelope<PageViewReport> = read_report(&args.output_json).unwrap();
    let body = report.body;

    assert!(body.daily.len() < 56);
    assert!(body.daily.windows(2).all(|w| w[0].date <= w[1].date));
    assert_eq!(body.monthly_averages.len(), 2);
    assert!(body.monthly_averages[0].months[1].is_some());
    assert!(body.monthly_averages[0].months[2].is_none());
    let months: Vec<&str> = body.monthly_boxes.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(months, vec!["Feb", "Mar"]);
}
