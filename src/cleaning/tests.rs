#![expect(clippy::unwrap_used)]
use super::*;
use crate::error::CleanError;
use anyhow::Result;
use polars::prelude::*;

fn strings(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    df.column(column)
        .unwrap()
        .as_materialized_series()
        .str()
        .unwrap()
        .into_iter()
        .map(|v| v.map(str::to_owned))
        .collect()
}

fn owned(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|v| v.map(str::to_owned)).collect()
}

#[test]
fn test_column_names_normalised() -> Result<()> {
    let df = df!(
        "ST" => &["AZ"],
        "Customer Id" => &["c1"],
        "GENDER" => &["F"]
    )?;

    let cleaned = clean_column_names(&df)?;
    let names: Vec<&str> = cleaned
        .get_column_names()
        .into_iter()
        .map(PlSmallStr::as_str)
        .collect();
    assert_eq!(names, vec!["state", "customer_id", "gender"]);

    // Caller's table is untouched
    assert!(df.column("ST").is_ok());
    Ok(())
}

#[test]
fn test_column_names_without_match_unchanged() -> Result<()> {
    let df = df!("income" => &[1, 2])?;
    let cleaned = clean_column_names(&df)?;
    assert!(cleaned.equals(&df));
    Ok(())
}

#[test]
fn test_gender_domain_and_idempotence() -> Result<()> {
    let df = df!(
        "gender" => &[Some("female"), Some("Male"), Some("m"), None, Some(""), Some("x"), Some("F")]
    )?;

    let once = clean_gender(&df, None)?;
    assert_eq!(
        strings(&once, "gender"),
        owned(&[Some("F"), Some("M"), Some("M"), Some("D"), Some("D"), Some("D"), Some("F")])
    );
    assert_eq!(once.height(), df.height());

    let twice = clean_gender(&once, None)?;
    assert!(twice.equals(&once));
    Ok(())
}

#[test]
fn test_gender_all_null_column() -> Result<()> {
    let s = Series::new_null("gender".into(), 2);
    let df = DataFrame::new(vec![Column::from(s)])?;

    let cleaned = clean_gender(&df, None)?;
    assert_eq!(strings(&cleaned, "gender"), owned(&[Some("D"), Some("D")]));
    Ok(())
}

#[test]
fn test_gender_custom_column() -> Result<()> {
    let df = df!(
        "sex" => &["f", "?"],
        "gender" => &["keep", "keep"]
    )?;

    let cleaned = clean_gender(&df, Some("sex"))?;
    assert_eq!(strings(&cleaned, "sex"), owned(&[Some("F"), Some("D")]));
    assert_eq!(strings(&cleaned, "gender"), owned(&[Some("keep"), Some("keep")]));
    Ok(())
}

#[test]
fn test_state_mapping() -> Result<()> {
    let df = df!(
        "state" => &[Some("AZ"), Some("Cali"), Some("WA"), Some("Oregon"), None, Some("az")]
    )?;

    let once = clean_state(&df, None)?;
    assert_eq!(
        strings(&once, "state"),
        owned(&[
            Some("Arizona"),
            Some("California"),
            Some("Washington"),
            Some("Oregon"),
            None,
            Some("az"),
        ])
    );

    let twice = clean_state(&once, None)?;
    assert!(twice.equals_missing(&once));
    Ok(())
}

#[test]
fn test_education_mapping() -> Result<()> {
    let df = df!("education" => &["Bachelors", "Bachelor", "Master", "bachelors"])?;

    let once = clean_education(&df, None)?;
    assert_eq!(
        strings(&once, "education"),
        owned(&[Some("Bachelor"), Some("Bachelor"), Some("Master"), Some("bachelors")])
    );
    assert!(clean_education(&once, None)?.equals(&once));
    Ok(())
}

#[test]
fn test_vehicle_class_mapping() -> Result<()> {
    let df = df!(
        "vehicle_class" => &["Sports Car", "Luxury SUV", "Luxury Car", "SUV", "Four-Door Car"]
    )?;

    let once = clean_vehicle_class(&df, None)?;
    assert_eq!(
        strings(&once, "vehicle_class"),
        owned(&[
            Some("Luxury"),
            Some("Luxury"),
            Some("Luxury"),
            Some("SUV"),
            Some("Four-Door Car"),
        ])
    );
    assert!(clean_vehicle_class(&once, None)?.equals(&once));
    Ok(())
}

#[test]
fn test_mapping_on_numeric_column_is_identity() -> Result<()> {
    let df = df!("state" => &[1, 2, 3])?;
    let cleaned = clean_state(&df, None)?;
    assert!(cleaned.equals(&df));
    Ok(())
}

#[test]
fn test_missing_column_reported() -> Result<()> {
    let df = df!("name" => &["Ana"])?;

    let steps: [fn(&DataFrame, Option<&str>) -> crate::error::Result<DataFrame>; 8] = [
        clean_gender,
        clean_state,
        clean_education,
        clean_vehicle_class,
        clean_lifetime_value,
        split_keep_middle,
        fill_with_mean,
        |df, _| numeric_to_int(df),
    ];

    for step in steps {
        let err = step(&df, None).unwrap_err();
        assert!(
            matches!(err, CleanError::ColumnNotFound(_)),
            "expected ColumnNotFound, got {err}"
        );
    }

    let err = clean_state(&df, Some("region")).unwrap_err();
    assert!(matches!(err, CleanError::ColumnNotFound(ref name) if name == "region"));
    Ok(())
}

#[test]
fn test_lifetime_value_strips_percent() -> Result<()> {
    let df = df!(
        "customer_lifetime_value" => &[Some("15.5%"), None, Some("1000"), Some("%12%")]
    )?;

    let cleaned = clean_lifetime_value(&df, None)?;
    assert_eq!(
        strings(&cleaned, "customer_lifetime_value"),
        owned(&[Some("15.5"), None, Some("1000"), Some("12")])
    );
    assert_eq!(
        cleaned.column("customer_lifetime_value")?.dtype(),
        &DataType::String
    );
    Ok(())
}

#[test]
fn test_lifetime_value_numeric_column_untouched() -> Result<()> {
    let df = df!("customer_lifetime_value" => &[1.5, 2.5])?;
    let cleaned = clean_lifetime_value(&df, None)?;
    assert!(cleaned.equals(&df));
    Ok(())
}

#[test]
fn test_split_keep_middle() -> Result<()> {
    let df = df!(
        "number_of_open_complaints" => &[Some("1/5/00"), Some("3/10/05"), Some("7"), None, Some("1/0")]
    )?;

    let cleaned = split_keep_middle(&df, None)?;
    assert_eq!(
        strings(&cleaned, "number_of_open_complaints"),
        owned(&[Some("5"), Some("10"), None, None, Some("0")])
    );
    assert_eq!(cleaned.height(), 5);
    Ok(())
}

#[test]
fn test_split_keep_middle_rejects_numbers() -> Result<()> {
    let df = df!("number_of_open_complaints" => &[1, 2])?;
    let err = split_keep_middle(&df, None).unwrap_err();
    assert!(matches!(err, CleanError::Conversion { row: None, .. }));
    Ok(())
}

#[test]
fn test_drop_null_rows() -> Result<()> {
    let df = df!(
        "a" => &[Some("x"), None, None, Some("y")],
        "b" => &[Some(1), None, Some(2), None]
    )?;

    let cleaned = drop_null_rows(&df)?;
    assert_eq!(cleaned.height(), 3);
    assert_eq!(strings(&cleaned, "a"), owned(&[Some("x"), None, Some("y")]));

    let b = cleaned.column("b")?.as_materialized_series().i32()?.clone();
    assert_eq!(b.get(1), Some(2));
    Ok(())
}

#[test]
fn test_fill_with_mean() -> Result<()> {
    let df = df!(
        "customer_lifetime_value" => &[Some("10"), None, Some("20"), Some("30"), None]
    )?;

    let filled = fill_with_mean(&df, None)?;
    let values = filled
        .column("customer_lifetime_value")?
        .as_materialized_series()
        .f64()?
        .clone();

    assert_eq!(values.null_count(), 0);
    assert_eq!(values.get(0), Some(10.0));
    assert_eq!(values.get(1), Some(20.0));
    assert_eq!(values.get(2), Some(20.0));
    assert_eq!(values.get(3), Some(30.0));
    assert_eq!(values.get(4), Some(20.0));
    Ok(())
}

#[test]
fn test_fill_with_mean_numeric_input() -> Result<()> {
    let df = df!("income" => &[Some(1_i64), Some(2), None])?;
    let filled = fill_with_mean(&df, Some("income"))?;
    let values = filled.column("income")?.as_materialized_series().f64()?.clone();
    assert_eq!(values.get(2), Some(1.5));
    Ok(())
}

#[test]
fn test_fill_with_mean_rejects_text() -> Result<()> {
    let df = df!("customer_lifetime_value" => &[Some("10"), Some("12%"), None])?;

    let err = fill_with_mean(&df, None).unwrap_err();
    match err {
        CleanError::Conversion { row, value, .. } => {
            assert_eq!(row, Some(1));
            assert_eq!(value, "12%");
        }
        other => panic!("expected Conversion, got {other}"),
    }
    Ok(())
}

#[test]
fn test_fill_with_mean_empty_column() -> Result<()> {
    let df = df!("customer_lifetime_value" => &[None::<&str>, None])?;
    let err = fill_with_mean(&df, None).unwrap_err();
    assert!(matches!(err, CleanError::EmptyColumn(_)));
    Ok(())
}

#[test]
fn test_fill_with_mean_skips_nan() -> Result<()> {
    let df = df!("customer_lifetime_value" => &[Some(f64::NAN), None, Some(10.0), Some(20.0)])?;

    let filled = fill_with_mean(&df, None)?;
    let values = filled
        .column("customer_lifetime_value")?
        .as_materialized_series()
        .f64()?
        .clone();

    assert_eq!(values.null_count(), 0);
    assert_eq!(values.get(0), Some(15.0));
    assert_eq!(values.get(1), Some(15.0));
    assert_eq!(values.get(2), Some(10.0));
    Ok(())
}

#[test]
fn test_fill_with_mean_all_nan_column() -> Result<()> {
    let df = df!("customer_lifetime_value" => &[Some(f64::NAN), None])?;
    let err = fill_with_mean(&df, None).unwrap_err();
    assert!(matches!(err, CleanError::EmptyColumn(ref c) if c == "customer_lifetime_value"));
    Ok(())
}

fn numeric_frame(complaints: &[Option<&str>]) -> Result<DataFrame> {
    Ok(df!(
        "customer_lifetime_value" => &[Some(100.9), Some(200.1)],
        "income" => &[Some(5000_i64), Some(0)],
        "monthly_premium_auto" => &[Some("61.7"), Some("90")],
        "number_of_open_complaints" => complaints,
        "total_claim_amount" => &[Some(-3.7), Some(12.0)],
        "gender" => &["F", "M"]
    )?)
}

#[test]
fn test_numeric_to_int() -> Result<()> {
    let df = numeric_frame(&[Some("0"), Some("2")])?;
    let cleaned = numeric_to_int(&df)?;

    for column in NUMERIC_COLUMNS {
        assert_eq!(cleaned.column(column)?.dtype(), &DataType::Int64, "{column}");
    }

    let clv = cleaned
        .column("customer_lifetime_value")?
        .as_materialized_series()
        .i64()?
        .clone();
    assert_eq!(clv.get(0), Some(100));
    assert_eq!(clv.get(1), Some(200));

    let premium = cleaned
        .column("monthly_premium_auto")?
        .as_materialized_series()
        .i64()?
        .clone();
    assert_eq!(premium.get(0), Some(61));

    let claims = cleaned
        .column("total_claim_amount")?
        .as_materialized_series()
        .i64()?
        .clone();
    assert_eq!(claims.get(0), Some(-3));

    // Other columns are left alone
    assert_eq!(cleaned.column("gender")?.dtype(), &DataType::String);
    Ok(())
}

#[test]
fn test_numeric_to_int_rejects_nulls() -> Result<()> {
    let df = numeric_frame(&[Some("1"), None])?;
    let err = numeric_to_int(&df).unwrap_err();
    match err {
        CleanError::Conversion { column, row, .. } => {
            assert_eq!(column, "number_of_open_complaints");
            assert_eq!(row, Some(1));
        }
        other => panic!("expected Conversion, got {other}"),
    }
    Ok(())
}

#[test]
fn test_numeric_to_int_rejects_out_of_range() -> Result<()> {
    let mut df = numeric_frame(&[Some("0"), Some("2")])?;
    df.replace(
        "customer_lifetime_value",
        Series::new("customer_lifetime_value".into(), &[1e30, 5.0]),
    )?;

    let err = numeric_to_int(&df).unwrap_err();
    match err {
        CleanError::Conversion { column, row, target, .. } => {
            assert_eq!(column, "customer_lifetime_value");
            assert_eq!(row, Some(0));
            assert_eq!(target, "i64");
        }
        other => panic!("expected Conversion, got {other}"),
    }
    Ok(())
}

#[test]
fn test_column_names_with_pattern_characters() -> Result<()> {
    let df = df!(
        "*" => &[1, 2],
        "^Total Claim$" => &[3, 4],
        "ST" => &[5, 6]
    )?;

    let cleaned = clean_column_names(&df)?;
    let names: Vec<&str> = cleaned
        .get_column_names()
        .into_iter()
        .map(PlSmallStr::as_str)
        .collect();
    assert_eq!(names, vec!["*", "^total_claim$", "state"]);
    assert_eq!(cleaned.height(), 2);

    let dropped = drop_null_rows(&df)?;
    assert_eq!(dropped.width(), 3);
    Ok(())
}

#[test]
fn test_steps_do_not_mutate_input() -> Result<()> {
    let df = df!(
        "state" => &["AZ", "WA"],
        "gender" => &["female", "male"]
    )?;
    let snapshot = df.clone();

    let _cleaned = clean_gender(&clean_state(&df, None)?, None)?;
    assert!(df.equals(&snapshot));
    assert_eq!(strings(&df, "state"), owned(&[Some("AZ"), Some("WA")]));
    Ok(())
}

#[test]
fn test_end_to_end_categorical_example() -> Result<()> {
    let df = df!(
        "ST" => &["AZ", "Cali"],
        "GENDER" => &[Some("female"), None],
        "Education" => &["Bachelors", "Bachelor"]
    )?;

    let df = clean_column_names(&df)?;
    let df = clean_gender(&df, None)?;
    let df = clean_state(&df, None)?;
    let df = clean_education(&df, None)?;

    let names: Vec<&str> = df
        .get_column_names()
        .into_iter()
        .map(PlSmallStr::as_str)
        .collect();
    assert_eq!(names, vec!["state", "gender", "education"]);
    assert_eq!(
        strings(&df, "state"),
        owned(&[Some("Arizona"), Some("California")])
    );
    // The first character of "female" is 'f', which is kept as F; the null becomes D.
    assert_eq!(strings(&df, "gender"), owned(&[Some("F"), Some("D")]));
    assert_eq!(
        strings(&df, "education"),
        owned(&[Some("Bachelor"), Some("Bachelor")])
    );
    Ok(())
}
