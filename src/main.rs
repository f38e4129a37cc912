// Command line checker for Russian internal passport records

use chrono::{Local, NaiveDate};
use clap::Parser;
use ru_passport::{
    models::{PassportData, ValidationResult},
    utils::RecordError,
    PassportValidator,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "ru_passport_check", about = "Validate a Russian internal passport record")]
struct Args {
    /// JSON file holding the record; field flags override its values
    #[arg(long)]
    input: Option<PathBuf>,

    /// Date the record is checked against (YYYY-MM-DD), defaults to today
    #[arg(long)]
    check_date: Option<NaiveDate>,

    #[arg(long)]
    surname: Option<String>,
    #[arg(long)]
    given_name: Option<String>,
    #[arg(long)]
    patronymic: Option<String>,
    #[arg(long)]
    series: Option<String>,
    #[arg(long)]
    number: Option<String>,
    #[arg(long)]
    issuer_code: Option<String>,
    #[arg(long)]
    birth_date: Option<NaiveDate>,
    #[arg(long)]
    issue_date: Option<NaiveDate>,
    #[arg(long)]
    place_of_birth: Option<String>,
    #[arg(long)]
    issued_by: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    fn load_record(&self) -> Result<PassportData, RecordError> {
        let data = match &self.input {
            Some(path) => PassportData::from_json_reader(BufReader::new(File::open(path)?))?,
            None => PassportData::default(),
        };
        Ok(self.apply_overrides(data))
    }

    // Flags given on the command line replace the loaded values
    fn apply_overrides(&self, mut data: PassportData) -> PassportData {
        let overrides = [
            (&self.surname, &mut data.surname),
            (&self.given_name, &mut data.given_name),
            (&self.patronymic, &mut data.patronymic),
            (&self.series, &mut data.series),
            (&self.number, &mut data.number),
            (&self.issuer_code, &mut data.issuer_code),
            (&self.place_of_birth, &mut data.place_of_birth),
            (&self.issued_by, &mut data.issued_by),
        ];
        for (flag, field) in overrides {
            if let Some(value) = flag {
                *field = value.clone();
            }
        }
        if self.birth_date.is_some() {
            data.birth_date = self.birth_date;
        }
        if self.issue_date.is_some() {
            data.issue_date = self.issue_date;
        }
        data
    }
}

const EXIT_VALID: u8 = 0;
const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn exit_status(result: &ValidationResult) -> u8 {
    if result.is_valid {
        EXIT_VALID
    } else {
        EXIT_INVALID
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|date| date.to_string()).unwrap_or_default()
}

#[derive(serde::Serialize)]
struct Report<'a> {
    record: &'a PassportData,
    result: &'a ValidationResult,
}

fn print_report(data: &PassportData, result: &ValidationResult) {
    println!("\n===============================================");
    println!("      PASSPORT VALIDATION REPORT");
    println!("===============================================\n");

    println!("PASSPORT INFORMATION:");
    println!("  Surname: {}", data.surname);
    println!("  Given Name: {}", data.given_name);
    println!("  Patronymic: {}", data.patronymic);
    println!("  Series / Number: {} {}", data.series, data.number);
    println!("  Issuer Code: {}", data.issuer_code);
    println!("  Date of Birth: {}", format_date(data.birth_date));
    println!("  Date of Issue: {}", format_date(data.issue_date));
    println!("  Place of Birth: {}", data.place_of_birth);
    println!("  Issued By: {}", data.issued_by);
    println!("  Checked On: {}", result.check_date);

    if !result.issues.is_empty() {
        println!("\nISSUES FOUND:");
        for issue in &result.issues {
            println!("  - [{}] {} ({})", issue.field, issue.message, issue.error.code());
        }
    }

    println!(
        "\nPassport validation result: {}",
        if result.is_valid { "VALID" } else { "INVALID" }
    );
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let check_date = args.check_date.unwrap_or_else(|| Local::now().date_naive());

    let data = match args.load_record() {
        Ok(data) => data,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let validator = PassportValidator::new(check_date);
    let data = validator.normalize(&data);
    let result = validator.validate(&data);

    if args.json {
        let report = Report {
            record: &data,
            result: &result,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: {}", err);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        print_report(&data, &result);
    }

    ExitCode::from(exit_status(&result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_file(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_record_from_flags_only() {
        let args = Args::try_parse_from([
            "ru_passport_check",
            "--surname",
            "Иванов",
            "--series",
            "4617",
            "--birth-date",
            "1990-05-14",
        ])
        .unwrap();

        let data = args.load_record().unwrap();
        assert_eq!(data.surname, "Иванов");
        assert_eq!(data.series, "4617");
        assert_eq!(data.birth_date, Some(date(1990, 5, 14)));
        assert_eq!(data.issue_date, None);
        assert!(data.given_name.is_empty());
    }

    #[test]
    fn test_flags_override_json_record() {
        let file = record_file(
            r#"{"surname": "Петров", "given_name": "Пётр", "number": "657482",
                "birth_date": "1990-05-14", "issue_date": "2010-06-01"}"#,
        );
        let path = file.path().to_str().unwrap();
        let args = Args::try_parse_from([
            "ru_passport_check",
            "--input",
            path,
            "--surname",
            "Иванов",
            "--issue-date",
            "2017-06-01",
        ])
        .unwrap();

        let data = args.load_record().unwrap();
        assert_eq!(data.surname, "Иванов");
        assert_eq!(data.given_name, "Пётр");
        assert_eq!(data.number, "657482");
        assert_eq!(data.issue_date, Some(date(2017, 6, 1)));
        // not given on the command line, keeps the JSON value
        assert_eq!(data.birth_date, Some(date(1990, 5, 14)));
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");
        let args =
            Args::try_parse_from(["ru_passport_check", "--input", path.to_str().unwrap()]).unwrap();

        assert!(matches!(args.load_record(), Err(RecordError::Io(_))));
    }

    #[test]
    fn test_malformed_input_file() {
        let file = record_file("{\"surname\": ");
        let args = Args::try_parse_from([
            "ru_passport_check",
            "--input",
            file.path().to_str().unwrap(),
        ])
        .unwrap();

        assert!(matches!(args.load_record(), Err(RecordError::Json(_))));
    }

    #[test]
    fn test_bad_date_flag_rejected() {
        assert!(Args::try_parse_from(["ru_passport_check", "--birth-date", "14.05.1990"]).is_err());
    }

    #[test]
    fn test_exit_status() {
        let validator = PassportValidator::new(date(2024, 2, 27));
        let valid = PassportData {
            surname: "Иванов".to_string(),
            given_name: "Иван".to_string(),
            series: "4617".to_string(),
            number: "657482".to_string(),
            issuer_code: "500-159".to_string(),
            birth_date: Some(date(1990, 5, 14)),
            issue_date: Some(date(2017, 6, 1)),
            ..PassportData::default()
        };
        assert_eq!(exit_status(&validator.validate(&valid)), EXIT_VALID);

        let invalid = PassportData {
            number: "65748".to_string(),
            ..valid
        };
        assert_eq!(exit_status(&validator.validate(&invalid)), EXIT_INVALID);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(Some(date(1990, 5, 14))), "1990-05-14");
        assert_eq!(format_date(None), "");
    }
}
