//! Command-line front end for the classroom record keeper.
//!
//! # Responsibility
//! - Load the demo roster into fresh stores.
//! - Print derived statistics or write CSV exports.
//!
//! Nothing persists between runs.

use clap::{Parser, Subcommand};
use classbook_core::{
    default_log_level, init_logging, seed_sample_roster, write_csv_file, AttendanceStore,
    ExportConfig, GradeStatsConfig, GradeStore, UuidIdGenerator, DEFAULT_TOP_AVERAGE_TOLERANCE,
};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "classbook", version, about = "Classroom attendance and grade records")]
struct Cli {
    /// trace|debug|info|warn|error
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    /// Averages closer than this count as tied for top student.
    #[arg(long, global = true, default_value_t = DEFAULT_TOP_AVERAGE_TOLERANCE)]
    top_tolerance: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print attendance and grade statistics.
    Summary {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Write attendance and grade CSV files.
    Export {
        /// Target directory, created when missing.
        #[arg(long)]
        out_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("classbook: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, &log_dir.to_string_lossy())?;
    }

    let mut attendance = AttendanceStore::new();
    let mut grades = GradeStore::with_config(
        UuidIdGenerator,
        GradeStatsConfig::with_tolerance(cli.top_tolerance),
    );
    seed_sample_roster(&mut attendance, &mut grades).map_err(|err| err.to_string())?;
    info!(
        "event=session_seeded module=cli attendance={} grades={}",
        attendance.len(),
        grades.len()
    );

    match cli.command {
        Command::Summary { json } => print_summary(&attendance, &grades, json),
        Command::Export { out_dir } => export(&attendance, &grades, &out_dir),
    }
}

fn print_summary(
    attendance: &AttendanceStore,
    grades: &GradeStore,
    json: bool,
) -> Result<(), String> {
    let attendance_stats = attendance.stats();
    let grade_stats = grades.stats();

    if json {
        let value = serde_json::json!({
            "attendance": attendance_stats,
            "grades": grade_stats,
        });
        let text = serde_json::to_string_pretty(&value).map_err(|err| err.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!("Attendance");
    println!("  rate        {}", attendance_stats.rate_label());
    println!("  excused     {}", attendance_stats.excused_count);
    println!("  unexcused   {}", attendance_stats.unexcused_count);
    for record in attendance.records() {
        let note = if record.note.is_empty() { "-" } else { record.note.as_str() };
        println!(
            "  {:<20} {:<12} {:<18} {}",
            record.student,
            record.date,
            record.status.label(),
            note
        );
    }

    println!("Grades");
    println!("  average     {}", grade_stats.class_average_label());
    println!("  tasks       {}", grade_stats.distinct_task_count);
    println!("  top         {}", grade_stats.top_students_label());
    for item in &grade_stats.per_student_averages {
        println!("  {:<20} {}", item.student, item.label());
    }
    Ok(())
}

fn export(attendance: &AttendanceStore, grades: &GradeStore, out_dir: &Path) -> Result<(), String> {
    let config = ExportConfig::default();
    for (file_name, contents) in [
        (&config.attendance_file_name, attendance.export_csv()),
        (&config.grades_file_name, grades.export_csv()),
    ] {
        let path = write_csv_file(out_dir, file_name, &contents).map_err(|err| err.to_string())?;
        println!("{}", path.display());
    }
    Ok(())
}
