//! CSV catalog loading and schedule export.
//!
//! # Catalog files
//!
//! | File | Columns |
//! |------|---------|
//! | `groups.csv` | `name`, `num_students` |
//! | `teachers.csv` | `name`, `courses` (comma-delimited course names) |
//! | `courses.csv` | `name`, `hours`, `groups` (comma-delimited group names) |
//! | `rooms.csv` | `name`, `capacity` |
//!
//! Every file starts with a header row. A missing file fails with
//! [`TimetableError::CatalogFile`]; a missing column or a non-numeric
//! count fails with [`TimetableError::Csv`].
//!
//! # Output
//!
//! `day,slot,room,group,course,teacher`, one row per entry, in schedule order.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Result, TimetableError};
use crate::models::{Catalog, Course, Group, Room, Schedule, Teacher};

pub const GROUPS_FILE: &str = "groups.csv";
pub const TEACHERS_FILE: &str = "teachers.csv";
pub const COURSES_FILE: &str = "courses.csv";
pub const ROOMS_FILE: &str = "rooms.csv";

#[derive(Debug, Deserialize)]
struct GroupRecord {
    name: String,
    num_students: u32,
}

#[derive(Debug, Deserialize)]
struct TeacherRecord {
    name: String,
    courses: String,
}

#[derive(Debug, Deserialize)]
struct CourseRecord {
    name: String,
    hours: u32,
    groups: String,
}

#[derive(Debug, Deserialize)]
struct RoomRecord {
    name: String,
    capacity: u32,
}

fn split_list(field: &str) -> Vec<String> {
    field
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn csv_error(file: &str) -> impl FnOnce(csv::Error) -> TimetableError + '_ {
    move |source| TimetableError::Csv {
        file: file.to_string(),
        source,
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::All);
    builder
}

fn read_records<T, R>(reader: R, file: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = reader_builder().from_reader(reader);
    let mut records = vec![];
    for record in reader.deserialize() {
        records.push(record.map_err(csv_error(file))?);
    }
    Ok(records)
}

/// Reads groups from CSV.
pub fn read_groups<R: Read>(reader: R) -> Result<Vec<Group>> {
    Ok(read_records::<GroupRecord, _>(reader, GROUPS_FILE)?
        .into_iter()
        .map(|r| Group::new(r.name, r.num_students))
        .collect())
}

/// Reads teachers from CSV.
pub fn read_teachers<R: Read>(reader: R) -> Result<Vec<Teacher>> {
    Ok(read_records::<TeacherRecord, _>(reader, TEACHERS_FILE)?
        .into_iter()
        .map(|r| Teacher {
            name: r.name,
            courses: split_list(&r.courses),
        })
        .collect())
}

/// Reads courses from CSV.
pub fn read_courses<R: Read>(reader: R) -> Result<Vec<Course>> {
    Ok(read_records::<CourseRecord, _>(reader, COURSES_FILE)?
        .into_iter()
        .map(|r| Course {
            name: r.name,
            hours: r.hours,
            groups: split_list(&r.groups),
        })
        .collect())
}

/// Reads rooms from CSV.
pub fn read_rooms<R: Read>(reader: R) -> Result<Vec<Room>> {
    Ok(read_records::<RoomRecord, _>(reader, ROOMS_FILE)?
        .into_iter()
        .map(|r| Room::new(r.name, r.capacity))
        .collect())
}

fn open(dir: &Path, file: &'static str) -> Result<File> {
    File::open(dir.join(file)).map_err(|source| TimetableError::CatalogFile {
        file: file.to_string(),
        source,
    })
}

/// Loads the four catalog files from `dir`.
pub fn load_catalog_dir(dir: impl AsRef<Path>) -> Result<Catalog> {
    let dir = dir.as_ref();
    Ok(Catalog::new(
        read_groups(open(dir, GROUPS_FILE)?)?,
        read_teachers(open(dir, TEACHERS_FILE)?)?,
        read_courses(open(dir, COURSES_FILE)?)?,
        read_rooms(open(dir, ROOMS_FILE)?)?,
    ))
}

/// Writes `schedule` as CSV with a header row.
///
/// # Errors
/// [`TimetableError::EmptySchedule`] if there are no entries.
pub fn write_schedule<W: Write>(schedule: &Schedule, writer: W) -> Result<()> {
    if schedule.is_empty() {
        return Err(TimetableError::EmptySchedule);
    }
    let mut writer = csv::Writer::from_writer(writer);
    for entry in schedule {
        writer.serialize(entry).map_err(csv_error("schedule"))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes `schedule` to `path`, creating parent directories.
///
/// Nothing is created on disk for an empty schedule.
pub fn save_schedule(schedule: &Schedule, path: impl AsRef<Path>) -> Result<()> {
    if schedule.is_empty() {
        return Err(TimetableError::EmptySchedule);
    }
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    write_schedule(schedule, File::create(path)?)
}
