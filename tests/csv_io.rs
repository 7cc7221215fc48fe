use std::fs;
use std::path::Path;

use u_timetable::ga::{is_feasible, GaConfig, SilentProgress};
use u_timetable::io::{load_catalog_dir, save_schedule};
use u_timetable::models::{Day, Entry, Schedule};
use u_timetable::scheduler::TimetableScheduler;
use u_timetable::TimetableError;

fn write_catalog(dir: &Path) {
    fs::write(dir.join("groups.csv"), "name,num_students\nG1,20\nG2,25\n").unwrap();
    fs::write(
        dir.join("teachers.csv"),
        "name,courses\nSmith,\"Math,Physics\"\nJones,Math\n",
    )
    .unwrap();
    fs::write(
        dir.join("courses.csv"),
        "name,hours,groups\nMath,2,\"G1,G2\"\nPhysics,1,G2\n",
    )
    .unwrap();
    fs::write(dir.join("rooms.csv"), "name,capacity\nR1,30\nR2,30\n").unwrap();
}

#[test]
fn catalog_loads_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());

    let catalog = load_catalog_dir(dir.path()).unwrap();
    assert_eq!(catalog.groups().len(), 2);
    assert_eq!(catalog.teachers().len(), 2);
    assert_eq!(catalog.rooms().len(), 2);
    assert_eq!(catalog.required_hours(), 5);
    assert!(catalog.teacher("Smith").unwrap().can_teach("Physics"));
    assert_eq!(catalog.eligible_teachers("Math").len(), 2);
}

#[test]
fn missing_catalog_file_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());
    fs::remove_file(dir.path().join("rooms.csv")).unwrap();

    match load_catalog_dir(dir.path()) {
        Err(TimetableError::CatalogFile { file, source }) => {
            assert_eq!(file, "rooms.csv");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected missing file error, got {other:?}"),
    }
}

#[test]
fn non_numeric_count_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());
    fs::write(dir.path().join("groups.csv"), "name,num_students\nG1,many\n").unwrap();

    match load_catalog_dir(dir.path()) {
        Err(TimetableError::Csv { file, .. }) => assert_eq!(file, "groups.csv"),
        other => panic!("expected csv error, got {other:?}"),
    }
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("schedule.csv");
    let mut schedule = Schedule::new();
    schedule.push(Entry::new(Day::Tuesday, 2, "R1", "G1", "Math", "Smith"));

    save_schedule(&schedule, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines, vec!["day,slot,room,group,course,teacher", "Tuesday,2,R1,G1,Math,Smith"]);
}

#[test]
fn empty_schedule_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output").join("schedule.csv");

    let err = save_schedule(&Schedule::new(), &path).unwrap_err();
    assert!(matches!(err, TimetableError::EmptySchedule));
    assert!(!path.exists());
    assert!(!dir.path().join("output").exists());
}

#[test]
fn loaded_catalog_solves_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    write_catalog(dir.path());
    let catalog = load_catalog_dir(dir.path()).unwrap();
    let required = catalog.required_hours();

    let config = GaConfig::default().with_seed(42).with_max_generations(100);
    let solution = TimetableScheduler::new(catalog, config)
        .solve(&mut SilentProgress)
        .unwrap();
    assert!(is_feasible(solution.schedule()));
    assert_eq!(solution.schedule().len(), required);

    let path = dir.path().join("out.csv");
    save_schedule(solution.schedule(), &path).unwrap();
    let rows = fs::read_to_string(&path).unwrap().lines().count();
    assert_eq!(rows, required + 1);
}
