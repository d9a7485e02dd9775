//! Database schema for the planner store.
//!
//! Executed once at process start when the store file does not exist yet.
//! Column names double as JSON response keys, so they keep their SQL casing.

/// SQL schema for creating the planner database tables.
pub const SCHEMA_SQL: &str = r#"
-- Student accounts
CREATE TABLE IF NOT EXISTS Student (
    NetID TEXT PRIMARY KEY,
    Name TEXT NOT NULL,
    Expected_Graduation TEXT,
    MajorID INTEGER
);

-- Course catalog
CREATE TABLE IF NOT EXISTS Course_Catalog (
    CourseID TEXT PRIMARY KEY,
    Credits REAL NOT NULL
);

-- Academic plans, one student to many plans
CREATE TABLE IF NOT EXISTS Academic_Plan (
    PlanID INTEGER PRIMARY KEY,
    CreationDate TEXT,
    NetID TEXT REFERENCES Student(NetID)
);

-- Courses placed into a plan
CREATE TABLE IF NOT EXISTS Planned_Course (
    PlanID INTEGER NOT NULL REFERENCES Academic_Plan(PlanID) ON DELETE CASCADE,
    CourseID TEXT NOT NULL REFERENCES Course_Catalog(CourseID),
    Credits REAL,
    Semester TEXT,
    PRIMARY KEY (PlanID, CourseID)
);

-- Prerequisite relation: CourseID requires PrerequisiteID
CREATE TABLE IF NOT EXISTS Prerequisite (
    CourseID TEXT NOT NULL REFERENCES Course_Catalog(CourseID),
    PrerequisiteID TEXT NOT NULL REFERENCES Course_Catalog(CourseID),
    PRIMARY KEY (CourseID, PrerequisiteID)
);

-- Indexes for common queries
CREATE INDEX IF NOT EXISTS idx_plan_netid ON Academic_Plan(NetID);
CREATE INDEX IF NOT EXISTS idx_prereq_course ON Prerequisite(CourseID);
"#;
